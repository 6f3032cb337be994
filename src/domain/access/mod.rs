//! Role-scoped data access policy
//!
//! Every dashboard query passes through two steps: resolve the viewer's
//! [`EffectiveScope`] from their role and agent selection, then filter each
//! dataset through that scope. Both steps are pure functions.
//!
//! The one rule that must hold everywhere: an Agent-role viewer sees their
//! own rows and nothing else. [`resolve`] enforces this by pinning the scope
//! to the viewer's own identity regardless of the requested selection; the
//! policy fails closed, it does not merely default.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

use crate::domain::value_objects::AgentId;

/// Organizational level of a viewer.
///
/// Determines the ceiling of visibility: `Agent` is restricted to their own
/// rows; every management role may view any single agent or all agents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Agent,
    TeamLead,
    Manager,
    HigherManagement,
}

impl Role {
    /// Whether this role may widen its view beyond a single own identity.
    pub fn can_view_all_agents(&self) -> bool {
        !matches!(self, Role::Agent)
    }

    /// The UI label for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Agent => "Agent",
            Self::TeamLead => "Team Lead",
            Self::Manager => "Manager",
            Self::HigherManagement => "Higher Management",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = AccessError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "Agent" => Ok(Self::Agent),
            "Team Lead" => Ok(Self::TeamLead),
            "Manager" => Ok(Self::Manager),
            "Higher Management" => Ok(Self::HigherManagement),
            other => Err(AccessError::UnknownRole(other.to_string())),
        }
    }
}

/// Sentinel label for the company-wide selection.
pub const ALL_AGENTS: &str = "All Agents";

/// A viewer's requested viewing target: a specific agent or all agents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    AllAgents,
    Agent(AgentId),
}

impl Selection {
    pub fn agent(id: impl Into<String>) -> Self {
        Self::Agent(AgentId::new(id))
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllAgents => write!(f, "{}", ALL_AGENTS),
            Self::Agent(id) => write!(f, "{}", id),
        }
    }
}

impl FromStr for Selection {
    type Err = AccessError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.is_empty() {
            return Err(AccessError::EmptySelection);
        }
        if value == ALL_AGENTS {
            Ok(Self::AllAgents)
        } else {
            Ok(Self::Agent(AgentId::new(value)))
        }
    }
}

/// Resolved visibility scope for a viewer. No other variant exists: a scope
/// is either the whole roster or exactly one agent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectiveScope {
    All,
    Single(AgentId),
}

impl EffectiveScope {
    /// Whether rows owned by `agent` are visible under this scope.
    pub fn permits(&self, agent: &AgentId) -> bool {
        match self {
            Self::All => true,
            Self::Single(id) => id == agent,
        }
    }

    /// Apply this scope as a predicate over a dataset.
    ///
    /// `All` returns the rows unchanged; `Single(id)` keeps exactly the rows
    /// owned by `id`. Order is preserved and an empty result is a legitimate,
    /// displayable outcome, not an error.
    pub fn filter<T>(&self, rows: &[T]) -> Vec<T>
    where
        T: OwnedByAgent + Clone,
    {
        match self {
            Self::All => rows.to_vec(),
            Self::Single(_) => rows
                .iter()
                .filter(|row| self.permits(row.assigned_to()))
                .cloned()
                .collect(),
        }
    }
}

impl fmt::Display for EffectiveScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "{}", ALL_AGENTS),
            Self::Single(id) => write!(f, "{}", id),
        }
    }
}

impl From<&Selection> for EffectiveScope {
    fn from(selection: &Selection) -> Self {
        match selection {
            Selection::AllAgents => Self::All,
            Selection::Agent(id) => Self::Single(id.clone()),
        }
    }
}

/// Row types carrying an owning-agent attribute.
///
/// The seam between the access policy and the datasets: any row type that
/// names its owner can be filtered through an [`EffectiveScope`].
pub trait OwnedByAgent {
    fn assigned_to(&self) -> &AgentId;
}

/// Resolve the effective visibility scope for a viewer.
///
/// Agent-role viewers are pinned to `own_identity` unconditionally; the
/// requested selection is ignored rather than honored, so presentation code
/// can never coerce the scope wider. Management roles map their selection
/// directly: `"All Agents"` to [`EffectiveScope::All`], a named agent to
/// [`EffectiveScope::Single`]. For management roles `own_identity` is unused.
pub fn resolve(role: Role, own_identity: &AgentId, requested: &Selection) -> EffectiveScope {
    match role {
        Role::Agent => {
            if !matches!(requested, Selection::Agent(id) if id == own_identity) {
                debug!(
                    agent = %own_identity,
                    requested = %requested,
                    "agent selection overridden to own identity"
                );
            }
            EffectiveScope::Single(own_identity.clone())
        }
        Role::TeamLead | Role::Manager | Role::HigherManagement => EffectiveScope::from(requested),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    #[error("unknown role: {0}")]
    UnknownRole(String),
    #[error("selection is empty")]
    EmptySelection,
}
