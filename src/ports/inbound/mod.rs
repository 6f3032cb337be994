//! Inbound ports (Use case traits)
//!
//! Application service interfaces consumed by presentation code.

use chrono::NaiveDate;
use thiserror::Error;

use crate::application::dto::{
    AgentDashboardView, CompanyDashboardView, ScopedDatasets, TeamDashboardView,
};
use crate::domain::access::{Role, Selection};
use crate::domain::value_objects::AgentId;
use crate::ports::outbound::RepositoryError;

/// Dashboard query use cases.
///
/// All methods are synchronous reads; `today` is passed explicitly so the
/// results are a pure function of the inputs.
pub trait DashboardQueries: Send + Sync {
    /// Resolve the viewer's scope and return the four datasets filtered
    /// through it, together with the scope descriptor for display.
    fn scoped_datasets(
        &self,
        role: Role,
        own_identity: &AgentId,
        requested: &Selection,
    ) -> Result<ScopedDatasets, UseCaseError>;

    /// Personal dashboard for one agent: own rows only.
    fn agent_dashboard(
        &self,
        identity: &AgentId,
        today: NaiveDate,
    ) -> Result<AgentDashboardView, UseCaseError>;

    /// Team oversight dashboard. Management roles only.
    fn team_dashboard(
        &self,
        role: Role,
        requested: &Selection,
        today: NaiveDate,
    ) -> Result<TeamDashboardView, UseCaseError>;

    /// Company-wide analytics dashboard. Management roles only.
    fn company_dashboard(
        &self,
        role: Role,
        requested: &Selection,
        today: NaiveDate,
    ) -> Result<CompanyDashboardView, UseCaseError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UseCaseError {
    #[error("role {0} is not permitted to view this dashboard")]
    Unauthorized(Role),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
