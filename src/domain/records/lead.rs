//! Lead records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::access::OwnedByAgent;
use crate::domain::value_objects::{AgentId, Email, LeadId, Money, Phone};

/// A sales lead assigned to an agent
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: LeadId,
    pub full_name: String,
    pub email: Email,
    pub phone: Phone,
    pub company: String,
    pub stage: LeadStage,
    pub status: LeadStatus,
    pub assigned_to: AgentId,
    pub country: String,
    pub created_at: DateTime<Utc>,
    pub revenue_potential: Money,
}

impl Lead {
    pub fn is_won(&self) -> bool {
        self.status == LeadStatus::Won
    }

    pub fn is_lost(&self) -> bool {
        self.status == LeadStatus::Lost
    }

    /// Neither won nor lost yet
    pub fn is_open(&self) -> bool {
        !self.is_won() && !self.is_lost()
    }
}

impl OwnedByAgent for Lead {
    fn assigned_to(&self) -> &AgentId {
        &self.assigned_to
    }
}

/// Funnel stage of a lead
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LeadStage {
    New,
    Qualified,
    Nurtured,
    Converted,
}

/// Working status of a lead
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LeadStatus {
    Uncontacted,
    AttemptedContact,
    Interested,
    NotInterested,
    InDiscussion,
    Won,
    Lost,
}

impl LeadStatus {
    /// Roll the seven working statuses up into the four display buckets.
    pub fn bucket(&self) -> StatusBucket {
        match self {
            Self::Uncontacted | Self::AttemptedContact => StatusBucket::New,
            Self::Interested => StatusBucket::Interested,
            Self::InDiscussion => StatusBucket::InProgress,
            Self::Won | Self::Lost | Self::NotInterested => StatusBucket::Closed,
        }
    }
}

/// Four-bucket rollup of [`LeadStatus`] used by the status pie
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StatusBucket {
    New,
    Interested,
    InProgress,
    Closed,
}
