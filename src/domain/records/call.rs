//! Call records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::access::OwnedByAgent;
use crate::domain::value_objects::{AgentId, CallId, LeadId};

/// A logged call placed by an agent against a lead
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CallRecord {
    pub id: CallId,
    pub lead_id: LeadId,
    pub assigned_to: AgentId,
    pub called_at: DateTime<Utc>,
    pub duration_seconds: u32,
    pub status: CallStatus,
    pub sentiment: Sentiment,
    pub summary: String,
}

impl CallRecord {
    pub fn is_completed(&self) -> bool {
        self.status == CallStatus::Completed
    }

    pub fn duration_minutes(&self) -> f64 {
        f64::from(self.duration_seconds) / 60.0
    }
}

impl OwnedByAgent for CallRecord {
    fn assigned_to(&self) -> &AgentId {
        &self.assigned_to
    }
}

/// Outcome of a call
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CallStatus {
    Completed,
    Missed,
    Declined,
    Failed,
}

/// Sentiment assessed for a completed conversation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}
