//! Agent availability slots

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::access::OwnedByAgent;
use crate::domain::value_objects::AgentId;

/// One working hour of one agent's day
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    pub agent: AgentId,
    pub date: NaiveDate,
    /// Hour of day, 24h clock (working hours are 9..=17)
    pub hour: u8,
    pub status: AvailabilityStatus,
}

impl OwnedByAgent for AvailabilitySlot {
    fn assigned_to(&self) -> &AgentId {
        &self.agent
    }
}

/// What an agent was doing during a slot
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AvailabilityStatus {
    Available,
    Busy,
    Break,
}
