//! Dataset record types
//!
//! Row types for the four datasets the dashboard consumes: leads, call
//! records, scheduled tasks and agent availability. Every row names its
//! owning agent and can therefore be filtered through an
//! [`EffectiveScope`](crate::domain::access::EffectiveScope).

pub mod availability;
pub mod call;
pub mod lead;
pub mod task;

pub use availability::{AvailabilitySlot, AvailabilityStatus};
pub use call::{CallRecord, CallStatus, Sentiment};
pub use lead::{Lead, LeadStage, LeadStatus, StatusBucket};
pub use task::{ScheduledTask, TaskStatus, TaskType};
