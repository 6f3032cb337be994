//! Outbound ports (Repository traits)
//!
//! Interfaces the infrastructure must implement. The core never reads a
//! dataset except through this port.

use thiserror::Error;

use crate::domain::records::{AvailabilitySlot, CallRecord, Lead, ScheduledTask};

/// Source of the four raw, unfiltered datasets.
///
/// Implementations return owned snapshots; callers filter them through an
/// [`EffectiveScope`](crate::domain::access::EffectiveScope) before use.
pub trait DatasetRepository: Send + Sync {
    fn leads(&self) -> Result<Vec<Lead>, RepositoryError>;

    fn calls(&self) -> Result<Vec<CallRecord>, RepositoryError>;

    fn tasks(&self) -> Result<Vec<ScheduledTask>, RepositoryError>;

    fn availability(&self) -> Result<Vec<AvailabilitySlot>, RepositoryError>;
}

/// Repository error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("dataset unavailable: {0}")]
    Unavailable(String),
}
