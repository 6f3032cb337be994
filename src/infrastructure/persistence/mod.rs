//! In-memory dataset store

use chrono::{DateTime, Utc};

use crate::domain::records::{AvailabilitySlot, CallRecord, Lead, ScheduledTask};
use crate::infrastructure::synthetic::{SyntheticConfig, SyntheticData};
use crate::ports::outbound::{DatasetRepository, RepositoryError};

/// Owns the four immutable datasets and serves snapshots of them.
///
/// The datasets never change after construction, so reads clone and there is
/// no interior mutability to guard.
pub struct InMemoryDatasetStore {
    leads: Vec<Lead>,
    calls: Vec<CallRecord>,
    tasks: Vec<ScheduledTask>,
    availability: Vec<AvailabilitySlot>,
}

impl InMemoryDatasetStore {
    pub fn from_parts(
        leads: Vec<Lead>,
        calls: Vec<CallRecord>,
        tasks: Vec<ScheduledTask>,
        availability: Vec<AvailabilitySlot>,
    ) -> Self {
        Self {
            leads,
            calls,
            tasks,
            availability,
        }
    }

    /// Build a store populated with generated data, anchored at `now`.
    pub fn synthetic(config: &SyntheticConfig, now: DateTime<Utc>) -> Self {
        let data = SyntheticData::generate(config, now);
        Self::from_parts(data.leads, data.calls, data.tasks, data.availability)
    }
}

impl DatasetRepository for InMemoryDatasetStore {
    fn leads(&self) -> Result<Vec<Lead>, RepositoryError> {
        Ok(self.leads.clone())
    }

    fn calls(&self) -> Result<Vec<CallRecord>, RepositoryError> {
        Ok(self.calls.clone())
    }

    fn tasks(&self) -> Result<Vec<ScheduledTask>, RepositoryError> {
        Ok(self.tasks.clone())
    }

    fn availability(&self) -> Result<Vec<AvailabilitySlot>, RepositoryError> {
        Ok(self.availability.clone())
    }
}
