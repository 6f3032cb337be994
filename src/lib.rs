//! NSP-CRM Analytics Core
//!
//! Headless core of the role-gated CRM analytics dashboard.
//!
//! ## Architecture
//!
//! - **Domain Layer**: record types, value objects, the access policy and
//!   pure aggregation services
//! - **Application Layer**: dashboard query orchestration, view DTOs
//! - **Ports Layer**: hexagonal architecture interfaces
//! - **Infrastructure Layer**: in-memory dataset store, synthetic data
//!
//! ## Key Concepts
//!
//! - **Scope resolution**: a viewer's role and agent selection resolve to an
//!   [`EffectiveScope`]: all agents, or a single named agent. Agent-role
//!   viewers are always pinned to their own identity.
//! - **Scoped filtering**: each dataset (leads, calls, tasks, availability)
//!   is filtered through the resolved scope before any aggregation.
//! - **Dashboard views**: per-role read models carrying the chart inputs
//!   (funnels, distributions, per-agent performance, utilization).

pub mod domain;
pub mod application;
pub mod ports;
pub mod infrastructure;

// Re-exports for convenience
pub use domain::access::{resolve, AccessError, EffectiveScope, OwnedByAgent, Role, Selection};
pub use domain::records::{
    AvailabilitySlot, AvailabilityStatus, CallRecord, CallStatus, Lead, LeadStage, LeadStatus,
    ScheduledTask, Sentiment, StatusBucket, TaskStatus, TaskType,
};
pub use domain::services::{
    AgentCallStats, AgentLeadStats, AgentUtilization, AvailabilityAnalytics, CallAnalytics,
    CountryLeadStats, DailyCallStats, LeadAnalytics, TaskAnalytics,
};
pub use domain::value_objects::{AgentId, CallId, Currency, Email, LeadId, Money, Phone, TaskId};
pub use application::dto::{
    AgentDashboardView, CompanyDashboardView, ConversionSummary, ScopedDatasets,
    TeamDashboardView,
};
pub use application::DashboardService;
pub use ports::inbound::{DashboardQueries, UseCaseError};
pub use ports::outbound::{DatasetRepository, RepositoryError};
pub use infrastructure::persistence::InMemoryDatasetStore;
pub use infrastructure::synthetic::{SyntheticConfig, SyntheticData};
