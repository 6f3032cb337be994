//! Data Transfer Objects (DTOs)
//!
//! Read models handed to presentation code. Charts, tables and metric tiles
//! render directly from these; nothing here is recomputed downstream.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::access::EffectiveScope;
use crate::domain::records::{
    AvailabilitySlot, CallRecord, Lead, LeadStage, LeadStatus, ScheduledTask, StatusBucket,
    TaskStatus,
};
use crate::domain::services::{
    AgentCallStats, AgentLeadStats, AgentUtilization, CountryLeadStats, DailyCallStats,
};
use crate::domain::value_objects::AgentId;

/// The four datasets filtered through a resolved scope, plus the scope
/// itself for display ("Viewing: All Agents" / "Viewing: Agent 3").
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScopedDatasets {
    pub leads: Vec<Lead>,
    pub calls: Vec<CallRecord>,
    pub tasks: Vec<ScheduledTask>,
    pub availability: Vec<AvailabilitySlot>,
    pub scope: EffectiveScope,
    pub description: String,
}

/// Personal dashboard for a single agent
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AgentDashboardView {
    pub identity: AgentId,
    pub lead_count: usize,
    pub won_count: usize,
    pub call_count: usize,
    pub pending_task_count: usize,
    pub status_counts: BTreeMap<LeadStatus, usize>,
    pub stage_counts: BTreeMap<LeadStage, usize>,
    pub recent_leads: Vec<Lead>,
    pub upcoming_tasks: Vec<ScheduledTask>,
    pub overdue_tasks: Vec<ScheduledTask>,
}

/// Team oversight dashboard for management roles
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TeamDashboardView {
    pub description: String,
    pub lead_count: usize,
    pub active_agents: usize,
    pub call_count: usize,
    pub pending_task_count: usize,
    pub agent_performance: Vec<AgentLeadStats>,
    pub task_distribution: BTreeMap<AgentId, BTreeMap<TaskStatus, usize>>,
    pub overdue_by_agent: BTreeMap<AgentId, usize>,
    pub critical_overdue: Vec<ScheduledTask>,
    pub call_stats: Vec<AgentCallStats>,
    pub daily_calls: Vec<DailyCallStats>,
}

/// Company-wide analytics dashboard for management roles
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CompanyDashboardView {
    pub description: String,
    pub lead_count: usize,
    pub won_count: usize,
    pub conversion_rate: f64,
    pub won_revenue: Decimal,
    pub active_agents: usize,
    pub bucket_counts: BTreeMap<StatusBucket, usize>,
    pub stage_counts: BTreeMap<LeadStage, usize>,
    pub call_count: usize,
    pub call_success_rate: f64,
    pub average_call_minutes: f64,
    pub daily_calls: Vec<DailyCallStats>,
    pub upcoming_call_count: usize,
    pub overdue_task_count: usize,
    pub task_completion_rate: f64,
    pub task_status_counts: BTreeMap<TaskStatus, usize>,
    pub utilization: Vec<AgentUtilization>,
    pub revenue_by_stage: BTreeMap<LeadStage, Decimal>,
    pub conversion_summary: ConversionSummary,
    pub country_stats: Vec<CountryLeadStats>,
}

/// Converted vs dropped vs still-in-progress lead counts
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionSummary {
    pub converted: usize,
    pub dropped: usize,
    pub in_progress: usize,
}
