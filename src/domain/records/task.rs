//! Scheduled tasks

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::access::OwnedByAgent;
use crate::domain::value_objects::{AgentId, LeadId, TaskId};

/// A scheduled follow-up task assigned to an agent
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScheduledTask {
    pub id: TaskId,
    pub lead_id: LeadId,
    pub task_type: TaskType,
    pub title: String,
    pub scheduled_at: DateTime<Utc>,
    pub status: TaskStatus,
    pub assigned_to: AgentId,
}

impl ScheduledTask {
    /// Pending or in progress
    pub fn is_open(&self) -> bool {
        matches!(self.status, TaskStatus::Pending | TaskStatus::InProgress)
    }

    /// Open and scheduled before `today`
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.is_open() && self.scheduled_at.date_naive() < today
    }

    /// Pending and scheduled on or after `today`
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.status == TaskStatus::Pending && self.scheduled_at.date_naive() >= today
    }
}

impl OwnedByAgent for ScheduledTask {
    fn assigned_to(&self) -> &AgentId {
        &self.assigned_to
    }
}

/// Kind of follow-up activity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TaskType {
    Call,
    Email,
    Meeting,
    Demo,
    WhatsApp,
}

/// Workflow status of a task
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
    Overdue,
}
