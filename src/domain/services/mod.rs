//! Domain services module
//!
//! Pure aggregation services producing the dashboard chart inputs. Every
//! function is a pure read over a dataset slice; clock-dependent operations
//! take `today` explicitly. Ratios are percentages in 0..=100 and are 0.0
//! over empty input, never a division error.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::records::{
    AvailabilitySlot, AvailabilityStatus, CallRecord, Lead, LeadStage, LeadStatus, ScheduledTask,
    Sentiment, StatusBucket, TaskStatus, TaskType,
};
use crate::domain::value_objects::AgentId;

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// Per-agent lead performance
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentLeadStats {
    pub agent: AgentId,
    pub total_leads: usize,
    pub won_leads: usize,
    /// Percentage of this agent's leads that closed won
    pub conversion_rate: f64,
}

/// Per-agent call performance
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentCallStats {
    pub agent: AgentId,
    pub total_calls: usize,
    pub completed_calls: usize,
    pub success_rate: f64,
}

/// One day of call activity
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DailyCallStats {
    pub date: NaiveDate,
    pub total_calls: usize,
    pub completed_calls: usize,
    pub success_rate: f64,
}

/// Per-country lead performance
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CountryLeadStats {
    pub country: String,
    pub total_leads: usize,
    pub won_leads: usize,
    pub revenue_potential: Decimal,
    pub response_rate: f64,
}

/// Per-agent utilization derived from availability slots
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentUtilization {
    pub agent: AgentId,
    pub available: usize,
    pub busy: usize,
    pub on_break: usize,
    /// busy / (busy + available), as a percentage
    pub utilization_rate: f64,
}

/// Lead funnel and revenue aggregations
pub struct LeadAnalytics;

impl LeadAnalytics {
    pub fn status_counts(leads: &[Lead]) -> BTreeMap<LeadStatus, usize> {
        let mut counts = BTreeMap::new();
        for lead in leads {
            *counts.entry(lead.status).or_insert(0) += 1;
        }
        counts
    }

    pub fn stage_counts(leads: &[Lead]) -> BTreeMap<LeadStage, usize> {
        let mut counts = BTreeMap::new();
        for lead in leads {
            *counts.entry(lead.stage).or_insert(0) += 1;
        }
        counts
    }

    /// Status counts rolled up into the four display buckets
    pub fn bucket_counts(leads: &[Lead]) -> BTreeMap<StatusBucket, usize> {
        let mut counts = BTreeMap::new();
        for lead in leads {
            *counts.entry(lead.status.bucket()).or_insert(0) += 1;
        }
        counts
    }

    pub fn won_count(leads: &[Lead]) -> usize {
        leads.iter().filter(|l| l.is_won()).count()
    }

    /// Percentage of leads that closed won
    pub fn conversion_rate(leads: &[Lead]) -> f64 {
        percentage(Self::won_count(leads), leads.len())
    }

    /// Total revenue potential of won leads
    pub fn won_revenue(leads: &[Lead]) -> Decimal {
        leads
            .iter()
            .filter(|l| l.is_won())
            .map(|l| l.revenue_potential.amount())
            .sum()
    }

    pub fn revenue_by_stage(leads: &[Lead]) -> BTreeMap<LeadStage, Decimal> {
        let mut totals = BTreeMap::new();
        for lead in leads {
            *totals.entry(lead.stage).or_insert(Decimal::ZERO) += lead.revenue_potential.amount();
        }
        totals
    }

    /// Number of distinct agents owning at least one lead
    pub fn active_agents(leads: &[Lead]) -> usize {
        leads
            .iter()
            .map(|l| &l.assigned_to)
            .collect::<std::collections::BTreeSet<_>>()
            .len()
    }

    /// Per-agent totals, won counts and conversion rates
    pub fn agent_performance(leads: &[Lead]) -> Vec<AgentLeadStats> {
        let mut grouped: BTreeMap<AgentId, (usize, usize)> = BTreeMap::new();
        for lead in leads {
            let entry = grouped.entry(lead.assigned_to.clone()).or_insert((0, 0));
            entry.0 += 1;
            if lead.is_won() {
                entry.1 += 1;
            }
        }
        grouped
            .into_iter()
            .map(|(agent, (total, won))| AgentLeadStats {
                agent,
                total_leads: total,
                won_leads: won,
                conversion_rate: percentage(won, total),
            })
            .collect()
    }

    /// Per-country totals, won counts, revenue and response rates
    pub fn country_breakdown(leads: &[Lead]) -> Vec<CountryLeadStats> {
        let mut grouped: BTreeMap<String, (usize, usize, Decimal)> = BTreeMap::new();
        for lead in leads {
            let entry = grouped
                .entry(lead.country.clone())
                .or_insert((0, 0, Decimal::ZERO));
            entry.0 += 1;
            if lead.is_won() {
                entry.1 += 1;
            }
            entry.2 += lead.revenue_potential.amount();
        }
        grouped
            .into_iter()
            .map(|(country, (total, won, revenue))| CountryLeadStats {
                country,
                total_leads: total,
                won_leads: won,
                revenue_potential: revenue,
                response_rate: percentage(won, total),
            })
            .collect()
    }

    /// The `n` most recently created leads, newest first
    pub fn recent(leads: &[Lead], n: usize) -> Vec<Lead> {
        let mut sorted = leads.to_vec();
        sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        sorted.truncate(n);
        sorted
    }
}

/// Call activity aggregations
pub struct CallAnalytics;

impl CallAnalytics {
    pub fn completed_count(calls: &[CallRecord]) -> usize {
        calls.iter().filter(|c| c.is_completed()).count()
    }

    /// Percentage of calls that completed
    pub fn success_rate(calls: &[CallRecord]) -> f64 {
        percentage(Self::completed_count(calls), calls.len())
    }

    pub fn average_duration_minutes(calls: &[CallRecord]) -> f64 {
        if calls.is_empty() {
            return 0.0;
        }
        let total_seconds: u64 = calls.iter().map(|c| u64::from(c.duration_seconds)).sum();
        total_seconds as f64 / calls.len() as f64 / 60.0
    }

    pub fn sentiment_counts(calls: &[CallRecord]) -> BTreeMap<Sentiment, usize> {
        let mut counts = BTreeMap::new();
        for call in calls {
            *counts.entry(call.sentiment).or_insert(0) += 1;
        }
        counts
    }

    /// Per-day call volume and success rate, ascending by date
    pub fn daily_series(calls: &[CallRecord]) -> Vec<DailyCallStats> {
        let mut grouped: BTreeMap<NaiveDate, (usize, usize)> = BTreeMap::new();
        for call in calls {
            let entry = grouped.entry(call.called_at.date_naive()).or_insert((0, 0));
            entry.0 += 1;
            if call.is_completed() {
                entry.1 += 1;
            }
        }
        grouped
            .into_iter()
            .map(|(date, (total, completed))| DailyCallStats {
                date,
                total_calls: total,
                completed_calls: completed,
                success_rate: percentage(completed, total),
            })
            .collect()
    }

    /// Per-agent call volume and success rate
    pub fn agent_stats(calls: &[CallRecord]) -> Vec<AgentCallStats> {
        let mut grouped: BTreeMap<AgentId, (usize, usize)> = BTreeMap::new();
        for call in calls {
            let entry = grouped.entry(call.assigned_to.clone()).or_insert((0, 0));
            entry.0 += 1;
            if call.is_completed() {
                entry.1 += 1;
            }
        }
        grouped
            .into_iter()
            .map(|(agent, (total, completed))| AgentCallStats {
                agent,
                total_calls: total,
                completed_calls: completed,
                success_rate: percentage(completed, total),
            })
            .collect()
    }
}

/// Task board aggregations
pub struct TaskAnalytics;

impl TaskAnalytics {
    /// Days late before an overdue task counts as critical
    const CRITICAL_DAYS: i64 = 3;

    pub fn status_counts(tasks: &[ScheduledTask]) -> BTreeMap<TaskStatus, usize> {
        let mut counts = BTreeMap::new();
        for task in tasks {
            *counts.entry(task.status).or_insert(0) += 1;
        }
        counts
    }

    pub fn pending_count(tasks: &[ScheduledTask]) -> usize {
        tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Pending)
            .count()
    }

    /// Pending tasks scheduled on or after `today`, earliest first
    pub fn upcoming(tasks: &[ScheduledTask], today: NaiveDate) -> Vec<ScheduledTask> {
        let mut upcoming: Vec<ScheduledTask> = tasks
            .iter()
            .filter(|t| t.is_upcoming(today))
            .cloned()
            .collect();
        upcoming.sort_by(|a, b| a.scheduled_at.cmp(&b.scheduled_at));
        upcoming
    }

    /// Open tasks scheduled before `today`, earliest first
    pub fn overdue(tasks: &[ScheduledTask], today: NaiveDate) -> Vec<ScheduledTask> {
        let mut overdue: Vec<ScheduledTask> = tasks
            .iter()
            .filter(|t| t.is_overdue(today))
            .cloned()
            .collect();
        overdue.sort_by(|a, b| a.scheduled_at.cmp(&b.scheduled_at));
        overdue
    }

    /// Open tasks more than [`Self::CRITICAL_DAYS`] days late, earliest first
    pub fn critical_overdue(tasks: &[ScheduledTask], today: NaiveDate) -> Vec<ScheduledTask> {
        let cutoff = today - Duration::days(Self::CRITICAL_DAYS);
        let mut critical: Vec<ScheduledTask> = tasks
            .iter()
            .filter(|t| t.is_open() && t.scheduled_at.date_naive() < cutoff)
            .cloned()
            .collect();
        critical.sort_by(|a, b| a.scheduled_at.cmp(&b.scheduled_at));
        critical
    }

    /// Percentage of tasks completed
    pub fn completion_rate(tasks: &[ScheduledTask]) -> f64 {
        let completed = tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Completed)
            .count();
        percentage(completed, tasks.len())
    }

    /// Task counts per agent, broken down by status
    pub fn distribution_by_agent(
        tasks: &[ScheduledTask],
    ) -> BTreeMap<AgentId, BTreeMap<TaskStatus, usize>> {
        let mut grouped: BTreeMap<AgentId, BTreeMap<TaskStatus, usize>> = BTreeMap::new();
        for task in tasks {
            *grouped
                .entry(task.assigned_to.clone())
                .or_default()
                .entry(task.status)
                .or_insert(0) += 1;
        }
        grouped
    }

    /// Overdue task counts per agent
    pub fn overdue_by_agent(
        tasks: &[ScheduledTask],
        today: NaiveDate,
    ) -> BTreeMap<AgentId, usize> {
        let mut grouped = BTreeMap::new();
        for task in tasks.iter().filter(|t| t.is_overdue(today)) {
            *grouped.entry(task.assigned_to.clone()).or_insert(0) += 1;
        }
        grouped
    }

    /// Pending call-type tasks scheduled on or after `today`
    pub fn upcoming_call_count(tasks: &[ScheduledTask], today: NaiveDate) -> usize {
        tasks
            .iter()
            .filter(|t| t.task_type == TaskType::Call && t.is_upcoming(today))
            .count()
    }
}

/// Agent availability aggregations
pub struct AvailabilityAnalytics;

impl AvailabilityAnalytics {
    pub fn status_counts_by_agent(
        slots: &[AvailabilitySlot],
    ) -> BTreeMap<AgentId, BTreeMap<AvailabilityStatus, usize>> {
        let mut grouped: BTreeMap<AgentId, BTreeMap<AvailabilityStatus, usize>> = BTreeMap::new();
        for slot in slots {
            *grouped
                .entry(slot.agent.clone())
                .or_default()
                .entry(slot.status)
                .or_insert(0) += 1;
        }
        grouped
    }

    /// Per-agent utilization: busy / (busy + available). Agents with no
    /// busy or available slots at all are omitted.
    pub fn utilization(slots: &[AvailabilitySlot]) -> Vec<AgentUtilization> {
        Self::status_counts_by_agent(slots)
            .into_iter()
            .filter_map(|(agent, counts)| {
                let available = counts.get(&AvailabilityStatus::Available).copied().unwrap_or(0);
                let busy = counts.get(&AvailabilityStatus::Busy).copied().unwrap_or(0);
                let on_break = counts.get(&AvailabilityStatus::Break).copied().unwrap_or(0);
                if available + busy == 0 {
                    return None;
                }
                Some(AgentUtilization {
                    agent,
                    available,
                    busy,
                    on_break,
                    utilization_rate: percentage(busy, busy + available),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::records::CallStatus;
    use crate::domain::value_objects::{CallId, Currency, Email, LeadId, Money, Phone, TaskId};
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    fn lead(id: u32, agent: u32, status: LeadStatus, revenue: i64) -> Lead {
        Lead {
            id: LeadId::new(id),
            full_name: format!("Lead {}", id),
            email: Email::new_unchecked(format!("lead{}@email.com", id)),
            phone: Phone::new_unchecked("966", "123456"),
            company: format!("Company {}", id % 5),
            stage: LeadStage::New,
            status,
            assigned_to: AgentId::numbered(agent),
            country: "UAE".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
                + Duration::hours(i64::from(id)),
            revenue_potential: Money::from_cents(revenue * 100, Currency::Usd),
        }
    }

    fn call(id: u32, agent: u32, status: CallStatus, day: u32) -> CallRecord {
        CallRecord {
            id: CallId::new(id),
            lead_id: LeadId::new(1),
            assigned_to: AgentId::numbered(agent),
            called_at: Utc.with_ymd_and_hms(2024, 6, day, 10, 0, 0).unwrap(),
            duration_seconds: 120,
            status,
            sentiment: Sentiment::Neutral,
            summary: String::new(),
        }
    }

    fn task(id: u32, agent: u32, status: TaskStatus, day: u32) -> ScheduledTask {
        ScheduledTask {
            id: TaskId::new(id),
            lead_id: LeadId::new(1),
            task_type: TaskType::Call,
            title: format!("Task {}", id),
            scheduled_at: Utc.with_ymd_and_hms(2024, 6, day, 9, 0, 0).unwrap(),
            status,
            assigned_to: AgentId::numbered(agent),
        }
    }

    #[test]
    fn test_conversion_rate() {
        let leads = vec![
            lead(1, 1, LeadStatus::Won, 1000),
            lead(2, 1, LeadStatus::Lost, 2000),
            lead(3, 2, LeadStatus::Won, 3000),
            lead(4, 2, LeadStatus::Uncontacted, 4000),
        ];
        assert_eq!(LeadAnalytics::won_count(&leads), 2);
        assert!((LeadAnalytics::conversion_rate(&leads) - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_conversion_rate_empty_is_zero() {
        assert_eq!(LeadAnalytics::conversion_rate(&[]), 0.0);
        assert_eq!(CallAnalytics::success_rate(&[]), 0.0);
        assert_eq!(TaskAnalytics::completion_rate(&[]), 0.0);
        assert_eq!(CallAnalytics::average_duration_minutes(&[]), 0.0);
    }

    #[test]
    fn test_bucket_counts_sum_to_len() {
        let leads = vec![
            lead(1, 1, LeadStatus::Won, 0),
            lead(2, 1, LeadStatus::Uncontacted, 0),
            lead(3, 1, LeadStatus::Interested, 0),
            lead(4, 1, LeadStatus::InDiscussion, 0),
            lead(5, 1, LeadStatus::NotInterested, 0),
        ];
        let buckets = LeadAnalytics::bucket_counts(&leads);
        assert_eq!(buckets.values().sum::<usize>(), leads.len());
        assert_eq!(buckets[&StatusBucket::Closed], 2);
    }

    #[test]
    fn test_won_revenue() {
        let leads = vec![
            lead(1, 1, LeadStatus::Won, 1000),
            lead(2, 1, LeadStatus::Won, 500),
            lead(3, 1, LeadStatus::Lost, 9999),
        ];
        assert_eq!(LeadAnalytics::won_revenue(&leads), Decimal::new(1500, 0));
    }

    #[test]
    fn test_agent_performance() {
        let leads = vec![
            lead(1, 1, LeadStatus::Won, 0),
            lead(2, 1, LeadStatus::Lost, 0),
            lead(3, 2, LeadStatus::Uncontacted, 0),
        ];
        let perf = LeadAnalytics::agent_performance(&leads);
        assert_eq!(perf.len(), 2);
        assert_eq!(perf[0].agent, AgentId::numbered(1));
        assert_eq!(perf[0].total_leads, 2);
        assert_eq!(perf[0].won_leads, 1);
        assert!((perf[0].conversion_rate - 50.0).abs() < f64::EPSILON);
        assert_eq!(perf[1].total_leads, 1);
        assert_eq!(perf[1].won_leads, 0);
    }

    #[test]
    fn test_recent_is_newest_first() {
        let leads = vec![
            lead(1, 1, LeadStatus::Won, 0),
            lead(3, 1, LeadStatus::Won, 0),
            lead(2, 1, LeadStatus::Won, 0),
        ];
        let recent = LeadAnalytics::recent(&leads, 2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].id, LeadId::new(3));
        assert_eq!(recent[1].id, LeadId::new(2));
    }

    #[test]
    fn test_active_agents() {
        let leads = vec![
            lead(1, 1, LeadStatus::Won, 0),
            lead(2, 1, LeadStatus::Won, 0),
            lead(3, 4, LeadStatus::Won, 0),
        ];
        assert_eq!(LeadAnalytics::active_agents(&leads), 2);
    }

    #[test]
    fn test_sentiment_counts() {
        let mut positive = call(1, 1, CallStatus::Completed, 10);
        positive.sentiment = Sentiment::Positive;
        let calls = vec![
            positive,
            call(2, 1, CallStatus::Completed, 10),
            call(3, 1, CallStatus::Missed, 11),
        ];
        let counts = CallAnalytics::sentiment_counts(&calls);
        assert_eq!(counts[&Sentiment::Positive], 1);
        assert_eq!(counts[&Sentiment::Neutral], 2);
    }

    #[test]
    fn test_daily_series_ascends() {
        let calls = vec![
            call(1, 1, CallStatus::Completed, 20),
            call(2, 1, CallStatus::Missed, 10),
            call(3, 1, CallStatus::Completed, 10),
        ];
        let series = CallAnalytics::daily_series(&calls);
        assert_eq!(series.len(), 2);
        assert!(series[0].date < series[1].date);
        assert_eq!(series[0].total_calls, 2);
        assert_eq!(series[0].completed_calls, 1);
        assert!((series[1].success_rate - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_critical_overdue_boundary() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let tasks = vec![
            task(1, 1, TaskStatus::Pending, 12), // exactly 3 days late: not critical
            task(2, 1, TaskStatus::Pending, 11), // 4 days late: critical
            task(3, 1, TaskStatus::Completed, 1), // closed: never critical
        ];
        let critical = TaskAnalytics::critical_overdue(&tasks, today);
        assert_eq!(critical.len(), 1);
        assert_eq!(critical[0].id, TaskId::new(2));
    }

    #[test]
    fn test_overdue_sorted_earliest_first() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let tasks = vec![
            task(1, 1, TaskStatus::Pending, 14),
            task(2, 1, TaskStatus::InProgress, 10),
            task(3, 1, TaskStatus::Pending, 16),
        ];
        let overdue = TaskAnalytics::overdue(&tasks, today);
        assert_eq!(overdue.len(), 2);
        assert_eq!(overdue[0].id, TaskId::new(2));
        assert_eq!(overdue[1].id, TaskId::new(1));
    }

    #[test]
    fn test_upcoming_call_count() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let mut email_task = task(3, 1, TaskStatus::Pending, 20);
        email_task.task_type = TaskType::Email;
        let tasks = vec![
            task(1, 1, TaskStatus::Pending, 16),
            task(2, 1, TaskStatus::Pending, 10),
            email_task,
        ];
        assert_eq!(TaskAnalytics::upcoming_call_count(&tasks, today), 1);
    }

    #[test]
    fn test_utilization() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let slot = |agent: u32, hour: u8, status| AvailabilitySlot {
            agent: AgentId::numbered(agent),
            date,
            hour,
            status,
        };
        let slots = vec![
            slot(1, 9, AvailabilityStatus::Busy),
            slot(1, 10, AvailabilityStatus::Busy),
            slot(1, 11, AvailabilityStatus::Available),
            slot(1, 12, AvailabilityStatus::Available),
            slot(2, 9, AvailabilityStatus::Break),
        ];
        let util = AvailabilityAnalytics::utilization(&slots);
        // agent 2 has no busy/available slots and is omitted
        assert_eq!(util.len(), 1);
        assert_eq!(util[0].agent, AgentId::numbered(1));
        assert_eq!(util[0].busy, 2);
        assert!((util[0].utilization_rate - 50.0).abs() < f64::EPSILON);
    }
}
