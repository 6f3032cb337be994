//! Synthetic dataset generation
//!
//! Deterministic, seeded generation of the four datasets for demo and test
//! environments. For a given config and anchor time the output is identical
//! across runs.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::domain::records::{
    AvailabilitySlot, AvailabilityStatus, CallRecord, CallStatus, Lead, LeadStage, LeadStatus,
    ScheduledTask, Sentiment, TaskStatus, TaskType,
};
use crate::domain::value_objects::{AgentId, CallId, Currency, Email, LeadId, Money, Phone, TaskId};

/// Generation parameters. Defaults mirror the demo corpus: 10 agents,
/// 500 leads, 1000 calls, 300 tasks, one week of hourly availability.
#[derive(Clone, Debug)]
pub struct SyntheticConfig {
    pub seed: u64,
    pub agents: u32,
    pub leads: u32,
    pub calls: u32,
    pub tasks: u32,
    pub availability_days: u32,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            agents: 10,
            leads: 500,
            calls: 1000,
            tasks: 300,
            availability_days: 7,
        }
    }
}

/// The four generated datasets
#[derive(Clone, Debug)]
pub struct SyntheticData {
    pub leads: Vec<Lead>,
    pub calls: Vec<CallRecord>,
    pub tasks: Vec<ScheduledTask>,
    pub availability: Vec<AvailabilitySlot>,
}

impl SyntheticData {
    /// Generate all four datasets, anchored at `now`.
    pub fn generate(config: &SyntheticConfig, now: DateTime<Utc>) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let agents: Vec<AgentId> = (1..=config.agents).map(AgentId::numbered).collect();

        let leads = Self::generate_leads(config, now, &mut rng, &agents);
        let calls = Self::generate_calls(config, now, &mut rng, &agents);
        let tasks = Self::generate_tasks(config, now, &mut rng, &agents);
        let availability = Self::generate_availability(config, now, &mut rng, &agents);

        info!(
            seed = config.seed,
            leads = leads.len(),
            calls = calls.len(),
            tasks = tasks.len(),
            slots = availability.len(),
            "generated synthetic datasets"
        );

        Self {
            leads,
            calls,
            tasks,
            availability,
        }
    }

    fn generate_leads(
        config: &SyntheticConfig,
        now: DateTime<Utc>,
        rng: &mut StdRng,
        agents: &[AgentId],
    ) -> Vec<Lead> {
        let stages = [
            (LeadStage::New, 0.40),
            (LeadStage::Qualified, 0.25),
            (LeadStage::Nurtured, 0.20),
            (LeadStage::Converted, 0.15),
        ];
        let statuses = [
            LeadStatus::Uncontacted,
            LeadStatus::AttemptedContact,
            LeadStatus::Interested,
            LeadStatus::NotInterested,
            LeadStatus::InDiscussion,
            LeadStatus::Won,
            LeadStatus::Lost,
        ];
        let countries = [
            ("Saudi Arabia", 0.50),
            ("UAE", 0.30),
            ("India", 0.20),
        ];

        (1..=config.leads)
            .map(|i| Lead {
                id: LeadId::new(i),
                full_name: format!("Lead {}", i),
                email: Email::new_unchecked(format!("lead{}@email.com", i)),
                phone: Phone::new_unchecked("966", format!("{}", rng.gen_range(100_000..1_000_000))),
                company: format!("Company {}", i % 50),
                stage: *weighted(rng, &stages),
                status: statuses[rng.gen_range(0..statuses.len())],
                assigned_to: pick(rng, agents).clone(),
                country: weighted(rng, &countries).to_string(),
                created_at: now - Duration::days(rng.gen_range(1..90)),
                revenue_potential: Money::from_cents(
                    rng.gen_range(100_000..5_000_000),
                    Currency::Usd,
                ),
            })
            .collect()
    }

    fn generate_calls(
        config: &SyntheticConfig,
        now: DateTime<Utc>,
        rng: &mut StdRng,
        agents: &[AgentId],
    ) -> Vec<CallRecord> {
        let statuses = [
            (CallStatus::Completed, 0.60),
            (CallStatus::Missed, 0.20),
            (CallStatus::Declined, 0.10),
            (CallStatus::Failed, 0.10),
        ];
        let sentiments = [
            (Sentiment::Positive, 0.40),
            (Sentiment::Neutral, 0.40),
            (Sentiment::Negative, 0.20),
        ];

        (1..=config.calls)
            .map(|i| CallRecord {
                id: CallId::new(i),
                lead_id: LeadId::new(rng.gen_range(1..=config.leads.max(1))),
                assigned_to: pick(rng, agents).clone(),
                called_at: now
                    - Duration::days(rng.gen_range(1..30))
                    - Duration::hours(rng.gen_range(0..24)),
                duration_seconds: rng.gen_range(30..1800),
                status: *weighted(rng, &statuses),
                sentiment: *weighted(rng, &sentiments),
                summary: format!("Call summary for call {}", i),
            })
            .collect()
    }

    fn generate_tasks(
        config: &SyntheticConfig,
        now: DateTime<Utc>,
        rng: &mut StdRng,
        agents: &[AgentId],
    ) -> Vec<ScheduledTask> {
        let types = [
            TaskType::Call,
            TaskType::Email,
            TaskType::Meeting,
            TaskType::Demo,
            TaskType::WhatsApp,
        ];
        let statuses = [
            (TaskStatus::Pending, 0.30),
            (TaskStatus::InProgress, 0.20),
            (TaskStatus::Completed, 0.30),
            (TaskStatus::Cancelled, 0.10),
            (TaskStatus::Overdue, 0.10),
        ];

        (1..=config.tasks)
            .map(|i| ScheduledTask {
                id: TaskId::new(i),
                lead_id: LeadId::new(rng.gen_range(1..=config.leads.max(1))),
                task_type: types[rng.gen_range(0..types.len())],
                title: format!("Task {}", i),
                scheduled_at: now + Duration::days(rng.gen_range(-5..15)),
                status: *weighted(rng, &statuses),
                assigned_to: pick(rng, agents).clone(),
            })
            .collect()
    }

    fn generate_availability(
        config: &SyntheticConfig,
        now: DateTime<Utc>,
        rng: &mut StdRng,
        agents: &[AgentId],
    ) -> Vec<AvailabilitySlot> {
        let statuses = [
            (AvailabilityStatus::Available, 0.60),
            (AvailabilityStatus::Busy, 0.30),
            (AvailabilityStatus::Break, 0.10),
        ];

        let mut slots = Vec::new();
        for agent in agents {
            for day in 0..config.availability_days {
                let date = (now - Duration::days(i64::from(day))).date_naive();
                for hour in 9..18 {
                    slots.push(AvailabilitySlot {
                        agent: agent.clone(),
                        date,
                        hour,
                        status: *weighted(rng, &statuses),
                    });
                }
            }
        }
        slots
    }
}

/// Uniform choice from a non-empty slice.
fn pick<'a, T>(rng: &mut StdRng, choices: &'a [T]) -> &'a T {
    &choices[rng.gen_range(0..choices.len())]
}

/// Weighted choice from a non-empty slice of (value, weight) pairs.
fn weighted<'a, T>(rng: &mut StdRng, choices: &'a [(T, f64)]) -> &'a T {
    let total: f64 = choices.iter().map(|(_, w)| w).sum();
    let mut roll = rng.gen_range(0.0..total);
    for (value, weight) in choices {
        if roll < *weight {
            return value;
        }
        roll -= weight;
    }
    // float rounding can leave a sliver past the last weight
    &choices[choices.len() - 1].0
}
