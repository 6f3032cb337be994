//! Dashboard query service
//!
//! Orchestrates the read path: resolve the viewer's scope, filter each
//! dataset through it, aggregate into the view the caller asked for.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::application::dto::{
    AgentDashboardView, CompanyDashboardView, ConversionSummary, ScopedDatasets,
    TeamDashboardView,
};
use crate::domain::access::{self, EffectiveScope, Role, Selection};
use crate::domain::services::{
    AvailabilityAnalytics, CallAnalytics, LeadAnalytics, TaskAnalytics,
};
use crate::domain::value_objects::AgentId;
use crate::ports::inbound::{DashboardQueries, UseCaseError};
use crate::ports::outbound::DatasetRepository;

/// Number of rows shown in the "recent leads" table
const RECENT_LEADS: usize = 5;

/// Dashboard application service
pub struct DashboardService {
    datasets: Arc<dyn DatasetRepository>,
}

impl DashboardService {
    pub fn new(datasets: Arc<dyn DatasetRepository>) -> Self {
        Self { datasets }
    }

    /// Fetch all four datasets and filter each through `scope`.
    fn load_scoped(&self, scope: EffectiveScope) -> Result<ScopedDatasets, UseCaseError> {
        let leads = scope.filter(&self.datasets.leads()?);
        let calls = scope.filter(&self.datasets.calls()?);
        let tasks = scope.filter(&self.datasets.tasks()?);
        let availability = scope.filter(&self.datasets.availability()?);

        debug!(
            scope = %scope,
            leads = leads.len(),
            calls = calls.len(),
            tasks = tasks.len(),
            "datasets scoped"
        );

        Ok(ScopedDatasets {
            leads,
            calls,
            tasks,
            availability,
            description: format!("Viewing: {}", scope),
            scope,
        })
    }

    fn require_management(role: Role) -> Result<(), UseCaseError> {
        if role.can_view_all_agents() {
            Ok(())
        } else {
            Err(UseCaseError::Unauthorized(role))
        }
    }
}

impl DashboardQueries for DashboardService {
    fn scoped_datasets(
        &self,
        role: Role,
        own_identity: &AgentId,
        requested: &Selection,
    ) -> Result<ScopedDatasets, UseCaseError> {
        let scope = access::resolve(role, own_identity, requested);
        self.load_scoped(scope)
    }

    fn agent_dashboard(
        &self,
        identity: &AgentId,
        today: NaiveDate,
    ) -> Result<AgentDashboardView, UseCaseError> {
        let data = self.load_scoped(EffectiveScope::Single(identity.clone()))?;

        Ok(AgentDashboardView {
            identity: identity.clone(),
            lead_count: data.leads.len(),
            won_count: LeadAnalytics::won_count(&data.leads),
            call_count: data.calls.len(),
            pending_task_count: TaskAnalytics::pending_count(&data.tasks),
            status_counts: LeadAnalytics::status_counts(&data.leads),
            stage_counts: LeadAnalytics::stage_counts(&data.leads),
            recent_leads: LeadAnalytics::recent(&data.leads, RECENT_LEADS),
            upcoming_tasks: TaskAnalytics::upcoming(&data.tasks, today),
            overdue_tasks: TaskAnalytics::overdue(&data.tasks, today),
        })
    }

    fn team_dashboard(
        &self,
        role: Role,
        requested: &Selection,
        today: NaiveDate,
    ) -> Result<TeamDashboardView, UseCaseError> {
        Self::require_management(role)?;
        let data = self.load_scoped(EffectiveScope::from(requested))?;

        Ok(TeamDashboardView {
            description: data.description.clone(),
            lead_count: data.leads.len(),
            active_agents: LeadAnalytics::active_agents(&data.leads),
            call_count: data.calls.len(),
            pending_task_count: TaskAnalytics::pending_count(&data.tasks),
            agent_performance: LeadAnalytics::agent_performance(&data.leads),
            task_distribution: TaskAnalytics::distribution_by_agent(&data.tasks),
            overdue_by_agent: TaskAnalytics::overdue_by_agent(&data.tasks, today),
            critical_overdue: TaskAnalytics::critical_overdue(&data.tasks, today),
            call_stats: CallAnalytics::agent_stats(&data.calls),
            daily_calls: CallAnalytics::daily_series(&data.calls),
        })
    }

    fn company_dashboard(
        &self,
        role: Role,
        requested: &Selection,
        today: NaiveDate,
    ) -> Result<CompanyDashboardView, UseCaseError> {
        Self::require_management(role)?;
        let data = self.load_scoped(EffectiveScope::from(requested))?;

        let won = LeadAnalytics::won_count(&data.leads);
        let conversion_summary = ConversionSummary {
            converted: won,
            dropped: data.leads.iter().filter(|l| l.is_lost()).count(),
            in_progress: data.leads.iter().filter(|l| l.is_open()).count(),
        };

        Ok(CompanyDashboardView {
            description: data.description.clone(),
            lead_count: data.leads.len(),
            won_count: won,
            conversion_rate: LeadAnalytics::conversion_rate(&data.leads),
            won_revenue: LeadAnalytics::won_revenue(&data.leads),
            active_agents: LeadAnalytics::active_agents(&data.leads),
            bucket_counts: LeadAnalytics::bucket_counts(&data.leads),
            stage_counts: LeadAnalytics::stage_counts(&data.leads),
            call_count: data.calls.len(),
            call_success_rate: CallAnalytics::success_rate(&data.calls),
            average_call_minutes: CallAnalytics::average_duration_minutes(&data.calls),
            daily_calls: CallAnalytics::daily_series(&data.calls),
            upcoming_call_count: TaskAnalytics::upcoming_call_count(&data.tasks, today),
            overdue_task_count: TaskAnalytics::overdue(&data.tasks, today).len(),
            task_completion_rate: TaskAnalytics::completion_rate(&data.tasks),
            task_status_counts: TaskAnalytics::status_counts(&data.tasks),
            utilization: AvailabilityAnalytics::utilization(&data.availability),
            revenue_by_stage: LeadAnalytics::revenue_by_stage(&data.leads),
            conversion_summary,
            country_stats: LeadAnalytics::country_breakdown(&data.leads),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::records::{Lead, LeadStage, LeadStatus};
    use crate::domain::value_objects::{Currency, Email, LeadId, Money, Phone};
    use crate::infrastructure::persistence::InMemoryDatasetStore;
    use chrono::{TimeZone, Utc};

    fn lead(id: u32, agent: u32, status: LeadStatus) -> Lead {
        Lead {
            id: LeadId::new(id),
            full_name: format!("Lead {}", id),
            email: Email::new_unchecked(format!("lead{}@email.com", id)),
            phone: Phone::new_unchecked("966", "123456"),
            company: "Company 1".to_string(),
            stage: LeadStage::New,
            status,
            assigned_to: AgentId::numbered(agent),
            country: "India".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
            revenue_potential: Money::from_cents(500_000, Currency::Usd),
        }
    }

    /// 5 leads for Agent 1, 3 for Agent 2.
    fn service() -> DashboardService {
        let leads = vec![
            lead(1, 1, LeadStatus::Won),
            lead(2, 1, LeadStatus::Uncontacted),
            lead(3, 1, LeadStatus::InDiscussion),
            lead(4, 1, LeadStatus::Interested),
            lead(5, 1, LeadStatus::Lost),
            lead(6, 2, LeadStatus::Won),
            lead(7, 2, LeadStatus::Won),
            lead(8, 2, LeadStatus::Uncontacted),
        ];
        let store = InMemoryDatasetStore::from_parts(leads, vec![], vec![], vec![]);
        DashboardService::new(Arc::new(store))
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_agent_sees_only_own_leads() {
        let data = service()
            .scoped_datasets(
                Role::Agent,
                &AgentId::numbered(1),
                &Selection::agent("Agent 1"),
            )
            .unwrap();
        assert_eq!(data.leads.len(), 5);
        assert!(data
            .leads
            .iter()
            .all(|l| l.assigned_to == AgentId::numbered(1)));
    }

    #[test]
    fn test_agent_all_agents_request_is_overridden() {
        let data = service()
            .scoped_datasets(Role::Agent, &AgentId::numbered(3), &Selection::AllAgents)
            .unwrap();
        assert_eq!(data.scope, EffectiveScope::Single(AgentId::numbered(3)));
        // no leads belong to Agent 3: empty is a legitimate result, not an error
        assert!(data.leads.is_empty());
    }

    #[test]
    fn test_manager_all_agents_sees_everything() {
        let data = service()
            .scoped_datasets(Role::Manager, &AgentId::numbered(1), &Selection::AllAgents)
            .unwrap();
        assert_eq!(data.scope, EffectiveScope::All);
        assert_eq!(data.leads.len(), 8);
        assert_eq!(data.description, "Viewing: All Agents");
    }

    #[test]
    fn test_team_lead_single_agent_selection() {
        let data = service()
            .scoped_datasets(
                Role::TeamLead,
                &AgentId::numbered(1),
                &Selection::agent("Agent 2"),
            )
            .unwrap();
        assert_eq!(data.leads.len(), 3);
        assert_eq!(data.description, "Viewing: Agent 2");
    }

    #[test]
    fn test_agent_dashboard_counts() {
        let view = service()
            .agent_dashboard(&AgentId::numbered(1), today())
            .unwrap();
        assert_eq!(view.lead_count, 5);
        assert_eq!(view.won_count, 1);
        assert_eq!(view.status_counts[&LeadStatus::Won], 1);
        assert_eq!(view.recent_leads.len(), 5);
        assert!(view.upcoming_tasks.is_empty());
    }

    #[test]
    fn test_team_dashboard_rejects_agent_role() {
        let err = service()
            .team_dashboard(Role::Agent, &Selection::AllAgents, today())
            .unwrap_err();
        assert_eq!(err, UseCaseError::Unauthorized(Role::Agent));
    }

    #[test]
    fn test_company_dashboard_rejects_agent_role() {
        let err = service()
            .company_dashboard(Role::Agent, &Selection::AllAgents, today())
            .unwrap_err();
        assert_eq!(err, UseCaseError::Unauthorized(Role::Agent));
    }

    #[test]
    fn test_team_dashboard_agent_performance() {
        let view = service()
            .team_dashboard(Role::TeamLead, &Selection::AllAgents, today())
            .unwrap();
        assert_eq!(view.lead_count, 8);
        assert_eq!(view.active_agents, 2);
        assert_eq!(view.agent_performance.len(), 2);
        let agent2 = &view.agent_performance[1];
        assert_eq!(agent2.agent, AgentId::numbered(2));
        assert_eq!(agent2.total_leads, 3);
        assert_eq!(agent2.won_leads, 2);
    }

    #[test]
    fn test_company_dashboard_conversion_summary() {
        let view = service()
            .company_dashboard(Role::HigherManagement, &Selection::AllAgents, today())
            .unwrap();
        assert_eq!(view.lead_count, 8);
        assert_eq!(view.won_count, 3);
        assert_eq!(
            view.conversion_summary,
            ConversionSummary {
                converted: 3,
                dropped: 1,
                in_progress: 4,
            }
        );
        assert_eq!(view.country_stats.len(), 1);
        assert_eq!(view.country_stats[0].country, "India");
    }

    #[test]
    fn test_scoped_datasets_round_trips_as_json() {
        let data = service()
            .scoped_datasets(Role::Manager, &AgentId::numbered(1), &Selection::AllAgents)
            .unwrap();
        let json = serde_json::to_string(&data).unwrap();
        let back: ScopedDatasets = serde_json::from_str(&json).unwrap();
        assert_eq!(back.leads.len(), data.leads.len());
        assert_eq!(back.scope, data.scope);
    }
}
