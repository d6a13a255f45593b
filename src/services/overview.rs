// Overview service.
// Assembles the landing view: greeting, role-filtered stat tiles with
// live values, and the projects the session may see.

use serde::Serialize;

use crate::policy::{self, StatId};
use crate::services::projects::visible_projects;
use crate::state::PortalState;
use crate::types::{Project, Session};

/// No task register exists; the tile keeps its placeholder value.
const ASSIGNED_TASKS_PLACEHOLDER: usize = 8;

/// One stat tile with its computed value.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatTile {
    pub id: StatId,
    pub title: &'static str,
    pub value: String,
    pub change: &'static str,
}

/// View model for the overview panel.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewData {
    pub greeting: String,
    pub stats: Vec<StatTile>,
    pub recent_projects: Vec<Project>,
    pub has_unread_notifications: bool,
}

/// Build the overview for the session.
pub fn build(session: &Session, state: &PortalState) -> OverviewData {
    let projects = state.projects.snapshot();

    let stats = policy::visible_stats(session.role)
        .into_iter()
        .map(|stat| {
            let value = match stat.id {
                StatId::ActiveProjects => projects.len().to_string(),
                StatId::PendingApprovals => pending_approvals(&projects).to_string(),
                StatId::TeamMembers => state.team.len().to_string(),
                StatId::UpcomingMeetings => state.meetings.len().to_string(),
                StatId::AssignedTasks => ASSIGNED_TASKS_PLACEHOLDER.to_string(),
            };
            StatTile {
                id: stat.id,
                title: stat.title,
                value,
                change: stat.change,
            }
        })
        .collect();

    OverviewData {
        greeting: format!("Welcome back, {}", session.name),
        stats,
        recent_projects: visible_projects(session, state),
        has_unread_notifications: state.notifications.has_unread(),
    }
}

/// Files uploaded but not yet approved for the customer, across all
/// projects and packages.
fn pending_approvals(projects: &[Project]) -> usize {
    projects
        .iter()
        .flat_map(|p| p.files.values())
        .flatten()
        .filter(|f| !f.approved_for_customer)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packages::DesignPackage;
    use crate::state::PortalState;
    use crate::types::{ProjectFile, Role};

    fn open_state() -> (tempfile::TempDir, PortalState) {
        let dir = tempfile::tempdir().expect("tempdir");
        let state = PortalState::open(dir.path());
        state.install_demo_data();
        (dir, state)
    }

    fn tile_value<'a>(data: &'a OverviewData, id: StatId) -> Option<&'a str> {
        data.stats
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.value.as_str())
    }

    #[test]
    fn test_super_admin_sees_computed_values() {
        let (_dir, state) = open_state();
        let session = Session::new("Alex Morgan", Role::SuperAdmin);

        let data = build(&session, &state);
        assert_eq!(data.greeting, "Welcome back, Alex Morgan");
        assert_eq!(tile_value(&data, StatId::ActiveProjects), Some("4"));
        assert_eq!(tile_value(&data, StatId::TeamMembers), Some("3"));
        assert_eq!(tile_value(&data, StatId::UpcomingMeetings), Some("0"));
        assert_eq!(tile_value(&data, StatId::AssignedTasks), None);
        assert_eq!(data.recent_projects.len(), 4);
        assert!(!data.has_unread_notifications);
    }

    #[test]
    fn test_pending_approvals_counts_unapproved_files() {
        let (_dir, state) = open_state();
        let mut projects = state.projects.snapshot();
        projects[0].files.insert(
            DesignPackage::QuadPlus,
            vec![
                ProjectFile::new("plan.pdf", "Emma Stone", Role::Architect),
                ProjectFile::new("sketch.pdf", "Sarah Johnson", Role::Customer),
                ProjectFile::new("survey.pdf", "Sarah Johnson", Role::Customer),
            ],
        );
        state.projects.replace(projects);

        let session = Session::new("Alex Morgan", Role::Admin);
        let data = build(&session, &state);
        assert_eq!(tile_value(&data, StatId::PendingApprovals), Some("2"));
    }

    #[test]
    fn test_customer_overview_is_scoped_to_their_projects() {
        let (_dir, state) = open_state();
        let session = Session::new("Sarah Johnson", Role::Customer);

        let data = build(&session, &state);
        assert_eq!(data.stats.len(), 1, "customers see one stat tile");
        assert_eq!(data.recent_projects.len(), 1);
        assert_eq!(data.recent_projects[0].name, "Luxury Apartment Renovation");
    }

    #[test]
    fn test_structural_overview_shows_task_placeholder() {
        let (_dir, state) = open_state();
        let session = Session::new("Priya Patel", Role::Structural);

        let data = build(&session, &state);
        assert_eq!(tile_value(&data, StatId::AssignedTasks), Some("8"));
        assert_eq!(tile_value(&data, StatId::ActiveProjects), None);
    }

    #[test]
    fn test_unread_flag_follows_notification_log() {
        let (_dir, state) = open_state();
        let session = Session::new("Alex Morgan", Role::Admin);

        assert!(!build(&session, &state).has_unread_notifications);
        state.notifications.record("Meeting removed.");
        assert!(build(&session, &state).has_unread_notifications);
    }
}
