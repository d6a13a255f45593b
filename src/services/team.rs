// Team service.
// Roster intents and panel view. The roster is the one register that
// survives restarts; every change here is written through to disk.

use serde::{Deserialize, Serialize};

use crate::error::PortalError;
use crate::policy::{self, Panel, PanelMode};
use crate::state::PortalState;
use crate::types::{Session, TeamMember};

/// Partial update for one roster member.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberPatch {
    pub name: Option<String>,
    pub role: Option<String>,
    pub avatar: Option<String>,
}

/// Add a default-valued roster row for the editor to fill in.
pub fn add_member(state: &PortalState, session: &Session) -> Result<TeamMember, PortalError> {
    if !policy::can_mutate(session.role, Panel::Team) {
        return Err(PortalError::forbidden(session.role, "add team members"));
    }

    let member = TeamMember::new("New Member", "New Role");
    let mut members = state.team.snapshot();
    members.push(member.clone());
    state.team.replace(members);

    state
        .notifications
        .record(format!("{} added to the team.", member.name));
    persist(state);
    Ok(member)
}

/// Update one member, keyed by id.
pub fn update_member(
    state: &PortalState,
    session: &Session,
    id: &str,
    patch: TeamMemberPatch,
) -> Result<TeamMember, PortalError> {
    if !policy::can_mutate(session.role, Panel::Team) {
        return Err(PortalError::forbidden(session.role, "edit team members"));
    }

    let mut members = state.team.snapshot();
    let Some(member) = members.iter_mut().find(|m| m.id == id) else {
        return Err(PortalError::not_found("team member", id));
    };

    let previous_name = member.name.clone();
    if let Some(name) = patch.name {
        member.name = name;
    }
    if let Some(role) = patch.role {
        member.role = role;
    }
    if let Some(avatar) = patch.avatar {
        member.avatar = avatar;
    }
    let updated = member.clone();
    state.team.replace(members);

    state
        .notifications
        .record(format!("{previous_name}'s details updated."));
    persist(state);
    Ok(updated)
}

/// Remove one member, keyed by id.
pub fn remove_member(
    state: &PortalState,
    session: &Session,
    id: &str,
) -> Result<(), PortalError> {
    if !policy::can_mutate(session.role, Panel::Team) {
        return Err(PortalError::forbidden(session.role, "remove team members"));
    }

    let members = state.team.snapshot();
    let Some(position) = members.iter().position(|m| m.id == id) else {
        return Err(PortalError::not_found("team member", id));
    };
    finish_removal(state, members, position);
    Ok(())
}

/// Remove one member by display name.
///
/// Names are not unique; when they repeat, the first match is the one
/// removed. Id-keyed [`remove_member`] is the precise alternative.
pub fn remove_member_by_name(
    state: &PortalState,
    session: &Session,
    name: &str,
) -> Result<(), PortalError> {
    if !policy::can_mutate(session.role, Panel::Team) {
        return Err(PortalError::forbidden(session.role, "remove team members"));
    }

    let members = state.team.snapshot();
    let Some(position) = members.iter().position(|m| m.name == name) else {
        return Err(PortalError::not_found("team member", name));
    };
    finish_removal(state, members, position);
    Ok(())
}

fn finish_removal(state: &PortalState, mut members: Vec<TeamMember>, position: usize) {
    let removed = members.remove(position);
    state.team.replace(members);
    state
        .notifications
        .record(format!("{} removed from the team.", removed.name));
    persist(state);
}

fn persist(state: &PortalState) {
    if let Err(e) = state.save_team_roster() {
        log::warn!("Failed to persist team roster: {e}");
    }
}

/// View model for the team panel.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPanel {
    pub mode: PanelMode,
    pub members: Vec<TeamMember>,
}

/// Build the team panel; only roles with team access get one.
pub fn build_panel(session: &Session, state: &PortalState) -> Result<TeamPanel, PortalError> {
    if !policy::can_access(session.role, Panel::Team) {
        return Err(PortalError::forbidden(session.role, "view the team roster"));
    }
    Ok(TeamPanel {
        mode: PanelMode::for_role(session.role, Panel::Team),
        members: state.team.snapshot(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PortalState;
    use crate::types::Role;

    fn open_state() -> (tempfile::TempDir, PortalState) {
        let dir = tempfile::tempdir().expect("tempdir");
        let state = PortalState::open(dir.path());
        (dir, state)
    }

    fn admin() -> Session {
        Session::new("Alex Morgan", Role::Admin)
    }

    #[test]
    fn test_add_member_appends_default_row() {
        let (_dir, state) = open_state();

        let member = add_member(&state, &admin()).expect("add");
        assert_eq!(member.name, "New Member");
        assert_eq!(member.role, "New Role");
        assert_eq!(state.team.len(), 4);
        assert_eq!(
            state.notifications.snapshot()[0],
            "New Member added to the team.",
        );
    }

    #[test]
    fn test_update_member_by_id() {
        let (_dir, state) = open_state();
        let member = add_member(&state, &admin()).expect("add");

        let updated = update_member(
            &state,
            &admin(),
            &member.id,
            TeamMemberPatch {
                name: Some("Priya Patel".to_string()),
                role: Some("Structural".to_string()),
                avatar: None,
            },
        )
        .expect("update");

        assert_eq!(updated.name, "Priya Patel");
        assert_eq!(updated.role, "Structural");
        assert_eq!(updated.id, member.id);
        assert_eq!(
            state.notifications.snapshot()[0],
            "New Member's details updated.",
        );
    }

    #[test]
    fn test_remove_by_name_takes_first_match() {
        let (_dir, state) = open_state();
        let mut members = state.team.snapshot();
        members.push(TeamMember::new("Alex Morgan", "Architect"));
        state.team.replace(members);
        assert_eq!(state.team.len(), 4);

        remove_member_by_name(&state, &admin(), "Alex Morgan").expect("remove");

        let remaining = state.team.snapshot();
        assert_eq!(remaining.len(), 3);
        let survivor = remaining
            .iter()
            .find(|m| m.name == "Alex Morgan")
            .expect("duplicate survives");
        assert_eq!(survivor.role, "Architect", "first match was removed");
        assert_eq!(
            state.notifications.snapshot()[0],
            "Alex Morgan removed from the team.",
        );
    }

    #[test]
    fn test_remove_by_id_is_precise_with_duplicates() {
        let (_dir, state) = open_state();
        let duplicate = TeamMember::new("Alex Morgan", "Architect");
        let mut members = state.team.snapshot();
        members.push(duplicate.clone());
        state.team.replace(members);

        remove_member(&state, &admin(), &duplicate.id).expect("remove");

        let remaining = state.team.snapshot();
        let survivor = remaining
            .iter()
            .find(|m| m.name == "Alex Morgan")
            .expect("first member survives");
        assert_eq!(survivor.role, "Admin");
    }

    #[test]
    fn test_unknown_targets_are_not_found() {
        let (_dir, state) = open_state();

        let err = remove_member_by_name(&state, &admin(), "Nobody").expect_err("missing name");
        assert!(matches!(err, PortalError::NotFound { .. }));
        let err = update_member(&state, &admin(), "missing-id", TeamMemberPatch::default())
            .expect_err("missing id");
        assert!(matches!(err, PortalError::NotFound { .. }));
    }

    #[test]
    fn test_customer_and_structural_cannot_touch_roster() {
        let (_dir, state) = open_state();

        for role in [Role::Customer, Role::Structural] {
            let session = Session::new("Someone", role);
            assert!(add_member(&state, &session).expect_err("add").is_permission_denied());
            assert!(build_panel(&session, &state).is_err());
        }
        assert_eq!(state.team.len(), 3);
        assert_eq!(state.notifications.count(), 0);
    }

    #[test]
    fn test_changes_are_written_through_to_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let state = PortalState::open(dir.path());

        let member = add_member(&state, &admin()).expect("add");
        update_member(
            &state,
            &admin(),
            &member.id,
            TeamMemberPatch {
                name: Some("Dana Cole".to_string()),
                ..Default::default()
            },
        )
        .expect("update");

        let reopened = PortalState::open(dir.path());
        assert!(reopened.team.snapshot().iter().any(|m| m.name == "Dana Cole"));
    }

    #[test]
    fn test_panel_mode_follows_role() {
        let (_dir, state) = open_state();

        let architect = Session::new("Emma Stone", Role::Architect);
        let panel = build_panel(&architect, &state).expect("panel");
        assert_eq!(panel.mode, PanelMode::Edit);
        assert_eq!(panel.members.len(), 3);
    }
}
