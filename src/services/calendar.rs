// Calendar service.
// Meeting scheduling with a bound form struct; the form is validated
// before the creation intent ever touches the register.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PortalError;
use crate::policy::{self, Panel, PanelMode};
use crate::state::PortalState;
use crate::types::{Meeting, Session, TeamMember};

/// Bound state for the meeting-creation form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingForm {
    pub title: String,
    /// ISO date (`YYYY-MM-DD`).
    pub date: String,
    pub assigned_to: Vec<String>,
}

impl MeetingForm {
    /// All three fields are required and the date must be a real ISO
    /// date.
    pub fn validate(&self) -> Result<(), PortalError> {
        if self.title.trim().is_empty() || self.date.trim().is_empty() || self.assigned_to.is_empty()
        {
            return Err(PortalError::validation("Please fill all meeting details."));
        }
        if NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").is_err() {
            return Err(PortalError::validation(format!(
                "Invalid meeting date: {}",
                self.date
            )));
        }
        Ok(())
    }
}

/// Partial update for one meeting.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingPatch {
    pub title: Option<String>,
    pub date: Option<String>,
    pub assigned_to: Option<Vec<String>>,
}

/// Schedule a meeting from a validated form.
pub fn schedule_meeting(
    state: &PortalState,
    session: &Session,
    form: MeetingForm,
) -> Result<Meeting, PortalError> {
    if !policy::can_create_meeting(session.role) {
        return Err(PortalError::forbidden(session.role, "schedule meetings"));
    }
    form.validate()?;

    let meeting = Meeting {
        id: Utc::now().timestamp_millis(),
        title: form.title.trim().to_string(),
        assigned_to: form.assigned_to,
        date: form.date.trim().to_string(),
    };
    let mut meetings = state.meetings.snapshot();
    meetings.push(meeting.clone());
    state.meetings.replace(meetings);

    state
        .notifications
        .record(format!("Meeting \"{}\" scheduled.", meeting.title));
    Ok(meeting)
}

/// Apply a partial update to one meeting.
pub fn update_meeting(
    state: &PortalState,
    session: &Session,
    id: i64,
    patch: MeetingPatch,
) -> Result<Meeting, PortalError> {
    if !policy::can_mutate(session.role, Panel::Calendar) {
        return Err(PortalError::forbidden(session.role, "update meetings"));
    }

    let mut meetings = state.meetings.snapshot();
    let Some(meeting) = meetings.iter_mut().find(|m| m.id == id) else {
        return Err(PortalError::not_found("meeting", id));
    };
    if let Some(title) = patch.title {
        meeting.title = title;
    }
    if let Some(date) = patch.date {
        meeting.date = date;
    }
    if let Some(assigned_to) = patch.assigned_to {
        meeting.assigned_to = assigned_to;
    }
    let updated = meeting.clone();
    state.meetings.replace(meetings);

    state.notifications.record("Meeting updated.");
    Ok(updated)
}

/// Remove a meeting by id.
pub fn remove_meeting(state: &PortalState, session: &Session, id: i64) -> Result<(), PortalError> {
    if !policy::can_mutate(session.role, Panel::Calendar) {
        return Err(PortalError::forbidden(session.role, "remove meetings"));
    }

    let meetings = state.meetings.snapshot();
    if !meetings.iter().any(|m| m.id == id) {
        return Err(PortalError::not_found("meeting", id));
    }
    state
        .meetings
        .replace(meetings.into_iter().filter(|m| m.id != id).collect());

    state.notifications.record("Meeting removed.");
    Ok(())
}

/// View model for the calendar panel.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarPanel {
    pub mode: PanelMode,
    pub meetings: Vec<Meeting>,
    /// Roster members offered in the assignee picker.
    pub assignable: Vec<TeamMember>,
}

/// Build the calendar panel; staff roles only.
pub fn build_panel(session: &Session, state: &PortalState) -> Result<CalendarPanel, PortalError> {
    if !policy::can_access(session.role, Panel::Calendar) {
        return Err(PortalError::forbidden(session.role, "view the calendar"));
    }
    Ok(CalendarPanel {
        mode: PanelMode::for_role(session.role, Panel::Calendar),
        meetings: state.meetings.snapshot(),
        assignable: state.team.snapshot(),
    })
}
