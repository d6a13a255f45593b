// Messages service.
// Append-only direct messages; a send with no recipient or no content
// leaves the register and the notification log untouched.

use chrono::Utc;
use serde::Serialize;

use crate::error::PortalError;
use crate::policy::{self, Panel, PanelMode};
use crate::state::PortalState;
use crate::types::{Message, Session, TeamMember};

/// Send a message from the current session.
pub fn send_message(
    state: &PortalState,
    session: &Session,
    to: &str,
    content: &str,
) -> Result<Message, PortalError> {
    if !policy::can_mutate(session.role, Panel::Messages) {
        return Err(PortalError::forbidden(session.role, "send messages"));
    }
    if to.trim().is_empty() || content.trim().is_empty() {
        return Err(PortalError::validation(
            "Select a recipient and enter a message.",
        ));
    }

    let message = Message {
        id: Utc::now().timestamp_millis(),
        from: session.name.clone(),
        to: to.to_string(),
        content: content.to_string(),
        date: Utc::now().to_rfc3339(),
    };
    let mut messages = state.messages.snapshot();
    messages.push(message.clone());
    state.messages.replace(messages);

    state.notifications.record(format!(
        "Message sent by {} to {}.",
        message.from, message.to
    ));
    Ok(message)
}

/// View model for the messages panel.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagesPanel {
    pub mode: PanelMode,
    /// Roster members offered in the recipient picker.
    pub recipients: Vec<TeamMember>,
    pub messages: Vec<Message>,
}

/// Build the messages panel; everyone but the structural team.
pub fn build_panel(session: &Session, state: &PortalState) -> Result<MessagesPanel, PortalError> {
    if !policy::can_access(session.role, Panel::Messages) {
        return Err(PortalError::forbidden(session.role, "view messages"));
    }
    Ok(MessagesPanel {
        mode: PanelMode::for_role(session.role, Panel::Messages),
        recipients: state.team.snapshot(),
        messages: state.messages.snapshot(),
    })
}
