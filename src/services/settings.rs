// Settings service.
// Workspace settings are plain fields, not a register; edits are
// gated by the settings rule but do not touch the notification log.

use serde::{Deserialize, Serialize};

use crate::error::PortalError;
use crate::policy::{self, Panel, PanelMode};
use crate::state::PortalState;
use crate::types::{Session, WorkspaceSettings};

/// One editable settings field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SettingsField {
    ProfileName,
    ProfileEmail,
    Password,
    Preferences,
    Notifications,
}

/// Update one settings field.
pub fn update_field(
    state: &PortalState,
    session: &Session,
    field: SettingsField,
    value: &str,
) -> Result<WorkspaceSettings, PortalError> {
    if !policy::can_mutate(session.role, Panel::Settings) {
        return Err(PortalError::forbidden(session.role, "edit settings"));
    }

    let mut settings = state
        .settings
        .lock()
        .map_err(|_| PortalError::Persistence("Lock poisoned".to_string()))?;
    let value = value.to_string();
    match field {
        SettingsField::ProfileName => settings.profile_name = value,
        SettingsField::ProfileEmail => settings.profile_email = value,
        SettingsField::Password => settings.password = value,
        SettingsField::Preferences => settings.preferences = value,
        SettingsField::Notifications => settings.notifications = value,
    }
    Ok(settings.clone())
}

/// View model for the settings panel.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPanel {
    pub mode: PanelMode,
    pub settings: WorkspaceSettings,
}

/// Build the settings panel; Super Admin and Admin only.
pub fn build_panel(session: &Session, state: &PortalState) -> Result<SettingsPanel, PortalError> {
    if !policy::can_access(session.role, Panel::Settings) {
        return Err(PortalError::forbidden(session.role, "view settings"));
    }
    let settings = state
        .settings
        .lock()
        .map_err(|_| PortalError::Persistence("Lock poisoned".to_string()))?
        .clone();
    Ok(SettingsPanel {
        mode: PanelMode::for_role(session.role, Panel::Settings),
        settings,
    })
}
