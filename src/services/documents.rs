// Documents service.
// The document register is append-only; entries are never renamed or
// deleted once recorded.

use serde::Serialize;

use crate::error::PortalError;
use crate::policy::{self, Panel, PanelMode};
use crate::state::PortalState;
use crate::types::{DocumentItem, Session};

/// Record an uploaded document.
pub fn upload_document(
    state: &PortalState,
    session: &Session,
    name: &str,
) -> Result<DocumentItem, PortalError> {
    if !policy::can_mutate(session.role, Panel::Documents) {
        return Err(PortalError::forbidden(session.role, "upload documents"));
    }
    if name.trim().is_empty() {
        return Err(PortalError::validation("Document name is required"));
    }

    let mut documents = state.documents.snapshot();
    let document = DocumentItem {
        id: documents.len() as i64 + 1,
        name: name.trim().to_string(),
        uploaded_by: session.name.clone(),
    };
    documents.push(document.clone());
    state.documents.replace(documents);

    state.notifications.record(format!(
        "Document \"{}\" uploaded by {}.",
        document.name, document.uploaded_by
    ));
    Ok(document)
}

/// Snapshot of the register, in upload order.
pub fn list(state: &PortalState) -> Vec<DocumentItem> {
    state.documents.snapshot()
}

/// View model for the documents panel.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentsPanel {
    pub mode: PanelMode,
    pub documents: Vec<DocumentItem>,
}

/// Build the documents panel; admin roles only.
pub fn build_panel(session: &Session, state: &PortalState) -> Result<DocumentsPanel, PortalError> {
    if !policy::can_access(session.role, Panel::Documents) {
        return Err(PortalError::forbidden(session.role, "view documents"));
    }
    Ok(DocumentsPanel {
        mode: PanelMode::for_role(session.role, Panel::Documents),
        documents: state.documents.snapshot(),
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

    #[test]
    fn test_upload_appends_with_sequential_ids() {
        let (_dir, state) = open_state();
        let admin = Session::new("Alex Morgan", Role::Admin);

        let first = upload_document(&state, &admin, "Site Survey.pdf").expect("upload");
        let second = upload_document(&state, &admin, "Permit Application.pdf").expect("upload");

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(list(&state).len(), 2);
        assert_eq!(
            state.notifications.snapshot()[0],
            "Document \"Permit Application.pdf\" uploaded by Alex Morgan.",
        );
    }

    #[test]
    fn test_upload_requires_a_name() {
        let (_dir, state) = open_state();
        let admin = Session::new("Alex Morgan", Role::Admin);

        let err = upload_document(&state, &admin, "  ").expect_err("blank name");
        assert!(err.is_validation());
        assert!(list(&state).is_empty());
    }

    #[test]
    fn test_architect_has_no_documents_access() {
        let (_dir, state) = open_state();
        let emma = Session::new("Emma Stone", Role::Architect);

        let err = upload_document(&state, &emma, "Sketch.pdf").expect_err("upload");
        assert!(err.is_permission_denied());
        assert!(build_panel(&emma, &state).is_err());
    }

    #[test]
    fn test_panel_for_super_admin_is_editable() {
        let (_dir, state) = open_state();
        let super_admin = Session::new("Alex Morgan", Role::SuperAdmin);

        let panel = build_panel(&super_admin, &state).expect("panel");
        assert_eq!(panel.mode, PanelMode::Edit);
    }
}
