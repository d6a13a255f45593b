// Projects service.
// Intents and panel view for the project register.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::PortalError;
use crate::packages::DesignPackage;
use crate::policy::{self, Panel, PanelMode};
use crate::state::PortalState;
use crate::types::{Project, ProjectFile, ProjectStatus, Role, Session};

/// Create a project.
///
/// A customer's project is always filed under their own display name,
/// whatever they typed; staff projects default to the Architect role,
/// customer projects to the Customer role.
pub fn create_project(
    state: &PortalState,
    session: &Session,
    name: &str,
    customer: &str,
) -> Result<Project, PortalError> {
    if !policy::can_create_project(session.role) {
        return Err(PortalError::forbidden(session.role, "create projects"));
    }
    if name.trim().is_empty() || customer.trim().is_empty() {
        return Err(PortalError::validation(
            "Please enter project and customer names",
        ));
    }

    let is_customer = session.role == Role::Customer;
    let customer = if is_customer {
        session.name.clone()
    } else {
        customer.trim().to_string()
    };
    let assigned_roles: BTreeSet<Role> = if is_customer {
        BTreeSet::from([Role::Customer])
    } else {
        BTreeSet::from([Role::Architect])
    };

    let mut projects = state.projects.snapshot();
    let project = Project {
        id: projects.len() as i64 + 1,
        name: name.trim().to_string(),
        customer,
        status: ProjectStatus::Planning,
        progress: 0,
        assigned_roles,
        last_updated_by: Some(session.name.clone()),
        design_package: None,
        files: Default::default(),
    };
    projects.push(project.clone());
    state.projects.replace(projects);

    state.notifications.record(format!(
        "Project \"{}\" added by {}",
        project.name, session.name
    ));
    Ok(project)
}

/// Step a project's progress by `delta` percentage points.
///
/// The result is clamped to 0..=100 after the addition, whatever the
/// step size or current value.
pub fn adjust_progress(
    state: &PortalState,
    session: &Session,
    id: i64,
    delta: i32,
) -> Result<u8, PortalError> {
    if !policy::can_edit_project(session.role) {
        return Err(PortalError::forbidden(session.role, "update project progress"));
    }

    let updated = update_project(state, session, id, |project| {
        project.progress = (i32::from(project.progress) + delta).clamp(0, 100) as u8;
    })?;

    state.notifications.record(format!(
        "Project \"{}\" progress updated by {}",
        updated.name, session.name
    ));
    Ok(updated.progress)
}

/// Move a project to a new lifecycle stage.
pub fn set_status(
    state: &PortalState,
    session: &Session,
    id: i64,
    status: ProjectStatus,
) -> Result<Project, PortalError> {
    if !policy::can_edit_project(session.role) {
        return Err(PortalError::forbidden(session.role, "update project status"));
    }

    let updated = update_project(state, session, id, |project| {
        project.status = status;
    })?;

    state.notifications.record(format!(
        "Project \"{}\" status updated to \"{}\" by {}",
        updated.name, status, session.name
    ));
    Ok(updated)
}

/// Replace the set of roles a project is assigned to.
pub fn assign_roles(
    state: &PortalState,
    session: &Session,
    id: i64,
    roles: BTreeSet<Role>,
) -> Result<Project, PortalError> {
    if !policy::can_assign_project_roles(session.role) {
        return Err(PortalError::forbidden(session.role, "reassign project roles"));
    }

    let updated = update_project(state, session, id, |project| {
        project.assigned_roles = roles;
    })?;

    state.notifications.record(format!(
        "Project \"{}\" roles updated by {}",
        updated.name, session.name
    ));
    Ok(updated)
}

/// Select the design package a project's files are grouped under.
pub fn select_package(
    state: &PortalState,
    session: &Session,
    id: i64,
    package: DesignPackage,
) -> Result<Project, PortalError> {
    if !policy::can_select_package(session.role) {
        return Err(PortalError::forbidden(session.role, "select a design package"));
    }

    let updated = update_project(state, session, id, |project| {
        project.design_package = Some(package);
    })?;

    state.notifications.record(format!(
        "Project \"{}\" design package set to \"{}\" by {}",
        updated.name,
        package.name(),
        session.name
    ));
    Ok(updated)
}

/// Attach files to the project's selected package.
///
/// Files uploaded by non-customer roles are approved for the customer
/// immediately; a customer can never reach this intent.
pub fn upload_files(
    state: &PortalState,
    session: &Session,
    id: i64,
    file_names: &[String],
) -> Result<Project, PortalError> {
    if !policy::can_upload_file(session.role) {
        return Err(PortalError::forbidden(session.role, "upload files"));
    }
    if file_names.is_empty() {
        return Err(PortalError::validation("No files selected"));
    }

    let mut projects = state.projects.snapshot();
    let Some(project) = projects.iter_mut().find(|p| p.id == id) else {
        return Err(PortalError::not_found("project", id));
    };
    let Some(package) = project.design_package else {
        return Err(PortalError::validation(
            "Select a design package before uploading files",
        ));
    };

    let files = project.files.entry(package).or_default();
    for name in file_names {
        files.push(ProjectFile::new(name.clone(), session.name.clone(), session.role));
    }
    project.last_updated_by = Some(session.name.clone());
    let updated = project.clone();
    state.projects.replace(projects);

    state.notifications.record(format!(
        "Files uploaded for project \"{}\", package \"{}\"",
        updated.name,
        package.id()
    ));
    Ok(updated)
}

/// Approve one file for customer viewing. Flips exactly that file's
/// flag; siblings are untouched.
pub fn approve_file(
    state: &PortalState,
    session: &Session,
    id: i64,
    file_index: usize,
) -> Result<Project, PortalError> {
    if !policy::can_approve_file(session.role) {
        return Err(PortalError::forbidden(session.role, "approve files"));
    }

    let mut projects = state.projects.snapshot();
    let Some(project) = projects.iter_mut().find(|p| p.id == id) else {
        return Err(PortalError::not_found("project", id));
    };
    let file = project
        .design_package
        .and_then(|package| project.files.get_mut(&package))
        .and_then(|files| files.get_mut(file_index));
    let Some(file) = file else {
        return Err(PortalError::not_found("file", file_index));
    };

    file.approved_for_customer = true;
    project.last_updated_by = Some(session.name.clone());
    let updated = project.clone();
    state.projects.replace(projects);

    state
        .notifications
        .record(format!("File approved for Customer by {}", session.name));
    Ok(updated)
}

/// Remove one file from the project's selected package, by index
/// within that package's list.
pub fn remove_file(
    state: &PortalState,
    session: &Session,
    id: i64,
    file_index: usize,
) -> Result<Project, PortalError> {
    if !policy::can_remove_file(session.role) {
        return Err(PortalError::forbidden(session.role, "remove files"));
    }

    let mut projects = state.projects.snapshot();
    let Some(project) = projects.iter_mut().find(|p| p.id == id) else {
        return Err(PortalError::not_found("project", id));
    };
    let removed = project
        .design_package
        .and_then(|package| project.files.get_mut(&package))
        .filter(|files| file_index < files.len())
        .map(|files| files.remove(file_index));
    if removed.is_none() {
        return Err(PortalError::not_found("file", file_index));
    }
    project.last_updated_by = Some(session.name.clone());
    let updated = project.clone();
    state.projects.replace(projects);

    state
        .notifications
        .record(format!("File removed from project \"{}\"", updated.name));
    Ok(updated)
}

/// Fetch one project by id.
pub fn get_project(state: &PortalState, id: i64) -> Result<Project, PortalError> {
    state
        .projects
        .snapshot()
        .into_iter()
        .find(|p| p.id == id)
        .ok_or_else(|| PortalError::not_found("project", id))
}

/// The projects the session may see, in register order.
pub fn visible_projects(session: &Session, state: &PortalState) -> Vec<Project> {
    state
        .projects
        .snapshot()
        .into_iter()
        .filter(|p| policy::project_visible_to(session.role, &session.name, p))
        .collect()
}

/// One file row, carrying its index within the package list so
/// approve/remove callbacks can address it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRow {
    pub index: usize,
    pub name: String,
    pub uploaded_by: String,
    pub approved_for_customer: bool,
}

/// One project card with its visible files.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCard {
    pub project: Project,
    pub files: Vec<FileRow>,
}

/// View model for the projects panel.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsPanel {
    pub mode: PanelMode,
    pub can_assign_roles: bool,
    pub can_upload: bool,
    pub can_approve: bool,
    pub can_remove_files: bool,
    pub projects: Vec<ProjectCard>,
}

/// Build the projects panel for the session.
pub fn build_panel(session: &Session, state: &PortalState) -> ProjectsPanel {
    let role = session.role;
    let projects = visible_projects(session, state)
        .into_iter()
        .map(|project| {
            let files = project
                .design_package
                .map(|package| file_rows(&project, package, role))
                .unwrap_or_default();
            ProjectCard { project, files }
        })
        .collect();

    ProjectsPanel {
        mode: PanelMode::for_role(role, Panel::Projects),
        can_assign_roles: policy::can_assign_project_roles(role),
        can_upload: policy::can_upload_file(role),
        can_approve: policy::can_approve_file(role),
        can_remove_files: policy::can_remove_file(role),
        projects,
    }
}

fn file_rows(project: &Project, package: DesignPackage, role: Role) -> Vec<FileRow> {
    project
        .files
        .get(&package)
        .map(|files| {
            files
                .iter()
                .enumerate()
                .filter(|(_, file)| policy::can_view_file(role, file))
                .map(|(index, file)| FileRow {
                    index,
                    name: file.name.clone(),
                    uploaded_by: file.uploaded_by.clone(),
                    approved_for_customer: file.approved_for_customer,
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Copy-on-write update of one project: snapshot, mutate the copy,
/// stamp the actor, swap the register.
fn update_project(
    state: &PortalState,
    session: &Session,
    id: i64,
    apply: impl FnOnce(&mut Project),
) -> Result<Project, PortalError> {
    let mut projects = state.projects.snapshot();
    let Some(project) = projects.iter_mut().find(|p| p.id == id) else {
        return Err(PortalError::not_found("project", id));
    };
    apply(project);
    project.last_updated_by = Some(session.name.clone());
    let updated = project.clone();
    state.projects.replace(projects);
    Ok(updated)
}
