//! Application state.
//!
//! One [`PortalState`] owns the session slot, the five domain
//! registers, the notification log, and workspace settings. Panels
//! read snapshots and go through the service intents to write; nothing
//! outside this crate mutates a register directly.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::PortalError;
use crate::notifications::NotificationLog;
use crate::types::{
    DocumentItem, Meeting, Message, Project, ProjectStatus, Role, Session, TeamMember,
    WorkspaceSettings,
};
use crate::util::atomic_write_str;

/// File under the state directory holding the persisted roster.
const TEAM_ROSTER_FILE: &str = "team_members.json";

/// An ordered in-memory collection of one entity type.
///
/// Mutations replace the whole collection (copy-on-write): callers
/// take a snapshot, build the next version, and swap it in. Elements
/// are never edited in place through this type.
#[derive(Debug)]
pub struct Register<T> {
    items: Mutex<Vec<T>>,
}

impl<T: Clone> Register<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: Mutex::new(items),
        }
    }

    /// Owned snapshot in insertion order.
    pub fn snapshot(&self) -> Vec<T> {
        self.items.lock().map(|items| items.clone()).unwrap_or_default()
    }

    /// Swap in the next version of the collection.
    pub fn replace(&self, next: Vec<T>) {
        if let Ok(mut items) = self.items.lock() {
            *items = next;
        }
    }

    /// Append a single record.
    pub fn append(&self, item: T) {
        if let Ok(mut items) = self.items.lock() {
            items.push(item);
        }
    }

    pub fn len(&self) -> usize {
        self.items.lock().map(|items| items.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for Register<T> {
    fn default() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
        }
    }
}

/// State owned by the dashboard container.
pub struct PortalState {
    state_dir: PathBuf,
    pub session: Mutex<Option<Session>>,
    pub projects: Register<Project>,
    pub team: Register<TeamMember>,
    pub documents: Register<DocumentItem>,
    pub meetings: Register<Meeting>,
    pub messages: Register<Message>,
    pub notifications: NotificationLog,
    pub settings: Mutex<WorkspaceSettings>,
}

impl PortalState {
    /// Open the portal state rooted at `state_dir`.
    ///
    /// The team roster is the one register that survives restarts; it
    /// is read here once and rewritten after every change. All other
    /// registers start empty.
    pub fn open(state_dir: &Path) -> Self {
        let team = match load_team_roster(&state_dir.join(TEAM_ROSTER_FILE)) {
            Ok(Some(members)) => members,
            Ok(None) => default_team(),
            Err(e) => {
                log::warn!("Failed to load team roster: {e}. Using defaults.");
                default_team()
            }
        };

        Self {
            state_dir: state_dir.to_path_buf(),
            session: Mutex::new(None),
            projects: Register::default(),
            team: Register::new(team),
            documents: Register::default(),
            meetings: Register::default(),
            messages: Register::default(),
            notifications: NotificationLog::new(),
            settings: Mutex::new(WorkspaceSettings::default()),
        }
    }

    /// Current session, if someone is logged in.
    pub fn current_session(&self) -> Option<Session> {
        self.session.lock().map(|s| s.clone()).unwrap_or(None)
    }

    pub fn set_session(&self, session: Option<Session>) {
        if let Ok(mut guard) = self.session.lock() {
            *guard = session;
        }
    }

    /// Persist the team roster to disk. Pretty JSON, atomic rename.
    pub fn save_team_roster(&self) -> Result<(), PortalError> {
        let members = self.team.snapshot();
        let content = serde_json::to_string_pretty(&members)
            .map_err(|e| PortalError::Persistence(format!("Serialize error: {e}")))?;
        atomic_write_str(&self.state_dir.join(TEAM_ROSTER_FILE), &content)?;
        Ok(())
    }

    /// Seed the projects register with the demo engagements.
    pub fn install_demo_data(&self) {
        self.projects.replace(demo_projects());
        log::info!("Installed demo data: {} projects", self.projects.len());
    }
}

/// Default state directory (`~/.studioport`).
pub fn default_state_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_default().join(".studioport")
}

/// Read the roster file. `Ok(None)` means the file does not exist yet
/// (first run); records without an id get one assigned during
/// deserialization.
fn load_team_roster(path: &Path) -> Result<Option<Vec<TeamMember>>, PortalError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| PortalError::Persistence(format!("Failed to read roster: {e}")))?;
    let members: Vec<TeamMember> = serde_json::from_str(&content)
        .map_err(|e| PortalError::Persistence(format!("Failed to parse roster: {e}")))?;
    Ok(Some(members))
}

/// First-run roster.
fn default_team() -> Vec<TeamMember> {
    vec![
        TeamMember::new("Alex Morgan", "Admin"),
        TeamMember::new("Sarah Johnson", "Customer"),
        TeamMember::new("Emma Stone", "Architect"),
    ]
}

/// The demo project book.
fn demo_projects() -> Vec<Project> {
    fn project(
        id: i64,
        name: &str,
        customer: &str,
        status: ProjectStatus,
        progress: u8,
        roles: &[Role],
    ) -> Project {
        Project {
            id,
            name: name.to_string(),
            customer: customer.to_string(),
            status,
            progress,
            assigned_roles: roles.iter().copied().collect(),
            last_updated_by: None,
            design_package: None,
            files: Default::default(),
        }
    }

    vec![
        project(
            1,
            "Modern Villa Design",
            "John Smith",
            ProjectStatus::InProgress,
            75,
            &[Role::Architect],
        ),
        project(
            2,
            "Commercial Office Space",
            "Tech Solutions Inc",
            ProjectStatus::Review,
            90,
            &[Role::Architect, Role::Admin],
        ),
        project(
            3,
            "Luxury Apartment Renovation",
            "Sarah Johnson",
            ProjectStatus::Planning,
            30,
            &[Role::Customer],
        ),
        project(
            4,
            "Retail Store Design",
            "Fashion Outlet",
            ProjectStatus::Completed,
            100,
            &[Role::Structural],
        ),
    ]
}
