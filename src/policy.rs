//! Role policy.
//!
//! Pure functions mapping a role to what it can see and what it can
//! change. Every panel asks this module instead of comparing role
//! strings locally; the tables here are the single source of truth.

use serde::Serialize;

use crate::types::{Project, ProjectFile, Role};

/// One dashboard section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Panel {
    Overview,
    Projects,
    Team,
    Documents,
    Calendar,
    Messages,
    Settings,
}

impl Panel {
    /// Sidebar order.
    pub const NAV_ORDER: [Panel; 7] = [
        Panel::Overview,
        Panel::Projects,
        Panel::Team,
        Panel::Documents,
        Panel::Calendar,
        Panel::Messages,
        Panel::Settings,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Panel::Overview => "overview",
            Panel::Projects => "projects",
            Panel::Team => "team",
            Panel::Documents => "documents",
            Panel::Calendar => "calendar",
            Panel::Messages => "messages",
            Panel::Settings => "settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Panel::Overview => "Overview",
            Panel::Projects => "Projects",
            Panel::Team => "Team",
            Panel::Documents => "Documents",
            Panel::Calendar => "Calendar",
            Panel::Messages => "Messages",
            Panel::Settings => "Settings",
        }
    }
}

/// Whether a panel renders editable controls or static text.
///
/// Selected once per build from the role; the only way the mode changes
/// is a session change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelMode {
    Edit,
    View,
}

impl PanelMode {
    pub fn for_role(role: Role, panel: Panel) -> PanelMode {
        if can_mutate(role, panel) {
            PanelMode::Edit
        } else {
            PanelMode::View
        }
    }
}

/// Can `role` open `panel` at all?
pub fn can_access(role: Role, panel: Panel) -> bool {
    use Role::*;
    match panel {
        Panel::Overview | Panel::Projects => true,
        Panel::Team | Panel::Calendar => matches!(role, SuperAdmin | Admin | Architect),
        // Settings visibility and mutation use the same pair; the wider
        // edit set the old settings screen carried was unreachable.
        Panel::Documents | Panel::Settings => matches!(role, SuperAdmin | Admin),
        Panel::Messages => !matches!(role, Structural),
    }
}

/// Can `role` change the register behind `panel`?
pub fn can_mutate(role: Role, panel: Panel) -> bool {
    match panel {
        Panel::Overview => false,
        // A customer still creates their own projects and picks a
        // package; see the project sub-rules below.
        Panel::Projects => role != Role::Customer,
        _ => can_access(role, panel),
    }
}

/// Navigation items visible to `role`, in sidebar order.
pub fn visible_nav_items(role: Role) -> Vec<Panel> {
    Panel::NAV_ORDER
        .into_iter()
        .filter(|panel| can_access(role, *panel))
        .collect()
}

// --- Project sub-rules ---

/// Everyone may create a project; a customer's project is always their
/// own (the creation intent pins the customer field to their name).
pub fn can_create_project(_role: Role) -> bool {
    true
}

/// Status, progress, and file operations on existing projects.
pub fn can_edit_project(role: Role) -> bool {
    role != Role::Customer
}

/// Only admins reassign the roles a project is visible to.
pub fn can_assign_project_roles(role: Role) -> bool {
    matches!(role, Role::SuperAdmin | Role::Admin)
}

/// Package selection is open to every role with project access,
/// customers included.
pub fn can_select_package(_role: Role) -> bool {
    true
}

// --- File sub-rules ---

pub fn can_upload_file(role: Role) -> bool {
    role != Role::Customer
}

pub fn can_approve_file(role: Role) -> bool {
    matches!(role, Role::SuperAdmin | Role::Admin)
}

pub fn can_remove_file(role: Role) -> bool {
    matches!(
        role,
        Role::Architect | Role::Admin | Role::SuperAdmin | Role::Structural
    )
}

/// A customer only sees a file once it has been approved for them.
pub fn can_view_file(role: Role, file: &ProjectFile) -> bool {
    role != Role::Customer || file.approved_for_customer
}

// --- Calendar sub-rule ---

pub fn can_create_meeting(role: Role) -> bool {
    can_mutate(role, Panel::Calendar)
}

// --- Project visibility ---

/// Which projects a session sees.
///
/// Super Admin sees everything; a customer sees the projects filed
/// under their own name; everyone else sees the projects their role is
/// assigned to.
pub fn project_visible_to(role: Role, user_name: &str, project: &Project) -> bool {
    match role {
        Role::SuperAdmin => true,
        Role::Customer => project.customer == user_name,
        other => project.assigned_roles.contains(&other),
    }
}

// --- Stat tiles ---

/// Identifier for one overview stat tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StatId {
    ActiveProjects,
    PendingApprovals,
    TeamMembers,
    UpcomingMeetings,
    AssignedTasks,
}

/// Static description of a stat tile; values are computed at build
/// time by the overview service.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatDescriptor {
    pub id: StatId,
    pub title: &'static str,
    pub change: &'static str,
    #[serde(skip)]
    pub roles: &'static [Role],
}

static STATS: [StatDescriptor; 5] = [
    StatDescriptor {
        id: StatId::ActiveProjects,
        title: "Active Projects",
        change: "+2 this month",
        roles: &[Role::SuperAdmin, Role::Admin, Role::Architect, Role::Customer],
    },
    StatDescriptor {
        id: StatId::PendingApprovals,
        title: "Pending Approvals",
        change: "3 requiring attention",
        roles: &[Role::SuperAdmin, Role::Admin],
    },
    StatDescriptor {
        id: StatId::TeamMembers,
        title: "Team Members",
        change: "2 new hires",
        roles: &[Role::SuperAdmin, Role::Admin, Role::Architect],
    },
    StatDescriptor {
        id: StatId::UpcomingMeetings,
        title: "Upcoming Meetings",
        change: "This week",
        roles: &[Role::SuperAdmin, Role::Architect],
    },
    StatDescriptor {
        id: StatId::AssignedTasks,
        title: "Assigned Tasks",
        change: "2 new tasks",
        roles: &[Role::Structural],
    },
];

/// Every stat tile, in display order.
pub fn stat_descriptors() -> &'static [StatDescriptor] {
    &STATS
}

/// Stat tiles visible to `role`, in display order.
pub fn visible_stats(role: Role) -> Vec<StatDescriptor> {
    STATS
        .iter()
        .filter(|stat| stat.roles.contains(&role))
        .copied()
        .collect()
}
