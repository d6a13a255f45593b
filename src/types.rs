//! Shared type definitions for the portal core.
//!
//! Everything here is a plain value container; behavior lives in the
//! policy layer and the per-panel services.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::packages::DesignPackage;

/// Default avatar reference used when no image is on file.
pub const PLACEHOLDER_AVATAR: &str = "/placeholder.svg";

/// Staff and customer roles.
///
/// The role is the single input to every visibility and mutation
/// decision. Call sites historically spelled roles several ways
/// ("super-admin", "Structural Team", "super admin"); [`Role::parse`]
/// is the one boundary that accepts all of them, and [`fmt::Display`]
/// is the one canonical output form (spaced title case).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    #[serde(alias = "Super Admin", alias = "super admin")]
    SuperAdmin,
    #[serde(alias = "Admin")]
    Admin,
    #[serde(alias = "Architect")]
    Architect,
    #[serde(
        alias = "structural-team",
        alias = "Structural",
        alias = "Structural Team",
        alias = "structural team"
    )]
    Structural,
    #[serde(alias = "Customer")]
    Customer,
}

impl Role {
    /// Every role, in the order the login screen offers them.
    pub const ALL: [Role; 5] = [
        Role::SuperAdmin,
        Role::Admin,
        Role::Architect,
        Role::Customer,
        Role::Structural,
    ];

    /// Parse any of the spellings found at the old call sites.
    ///
    /// Normalizes case, whitespace, and hyphens, and strips the
    /// "-team" suffix the structural role sometimes carried.
    pub fn parse(value: &str) -> Option<Role> {
        let key = value
            .trim()
            .to_lowercase()
            .split(|c: char| c == ' ' || c == '-' || c == '_')
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("-");
        let key = key.strip_suffix("-team").unwrap_or(&key);
        match key {
            "super-admin" => Some(Role::SuperAdmin),
            "admin" => Some(Role::Admin),
            "architect" => Some(Role::Architect),
            "structural" => Some(Role::Structural),
            "customer" => Some(Role::Customer),
            _ => None,
        }
    }

    /// Kebab-case identifier, matching the serialized form.
    pub fn slug(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super-admin",
            Role::Admin => "admin",
            Role::Architect => "architect",
            Role::Structural => "structural",
            Role::Customer => "customer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::SuperAdmin => "Super Admin",
            Role::Admin => "Admin",
            Role::Architect => "Architect",
            Role::Structural => "Structural",
            Role::Customer => "Customer",
        };
        f.write_str(label)
    }
}

/// The authenticated user for the current session.
///
/// Created on login, cleared on logout. The role always comes from a
/// verified identity claim; the UI never picks it independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub name: String,
    pub role: Role,
    #[serde(default = "default_avatar")]
    pub avatar: String,
}

impl Session {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
            avatar: PLACEHOLDER_AVATAR.to_string(),
        }
    }
}

fn default_avatar() -> String {
    PLACEHOLDER_AVATAR.to_string()
}

/// Lifecycle stage of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    Planning,
    #[serde(rename = "In Progress")]
    InProgress,
    Review,
    Completed,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 4] = [
        ProjectStatus::Planning,
        ProjectStatus::InProgress,
        ProjectStatus::Review,
        ProjectStatus::Completed,
    ];
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProjectStatus::Planning => "Planning",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Review => "Review",
            ProjectStatus::Completed => "Completed",
        };
        f.write_str(label)
    }
}

/// A file attached to a project under one design package.
///
/// Files uploaded by a customer start unapproved and stay hidden from
/// customer sessions until an admin approves them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFile {
    pub name: String,
    pub uploaded_by: String,
    pub approved_for_customer: bool,
}

impl ProjectFile {
    pub fn new(name: impl Into<String>, uploaded_by: impl Into<String>, uploader: Role) -> Self {
        Self {
            name: name.into(),
            uploaded_by: uploaded_by.into(),
            approved_for_customer: uploader != Role::Customer,
        }
    }
}

/// A design engagement for one customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub customer: String,
    pub status: ProjectStatus,
    /// Always within 0..=100.
    pub progress: u8,
    pub assigned_roles: BTreeSet<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub design_package: Option<DesignPackage>,
    /// Uploaded files, keyed by the package they belong to.
    #[serde(default)]
    pub files: HashMap<DesignPackage, Vec<ProjectFile>>,
}

/// A member of the studio roster.
///
/// The id is assigned at creation and is the key for update/remove;
/// names are display data and may repeat. `role` stays free-form text
/// here (the roster predates the closed [`Role`] enum and holds titles
/// like "Structural Team" or "New Role").
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    #[serde(default = "new_member_id")]
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(default = "default_avatar")]
    pub avatar: String,
}

impl TeamMember {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: new_member_id(),
            name: name.into(),
            role: role.into(),
            avatar: PLACEHOLDER_AVATAR.to_string(),
        }
    }
}

pub(crate) fn new_member_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// An entry in the shared document register. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentItem {
    pub id: i64,
    pub name: String,
    pub uploaded_by: String,
}

/// A scheduled meeting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    /// Millisecond wall-clock timestamp taken at creation.
    pub id: i64,
    pub title: String,
    pub assigned_to: Vec<String>,
    /// ISO date (`YYYY-MM-DD`).
    pub date: String,
}

/// A direct message between two people.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Millisecond wall-clock timestamp taken at creation.
    pub id: i64,
    pub from: String,
    pub to: String,
    pub content: String,
    /// RFC 3339 timestamp.
    pub date: String,
}

/// Workspace settings shown on the settings panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSettings {
    pub profile_name: String,
    pub profile_email: String,
    pub password: String,
    pub preferences: String,
    pub notifications: String,
}

impl Default for WorkspaceSettings {
    fn default() -> Self {
        Self {
            profile_name: "John Doe".to_string(),
            profile_email: "john@example.com".to_string(),
            password: "********".to_string(),
            preferences: "Default Preferences".to_string(),
            notifications: "All Notifications".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_canonical_forms() {
        assert_eq!(Role::parse("Super Admin"), Some(Role::SuperAdmin));
        assert_eq!(Role::parse("Admin"), Some(Role::Admin));
        assert_eq!(Role::parse("Architect"), Some(Role::Architect));
        assert_eq!(Role::parse("Structural"), Some(Role::Structural));
        assert_eq!(Role::parse("Customer"), Some(Role::Customer));
    }

    #[test]
    fn test_role_parse_legacy_spellings() {
        assert_eq!(Role::parse("super-admin"), Some(Role::SuperAdmin));
        assert_eq!(Role::parse("super admin"), Some(Role::SuperAdmin));
        assert_eq!(Role::parse("structural-team"), Some(Role::Structural));
        assert_eq!(Role::parse("Structural Team"), Some(Role::Structural));
        assert_eq!(Role::parse("  customer "), Some(Role::Customer));
        assert_eq!(Role::parse("contractor"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn test_role_display_round_trips_through_parse() {
        for role in Role::ALL {
            assert_eq!(Role::parse(&role.to_string()), Some(role));
            assert_eq!(Role::parse(role.slug()), Some(role));
        }
    }

    #[test]
    fn test_role_serde_uses_kebab_case() {
        let json = serde_json::to_string(&Role::SuperAdmin).expect("serialize");
        assert_eq!(json, "\"super-admin\"");
        let back: Role = serde_json::from_str("\"Structural Team\"").expect("alias");
        assert_eq!(back, Role::Structural);
    }

    #[test]
    fn test_status_serde_matches_display() {
        for status in ProjectStatus::ALL {
            let json = serde_json::to_string(&status).expect("serialize");
            assert_eq!(json, format!("\"{}\"", status));
        }
    }

    #[test]
    fn test_file_approval_follows_uploader_role() {
        let by_architect = ProjectFile::new("plan.pdf", "Emma Stone", Role::Architect);
        assert!(by_architect.approved_for_customer);

        let by_customer = ProjectFile::new("wishlist.pdf", "Sarah Johnson", Role::Customer);
        assert!(!by_customer.approved_for_customer);
    }

    #[test]
    fn test_team_member_roster_record_without_id_gets_one() {
        let member: TeamMember = serde_json::from_str(
            r#"{"name":"Alex Morgan","role":"Admin","avatar":"/placeholder.svg"}"#,
        )
        .expect("legacy roster record");
        assert!(!member.id.is_empty());
        assert_eq!(member.name, "Alex Morgan");
    }
}
