//! Error types for portal intents.
//!
//! Errors are classified by cause:
//! - Validation: a required field is missing or malformed
//! - Forbidden: the acting role lacks the right for the operation
//! - NotFound: the target record no longer exists
//! - Auth: the identity provider rejected the sign-in
//! - Persistence: the roster file could not be read or written

use thiserror::Error;

use crate::types::Role;

/// Error type for portal intents.
#[derive(Debug, Error)]
pub enum PortalError {
    #[error("{0}")]
    Validation(String),

    #[error("{role} is not allowed to {action}")]
    Forbidden { role: Role, action: &'static str },

    #[error("{what} not found: {id}")]
    NotFound { what: &'static str, id: String },

    #[error("{0}")]
    Auth(String),

    #[error("Not logged in")]
    NotLoggedIn,

    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl PortalError {
    pub fn validation(message: impl Into<String>) -> Self {
        PortalError::Validation(message.into())
    }

    pub fn forbidden(role: Role, action: &'static str) -> Self {
        PortalError::Forbidden { role, action }
    }

    pub fn not_found(what: &'static str, id: impl ToString) -> Self {
        PortalError::NotFound {
            what,
            id: id.to_string(),
        }
    }

    /// Returns true if this error is a rejected user input.
    pub fn is_validation(&self) -> bool {
        matches!(self, PortalError::Validation(_))
    }

    /// Returns true if the operation was blocked by the role policy.
    pub fn is_permission_denied(&self) -> bool {
        matches!(
            self,
            PortalError::Forbidden { .. } | PortalError::NotLoggedIn
        )
    }
}

impl From<std::io::Error> for PortalError {
    fn from(err: std::io::Error) -> Self {
        PortalError::Persistence(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forbidden_message_names_role_and_action() {
        let err = PortalError::forbidden(Role::Customer, "upload files");
        assert_eq!(err.to_string(), "Customer is not allowed to upload files");
        assert!(err.is_permission_denied());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_validation_message_is_verbatim() {
        let err = PortalError::validation("Please fill all meeting details.");
        assert_eq!(err.to_string(), "Please fill all meeting details.");
        assert!(err.is_validation());
    }
}
