//! Identity and sign-in.
//!
//! Credential verification is delegated to an [`IdentityProvider`];
//! the session role always derives from the provider's verified
//! claims, never from an independent UI choice. Provider failures are
//! surfaced verbatim so the sign-in screen can show them as-is.

use crate::error::PortalError;
use crate::state::PortalState;
use crate::types::{Role, Session};

/// Claims returned by a successful credential check.
#[derive(Debug, Clone)]
pub struct IdentityClaims {
    pub email: String,
    pub name: String,
    pub role: Role,
}

/// Verifies an email/password pair and returns identity claims.
pub trait IdentityProvider {
    fn verify(&self, email: &str, password: &str) -> Result<IdentityClaims, PortalError>;
}

/// One account in the in-process directory.
#[derive(Debug, Clone)]
pub struct DirectoryAccount {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Role,
}

/// In-process identity provider backed by a fixed account list.
///
/// Stands in for the hosted email/password service in tests and the
/// demo binary.
#[derive(Debug, Default)]
pub struct StaticDirectory {
    accounts: Vec<DirectoryAccount>,
}

impl StaticDirectory {
    pub fn new(accounts: Vec<DirectoryAccount>) -> Self {
        Self { accounts }
    }

    /// Directory seeded with the studio's demo accounts.
    pub fn demo() -> Self {
        let account = |email: &str, name: &str, role: Role| DirectoryAccount {
            email: email.to_string(),
            password: "demo1234".to_string(),
            name: name.to_string(),
            role,
        };
        Self::new(vec![
            account("alex@example.com", "Alex Morgan", Role::SuperAdmin),
            account("john@example.com", "John Smith", Role::Admin),
            account("emma@example.com", "Emma Stone", Role::Architect),
            account("priya@example.com", "Priya Patel", Role::Structural),
            account("sarah@example.com", "Sarah Johnson", Role::Customer),
        ])
    }
}

impl IdentityProvider for StaticDirectory {
    fn verify(&self, email: &str, password: &str) -> Result<IdentityClaims, PortalError> {
        self.accounts
            .iter()
            .find(|a| a.email.eq_ignore_ascii_case(email) && a.password == password)
            .map(|a| IdentityClaims {
                email: a.email.clone(),
                name: a.name.clone(),
                role: a.role,
            })
            .ok_or_else(|| PortalError::Auth("Invalid login credentials".to_string()))
    }
}

/// Sign in through `provider` and seed the session from its claims.
pub fn login(
    state: &PortalState,
    provider: &dyn IdentityProvider,
    email: &str,
    password: &str,
) -> Result<Session, PortalError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(PortalError::validation("Email and password are required."));
    }

    let claims = provider.verify(email, password)?;
    let session = Session::new(claims.name, claims.role);
    state.set_session(Some(session.clone()));
    log::info!("Signed in: {} ({})", session.name, session.role);
    Ok(session)
}

/// Clear the session.
pub fn logout(state: &PortalState) {
    if let Some(session) = state.current_session() {
        log::info!("Signed out: {}", session.name);
    }
    state.set_session(None);
}

/// Seed a session for `role` without credential verification.
///
/// The demo counterpart of the old role-button login: customers sign
/// in as "Sarah Johnson", every staff role as "Alex Morgan". Demo and
/// test use only.
pub fn demo_login(state: &PortalState, role: Role) -> Session {
    let name = match role {
        Role::Customer => "Sarah Johnson",
        _ => "Alex Morgan",
    };
    let session = Session::new(name, role);
    state.set_session(Some(session.clone()));
    session
}
