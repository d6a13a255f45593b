//! Contact form.
//!
//! Collects name, email, subject, and message. Submission has no
//! backend; it logs the inquiry and hands back the confirmation line
//! for the dialog.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::PortalError;
use crate::packages::DesignPackage;

/// Confirmation shown after a successful submission.
pub const CONFIRMATION: &str = "Thank you for your message! We'll get back to you soon.";

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex"))
}

/// Bound state for the contact form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Form pre-filled from the `package` query parameter the services
    /// page attaches when a visitor picks a tier.
    pub fn prefill_for_package(package: DesignPackage) -> Self {
        Self {
            subject: format!("Project inquiry: {}", package.name()),
            ..Default::default()
        }
    }

    /// Pre-fill from the raw route parameter; unknown package names
    /// fall back to an empty form.
    pub fn from_route_package(param: &str) -> Self {
        DesignPackage::parse(param)
            .map(Self::prefill_for_package)
            .unwrap_or_default()
    }

    /// All four fields are required; the email must look like one.
    pub fn validate(&self) -> Result<(), PortalError> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.subject.trim().is_empty()
            || self.message.trim().is_empty()
        {
            return Err(PortalError::validation("Please fill in all fields."));
        }
        if !email_re().is_match(self.email.trim()) {
            return Err(PortalError::validation(format!(
                "Invalid email address: {}",
                self.email
            )));
        }
        Ok(())
    }

    /// Validate and "send" the inquiry. There is no backend; the
    /// submission is logged and the confirmation line returned.
    pub fn submit(self) -> Result<&'static str, PortalError> {
        self.validate()?;
        log::info!(
            "Contact form submitted by {} <{}>: {} — {}",
            self.name.trim(),
            self.email.trim(),
            self.subject.trim(),
            self.message.trim()
        );
        Ok(CONFIRMATION)
    }
}
