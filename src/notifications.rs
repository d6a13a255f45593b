//! Notification log.
//!
//! Append-only list of human-readable audit strings, most recent
//! first. Every successful register mutation records exactly one
//! entry; the badge indicator only needs the count.

use std::sync::Mutex;

/// Shared notification log. Grows without bound; there is no read
/// tracking beyond "is it non-empty".
#[derive(Debug, Default)]
pub struct NotificationLog {
    entries: Mutex<Vec<String>>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message at the head of the log.
    pub fn record(&self, message: impl Into<String>) {
        let message = message.into();
        log::debug!("notification: {message}");
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(0, message);
        }
    }

    /// Number of recorded notifications.
    pub fn count(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    /// Drives the badge dot.
    pub fn has_unread(&self) -> bool {
        self.count() > 0
    }

    /// Snapshot of the log, most recent first.
    pub fn snapshot(&self) -> Vec<String> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_inserts_at_head() {
        let log = NotificationLog::new();
        log.record("first");
        log.record("second");

        assert_eq!(log.snapshot(), vec!["second".to_string(), "first".to_string()]);
        assert_eq!(log.count(), 2);
    }

    #[test]
    fn test_unread_indicator_is_any_nonzero_count() {
        let log = NotificationLog::new();
        assert!(!log.has_unread());
        log.record("Meeting removed.");
        assert!(log.has_unread());
    }
}
