//! The narrow interface between the publishing pipeline and the external
//! issue tracker.
//!
//! Consumers depend on this trait rather than on a concrete client so that
//! an in-memory fake can be substituted in tests. The real implementation,
//! backed by the GitHub CLI, lives in `sower-gh`.

use thiserror::Error;

use crate::labels::LabelSpec;

/// Errors surfaced by a tracker client.
///
/// The message carries the client's diagnostic text verbatim; the
/// publisher records it without rewording.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// The client binary could not be launched at all.
    #[error("failed to launch tracker client: {0}")]
    Launch(String),

    /// The client ran and reported failure.
    #[error("{0}")]
    Command(String),
}

/// Issue-tracker operations the publisher needs.
pub trait Tracker {
    /// Create `label` in the target repository, or update it in place when
    /// it already exists. Safe to call repeatedly.
    fn ensure_label(&self, label: &LabelSpec) -> Result<(), TrackerError>;

    /// Create one issue and return its canonical URL.
    ///
    /// `labels` is the comma-joined label list; when it is empty the
    /// client must not send a label argument at all.
    fn create_issue(
        &self,
        title: &str,
        body: &str,
        labels: &str,
    ) -> Result<String, TrackerError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_pass_through() {
        let err = TrackerError::Command("label not found".to_string());
        assert_eq!(err.to_string(), "label not found");

        let err = TrackerError::Launch("No such file or directory".to_string());
        assert!(err.to_string().contains("failed to launch"));
        assert!(err.to_string().contains("No such file or directory"));
    }
}
