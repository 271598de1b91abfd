//! Issue records and creation outcomes -- the data flowing between the
//! extractor and the publisher.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Extracted records
// ---------------------------------------------------------------------------

/// One parsed unit of work, destined to become one tracker issue.
///
/// Records carry no identity of their own; their position in the extraction
/// order is all the pipeline relies on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRecord {
    /// Issue title, taken verbatim from the document.
    pub title: String,

    /// Labels in fixed kind, area, complexity order. May be empty.
    pub labels: Vec<String>,

    /// Issue body. May be empty; internal blank lines are preserved.
    pub body: String,
}

impl IssueRecord {
    /// Labels joined for the tracker client (`feature,database,low`).
    /// Empty string when the record carries no labels.
    pub fn labels_csv(&self) -> String {
        self.labels.join(",")
    }
}

// ---------------------------------------------------------------------------
// Creation outcomes
// ---------------------------------------------------------------------------

/// Outcome of a single issue-creation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CreationOutcome {
    /// The tracker accepted the issue.
    Created {
        /// Canonical URL of the created issue, as reported by the tracker.
        url: String,
    },
    /// The tracker rejected the issue or could not be invoked.
    Failed {
        /// Diagnostic text from the tracker client, verbatim.
        error: String,
    },
}

impl CreationOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created { .. })
    }
}

/// One entry in the run log: exactly one per record handed to the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreationResult {
    /// Display name of the source document (e.g. "Stage 1: Database").
    pub document: String,

    /// Title of the attempted issue.
    pub title: String,

    #[serde(flatten)]
    pub outcome: CreationOutcome,
}
