//! The tracker client backed by the GitHub CLI.

use std::path::{Path, PathBuf};

use sower_core::labels::LabelSpec;
use sower_core::tracker::{Tracker, TrackerError};

use crate::commands::{GhError, gh_command};

/// [`Tracker`] implementation that shells out to `gh`.
///
/// Every invocation runs with `cwd` as its working directory so that `gh`
/// resolves the target repository from that checkout's git remote. An
/// explicit `repo` (`owner/name`) is forwarded as `--repo` and overrides
/// the resolution.
#[derive(Debug, Clone)]
pub struct GhTracker {
    cwd: PathBuf,
    repo: Option<String>,
}

impl GhTracker {
    pub fn new(cwd: &Path, repo: Option<String>) -> Self {
        Self {
            cwd: cwd.to_path_buf(),
            repo,
        }
    }

    fn run<'a>(&'a self, mut args: Vec<&'a str>) -> Result<String, GhError> {
        if let Some(ref repo) = self.repo {
            args.push("--repo");
            args.push(repo);
        }
        gh_command(&args, &self.cwd)
    }
}

impl Tracker for GhTracker {
    fn ensure_label(&self, label: &LabelSpec) -> Result<(), TrackerError> {
        self.run(label_create_args(label))?;
        Ok(())
    }

    fn create_issue(
        &self,
        title: &str,
        body: &str,
        labels: &str,
    ) -> Result<String, TrackerError> {
        let url = self.run(issue_create_args(title, body, labels))?;
        Ok(url)
    }
}

impl From<GhError> for TrackerError {
    fn from(err: GhError) -> Self {
        match err {
            GhError::SpawnError(e) => TrackerError::Launch(e.to_string()),
            GhError::CommandFailed { code, stderr } => {
                if stderr.is_empty() {
                    TrackerError::Command(format!("gh exited with code {code:?}"))
                } else {
                    TrackerError::Command(stderr)
                }
            }
        }
    }
}

/// Arguments for `gh label create`. `--force` turns an already-existing
/// label into an in-place update instead of a failure.
fn label_create_args(label: &LabelSpec) -> Vec<&str> {
    vec![
        "label",
        "create",
        label.name,
        "--color",
        label.color,
        "--description",
        label.description,
        "--force",
    ]
}

/// Arguments for `gh issue create`. The label argument is omitted entirely
/// when `labels` is empty.
fn issue_create_args<'a>(title: &'a str, body: &'a str, labels: &'a str) -> Vec<&'a str> {
    let mut args = vec!["issue", "create", "--title", title, "--body", body];
    if !labels.is_empty() {
        args.push("--label");
        args.push(labels);
    }
    args
}
