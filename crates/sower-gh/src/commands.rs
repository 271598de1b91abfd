//! GitHub CLI command execution wrappers.
//!
//! Thin layer over spawning `gh` as a subprocess, so the tracker client
//! never touches `std::process::Command` itself. All invocations are
//! synchronous and capture output.

use std::path::Path;
use std::process::Command;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur when running gh commands.
#[derive(Debug, Error)]
pub enum GhError {
    /// The gh binary could not be found or spawned.
    #[error("failed to execute gh: {0}")]
    SpawnError(#[from] std::io::Error),

    /// The gh command exited with a non-zero status.
    #[error("gh command failed (exit code {code:?}): {stderr}")]
    CommandFailed {
        /// The exit code, or `None` if the process was killed by a signal.
        code: Option<i32>,
        /// The content of stderr, trimmed.
        stderr: String,
    },
}

/// A specialized `Result` type for gh operations.
pub type Result<T> = std::result::Result<T, GhError>;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Execute a `gh` command with the given arguments and working directory.
///
/// Returns the trimmed contents of stdout on success. Unless an explicit
/// `--repo` argument is included, `gh` resolves the target repository from
/// the git checkout at `cwd`.
///
/// # Errors
///
/// Returns [`GhError::SpawnError`] if `gh` cannot be found, or
/// [`GhError::CommandFailed`] if the command exits with a non-zero status.
///
/// # Examples
///
/// ```no_run
/// use sower_gh::commands::gh_command;
/// use std::path::Path;
///
/// let login = gh_command(&["api", "user", "--jq", ".login"], Path::new(".")).unwrap();
/// println!("Authenticated as: {login}");
/// ```
pub fn gh_command(args: &[&str], cwd: &Path) -> Result<String> {
    let output = Command::new("gh")
        .args(args)
        .current_dir(cwd)
        .output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(GhError::CommandFailed {
            code: output.status.code(),
            stderr,
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    Ok(stdout)
}

/// Check that the GitHub CLI is installed and runnable.
///
/// Runs `gh --version` and returns the first line of its output, e.g.
/// `gh version 2.40.1 (2024-01-09)`. This is the startup pre-flight: when
/// it fails, no tracker work can happen at all.
pub fn check_gh_available(cwd: &Path) -> Result<String> {
    let output = gh_command(&["--version"], cwd)?;
    Ok(output.lines().next().unwrap_or_default().to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gh_command_bad_cwd() {
        // Spawning with a vanished working directory fails whether or not
        // gh is installed on the machine running the tests.
        let tmp = tempfile::tempdir().unwrap();
        let gone = tmp.path().to_path_buf();
        drop(tmp);

        let result = gh_command(&["--version"], &gone);
        assert!(result.is_err());
    }

    #[test]
    fn test_command_failed_display() {
        let err = GhError::CommandFailed {
            code: Some(1),
            stderr: "GraphQL: Something went wrong".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("exit code Some(1)"), "unexpected: {msg}");
        assert!(msg.contains("GraphQL: Something went wrong"));
    }

    #[test]
    fn test_spawn_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory");
        let err = GhError::from(io);
        assert!(matches!(err, GhError::SpawnError(_)));
        assert!(err.to_string().contains("failed to execute gh"));
    }
}
