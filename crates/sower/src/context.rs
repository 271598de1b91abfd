//! Runtime context for command execution.
//!
//! The [`RuntimeContext`] holds the state every command handler needs:
//! resolved project root, target repository, and global flags. Stage
//! resolution (which planning documents a run covers) lives here too.

use std::env;
use std::path::{Path, PathBuf};

use crate::cli::GlobalArgs;

/// Directory under the project root where stage documents live.
pub const PLANS_DIR: &str = ".github/issues";

/// File names and display names of the default stage documents, in run
/// order.
const DEFAULT_STAGES: [(&str, &str); 3] = [
    ("stage-1-database.md", "Stage 1: Database"),
    ("stage-2-backend.md", "Stage 2: Backend"),
    ("stage-3-frontend.md", "Stage 3: Frontend"),
];

/// Runtime context passed to every command handler.
///
/// Constructed once in `main` after CLI parsing, before command dispatch.
#[derive(Debug)]
pub struct RuntimeContext {
    /// Explicit project root from `--root` or `SOWER_ROOT`.
    pub root: Option<PathBuf>,

    /// Target repository (`owner/name`) to forward to the tracker client.
    pub repo: Option<String>,

    /// Whether to produce JSON output.
    pub json: bool,

    /// Verbose output.
    pub verbose: bool,

    /// Quiet mode: suppress progress output.
    pub quiet: bool,
}

impl RuntimeContext {
    /// Build a `RuntimeContext` from parsed global arguments.
    pub fn from_global_args(global: &GlobalArgs) -> Self {
        Self {
            root: global.root.clone(),
            repo: global.repo.clone(),
            json: global.json,
            verbose: global.verbose,
            quiet: global.quiet,
        }
    }

    /// Resolve the project root.
    ///
    /// Priority: explicit flag/env > nearest ancestor of the current
    /// directory containing `.github/issues` > the current directory.
    pub fn resolve_root(&self) -> PathBuf {
        if let Some(ref root) = self.root {
            return root.clone();
        }
        match env::current_dir() {
            Ok(cwd) => find_plans_root(&cwd).unwrap_or(cwd),
            Err(_) => PathBuf::from("."),
        }
    }
}

/// Walk up from `start` looking for a directory that contains
/// `.github/issues`. Returns `None` when no ancestor has one.
fn find_plans_root(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        if dir.join(PLANS_DIR).is_dir() {
            return Some(dir);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Stages
// ---------------------------------------------------------------------------

/// One planning document in a run: where it lives and how it is shown in
/// progress output and the summary.
#[derive(Debug, Clone)]
pub struct Stage {
    pub path: PathBuf,
    pub name: String,
}

/// The default stage documents under `root`, in run order.
pub fn default_stages(root: &Path) -> Vec<Stage> {
    let plans = root.join(PLANS_DIR);
    DEFAULT_STAGES
        .iter()
        .map(|(file, name)| Stage {
            path: plans.join(file),
            name: (*name).to_string(),
        })
        .collect()
}

/// Stages for explicitly listed files. The file name doubles as the
/// display name.
pub fn stages_from_files(files: &[PathBuf]) -> Vec<Stage> {
    files
        .iter()
        .map(|path| Stage {
            path: path.clone(),
            name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn default_stages_are_ordered_and_rooted() {
        let stages = default_stages(Path::new("/repo"));
        assert_eq!(stages.len(), 3);
        assert_eq!(stages[0].name, "Stage 1: Database");
        assert_eq!(
            stages[0].path,
            Path::new("/repo/.github/issues/stage-1-database.md")
        );
        assert_eq!(stages[2].name, "Stage 3: Frontend");
    }

    #[test]
    fn explicit_files_use_file_names() {
        let stages = stages_from_files(&[PathBuf::from("plans/custom-stage.md")]);
        assert_eq!(stages.len(), 1);
        assert_eq!(stages[0].name, "custom-stage.md");
        assert_eq!(stages[0].path, PathBuf::from("plans/custom-stage.md"));
    }

    #[test]
    fn find_plans_root_walks_up() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("project");
        fs::create_dir_all(root.join(PLANS_DIR)).unwrap();
        let nested = root.join("crates/deep/nested");
        fs::create_dir_all(&nested).unwrap();

        let found = find_plans_root(&nested).unwrap();
        assert_eq!(found, root);
    }

    #[test]
    fn find_plans_root_without_marker() {
        let tmp = tempfile::tempdir().unwrap();
        // On some CI systems the temp dir might sit inside a tree that has
        // .github/issues somewhere above it, so only assert no panic and
        // that any hit is a real directory.
        if let Some(found) = find_plans_root(tmp.path()) {
            assert!(found.join(PLANS_DIR).is_dir());
        }
    }
}
