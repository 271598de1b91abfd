//! `sower publish` -- create the planned issues in the tracker.
//!
//! Runs the whole pipeline: gh pre-flight, label provisioning, then one
//! creation attempt per extracted record, in document order. A failed
//! record is logged and never stops the run; only a missing gh at startup
//! aborts. The run always ends with the summary block.

use std::collections::HashSet;
use std::fs;

use anyhow::{Result, bail};
use tracing::debug;

use sower_core::extract::extract_issues;
use sower_core::labels::LABEL_TAXONOMY;
use sower_core::record::{CreationOutcome, CreationResult};
use sower_core::tracker::Tracker;
use sower_gh::commands::check_gh_available;
use sower_gh::tracker::GhTracker;

use crate::cli::PublishArgs;
use crate::context::{RuntimeContext, Stage, default_stages, stages_from_files};
use crate::output::{
    DocumentReport, RunSummary, ellipsize, output_json, print_warning, render_stage_banner,
    render_summary,
};

/// How much the publisher prints while it works.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Progress {
    /// Banners, per-issue progress, warnings.
    Full,
    /// Warnings and failures only.
    Quiet,
    /// Nothing on stdout; it carries the JSON summary alone.
    Silent,
}

impl Progress {
    fn full(self) -> bool {
        matches!(self, Progress::Full)
    }

    /// Per-record `[FAIL]` lines print in full and quiet runs; a JSON run
    /// carries failures in the result log instead.
    fn failures(self) -> bool {
        !matches!(self, Progress::Silent)
    }

    /// Warnings always surface: on stdout alongside the rest of the human
    /// output, on stderr when stdout is reserved for JSON.
    fn warn(self, message: &str) {
        print_warning(matches!(self, Progress::Silent), message);
    }
}

/// Execute the `sower publish` command.
pub fn run(ctx: &RuntimeContext, args: &PublishArgs) -> Result<()> {
    let root = ctx.resolve_root();
    debug!(root = %root.display(), "resolved project root");

    let stages = if args.files.is_empty() {
        default_stages(&root)
    } else {
        stages_from_files(&args.files)
    };

    if args.dry_run {
        return dry_run(ctx, &stages);
    }

    // Pre-flight: without a working gh there is nothing to do. This is the
    // only condition that fails the whole run.
    let gh_version = match check_gh_available(&root) {
        Ok(version) => version,
        Err(e) => bail!(
            "GitHub CLI (gh) is not available: {e}\n\
             Install it from https://cli.github.com/ and run 'gh auth login'."
        ),
    };
    debug!(%gh_version, "gh pre-flight ok");

    let progress = if ctx.json {
        Progress::Silent
    } else if ctx.quiet {
        Progress::Quiet
    } else {
        Progress::Full
    };

    if progress.full() {
        println!(
            "Creating issues from {} planning document(s)...",
            stages.len()
        );
    }

    let tracker = GhTracker::new(&root, ctx.repo.clone());
    let mut publisher = Publisher::new();

    if !args.skip_labels {
        publisher.ensure_labels_exist(&tracker, progress);
    }

    for stage in &stages {
        publisher.create_issues_from_file(&tracker, stage, progress);
    }

    if ctx.json {
        output_json(&RunSummary::new(&publisher.results));
    } else {
        println!();
        println!("{}", render_summary(&publisher.results));
    }

    Ok(())
}

/// Extract and print what a run would create, without contacting the
/// tracker. Works with no gh installed at all.
fn dry_run(ctx: &RuntimeContext, stages: &[Stage]) -> Result<()> {
    let mut reports = Vec::new();
    for stage in stages {
        let content = match fs::read_to_string(&stage.path) {
            Ok(content) => content,
            Err(e) => {
                print_warning(
                    ctx.json,
                    &format!("Warning: cannot read {}: {}", stage.path.display(), e),
                );
                continue;
            }
        };
        reports.push(DocumentReport {
            document: stage.name.clone(),
            records: extract_issues(&content),
        });
    }

    if ctx.json {
        output_json(&reports);
        return Ok(());
    }

    for report in &reports {
        println!(
            "[DRY RUN] {}: {} issue(s)",
            report.document,
            report.records.len()
        );
        for record in &report.records {
            if record.labels.is_empty() {
                println!("  Would create: {}", record.title);
            } else {
                println!("  Would create: {} [{}]", record.title, record.labels_csv());
            }
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Publisher
// ---------------------------------------------------------------------------

/// State of one publish run: the ordered attempt log and the set of label
/// names already provisioned this run.
struct Publisher {
    results: Vec<CreationResult>,
    labels_created: HashSet<String>,
}

impl Publisher {
    fn new() -> Self {
        Self {
            results: Vec::new(),
            labels_created: HashSet::new(),
        }
    }

    /// Create-or-update every taxonomy label in the target repository.
    ///
    /// A label that cannot be created is reported as a warning; issue
    /// creation proceeds regardless and the tracker will simply reject the
    /// unknown label reference later. Each name is attempted at most once
    /// per run.
    fn ensure_labels_exist(&mut self, tracker: &dyn Tracker, progress: Progress) {
        if progress.full() {
            println!();
            println!("Checking and creating labels...");
        }
        for label in LABEL_TAXONOMY {
            if self.labels_created.contains(label.name) {
                continue;
            }
            match tracker.ensure_label(label) {
                Ok(()) => {
                    if progress.full() {
                        println!("  Label created/updated: {}", label.name);
                    }
                }
                Err(e) => {
                    progress.warn(&format!(
                        "  Warning: could not create label '{}': {}",
                        label.name, e
                    ));
                }
            }
            // One attempt per name per run, created or not.
            self.labels_created.insert(label.name.to_string());
        }
    }

    /// Extract one planning document and create every record it yields, in
    /// order. Returns the number of successful creations; every record
    /// lands in the log exactly once, whatever its outcome.
    fn create_issues_from_file(
        &mut self,
        tracker: &dyn Tracker,
        stage: &Stage,
        progress: Progress,
    ) -> usize {
        let content = match fs::read_to_string(&stage.path) {
            Ok(content) => content,
            Err(e) => {
                progress.warn(&format!(
                    "Warning: cannot read {}: {}",
                    stage.path.display(),
                    e
                ));
                return 0;
            }
        };

        let records = extract_issues(&content);

        if progress.full() {
            println!();
            println!("{}", render_stage_banner(&stage.name, &stage.path));
            println!();
            println!("Found {} issues to create", records.len());
            println!();
        }

        let total = records.len();
        let mut created = 0;
        for (idx, record) in records.iter().enumerate() {
            if progress.full() {
                println!(
                    "[{}/{}] Creating: {}",
                    idx + 1,
                    total,
                    ellipsize(&record.title, 60)
                );
            }

            let outcome =
                match tracker.create_issue(&record.title, &record.body, &record.labels_csv()) {
                    Ok(url) => {
                        created += 1;
                        if progress.full() {
                            println!("  [OK] Created: {}", url);
                            println!();
                        }
                        CreationOutcome::Created { url }
                    }
                    Err(e) => {
                        if progress.failures() {
                            println!("  [FAIL] {}", e);
                            if progress.full() {
                                println!();
                            }
                        }
                        CreationOutcome::Failed {
                            error: e.to_string(),
                        }
                    }
                };

            self.results.push(CreationResult {
                document: stage.name.clone(),
                title: record.title.clone(),
                outcome,
            });
        }

        created
    }
}
