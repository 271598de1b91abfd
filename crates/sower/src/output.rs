//! Output formatting helpers for the `sower` CLI.
//!
//! Provides JSON output, the end-of-run summary block, and small text
//! helpers shared by the command handlers. Everything that renders is a
//! pure function returning a `String` so it can be asserted on directly.

use serde::Serialize;
use sower_core::record::{CreationOutcome, CreationResult, IssueRecord};
use std::io::{self, Write};

/// Width of the rule lines framing section banners and the summary.
const BANNER_WIDTH: usize = 60;

/// How many created-issue URLs the summary lists.
const SUMMARY_URL_LIMIT: usize = 5;

// ---------------------------------------------------------------------------
// JSON views
// ---------------------------------------------------------------------------

/// What one planning document contains, for `check` and dry runs.
#[derive(Debug, Serialize)]
pub struct DocumentReport {
    pub document: String,
    pub records: Vec<IssueRecord>,
}

/// Aggregated view of a publish run. `results` stays in attempt order.
#[derive(Debug, Serialize)]
pub struct RunSummary<'a> {
    pub attempted: usize,
    pub created: usize,
    pub failed: usize,
    pub results: &'a [CreationResult],
}

impl<'a> RunSummary<'a> {
    pub fn new(results: &'a [CreationResult]) -> Self {
        let created = results.iter().filter(|r| r.outcome.is_created()).count();
        Self {
            attempted: results.len(),
            created,
            failed: results.len() - created,
            results,
        }
    }
}

/// Print a value as pretty-printed JSON to stdout.
///
/// Terminates the process with exit code 1 if serialization fails.
pub fn output_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            // Ignore broken pipe errors (e.g., piped to `head`)
            let _ = writeln!(handle, "{}", json);
        }
        Err(e) => {
            eprintln!("Error: failed to serialize JSON: {}", e);
            std::process::exit(1);
        }
    }
}

/// Print a warning line. Warnings ride stdout with the rest of the human
/// output; when stdout is reserved for a JSON document they go to stderr
/// so the document stays parseable.
pub fn print_warning(json: bool, message: &str) {
    if json {
        eprintln!("{message}");
    } else {
        println!("{message}");
    }
}

// ---------------------------------------------------------------------------
// Text rendering
// ---------------------------------------------------------------------------

/// Shorten `s` to at most `max` characters, appending `...` when cut.
/// Counts characters rather than bytes so multibyte titles stay intact.
pub fn ellipsize(s: &str, max: usize) -> String {
    let mut out: String = s.chars().take(max).collect();
    if s.chars().count() > max {
        out.push_str("...");
    }
    out
}

/// The banner printed before each document is processed.
pub fn render_stage_banner(name: &str, path: &std::path::Path) -> String {
    let rule = "=".repeat(BANNER_WIDTH);
    format!("{rule}\nProcessing {name}\nFile: {}\n{rule}", path.display())
}

/// The end-of-run summary block: totals, per-document created counts,
/// the first few created URLs, and every failure with its error text.
pub fn render_summary(results: &[CreationResult]) -> String {
    let summary = RunSummary::new(results);
    let rule = "=".repeat(BANNER_WIDTH);

    let mut lines = Vec::new();
    lines.push(rule.clone());
    lines.push("SUMMARY".to_string());
    lines.push(rule);
    lines.push(String::new());
    lines.push(format!("Total Issues Attempted: {}", summary.attempted));
    lines.push(format!("Successfully Created: {}", summary.created));
    lines.push(format!("Failed: {}", summary.failed));

    lines.push(String::new());
    lines.push("Issues Created by Document:".to_string());
    for (document, count) in created_per_document(results) {
        lines.push(format!("  - {}: {} issues", document, count));
    }

    let created: Vec<&CreationResult> = results
        .iter()
        .filter(|r| r.outcome.is_created())
        .collect();
    if !created.is_empty() {
        lines.push(String::new());
        lines.push(format!("Created Issue URLs (first {SUMMARY_URL_LIMIT}):"));
        for result in created.iter().take(SUMMARY_URL_LIMIT) {
            if let CreationOutcome::Created { ref url } = result.outcome {
                lines.push(format!("  - {}", ellipsize(&result.title, 50)));
                lines.push(format!("    {}", url));
            }
        }
    }

    let failed: Vec<&CreationResult> = results
        .iter()
        .filter(|r| !r.outcome.is_created())
        .collect();
    if !failed.is_empty() {
        lines.push(String::new());
        lines.push("Failed Issues:".to_string());
        for result in &failed {
            if let CreationOutcome::Failed { ref error } = result.outcome {
                lines.push(format!("  - [{}] {}", result.document, result.title));
                lines.push(format!("    Error: {}", error));
            }
        }
    }

    lines.join("\n")
}

/// Successful creations per document, in first-appearance order.
fn created_per_document(results: &[CreationResult]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for result in results {
        if !result.outcome.is_created() {
            continue;
        }
        match counts.iter_mut().find(|(d, _)| *d == result.document) {
            Some((_, count)) => *count += 1,
            None => counts.push((result.document.clone(), 1)),
        }
    }
    counts
}
