//! `sower check` -- parse planning documents and report what they contain.
//!
//! Read-only companion to `publish`: runs the extractor and prints every
//! record it finds, without touching the tracker or needing `gh` at all.

use std::fs;

use anyhow::{Context, Result};

use sower_core::extract::extract_issues;

use crate::cli::CheckArgs;
use crate::context::{RuntimeContext, default_stages, stages_from_files};
use crate::output::{DocumentReport, output_json, print_warning};

/// Execute the `sower check` command.
pub fn run(ctx: &RuntimeContext, args: &CheckArgs) -> Result<()> {
    let explicit = !args.files.is_empty();
    let stages = if explicit {
        stages_from_files(&args.files)
    } else {
        default_stages(&ctx.resolve_root())
    };

    let mut reports = Vec::new();
    for stage in &stages {
        let content = match fs::read_to_string(&stage.path) {
            Ok(content) => content,
            // Default stage files may legitimately not exist yet; explicitly
            // named files must.
            Err(e) if !explicit => {
                print_warning(
                    ctx.json,
                    &format!("Warning: cannot read {}: {}", stage.path.display(), e),
                );
                continue;
            }
            Err(e) => {
                return Err(e).with_context(|| format!("cannot read {}", stage.path.display()));
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

    let mut total = 0;
    for report in &reports {
        println!("{}: {} issue(s)", report.document, report.records.len());
        for record in &report.records {
            if record.labels.is_empty() {
                println!("  - {}", record.title);
            } else {
                println!("  - {} [{}]", record.title, record.labels.join(", "));
            }
        }
        total += report.records.len();
    }
    println!();
    println!(
        "Total: {} issue(s) across {} document(s)",
        total,
        reports.len()
    );

    Ok(())
}
