//! Clap CLI definitions for the `sower` command.
//!
//! This module defines the complete CLI structure using clap 4 derive
//! macros. The command surface is intentionally small: publish is the
//! whole point, check is its read-only companion.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// sower -- Seed a repository's issue tracker from planning documents.
///
/// Reads stage planning documents and creates the GitHub issues they
/// describe, provisioning the label taxonomy first.
#[derive(Parser, Debug)]
#[command(
    name = "sower",
    about = "Seed GitHub issues from markdown planning documents",
    long_about = "Reads stage planning documents (.github/issues/stage-*.md) and creates the GitHub issues they describe via the gh CLI, provisioning the label taxonomy first.",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global flags available to all subcommands.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Project root containing .github/issues (default: walk up from the
    /// current directory).
    #[arg(long, global = true, env = "SOWER_ROOT")]
    pub root: Option<PathBuf>,

    /// Target repository as owner/name (default: resolved by gh from the
    /// checkout at the project root).
    #[arg(long, global = true)]
    pub repo: Option<String>,

    /// Output in JSON format.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose/debug output.
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress progress output (warnings, failures and the summary remain).
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}

/// All available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the planned issues in the tracker, labels first.
    #[command(alias = "run")]
    Publish(PublishArgs),

    /// Parse planning documents and report what they contain.
    Check(CheckArgs),

    /// Print version and platform information.
    Version,
}

/// Arguments for `sower publish`.
#[derive(Args, Debug)]
pub struct PublishArgs {
    /// Planning documents to publish, in order (default: the stage files
    /// under .github/issues).
    pub files: Vec<PathBuf>,

    /// Extract and print what would be created without contacting the
    /// tracker.
    #[arg(long)]
    pub dry_run: bool,

    /// Skip label taxonomy provisioning.
    #[arg(long)]
    pub skip_labels: bool,
}

/// Arguments for `sower check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Planning documents to inspect (default: the stage files under
    /// .github/issues).
    pub files: Vec<PathBuf>,
}
