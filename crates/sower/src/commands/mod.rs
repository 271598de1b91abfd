//! Command handlers for the `sower` CLI.
//!
//! Each submodule implements one subcommand as a `run` function taking the
//! [`RuntimeContext`](crate::context::RuntimeContext) and its parsed args.

pub mod check;
pub mod publish;
pub mod version;
