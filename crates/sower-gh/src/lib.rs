//! GitHub CLI integration for the sower system.
//!
//! This crate provides the `gh` command execution wrapper and the tracker
//! client used for real runs. Everything here shells out; the pipeline
//! above it only sees the `Tracker` trait from `sower-core`.

pub mod commands;
pub mod tracker;
