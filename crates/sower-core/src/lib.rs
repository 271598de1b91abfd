//! Core types and planning-document extraction for the sower system.
//!
//! This crate is tracker-agnostic: it knows how to turn a stage planning
//! document into ordered [`record::IssueRecord`]s and defines the narrow
//! [`tracker::Tracker`] interface the publishing pipeline drives. Shelling
//! out to a real tracker client lives in `sower-gh`.

pub mod extract;
pub mod labels;
pub mod record;
pub mod tracker;
