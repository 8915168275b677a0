//! task - Personal task tracker
//!
//! This library provides the core functionality for the `task` CLI, a small
//! single-user task list persisted in a flat CSV file.
//!
//! # Core Concepts
//!
//! - **Task**: a named item with an integer priority and a done flag
//! - **TaskStore**: pending/completed partitions loaded from and rewritten
//!   to the backing file on every mutation
//!
//! # Module Organization
//!
//! - `cli`: Command-line interface using clap
//! - `error`: Error types and result aliases
//! - `store`: TaskStore load/mutate/persist logic
//! - `task`: Task record and its CSV row representation

pub mod cli;
pub mod error;
pub mod store;
pub mod task;

pub use error::{Error, Result};
