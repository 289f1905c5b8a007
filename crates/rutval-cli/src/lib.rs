//! # rutval-cli — Batch Validation Front-End
//!
//! Subcommand handlers for the `rutval` binary. Each module exposes a clap
//! `Args` struct and a `run()` entry point; the binary only assembles and
//! dispatches.

pub mod format;
pub mod input;
pub mod validate;
