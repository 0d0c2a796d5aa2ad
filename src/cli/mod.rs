//! Command-line interface module.
//!
//! Provides argument parsing and the setup report.

pub mod args;
pub mod report;
