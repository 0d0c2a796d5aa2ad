//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Callprep - setup helper for Adam's bingo-call audio clips
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Source MP4 to feature in the report. Without it the report scans the
    /// working directory for *.mp4 files.
    pub source: Option<PathBuf>,
}
