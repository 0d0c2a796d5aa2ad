//! callprep - setup helper for Adam's bingo-call audio clips.
//!
//! Single-shot command: checks the optional ffmpeg install, provisions the
//! clip output directory, scans for source MP4s and produced MP3s, and
//! prints the setup guide with current progress.

mod cli;
mod constants;
mod core;

use clap::Parser;

use crate::cli::args::Args;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    cli::report::run(&args)
}
