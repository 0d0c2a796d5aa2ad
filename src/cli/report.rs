//! Setup progress report.
//!
//! One pass over the project tree: probe for ffmpeg, provision the output
//! directory, scan for source MP4s and produced call clips, then print the
//! step-by-step guide with current progress. Purely informational - the only
//! filesystem write is the idempotent directory creation.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use colored::Colorize;

use crate::cli::args::Args;
use crate::constants;
use crate::core::catalog::{self, CATEGORIES};
use crate::core::probe::{self, FfmpegProbe};
use crate::core::scan;

// ── Public entry point ──────────────────────────────────────────────────────

/// Run the full report against the ambient working directory.
///
/// # Errors
///
/// Fails only on filesystem faults: an unresolvable working directory, an
/// uncreatable output directory, or an unreadable scan target. A missing
/// ffmpeg install or an empty directory is informational, never an error.
pub fn run(args: &Args) -> Result<()> {
    let root = env::current_dir().wrap_err("resolving the working directory")?;
    run_at(&root, args.source.as_deref())
}

// ── Orchestration ───────────────────────────────────────────────────────────

/// Run the report rooted at `root`. Split from [`run`] so tests can point it
/// at a scratch directory instead of the process working directory.
fn run_at(root: &Path, source: Option<&Path>) -> Result<()> {
    println!("{}", banner());

    println!("\n{}", prerequisites_section(&probe::detect()));

    let output_dir = provision_output_dir(root)?;
    println!("\n📁 Output directory ready: {}", output_dir.display());

    println!("\n{}", instructions_section());

    if let Some(path) = source {
        println!("\n{}", named_source_line(root, path));
    }

    let sources = scan::list_matching(root, constants::SOURCE_EXT).wrap_err_with(|| {
        format!(
            "scanning {} for *.{} files",
            root.display(),
            constants::SOURCE_EXT
        )
    })?;
    if !sources.is_empty() {
        println!("\n{}", sources_section(&sources));
    }

    println!("\n{}", naming_section());

    let clips = scan::list_matching(&output_dir, constants::CLIP_EXT).wrap_err_with(|| {
        format!(
            "scanning {} for *.{} files",
            output_dir.display(),
            constants::CLIP_EXT
        )
    })?;
    println!("\n{}", progress_section(&clips));

    println!("\n{}", closing_section());

    Ok(())
}

/// Create the output directory (and any missing parents) and return its
/// absolute path. Creation must succeed before the clip scan may run.
fn provision_output_dir(root: &Path) -> Result<PathBuf> {
    let dir = root.join(constants::OUTPUT_DIR);
    fs::create_dir_all(&dir)
        .wrap_err_with(|| format!("creating output directory {}", dir.display()))?;
    Ok(dir)
}

// ── Section formatting ──────────────────────────────────────────────────────

fn banner() -> String {
    format!(
        "{}\n{}",
        constants::BANNER_TITLE.cyan().bold(),
        "=".repeat(constants::BANNER_WIDTH)
    )
}

/// Prerequisites section. Takes the probe outcome as data so availability is
/// injectable in tests; absence is guidance, never an error.
fn prerequisites_section(status: &FfmpegProbe) -> String {
    let mut lines = vec![constants::MSG_PREREQ_HEADER.cyan().to_string()];

    if status.is_available() {
        let mut line = String::from("✅ ffmpeg");
        if let Some(version) = &status.version {
            let _ = write!(line, " {version}");
        }
        line.push_str(" is available for audio extraction");
        if let Some(path) = &status.path {
            let _ = write!(line, " ({path})");
        }
        lines.push(line.green().to_string());
    } else {
        lines.push(
            format!(
                "{}{}",
                constants::MSG_FFMPEG_MISSING,
                constants::FFMPEG_INSTALL_CMD
            )
            .yellow()
            .to_string(),
        );
        lines.push(constants::MSG_FFMPEG_FALLBACK.dimmed().to_string());
    }

    lines.join("\n")
}

fn instructions_section() -> String {
    let mut lines = vec![constants::MSG_INSTRUCTIONS_HEADER.cyan().to_string()];
    for (step, text) in constants::INSTRUCTIONS.iter().enumerate() {
        lines.push(format!("{}. {text}", step + 1));
    }
    lines.join("\n")
}

/// One line about the `SOURCE` argument: confirmation when the file exists,
/// a warning otherwise. Relative paths are checked against `root`.
fn named_source_line(root: &Path, path: &Path) -> String {
    let target = if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    };

    if target.is_file() {
        format!("{}{}", constants::MSG_SOURCE_NAMED, path.display())
            .green()
            .to_string()
    } else {
        format!("{}{}", constants::MSG_SOURCE_MISSING, path.display())
            .yellow()
            .to_string()
    }
}

/// Listing of `*.mp4` files found in the working directory. Only rendered
/// when at least one match exists; an empty scan prints nothing at all.
fn sources_section(sources: &[String]) -> String {
    let mut lines = vec![constants::MSG_SOURCES_HEADER.cyan().to_string()];
    for name in sources {
        lines.push(format!("   - {name}"));
    }
    lines.push(String::new());
    lines.push(constants::MSG_SOURCES_HINT.dimmed().to_string());
    lines.join("\n")
}

fn naming_section() -> String {
    let mut lines = vec![constants::MSG_NAMING_HEADER.cyan().to_string()];
    for category in CATEGORIES {
        lines.push(category.guide_line());
    }
    lines.push(String::new());
    lines.push(format!("🎯 Total files needed: {}", catalog::TOTAL_CLIPS));
    lines.push(constants::MSG_FORMAT_LINE.to_string());
    lines.push(format!("📁 Location: {}/", constants::OUTPUT_DIR));
    lines.join("\n")
}

/// Progress section: clip count, the first few names, and the completion
/// verdict. Completion is judged by count alone, never name-by-name.
fn progress_section(clips: &[String]) -> String {
    if clips.is_empty() {
        return constants::MSG_CLIPS_NONE.yellow().to_string();
    }

    let mut lines = vec![format!("✅ Found {} existing audio files:", clips.len())
        .green()
        .to_string()];
    for name in clips.iter().take(constants::LISTED_CLIPS_MAX) {
        lines.push(format!("   - {name}"));
    }
    if clips.len() > constants::LISTED_CLIPS_MAX {
        lines.push(format!(
            "   ... and {} more",
            clips.len() - constants::LISTED_CLIPS_MAX
        ));
    }

    lines.push(String::new());
    if clips.len() == catalog::TOTAL_CLIPS {
        lines.push(
            format!(
                "🎉 All {} BINGO number audio files are ready!",
                catalog::TOTAL_CLIPS
            )
            .green()
            .to_string(),
        );
    } else {
        let needed = clips_needed(clips.len());
        lines.push(
            format!("⚠️  Need {needed} more files to complete the set")
                .yellow()
                .to_string(),
        );
    }

    lines.join("\n")
}

/// Signed distance to a complete set. Negative when more than 75 clips
/// exist - a surplus means misnamed or stray files, and the raw number
/// surfaces that instead of clamping to zero.
#[allow(clippy::cast_possible_wrap)]
fn clips_needed(count: usize) -> i64 {
    catalog::TOTAL_CLIPS as i64 - count as i64
}

fn closing_section() -> String {
    let pointer = format!(
        "{}{}",
        constants::MSG_GUIDE_POINTER,
        constants::SETUP_GUIDE_PATH
    );
    format!("{}\n\n{}", pointer.dimmed(), constants::MSG_CLOSING)
}
