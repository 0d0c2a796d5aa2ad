//! Optional ffmpeg detection.
//!
//! The reporter only tells the user whether ffmpeg is installed; no audio
//! processing happens in this tool. The probe never fails: an absent or
//! broken install simply comes back empty and the report says so.

use std::process::Command;

/// Outcome of probing for the optional ffmpeg install.
#[derive(Debug, Clone, Default)]
pub struct FfmpegProbe {
    /// Resolved executable path, when `which` finds one.
    pub path: Option<String>,
    /// Version token parsed from `ffmpeg -version`, when it runs.
    pub version: Option<String>,
}

impl FfmpegProbe {
    /// Whether ffmpeg answered either probe.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.path.is_some() || self.version.is_some()
    }
}

/// Probe for ffmpeg on `$PATH`.
#[must_use]
pub fn detect() -> FfmpegProbe {
    probe_tool("ffmpeg")
}

/// Locate `name` and try to read its version banner.
fn probe_tool(name: &str) -> FfmpegProbe {
    let path = cmd_stdout("which", &[name]);

    // ffmpeg prints its banner on stdout; fall back to stderr for builds
    // that report there.
    let version = match Command::new(name).arg("-version").output() {
        Ok(output) => {
            let raw = if output.stdout.is_empty() {
                String::from_utf8_lossy(&output.stderr).to_string()
            } else {
                String::from_utf8_lossy(&output.stdout).to_string()
            };
            parse_version_line(&raw)
        }
        Err(_) => None,
    };

    FfmpegProbe { path, version }
}

/// Extract a version token from the first line of a `-version` banner.
///
/// Handles shapes like `ffmpeg version 6.1.1-3ubuntu5 Copyright ...` and
/// `v`-prefixed tokens; returns `None` for usage or error text so a broken
/// install never reports a false version.
fn parse_version_line(raw: &str) -> Option<String> {
    let first_line = raw.lines().next()?.trim();

    for token in first_line.split_whitespace() {
        let token = token.strip_prefix('v').unwrap_or(token);
        let starts_with_digit = token.chars().next().is_some_and(|c| c.is_ascii_digit());
        if !starts_with_digit || !token.contains('.') {
            continue;
        }
        // Trim trailing junk such as commas or build suffixes.
        let version: String = token
            .chars()
            .take_while(|c| *c == '.' || c.is_ascii_alphanumeric())
            .collect();
        if !version.is_empty() {
            return Some(version);
        }
    }

    None
}

/// Run a command and return its stdout as a trimmed, non-empty string.
fn cmd_stdout(cmd: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(cmd).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let s = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}
