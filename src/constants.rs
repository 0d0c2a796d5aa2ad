//! Application-wide constants.
//!
//! Fixed paths, file-matching extensions, and the static report strings
//! printed by the setup reporter.

// === Path Configuration ===

/// Relative path of the directory that receives the finished clips.
pub const OUTPUT_DIR: &str = "public/audio/adam-voice";
/// Relative path of the detailed setup guide document.
pub const SETUP_GUIDE_PATH: &str = "public/audio/adam-voice/SETUP-GUIDE.md";

// === File Matching ===

/// Extension of candidate source recordings in the working directory.
pub const SOURCE_EXT: &str = "mp4";
/// Extension of produced call clips in the output directory.
pub const CLIP_EXT: &str = "mp3";
/// Maximum number of clip names listed before summarizing the rest.
pub const LISTED_CLIPS_MAX: usize = 10;

// === Report Layout ===

/// Title line printed at the top of every report.
pub const BANNER_TITLE: &str = "🎤 Adam's Voice Setup Helper for BetBingoCash";
/// Width of the `=` rule printed under the title.
pub const BANNER_WIDTH: usize = 50;

// === Messages: Prerequisites ===

pub const MSG_PREREQ_HEADER: &str = "📋 Prerequisites Check:";
pub const MSG_FFMPEG_MISSING: &str = "❌ ffmpeg not found. Install with: ";
pub const FFMPEG_INSTALL_CMD: &str = "apt install ffmpeg (or brew install ffmpeg)";
pub const MSG_FFMPEG_FALLBACK: &str =
    "   Or use an online converter as described in the setup guide.";

// === Messages: Instructions ===

pub const MSG_INSTRUCTIONS_HEADER: &str = "📖 Step-by-Step Instructions:";
/// The fixed four-step guide, printed one numbered line per entry.
pub const INSTRUCTIONS: [&str; 4] = [
    "Place your MP4 file with Adam's voice in the project root",
    "Run callprep <your-file.mp4> to check the file is picked up",
    "Use Audacity or an online tool to split the audio into individual number calls",
    "Place the individual MP3 files in the output directory",
];

// === Messages: Source Files ===

pub const MSG_SOURCES_HEADER: &str = "🎬 Found MP4 files:";
pub const MSG_SOURCES_HINT: &str = "💡 You can now extract audio from these files!";
pub const MSG_SOURCE_NAMED: &str = "🎬 Using source file: ";
pub const MSG_SOURCE_MISSING: &str = "⚠️  Source file not found: ";

// === Messages: Naming Guide ===

pub const MSG_NAMING_HEADER: &str = "📝 Required File Naming Format:";
pub const MSG_FORMAT_LINE: &str = "🎵 Format: MP3";

// === Messages: Progress ===

pub const MSG_CLIPS_NONE: &str =
    "📂 No audio files found yet. Follow the setup guide to get started!";

// === Messages: Closing ===

pub const MSG_GUIDE_POINTER: &str = "🔗 For detailed instructions, see: ";
pub const MSG_CLOSING: &str = "Happy BINGO calling! 🎯✨";
