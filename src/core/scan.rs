//! Directory enumeration for the setup report.

use std::io;
use std::path::Path;

/// List the regular files in `dir` whose name ends with `.{ext}`, sorted
/// lexicographically.
///
/// Non-recursive. Matching is case-sensitive and dot-prefixed (hidden)
/// names are skipped, mirroring a shell glob of `*.{ext}`. Names that are
/// not valid UTF-8 are skipped too; they can never match the fixed ASCII
/// naming scheme.
///
/// # Errors
///
/// Propagates the underlying `read_dir` or metadata failure, e.g. when
/// `dir` does not exist or is unreadable.
pub fn list_matching(dir: &Path, ext: &str) -> io::Result<Vec<String>> {
    let suffix = format!(".{ext}");
    let mut names = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if name.starts_with('.') || !name.ends_with(&suffix) {
            continue;
        }
        names.push(name.to_owned());
    }

    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").expect("create fixture file");
    }

    #[test]
    fn test_lists_matching_files_sorted() {
        let dir = tempfile::tempdir().expect("tempdir");
        touch(dir.path(), "B2.mp3");
        touch(dir.path(), "B1.mp3");
        touch(dir.path(), "B10.mp3");
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "call.mp4");

        let names = list_matching(dir.path(), "mp3").expect("listing succeeds");
        assert_eq!(names, ["B1.mp3", "B10.mp3", "B2.mp3"]);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let dir = tempfile::tempdir().expect("tempdir");
        touch(dir.path(), "B1.MP3");
        touch(dir.path(), "B2.mp3");

        let names = list_matching(dir.path(), "mp3").expect("listing succeeds");
        assert_eq!(names, ["B2.mp3"]);
    }

    #[test]
    fn test_skips_directories_and_hidden_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::create_dir(dir.path().join("folder.mp3")).expect("create dir fixture");
        touch(dir.path(), ".draft.mp3");
        touch(dir.path(), "N31.mp3");

        let names = list_matching(dir.path(), "mp3").expect("listing succeeds");
        assert_eq!(names, ["N31.mp3"]);
    }

    #[test]
    fn test_empty_directory_lists_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let names = list_matching(dir.path(), "mp3").expect("listing succeeds");
        assert!(names.is_empty());
    }

    #[test]
    fn test_missing_directory_errors() {
        let dir = tempfile::tempdir().expect("tempdir");
        let gone = dir.path().join("not-here");
        assert!(list_matching(&gone, "mp3").is_err());
    }
}
