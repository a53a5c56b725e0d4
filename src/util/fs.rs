//! Filesystem utilities.

use std::path::{Component, Path, PathBuf};

use glob::glob;

/// Normalize a path to its canonical absolute form.
///
/// Canonicalizes when the path exists on disk; otherwise falls back to a
/// lexical cleanup that resolves `.` and `..` components. Either way, two
/// spellings of the same directory normalize to the same `PathBuf`, which is
/// what loaded-project deduplication keys on.
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| clean_path(path))
}

/// Resolve `.` and `..` components without touching the filesystem.
///
/// A `..` at the root is dropped rather than preserved, matching what
/// canonicalization does for paths that exist.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !matches!(
                    cleaned.components().next_back(),
                    None | Some(Component::RootDir) | Some(Component::Prefix(_))
                ) {
                    cleaned.pop();
                }
            }
            other => cleaned.push(other.as_os_str()),
        }
    }
    cleaned
}

/// Expand a single absolute pattern to the directories it matches.
///
/// The pattern may contain glob syntax or be a literal path; a literal that
/// exists matches itself. Matches that are not directories are dropped.
pub fn glob_dirs(pattern: &Path) -> Result<Vec<PathBuf>, glob::PatternError> {
    let pattern_str = pattern.to_string_lossy();
    let mut dirs = Vec::new();

    for entry in glob(&pattern_str)? {
        match entry {
            Ok(path) => {
                if path.is_dir() {
                    dirs.push(normalize_path(&path));
                }
            }
            Err(e) => {
                tracing::warn!("glob error: {}", e);
            }
        }
    }

    Ok(dirs)
}

/// Get the path to `path` relative to `base`, for display purposes.
pub fn relative_path(base: &Path, path: &Path) -> PathBuf {
    pathdiff::diff_paths(path, base).unwrap_or_else(|| path.to_path_buf())
}
