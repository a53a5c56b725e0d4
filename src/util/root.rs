//! Project root discovery.

use std::path::{Path, PathBuf};

use crate::util::fs::normalize_path;

/// Directory that marks a slipway project root.
pub const ROOT_DIR_NAME: &str = ".slipway";

/// Locate the project root by searching upward from `start`.
///
/// A directory is the root when it contains a `.slipway` directory or a
/// `.git` entry. Returns `None` when no ancestor qualifies.
pub fn locate_root(start: &Path) -> Option<PathBuf> {
    let start = normalize_path(start);
    let mut current = start.as_path();
    loop {
        if current.join(ROOT_DIR_NAME).is_dir() || current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}
