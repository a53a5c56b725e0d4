//! Resolution of manifest-declared path references.
//!
//! Every resolver is anchored at one manifest directory. Relative references
//! resolve against that directory and nothing else; a dependency two hops
//! away is resolved by the resolver of the manifest that declared it.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::manifest::PathRef;
use crate::util::fs::normalize_path;
use crate::util::root::locate_root;

/// Error from resolving a path reference.
#[derive(Debug, Error)]
pub enum PathError {
    /// A `//` reference was declared outside any workspace root.
    #[error("cannot resolve `{reference}`: no workspace root above {}", start.display())]
    RootNotFound { reference: String, start: PathBuf },
}

/// Resolves path references against one manifest directory.
#[derive(Debug, Clone)]
pub struct PathResolver {
    manifest_dir: PathBuf,
}

impl PathResolver {
    /// Create a resolver anchored at `manifest_dir`.
    pub fn new(manifest_dir: impl Into<PathBuf>) -> Self {
        PathResolver {
            manifest_dir: normalize_path(&manifest_dir.into()),
        }
    }

    /// The directory relative references resolve against.
    pub fn manifest_dir(&self) -> &Path {
        &self.manifest_dir
    }

    /// Resolve a reference to a normalized absolute path.
    ///
    /// Absolute references pass through, `//` references anchor at the
    /// workspace root, and everything else is joined onto the manifest
    /// directory. The result is always normalized.
    pub fn resolve(&self, reference: &PathRef) -> Result<PathBuf, PathError> {
        if reference.is_root_relative() {
            let root = locate_root(&self.manifest_dir).ok_or_else(|| PathError::RootNotFound {
                reference: reference.to_string(),
                start: self.manifest_dir.clone(),
            })?;
            let rest = reference.as_str().trim_start_matches('/');
            return Ok(normalize_path(&root.join(rest)));
        }

        let path = Path::new(reference.as_str());
        if path.is_absolute() {
            return Ok(normalize_path(path));
        }

        Ok(normalize_path(&self.manifest_dir.join(path)))
    }
}
