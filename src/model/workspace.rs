//! Internal workspace entity.

use std::path::PathBuf;

use serde::Serialize;

/// A workspace with its project references expanded to directories.
///
/// `projects` holds only directories that exist and carry a project
/// manifest; glob references are expanded and filtered during loading.
#[derive(Debug, Clone, Serialize)]
pub struct Workspace {
    /// Workspace name
    pub name: String,

    /// Normalized workspace directory
    pub path: PathBuf,

    /// Discovered project directories
    pub projects: Vec<PathBuf>,
}
