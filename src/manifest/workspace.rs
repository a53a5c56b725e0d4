//! Workspace.toml parsing and schema.

use serde::{Deserialize, Serialize};

use crate::manifest::path_ref::PathRef;

/// The parsed Workspace.toml manifest.
///
/// `projects` entries are path references that may carry glob syntax; they
/// are expanded against the workspace directory during discovery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workspace {
    /// Workspace name
    pub name: String,

    /// Project references, possibly glob patterns
    #[serde(default)]
    pub projects: Vec<PathRef>,
}

impl Workspace {
    /// Parse workspace manifest content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
