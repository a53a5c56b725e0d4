//! Config.toml parsing and schema.
//!
//! The config manifest is optional. It can pin a minimum tool version, list
//! plugins to load before any project manifest, and carry generation toggles
//! that the loader passes through untouched.

use semver::VersionReq;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::manifest::path_ref::PathRef;

/// The parsed Config.toml manifest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Version requirement on the tool itself
    #[serde(default)]
    pub requires: Option<VersionReq>,

    /// Plugins to load before evaluating project manifests
    #[serde(default)]
    pub plugins: Vec<PluginLocation>,

    /// Generation toggles (opaque to loading)
    #[serde(default)]
    pub generation: GenerationOptions,
}

/// Where a plugin lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PluginLocation {
    /// A plugin directory on disk
    Local { path: PathRef },
    /// A plugin in a git repository
    Git {
        git: Url,
        #[serde(default)]
        tag: Option<String>,
    },
}

/// Toggles consumed by generation, not by loading.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct GenerationOptions {
    #[serde(default)]
    pub resolve_dependencies: bool,

    #[serde(default)]
    pub organize_by_kind: bool,
}

impl Config {
    /// Parse config manifest content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
