//! Dependencies.toml parsing and schema.

use std::collections::BTreeMap;

use semver::VersionReq;
use serde::{Deserialize, Serialize};
use url::Url;

/// The parsed Dependencies.toml manifest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dependencies {
    /// External dependencies, keyed by name
    #[serde(default)]
    pub external: BTreeMap<String, ExternalDependency>,
}

/// One `[external.NAME]` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalDependency {
    /// Source repository
    pub git: Url,

    /// Version requirement on the dependency
    pub requirement: VersionReq,
}

impl Dependencies {
    /// Parse dependencies manifest content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
