//! Internal config entity.

use std::path::{Path, PathBuf};

use semver::{Version, VersionReq};
use serde::Serialize;
use url::Url;

use crate::loader::paths::{PathError, PathResolver};
use crate::manifest;

/// Tool-wide configuration with plugin locations resolved.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Config {
    /// Version requirement on the tool itself
    pub requires: Option<VersionReq>,

    /// Plugin locations, local paths made absolute
    pub plugins: Vec<PluginLocation>,

    /// Generation toggles, passed through untouched
    pub generation: manifest::GenerationOptions,
}

/// Where a plugin lives, after path resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PluginLocation {
    /// A plugin directory on disk
    Local { path: PathBuf },
    /// A plugin in a git repository (never fetched by the loader)
    Git { url: Url, tag: Option<String> },
}

impl Config {
    /// Convert a loaded manifest, resolving plugin paths against `dir`.
    pub fn from_manifest(config: &manifest::Config, dir: &Path) -> Result<Self, PathError> {
        let resolver = PathResolver::new(dir);

        let plugins = config
            .plugins
            .iter()
            .map(|location| match location {
                manifest::PluginLocation::Local { path } => Ok(PluginLocation::Local {
                    path: resolver.resolve(path)?,
                }),
                manifest::PluginLocation::Git { git, tag } => Ok(PluginLocation::Git {
                    url: git.clone(),
                    tag: tag.clone(),
                }),
            })
            .collect::<Result<Vec<_>, PathError>>()?;

        Ok(Config {
            requires: config.requires.clone(),
            plugins,
            generation: config.generation,
        })
    }

    /// Whether `version` satisfies the `requires` constraint, if any.
    pub fn is_compatible_with(&self, version: &Version) -> bool {
        match &self.requires {
            Some(requirement) => requirement.matches(version),
            None => true,
        }
    }
}
