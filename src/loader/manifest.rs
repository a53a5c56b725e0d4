//! Loading individual manifests from disk.
//!
//! `ManifestLoading` is the seam between traversal and the filesystem: one
//! call loads one manifest from one directory. The production implementation
//! reads fixed-name TOML files; tests substitute a counting double.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::manifest::{self, ManifestKind};
use crate::model::Plugins;
use crate::util::fs::normalize_path;

/// Error from loading a single manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// No manifest of the requested kind exists in the directory.
    #[error("no {kind} manifest found at {}", dir.display())]
    NotFound { kind: ManifestKind, dir: PathBuf },

    /// The manifest file exists but could not be read.
    #[error("failed to read manifest at {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest file exists but is not a valid manifest of its kind.
    #[error("malformed manifest at {}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A project manifest relies on a plugin that is not loaded.
    #[error("manifest at {} requires plugin `{plugin}`, which is not loaded", dir.display())]
    MissingPlugin { dir: PathBuf, plugin: String },
}

/// Loads manifests of each kind from a directory.
///
/// Implementations load exactly the requested manifest; they never follow
/// references. Project, workspace, and dependencies manifests are evaluated
/// against the supplied plugin set.
pub trait ManifestLoading {
    fn load_project(
        &self,
        dir: &Path,
        plugins: &Plugins,
    ) -> Result<manifest::Project, ManifestError>;

    fn load_workspace(
        &self,
        dir: &Path,
        plugins: &Plugins,
    ) -> Result<manifest::Workspace, ManifestError>;

    fn load_dependencies(
        &self,
        dir: &Path,
        plugins: &Plugins,
    ) -> Result<manifest::Dependencies, ManifestError>;

    fn load_config(&self, dir: &Path) -> Result<manifest::Config, ManifestError>;

    fn load_plugin(&self, dir: &Path) -> Result<manifest::Plugin, ManifestError>;

    /// The manifest kinds present in a directory.
    ///
    /// Never fails; a missing or unreadable directory is the empty set.
    fn manifest_kinds(&self, dir: &Path) -> BTreeSet<ManifestKind>;
}

/// The production loader: fixed-name TOML files on disk.
#[derive(Debug, Clone, Default)]
pub struct TomlManifestLoader;

impl TomlManifestLoader {
    pub fn new() -> Self {
        TomlManifestLoader
    }

    /// Locate the manifest file for `kind`, erroring when it is absent.
    fn manifest_path(&self, kind: ManifestKind, dir: &Path) -> Result<PathBuf, ManifestError> {
        let dir = normalize_path(dir);
        let path = dir.join(kind.file_name());
        if path.is_file() {
            Ok(path)
        } else {
            Err(ManifestError::NotFound { kind, dir })
        }
    }

    fn read(&self, path: &Path) -> Result<String, ManifestError> {
        std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Check that every plugin the project relies on is loaded.
    fn check_plugins(
        project: &manifest::Project,
        dir: &Path,
        plugins: &Plugins,
    ) -> Result<(), ManifestError> {
        for name in &project.plugins {
            if !plugins.contains(name) {
                return Err(ManifestError::MissingPlugin {
                    dir: dir.to_path_buf(),
                    plugin: name.clone(),
                });
            }
        }
        Ok(())
    }
}

impl ManifestLoading for TomlManifestLoader {
    fn load_project(
        &self,
        dir: &Path,
        plugins: &Plugins,
    ) -> Result<manifest::Project, ManifestError> {
        let path = self.manifest_path(ManifestKind::Project, dir)?;
        let content = self.read(&path)?;
        let project = manifest::Project::from_toml(&content).map_err(|source| {
            ManifestError::Malformed {
                path: path.clone(),
                source,
            }
        })?;

        Self::check_plugins(&project, path.parent().unwrap_or(dir), plugins)?;

        tracing::debug!("loaded project `{}` from {}", project.name, path.display());
        Ok(project)
    }

    fn load_workspace(
        &self,
        dir: &Path,
        _plugins: &Plugins,
    ) -> Result<manifest::Workspace, ManifestError> {
        let path = self.manifest_path(ManifestKind::Workspace, dir)?;
        let content = self.read(&path)?;
        let workspace = manifest::Workspace::from_toml(&content).map_err(|source| {
            ManifestError::Malformed {
                path: path.clone(),
                source,
            }
        })?;

        tracing::debug!(
            "loaded workspace `{}` from {}",
            workspace.name,
            path.display()
        );
        Ok(workspace)
    }

    fn load_dependencies(
        &self,
        dir: &Path,
        _plugins: &Plugins,
    ) -> Result<manifest::Dependencies, ManifestError> {
        let path = self.manifest_path(ManifestKind::Dependencies, dir)?;
        let content = self.read(&path)?;
        manifest::Dependencies::from_toml(&content).map_err(|source| {
            ManifestError::Malformed { path, source }
        })
    }

    fn load_config(&self, dir: &Path) -> Result<manifest::Config, ManifestError> {
        let path = self.manifest_path(ManifestKind::Config, dir)?;
        let content = self.read(&path)?;
        manifest::Config::from_toml(&content).map_err(|source| {
            ManifestError::Malformed { path, source }
        })
    }

    fn load_plugin(&self, dir: &Path) -> Result<manifest::Plugin, ManifestError> {
        let path = self.manifest_path(ManifestKind::Plugin, dir)?;
        let content = self.read(&path)?;
        manifest::Plugin::from_toml(&content).map_err(|source| {
            ManifestError::Malformed { path, source }
        })
    }

    fn manifest_kinds(&self, dir: &Path) -> BTreeSet<ManifestKind> {
        ManifestKind::ALL
            .iter()
            .copied()
            .filter(|kind| dir.join(kind.file_name()).is_file())
            .collect()
    }
}
