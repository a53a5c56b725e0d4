//! Loading manifests into model entities.
//!
//! `ModelLoader` pairs the manifest loader with the model converters: one
//! call loads one manifest and returns the converted entity. Config loading
//! additionally discovers which directory the config lives in.

use std::path::{Path, PathBuf};

use crate::loader::manifest::{ManifestLoading, TomlManifestLoader};
use crate::loader::recursive::{discover_project_dirs, LoadError};
use crate::manifest::ManifestKind;
use crate::model::{self, Plugins};
use crate::util::fs::normalize_path;
use crate::util::root::locate_root;

/// Loads single manifests and converts them to model entities.
pub struct ModelLoader<L = TomlManifestLoader> {
    loader: L,
}

impl ModelLoader<TomlManifestLoader> {
    /// A loader reading TOML manifests from disk.
    pub fn new() -> Self {
        ModelLoader {
            loader: TomlManifestLoader::new(),
        }
    }
}

impl Default for ModelLoader<TomlManifestLoader> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: ManifestLoading> ModelLoader<L> {
    /// A loader over a custom manifest source.
    pub fn with_loader(loader: L) -> Self {
        ModelLoader { loader }
    }

    /// Load the project at `dir` as a model entity.
    pub fn load_project(
        &self,
        dir: &Path,
        plugins: &Plugins,
    ) -> Result<model::Project, LoadError> {
        let dir = normalize_path(dir);
        let manifest = self.loader.load_project(&dir, plugins)?;
        Ok(model::Project::from_manifest(&manifest, &dir)?)
    }

    /// Load the workspace at `dir`, expanding its project references.
    pub fn load_workspace(
        &self,
        dir: &Path,
        plugins: &Plugins,
    ) -> Result<model::Workspace, LoadError> {
        let dir = normalize_path(dir);
        let manifest = self.loader.load_workspace(&dir, plugins)?;
        let projects = discover_project_dirs(&self.loader, &dir, &manifest.projects)?;

        Ok(model::Workspace {
            name: manifest.name,
            path: dir,
            projects,
        })
    }

    /// Load the config governing `dir`.
    ///
    /// Looks in `{root}/.slipway` first when a workspace root is locatable,
    /// then walks parent directories for a config manifest. No config
    /// anywhere is not an error; the default config applies.
    pub fn load_config(&self, dir: &Path) -> Result<model::Config, LoadError> {
        let dir = normalize_path(dir);

        if let Some(config_dir) = self.find_config_dir(&dir) {
            let manifest = self.loader.load_config(&config_dir)?;
            let config = model::Config::from_manifest(&manifest, &config_dir)?;
            tracing::debug!("using config from {}", config_dir.display());
            return Ok(config);
        }

        tracing::debug!("no config manifest found; using defaults");
        Ok(model::Config::default())
    }

    /// Load the plugin at `dir` as a model entity.
    pub fn load_plugin(&self, dir: &Path) -> Result<model::Plugin, LoadError> {
        let dir = normalize_path(dir);
        let manifest = self.loader.load_plugin(&dir)?;

        Ok(model::Plugin {
            name: manifest.name,
            path: dir,
        })
    }

    /// Load every locally available plugin a config points at.
    ///
    /// Git locations are skipped; fetching is outside loading.
    pub fn load_plugins(&self, config: &model::Config) -> Result<Plugins, LoadError> {
        let mut plugins = Vec::new();

        for location in &config.plugins {
            match location {
                model::PluginLocation::Local { path } => {
                    plugins.push(self.load_plugin(path)?);
                }
                model::PluginLocation::Git { url, .. } => {
                    tracing::debug!("skipping git plugin {}: not fetched", url);
                }
            }
        }

        Ok(plugins.into_iter().collect())
    }

    /// The directory whose config governs `dir`, if any.
    fn find_config_dir(&self, dir: &Path) -> Option<PathBuf> {
        if let Some(root) = locate_root(dir) {
            let root_config = root.join(crate::util::root::ROOT_DIR_NAME);
            if self
                .loader
                .manifest_kinds(&root_config)
                .contains(&ManifestKind::Config)
            {
                return Some(root_config);
            }
        }

        let mut current = dir;
        loop {
            if self
                .loader
                .manifest_kinds(current)
                .contains(&ManifestKind::Config)
            {
                return Some(current.to_path_buf());
            }
            current = current.parent()?;
        }
    }
}
