//! `slipway graph` command
//!
//! Loads the dependency closure rooted at a project or workspace directory
//! and prints every project it reaches.

use std::env;
use std::path::Path;

use anyhow::{Context, Result};
use semver::Version;

use slipway::loader::{ManifestLoading, ModelLoader, RecursiveManifestLoader, TomlManifestLoader};
use slipway::manifest::ManifestKind;
use slipway::model;
use slipway::util::fs::{normalize_path, relative_path};

use crate::cli::GraphArgs;

pub fn execute(args: GraphArgs) -> Result<()> {
    let dir = match args.path {
        Some(path) => path,
        None => env::current_dir().context("failed to determine current directory")?,
    };

    let models = ModelLoader::new();
    let config = models.load_config(&dir)?;
    check_tool_version(&config)?;
    let plugins = models.load_plugins(&config)?;

    // A workspace manifest wins when the directory has both.
    let loader = RecursiveManifestLoader::new();
    let kinds = TomlManifestLoader::new().manifest_kinds(&dir);
    let (root, loaded) = if kinds.contains(&ManifestKind::Workspace) {
        let workspace = loader.load_workspace(&dir, &plugins)?;
        (workspace.path, workspace.projects)
    } else {
        (normalize_path(&dir), loader.load_project(&dir, &plugins)?)
    };

    let mut projects = Vec::with_capacity(loaded.len());
    for (path, manifest) in &loaded.projects {
        projects.push(model::Project::from_manifest(manifest, path)?);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&projects)?);
        return Ok(());
    }

    println!("{} projects loaded from {}", projects.len(), root.display());
    for project in &projects {
        println!("{} ({})", project.name, display_path(&root, &project.path));
        for dependency in project.dependency_paths() {
            println!("  └─ {}", display_path(&root, dependency));
        }
    }

    Ok(())
}

/// Warn when the config pins a tool version this binary does not satisfy.
fn check_tool_version(config: &model::Config) -> Result<()> {
    let Some(requirement) = &config.requires else {
        return Ok(());
    };

    let version = Version::parse(env!("CARGO_PKG_VERSION")).context("invalid package version")?;
    if !config.is_compatible_with(&version) {
        tracing::warn!("config requires slipway {}, this is {}", requirement, version);
    }
    Ok(())
}

fn display_path(base: &Path, path: &Path) -> String {
    let relative = relative_path(base, path);
    if relative.as_os_str().is_empty() {
        ".".to_string()
    } else {
        relative.display().to_string()
    }
}
