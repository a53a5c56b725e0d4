//! `slipway dump` command
//!
//! Loads one manifest from a directory and prints it as JSON.

use std::env;

use anyhow::{Context, Result};

use slipway::loader::{ManifestLoading, ModelLoader, TomlManifestLoader};

use crate::cli::{DumpArgs, ManifestKindArg};

pub fn execute(args: DumpArgs) -> Result<()> {
    let dir = match args.path {
        Some(path) => path,
        None => env::current_dir().context("failed to determine current directory")?,
    };

    // Plugins come from the config discovery chain; project manifests cannot
    // be evaluated without them.
    let models = ModelLoader::new();
    let config = models.load_config(&dir)?;
    let plugins = models.load_plugins(&config)?;

    let loader = TomlManifestLoader::new();
    let json = match args.kind {
        ManifestKindArg::Project => {
            serde_json::to_string_pretty(&loader.load_project(&dir, &plugins)?)?
        }
        ManifestKindArg::Workspace => {
            serde_json::to_string_pretty(&loader.load_workspace(&dir, &plugins)?)?
        }
        ManifestKindArg::Config => serde_json::to_string_pretty(&loader.load_config(&dir)?)?,
        ManifestKindArg::Dependencies => {
            serde_json::to_string_pretty(&loader.load_dependencies(&dir, &plugins)?)?
        }
        ManifestKindArg::Plugin => serde_json::to_string_pretty(&loader.load_plugin(&dir)?)?,
    };

    println!("{}", json);
    Ok(())
}
