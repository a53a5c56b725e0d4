//! Project.toml parsing and schema.
//!
//! A project manifest names the project, lists the plugins it relies on, and
//! declares build targets under `[targets.NAME]` tables. Target dependencies
//! are a closed union of forms; only the `project` form references another
//! manifest directory.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::manifest::path_ref::PathRef;

/// The parsed Project.toml manifest.
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    /// Project name
    pub name: String,

    /// Names of plugins this manifest relies on
    pub plugins: Vec<String>,

    /// Build targets, ordered by name
    pub targets: Vec<Target>,
}

/// A build target declared in a project manifest.
#[derive(Debug, Clone, Serialize)]
pub struct Target {
    /// Target name (the `[targets.NAME]` key)
    pub name: String,

    /// What the target produces
    pub product: ProductKind,

    /// Source glob patterns, relative to the manifest directory
    pub sources: Vec<String>,

    /// Declared dependencies
    pub dependencies: Vec<TargetDependency>,
}

/// What a target produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    /// Runnable application
    App,
    /// Static library archive
    #[serde(alias = "static-library")]
    StaticLib,
    /// Dynamic library
    #[serde(alias = "dynamic-library")]
    DyLib,
    /// Unit-test bundle
    #[serde(alias = "unit-tests")]
    Test,
}

impl ProductKind {
    pub fn is_library(&self) -> bool {
        matches!(self, ProductKind::StaticLib | ProductKind::DyLib)
    }
}

/// A single target dependency.
///
/// The forms are distinguished by their required key, so untagged
/// deserialization is unambiguous. `Project` must stay ahead of `Target`:
/// an entry carrying both keys is a cross-project target reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TargetDependency {
    /// A target in another project; the only form traversal follows
    Project {
        project: PathRef,
        #[serde(default)]
        target: Option<String>,
    },
    /// A sibling target in the same project
    Target { target: String },
    /// A prebuilt framework on disk
    Framework { framework: PathRef },
    /// A product of an external package
    Package { package: String },
    /// A system SDK
    Sdk { sdk: String },
}

/// Raw project as deserialized from TOML.
#[derive(Debug, Deserialize)]
struct RawProject {
    name: String,

    #[serde(default)]
    plugins: Vec<String>,

    #[serde(default)]
    targets: BTreeMap<String, RawTarget>,
}

/// Raw target from TOML (before the name is attached).
#[derive(Debug, Deserialize)]
struct RawTarget {
    product: ProductKind,

    #[serde(default)]
    sources: Vec<String>,

    #[serde(default)]
    deps: Vec<TargetDependency>,
}

impl Project {
    /// Parse project manifest content.
    ///
    /// Targets come out sorted by name; the `[targets.NAME]` table keys become
    /// the target names.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let raw: RawProject = toml::from_str(content)?;

        let targets = raw
            .targets
            .into_iter()
            .map(|(name, target)| Target {
                name,
                product: target.product,
                sources: target.sources,
                dependencies: target.deps,
            })
            .collect();

        Ok(Project {
            name: raw.name,
            plugins: raw.plugins,
            targets,
        })
    }

    /// Get a target by name.
    pub fn target(&self, name: &str) -> Option<&Target> {
        self.targets.iter().find(|t| t.name == name)
    }
}
