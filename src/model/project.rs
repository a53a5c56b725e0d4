//! Internal project entities.
//!
//! Model entities mirror the manifest schema with every path reference
//! resolved to a normalized absolute path. Conversion is a pure transform of
//! one manifest; it never loads anything.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::loader::paths::{PathError, PathResolver};
use crate::manifest::{self, ProductKind};

/// A project with resolved paths.
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    /// Project name
    pub name: String,

    /// Normalized manifest directory
    pub path: PathBuf,

    /// Plugins the manifest relies on
    pub plugins: Vec<String>,

    /// Converted targets
    pub targets: Vec<Target>,
}

/// A target with resolved dependency paths.
#[derive(Debug, Clone, Serialize)]
pub struct Target {
    pub name: String,

    pub product: ProductKind,

    /// Source patterns as declared, still relative to the project directory
    pub sources: Vec<String>,

    pub dependencies: Vec<TargetDependency>,
}

/// A target dependency with path references resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TargetDependency {
    /// A target in another project, by absolute project directory
    Project {
        path: PathBuf,
        target: Option<String>,
    },
    /// A sibling target in the same project
    Target { name: String },
    /// A prebuilt framework, by absolute path
    Framework { path: PathBuf },
    /// A product of an external package
    Package { name: String },
    /// A system SDK
    Sdk { name: String },
}

impl Project {
    /// Convert a loaded manifest, resolving references against `dir`.
    pub fn from_manifest(project: &manifest::Project, dir: &Path) -> Result<Self, PathError> {
        let resolver = PathResolver::new(dir);

        let targets = project
            .targets
            .iter()
            .map(|target| Target::from_manifest(target, &resolver))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Project {
            name: project.name.clone(),
            path: resolver.manifest_dir().to_path_buf(),
            plugins: project.plugins.clone(),
            targets,
        })
    }

    /// Directories of every cross-project dependency, in declaration order.
    pub fn dependency_paths(&self) -> Vec<&Path> {
        let mut paths: Vec<&Path> = Vec::new();
        for target in &self.targets {
            for dependency in &target.dependencies {
                if let TargetDependency::Project { path, .. } = dependency {
                    if !paths.contains(&path.as_path()) {
                        paths.push(path);
                    }
                }
            }
        }
        paths
    }
}

impl Target {
    fn from_manifest(
        target: &manifest::Target,
        resolver: &PathResolver,
    ) -> Result<Self, PathError> {
        let dependencies = target
            .dependencies
            .iter()
            .map(|dependency| TargetDependency::from_manifest(dependency, resolver))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Target {
            name: target.name.clone(),
            product: target.product,
            sources: target.sources.clone(),
            dependencies,
        })
    }
}

impl TargetDependency {
    fn from_manifest(
        dependency: &manifest::TargetDependency,
        resolver: &PathResolver,
    ) -> Result<Self, PathError> {
        Ok(match dependency {
            manifest::TargetDependency::Project { project, target } => {
                TargetDependency::Project {
                    path: resolver.resolve(project)?,
                    target: target.clone(),
                }
            }
            manifest::TargetDependency::Target { target } => TargetDependency::Target {
                name: target.clone(),
            },
            manifest::TargetDependency::Framework { framework } => TargetDependency::Framework {
                path: resolver.resolve(framework)?,
            },
            manifest::TargetDependency::Package { package } => TargetDependency::Package {
                name: package.clone(),
            },
            manifest::TargetDependency::Sdk { sdk } => TargetDependency::Sdk { name: sdk.clone() },
        })
    }
}
