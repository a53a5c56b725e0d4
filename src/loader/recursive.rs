//! Recursive loading of project closures.
//!
//! Starting from a project directory, or from the projects a workspace
//! references, the loader follows cross-project dependency references until
//! the whole transitive closure is loaded. Loaded manifests are keyed by
//! normalized manifest directory; a directory already in the result is
//! skipped, which bounds the walk on cycles and diamonds. The first failing
//! load aborts the whole call.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::loader::manifest::{ManifestError, ManifestLoading, TomlManifestLoader};
use crate::loader::paths::{PathError, PathResolver};
use crate::manifest::{self, ManifestKind, TargetDependency};
use crate::model::Plugins;
use crate::util::fs::{glob_dirs, normalize_path};

/// Error from loading a project closure.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Path(#[from] PathError),

    /// A workspace project reference is not a valid glob pattern.
    #[error("invalid project pattern `{pattern}`")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

/// The transitive closure of loaded project manifests.
#[derive(Debug, Clone, Default)]
pub struct LoadedProjects {
    /// Loaded manifests keyed by normalized manifest directory
    pub projects: BTreeMap<PathBuf, manifest::Project>,
}

impl LoadedProjects {
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn contains(&self, dir: &Path) -> bool {
        self.projects.contains_key(dir)
    }

    pub fn get(&self, dir: &Path) -> Option<&manifest::Project> {
        self.projects.get(dir)
    }

    /// Manifest directories in the closure, in deterministic order.
    pub fn paths(&self) -> impl Iterator<Item = &PathBuf> {
        self.projects.keys()
    }
}

/// A loaded workspace together with its full project closure.
#[derive(Debug, Clone)]
pub struct LoadedWorkspace {
    /// Normalized workspace directory
    pub path: PathBuf,

    /// The workspace manifest
    pub workspace: manifest::Workspace,

    /// Every project the workspace references, transitively
    pub projects: LoadedProjects,
}

/// Loads the transitive closure of project manifests.
///
/// The loader holds no state between calls; every call starts from an empty
/// result map, so repeated loads of the same tree are independent.
pub struct RecursiveManifestLoader<L = TomlManifestLoader> {
    loader: L,
}

impl RecursiveManifestLoader<TomlManifestLoader> {
    /// A loader reading TOML manifests from disk.
    pub fn new() -> Self {
        RecursiveManifestLoader {
            loader: TomlManifestLoader::new(),
        }
    }
}

impl Default for RecursiveManifestLoader<TomlManifestLoader> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: ManifestLoading> RecursiveManifestLoader<L> {
    /// A loader over a custom manifest source.
    pub fn with_loader(loader: L) -> Self {
        RecursiveManifestLoader { loader }
    }

    /// Load the project at `path` and every project reachable from it.
    pub fn load_project(
        &self,
        path: &Path,
        plugins: &Plugins,
    ) -> Result<LoadedProjects, LoadError> {
        self.load_closure(vec![normalize_path(path)], plugins)
    }

    /// Load a workspace and the closure of every project it references.
    ///
    /// Workspace references may be glob patterns. Matches that are not
    /// directories, or are directories without a project manifest, are
    /// dropped without error; the surviving set seeds the same traversal
    /// `load_project` runs.
    pub fn load_workspace(
        &self,
        path: &Path,
        plugins: &Plugins,
    ) -> Result<LoadedWorkspace, LoadError> {
        let path = normalize_path(path);
        let workspace = self.loader.load_workspace(&path, plugins)?;

        let seeds = discover_project_dirs(&self.loader, &path, &workspace.projects)?;
        let projects = self.load_closure(seeds, plugins)?;
        Ok(LoadedWorkspace {
            path,
            workspace,
            projects,
        })
    }

    /// Drain the frontier until every reachable project is loaded once.
    fn load_closure(
        &self,
        mut frontier: Vec<PathBuf>,
        plugins: &Plugins,
    ) -> Result<LoadedProjects, LoadError> {
        let mut projects = BTreeMap::new();

        while let Some(dir) = frontier.pop() {
            if projects.contains_key(&dir) {
                continue;
            }

            let project = self.loader.load_project(&dir, plugins)?;
            let dependencies = dependency_dirs(&dir, &project)?;

            tracing::debug!(
                "loaded project `{}` at {} ({} dependency dirs)",
                project.name,
                dir.display(),
                dependencies.len()
            );

            projects.insert(dir, project);
            frontier.extend(dependencies);
        }

        Ok(LoadedProjects { projects })
    }
}

/// Expand workspace project references to directories carrying a project
/// manifest.
///
/// Non-directory matches and directories without a project manifest are
/// silently dropped; an unparsable pattern is an error. Overlapping
/// references yield one entry each.
pub(crate) fn discover_project_dirs<L: ManifestLoading>(
    loader: &L,
    workspace_dir: &Path,
    references: &[manifest::PathRef],
) -> Result<Vec<PathBuf>, LoadError> {
    let resolver = PathResolver::new(workspace_dir);
    let mut dirs: Vec<PathBuf> = Vec::new();

    for reference in references {
        let pattern = resolver.resolve(reference)?;
        let matched = glob_dirs(&pattern).map_err(|source| LoadError::Pattern {
            pattern: reference.to_string(),
            source,
        })?;

        for dir in matched {
            if !loader.manifest_kinds(&dir).contains(&ManifestKind::Project) {
                tracing::debug!("skipping {}: no project manifest", dir.display());
                continue;
            }
            if !dirs.contains(&dir) {
                dirs.push(dir);
            }
        }
    }

    Ok(dirs)
}

/// The manifest directories of every cross-project dependency in `project`.
///
/// References resolve against `dir`, the declaring manifest's own directory,
/// never against a global root. Duplicate references collapse to one entry;
/// every dependency form other than a project reference is left alone.
fn dependency_dirs(
    dir: &Path,
    project: &manifest::Project,
) -> Result<Vec<PathBuf>, PathError> {
    let resolver = PathResolver::new(dir);
    let mut dirs: Vec<PathBuf> = Vec::new();

    for target in &project.targets {
        for dependency in &target.dependencies {
            match dependency {
                TargetDependency::Project {
                    project: reference, ..
                } => {
                    let resolved = resolver.resolve(reference)?;
                    if !dirs.contains(&resolved) {
                        dirs.push(resolved);
                    }
                }
                TargetDependency::Target { .. }
                | TargetDependency::Framework { .. }
                | TargetDependency::Package { .. }
                | TargetDependency::Sdk { .. } => {}
            }
        }
    }

    Ok(dirs)
}
