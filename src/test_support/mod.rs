//! Test utilities and mocks for slipway unit tests.
//!
//! Only compiled under `cfg(test)`. Provides a canned manifest loader with
//! invocation counting and fixture builders that write real manifest trees.

mod fixtures;

pub use fixtures::{project_with_deps, write_plugin, ProjectFixture};

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::loader::manifest::{ManifestError, ManifestLoading};
use crate::manifest::{self, ManifestKind};
use crate::model::Plugins;
use crate::util::fs::normalize_path;

/// A `ManifestLoading` double with canned projects and invocation counts.
///
/// State lives behind an `Rc`, so clones share stubs and counters: hand one
/// clone to the code under test and keep another to inspect counts.
#[derive(Debug, Clone, Default)]
pub struct MockManifestLoader {
    inner: Rc<RefCell<MockState>>,
}

#[derive(Debug, Default)]
struct MockState {
    projects: BTreeMap<PathBuf, manifest::Project>,
    project_loads: BTreeMap<PathBuf, usize>,
}

impl MockManifestLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the project manifest returned for `dir`.
    pub fn stub_project(&self, dir: impl AsRef<Path>, project: manifest::Project) {
        let dir = normalize_path(dir.as_ref());
        self.inner.borrow_mut().projects.insert(dir, project);
    }

    /// How many times the project at `dir` was loaded.
    pub fn load_count(&self, dir: impl AsRef<Path>) -> usize {
        let dir = normalize_path(dir.as_ref());
        self.inner
            .borrow()
            .project_loads
            .get(&dir)
            .copied()
            .unwrap_or(0)
    }

    /// Total project loads across every directory.
    pub fn total_loads(&self) -> usize {
        self.inner.borrow().project_loads.values().sum()
    }
}

impl ManifestLoading for MockManifestLoader {
    fn load_project(
        &self,
        dir: &Path,
        _plugins: &Plugins,
    ) -> Result<manifest::Project, ManifestError> {
        let dir = normalize_path(dir);
        let mut state = self.inner.borrow_mut();
        *state.project_loads.entry(dir.clone()).or_insert(0) += 1;
        state
            .projects
            .get(&dir)
            .cloned()
            .ok_or(ManifestError::NotFound {
                kind: ManifestKind::Project,
                dir,
            })
    }

    fn load_workspace(
        &self,
        dir: &Path,
        _plugins: &Plugins,
    ) -> Result<manifest::Workspace, ManifestError> {
        Err(ManifestError::NotFound {
            kind: ManifestKind::Workspace,
            dir: normalize_path(dir),
        })
    }

    fn load_dependencies(
        &self,
        dir: &Path,
        _plugins: &Plugins,
    ) -> Result<manifest::Dependencies, ManifestError> {
        Err(ManifestError::NotFound {
            kind: ManifestKind::Dependencies,
            dir: normalize_path(dir),
        })
    }

    fn load_config(&self, dir: &Path) -> Result<manifest::Config, ManifestError> {
        Err(ManifestError::NotFound {
            kind: ManifestKind::Config,
            dir: normalize_path(dir),
        })
    }

    fn load_plugin(&self, dir: &Path) -> Result<manifest::Plugin, ManifestError> {
        Err(ManifestError::NotFound {
            kind: ManifestKind::Plugin,
            dir: normalize_path(dir),
        })
    }

    fn manifest_kinds(&self, dir: &Path) -> BTreeSet<ManifestKind> {
        let dir = normalize_path(dir);
        let mut kinds = BTreeSet::new();
        if self.inner.borrow().projects.contains_key(&dir) {
            kinds.insert(ManifestKind::Project);
        }
        kinds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_counts_loads() {
        let mock = MockManifestLoader::new();
        mock.stub_project("/repo/a", project_with_deps("A", &[]));

        assert_eq!(mock.load_count("/repo/a"), 0);
        mock.load_project(Path::new("/repo/a"), &Plugins::none())
            .unwrap();
        mock.load_project(Path::new("/repo/a"), &Plugins::none())
            .unwrap();
        assert_eq!(mock.load_count("/repo/a"), 2);
        assert_eq!(mock.total_loads(), 2);
    }

    #[test]
    fn test_mock_unstubbed_dir_not_found() {
        let mock = MockManifestLoader::new();
        let err = mock
            .load_project(Path::new("/repo/missing"), &Plugins::none())
            .unwrap_err();
        assert!(matches!(err, ManifestError::NotFound { .. }));
        assert_eq!(mock.load_count("/repo/missing"), 1);
    }

    #[test]
    fn test_mock_kinds_follow_stubs() {
        let mock = MockManifestLoader::new();
        mock.stub_project("/repo/a", project_with_deps("A", &[]));

        assert!(mock
            .manifest_kinds(Path::new("/repo/a"))
            .contains(&ManifestKind::Project));
        assert!(mock.manifest_kinds(Path::new("/repo/b")).is_empty());
    }
}
