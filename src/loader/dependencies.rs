//! Loading declared external dependencies.

use std::path::Path;

use crate::loader::manifest::{ManifestLoading, TomlManifestLoader};
use crate::loader::recursive::LoadError;
use crate::model::{self, Plugins};
use crate::util::fs::normalize_path;

/// Loads a directory's `Dependencies.toml` as a model entity.
pub struct DependenciesLoader<L = TomlManifestLoader> {
    loader: L,
}

impl DependenciesLoader<TomlManifestLoader> {
    pub fn new() -> Self {
        DependenciesLoader {
            loader: TomlManifestLoader::new(),
        }
    }
}

impl Default for DependenciesLoader<TomlManifestLoader> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: ManifestLoading> DependenciesLoader<L> {
    pub fn with_loader(loader: L) -> Self {
        DependenciesLoader { loader }
    }

    /// Load the external dependencies declared at `dir`.
    pub fn load_dependencies(
        &self,
        dir: &Path,
        plugins: &Plugins,
    ) -> Result<model::Dependencies, LoadError> {
        let dir = normalize_path(dir);
        let manifest = self.loader.load_dependencies(&dir, plugins)?;
        Ok(model::Dependencies::from_manifest(&manifest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::manifest::ManifestError;
    use semver::Version;
    use tempfile::TempDir;

    #[test]
    fn test_load_dependencies() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join("Dependencies.toml"),
            r#"
[external.zlib]
git = "https://github.com/madler/zlib"
requirement = "^1.3"
"#,
        )
        .unwrap();

        let loader = DependenciesLoader::new();
        let dependencies = loader
            .load_dependencies(tmp.path(), &Plugins::none())
            .unwrap();

        let zlib = &dependencies.external["zlib"];
        assert!(zlib.requirement.matches(&Version::new(1, 3, 1)));
    }

    #[test]
    fn test_load_dependencies_missing() {
        let tmp = TempDir::new().unwrap();

        let loader = DependenciesLoader::new();
        let err = loader
            .load_dependencies(tmp.path(), &Plugins::none())
            .unwrap_err();
        assert!(matches!(
            err,
            LoadError::Manifest(ManifestError::NotFound { .. })
        ));
    }
}
