//! Internal external-dependency entities.

use std::collections::BTreeMap;

use semver::VersionReq;
use serde::Serialize;
use url::Url;

use crate::manifest;

/// Declared external dependencies.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Dependencies {
    /// External dependencies keyed by name
    pub external: BTreeMap<String, ExternalDependency>,
}

/// One external dependency.
#[derive(Debug, Clone, Serialize)]
pub struct ExternalDependency {
    /// Source repository
    pub url: Url,

    /// Version requirement
    pub requirement: VersionReq,
}

impl Dependencies {
    /// Convert a loaded manifest.
    pub fn from_manifest(dependencies: &manifest::Dependencies) -> Self {
        let external = dependencies
            .external
            .iter()
            .map(|(name, dependency)| {
                (
                    name.clone(),
                    ExternalDependency {
                        url: dependency.git.clone(),
                        requirement: dependency.requirement.clone(),
                    },
                )
            })
            .collect();

        Dependencies { external }
    }
}
