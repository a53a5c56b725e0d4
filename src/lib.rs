//! Slipway - a declarative, manifest-driven project generator
//!
//! This crate provides the core library functionality for slipway:
//! parsing manifest files, resolving inter-project references, and loading
//! the transitive closure of projects a workspace spans.

pub mod loader;
pub mod manifest;
pub mod model;
pub mod util;

/// Test utilities and mocks for slipway unit tests.
///
/// Only available when compiling tests. Provides a canned manifest loader
/// and fixture builders for manifest trees.
#[cfg(test)]
pub mod test_support;

pub use loader::{
    DependenciesLoader, LoadError, LoadedProjects, LoadedWorkspace, ManifestError,
    ManifestLoading, ModelLoader, PathResolver, RecursiveManifestLoader, TomlManifestLoader,
};
pub use manifest::ManifestKind;
pub use model::Plugins;
