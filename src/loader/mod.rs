//! Manifest loading.
//!
//! Layered from the bottom up: `manifest` loads one file, `paths` anchors
//! references, `recursive` walks project closures, and `model` /
//! `dependencies` convert loaded manifests into model entities.

pub mod dependencies;
pub mod manifest;
pub mod model;
pub mod paths;
pub mod recursive;

pub use dependencies::DependenciesLoader;
pub use manifest::{ManifestError, ManifestLoading, TomlManifestLoader};
pub use model::ModelLoader;
pub use paths::{PathError, PathResolver};
pub use recursive::{LoadError, LoadedProjects, LoadedWorkspace, RecursiveManifestLoader};
