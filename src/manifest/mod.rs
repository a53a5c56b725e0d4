//! Manifest file schemas.
//!
//! One module per manifest kind, each exposing the parsed shape and a
//! `from_toml` constructor. Loading (existence checks, IO, plugin
//! validation) lives in `loader::manifest`.

pub mod config;
pub mod dependencies;
pub mod kind;
pub mod path_ref;
pub mod plugin;
pub mod project;
pub mod workspace;

pub use config::{Config, GenerationOptions, PluginLocation};
pub use dependencies::{Dependencies, ExternalDependency};
pub use kind::ManifestKind;
pub use path_ref::PathRef;
pub use plugin::Plugin;
pub use project::{ProductKind, Project, Target, TargetDependency};
pub use workspace::Workspace;
