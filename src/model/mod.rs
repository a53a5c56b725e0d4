//! Internal entities produced from loaded manifests.
//!
//! Where the `manifest` module mirrors what files say, this module carries
//! what the tool works with: absolute paths, resolved plugin locations, and
//! typed version requirements.

pub mod config;
pub mod dependencies;
pub mod plugin;
pub mod project;
pub mod workspace;

pub use config::{Config, PluginLocation};
pub use dependencies::{Dependencies, ExternalDependency};
pub use plugin::{Plugin, Plugins};
pub use project::{Project, Target, TargetDependency};
pub use workspace::Workspace;
