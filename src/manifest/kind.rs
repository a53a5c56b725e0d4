//! Manifest kinds and their file names.

use std::fmt;

/// The kinds of manifest a directory can carry.
///
/// Each kind maps to exactly one fixed file name at the root of its
/// manifest directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ManifestKind {
    /// `Project.toml` describing a project and its targets
    Project,
    /// `Workspace.toml` grouping projects
    Workspace,
    /// `Config.toml` with tool-wide settings
    Config,
    /// `Dependencies.toml` declaring external dependencies
    Dependencies,
    /// `Plugin.toml` describing a plugin
    Plugin,
}

impl ManifestKind {
    /// All manifest kinds, in a stable order.
    pub const ALL: [ManifestKind; 5] = [
        ManifestKind::Project,
        ManifestKind::Workspace,
        ManifestKind::Config,
        ManifestKind::Dependencies,
        ManifestKind::Plugin,
    ];

    /// The fixed file name for this kind.
    pub fn file_name(&self) -> &'static str {
        match self {
            ManifestKind::Project => "Project.toml",
            ManifestKind::Workspace => "Workspace.toml",
            ManifestKind::Config => "Config.toml",
            ManifestKind::Dependencies => "Dependencies.toml",
            ManifestKind::Plugin => "Plugin.toml",
        }
    }
}

impl fmt::Display for ManifestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ManifestKind::Project => "project",
            ManifestKind::Workspace => "workspace",
            ManifestKind::Config => "config",
            ManifestKind::Dependencies => "dependencies",
            ManifestKind::Plugin => "plugin",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names_are_distinct() {
        let mut names: Vec<_> = ManifestKind::ALL.iter().map(|k| k.file_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), ManifestKind::ALL.len());
    }

    #[test]
    fn test_display() {
        assert_eq!(ManifestKind::Project.to_string(), "project");
        assert_eq!(ManifestKind::Dependencies.to_string(), "dependencies");
    }
}
