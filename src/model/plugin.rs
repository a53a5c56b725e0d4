//! Loaded plugin descriptors.

use std::path::PathBuf;

use serde::Serialize;

/// A plugin that has been located on disk and loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plugin {
    /// Plugin name, as declared in its manifest
    pub name: String,

    /// Directory containing the plugin manifest
    pub path: PathBuf,
}

/// The set of plugins available while evaluating manifests.
///
/// Every project, workspace, and dependencies load call takes this set by
/// reference. Traversal never inspects it; the manifest loader checks a
/// project's `plugins` list against it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Plugins {
    plugins: Vec<Plugin>,
}

impl Plugins {
    /// The empty plugin set.
    pub fn none() -> Self {
        Plugins::default()
    }

    /// Whether a plugin with the given name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.plugins.iter().any(|p| p.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }
}

impl From<Vec<Plugin>> for Plugins {
    fn from(plugins: Vec<Plugin>) -> Self {
        Plugins { plugins }
    }
}

impl FromIterator<Plugin> for Plugins {
    fn from_iter<I: IntoIterator<Item = Plugin>>(iter: I) -> Self {
        Plugins {
            plugins: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_is_empty() {
        let plugins = Plugins::none();
        assert!(plugins.is_empty());
        assert!(!plugins.contains("ThemePlugin"));
    }

    #[test]
    fn test_contains_by_name() {
        let plugins: Plugins = vec![Plugin {
            name: "ThemePlugin".to_string(),
            path: PathBuf::from("/plugins/theme"),
        }]
        .into();

        assert!(plugins.contains("ThemePlugin"));
        assert!(!plugins.contains("OtherPlugin"));
        assert_eq!(plugins.len(), 1);
    }
}
