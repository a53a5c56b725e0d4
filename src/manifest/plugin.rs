//! Plugin.toml parsing and schema.

use serde::{Deserialize, Serialize};

/// The parsed Plugin.toml manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plugin {
    /// Plugin name, matched against `plugins` lists in project manifests
    pub name: String,

    /// Human-readable description
    #[serde(default)]
    pub description: Option<String>,
}

impl Plugin {
    /// Parse plugin manifest content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plugin() {
        let content = r#"
name = "ThemePlugin"
description = "Shared target templates"
"#;
        let plugin = Plugin::from_toml(content).unwrap();
        assert_eq!(plugin.name, "ThemePlugin");
        assert_eq!(plugin.description.as_deref(), Some("Shared target templates"));
    }

    #[test]
    fn test_parse_plugin_without_description() {
        let plugin = Plugin::from_toml(r#"name = "Bare""#).unwrap();
        assert!(plugin.description.is_none());
    }
}
