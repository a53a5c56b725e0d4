//! Fixture builders for manifest trees.

use std::path::Path;

use crate::manifest;

/// Builder that renders and writes a `Project.toml`.
#[derive(Debug, Clone)]
pub struct ProjectFixture {
    name: String,
    product: &'static str,
    dependencies: Vec<String>,
    plugins: Vec<String>,
}

impl ProjectFixture {
    /// An application project.
    pub fn app(name: &str) -> Self {
        ProjectFixture {
            name: name.to_string(),
            product: "app",
            dependencies: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// A static library project.
    pub fn library(name: &str) -> Self {
        ProjectFixture {
            name: name.to_string(),
            product: "staticlib",
            dependencies: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Add a cross-project dependency reference.
    pub fn with_dependency(mut self, reference: &str) -> Self {
        self.dependencies.push(reference.to_string());
        self
    }

    /// Declare a plugin the manifest relies on.
    pub fn with_plugin(mut self, plugin: &str) -> Self {
        self.plugins.push(plugin.to_string());
        self
    }

    /// Render the manifest content.
    pub fn manifest(&self) -> String {
        let mut out = format!("name = \"{}\"\n", self.name);

        if !self.plugins.is_empty() {
            let plugins = self
                .plugins
                .iter()
                .map(|p| format!("\"{}\"", p))
                .collect::<Vec<_>>()
                .join(", ");
            out.push_str(&format!("plugins = [{}]\n", plugins));
        }

        out.push_str(&format!(
            "\n[targets.{}]\nproduct = \"{}\"\nsources = [\"Sources/**/*.c\"]\n",
            self.name.to_lowercase(),
            self.product
        ));

        if !self.dependencies.is_empty() {
            let deps = self
                .dependencies
                .iter()
                .map(|d| format!("{{ project = \"{}\" }}", d))
                .collect::<Vec<_>>()
                .join(", ");
            out.push_str(&format!("deps = [{}]\n", deps));
        }

        out
    }

    /// Write `Project.toml` into `dir`, creating the directory as needed.
    pub fn write_to(&self, dir: &Path) -> std::io::Result<()> {
        std::fs::create_dir_all(dir)?;
        std::fs::write(dir.join("Project.toml"), self.manifest())
    }
}

/// A parsed minimal project whose single target depends on `deps` projects.
pub fn project_with_deps(name: &str, deps: &[&str]) -> manifest::Project {
    let entries = deps
        .iter()
        .map(|d| format!("{{ project = \"{}\" }}", d))
        .collect::<Vec<_>>()
        .join(", ");
    let content = format!(
        "name = \"{}\"\n\n[targets.main]\nproduct = \"staticlib\"\ndeps = [{}]\n",
        name, entries
    );
    manifest::Project::from_toml(&content).unwrap()
}

/// Write a `Plugin.toml` declaring `name` into `dir`.
pub fn write_plugin(dir: &Path, name: &str) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)?;
    std::fs::write(dir.join("Plugin.toml"), format!("name = \"{}\"\n", name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_manifest_parses() {
        let fixture = ProjectFixture::app("Mail")
            .with_dependency("../core")
            .with_plugin("ThemePlugin");

        let project = manifest::Project::from_toml(&fixture.manifest()).unwrap();
        assert_eq!(project.name, "Mail");
        assert_eq!(project.plugins, vec!["ThemePlugin"]);
        assert_eq!(project.targets[0].dependencies.len(), 1);
    }

    #[test]
    fn test_project_with_deps_shape() {
        let project = project_with_deps("A", &["../b", "../c"]);
        assert_eq!(project.targets.len(), 1);
        assert_eq!(project.targets[0].dependencies.len(), 2);
    }
}
