//! Path references as written in manifests.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A path reference declared in a manifest file.
///
/// References are plain strings until a `PathResolver` anchors them: relative
/// references resolve against the declaring manifest's directory, absolute
/// references pass through, and references starting with `//` resolve against
/// the workspace root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathRef(String);

impl PathRef {
    pub fn new(reference: impl Into<String>) -> Self {
        PathRef(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this reference is anchored at the workspace root.
    pub fn is_root_relative(&self) -> bool {
        self.0.starts_with("//")
    }
}

impl fmt::Display for PathRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
