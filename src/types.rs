//! Shared types for tree nodes: metadata bags and runtime kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Arbitrary string-keyed metadata attached to a node.
///
/// Key order never affects equality.
pub type Meta = serde_json::Map<String, serde_json::Value>;

/// Enum for distinguishing node variants at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Directory,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::File => write!(f, "file"),
            NodeKind::Directory => write!(f, "directory"),
        }
    }
}
