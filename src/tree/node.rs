//! Tree node representation: either a file or a directory.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{TreeError, TreeResult};
use crate::types::{Meta, NodeKind};

/// Immutable tree node - either a file or a directory
///
/// The value shape mirrors `{ "name", "children", "meta", "type" }`, with
/// `children` only present on directories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Directory {
        name: String,
        #[serde(default)]
        children: Vec<Node>,
        #[serde(default)]
        meta: Meta,
    },
    File {
        name: String,
        #[serde(default)]
        meta: Meta,
    },
}

impl Node {
    /// Create a directory holding `children` in the given order
    pub fn directory(name: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Directory {
            name: name.into(),
            children,
            meta: Meta::new(),
        }
    }

    /// Create a file
    pub fn file(name: impl Into<String>) -> Self {
        Node::File {
            name: name.into(),
            meta: Meta::new(),
        }
    }

    pub fn with_meta(self, meta: Meta) -> Self {
        match self {
            Node::Directory { name, children, .. } => Node::Directory {
                name,
                children,
                meta,
            },
            Node::File { name, .. } => Node::File { name, meta },
        }
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        let name = name.into();
        match self {
            Node::Directory { children, meta, .. } => Node::Directory {
                name,
                children,
                meta,
            },
            Node::File { meta, .. } => Node::File { name, meta },
        }
    }

    /// Replace the children of a directory. Files cannot hold children.
    pub fn with_children(self, children: Vec<Node>) -> TreeResult<Self> {
        match self {
            Node::Directory { name, meta, .. } => Ok(Node::Directory {
                name,
                children,
                meta,
            }),
            Node::File { name, .. } => Err(TreeError::NotADirectory(name)),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::Directory { name, .. } | Node::File { name, .. } => name,
        }
    }

    pub fn meta(&self) -> &Meta {
        match self {
            Node::Directory { meta, .. } | Node::File { meta, .. } => meta,
        }
    }

    /// Get the children of a directory (empty for files)
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Directory { children, .. } => children,
            Node::File { .. } => &[],
        }
    }

    /// Like [`Node::children`], but a file is reported as an error
    pub fn try_children(&self) -> TreeResult<&[Node]> {
        match self {
            Node::Directory { children, .. } => Ok(children),
            Node::File { name, .. } => Err(TreeError::NotADirectory(name.clone())),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Directory { .. } => NodeKind::Directory,
            Node::File { .. } => NodeKind::File,
        }
    }

    /// Check if this node is a file
    pub fn is_file(&self) -> bool {
        matches!(self, Node::File { .. })
    }

    /// Check if this node is a directory
    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Directory { .. })
    }
}

impl TryFrom<Value> for Node {
    type Error = TreeError;

    /// Build a tree from an untyped value. A missing or non-string `name`,
    /// an unknown `type` tag or malformed `children` is an invalid argument.
    fn try_from(value: Value) -> TreeResult<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        let (name, children, meta, kind) = match node {
            Node::Directory {
                name,
                children,
                meta,
            } => (name, Some(children), meta, NodeKind::Directory),
            Node::File { name, meta } => (name, None, meta, NodeKind::File),
        };

        let mut object = serde_json::Map::new();
        object.insert("name".into(), Value::String(name));
        if let Some(children) = children {
            object.insert(
                "children".into(),
                Value::Array(children.into_iter().map(Value::from).collect()),
            );
        }
        object.insert("meta".into(), Value::Object(meta));
        object.insert("type".into(), Value::String(kind.to_string()));
        Value::Object(object)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn owner(name: &str) -> Meta {
        let mut meta = Meta::new();
        meta.insert("owner".into(), json!(name));
        meta
    }

    #[test]
    fn test_predicates() {
        let file = Node::file("hosts");
        let dir = Node::directory("etc", vec![]);

        assert!(file.is_file());
        assert!(!file.is_dir());
        assert_eq!(file.kind(), NodeKind::File);

        assert!(dir.is_dir());
        assert!(!dir.is_file());
        assert_eq!(dir.kind(), NodeKind::Directory);
    }

    #[test]
    fn test_meta_defaults_to_empty() {
        assert!(Node::file("hosts").meta().is_empty());
        assert!(Node::directory("etc", vec![]).meta().is_empty());

        let file = Node::file("hosts").with_meta(owner("root"));
        assert_eq!(file.meta(), &owner("root"));
    }

    #[test]
    fn test_children_order_preserved() {
        let dir = Node::directory("/", vec![Node::file("a"), Node::directory("b", vec![])]);
        let names: Vec<_> = dir.children().iter().map(Node::name).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn test_file_children() {
        let file = Node::file("hosts");
        assert!(file.children().is_empty());
        assert_eq!(
            file.try_children(),
            Err(TreeError::NotADirectory("hosts".into()))
        );
        assert!(matches!(
            file.with_children(vec![Node::file("x")]),
            Err(TreeError::NotADirectory(_))
        ));
    }

    #[test]
    fn test_with_name_keeps_fields() {
        let dir = Node::directory("etc", vec![Node::file("hosts")]).with_meta(owner("root"));
        let renamed = dir.clone().with_name("ETC");

        assert_eq!(renamed.name(), "ETC");
        assert_eq!(renamed.meta(), dir.meta());
        assert_eq!(renamed.children(), dir.children());
    }

    #[test]
    fn test_value_shape() {
        let tree = Node::directory("/", vec![Node::file("robots.txt")]);
        assert_eq!(
            Value::from(tree.clone()),
            json!({
                "name": "/",
                "children": [{ "name": "robots.txt", "meta": {}, "type": "file" }],
                "meta": {},
                "type": "directory",
            })
        );
        assert_eq!(serde_json::to_value(&tree).unwrap(), Value::from(tree));
    }

    #[test]
    fn test_try_from_value() {
        let node = Node::try_from(json!({
            "name": "etc",
            "type": "directory",
            "children": [{ "name": "hosts", "type": "file", "meta": { "owner": "root" } }],
        }))
        .unwrap();

        assert_eq!(
            node,
            Node::directory("etc", vec![Node::file("hosts").with_meta(owner("root"))])
        );
    }

    #[test]
    fn test_try_from_value_rejects_bad_input() {
        let bad = [
            json!({ "name": 42, "type": "file" }),
            json!({ "type": "file" }),
            json!({ "name": "x", "type": "symlink" }),
            json!({ "name": "x", "type": "directory", "children": "nope" }),
        ];
        for value in bad {
            assert!(matches!(
                Node::try_from(value),
                Err(TreeError::InvalidArgument(_))
            ));
        }
    }
}
