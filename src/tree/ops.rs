//! Pre-order traversals over [`Node`] trees.
//!
//! None of these mutate their input; each returns fresh values. The `try_`
//! variants stop at the first callback error and hand it back unchanged.

use std::convert::Infallible;

use tracing::{debug, trace};

use super::node::Node;

/// Apply `transform` to every node, parent before children.
///
/// Children of the result are always the mapped children of the *original*
/// node. `transform` is expected to keep the variant of its input: when it
/// turns a directory into a file, that file is returned as is and the
/// original children are not visited.
pub fn map<F>(tree: &Node, mut transform: F) -> Node
where
    F: FnMut(&Node) -> Node,
{
    let Ok(mapped) = try_map::<_, Infallible>(tree, |node| Ok(transform(node)));
    mapped
}

pub fn try_map<F, E>(tree: &Node, mut transform: F) -> Result<Node, E>
where
    F: FnMut(&Node) -> Result<Node, E>,
{
    debug!(root = tree.name(), "mapping tree");
    map_node(tree, &mut transform)
}

fn map_node<F, E>(node: &Node, transform: &mut F) -> Result<Node, E>
where
    F: FnMut(&Node) -> Result<Node, E>,
{
    let updated = transform(node)?;

    match (node, updated) {
        (Node::Directory { children, .. }, Node::Directory { name, meta, .. }) => {
            trace!(directory = %name, children = children.len(), "mapping children");
            let children = children
                .iter()
                .map(|child| map_node(child, transform))
                .collect::<Result<Vec<_>, E>>()?;
            Ok(Node::Directory {
                name,
                children,
                meta,
            })
        }
        (_, updated) => Ok(updated),
    }
}

/// Fold `combine` over every node, parent before children, left to right.
pub fn reduce<A, F>(tree: &Node, initial: A, mut combine: F) -> A
where
    F: FnMut(A, &Node) -> A,
{
    let Ok(acc) = try_reduce::<_, _, Infallible>(tree, initial, |acc, node| {
        Ok(combine(acc, node))
    });
    acc
}

pub fn try_reduce<A, F, E>(tree: &Node, initial: A, mut combine: F) -> Result<A, E>
where
    F: FnMut(A, &Node) -> Result<A, E>,
{
    debug!(root = tree.name(), "reducing tree");
    reduce_node(tree, initial, &mut combine)
}

fn reduce_node<A, F, E>(node: &Node, acc: A, combine: &mut F) -> Result<A, E>
where
    F: FnMut(A, &Node) -> Result<A, E>,
{
    let acc = combine(acc, node)?;
    node.children()
        .iter()
        .try_fold(acc, |acc, child| reduce_node(child, acc, combine))
}

/// Keep only the nodes accepted by `predicate`.
///
/// A rejected node drops its whole subtree. A kept directory stays even if
/// none of its children survive. Returns `None` when the root is rejected.
pub fn filter<F>(tree: &Node, mut predicate: F) -> Option<Node>
where
    F: FnMut(&Node) -> bool,
{
    let Ok(filtered) =
        try_filter::<_, Infallible>(tree, |node| Ok(predicate(node)));
    filtered
}

pub fn try_filter<F, E>(tree: &Node, mut predicate: F) -> Result<Option<Node>, E>
where
    F: FnMut(&Node) -> Result<bool, E>,
{
    debug!(root = tree.name(), "filtering tree");
    filter_node(tree, &mut predicate)
}

fn filter_node<F, E>(node: &Node, predicate: &mut F) -> Result<Option<Node>, E>
where
    F: FnMut(&Node) -> Result<bool, E>,
{
    if !predicate(node)? {
        trace!(node = node.name(), kind = %node.kind(), "pruned");
        return Ok(None);
    }

    match node {
        Node::File { .. } => Ok(Some(node.clone())),
        Node::Directory {
            name,
            children,
            meta,
        } => {
            let mut kept = Vec::with_capacity(children.len());
            for child in children {
                if let Some(child) = filter_node(child, predicate)? {
                    kept.push(child);
                }
            }
            Ok(Some(Node::Directory {
                name: name.clone(),
                children: kept,
                meta: meta.clone(),
            }))
        }
    }
}
