//! Depth-bounded flattening of arbitrarily nested lists.

use serde::{Deserialize, Serialize};

/// A scalar or a list of further nested values.
///
/// Untagged, so a JSON value such as `[1, [2, 3]]` reads straight into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Nested<T> {
    Item(T),
    List(Vec<Nested<T>>),
}

impl<T> From<Vec<Nested<T>>> for Nested<T> {
    fn from(items: Vec<Nested<T>>) -> Self {
        Nested::List(items)
    }
}

/// Inline every nested list, at any depth, keeping left-to-right order.
pub fn flatten<T: Clone>(items: &[Nested<T>]) -> Vec<Nested<T>> {
    flatten_depth(items, 0)
}

/// Inline nested lists up to `depth` levels; `0` means no limit.
///
/// A list is inlined only while the budget is non-negative. Each level
/// passes down `depth - 1` when `depth > 1` and `-depth` otherwise, so the
/// level after the last permitted one sees a negative budget and keeps its
/// lists intact, while a budget of zero propagates as zero. A negative
/// `depth` at the top inlines nothing.
pub fn flatten_depth<T: Clone>(items: &[Nested<T>], depth: i64) -> Vec<Nested<T>> {
    let mut result = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Nested::List(inner) if depth >= 0 => {
                let next = if depth > 1 { depth - 1 } else { -depth };
                result.extend(flatten_depth(inner, next));
            }
            other => result.push(other.clone()),
        }
    }
    result
}
