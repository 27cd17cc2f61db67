//! The node type and the pre-order traversals built on it.

mod node;
mod ops;

pub use node::Node;
pub use ops::{filter, map, reduce, try_filter, try_map, try_reduce};
