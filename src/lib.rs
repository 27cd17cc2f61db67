//! fstree: immutable, functional operations over a filesystem-shaped tree.
//!
//! Every traversal recurses once per level of nesting, so extremely deep
//! trees are bounded by the native stack.

pub mod error;
pub mod flatten;
pub mod tree;
pub mod types;

// Re-export
pub use error::{TreeError, TreeResult};
pub use flatten::{Nested, flatten, flatten_depth};
pub use tree::*;
pub use types::*;
