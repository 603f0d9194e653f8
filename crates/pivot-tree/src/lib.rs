//! Arena-based parent-linked binary search tree.
//!
//! An unbalanced BST over unique [`Ord`] values with explicit, caller-driven
//! rotations. Instead of raw pointers, all "pointers" are `Option<u32>`
//! indices into a `Vec`-backed arena, so parent back-links are plain data
//! and no reference cycles exist.
//!
//! [`Tree`] owns the arena and exposes the whole API: insert, find, delete,
//! successor/predecessor, in-order listing, depth queries, and the rotation
//! surface. The [`util`] module exposes the same algorithms as free
//! functions over any node type implementing [`Node`] / [`ValueNode`],
//! following the convention that functions which can move the root return
//! the new root.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] and [`ValueNode`] traits |
//! [`tree_node`] | [`TreeNode`], the built-in arena node |
//! [`util`] | navigation, find, transplant, rotations, swap, remove, print |
//! [`tree`] | [`Tree`], the owning facade |

pub mod tree;
pub mod tree_node;
pub mod types;
pub mod util;

pub use tree::Tree;
pub use tree_node::TreeNode;
pub use types::{Node, ValueNode};
pub use util::{
    find, first, last, next, prev, remove, rotate_left, rotate_pivot, rotate_right, swap_nodes,
    transplant, RotateError,
};
