//! Node trait definitions.
//!
//! Nodes live in a `Vec`-backed arena and each "pointer" is an `Option<u32>`
//! index into that arena. All tree-manipulation functions take the arena plus
//! indices and reach the links through these traits, so callers can bring
//! their own node layouts.

/// Structural links of a parent-linked binary tree node.
pub trait Node {
    fn parent(&self) -> Option<u32>;
    fn left(&self) -> Option<u32>;
    fn right(&self) -> Option<u32>;
    fn set_parent(&mut self, v: Option<u32>);
    fn set_left(&mut self, v: Option<u32>);
    fn set_right(&mut self, v: Option<u32>);
}

/// Node carrying an ordered value.
///
/// Search and validation read values through this trait; structural
/// operations (transplant, rotation, swap, remove) need only [`Node`].
pub trait ValueNode<T>: Node {
    fn value(&self) -> &T;
}
