//! Free-function tree algorithms over any [`Node`] arena.
//!
//! Every function takes the arena plus `u32` node indices. Functions that can
//! move the root return the new root, which the caller must store back.

pub mod print;
pub mod remove;
pub mod rotate;
pub mod swap;
pub mod transplant;

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::types::{Node, ValueNode};

pub use print::print;
pub use remove::remove;
pub use rotate::{rotate_left, rotate_pivot, rotate_right, RotateError};
pub use swap::swap_nodes;
pub use transplant::transplant;

#[inline]
pub(crate) fn parent_of<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].parent()
}

#[inline]
pub(crate) fn left_of<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].left()
}

#[inline]
pub(crate) fn right_of<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].right()
}

#[inline]
pub(crate) fn set_parent<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_parent(v);
}

#[inline]
pub(crate) fn set_left<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_left(v);
}

#[inline]
pub(crate) fn set_right<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_right(v);
}

/// Leftmost node under `root`, the in-order minimum.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match left_of(arena, idx) {
            Some(l) => curr = Some(l),
            None => return Some(idx),
        }
    }
    curr
}

/// Rightmost node under `root`, the in-order maximum.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match right_of(arena, idx) {
            Some(r) => curr = Some(r),
            None => return Some(idx),
        }
    }
    curr
}

/// In-order successor of `node`.
///
/// The leftmost node of the right subtree when one exists; otherwise the
/// nearest ancestor reached from a left child, or `None` past the maximum.
pub fn next<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(r) = right_of(arena, node) {
        let mut curr = r;
        while let Some(l) = left_of(arena, curr) {
            curr = l;
        }
        return Some(curr);
    }
    let mut curr = node;
    let mut p = parent_of(arena, node);
    while let Some(pi) = p {
        if right_of(arena, pi) == Some(curr) {
            curr = pi;
            p = parent_of(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor of `node`.
pub fn prev<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(l) = left_of(arena, node) {
        let mut curr = l;
        while let Some(r) = right_of(arena, curr) {
            curr = r;
        }
        return Some(curr);
    }
    let mut curr = node;
    let mut p = parent_of(arena, node);
    while let Some(pi) = p {
        if left_of(arena, pi) == Some(curr) {
            curr = pi;
            p = parent_of(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

fn size_inner<N: Node>(arena: &[N], root: u32) -> usize {
    1 + left_of(arena, root).map_or(0, |l| size_inner(arena, l))
        + right_of(arena, root).map_or(0, |r| size_inner(arena, r))
}

/// Number of nodes under `root`.
pub fn size<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    root.map_or(0, |r| size_inner(arena, r))
}

/// Finds a node by value.
pub fn find<T, N>(arena: &[N], root: Option<u32>, value: &T) -> Option<u32>
where
    T: Ord,
    N: ValueNode<T>,
{
    let mut curr = root;
    while let Some(i) = curr {
        curr = match value.cmp(arena[i as usize].value()) {
            Ordering::Equal => return Some(i),
            Ordering::Less => left_of(arena, i),
            Ordering::Greater => right_of(arena, i),
        };
    }
    None
}

/// Attaches `node` as the left child of `parent`; a previous left child of
/// `parent` becomes the left child of `node`.
pub fn insert_left<N: Node>(arena: &mut [N], node: u32, parent: u32) {
    let l = left_of(arena, parent);
    set_left(arena, node, l);
    set_left(arena, parent, Some(node));
    set_parent(arena, node, Some(parent));
    if let Some(l) = l {
        set_parent(arena, l, Some(node));
    }
}

/// Attaches `node` as the right child of `parent`; a previous right child of
/// `parent` becomes the right child of `node`.
pub fn insert_right<N: Node>(arena: &mut [N], node: u32, parent: u32) {
    let r = right_of(arena, parent);
    set_right(arena, node, r);
    set_right(arena, parent, Some(node));
    set_parent(arena, node, Some(parent));
    if let Some(r) = r {
        set_parent(arena, r, Some(node));
    }
}

/// True when `node` is the left child of its parent. The root is neither a
/// left nor a right child.
pub fn is_left_child<N: Node>(arena: &[N], node: u32) -> bool {
    parent_of(arena, node).map_or(false, |p| left_of(arena, p) == Some(node))
}

/// True when `node` is the right child of its parent.
pub fn is_right_child<N: Node>(arena: &[N], node: u32) -> bool {
    parent_of(arena, node).map_or(false, |p| right_of(arena, p) == Some(node))
}

/// The other child of `node`'s parent, if any.
pub fn sibling<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    let p = parent_of(arena, node)?;
    if left_of(arena, p) == Some(node) {
        right_of(arena, p)
    } else {
        left_of(arena, p)
    }
}

/// The sibling of `node`'s parent, if any.
pub fn uncle<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    let p = parent_of(arena, node)?;
    sibling(arena, p)
}

/// Number of nodes on the path from `node` up to the root, inclusive.
/// The root has depth 1.
pub fn depth_of<N: Node>(arena: &[N], node: u32) -> usize {
    let mut depth = 1;
    let mut curr = node;
    while let Some(p) = parent_of(arena, curr) {
        depth += 1;
        curr = p;
    }
    depth
}

/// Maximum depth over all nodes under `root`; 0 for an empty tree.
pub fn depth<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    let Some(i) = root else {
        return 0;
    };
    1 + depth(arena, left_of(arena, i)).max(depth(arena, right_of(arena, i)))
}

/// Validates the structural invariants of the tree under `root`.
///
/// Checks that the root has no parent, that every child's parent link points
/// back at the node holding it, that no node is reachable twice, and that the
/// in-order sequence of values is strictly ascending.
pub fn assert_search_tree<T, N>(arena: &[N], root: Option<u32>) -> Result<(), String>
where
    T: Ord,
    N: ValueNode<T>,
{
    let Some(root) = root else {
        return Ok(());
    };

    if parent_of(arena, root).is_some() {
        return Err("Root has parent".to_string());
    }

    fn walk<N: Node>(arena: &[N], node: u32, seen: &mut HashSet<u32>) -> Result<(), String> {
        if !seen.insert(node) {
            return Err(format!("Cycle through node {node}"));
        }
        if let Some(l) = left_of(arena, node) {
            if parent_of(arena, l) != Some(node) {
                return Err("Broken parent link on left child".to_string());
            }
            walk(arena, l, seen)?;
        }
        if let Some(r) = right_of(arena, node) {
            if parent_of(arena, r) != Some(node) {
                return Err("Broken parent link on right child".to_string());
            }
            walk(arena, r, seen)?;
        }
        Ok(())
    }

    let mut seen = HashSet::new();
    walk(arena, root, &mut seen)?;

    let mut curr = first(arena, Some(root));
    let mut prev_node: Option<u32> = None;
    while let Some(i) = curr {
        if let Some(prev) = prev_node {
            if arena[prev as usize].value() >= arena[i as usize].value() {
                return Err("Node order violated".to_string());
            }
        }
        prev_node = Some(i);
        curr = next(arena, i);
    }

    Ok(())
}
