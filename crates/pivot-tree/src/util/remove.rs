use crate::types::Node;

use super::swap::swap_nodes;
use super::transplant::transplant;
use super::{left_of, next, parent_of, right_of, set_left, set_parent, set_right};

/// Removes `node` from the tree rooted at `root`.
///
/// A node with two children first trades places with its in-order successor,
/// which has no left child, and is then removed from the simpler position;
/// the recursion re-enters at most once. The removed node's own links are
/// cleared so it retains no stale references. Removing a node that is
/// already detached leaves the tree alone.
///
/// Returns the new root.
pub fn remove<N: Node>(arena: &mut [N], root: Option<u32>, node: u32) -> Option<u32> {
    let l = left_of(arena, node);
    let r = right_of(arena, node);

    if l.is_some() && r.is_some() {
        let succ = next(arena, node).expect("right subtree is non-empty");
        let root = swap_nodes(arena, root, node, succ);
        return remove(arena, root, node);
    }

    let new_root = match parent_of(arena, node) {
        Some(p) => {
            let left_side = left_of(arena, p) == Some(node);
            transplant(arena, root, l.or(r), Some(p), left_side)
        }
        None if root == Some(node) => transplant(arena, root, l.or(r), None, false),
        None => root,
    };

    set_parent(arena, node, None);
    set_left(arena, node, None);
    set_right(arena, node, None);
    new_root
}
