use crate::types::Node;

use super::{is_left_child, left_of, parent_of, right_of, set_left, set_parent, set_right};

/// Exchanges the positions of two nodes, moving their subtrees with their
/// slots. Values stay on their nodes, so the ordering invariant is the
/// caller's responsibility; removal only swaps order-compatible positions.
///
/// All six links and both parent-slot sides are read before any write, so
/// adjacent pairs (one node the direct parent of the other) and sibling
/// pairs come out right. Swapping a node with itself is a no-op.
///
/// Returns the new root.
pub fn swap_nodes<N: Node>(arena: &mut [N], root: Option<u32>, a: u32, b: u32) -> Option<u32> {
    if a == b {
        return root;
    }

    // Normalize so that in the adjacent case `n1` is the parent.
    let (n1, n2) = if parent_of(arena, a) == Some(b) {
        (b, a)
    } else {
        (a, b)
    };

    let p1 = parent_of(arena, n1);
    let l1 = left_of(arena, n1);
    let r1 = right_of(arena, n1);
    let p2 = parent_of(arena, n2);
    let l2 = left_of(arena, n2);
    let r2 = right_of(arena, n2);
    let n1_was_left = is_left_child(arena, n1);
    let n2_was_left = is_left_child(arena, n2);

    if p2 == Some(n1) {
        // Adjacent: `n2` takes over `n1`'s position and adopts `n1` as its
        // child on the side `n2` itself came from. A generic link exchange
        // would leave one of them pointing at itself.
        if n2_was_left {
            set_left(arena, n2, Some(n1));
            set_left(arena, n1, l2);
            set_right(arena, n2, r1);
            set_right(arena, n1, r2);
        } else {
            set_right(arena, n2, Some(n1));
            set_right(arena, n1, r2);
            set_left(arena, n2, l1);
            set_left(arena, n1, l2);
        }
        set_parent(arena, n1, Some(n2));
        set_parent(arena, n2, p1);
        if let Some(p) = p1 {
            if n1_was_left {
                set_left(arena, p, Some(n2));
            } else {
                set_right(arena, p, Some(n2));
            }
        }
    } else {
        // Disjoint: exchange child links and parent slots wholesale.
        set_left(arena, n1, l2);
        set_left(arena, n2, l1);
        set_right(arena, n1, r2);
        set_right(arena, n2, r1);
        set_parent(arena, n1, p2);
        set_parent(arena, n2, p1);
        if let Some(p) = p1 {
            if n1_was_left {
                set_left(arena, p, Some(n2));
            } else {
                set_right(arena, p, Some(n2));
            }
        }
        if let Some(p) = p2 {
            if n2_was_left {
                set_left(arena, p, Some(n1));
            } else {
                set_right(arena, p, Some(n1));
            }
        }
    }

    // Children follow their relocated parents.
    if let Some(l) = left_of(arena, n1) {
        set_parent(arena, l, Some(n1));
    }
    if let Some(r) = right_of(arena, n1) {
        set_parent(arena, r, Some(n1));
    }
    if let Some(l) = left_of(arena, n2) {
        set_parent(arena, l, Some(n2));
    }
    if let Some(r) = right_of(arena, n2) {
        set_parent(arena, r, Some(n2));
    }

    if root == Some(n1) {
        Some(n2)
    } else if root == Some(n2) {
        Some(n1)
    } else {
        root
    }
}
