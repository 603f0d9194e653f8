use crate::types::Node;

use super::{set_left, set_parent, set_right};

/// Splices `node` into the `left_side` child slot of `target_parent`.
///
/// With no `target_parent`, `node` becomes the new root and its parent link
/// is cleared. Otherwise the indicated slot of `target_parent` is set to
/// `node` and, when `node` is present, its parent link is pointed at
/// `target_parent`.
///
/// The previous occupant of the slot is not detached and `node` is not
/// removed from its old position; callers sequence transplants so that no
/// slot is left inconsistent. Rotation and the single- and no-child removal
/// cases are built from this primitive alone.
///
/// Returns the new root.
pub fn transplant<N: Node>(
    arena: &mut [N],
    root: Option<u32>,
    node: Option<u32>,
    target_parent: Option<u32>,
    left_side: bool,
) -> Option<u32> {
    let Some(parent) = target_parent else {
        if let Some(node) = node {
            set_parent(arena, node, None);
        }
        return node;
    };
    if left_side {
        set_left(arena, parent, node);
    } else {
        set_right(arena, parent, node);
    }
    if let Some(node) = node {
        set_parent(arena, node, Some(parent));
    }
    root
}
