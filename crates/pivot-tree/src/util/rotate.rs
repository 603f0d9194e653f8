use thiserror::Error;

use crate::types::Node;

use super::transplant::transplant;
use super::{is_left_child, left_of, parent_of, right_of};

/// Rejected rotation requests. The tree is never modified on these paths.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RotateError {
    #[error("left rotation requires a right child")]
    MissingRightChild,
    #[error("right rotation requires a left child")]
    MissingLeftChild,
    #[error("pivot rotation cannot lift the root")]
    PivotIsRoot,
}

/// Rotates left around `node`, promoting its right child into its position.
///
/// Three transplants: the pivot's left subtree moves into `node`'s right
/// slot, `node` moves under the pivot's left slot, and the pivot moves into
/// `node`'s former slot (or becomes root). The in-order sequence is
/// unchanged; only the shape moves.
///
/// Returns the new root.
pub fn rotate_left<N: Node>(
    arena: &mut [N],
    root: Option<u32>,
    node: u32,
) -> Result<Option<u32>, RotateError> {
    let Some(pivot) = right_of(arena, node) else {
        return Err(RotateError::MissingRightChild);
    };
    let parent = parent_of(arena, node);
    let was_left = is_left_child(arena, node);
    let root = transplant(arena, root, left_of(arena, pivot), Some(node), false);
    let root = transplant(arena, root, Some(node), Some(pivot), true);
    Ok(transplant(arena, root, Some(pivot), parent, was_left))
}

/// Rotates right around `node`, promoting its left child into its position.
///
/// Mirror image of [`rotate_left`].
pub fn rotate_right<N: Node>(
    arena: &mut [N],
    root: Option<u32>,
    node: u32,
) -> Result<Option<u32>, RotateError> {
    let Some(pivot) = left_of(arena, node) else {
        return Err(RotateError::MissingLeftChild);
    };
    let parent = parent_of(arena, node);
    let was_left = is_left_child(arena, node);
    let root = transplant(arena, root, right_of(arena, pivot), Some(node), true);
    let root = transplant(arena, root, Some(node), Some(pivot), false);
    Ok(transplant(arena, root, Some(pivot), parent, was_left))
}

/// Rotates around `pivot`'s parent in the direction that lifts `pivot` one
/// level: a left child is lifted by `rotate_right`, a right child by
/// `rotate_left`. The root has nothing to be lifted above.
pub fn rotate_pivot<N: Node>(
    arena: &mut [N],
    root: Option<u32>,
    pivot: u32,
) -> Result<Option<u32>, RotateError> {
    let Some(parent) = parent_of(arena, pivot) else {
        return Err(RotateError::PivotIsRoot);
    };
    if is_left_child(arena, pivot) {
        rotate_right(arena, root, parent)
    } else {
        rotate_left(arena, root, parent)
    }
}
