use std::cmp::Ordering;
use std::fmt::Debug;

use crate::tree_node::TreeNode;
use crate::util::{self, RotateError};

/// Unbalanced parent-linked binary search tree over unique `Ord` values.
///
/// Nodes live in a `Vec` arena owned by the tree and a node handle is its
/// `u32` arena index. Deleted nodes are detached but their slots are
/// retained, never reused, so outstanding handles stay in bounds until
/// [`clear`](Tree::clear) drops the arena. No operation rebalances;
/// rotations run only when the caller asks for them.
pub struct Tree<T> {
    pub root: Option<u32>,
    arena: Vec<TreeNode<T>>,
    len: usize,
}

impl<T> Tree<T> {
    pub fn new() -> Self {
        Self {
            root: None,
            arena: Vec::new(),
            len: 0,
        }
    }

    /// Number of nodes currently in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops all nodes, tombstones included, and resets the tree.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    /// Value stored on `node`.
    pub fn value(&self, node: u32) -> &T {
        &self.arena[node as usize].value
    }

    pub fn parent(&self, node: u32) -> Option<u32> {
        self.arena[node as usize].parent
    }

    pub fn left(&self, node: u32) -> Option<u32> {
        self.arena[node as usize].left
    }

    pub fn right(&self, node: u32) -> Option<u32> {
        self.arena[node as usize].right
    }

    /// True when `node` is the left child of its parent; false for the root.
    pub fn is_left_child(&self, node: u32) -> bool {
        util::is_left_child(&self.arena, node)
    }

    /// True when `node` is the right child of its parent; false for the root.
    pub fn is_right_child(&self, node: u32) -> bool {
        util::is_right_child(&self.arena, node)
    }

    /// The other child of `node`'s parent, if any.
    pub fn sibling(&self, node: u32) -> Option<u32> {
        util::sibling(&self.arena, node)
    }

    /// The sibling of `node`'s parent, if any.
    pub fn uncle(&self, node: u32) -> Option<u32> {
        util::uncle(&self.arena, node)
    }

    /// Node holding the smallest value, if any.
    pub fn first(&self) -> Option<u32> {
        util::first(&self.arena, self.root)
    }

    /// Node holding the largest value, if any.
    pub fn last(&self) -> Option<u32> {
        util::last(&self.arena, self.root)
    }

    /// In-order successor of `node`.
    pub fn successor(&self, node: u32) -> Option<u32> {
        util::next(&self.arena, node)
    }

    /// In-order predecessor of `node`.
    pub fn predecessor(&self, node: u32) -> Option<u32> {
        util::prev(&self.arena, node)
    }

    /// All nodes in ascending value order. The returned list is a snapshot
    /// of the structure at call time, not a live view.
    pub fn sorted_nodes(&self) -> Vec<u32> {
        let mut out = Vec::with_capacity(self.len);
        let mut curr = util::first(&self.arena, self.root);
        while let Some(i) = curr {
            out.push(i);
            curr = util::next(&self.arena, i);
        }
        out
    }

    /// All values in ascending order.
    pub fn sorted_list(&self) -> Vec<&T> {
        self.sorted_nodes()
            .into_iter()
            .map(|i| &self.arena[i as usize].value)
            .collect()
    }

    /// Depth of `node`; the root has depth 1.
    pub fn depth_of_node(&self, node: u32) -> usize {
        util::depth_of(&self.arena, node)
    }

    /// Maximum node depth; 0 for an empty tree.
    pub fn depth(&self) -> usize {
        util::depth(&self.arena, self.root)
    }

    /// Rotates left around `node`. See [`util::rotate_left`].
    pub fn rotate_left(&mut self, node: u32) -> Result<(), RotateError> {
        self.root = util::rotate_left(&mut self.arena, self.root, node)?;
        Ok(())
    }

    /// Rotates right around `node`. See [`util::rotate_right`].
    pub fn rotate_right(&mut self, node: u32) -> Result<(), RotateError> {
        self.root = util::rotate_right(&mut self.arena, self.root, node)?;
        Ok(())
    }

    /// Lifts `node` one level by rotating around its parent.
    pub fn rotate_pivot(&mut self, node: u32) -> Result<(), RotateError> {
        self.root = util::rotate_pivot(&mut self.arena, self.root, node)?;
        Ok(())
    }

    /// Removes `node` from the tree. A handle that is already detached is
    /// left alone.
    pub fn delete_node(&mut self, node: u32) {
        if self.root != Some(node) && self.arena[node as usize].parent.is_none() {
            return;
        }
        self.root = util::remove(&mut self.arena, self.root, node);
        if self.len > 0 {
            self.len -= 1;
        }
    }
}

impl<T: Ord> Tree<T> {
    /// Inserts `value`, returning the node that holds it.
    ///
    /// Inserting a value already present creates nothing and returns the
    /// existing node.
    pub fn insert(&mut self, value: T) -> u32 {
        let Some(root) = self.root else {
            self.arena.push(TreeNode::new(value));
            let idx = (self.arena.len() - 1) as u32;
            self.root = Some(idx);
            self.len = 1;
            return idx;
        };

        let mut curr = root;
        loop {
            match value.cmp(&self.arena[curr as usize].value) {
                Ordering::Equal => return curr,
                Ordering::Less => match self.arena[curr as usize].left {
                    Some(next) => curr = next,
                    None => {
                        self.arena.push(TreeNode::new(value));
                        let idx = (self.arena.len() - 1) as u32;
                        util::insert_left(&mut self.arena, idx, curr);
                        self.len += 1;
                        return idx;
                    }
                },
                Ordering::Greater => match self.arena[curr as usize].right {
                    Some(next) => curr = next,
                    None => {
                        self.arena.push(TreeNode::new(value));
                        let idx = (self.arena.len() - 1) as u32;
                        util::insert_right(&mut self.arena, idx, curr);
                        self.len += 1;
                        return idx;
                    }
                },
            }
        }
    }

    /// Finds the node holding `value`.
    pub fn find(&self, value: &T) -> Option<u32> {
        let mut curr = self.root;
        while let Some(i) = curr {
            curr = match value.cmp(&self.arena[i as usize].value) {
                Ordering::Equal => return Some(i),
                Ordering::Less => self.arena[i as usize].left,
                Ordering::Greater => self.arena[i as usize].right,
            };
        }
        None
    }

    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Removes the node holding `value`. Returns whether one was removed.
    pub fn delete(&mut self, value: &T) -> bool {
        let Some(node) = self.find(value) else {
            return false;
        };
        self.delete_node(node);
        true
    }

    /// Depth of the node holding `value`, or `None` when absent.
    pub fn depth_of(&self, value: &T) -> Option<usize> {
        self.find(value).map(|i| util::depth_of(&self.arena, i))
    }

    /// Validates the structural invariants, for tests and debugging.
    pub fn assert_search_tree(&self) -> Result<(), String> {
        util::assert_search_tree(&self.arena, self.root)
    }
}

impl<T: Debug> Tree<T> {
    /// Renders the tree as indented text, one node per line.
    pub fn print(&self) -> String {
        util::print(&self.arena, self.root, "")
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}
