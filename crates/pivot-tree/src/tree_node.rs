use crate::types::{Node, ValueNode};

/// The built-in arena node: one value plus parent / left / right links.
#[derive(Clone, Debug)]
pub struct TreeNode<T> {
    pub parent: Option<u32>,
    pub left: Option<u32>,
    pub right: Option<u32>,
    pub value: T,
}

impl<T> TreeNode<T> {
    pub fn new(value: T) -> Self {
        Self {
            parent: None,
            left: None,
            right: None,
            value,
        }
    }
}

impl<T> Node for TreeNode<T> {
    fn parent(&self) -> Option<u32> {
        self.parent
    }

    fn left(&self) -> Option<u32> {
        self.left
    }

    fn right(&self) -> Option<u32> {
        self.right
    }

    fn set_parent(&mut self, v: Option<u32>) {
        self.parent = v;
    }

    fn set_left(&mut self, v: Option<u32>) {
        self.left = v;
    }

    fn set_right(&mut self, v: Option<u32>) {
        self.right = v;
    }
}

impl<T> ValueNode<T> for TreeNode<T> {
    fn value(&self) -> &T {
        &self.value
    }
}
