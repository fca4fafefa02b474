use crate::avl_tree::tree;
use std::cmp;

/// A struct representing an internal node of an avl tree.
///
/// Cloning a node deep-copies its subtrees and keeps every cached height as is.
#[derive(Clone)]
pub struct Node<T> {
    pub value: T,
    pub height: usize,
    pub left: tree::Tree<T>,
    pub right: tree::Tree<T>,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Node {
            value,
            height: 1,
            left: None,
            right: None,
        }
    }

    pub fn update(&mut self) {
        let Node { ref mut height, ref left, ref right, .. } = *self;
        *height = cmp::max(tree::height(left), tree::height(right)) + 1;
    }

    // positive when the right subtree is taller
    pub fn balance(&self) -> isize {
        (tree::height(&self.right) as isize) - (tree::height(&self.left) as isize)
    }
}
