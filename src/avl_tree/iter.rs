use crate::avl_tree::node::Node;
use crate::avl_tree::tree::Tree;
use crate::error::{Error, Result};
use std::iter::FusedIterator;

/// An iterator for `AvlSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references. The
/// top of its stack is always the next value to yield, so the iterator can be dereferenced with
/// `current` without advancing it.
pub struct AvlSetIter<'a, T>
where
    T: 'a,
{
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> AvlSetIter<'a, T>
where
    T: 'a,
{
    pub(crate) fn new(tree: &'a Tree<T>, len: usize) -> Self {
        let mut iter = AvlSetIter {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(tree);
        iter
    }

    fn push_left_spine(&mut self, mut tree: &'a Tree<T>) {
        while let Some(ref node) = *tree {
            self.stack.push(&**node);
            tree = &node.left;
        }
    }

    /// Returns `true` if the iterator has not yielded every value yet.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    ///
    /// let mut iterator = set.iter();
    /// assert!(iterator.is_valid());
    /// iterator.next();
    /// assert!(!iterator.is_valid());
    /// ```
    pub fn is_valid(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Returns the value the iterator will yield next, without advancing it. Returns
    /// `Error::EndOfSequence` if the iterator is exhausted.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    /// use avl_collections::Error;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.current().ok(), Some(&1));
    /// iterator.next();
    /// match iterator.current() {
    ///     Err(Error::EndOfSequence) => {},
    ///     _ => panic!("expected the end of the sequence"),
    /// }
    /// ```
    pub fn current(&self) -> Result<&'a T> {
        self.stack
            .last()
            .copied()
            .map(|node| &node.value)
            .ok_or(Error::EndOfSequence)
    }
}

impl<'a, T> Iterator for AvlSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for AvlSetIter<'a, T> where T: 'a {}

impl<'a, T> FusedIterator for AvlSetIter<'a, T> where T: 'a {}

/// An owning iterator for `AvlSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields owned values.
pub struct AvlSetIntoIter<T> {
    current: Tree<T>,
    stack: Vec<Node<T>>,
    remaining: usize,
}

impl<T> AvlSetIntoIter<T> {
    pub(crate) fn new(tree: Tree<T>, len: usize) -> Self {
        AvlSetIntoIter {
            current: tree,
            stack: Vec::new(),
            remaining: len,
        }
    }
}

impl<T> Iterator for AvlSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { value, right, .. } = node;
            self.current = right;
            self.remaining -= 1;
            value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for AvlSetIntoIter<T> {}

impl<T> FusedIterator for AvlSetIntoIter<T> {}
