use crate::avl_tree::node::Node;
use crate::avl_tree::tree::Tree;

/// Read-only, directional access to the shape of a binary tree.
///
/// A proxy points at a subtree, which may be empty. Stepping from an empty subtree yields another
/// empty subtree, so walks never have to special-case the edges of the tree.
pub trait NodeProxy: Sized {
    type Value;

    /// Returns a proxy for the left subtree.
    fn left(&self) -> Self;

    /// Returns a proxy for the right subtree.
    fn right(&self) -> Self;

    /// Returns the value at the root of the subtree, or `None` if the subtree is empty.
    fn value(&self) -> Option<&Self::Value>;

    /// Returns the cached height of the subtree. An empty subtree has height 0.
    fn height(&self) -> usize;

    /// Returns `true` if the subtree is not empty.
    fn is_valid(&self) -> bool;
}

/// A cursor over the nodes of an `AvlSet<T>`.
///
/// # Examples
///
/// ```
/// use avl_collections::avl_tree::AvlSet;
/// use avl_collections::NodeProxy;
///
/// let mut set = AvlSet::new();
/// set.insert(2);
/// set.insert(1);
/// set.insert(3);
///
/// let root = set.cursor();
/// assert_eq!(root.value(), Some(&2));
/// assert_eq!(root.height(), 2);
/// assert_eq!(root.left().value(), Some(&1));
/// assert_eq!(root.right().value(), Some(&3));
/// assert!(!root.left().left().is_valid());
/// ```
pub struct Cursor<'a, T>
where
    T: 'a,
{
    node: Option<&'a Node<T>>,
}

impl<'a, T> Cursor<'a, T>
where
    T: 'a,
{
    pub(crate) fn new(tree: &'a Tree<T>) -> Self {
        Cursor {
            node: tree.as_ref().map(|node| &**node),
        }
    }

    fn step(&self, select: fn(&'a Node<T>) -> &'a Tree<T>) -> Self {
        Cursor {
            node: self.node.and_then(|node| select(node).as_ref().map(|child| &**child)),
        }
    }

    /// Returns the value at the cursor with the lifetime of the underlying set.
    pub fn get(&self) -> Option<&'a T> {
        self.node.map(|node| &node.value)
    }
}

impl<'a, T> NodeProxy for Cursor<'a, T>
where
    T: 'a,
{
    type Value = T;

    fn left(&self) -> Self {
        self.step(|node| &node.left)
    }

    fn right(&self) -> Self {
        self.step(|node| &node.right)
    }

    fn value(&self) -> Option<&T> {
        self.get()
    }

    fn height(&self) -> usize {
        self.node.map_or(0, |node| node.height)
    }

    fn is_valid(&self) -> bool {
        self.node.is_some()
    }
}

impl<'a, T> Clone for Cursor<'a, T>
where
    T: 'a,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Cursor<'a, T> where T: 'a {}
