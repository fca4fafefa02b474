//! Contract shared by the ordered sets in this crate.

/// Outcome of inserting a value into an ordered set.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InsertResult {
    /// The value was absent and is now part of the set.
    Inserted,
    /// An equal value was already present; the set is unchanged.
    Duplicate,
}

impl InsertResult {
    pub fn is_inserted(self) -> bool {
        self == InsertResult::Inserted
    }
}

/// Outcome of removing a value from an ordered set.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RemoveResult {
    /// The value was present and has been dropped from the set.
    Removed,
    /// No equal value was present; the set is unchanged.
    NotFound,
}

impl RemoveResult {
    pub fn is_removed(self) -> bool {
        self == RemoveResult::Removed
    }
}

/// A set of unique, totally ordered values.
///
/// Implemented by both `AvlSet<T>` and `SkipSet<T>` so that they can be driven by the same
/// operation sequences and compared against each other.
///
/// # Examples
///
/// ```
/// use avl_collections::avl_tree::AvlSet;
/// use avl_collections::skiplist::SkipSet;
/// use avl_collections::{InsertResult, OrderedSet};
///
/// fn load<S: OrderedSet<u32>>(set: &mut S) {
///     for value in &[3, 1, 2, 3] {
///         set.insert(*value);
///     }
/// }
///
/// let mut avl = AvlSet::new();
/// let mut skip = SkipSet::new();
/// load(&mut avl);
/// load(&mut skip);
///
/// assert_eq!(OrderedSet::len(&avl), 3);
/// assert_eq!(OrderedSet::len(&skip), 3);
/// assert_eq!(OrderedSet::insert(&mut avl, 2), InsertResult::Duplicate);
/// ```
pub trait OrderedSet<T>
where
    T: Ord,
{
    fn insert(&mut self, value: T) -> InsertResult;

    fn remove(&mut self, value: &T) -> RemoveResult;

    fn contains(&self, value: &T) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
