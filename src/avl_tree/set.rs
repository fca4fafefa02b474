use crate::avl_tree::cursor::Cursor;
use crate::avl_tree::iter::{AvlSetIntoIter, AvlSetIter};
use crate::avl_tree::tree::{self, Insertion};
use crate::error::Result;
use crate::export::{self, TexOptions};
use crate::ordered_set::{InsertResult, OrderedSet, RemoveResult};
use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::iter::FromIterator;
use std::marker::PhantomData;
use std::path::Path;

/// An ordered set implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Consequently the height of a
/// set with `n` elements never exceeds `2 * log2(n + 1) - 1`, and insertion, removal, and lookup
/// all run in logarithmic time.
///
/// Cloning a set copies every node. Moving a set, for instance with `std::mem::take`, transfers
/// the whole tree and leaves an empty set behind.
///
/// # Examples
///
/// ```
/// use avl_collections::avl_tree::AvlSet;
/// use avl_collections::{InsertResult, RemoveResult};
///
/// let mut set = AvlSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.insert(3), InsertResult::Duplicate);
///
/// assert_eq!(set.min(), Some(&0));
/// assert_eq!(set.ceil(&2), Some(&3));
///
/// assert_eq!(set.remove(&0), RemoveResult::Removed);
/// assert_eq!(set.remove(&1), RemoveResult::NotFound);
/// ```
#[derive(Clone)]
pub struct AvlSet<T> {
    root: tree::Tree<T>,
    len: usize,
}

impl<T> AvlSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `AvlSet<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// ```
    pub fn new() -> Self {
        AvlSet {
            root: None,
            len: 0,
        }
    }

    /// Constructs a set containing a single value.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let set = AvlSet::from_value(1);
    /// assert_eq!(set.len(), 1);
    /// assert_eq!(set.height(), 1);
    /// ```
    pub fn from_value(value: T) -> Self {
        let mut set = Self::new();
        set.insert(value);
        set
    }

    /// Inserts a value into the set. If an equal value already exists in the set, the set is
    /// left unchanged and `InsertResult::Duplicate` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    /// use avl_collections::InsertResult;
    ///
    /// let mut set = AvlSet::new();
    /// assert_eq!(set.insert(1), InsertResult::Inserted);
    /// assert!(set.contains(&1));
    /// assert_eq!(set.insert(1), InsertResult::Duplicate);
    /// ```
    pub fn insert(&mut self, value: T) -> InsertResult {
        match tree::insert(&mut self.root, value) {
            Insertion::Duplicate => InsertResult::Duplicate,
            Insertion::Grown | Insertion::Settled => {
                self.len += 1;
                InsertResult::Inserted
            },
        }
    }

    /// Removes a value from the set. Returns `RemoveResult::NotFound`, leaving the set unchanged,
    /// if the value does not exist in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    /// use avl_collections::RemoveResult;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.remove(&1), RemoveResult::Removed);
    /// assert_eq!(set.remove(&1), RemoveResult::NotFound);
    /// ```
    pub fn remove(&mut self, value: &T) -> RemoveResult {
        match self.take(value) {
            Some(_) => RemoveResult::Removed,
            None => RemoveResult::NotFound,
        }
    }

    /// Removes a value from the set and returns the value that was stored. Returns `None` if the
    /// value does not exist in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.take(&1), Some(1));
    /// assert_eq!(set.take(&1), None);
    /// ```
    pub fn take(&mut self, value: &T) -> Option<T> {
        let ret = tree::remove(&mut self.root, value);
        if ret.is_some() {
            self.len -= 1;
        }
        ret
    }

    /// Checks if a value exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        self.get(value).is_some()
    }

    /// Returns a reference to the value in the set that is equal to a particular value. Returns
    /// `None` if such a value does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.get(&1), Some(&1));
    /// assert_eq!(set.get(&2), None);
    /// ```
    pub fn get(&self, value: &T) -> Option<&T> {
        tree::get(&self.root, value)
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the height of the underlying tree. An empty set has height 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = (0..7).collect();
    /// assert_eq!(set.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        tree::height(&self.root)
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Returns a value in the set that is less than or equal to a particular value. Returns
    /// `None` if such a value does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.floor(&0), None);
    /// assert_eq!(set.floor(&2), Some(&1));
    /// ```
    pub fn floor(&self, value: &T) -> Option<&T> {
        tree::floor(&self.root, value)
    }

    /// Returns a value in the set that is greater than or equal to a particular value. Returns
    /// `None` if such a value does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.ceil(&0), Some(&1));
    /// assert_eq!(set.ceil(&2), None);
    /// ```
    pub fn ceil(&self, value: &T) -> Option<&T> {
        tree::ceil(&self.root, value)
    }

    /// Returns the minimum value of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.root)
    }

    /// Returns the maximum value of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.root)
    }

    /// Returns an iterator over the set. The iterator will yield values using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AvlSetIter<'_, T> {
        AvlSetIter::new(&self.root, self.len)
    }

    /// Returns a cursor positioned at the root of the underlying tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    /// use avl_collections::NodeProxy;
    ///
    /// let set: AvlSet<u32> = (1..4).collect();
    /// let cursor = set.cursor();
    /// assert_eq!(cursor.value(), Some(&2));
    /// assert_eq!(cursor.left().value(), Some(&1));
    /// ```
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(&self.root)
    }

    /// Writes a LaTeX drawing of the underlying tree to the file at `path`.
    pub fn export_to_tex<P>(&self, path: P, options: &TexOptions) -> Result<()>
    where
        T: fmt::Display,
        P: AsRef<Path>,
    {
        export::write_file(&self.cursor(), path, options)
    }
}

impl<T> OrderedSet<T> for AvlSet<T>
where
    T: Ord,
{
    fn insert(&mut self, value: T) -> InsertResult {
        AvlSet::insert(self, value)
    }

    fn remove(&mut self, value: &T) -> RemoveResult {
        AvlSet::remove(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        AvlSet::contains(self, value)
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl<T> IntoIterator for AvlSet<T>
where
    T: Ord,
{
    type Item = T;
    type IntoIter = AvlSetIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        AvlSetIntoIter::new(self.root, self.len)
    }
}

impl<'a, T> IntoIterator for &'a AvlSet<T>
where
    T: 'a + Ord,
{
    type Item = &'a T;
    type IntoIter = AvlSetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for AvlSet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = AvlSet::new();
        set.extend(iter);
        set
    }
}

impl<T> Extend<T> for AvlSet<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> Default for AvlSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PartialEq for AvlSet<T>
where
    T: Ord,
{
    fn eq(&self, other: &AvlSet<T>) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> Eq for AvlSet<T> where T: Ord {}

impl<T> fmt::Debug for AvlSet<T>
where
    T: Ord + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Serialize for AvlSet<T>
where
    T: Ord + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T> Deserialize<'de> for AvlSet<T>
where
    T: Ord + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AvlSetVisitor<T> {
            marker: PhantomData<T>,
        }

        impl<'de, T> Visitor<'de> for AvlSetVisitor<T>
        where
            T: Ord + Deserialize<'de>,
        {
            type Value = AvlSet<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a sequence of values")
            }

            fn visit_seq<A>(self, mut seq: A) -> ::std::result::Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut set = AvlSet::new();
                while let Some(value) = seq.next_element()? {
                    set.insert(value);
                }
                Ok(set)
            }
        }

        deserializer.deserialize_seq(AvlSetVisitor { marker: PhantomData })
    }
}

#[cfg(test)]
mod tests {
    use super::AvlSet;
    use crate::ordered_set::{InsertResult, OrderedSet, RemoveResult};
    use serde_test::{assert_de_tokens, assert_tokens, Token};
    use std::mem;

    #[test]
    fn test_len_empty() {
        let set: AvlSet<u32> = AvlSet::new();
        assert_eq!(set.len(), 0);
        assert_eq!(set.height(), 0);
    }

    #[test]
    fn test_is_empty() {
        let set: AvlSet<u32> = AvlSet::new();
        assert!(set.is_empty());
    }

    #[test]
    fn test_min_max_empty() {
        let set: AvlSet<u32> = AvlSet::new();
        assert_eq!(set.min(), None);
        assert_eq!(set.max(), None);
    }

    #[test]
    fn test_insert() {
        let mut set = AvlSet::new();
        assert_eq!(set.insert(1), InsertResult::Inserted);
        assert!(set.contains(&1));
    }

    #[test]
    fn test_insert_duplicate() {
        let mut set = AvlSet::new();
        assert_eq!(set.insert(1), InsertResult::Inserted);
        assert_eq!(set.insert(1), InsertResult::Duplicate);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut set = AvlSet::new();
        set.insert(1);
        assert_eq!(set.remove(&1), RemoveResult::Removed);
        assert!(!set.contains(&1));
        assert!(set.is_empty());
    }

    #[test]
    fn test_remove_not_found() {
        let mut set: AvlSet<u32> = (0..10).collect();
        assert_eq!(set.remove(&10), RemoveResult::NotFound);
        assert_eq!(set.len(), 10);
    }

    #[test]
    fn test_contains_scenario() {
        let set: AvlSet<u32> = vec![5, 3, 8, 1, 4, 7, 9].into_iter().collect();
        assert!(set.contains(&4));
        assert!(!set.contains(&2));
    }

    #[test]
    fn test_min_max() {
        let mut set = AvlSet::new();
        set.insert(1);
        set.insert(3);
        set.insert(5);

        assert_eq!(set.min(), Some(&1));
        assert_eq!(set.max(), Some(&5));
    }

    #[test]
    fn test_floor_ceil() {
        let mut set = AvlSet::new();
        set.insert(1);
        set.insert(3);
        set.insert(5);

        assert_eq!(set.floor(&0), None);
        assert_eq!(set.floor(&2), Some(&1));
        assert_eq!(set.floor(&4), Some(&3));
        assert_eq!(set.floor(&6), Some(&5));

        assert_eq!(set.ceil(&0), Some(&1));
        assert_eq!(set.ceil(&2), Some(&3));
        assert_eq!(set.ceil(&4), Some(&5));
        assert_eq!(set.ceil(&6), None);
    }

    #[test]
    fn test_into_iter() {
        let mut set = AvlSet::new();
        set.insert(1);
        set.insert(5);
        set.insert(3);

        assert_eq!(set.into_iter().collect::<Vec<u32>>(), vec![1, 3, 5]);
    }

    #[test]
    fn test_iter() {
        let mut set = AvlSet::new();
        set.insert(1);
        set.insert(5);
        set.insert(3);

        assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&1, &3, &5]);
        // a fresh iterator starts over
        assert_eq!(set.iter().next(), Some(&1));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut set: AvlSet<u32> = (0..16).collect();
        let copy = set.clone();
        set.remove(&3);
        set.insert(100);

        assert!(copy.contains(&3));
        assert!(!copy.contains(&100));
        assert_eq!(copy.len(), 16);
        assert_eq!(copy.height(), 5);
    }

    #[test]
    fn test_move_leaves_empty() {
        let mut set: AvlSet<u32> = (0..16).collect();
        let moved = mem::take(&mut set);

        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(moved.len(), 16);
        assert!(moved.contains(&15));
    }

    #[test]
    fn test_eq_ignores_shape() {
        let ascending: AvlSet<u32> = (0..10).collect();
        let descending: AvlSet<u32> = (0..10).rev().collect();
        assert_eq!(ascending, descending);

        let shorter: AvlSet<u32> = (0..9).collect();
        assert_ne!(ascending, shorter);
    }

    #[test]
    fn test_debug() {
        let set: AvlSet<u32> = vec![2, 1, 3].into_iter().collect();
        assert_eq!(format!("{:?}", set), "{1, 2, 3}");
    }

    #[test]
    fn test_ordered_set_trait() {
        let mut set = AvlSet::new();
        assert_eq!(OrderedSet::insert(&mut set, 1), InsertResult::Inserted);
        assert!(OrderedSet::contains(&set, &1));
        assert_eq!(OrderedSet::remove(&mut set, &1), RemoveResult::Removed);
        assert!(OrderedSet::is_empty(&set));
    }

    #[test]
    fn test_serde() {
        let set: AvlSet<u32> = vec![3, 1, 2].into_iter().collect();
        assert_tokens(
            &set,
            &[
                Token::Seq { len: Some(3) },
                Token::U32(1),
                Token::U32(2),
                Token::U32(3),
                Token::SeqEnd,
            ],
        );
    }

    #[test]
    fn test_deserialize_collapses_duplicates() {
        let set: AvlSet<u32> = vec![1, 2].into_iter().collect();
        assert_de_tokens(
            &set,
            &[
                Token::Seq { len: Some(3) },
                Token::U32(2),
                Token::U32(1),
                Token::U32(2),
                Token::SeqEnd,
            ],
        );
    }
}
