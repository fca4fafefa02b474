use crate::ordered_set::{InsertResult, OrderedSet, RemoveResult};
use rand::{Rng, SeedableRng, XorShiftRng};
use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};
use std::cmp::{self, Ordering};
use std::fmt;
use std::iter::FromIterator;
use std::marker::PhantomData;
use std::mem;

/// Number of levels used by `SkipSet::new`.
pub const DEFAULT_MAX_LEVEL: usize = 12;

// `None` refers to the end of a level when used as a successor, and to the head when used as a
// predecessor.
type Link = Option<usize>;

#[derive(Clone)]
struct Node<T> {
    value: T,
    links: Vec<Link>,
}

#[derive(Clone)]
enum Block<T> {
    Occupied(Node<T>),
    Vacant(Option<usize>),
}

/// An ordered set implemented by a skiplist.
///
/// A skiplist is a probabilistic data structure that allows for binary search tree operations by
/// maintaining a linked hierarchy of subsequences. The first subsequence is a sorted linked list
/// of all the elements that it contains. Each successive subsequence contains approximately half
/// the elements of the previous subsequence, so searching, insertion, and deletion can skip over
/// most elements and run in expected logarithmic time.
///
/// Nodes live in a vector of blocks and link to each other by index; removed blocks are threaded
/// onto a free list and reused by later insertions.
///
/// # Examples
///
/// ```
/// use avl_collections::skiplist::SkipSet;
/// use avl_collections::{InsertResult, RemoveResult};
///
/// let mut set = SkipSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.insert(3), InsertResult::Duplicate);
/// assert_eq!(set.get(&3), Some(&3));
///
/// assert_eq!(set.remove(&0), RemoveResult::Removed);
/// assert_eq!(set.remove(&1), RemoveResult::NotFound);
/// ```
#[derive(Clone)]
pub struct SkipSet<T> {
    head: Vec<Link>,
    blocks: Vec<Block<T>>,
    free_head: Option<usize>,
    level: usize,
    len: usize,
    rng: XorShiftRng,
}

impl<T> SkipSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `SkipSet<T>` with `DEFAULT_MAX_LEVEL` levels.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::skiplist::SkipSet;
    ///
    /// let set: SkipSet<u32> = SkipSet::new();
    /// ```
    pub fn new() -> Self {
        Self::with_max_level(DEFAULT_MAX_LEVEL)
    }

    /// Constructs a new, empty `SkipSet<T>` whose nodes span at most `max_level` levels.
    ///
    /// # Panics
    ///
    /// Panics if `max_level` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::skiplist::SkipSet;
    ///
    /// let set: SkipSet<u32> = SkipSet::with_max_level(6);
    /// assert_eq!(set.max_level(), 6);
    /// ```
    pub fn with_max_level(max_level: usize) -> Self {
        Self::with_rng(max_level, XorShiftRng::new_unseeded())
    }

    /// Constructs a new, empty `SkipSet<T>` whose levels are drawn from a generator seeded with
    /// `seed`.
    ///
    /// # Panics
    ///
    /// Panics if `max_level` is zero or if `seed` is all zeroes.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::skiplist::SkipSet;
    ///
    /// let set: SkipSet<u32> = SkipSet::with_seed(8, [1, 2, 3, 4]);
    /// assert!(set.is_empty());
    /// ```
    pub fn with_seed(max_level: usize, seed: [u32; 4]) -> Self {
        Self::with_rng(max_level, XorShiftRng::from_seed(seed))
    }

    fn with_rng(max_level: usize, rng: XorShiftRng) -> Self {
        assert!(max_level > 0, "a skiplist needs at least one level");
        SkipSet {
            head: vec![None; max_level],
            blocks: Vec::new(),
            free_head: None,
            level: 1,
            len: 0,
            rng,
        }
    }

    fn gen_random_height(&mut self) -> usize {
        cmp::min(self.rng.next_u32().leading_zeros() as usize + 1, self.max_level())
    }

    fn node(&self, index: usize) -> &Node<T> {
        match self.blocks[index] {
            Block::Occupied(ref node) => node,
            Block::Vacant(_) => unreachable!(),
        }
    }

    fn node_mut(&mut self, index: usize) -> &mut Node<T> {
        match self.blocks[index] {
            Block::Occupied(ref mut node) => node,
            Block::Vacant(_) => unreachable!(),
        }
    }

    fn next(&self, prev: Link, level: usize) -> Link {
        match prev {
            Some(index) => self.node(index).links[level],
            None => self.head[level],
        }
    }

    fn set_next(&mut self, prev: Link, level: usize, link: Link) {
        match prev {
            Some(index) => self.node_mut(index).links[level] = link,
            None => self.head[level] = link,
        }
    }

    fn allocate(&mut self, node: Node<T>) -> usize {
        match self.free_head {
            Some(index) => {
                match mem::replace(&mut self.blocks[index], Block::Occupied(node)) {
                    Block::Vacant(next) => self.free_head = next,
                    Block::Occupied(_) => unreachable!(),
                }
                index
            },
            None => {
                self.blocks.push(Block::Occupied(node));
                self.blocks.len() - 1
            },
        }
    }

    fn free(&mut self, index: usize) -> T {
        let block = mem::replace(&mut self.blocks[index], Block::Vacant(self.free_head));
        self.free_head = Some(index);
        match block {
            Block::Occupied(node) => node.value,
            Block::Vacant(_) => unreachable!(),
        }
    }

    // For every level, the last node whose value is less than `value`.
    fn find_predecessors(&self, value: &T) -> Vec<Link> {
        let mut update = vec![None; self.max_level()];
        let mut curr = None;
        for level in (0..self.level).rev() {
            while let Some(next) = self.next(curr, level) {
                if self.node(next).value < *value {
                    curr = Some(next);
                } else {
                    break;
                }
            }
            update[level] = curr;
        }
        update
    }

    /// Inserts a value into the set. If an equal value already exists in the set, the set is
    /// left unchanged and `InsertResult::Duplicate` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::skiplist::SkipSet;
    /// use avl_collections::InsertResult;
    ///
    /// let mut set = SkipSet::new();
    /// assert_eq!(set.insert(1), InsertResult::Inserted);
    /// assert_eq!(set.insert(1), InsertResult::Duplicate);
    /// ```
    pub fn insert(&mut self, value: T) -> InsertResult {
        let update = self.find_predecessors(&value);
        if let Some(next) = self.next(update[0], 0) {
            if self.node(next).value == value {
                return InsertResult::Duplicate;
            }
        }

        let height = self.gen_random_height();
        if height > self.level {
            debug!("skiplist grew from {} to {} levels", self.level, height);
            self.level = height;
        }

        let links = (0..height).map(|level| self.next(update[level], level)).collect();
        let index = self.allocate(Node { value, links });
        for (level, prev) in update.into_iter().enumerate().take(height) {
            self.set_next(prev, level, Some(index));
        }

        self.len += 1;
        InsertResult::Inserted
    }

    /// Removes a value from the set. Returns `RemoveResult::NotFound`, leaving the set unchanged,
    /// if the value does not exist in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::skiplist::SkipSet;
    /// use avl_collections::RemoveResult;
    ///
    /// let mut set = SkipSet::new();
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
    /// use avl_collections::skiplist::SkipSet;
    ///
    /// let mut set = SkipSet::new();
    /// set.insert(1);
    /// assert_eq!(set.take(&1), Some(1));
    /// assert_eq!(set.take(&1), None);
    /// ```
    pub fn take(&mut self, value: &T) -> Option<T> {
        let update = self.find_predecessors(value);
        let target = match self.next(update[0], 0) {
            Some(index) if self.node(index).value == *value => index,
            _ => return None,
        };

        let height = self.node(target).links.len();
        for (level, prev) in update.into_iter().enumerate().take(height) {
            let next = self.node(target).links[level];
            self.set_next(prev, level, next);
        }

        while self.level > 1 && self.head[self.level - 1].is_none() {
            self.level -= 1;
        }

        self.len -= 1;
        Some(self.free(target))
    }

    /// Checks if a value exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::skiplist::SkipSet;
    ///
    /// let mut set = SkipSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        self.get(value).is_some()
    }

    /// Returns a reference to the value in the set that is equal to a particular value. Returns
    /// `None` if such a value does not exist.
    pub fn get(&self, value: &T) -> Option<&T> {
        let mut curr = None;
        for level in (0..self.level).rev() {
            while let Some(next) = self.next(curr, level) {
                let node = self.node(next);
                match node.value.cmp(value) {
                    Ordering::Less => curr = Some(next),
                    Ordering::Equal => return Some(&node.value),
                    Ordering::Greater => break,
                }
            }
        }
        None
    }

    /// Returns the minimum value of the set. Returns `None` if the set is empty.
    pub fn min(&self) -> Option<&T> {
        self.head[0].map(|index| &self.node(index).value)
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of levels currently linked from the head.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Returns the maximum number of levels a node can span.
    pub fn max_level(&self) -> usize {
        self.head.len()
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::skiplist::SkipSet;
    ///
    /// let mut set = SkipSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        for link in &mut self.head {
            *link = None;
        }
        self.blocks.clear();
        self.free_head = None;
        self.level = 1;
        self.len = 0;
    }

    /// Returns an iterator over the set. The iterator will yield values in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::skiplist::SkipSet;
    ///
    /// let mut set = SkipSet::new();
    /// set.insert(3);
    /// set.insert(1);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> SkipSetIter<'_, T> {
        SkipSetIter {
            set: self,
            current: self.head[0],
            remaining: self.len,
        }
    }
}

impl<T> OrderedSet<T> for SkipSet<T>
where
    T: Ord,
{
    fn insert(&mut self, value: T) -> InsertResult {
        SkipSet::insert(self, value)
    }

    fn remove(&mut self, value: &T) -> RemoveResult {
        SkipSet::remove(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        SkipSet::contains(self, value)
    }

    fn len(&self) -> usize {
        self.len
    }
}

/// An iterator for `SkipSet<T>`.
///
/// This iterator walks the bottom level of the skiplist and yields immutable references.
pub struct SkipSetIter<'a, T>
where
    T: 'a,
{
    set: &'a SkipSet<T>,
    current: Link,
    remaining: usize,
}

impl<'a, T> Iterator for SkipSetIter<'a, T>
where
    T: 'a + Ord,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let set = self.set;
        let node = set.node(self.current?);
        self.current = node.links[0];
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for SkipSetIter<'a, T> where T: 'a + Ord {}

impl<'a, T> IntoIterator for &'a SkipSet<T>
where
    T: 'a + Ord,
{
    type Item = &'a T;
    type IntoIter = SkipSetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for SkipSet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = SkipSet::new();
        set.extend(iter);
        set
    }
}

impl<T> Extend<T> for SkipSet<T>
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

impl<T> Default for SkipSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PartialEq for SkipSet<T>
where
    T: Ord,
{
    fn eq(&self, other: &SkipSet<T>) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> Eq for SkipSet<T> where T: Ord {}

impl<T> fmt::Debug for SkipSet<T>
where
    T: Ord + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Serialize for SkipSet<T>
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

impl<'de, T> Deserialize<'de> for SkipSet<T>
where
    T: Ord + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SkipSetVisitor<T> {
            marker: PhantomData<T>,
        }

        impl<'de, T> Visitor<'de> for SkipSetVisitor<T>
        where
            T: Ord + Deserialize<'de>,
        {
            type Value = SkipSet<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a sequence of values")
            }

            fn visit_seq<A>(self, mut seq: A) -> ::std::result::Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut set = SkipSet::new();
                while let Some(value) = seq.next_element()? {
                    set.insert(value);
                }
                Ok(set)
            }
        }

        deserializer.deserialize_seq(SkipSetVisitor { marker: PhantomData })
    }
}
