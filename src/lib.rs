//! An AVL-balanced ordered set, with the tools used to inspect and evaluate it.
//!
//! * `avl_tree::AvlSet` is the set itself: insertion, removal, and lookup in logarithmic time,
//!   in-order iteration, and a read-only `Cursor` for walking the shape of the tree.
//! * `skiplist::SkipSet` offers the same contract through probabilistic leveling and exists to
//!   be compared against the tree.
//! * `export` draws any `NodeProxy` walk as a `tikz-qtree` diagram.

#[macro_use]
extern crate log;
extern crate rand;
extern crate serde;

pub mod avl_tree;
mod error;
pub mod export;
mod ordered_set;
pub mod skiplist;

pub use crate::avl_tree::NodeProxy;
pub use crate::error::{Error, Result};
pub use crate::ordered_set::{InsertResult, OrderedSet, RemoveResult};
