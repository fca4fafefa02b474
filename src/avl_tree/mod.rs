//! Self-balancing binary search tree where the heights of the two child subtrees of any node
//! differ by at most one.

mod cursor;
mod iter;
mod node;
mod set;
mod tree;

pub use self::cursor::{Cursor, NodeProxy};
pub use self::iter::{AvlSetIntoIter, AvlSetIter};
pub use self::set::AvlSet;
