//! Probabilistic linked hierarchy of subsequences.

mod set;

pub use self::set::{SkipSet, SkipSetIter, DEFAULT_MAX_LEVEL};
