#![allow(dead_code)]

use avl_collections::avl_tree::AvlSet;
use avl_collections::NodeProxy;
use std::cmp;

// Walks the tree through the proxy and checks the balance factor and cached height of every node.
pub fn is_avl<P: NodeProxy>(proxy: &P) -> bool {
    if !proxy.is_valid() {
        return proxy.height() == 0;
    }

    let left = proxy.left();
    let right = proxy.right();
    let (left_height, right_height) = (left.height(), right.height());

    (right_height as isize - left_height as isize).abs() < 2
        && proxy.height() == cmp::max(left_height, right_height) + 1
        && is_avl(&left)
        && is_avl(&right)
}

pub fn is_search_tree<P>(proxy: &P, lower: Option<&P::Value>, upper: Option<&P::Value>) -> bool
where
    P: NodeProxy,
    P::Value: Ord,
{
    let value = match proxy.value() {
        Some(value) => value,
        None => return true,
    };

    lower.map_or(true, |lower| lower < value)
        && upper.map_or(true, |upper| value < upper)
        && is_search_tree(&proxy.left(), lower, Some(value))
        && is_search_tree(&proxy.right(), Some(value), upper)
}

pub fn correct_height<T: Ord>(set: &AvlSet<T>) -> bool {
    if set.is_empty() {
        return set.height() == 0;
    }

    let len = set.len() as f64;
    let height = set.height() as f64;
    let lower_bound = len.log2();
    let upper_bound = 2.0 * (len + 1.0).log2() - 1.0;

    lower_bound <= height && height <= upper_bound
}

pub fn is_strictly_ascending<T: Ord>(set: &AvlSet<T>) -> bool {
    let values: Vec<&T> = set.iter().collect();
    values.len() == set.len() && values.windows(2).all(|pair| pair[0] < pair[1])
}

pub fn check_invariants<T: Ord>(set: &AvlSet<T>) {
    let root = set.cursor();
    assert!(is_avl(&root), "balance invariant violated");
    assert!(is_search_tree(&root, None, None), "order invariant violated");
    assert!(correct_height(set), "height {} out of bounds for {} nodes", set.height(), set.len());
}
