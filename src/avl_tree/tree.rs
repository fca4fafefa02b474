use crate::avl_tree::node::Node;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

/// Outcome of inserting into a subtree, reported to the parent frame.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Insertion {
    /// The subtree gained a level; the parent must recompute and check balance.
    Grown,
    /// The subtree kept its height, either naturally or because it was rotated back to it.
    Settled,
    Duplicate,
}

pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.height,
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// Recomputes the height of the root of `tree` and rotates it if either side is two levels
// taller than the other. Returns whether a rotation happened.
fn balance<T>(tree: &mut Tree<T>) -> bool {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return false,
    };

    node.update();
    let factor = node.balance();
    debug_assert!(factor.abs() <= 2, "balance factor {} is out of range", factor);

    let rotated = if factor < -1 {
        if let Some(child) = node.left.take() {
            if child.balance() > 0 {
                trace!("left-right rotation at height {}", node.height);
                node.left = Some(rotate_left(child));
            } else {
                node.left = Some(child);
            }
        }
        node = rotate_right(node);
        true
    } else if factor > 1 {
        if let Some(child) = node.right.take() {
            if child.balance() < 0 {
                trace!("right-left rotation at height {}", node.height);
                node.right = Some(rotate_right(child));
            } else {
                node.right = Some(child);
            }
        }
        node = rotate_left(node);
        true
    } else {
        false
    };

    debug_assert!(node.balance().abs() <= 1);
    *tree = Some(node);
    rotated
}

// Detaches the minimum node of `tree`, rebalancing every node on the left spine as the recursion
// unwinds. The detached node keeps a stale height and no children.
fn detach_min<T>(tree: &mut Tree<T>) -> Option<Box<Node<T>>> {
    if let Some(node) = tree {
        if node.left.is_some() {
            let min = detach_min(&mut node.left);
            balance(tree);
            return min;
        }
    }

    match tree.take() {
        Some(mut node) => {
            *tree = node.right.take();
            Some(node)
        },
        None => None,
    }
}

// precondition: `tree` is not empty
fn remove_root<T>(tree: &mut Tree<T>) -> T {
    let mut node = match tree.take() {
        Some(node) => node,
        None => unreachable!(),
    };

    match (node.left.take(), node.right.take()) {
        (None, None) => {
            let Node { value, .. } = *node;
            value
        },
        (Some(child), None) | (None, Some(child)) => {
            let Node { value, height, left, right } = *child;
            node.left = left;
            node.right = right;
            node.height = height;
            let removed = mem::replace(&mut node.value, value);
            *tree = Some(node);
            removed
        },
        (Some(left), Some(right)) => {
            let mut right = Some(right);
            let mut successor = match detach_min(&mut right) {
                Some(successor) => successor,
                None => unreachable!(),
            };
            trace!("replacing inner node with its in-order successor");
            successor.left = Some(left);
            successor.right = right;
            *tree = Some(successor);
            let Node { value, .. } = *node;
            value
        },
    }
}

pub fn insert<T>(tree: &mut Tree<T>, value: T) -> Insertion
where
    T: Ord,
{
    match tree {
        Some(node) => {
            let ret = match value.cmp(&node.value) {
                Ordering::Less => insert(&mut node.left, value),
                Ordering::Greater => insert(&mut node.right, value),
                Ordering::Equal => Insertion::Duplicate,
            };
            if ret != Insertion::Grown {
                return ret;
            }

            let old_height = node.height;
            if balance(tree) || height(tree) == old_height {
                Insertion::Settled
            } else {
                Insertion::Grown
            }
        },
        None => {
            *tree = Some(Box::new(Node::new(value)));
            Insertion::Grown
        },
    }
}

pub fn remove<T>(tree: &mut Tree<T>, value: &T) -> Option<T>
where
    T: Ord,
{
    let ret = match tree {
        Some(node) => match value.cmp(&node.value) {
            Ordering::Less => remove(&mut node.left, value)?,
            Ordering::Greater => remove(&mut node.right, value)?,
            Ordering::Equal => remove_root(tree),
        },
        None => return None,
    };

    balance(tree);
    Some(ret)
}

pub fn get<'a, T>(tree: &'a Tree<T>, value: &T) -> Option<&'a T>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| {
        match value.cmp(&node.value) {
            Ordering::Less => get(&node.left, value),
            Ordering::Greater => get(&node.right, value),
            Ordering::Equal => Some(&node.value),
        }
    })
}

pub fn ceil<'a, T>(tree: &'a Tree<T>, value: &T) -> Option<&'a T>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| {
        match value.cmp(&node.value) {
            Ordering::Greater => ceil(&node.right, value),
            Ordering::Less => {
                match ceil(&node.left, value) {
                    None => Some(&node.value),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.value),
        }
    })
}

pub fn floor<'a, T>(tree: &'a Tree<T>, value: &T) -> Option<&'a T>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| {
        match value.cmp(&node.value) {
            Ordering::Less => floor(&node.left, value),
            Ordering::Greater => {
                match floor(&node.right, value) {
                    None => Some(&node.value),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.value),
        }
    })
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.value
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.value
    })
}
