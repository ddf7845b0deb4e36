use crate::avl_tree::node::Node;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> i32 {
    match tree {
        None => -1,
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

// precondition: node.left and node.left.right exist
fn rotate_left_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    let mut pivot = match child.right.take() {
        Some(pivot) => pivot,
        None => unreachable!(),
    };
    child.right = pivot.left.take();
    node.left = pivot.right.take();
    node.update();
    child.update();
    pivot.left = Some(child);
    pivot.right = Some(node);
    pivot.update();
    pivot
}

// precondition: node.right and node.right.left exist
fn rotate_right_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    let mut pivot = match child.left.take() {
        Some(pivot) => pivot,
        None => unreachable!(),
    };
    child.left = pivot.right.take();
    node.right = pivot.left.take();
    node.update();
    child.update();
    pivot.right = Some(child);
    pivot.left = Some(node);
    pivot.update();
    pivot
}

// Restores the balance of a subtree after a removal below it. The rotation case is
// chosen from the heavier child's own balance factor because a removal can shrink
// either grandchild subtree, not just the one on the search path.
fn rebalance<T>(tree: &mut Tree<T>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    if node.balance() > 1 {
        if let Some(child) = node.left.take() {
            if child.balance() < 0 {
                node.left = Some(rotate_left(child));
            } else {
                node.left = Some(child);
            }
        }
        node = rotate_right(node);
    } else if node.balance() < -1 {
        if let Some(child) = node.right.take() {
            if child.balance() > 0 {
                node.right = Some(rotate_right(child));
            } else {
                node.right = Some(child);
            }
        }
        node = rotate_left(node);
    }

    *tree = Some(node);
}

pub fn insert<T>(tree: &mut Tree<T>, value: T) -> bool
where
    T: Ord,
{
    let mut node = match tree.take() {
        Some(node) => node,
        None => {
            *tree = Some(Box::new(Node::new(value)));
            return true;
        },
    };

    let inserted = match value.cmp(&node.value) {
        Ordering::Less => {
            // The rotation case is chosen from the side of the child the new value
            // descends into. The comparison is taken before the descent: a rotation
            // further down would have restored the subtree's previous height, so an
            // imbalance here implies the child root is unchanged.
            let follows_left_path = match node.left {
                Some(ref child) => value < child.value,
                None => false,
            };
            let inserted = insert(&mut node.left, value);
            node.update();
            if node.balance() > 1 {
                node = if follows_left_path {
                    rotate_right(node)
                } else {
                    rotate_left_right(node)
                };
            }
            inserted
        },
        Ordering::Greater => {
            let follows_right_path = match node.right {
                Some(ref child) => value > child.value,
                None => false,
            };
            let inserted = insert(&mut node.right, value);
            node.update();
            if node.balance() < -1 {
                node = if follows_right_path {
                    rotate_left(node)
                } else {
                    rotate_right_left(node)
                };
            }
            inserted
        },
        Ordering::Equal => false,
    };

    *tree = Some(node);
    inserted
}

// precondition: there exists a minimum node in the tree
fn remove_min<T>(tree: &mut Tree<T>) -> Box<Node<T>> {
    let mut node = match tree.take() {
        Some(node) => node,
        None => unreachable!(),
    };

    if node.left.is_some() {
        let min = remove_min(&mut node.left);
        *tree = Some(node);
        rebalance(tree);
        min
    } else {
        *tree = node.right.take();
        node
    }
}

pub fn remove<T>(tree: &mut Tree<T>, value: &T) -> Option<T>
where
    T: Ord,
{
    let ret = match tree.take() {
        Some(mut node) => match value.cmp(&node.value) {
            Ordering::Less => {
                let ret = remove(&mut node.left, value);
                *tree = Some(node);
                ret
            },
            Ordering::Greater => {
                let ret = remove(&mut node.right, value);
                *tree = Some(node);
                ret
            },
            Ordering::Equal => {
                if node.left.is_some() && node.right.is_some() {
                    // Replace the removed value with its in-order successor, detached
                    // from the right subtree by a rebalancing descent.
                    let successor = remove_min(&mut node.right);
                    let Node {
                        value: successor_value,
                        ..
                    } = *successor;
                    let ret = mem::replace(&mut node.value, successor_value);
                    *tree = Some(node);
                    Some(ret)
                } else {
                    let Node {
                        value: removed,
                        left,
                        right,
                        ..
                    } = *node;
                    *tree = left.or(right);
                    Some(removed)
                }
            },
        },
        None => return None,
    };

    rebalance(tree);
    ret
}

pub fn get<'a, T>(tree: &'a Tree<T>, value: &T) -> Option<&'a T>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| match value.cmp(&node.value) {
        Ordering::Less => get(&node.left, value),
        Ordering::Greater => get(&node.right, value),
        Ordering::Equal => Some(&node.value),
    })
}

pub fn ceil<'a, T>(tree: &'a Tree<T>, value: &T) -> Option<&'a T>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| match value.cmp(&node.value) {
        Ordering::Greater => ceil(&node.right, value),
        Ordering::Less => match ceil(&node.left, value) {
            None => Some(&node.value),
            res => res,
        },
        Ordering::Equal => Some(&node.value),
    })
}

pub fn floor<'a, T>(tree: &'a Tree<T>, value: &T) -> Option<&'a T>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| match value.cmp(&node.value) {
        Ordering::Less => floor(&node.left, value),
        Ordering::Greater => match floor(&node.right, value) {
            None => Some(&node.value),
            res => res,
        },
        Ordering::Equal => Some(&node.value),
    })
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        Some(&curr.value)
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        Some(&curr.value)
    })
}

// Correctness oracle: every stored height matches the structural height and every
// balance factor is within the AVL bound.
#[cfg(test)]
pub fn is_balanced<T>(tree: &Tree<T>) -> bool {
    match tree {
        None => true,
        Some(ref node) => {
            node.height == std::cmp::max(height(&node.left), height(&node.right)) + 1
                && node.balance().abs() <= 1
                && is_balanced(&node.left)
                && is_balanced(&node.right)
        },
    }
}

// Correctness oracle: strict binary-search-tree ordering with no duplicates.
#[cfg(test)]
pub fn is_ordered<T>(tree: &Tree<T>) -> bool
where
    T: Ord,
{
    fn in_bounds<T>(tree: &Tree<T>, lower: Option<&T>, upper: Option<&T>) -> bool
    where
        T: Ord,
    {
        match tree {
            None => true,
            Some(ref node) => {
                lower.map_or(true, |bound| *bound < node.value)
                    && upper.map_or(true, |bound| node.value < *bound)
                    && in_bounds(&node.left, lower, Some(&node.value))
                    && in_bounds(&node.right, Some(&node.value), upper)
            },
        }
    }

    in_bounds(tree, None, None)
}
