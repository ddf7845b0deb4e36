//! Self-balancing binary search tree where the heights of the two child subtrees of any node
//! differ by at most one.

mod node;
mod set;
mod tree;

pub use self::set::{AvlTree, AvlTreeIntoIter, AvlTreeIter, AvlTreePreorder};
