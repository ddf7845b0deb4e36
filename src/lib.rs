//! A self-balancing binary search tree with an ordered set interface.
//!
//! The tree maintains the AVL invariant: the heights of the two child subtrees of any node
//! differ by at most one. Insertions and deletions restore the invariant bottom-up with at
//! most one single or double rotation per level, so all mutating and searching operations
//! run in `O(log N)` time.

pub mod avl_tree;
