use crate::avl_tree::node::Node;
use crate::avl_tree::tree;

/// An ordered set implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of the two child subtrees of any node differ by at most one. Heights are counted
/// in edges: a leaf has height 0 and an empty tree has height -1. Duplicate values are not
/// stored; inserting a value that is already present leaves the tree untouched.
///
/// # Examples
/// ```
/// use avl_collections::avl_tree::AvlTree;
///
/// let mut tree = AvlTree::new();
/// tree.insert(0);
/// tree.insert(3);
///
/// assert_eq!(tree.len(), 2);
///
/// assert_eq!(tree.min(), Some(&0));
/// assert_eq!(tree.ceil(&2), Some(&3));
///
/// assert_eq!(tree.remove(&0), Some(0));
/// assert_eq!(tree.remove(&1), None);
/// ```
pub struct AvlTree<T> {
    root: tree::Tree<T>,
    len: usize,
}

impl<T> AvlTree<T>
where
    T: Ord,
{
    /// Constructs a new, empty `AvlTree<T>`.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlTree;
    ///
    /// let tree: AvlTree<u32> = AvlTree::new();
    /// ```
    pub fn new() -> Self {
        AvlTree { root: None, len: 0 }
    }

    /// Inserts a value into the tree. Returns `true` if the value was not present and was
    /// inserted. If the value is already in the tree, the tree is left unchanged and `false`
    /// is returned.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert!(tree.insert(1));
    /// assert!(tree.contains(&1));
    /// assert!(!tree.insert(1));
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let inserted = tree::insert(&mut self.root, value);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes a value from the tree. If the value exists in the tree, it will return the
    /// owned value. Otherwise it will return `None`.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.remove(&1), Some(1));
    /// assert_eq!(tree.remove(&1), None);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let removed = tree::remove(&mut self.root, value);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Checks if a value exists in the tree.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert!(!tree.contains(&0));
    /// assert!(tree.contains(&1));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        tree::get(&self.root, value).is_some()
    }

    /// Returns a reference to the stored value equal to a particular value. Returns `None`
    /// if such a value does not exist.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.get(&1), Some(&1));
    /// assert_eq!(tree.get(&2), None);
    /// ```
    pub fn get(&self, value: &T) -> Option<&T> {
        tree::get(&self.root, value)
    }

    /// Returns the number of values in the tree.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree is empty.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlTree;
    ///
    /// let tree: AvlTree<u32> = AvlTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the tree, removing all values.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// tree.insert(2);
    /// tree.clear();
    /// assert_eq!(tree.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Returns the height of the tree in edges. An empty tree has height -1 and a tree with
    /// a single value has height 0.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert_eq!(tree.height(), -1);
    /// tree.insert(1);
    /// assert_eq!(tree.height(), 0);
    /// tree.insert(2);
    /// assert_eq!(tree.height(), 1);
    /// ```
    pub fn height(&self) -> i32 {
        tree::height(&self.root)
    }

    /// Returns a value in the tree that is less than or equal to a particular value. Returns
    /// `None` if such a value does not exist.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.floor(&0), None);
    /// assert_eq!(tree.floor(&2), Some(&1));
    /// ```
    pub fn floor(&self, value: &T) -> Option<&T> {
        tree::floor(&self.root, value)
    }

    /// Returns a value in the tree that is greater than or equal to a particular value.
    /// Returns `None` if such a value does not exist.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.ceil(&0), Some(&1));
    /// assert_eq!(tree.ceil(&2), None);
    /// ```
    pub fn ceil(&self, value: &T) -> Option<&T> {
        tree::ceil(&self.root, value)
    }

    /// Returns the minimum value of the tree. Returns `None` if the tree is empty.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// tree.insert(3);
    /// assert_eq!(tree.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.root)
    }

    /// Returns the maximum value of the tree. Returns `None` if the tree is empty.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// tree.insert(3);
    /// assert_eq!(tree.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.root)
    }

    /// Returns an iterator over the tree. The iterator will yield values in root-left-right
    /// order, recomputed from the current state of the tree each time it is called.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// let mut iterator = tree.preorder();
    /// assert_eq!(iterator.next(), Some(&2));
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn preorder(&self) -> AvlTreePreorder<'_, T> {
        AvlTreePreorder {
            stack: self.root.iter().map(|node| &**node).collect(),
        }
    }

    /// Returns an iterator over the tree. The iterator will yield values using in-order
    /// traversal.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// let mut iterator = tree.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AvlTreeIter<'_, T> {
        let mut iter = AvlTreeIter { stack: Vec::new() };
        iter.descend_left(&self.root);
        iter
    }
}

impl<T> IntoIterator for AvlTree<T>
where
    T: Ord,
{
    type IntoIter = AvlTreeIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        let mut iter = AvlTreeIntoIter { stack: Vec::new() };
        iter.descend_left(self.root);
        iter
    }
}

impl<'a, T> IntoIterator for &'a AvlTree<T>
where
    T: 'a + Ord,
{
    type IntoIter = AvlTreeIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `AvlTree<T>`.
///
/// This iterator traverses the tree in-order and yields owned values.
pub struct AvlTreeIntoIter<T> {
    stack: Vec<Box<Node<T>>>,
}

impl<T> AvlTreeIntoIter<T> {
    fn descend_left(&mut self, mut tree: tree::Tree<T>) {
        while let Some(mut node) = tree {
            tree = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<T> Iterator for AvlTreeIntoIter<T>
where
    T: Ord,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let Node { value, right, .. } = *node;
        self.descend_left(right);
        Some(value)
    }
}

/// An iterator for `AvlTree<T>`.
///
/// This iterator traverses the tree in-order and yields immutable references.
pub struct AvlTreeIter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> AvlTreeIter<'a, T> {
    fn descend_left(&mut self, tree: &'a tree::Tree<T>) {
        let mut curr = tree;
        while let Some(ref node) = *curr {
            self.stack.push(node);
            curr = &node.left;
        }
    }
}

impl<'a, T> Iterator for AvlTreeIter<'a, T>
where
    T: 'a + Ord,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.descend_left(&node.right);
        Some(&node.value)
    }
}

/// A preorder iterator for `AvlTree<T>`.
///
/// This iterator traverses the tree in root-left-right order and yields immutable
/// references.
pub struct AvlTreePreorder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for AvlTreePreorder<'a, T>
where
    T: 'a + Ord,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(ref child) = node.right {
            self.stack.push(child);
        }
        if let Some(ref child) = node.left {
            self.stack.push(child);
        }
        Some(&node.value)
    }
}

impl<T> Default for AvlTree<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
