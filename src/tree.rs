//! The owning [`Tree`] type and its public operations.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::{Order, Tree};
//!
//! let mut tree = Tree::build([1, 7, 4, 23, 8, 9, 4, 3, 5, 7, 9, 67, 324]);
//!
//! // Duplicates collapse and the tree starts out balanced.
//! assert_eq!(tree.len(), 10);
//! assert!(tree.is_balanced());
//!
//! let mut keys = Vec::new();
//! tree.level_order(|k| keys.push(*k));
//! assert_eq!(keys, [7, 3, 23, 1, 4, 8, 67, 5, 9, 324]);
//!
//! // Mutations leave the tree balanced.
//! tree.insert(88);
//! tree.insert(543);
//! assert!(tree.is_balanced());
//!
//! // Deleting a missing key does nothing.
//! assert_eq!(tree.delete(&15), None);
//! assert_eq!(tree.iter(Order::In).count(), 12);
//! ```

use crate::node::{Link, Node};
use crate::traverse::{IntoIter, Iter, Order};
use crate::TraversalError;

/// A Binary Search Tree over unique keys that keeps itself balanced.
///
/// Every insert or delete that leaves some node with subtrees whose heights
/// differ by more than one rebuilds the whole tree into its minimum height
/// shape. There are no rotations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: Link::empty(),
            len: 0,
        }
    }

    /// Builds a balanced tree holding every distinct key in `keys`. The keys
    /// may come in any order and may repeat.
    ///
    /// The root of every subtree is the key at index `(n - 1) / 2` of its
    /// sorted keys, so the same set of keys always gives the same shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::build([4, 1, 3, 2, 3]);
    ///
    /// assert_eq!(tree.len(), 4);
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(2));
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn build<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Ord,
    {
        let mut keys: Vec<K> = keys.into_iter().collect();
        keys.sort_unstable();
        keys.dedup();
        Self::from_sorted(keys.into_iter())
    }

    /// Builds a tree from keys that are already ascending and distinct.
    fn from_sorted<I>(mut keys: I) -> Self
    where
        I: ExactSizeIterator<Item = K>,
    {
        let len = keys.len();
        Self {
            root: Link::from_sorted(&mut keys, len),
            len,
        }
    }

    /// The number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The root node, or `None` if the tree is empty.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.node()
    }

    /// Inserts the key into the tree. Returns `false` and leaves the tree
    /// untouched if the key was already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: K) -> bool
    where
        K: Ord,
    {
        let inserted = self.root.insert(value);
        if inserted {
            self.len += 1;
        }
        self.restore_balance("insert");
        inserted
    }

    /// Deletes the key from the tree and returns it. If the tree does not
    /// contain the key, nothing happens.
    ///
    /// A node with two children keeps its place in the tree and takes its
    /// in-order successor's key.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::build([1, 2, 3]);
    ///
    /// assert_eq!(tree.delete(&2), Some(2));
    /// assert_eq!(tree.delete(&2), None);
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(3));
    /// ```
    pub fn delete(&mut self, value: &K) -> Option<K>
    where
        K: Ord,
    {
        let deleted = self.root.delete(value);
        if deleted.is_some() {
            self.len -= 1;
        }
        self.restore_balance("delete");
        deleted
    }

    /// Finds the node holding the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::build([1, 2, 3]);
    ///
    /// assert_eq!(tree.find(&3).map(|n| n.is_leaf()), Some(true));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        self.root.find(value)
    }

    /// Whether the tree holds the given key.
    pub fn contains(&self, value: &K) -> bool
    where
        K: Ord,
    {
        self.find(value).is_some()
    }

    /// How many levels the tree has. An empty tree has a height of 0 and a
    /// tree with just a root has a height of 1.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// The number of edges from the root to the node holding `node`'s key, or
    /// `None` if no node along the search path holds it.
    ///
    /// Only `node`'s key is used. It doesn't matter whether `node` itself is
    /// part of this tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::build([1, 2, 3, 4]);
    /// let four = tree.find(&4).unwrap();
    ///
    /// assert_eq!(tree.depth(four), Some(2));
    ///
    /// let elsewhere = Tree::build([5]);
    /// assert_eq!(tree.depth(elsewhere.root().unwrap()), None);
    /// ```
    pub fn depth(&self, node: &Node<K>) -> Option<usize>
    where
        K: Ord,
    {
        self.root().and_then(|root| Self::depth_from(node, root))
    }

    /// Like [`depth`][Tree::depth] but counts edges from `from` instead of the
    /// root.
    ///
    /// The search moves right while `node`'s key is greater and left
    /// otherwise.
    pub fn depth_from(node: &Node<K>, from: &Node<K>) -> Option<usize>
    where
        K: Ord,
    {
        let target = node.value();
        let mut current = from;
        let mut depth = 0;
        while current.value() != target {
            current = if target > current.value() {
                current.right()?
            } else {
                current.left()?
            };
            depth += 1;
        }
        Some(depth)
    }

    /// Whether the heights of every node's two subtrees differ by at most one.
    /// An empty tree is balanced.
    pub fn is_balanced(&self) -> bool {
        self.root.balanced_height().is_some()
    }

    /// Rebuilds the tree into its minimum height shape. The set of keys stays
    /// the same.
    ///
    /// This is called automatically by [`insert`][Tree::insert] and
    /// [`delete`][Tree::delete] when they unbalance the tree.
    pub fn rebalance(&mut self) {
        let root = self.root.take();
        *self = Self::from_sorted(IntoIter::new(root, self.len));
        log::trace!(
            "rebuilt tree of {} keys to height {}",
            self.len,
            self.height()
        );
    }

    fn restore_balance(&mut self, operation: &str) {
        if !self.is_balanced() {
            log::debug!(
                "{} unbalanced a tree of {} keys, rebalancing",
                operation,
                self.len
            );
            self.rebalance();
        }
    }

    /// A lazy iterator over the keys in the given order.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::{Order, Tree};
    ///
    /// let tree = Tree::build([1, 2, 3, 4, 5]);
    /// let post: Vec<_> = tree.iter(Order::Post).collect();
    ///
    /// assert_eq!(post, [&2, &1, &5, &4, &3]);
    /// ```
    pub fn iter(&self, order: Order) -> Iter<'_, K> {
        Iter::new(self.root(), order)
    }

    /// Calls `callback` with each key, breadth first, level by level from
    /// left to right.
    pub fn level_order<F>(&self, callback: F)
    where
        F: FnMut(&K),
    {
        self.iter(Order::Level).for_each(callback)
    }

    /// Calls `callback` with each key, visiting a node before its left
    /// subtree and its left subtree before its right subtree.
    pub fn pre_order<F>(&self, callback: F)
    where
        F: FnMut(&K),
    {
        self.iter(Order::Pre).for_each(callback)
    }

    /// Calls `callback` with each key in ascending order.
    pub fn in_order<F>(&self, callback: F)
    where
        F: FnMut(&K),
    {
        self.iter(Order::In).for_each(callback)
    }

    /// Calls `callback` with each key, visiting both subtrees of a node before
    /// the node itself.
    pub fn post_order<F>(&self, callback: F)
    where
        F: FnMut(&K),
    {
        self.iter(Order::Post).for_each(callback)
    }

    /// Calls `callback` with each key in the given order. This is for callers
    /// that may not have a callback at hand: passing `None` fails before any
    /// key is visited.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::{Order, TraversalError, Tree};
    ///
    /// let tree = Tree::build([1, 2, 3]);
    ///
    /// let mut sum = 0;
    /// tree.traverse(Order::Pre, Some(|k: &i32| sum += k)).unwrap();
    /// assert_eq!(sum, 6);
    ///
    /// let missing: Option<fn(&i32)> = None;
    /// assert_eq!(
    ///     tree.traverse(Order::Pre, missing),
    ///     Err(TraversalError::MissingCallback { order: Order::Pre })
    /// );
    /// ```
    pub fn traverse<F>(&self, order: Order, callback: Option<F>) -> Result<(), TraversalError>
    where
        F: FnMut(&K),
    {
        let callback = callback.ok_or(TraversalError::MissingCallback { order })?;
        self.iter(order).for_each(callback);
        Ok(())
    }

    /// Calls a fallible `callback` with each key in the given order. The first
    /// error stops the traversal and is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::{Order, Tree};
    ///
    /// let tree = Tree::build([1, 2, 3, 4, 5]);
    /// let mut seen = Vec::new();
    ///
    /// let result = tree.try_traverse(Order::In, |k| {
    ///     if *k > 2 {
    ///         return Err(*k);
    ///     }
    ///     seen.push(*k);
    ///     Ok(())
    /// });
    ///
    /// assert_eq!(result, Err(3));
    /// assert_eq!(seen, [1, 2]);
    /// ```
    pub fn try_traverse<F, E>(&self, order: Order, callback: F) -> Result<(), E>
    where
        F: FnMut(&K) -> Result<(), E>,
    {
        self.iter(order).try_for_each(callback)
    }
}

impl<K: Ord> FromIterator<K> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::build(iter)
    }
}

impl<K: Ord> From<Vec<K>> for Tree<K> {
    fn from(keys: Vec<K>) -> Self {
        Self::build(keys)
    }
}

impl<K: Ord> Extend<K> for Tree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter(Order::In)
    }
}

impl<K> IntoIterator for Tree<K> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.root, self.len)
    }
}
