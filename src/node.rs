//! The vertices of a [`Tree`][crate::Tree] and the recursive algorithms that
//! work on a single subtree.

use std::cmp::Ordering;
use std::mem;

/// A single vertex of a [`Tree`][crate::Tree]. It holds a key and owns up to
/// two child subtrees. Every key in the left subtree is less than this key and
/// every key in the right subtree is greater.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<K> {
    value: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    fn new_boxed(value: K) -> Box<Self> {
        Box::new(Self {
            value,
            left: Link::empty(),
            right: Link::empty(),
        })
    }

    /// The key stored in this node.
    pub fn value(&self) -> &K {
        &self.value
    }

    /// The root of the left subtree, if there is one.
    pub fn left(&self) -> Option<&Node<K>> {
        self.left.node()
    }

    /// The root of the right subtree, if there is one.
    pub fn right(&self) -> Option<&Node<K>> {
        self.right.node()
    }

    pub(crate) fn into_parts(self) -> (K, Link<K>, Link<K>) {
        (self.value, self.left, self.right)
    }

    pub(crate) fn take_left(&mut self) -> Link<K> {
        self.left.take()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }

    /// How many levels are in the subtree rooted at this node. A node with no
    /// children has a height of 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::build([1, 2, 3, 4]);
    /// let root = tree.root().unwrap();
    ///
    /// assert_eq!(root.height(), 3);
    /// assert_eq!(root.left().unwrap().height(), 1);
    /// ```
    pub fn height(&self) -> usize {
        self.left.height().max(self.right.height()) + 1
    }
}

/// An optional, owned subtree. This is the slot a parent keeps for each child
/// and the slot a `Tree` keeps for its root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Link<K>(Option<Box<Node<K>>>);

impl<K> Link<K> {
    pub(crate) fn empty() -> Self {
        Self(None)
    }

    pub(crate) fn node(&self) -> Option<&Node<K>> {
        self.0.as_deref()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub(crate) fn take(&mut self) -> Self {
        Self(self.0.take())
    }

    pub(crate) fn into_inner(self) -> Option<Box<Node<K>>> {
        self.0
    }

    pub(crate) fn height(&self) -> usize {
        self.node().map_or(0, Node::height)
    }

    /// Builds a minimum height subtree out of the first `len` keys of an
    /// ascending iterator.
    ///
    /// The root is the key at index `(len - 1) / 2`, so slices of even length
    /// pick their lower middle key.
    pub(crate) fn from_sorted<I>(keys: &mut I, len: usize) -> Self
    where
        I: Iterator<Item = K>,
    {
        Self(Self::build_node(keys, len))
    }

    fn build_node<I>(keys: &mut I, len: usize) -> Option<Box<Node<K>>>
    where
        I: Iterator<Item = K>,
    {
        if len == 0 {
            return None;
        }

        let left_len = (len - 1) / 2;
        let left = Self::from_sorted(keys, left_len);
        let value = keys.next()?;
        let right = Self::from_sorted(keys, len - left_len - 1);

        Some(Box::new(Node { value, left, right }))
    }

    /// Inserts the key as a new leaf. Returns `false` without touching the
    /// subtree if the key is already present.
    pub(crate) fn insert(&mut self, value: K) -> bool
    where
        K: Ord,
    {
        match &mut self.0 {
            None => {
                self.0 = Some(Node::new_boxed(value));
                true
            }
            Some(node) => match value.cmp(&node.value) {
                Ordering::Less => node.left.insert(value),
                Ordering::Equal => false,
                Ordering::Greater => node.right.insert(value),
            },
        }
    }

    pub(crate) fn find(&self, value: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        let node = self.node()?;
        match value.cmp(&node.value) {
            Ordering::Less => node.left.find(value),
            Ordering::Equal => Some(node),
            Ordering::Greater => node.right.find(value),
        }
    }

    /// Removes the key from this subtree and returns it.
    ///
    /// A node with two children is not unlinked. It takes over its in-order
    /// successor's key and the successor is removed from the right subtree
    /// instead.
    pub(crate) fn delete(&mut self, value: &K) -> Option<K>
    where
        K: Ord,
    {
        let node = self.0.as_mut()?;
        match value.cmp(&node.value) {
            Ordering::Less => node.left.delete(value),
            Ordering::Greater => node.right.delete(value),
            Ordering::Equal => {
                if node.left.is_empty() {
                    let right = node.right.take();
                    return self.replace_with(right);
                }
                if node.right.is_empty() {
                    let left = node.left.take();
                    return self.replace_with(left);
                }

                let successor = node.right.take_smallest()?;
                Some(mem::replace(&mut node.value, successor))
            }
        }
    }

    /// Puts `child` where this link's node was and returns the old node's key.
    fn replace_with(&mut self, child: Self) -> Option<K> {
        let removed = mem::replace(self, child).0?;
        Some(removed.value)
    }

    /// Removes the leftmost node of this subtree, splicing its right child
    /// into its place, and returns its key.
    fn take_smallest(&mut self) -> Option<K> {
        let node = self.0.as_mut()?;
        if node.left.is_empty() {
            let right = node.right.take();
            return self.replace_with(right);
        }
        node.left.take_smallest()
    }

    /// The height of this subtree, or `None` if any node in it has children
    /// whose heights differ by more than one.
    pub(crate) fn balanced_height(&self) -> Option<usize> {
        let Some(node) = self.node() else {
            return Some(0);
        };

        let left = node.left.balanced_height()?;
        let right = node.right.balanced_height()?;
        if left.abs_diff(right) > 1 {
            return None;
        }

        Some(left.max(right) + 1)
    }
}
