//! This crate exposes a self-balancing Binary Search Tree (BST) over unique
//! keys, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)`, where `height` is the number of
//! `Node`s on the longest path from the root `Node` to a leaf `Node`.
//!
//! ## Balancing by rebuilding
//!
//! A tree is balanced when, for every `Node`, the heights of its two subtrees
//! differ by at most one. That keeps the height at `O(lg N)`.
//!
//! Rather than rotating nodes, the [`Tree`] here checks the whole tree after
//! every insert and delete. If any `Node` is out of balance, it collects the
//! keys in ascending order and rebuilds the tree into the unique minimum
//! height shape that always roots a run of keys at its lower middle key.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::{Order, Tree};
//!
//! let mut tree = Tree::new();
//! for key in 1..=7 {
//!     tree.insert(key);
//! }
//!
//! assert!(tree.is_balanced());
//! assert_eq!(tree.height(), 4);
//!
//! // A manual rebalance always gives the minimum height.
//! tree.rebalance();
//! assert_eq!(tree.height(), 3);
//!
//! let keys: Vec<_> = tree.iter(Order::In).copied().collect();
//! assert_eq!(keys, [1, 2, 3, 4, 5, 6, 7]);
//! ```

#![deny(missing_docs)]

mod error;
mod node;
mod traverse;
mod tree;


pub use error::TraversalError;
pub use node::Node;
pub use traverse::{IntoIter, Iter, Order};
pub use tree::Tree;
