//! Iterators over the keys of a [`Tree`][crate::Tree] in each of the four
//! traversal orders.
//!
//! All of them are iterative. The level order iterator keeps a FIFO queue of
//! pending nodes and the depth first ones keep an explicit stack, so none of
//! them recurse.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::node::{Link, Node};

/// The order in which a traversal visits keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Breadth first: the root, then every node one level down from left to
    /// right, and so on.
    Level,
    /// A node's key, then its left subtree, then its right subtree.
    Pre,
    /// A node's left subtree, then its key, then its right subtree. Keys come
    /// out in ascending order.
    In,
    /// A node's left subtree, then its right subtree, then its key.
    Post,
}

impl Order {
    /// Every order, in the order they are usually listed.
    pub const ALL: [Order; 4] = [Order::Level, Order::Pre, Order::In, Order::Post];
}

/// A borrowing iterator over the keys of a tree in some [`Order`]. Created by
/// [`Tree::iter`][crate::Tree::iter].
#[derive(Debug)]
pub struct Iter<'a, K> {
    inner: Inner<'a, K>,
}

#[derive(Debug)]
enum Inner<'a, K> {
    Level(VecDeque<&'a Node<K>>),
    Pre(Vec<&'a Node<K>>),
    In(Vec<&'a Node<K>>),
    // The flag says whether the node's children have already been pushed.
    Post(Vec<(&'a Node<K>, bool)>),
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>, order: Order) -> Self {
        let inner = match order {
            Order::Level => Inner::Level(root.into_iter().collect()),
            Order::Pre => Inner::Pre(root.into_iter().collect()),
            Order::In => {
                let mut stack = Vec::new();
                push_left_spine(&mut stack, root);
                Inner::In(stack)
            }
            Order::Post => Inner::Post(root.into_iter().map(|n| (n, false)).collect()),
        };
        Self { inner }
    }
}

fn push_left_spine<'a, K>(stack: &mut Vec<&'a Node<K>>, mut node: Option<&'a Node<K>>) {
    while let Some(n) = node {
        stack.push(n);
        node = n.left();
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            Inner::Level(queue) => {
                let node = queue.pop_front()?;
                queue.extend(node.left());
                queue.extend(node.right());
                Some(node.value())
            }
            Inner::Pre(stack) => {
                let node = stack.pop()?;
                // Right goes on first so the left subtree is popped first.
                stack.extend(node.right());
                stack.extend(node.left());
                Some(node.value())
            }
            Inner::In(stack) => {
                let node = stack.pop()?;
                push_left_spine(stack, node.right());
                Some(node.value())
            }
            Inner::Post(stack) => loop {
                let (node, expanded) = stack.pop()?;
                if expanded {
                    return Some(node.value());
                }
                stack.push((node, true));
                stack.extend(node.right().map(|n| (n, false)));
                stack.extend(node.left().map(|n| (n, false)));
            },
        }
    }
}

impl<K> FusedIterator for Iter<'_, K> {}

/// An owning iterator that drains a tree's keys in ascending order. Created by
/// calling `into_iter` on a [`Tree`][crate::Tree].
#[derive(Debug)]
pub struct IntoIter<K> {
    stack: Vec<Box<Node<K>>>,
    remaining: usize,
}

impl<K> IntoIter<K> {
    pub(crate) fn new(root: Link<K>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Link<K>) {
        while let Some(mut node) = link.into_inner() {
            link = node.take_left();
            self.stack.push(node);
        }
    }
}

impl<K> Iterator for IntoIter<K> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let (value, _, right) = (*node).into_parts();
        self.push_left_spine(right);
        self.remaining = self.remaining.saturating_sub(1);
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for IntoIter<K> {}

impl<K> FusedIterator for IntoIter<K> {}
