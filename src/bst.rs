//! A plain (unbalanced) Binary Search Tree owning its nodes.
//!
//! The tree only supports building (i.e., [BinarySearchTree::insert]) and
//! reading. Searching and traversal are implemented in [crate::traversal]
//! and treat the tree as read-only.
//!
//! # Examples
//!
//! ```
//! use searching::{BinarySearchTree, Nodelike};
//!
//! //      9
//! //    /   \
//! //   4     20
//! //  / \    / \
//! // 1   6 15  170
//! let tree: BinarySearchTree<i32> = [9, 4, 20, 1, 6, 15, 170].into_iter().collect();
//!
//! assert_eq!(tree.len(), 7);
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.root().map(|root| *root.get()), Some(9));
//! assert!(tree.lookup(&6).unwrap().is_leaf());
//! ```

use crate::Nodelike;
use std::fmt;

/// A single node. The parent exclusively owns its children.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<T> {
    value: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Node {
            value,
            left: None,
            right: None,
        }
    }

    fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend([node.left(), node.right()].into_iter().flatten().map(|child| (child, depth + 1)));
        }
        height
    }
}

/// Unlinks the subtrees before dropping them, so a degenerated tree does not drop recursively.
impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.left.take().into_iter().chain(self.right.take()).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> Nodelike<T> for Node<T> {
    fn get(&self) -> &T {
        &self.value
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

impl<T> fmt::Display for Node<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node {}", self.value)?;
        if let Some(left) = &self.left {
            write!(f, ", left: {}", left.value)?;
        }
        if let Some(right) = &self.right {
            write!(f, ", right: {}", right.value)?;
        }
        Ok(())
    }
}

/// Binary Search Tree. For every node, the values in its left subtree are
/// smaller than its own value, the values in its right subtree are not.
#[derive(Debug, Clone, PartialEq)]
pub struct BinarySearchTree<T> {
    root: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> BinarySearchTree<T> {
    /// Contructor of an empty tree
    pub fn new() -> Self {
        BinarySearchTree { root: None, len: 0 }
    }

    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Number of nodes (duplicates included)
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Longest path from the root to a leaf counted in nodes. An empty tree has a height of 0.
    pub fn height(&self) -> usize {
        self.root.as_ref().map_or(0, |root| root.height())
    }

    /// Adds `value` as a new leaf. Smaller values go to the left, all others
    /// (including duplicates) to the right.
    pub fn insert(&mut self, value: T)
    where
        T: PartialOrd,
    {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Box::new(Node::new(value)));
        self.len += 1;
    }

    /// Finds a node by descending from the root, using the ordering of the tree. Takes `O(height)`.
    /// With duplicates, the node closest to the root is returned.
    pub fn lookup(&self, value: &T) -> Option<&Node<T>>
    where
        T: PartialOrd,
    {
        let mut current = self.root();
        while let Some(node) = current {
            if *value == node.value {
                return Some(node);
            }
            current = if *value < node.value {
                node.left()
            } else {
                node.right()
            };
        }
        None
    }
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialOrd> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.insert(value));
    }
}

impl<T: PartialOrd> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::new();
        tree.extend(iter);
        tree
    }
}
