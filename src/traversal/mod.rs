//! Searching and traversing a [BinarySearchTree](crate::BinarySearchTree)
//! either breadth-first or depth-first.

pub mod breadth;
pub mod depth;

pub use breadth::{BreadthFirstIterator, BreadthFirstSearch};
pub use depth::{traverse_in_order, traverse_post_order, traverse_pre_order};

use crate::{BinarySearchTree, Nodelike, Order, SearchError};
use itertools::Itertools;
use std::fmt;

/// Result of traversing a tree: the values in the order the nodes were entered (`path`)
/// and the traversal output (`order`). Breadth-first traversal enters the nodes in
/// traversal order, therefore both are the same.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversal<'a, T> {
    pub path: Vec<&'a T>,
    pub order: Vec<&'a T>,
}

impl<'a, T> Traversal<'a, T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Traversal {
            path: Vec::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
        }
    }

    /// Owned copy of the traversal output
    pub fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.order.iter().map(|&value| value.clone()).collect()
    }
}

impl<T> fmt::Display for Traversal<'_, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "path: [{}]", self.path.iter().join(", "))?;
        write!(f, "nodes: [{}]", self.order.iter().join(", "))
    }
}

impl<T> BinarySearchTree<T>
where
    T: fmt::Debug,
{
    /// Traverses the whole tree, starting at the root, in the given order.
    ///
    /// # Errors
    ///
    /// [SearchError::RootNotSet] if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use searching::{BinarySearchTree, Order};
    ///
    /// let tree: BinarySearchTree<i32> = [9, 4, 20, 1, 6, 15, 170].into_iter().collect();
    /// let traversal = tree.traverse(Order::InOrder).unwrap();
    /// assert_eq!(traversal.values(), vec![1, 4, 6, 9, 15, 20, 170]);
    /// ```
    pub fn traverse(&self, order: Order) -> Result<Traversal<'_, T>, SearchError> {
        let root = self.root().ok_or(SearchError::RootNotSet)?;
        let mut traversal = Traversal::with_capacity(self.len());
        let Traversal { path, order: out } = &mut traversal;

        match order {
            Order::PreOrder => {
                traverse_pre_order(root, path, out);
            }
            Order::InOrder => {
                traverse_in_order(root, path, out);
            }
            Order::PostOrder => {
                traverse_post_order(root, path, out);
            }
            Order::BreadthFirst => {
                for node in BreadthFirstIterator::new(Some(root)) {
                    path.push(node.get());
                    out.push(node.get());
                }
            }
        }
        Ok(traversal)
    }
}
