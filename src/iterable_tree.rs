//! Definition of the interfaces for tree traversal

use crate::SearchError;
use std::{fmt, str::FromStr};

/// Order of traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    PreOrder,
    InOrder,
    PostOrder,
    BreadthFirst,
}

impl FromStr for Order {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pre" | "pre-order" | "preorder" => Ok(Order::PreOrder),
            "in" | "in-order" | "inorder" => Ok(Order::InOrder),
            "post" | "post-order" | "postorder" => Ok(Order::PostOrder),
            "breadth" | "breadth-first" | "bfs" => Ok(Order::BreadthFirst),
            _ => Err(SearchError::UnknownOrder(s.to_string())),
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Order::PreOrder => "pre-order",
            Order::InOrder => "in-order",
            Order::PostOrder => "post-order",
            Order::BreadthFirst => "breadth-first",
        };
        f.write_str(name)
    }
}

/// A node of a binary tree holding a value and up to two children.
///
/// Search and traversal only ever read through this interface, they
/// never modify the tree.
pub trait Nodelike<T> {
    fn get(&self) -> &T;
    fn left(&self) -> Option<&Self>;
    fn right(&self) -> Option<&Self>;

    fn is_leaf(&self) -> bool {
        self.left().is_none() && self.right().is_none()
    }
}
