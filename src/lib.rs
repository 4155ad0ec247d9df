//! ## About
//!
//! This crate contains classic search and tree traversal algorithms, mostly for
//! educational purposes:
//!
//! * [linear_search] and [binary_search] over sequences
//! * breadth-first search over a [BinarySearchTree], iterative and recursive ([BreadthFirstSearch])
//! * depth-first traversals: [traverse_pre_order], [traverse_in_order], [traverse_post_order]
//!
//! "Not found" is never an error, searches return `None` in that case.
//!
//! ## Binary Search Tree
//!
//! For every node in a BST, all the nodes in its left subtree have a value less than its
//! own value, and all the nodes in its right subtree have a value not less than its own value.
//! Visiting the left subtree, then the node, then the right subtree (in-order traversal)
//! therefore yields the values in ascending order.
//!
//! ## Naming conventions
//! * Traits – adjectives that indicate capability and behavior
//! * Structs – substantives that indicate entities implementing a behavior
//! * Functions – imperative forms with the exception of getters and factories

pub mod bst;
pub mod config;
pub mod errors;
pub mod iterable_tree;
pub mod sequence;
pub mod traversal;

pub use bst::{BinarySearchTree, Node};
pub use config::LogConfig;
pub use errors::SearchError;
pub use iterable_tree::{Nodelike, Order};
pub use sequence::{binary_search, binary_search_sorted, linear_search};
pub use traversal::{
    traverse_in_order, traverse_post_order, traverse_pre_order, BreadthFirstIterator, BreadthFirstSearch,
    Traversal,
};
