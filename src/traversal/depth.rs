//! Depth-first traversals: pre-order, in-order and post-order.
//!
//! All three record two sequences in accumulators owned by the caller:
//!
//! * `path`: the values of the nodes in the order the recursion enters them.
//!   This is the same for all three traversals (and equals the pre-order).
//! * `order`: the traversal itself. The traversals only differ in when a node
//!   is appended relative to its subtrees.
//!
//! Absent children are skipped. The recursion depth is bounded by the height of the tree.

use crate::{Node, Nodelike};
use std::fmt::Debug;
use tracing::trace;

/// Left subtree, node, right subtree. Yields ascending values for a binary search tree.
pub fn traverse_in_order<'a, 'b, T>(
    node: &'a Node<T>,
    path: &'b mut Vec<&'a T>,
    order: &'b mut Vec<&'a T>,
) -> (&'b [&'a T], &'b [&'a T])
where
    T: Debug,
{
    trace!("traverse_in_order({:?}, {path:?}, {order:?})", node.get());
    path.push(node.get());
    // as far left as possible first
    if let Some(left) = node.left() {
        traverse_in_order(left, path, order);
    }
    trace!("appending {:?}", node.get());
    order.push(node.get());
    if let Some(right) = node.right() {
        traverse_in_order(right, path, order);
    }
    (path.as_slice(), order.as_slice())
}

/// Node, left subtree, right subtree. The `order` equals the `path`.
pub fn traverse_pre_order<'a, 'b, T>(
    node: &'a Node<T>,
    path: &'b mut Vec<&'a T>,
    order: &'b mut Vec<&'a T>,
) -> (&'b [&'a T], &'b [&'a T])
where
    T: Debug,
{
    trace!("traverse_pre_order({:?}, {path:?}, {order:?})", node.get());
    path.push(node.get());
    order.push(node.get());
    if let Some(left) = node.left() {
        traverse_pre_order(left, path, order);
    }
    if let Some(right) = node.right() {
        traverse_pre_order(right, path, order);
    }
    (path.as_slice(), order.as_slice())
}

/// Left subtree, right subtree, node. The root comes last.
pub fn traverse_post_order<'a, 'b, T>(
    node: &'a Node<T>,
    path: &'b mut Vec<&'a T>,
    order: &'b mut Vec<&'a T>,
) -> (&'b [&'a T], &'b [&'a T])
where
    T: Debug,
{
    trace!("traverse_post_order({:?}, {path:?}, {order:?})", node.get());
    path.push(node.get());
    if let Some(left) = node.left() {
        traverse_post_order(left, path, order);
    }
    if let Some(right) = node.right() {
        traverse_post_order(right, path, order);
    }
    trace!("appending {:?}", node.get());
    order.push(node.get());
    (path.as_slice(), order.as_slice())
}
