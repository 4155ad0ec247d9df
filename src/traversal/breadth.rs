//! Breadth-first (level order) search and iteration: top-down, left to right.

use crate::{BinarySearchTree, Node, Nodelike};
use std::{collections::VecDeque, fmt::Debug};
use tracing::{debug, trace};
use tracing_attributes::instrument;

/// Iterator over the nodes of a tree in breadth-first order. All nodes of
/// depth `d` are returned before the nodes of depth `d + 1`.
pub struct BreadthFirstIterator<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> BreadthFirstIterator<'a, T> {
    pub fn new(root: Option<&'a Node<T>>) -> Self {
        BreadthFirstIterator {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for BreadthFirstIterator<'a, T>
where
    T: Debug,
{
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        trace!("dequeue {:?}", node.get());
        enqueue_children(&mut self.queue, node);
        Some(node)
    }
}

/// Left child first, as this determines the order within a level
fn enqueue_children<'a, T: Debug>(queue: &mut VecDeque<&'a Node<T>>, node: &'a Node<T>) {
    for child in [node.left(), node.right()].into_iter().flatten() {
        trace!("enqueue {:?}", child.get());
        queue.push_back(child);
    }
}

/// Breadth-first search on a [BinarySearchTree].
///
/// Note that the search does not make use of the ordering of the tree (see
/// [BinarySearchTree::lookup] for that). It simply visits the nodes level by level.
///
/// # Examples
///
/// ```
/// use searching::{BinarySearchTree, BreadthFirstSearch, Nodelike};
///
/// let tree: BinarySearchTree<i32> = [9, 4, 20, 1, 6, 15, 170].into_iter().collect();
/// let bfs = BreadthFirstSearch::new(&tree);
///
/// assert_eq!(bfs.search(&15).map(|node| *node.get()), Some(15));
/// assert!(bfs.search(&152).is_none());
///
/// let mut queue = bfs.queue();
/// assert_eq!(bfs.search_recursive(&mut queue, &15).map(|node| *node.get()), Some(15));
/// ```
pub struct BreadthFirstSearch<'a, T> {
    tree: &'a BinarySearchTree<T>,
}

impl<'a, T> BreadthFirstSearch<'a, T>
where
    T: PartialEq + Debug,
{
    pub fn new(tree: &'a BinarySearchTree<T>) -> Self {
        BreadthFirstSearch { tree }
    }

    /// A queue holding only the root node (empty for an empty tree). Starting point for [Self::search_recursive].
    pub fn queue(&self) -> VecDeque<&'a Node<T>> {
        self.tree.root().into_iter().collect()
    }

    pub fn iter(&self) -> BreadthFirstIterator<'a, T> {
        BreadthFirstIterator::new(self.tree.root())
    }

    /// Returns the first node (in breadth-first order) whose value equals `target`
    #[instrument(level = "debug", skip(self))]
    pub fn search(&self, target: &T) -> Option<&'a Node<T>> {
        debug!("Looking for {target:?}");
        let mut queue = self.queue();
        search_queue(&mut queue, target)
    }

    /// Same as [Self::search] but the queue is passed in from outside, so its state is
    /// kept between calls. Each dequeued node replaces one recursive call of the textbook
    /// version; the loop keeps the stack depth constant for any number of nodes.
    /// Nodes dequeued before a match are gone from `queue` afterwards.
    #[instrument(level = "trace", skip(self, queue))]
    pub fn search_recursive(&self, queue: &mut VecDeque<&'a Node<T>>, target: &T) -> Option<&'a Node<T>> {
        search_queue(queue, target)
    }
}

/// Compares a node before its children are enqueued. A match leaves the rest of `queue` untouched.
fn search_queue<'a, T>(queue: &mut VecDeque<&'a Node<T>>, target: &T) -> Option<&'a Node<T>>
where
    T: PartialEq + Debug,
{
    while let Some(node) = queue.pop_front() {
        let value = node.get();
        trace!("dequeue {value:?}");
        trace!("{value:?} == {target:?} ({})", value == target);
        if value == target {
            return Some(node);
        }
        enqueue_children(queue, node);
    }
    debug!("{target:?} is not in this tree");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    // Layout of the tree
    //      9
    //    /   \
    //   4     20
    //  / \    / \
    // 1   6 15  170
    fn sample() -> BinarySearchTree<i32> {
        [9, 4, 20, 1, 6, 15, 170].into_iter().collect()
    }

    #[test_log::test]
    fn test_search() {
        let tree = sample();
        let bfs = BreadthFirstSearch::new(&tree);

        let found = bfs.search(&15).unwrap();
        assert_eq!(*found.get(), 15);
        // It's the node in the tree, not a copy
        assert!(std::ptr::eq(found, tree.lookup(&15).unwrap()));

        assert!(bfs.search(&152).is_none());
    }

    #[test_log::test]
    fn test_search_recursive_agrees() {
        let tree = sample();
        let bfs = BreadthFirstSearch::new(&tree);

        for target in [9, 4, 20, 1, 6, 15, 170, 0, 152] {
            let mut queue = bfs.queue();
            let recursive = bfs.search_recursive(&mut queue, &target);
            let iterative = bfs.search(&target);
            match (recursive, iterative) {
                (Some(recursive), Some(iterative)) => assert!(std::ptr::eq(recursive, iterative)),
                (recursive, iterative) => assert!(recursive.is_none() && iterative.is_none()),
            }
        }
    }

    #[test]
    fn test_search_recursive_leaves_queue() {
        let tree = sample();
        let bfs = BreadthFirstSearch::new(&tree);

        let mut queue = bfs.queue();
        assert!(bfs.search_recursive(&mut queue, &20).is_some());
        // 9, 4 and 20 have been dequeued, the children of 20 were never enqueued
        assert_eq!(queue.iter().map(|n| *n.get()).collect_vec(), &[1, 6]);

        let mut queue = bfs.queue();
        assert!(bfs.search_recursive(&mut queue, &152).is_none());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_empty_tree() {
        let tree = BinarySearchTree::<i32>::new();
        let bfs = BreadthFirstSearch::new(&tree);

        assert!(bfs.search(&1).is_none());
        let mut queue = bfs.queue();
        assert!(queue.is_empty());
        assert!(bfs.search_recursive(&mut queue, &1).is_none());
        assert_eq!(bfs.iter().count(), 0);
    }

    #[test]
    fn test_duplicates_first_in_breadth_first_order() {
        // 5 goes right of 3, the second 5 right of the first one
        //   3
        //    \
        //     5
        //    / \
        //   4   5
        let tree: BinarySearchTree<i32> = [3, 5, 5, 4].into_iter().collect();
        let bfs = BreadthFirstSearch::new(&tree);

        let found = bfs.search(&5).unwrap();
        assert!(std::ptr::eq(found, tree.root().unwrap().right().unwrap()));
    }

    /// Balanced tree holding `0..n`, built by inserting the middle of each range first
    fn balanced(n: i32) -> BinarySearchTree<i32> {
        let mut tree = BinarySearchTree::new();
        let mut ranges = VecDeque::from([(0, n - 1)]);
        while let Some((low, high)) = ranges.pop_front() {
            if low > high {
                continue;
            }
            let mid = low + (high - low) / 2;
            tree.insert(mid);
            ranges.push_back((low, mid - 1));
            ranges.push_back((mid + 1, high));
        }
        tree
    }

    #[test]
    fn test_large_tree() {
        let tree = balanced(100_000);
        assert_eq!(tree.len(), 100_000);
        assert_eq!(tree.height(), 17);
        let bfs = BreadthFirstSearch::new(&tree);

        // a missing value visits every node in both forms
        assert!(bfs.search(&-1).is_none());
        let mut queue = bfs.queue();
        assert!(bfs.search_recursive(&mut queue, &-1).is_none());
        assert!(queue.is_empty());

        let mut queue = bfs.queue();
        let iterative = bfs.search(&99_999).unwrap();
        let recursive = bfs.search_recursive(&mut queue, &99_999).unwrap();
        assert!(std::ptr::eq(iterative, recursive));
    }

    #[test]
    fn test_match_does_not_enqueue_children() {
        let tree = sample();
        let bfs = BreadthFirstSearch::new(&tree);

        // 4 is compared before its children 1 and 6 would be enqueued
        let mut queue = bfs.queue();
        assert!(bfs.search_recursive(&mut queue, &4).is_some());
        assert_eq!(queue.iter().map(|n| *n.get()).collect_vec(), &[20]);
    }

    #[test]
    fn test_iteration_order() {
        let tree = sample();
        let bfs = BreadthFirstSearch::new(&tree);
        assert_eq!(bfs.iter().map(|n| *n.get()).collect_vec(), &[9, 4, 20, 1, 6, 15, 170]);

        let tree: BinarySearchTree<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(
            BreadthFirstIterator::new(tree.root()).map(|n| *n.get()).collect_vec(),
            &[1, 2, 3]
        );
    }
}
