use std::collections::VecDeque;

use crate::Node;

/// An iterator over the values of a tree in level order: depth by depth, left
/// to right within a depth.
///
/// Created by [`BinarySearchTree::level_order`][crate::BinarySearchTree::level_order].
/// The iterator holds handles to the nodes still waiting in its queue, so it
/// observes the tree as it is when each node is dequeued.
#[derive(Debug)]
pub struct LevelOrder {
    queue: VecDeque<Node>,
}

impl LevelOrder {
    pub(crate) fn new(root: Node) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(root);
        Self { queue }
    }
}

impl Iterator for LevelOrder {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(node.value())
    }
}

impl std::iter::FusedIterator for LevelOrder {}
