//! The tree itself. A [`BinarySearchTree`] always has a root, so it is built
//! from a first value (or an existing [`Node`]) and grows with
//! [`insert`][BinarySearchTree::insert].
//!
//! # Examples
//!
//! ```
//! use unbalanced_bst::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::new(50);
//! for value in [30, 70, 40, 60, 20, 80] {
//!     tree.insert(value).unwrap();
//! }
//!
//! // `search` returns a view of the subtree, not a copy.
//! let mut subtree = tree.search(30).unwrap();
//! assert_eq!(subtree.level_order().collect::<Vec<_>>(), [30, 20, 40]);
//!
//! subtree.insert(35).unwrap();
//! assert_eq!(tree.node_height(35), Ok(3));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::io::{self, Write};

use crate::{Error, LevelOrder, Node, Result};

/// An unbalanced Binary Search Tree of unique `i64` values. This can be used
/// for inserting values, finding how deep a value sits, extracting the
/// subtree under a value, and walking the tree.
#[derive(Clone, Debug)]
pub struct BinarySearchTree {
    root: Node,
}

impl From<Node> for BinarySearchTree {
    fn from(node: Node) -> Self {
        Self::from_node(node)
    }
}

/// Renders the tree in level order as `value->value->...->`.
impl fmt::Display for BinarySearchTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.level_order() {
            write!(f, "{}->", value)?;
        }
        Ok(())
    }
}

impl BinarySearchTree {
    /// Generates a new tree holding only `value`.
    pub fn new(value: i64) -> Self {
        Self {
            root: Node::new(value),
        }
    }

    /// Wraps an existing node as the root of a tree. The node is shared, not
    /// copied: changes made through the tree are visible through `node` and
    /// through every other tree sharing it.
    pub fn from_node(node: Node) -> Self {
        Self { root: node }
    }

    /// A handle to the root node.
    pub fn root(&self) -> Node {
        self.root.clone()
    }

    /// Inserts `value` as a new leaf. Values smaller than a node go to its
    /// left, larger ones to its right. The tree is never rebalanced.
    ///
    /// Returns [`Error::Duplicate`] and leaves the tree untouched when `value`
    /// is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::{BinarySearchTree, Error};
    ///
    /// let mut tree = BinarySearchTree::new(2);
    /// tree.insert(1).unwrap();
    /// tree.insert(3).unwrap();
    ///
    /// assert_eq!(tree.root().left().unwrap().value(), 1);
    /// assert_eq!(tree.root().right().unwrap().value(), 3);
    /// assert_eq!(tree.insert(3), Err(Error::Duplicate(3)));
    /// ```
    pub fn insert(&mut self, value: i64) -> Result<()> {
        let mut parent = self.root();
        loop {
            let ordering = value.cmp(&parent.value());
            if ordering == Ordering::Equal {
                return Err(Error::Duplicate(value));
            }
            match parent.child(ordering) {
                Some(child) => parent = child,
                None => {
                    parent.attach(ordering, Node::new(value));
                    return Ok(());
                }
            }
        }
    }

    /// Returns how many edges separate the root from the node holding
    /// `value`. The root itself is at height 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::{BinarySearchTree, Error};
    ///
    /// let mut tree = BinarySearchTree::new(50);
    /// tree.insert(30).unwrap();
    /// tree.insert(40).unwrap();
    ///
    /// assert_eq!(tree.node_height(50), Ok(0));
    /// assert_eq!(tree.node_height(30), Ok(1));
    /// assert_eq!(tree.node_height(40), Ok(2));
    /// assert_eq!(tree.node_height(-100), Err(Error::NotFound(-100)));
    /// ```
    pub fn node_height(&self, value: i64) -> Result<usize> {
        self.descend(value).map(|(_, height)| height)
    }

    /// Finds the node holding `value` and returns the subtree rooted there.
    /// The subtree shares its nodes with this tree.
    pub fn search(&self, value: i64) -> Result<Self> {
        self.descend(value).map(|(node, _)| Self::from_node(node))
    }

    /// Whether `value` is stored in the tree.
    pub fn contains(&self, value: i64) -> bool {
        self.descend(value).is_ok()
    }

    /// Always `false`: a tree is built from its root value and nothing
    /// removes nodes, so it holds at least one.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Counts the nodes in the tree.
    pub fn len(&self) -> usize {
        self.level_order().count()
    }

    /// The values of the tree in level order. See [`LevelOrder`].
    pub fn level_order(&self) -> LevelOrder {
        LevelOrder::new(self.root())
    }

    /// Writes every value followed by `->` to `writer` in level order.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new(2);
    /// tree.insert(3).unwrap();
    /// tree.insert(1).unwrap();
    ///
    /// let mut out = Vec::new();
    /// tree.write_level_order(&mut out).unwrap();
    /// assert_eq!(out, b"2->1->3->");
    /// ```
    pub fn write_level_order<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for value in self.level_order() {
            write!(writer, "{}->", value)?;
        }
        writer.flush()
    }

    /// Prints the tree in level order to standard output.
    pub fn level_order_traversal(&self) -> io::Result<()> {
        self.write_level_order(io::stdout().lock())
    }

    /// The largest value in the tree: the value of the rightmost node.
    pub fn max(&self) -> i64 {
        self.root.max()
    }

    /// The smallest value in the tree: the value of the leftmost node. Use
    /// [`Node::min`] to start from somewhere other than the root.
    pub fn min(&self) -> i64 {
        self.root.min()
    }

    /// Walks from the root towards `value`, returning the node holding it and
    /// the number of edges walked.
    fn descend(&self, value: i64) -> Result<(Node, usize)> {
        let mut node = self.root();
        let mut height = 0;
        loop {
            let ordering = value.cmp(&node.value());
            if ordering == Ordering::Equal {
                return Ok((node, height));
            }
            node = node.child(ordering).ok_or(Error::NotFound(value))?;
            height += 1;
        }
    }
}
