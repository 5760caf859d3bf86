//! An unbalanced Binary Search Tree (BST) over `i64` values, mostly for
//! educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree stores values in `Node`s. Every `Node` holds a value
//! and may have a left and a right child `Node`. The most important invariants
//! of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a value takes `O(height)`. This tree never rebalances itself,
//! so inserting values in ascending order produces a tree that is really a
//! linked list.
//!
//! Every operation walks the tree with a loop rather than recursion, and the
//! level-order traversal uses an explicit queue.
//!
//! ## Shared subtrees
//!
//! [`Node`] is a handle. Cloning it (or calling [`BinarySearchTree::search`])
//! never copies any part of the tree - both handles point at the same storage,
//! so inserting through a subtree is visible through the whole tree.
//!
//! # Examples
//!
//! ```
//! use unbalanced_bst::{BinarySearchTree, Error};
//!
//! let mut tree = BinarySearchTree::new(50);
//! for value in [30, 70, 40, 60, 20, 80] {
//!     tree.insert(value)?;
//! }
//!
//! assert_eq!(tree.node_height(40)?, 2);
//! assert_eq!(tree.search(-100).unwrap_err(), Error::NotFound(-100));
//! assert_eq!(tree.level_order().collect::<Vec<_>>(), [50, 30, 70, 20, 40, 60, 80]);
//! assert_eq!((tree.min(), tree.max()), (20, 80));
//! # Ok::<(), Error>(())
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod level_order;
mod node;
mod tree;


pub use error::{Error, Result};
pub use level_order::LevelOrder;
pub use node::Node;
pub use tree::BinarySearchTree;
