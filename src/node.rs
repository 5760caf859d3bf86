use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

/// A handle to a single vertex of a tree. A vertex has a value and up to two
/// children.
///
/// Cloning a `Node` does not copy the vertex: both handles refer to the same
/// storage, so a child attached through one is seen through the other.
///
/// # Examples
///
/// ```
/// use unbalanced_bst::{BinarySearchTree, Node};
///
/// let node = Node::new(5);
/// let mut tree = BinarySearchTree::from_node(node.clone());
/// tree.insert(3).unwrap();
///
/// // `node` sees the child inserted through `tree`.
/// assert_eq!(node.left().map(|n| n.value()), Some(3));
/// ```
pub struct Node(Rc<RefCell<Vertex>>);

struct Vertex {
    value: i64,
    left: Option<Node>,
    right: Option<Node>,
}

/// Dropping a long chain recursively would overflow the stack, and an unbalanced tree is easily a
/// long chain. Children are unlinked onto a heap stack instead.
impl Drop for Vertex {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());
        while let Some(Node(rc)) = stack.pop() {
            // A vertex still shared by another handle stays alive with its children.
            if let Ok(cell) = Rc::try_unwrap(rc) {
                let mut vertex = cell.into_inner();
                stack.extend(vertex.left.take());
                stack.extend(vertex.right.take());
            }
        }
    }
}

/// Manual implementation of `Clone` so cloning is visibly a reference count bump.
impl Clone for Node {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

/// Pieces of `Debug` output still to be written, popped from the back.
enum Pending {
    Text(&'static str),
    Child(Option<Node>),
    Vertex(Node),
}

/// Prints the same shape `#[derive(Debug)]` would, on one line, but walks the tree with a heap
/// stack so long chains do not overflow the call stack.
impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![Pending::Vertex(self.clone())];
        while let Some(pending) = stack.pop() {
            match pending {
                Pending::Text(text) => f.write_str(text)?,
                Pending::Child(None) => f.write_str("None")?,
                Pending::Child(Some(node)) => {
                    f.write_str("Some(")?;
                    stack.push(Pending::Text(")"));
                    stack.push(Pending::Vertex(node));
                }
                Pending::Vertex(node) => {
                    write!(f, "Node {{ value: {}, left: ", node.value())?;
                    stack.push(Pending::Text(" }"));
                    stack.push(Pending::Child(node.right()));
                    stack.push(Pending::Text(", right: "));
                    stack.push(Pending::Child(node.left()));
                }
            }
        }
        Ok(())
    }
}

impl Node {
    /// Construct a new `Node` with the given `value` and no children.
    pub fn new(value: i64) -> Self {
        Self(Rc::new(RefCell::new(Vertex {
            value,
            left: None,
            right: None,
        })))
    }

    /// The value stored in this node.
    pub fn value(&self) -> i64 {
        self.0.borrow().value
    }

    /// A handle to the left child, if there is one.
    pub fn left(&self) -> Option<Node> {
        self.0.borrow().left.clone()
    }

    /// A handle to the right child, if there is one.
    pub fn right(&self) -> Option<Node> {
        self.0.borrow().right.clone()
    }

    /// Returns `true` when both handles point at the same vertex.
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Rc::ptr_eq(&this.0, &other.0)
    }

    /// The smallest value reachable from this node, found by following left
    /// children until there are none.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new(8);
    /// for value in [3, 10, 1, 6, 14, 4, 7, 13] {
    ///     tree.insert(value).unwrap();
    /// }
    ///
    /// // The successor of the root: the minimum of its right subtree.
    /// let right = tree.root().right().unwrap();
    /// assert_eq!(right.min(), 10);
    /// assert_eq!(tree.root().left().unwrap().min(), 1);
    /// ```
    pub fn min(&self) -> i64 {
        self.outermost(Node::left)
    }

    /// The largest value reachable from this node, found by following right
    /// children until there are none.
    pub fn max(&self) -> i64 {
        self.outermost(Node::right)
    }

    /// Follows `next` from this node until it returns `None` and reports the
    /// value of the last node visited.
    fn outermost(&self, next: fn(&Node) -> Option<Node>) -> i64 {
        let mut node = self.clone();
        while let Some(child) = next(&node) {
            node = child;
        }
        node.value()
    }

    /// The child on the side `ordering` points to: `Less` is left and
    /// `Greater` is right. `Equal` has no child.
    pub(crate) fn child(&self, ordering: Ordering) -> Option<Node> {
        match ordering {
            Ordering::Less => self.left(),
            Ordering::Equal => None,
            Ordering::Greater => self.right(),
        }
    }

    /// Attaches `child` on the side `ordering` points to.
    ///
    /// ## Panics
    ///
    /// When `ordering` is `Equal` or the slot is already taken. Callers only attach
    /// after their descent found the slot empty.
    pub(crate) fn attach(&self, ordering: Ordering, child: Node) {
        let mut vertex = self.0.borrow_mut();
        let slot = match ordering {
            Ordering::Less => &mut vertex.left,
            Ordering::Greater => &mut vertex.right,
            Ordering::Equal => unreachable!("A value equal to its parent has no side."),
        };
        assert!(slot.is_none(), "Attaching over an existing child.");
        *slot = Some(child);
    }
}
