/// Errors returned by [`BinarySearchTree`][crate::BinarySearchTree] operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The descent reached an empty child slot without meeting the value.
    #[error("value {0} not found in tree")]
    NotFound(i64),
    /// The value is already stored in the tree. The tree was left unchanged.
    #[error("value {0} is already in the tree")]
    Duplicate(i64),
}

/// Shorthand for results of tree operations.
pub type Result<T> = std::result::Result<T, Error>;
