//! Error types for the persistent red-black tree.
//!
//! Lookups never fail: a missing value is reported as `None`. The types in
//! this module cover the two remaining failure modes:
//!
//! - [`IncomparableError`]: a fallible operation on a partially ordered
//!   element type met two values with no defined order.
//! - [`InvariantViolation`]: [`RedBlackTree::check_invariants`] found a
//!   broken red-black or ordering invariant.
//!
//! [`RedBlackTree::check_invariants`]: super::RedBlackTree::check_invariants

use thiserror::Error;

/// Two values could not be ordered relative to each other.
///
/// Raised by the `try_*` operations of [`RedBlackTree`] when
/// [`PartialOrd::partial_cmp`] returns `None`, for example when a `NaN`
/// is involved.
///
/// # Examples
///
/// ```rust
/// use redblack::persistent::{IncomparableError, RedBlackTree};
///
/// let tree = RedBlackTree::new().try_insert(1.5).unwrap();
/// let error = tree.try_insert(f64::NAN).unwrap_err();
/// assert_eq!(error, IncomparableError { operation: "try_insert" });
/// assert_eq!(
///     format!("{error}"),
///     "try_insert: values are not mutually comparable"
/// );
/// ```
///
/// [`RedBlackTree`]: super::RedBlackTree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{operation}: values are not mutually comparable")]
pub struct IncomparableError {
    /// The name of the operation that attempted the comparison.
    pub operation: &'static str,
}

/// A structural invariant of a red-black tree does not hold.
///
/// Depths are counted from the root, which is at depth 0.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// The root node is red.
    #[error("root node is red")]
    RedRoot,
    /// A red node has a red child.
    #[error("red node at depth {depth} has a red child")]
    RedRedViolation {
        /// Depth of the red parent.
        depth: usize,
    },
    /// The two subtrees of a node have different black heights.
    #[error("black height mismatch at depth {depth}: left is {left}, right is {right}")]
    BlackHeightMismatch {
        /// Depth of the node whose subtrees disagree.
        depth: usize,
        /// Black height of the left subtree.
        left: usize,
        /// Black height of the right subtree.
        right: usize,
    },
    /// In-order values are not strictly increasing.
    #[error("in-order values are not strictly increasing at position {position}")]
    OutOfOrder {
        /// Position in the in-order sequence of the first offending value.
        position: usize,
    },
    /// The recorded element count disagrees with the number of nodes.
    #[error("recorded length {recorded} differs from node count {counted}")]
    LengthMismatch {
        /// The length stored in the tree.
        recorded: usize,
        /// The number of nodes actually reachable from the root.
        counted: usize,
    },
}
