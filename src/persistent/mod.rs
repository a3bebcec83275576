//! Persistent (immutable) data structures.
//!
//! This module provides [`RedBlackTree`], a persistent ordered set based on
//! a red-black tree.
//!
//! # Structural Sharing
//!
//! Insertion rebuilds only the path from the root to the new value. Every
//! other subtree is shared between the old and the new version, and no
//! node is modified once it is reachable from a published tree.
//!
//! # Examples
//!
//! ```rust
//! use redblack::persistent::RedBlackTree;
//!
//! let tree = RedBlackTree::new().insert(3).insert(1).insert(2);
//! assert!(tree.contains(&1));
//!
//! // Structural sharing: the original tree is preserved
//! let extended = tree.insert(0);
//! assert_eq!(tree.len(), 3);     // Original unchanged
//! assert_eq!(extended.len(), 4); // New tree
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod error;
mod red_black_tree;

pub use error::IncomparableError;
pub use error::InvariantViolation;
pub use red_black_tree::RedBlackTree;

// =============================================================================
// Tests
// =============================================================================
