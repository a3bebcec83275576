//! # redblack
//!
//! A persistent red-black tree for Rust.
//!
//! ## Overview
//!
//! [`RedBlackTree`](persistent::RedBlackTree) is an immutable ordered set.
//! Insertion returns a new tree and leaves the old one valid; the two share
//! every subtree the insertion did not touch.
//!
//! - **Lookup**: `find` and `contains` in O(log N)
//! - **Insertion**: `insert` in O(log N), duplicates are ignored
//! - **Partial orders**: `try_insert`, `try_find` and `try_contains` report
//!   incomparable values (such as `NaN`) as typed errors
//! - **Diagnostics**: `check_invariants`, `height` and `black_height`
//!
//! ## Feature Flags
//!
//! - `arc`: Share nodes through `Arc` instead of `Rc`, making trees
//!   `Send + Sync`
//! - `serde`: Serialize trees as ascending sequences
//! - `full`: Enable all features
//!
//! ## Logging
//!
//! Rebalancing steps and rejected comparisons are emitted as `tracing`
//! events at `trace` and `debug` level. No subscriber is installed by this
//! crate.
//!
//! ## Example
//!
//! ```rust
//! use redblack::prelude::*;
//!
//! let tree: RedBlackTree<i32> = (0..10).collect();
//! assert_eq!(tree.find(&9), Some(&9));
//! assert_eq!(tree.find(&100), None);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use redblack::prelude::*;
/// ```
pub mod prelude {
    pub use crate::persistent::*;
}

pub mod persistent;
