//! Persistent (immutable) red-black tree.
//!
//! This module provides [`RedBlackTree`], an immutable ordered set whose
//! updates return new versions that share every untouched subtree with the
//! version they were derived from.
//!
//! # Overview
//!
//! - O(log N) `find` / `contains`
//! - O(log N) `insert`
//! - O(1) `len`, `is_empty` and `clone`
//!
//! Inserting a value that is already present is a no-op: the returned tree
//! is the input tree, down to the root node.
//!
//! # Examples
//!
//! ```rust
//! use redblack::persistent::RedBlackTree;
//!
//! let tree: RedBlackTree<i32> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
//! assert_eq!(tree.in_order(), vec![&1, &3, &4, &5, &7, &8, &9]);
//!
//! // Structural sharing: the original tree is preserved
//! let updated = tree.insert(6);
//! assert!(!tree.contains(&6));
//! assert!(updated.contains(&6));
//! ```
//!
//! # Internal Structure
//!
//! A subtree is either `Empty` or a reference-counted node. Empty subtrees
//! count as black. After every public operation:
//!
//! 1. No red node has a red child
//! 2. Every path from the root to an empty subtree has the same number of
//!    black nodes
//! 3. The root is black
//! 4. In-order values are strictly increasing
//!
//! New values enter as red leaves. On the way back up, every rebuilt black
//! node is checked for a red child with a red child; each of the four
//! possible shapes is rewritten into a red node over two black nodes, which
//! keeps the black height unchanged. The root is recolored black last.

use super::ReferenceCounter;
use super::error::{IncomparableError, InvariantViolation};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use tracing::{debug, trace};

// =============================================================================
// Color Definition
// =============================================================================

/// The color of a red-black tree node.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Color {
    Red,
    Black,
}

// =============================================================================
// Node Definition
// =============================================================================

/// Internal node structure. Never mutated once linked into a subtree.
struct Node<T> {
    color: Color,
    left: Subtree<T>,
    value: T,
    right: Subtree<T>,
}

/// A possibly empty subtree.
enum Subtree<T> {
    Empty,
    Node(ReferenceCounter<Node<T>>),
}

impl<T> Clone for Subtree<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Node(node) => Self::Node(ReferenceCounter::clone(node)),
        }
    }
}

impl<T> Subtree<T> {
    /// Allocates a new node.
    fn node(color: Color, left: Self, value: T, right: Self) -> Self {
        Self::Node(ReferenceCounter::new(Node {
            color,
            left,
            value,
            right,
        }))
    }

    /// Creates a red node with two empty children.
    fn leaf(value: T) -> Self {
        Self::node(Color::Red, Self::Empty, value, Self::Empty)
    }

    /// Empty subtrees are black.
    fn color(&self) -> Color {
        match self {
            Self::Empty => Color::Black,
            Self::Node(node) => node.color,
        }
    }

    /// Returns the node if this subtree is rooted at a red node.
    fn as_red(&self) -> Option<&Node<T>> {
        match self {
            Self::Node(node) if node.color == Color::Red => Some(&**node),
            _ => None,
        }
    }
}

// =============================================================================
// RedBlackTree Definition
// =============================================================================

/// A persistent (immutable) ordered set based on a red-black tree.
///
/// Values must implement `Ord` for the primary API. Types with only a
/// partial order (such as `f64`) can use the `try_*` operations, which
/// report incomparable values as an [`IncomparableError`].
///
/// # Time Complexity
///
/// | Operation      | Complexity |
/// |----------------|------------|
/// | `new`          | O(1)       |
/// | `find`         | O(log N)   |
/// | `contains`     | O(log N)   |
/// | `insert`       | O(log N)   |
/// | `len`          | O(1)       |
/// | `clone`        | O(1)       |
/// | `in_order`     | O(N)       |
///
/// # Examples
///
/// ```rust
/// use redblack::persistent::RedBlackTree;
///
/// let tree = RedBlackTree::new().insert(2).insert(1).insert(3);
/// assert_eq!(tree.find(&2), Some(&2));
/// assert_eq!(tree.find(&100), None);
/// assert_eq!(format!("{tree}"), "{1, 2, 3}");
/// ```
pub struct RedBlackTree<T> {
    /// Root subtree
    root: Subtree<T>,
    /// Number of stored values
    length: usize,
}

impl<T> Clone for RedBlackTree<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            length: self.length,
        }
    }
}

impl<T> RedBlackTree<T> {
    /// Creates a new empty tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::persistent::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = RedBlackTree::new();
    /// assert!(tree.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root: Subtree::Empty,
            length: 0,
        }
    }

    /// Returns the canonical empty tree. Same as [`RedBlackTree::new`].
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self::new()
    }

    /// Returns the number of values in the tree.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the tree contains no values.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the number of nodes on the longest path from the root to an
    /// empty subtree.
    ///
    /// The red-black invariants bound this by `2 * log2(len + 1)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::persistent::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = (0..1000).collect();
    /// assert!(tree.height() <= 20);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        Self::height_of(&self.root)
    }

    fn height_of(subtree: &Subtree<T>) -> usize {
        match subtree {
            Subtree::Empty => 0,
            Subtree::Node(node) => {
                1 + Self::height_of(&node.left).max(Self::height_of(&node.right))
            }
        }
    }

    /// Returns the number of black nodes on the leftmost path from the root.
    ///
    /// While the invariants hold, every path from the root to an empty
    /// subtree has this many black nodes.
    #[must_use]
    pub fn black_height(&self) -> usize {
        let mut count = 0;
        let mut subtree = &self.root;
        while let Subtree::Node(node) = subtree {
            if node.color == Color::Black {
                count += 1;
            }
            subtree = &node.left;
        }
        count
    }

    /// Returns `true` if both trees are rooted at the same node.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::persistent::RedBlackTree;
    ///
    /// let tree = RedBlackTree::new().insert(1).insert(2);
    /// assert!(tree.ptr_eq(&tree.insert(2)));
    /// assert!(!tree.ptr_eq(&tree.insert(3)));
    /// ```
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.root, &other.root) {
            (Subtree::Empty, Subtree::Empty) => true,
            (Subtree::Node(left), Subtree::Node(right)) => ReferenceCounter::ptr_eq(left, right),
            _ => false,
        }
    }

    /// Returns the values in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::persistent::RedBlackTree;
    ///
    /// let tree = RedBlackTree::new().insert(3).insert(1).insert(2);
    /// assert_eq!(tree.in_order(), vec![&1, &2, &3]);
    /// ```
    #[must_use]
    pub fn in_order(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.length);
        Self::collect_in_order(&self.root, &mut values);
        values
    }

    fn collect_in_order<'a>(subtree: &'a Subtree<T>, values: &mut Vec<&'a T>) {
        if let Subtree::Node(node) = subtree {
            Self::collect_in_order(&node.left, values);
            values.push(&node.value);
            Self::collect_in_order(&node.right, values);
        }
    }

    /// Binary search descent shared by the `Ord` and `PartialOrd` lookups.
    fn find_with<'a, Q, E, C>(
        mut subtree: &'a Subtree<T>,
        query: &Q,
        mut compare: C,
    ) -> Result<Option<&'a T>, E>
    where
        Q: ?Sized,
        C: FnMut(&Q, &T) -> Result<Ordering, E>,
    {
        while let Subtree::Node(node) = subtree {
            match compare(query, &node.value)? {
                Ordering::Less => subtree = &node.left,
                Ordering::Greater => subtree = &node.right,
                Ordering::Equal => return Ok(Some(&node.value)),
            }
        }
        Ok(None)
    }

    /// Checks colors and black heights below `subtree`, returning its black
    /// height.
    fn check_colors(subtree: &Subtree<T>, depth: usize) -> Result<usize, InvariantViolation> {
        let Subtree::Node(node) = subtree else {
            return Ok(0);
        };
        if node.color == Color::Red
            && (node.left.color() == Color::Red || node.right.color() == Color::Red)
        {
            return Err(InvariantViolation::RedRedViolation { depth });
        }
        let left = Self::check_colors(&node.left, depth + 1)?;
        let right = Self::check_colors(&node.right, depth + 1)?;
        if left != right {
            return Err(InvariantViolation::BlackHeightMismatch { depth, left, right });
        }
        Ok(left + usize::from(node.color == Color::Black))
    }
}

impl<T: Clone> RedBlackTree<T> {
    /// Inserts `value` using `compare`, returning the original tree when an
    /// equal value is already present.
    fn insert_with<E, C>(&self, value: T, mut compare: C) -> Result<Self, E>
    where
        C: FnMut(&T, &T) -> Result<Ordering, E>,
    {
        match Self::insert_into(&self.root, value, &mut compare)? {
            Some(root) => Ok(Self {
                root: Self::blacken(root),
                length: self.length + 1,
            }),
            None => Ok(self.clone()),
        }
    }

    /// Recursive helper for insert.
    /// Returns `None` when an equal value was found and nothing changed.
    fn insert_into<E, C>(
        subtree: &Subtree<T>,
        value: T,
        compare: &mut C,
    ) -> Result<Option<Subtree<T>>, E>
    where
        C: FnMut(&T, &T) -> Result<Ordering, E>,
    {
        let Subtree::Node(node) = subtree else {
            return Ok(Some(Subtree::leaf(value)));
        };
        let rebuilt = match compare(&value, &node.value)? {
            Ordering::Less => Self::insert_into(&node.left, value, compare)?.map(|left| {
                Self::balance(node.color, left, node.value.clone(), node.right.clone())
            }),
            Ordering::Greater => Self::insert_into(&node.right, value, compare)?.map(|right| {
                Self::balance(node.color, node.left.clone(), node.value.clone(), right)
            }),
            Ordering::Equal => {
                trace!("value already present, tree unchanged");
                None
            }
        };
        Ok(rebuilt)
    }

    /// Builds a node, repairing a red-red violation directly below it.
    ///
    /// Only black nodes are repaired. The four shapes are tested in the
    /// order left-left, left-right, right-right, right-left.
    fn balance(color: Color, left: Subtree<T>, value: T, right: Subtree<T>) -> Subtree<T> {
        if color == Color::Black {
            if let Some(child) = left.as_red()
                && let Some(grandchild) = child.left.as_red()
            {
                trace!(case = "left-left", "repairing red-red violation");
                return Self::rotate(
                    grandchild.left.clone(),
                    grandchild.value.clone(),
                    grandchild.right.clone(),
                    child.value.clone(),
                    child.right.clone(),
                    value,
                    right,
                );
            }

            if let Some(child) = left.as_red()
                && let Some(grandchild) = child.right.as_red()
            {
                trace!(case = "left-right", "repairing red-red violation");
                return Self::rotate(
                    child.left.clone(),
                    child.value.clone(),
                    grandchild.left.clone(),
                    grandchild.value.clone(),
                    grandchild.right.clone(),
                    value,
                    right,
                );
            }

            if let Some(child) = right.as_red()
                && let Some(grandchild) = child.right.as_red()
            {
                trace!(case = "right-right", "repairing red-red violation");
                return Self::rotate(
                    left,
                    value,
                    child.left.clone(),
                    child.value.clone(),
                    grandchild.left.clone(),
                    grandchild.value.clone(),
                    grandchild.right.clone(),
                );
            }

            if let Some(child) = right.as_red()
                && let Some(grandchild) = child.left.as_red()
            {
                trace!(case = "right-left", "repairing red-red violation");
                return Self::rotate(
                    left,
                    value,
                    grandchild.left.clone(),
                    grandchild.value.clone(),
                    grandchild.right.clone(),
                    child.value.clone(),
                    child.right.clone(),
                );
            }
        }

        Subtree::node(color, left, value, right)
    }

    /// Builds `Red(middle)` over `Black(outer_left, low, inner_left)` and
    /// `Black(inner_right, high, outer_right)`.
    fn rotate(
        outer_left: Subtree<T>,
        low: T,
        inner_left: Subtree<T>,
        middle: T,
        inner_right: Subtree<T>,
        high: T,
        outer_right: Subtree<T>,
    ) -> Subtree<T> {
        Subtree::node(
            Color::Red,
            Subtree::node(Color::Black, outer_left, low, inner_left),
            middle,
            Subtree::node(Color::Black, inner_right, high, outer_right),
        )
    }

    /// Recolors a red root black.
    fn blacken(root: Subtree<T>) -> Subtree<T> {
        match root {
            Subtree::Node(node) if node.color == Color::Red => Subtree::node(
                Color::Black,
                node.left.clone(),
                node.value.clone(),
                node.right.clone(),
            ),
            other => other,
        }
    }
}

impl<T: Ord> RedBlackTree<T> {
    /// Returns a reference to the stored value equal to `value`.
    ///
    /// The query may be any borrowed form of the value type, but the
    /// ordering on the borrowed form must match the ordering on the value
    /// type. This lets a key-only query locate a richer stored value.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::persistent::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = (0..10).collect();
    /// assert_eq!(tree.find(&9), Some(&9));
    /// assert_eq!(tree.find(&100), None);
    ///
    /// // Can use &str to look up String values
    /// let names = RedBlackTree::new().insert("alice".to_string());
    /// assert_eq!(names.find("alice"), Some(&"alice".to_string()));
    /// ```
    #[must_use]
    pub fn find<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let Ok(found) = Self::find_with(&self.root, value, |query: &Q, stored: &T| {
            Ok::<_, Infallible>(query.cmp(stored.borrow()))
        });
        found
    }

    /// Returns `true` if the tree contains a value equal to `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::persistent::RedBlackTree;
    ///
    /// let tree = RedBlackTree::new().insert(1);
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&2));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(value).is_some()
    }
}

impl<T: Clone + Ord> RedBlackTree<T> {
    /// Creates a tree containing a single value.
    #[inline]
    #[must_use]
    pub fn singleton(value: T) -> Self {
        Self::new().insert(value)
    }

    /// Inserts a value into the tree.
    ///
    /// If the tree already contains an equal value, the original tree is
    /// returned unchanged (the stored value is kept).
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::persistent::RedBlackTree;
    ///
    /// let tree1 = RedBlackTree::new().insert(1);
    /// let tree2 = tree1.insert(2);
    ///
    /// assert!(!tree1.contains(&2)); // Original unchanged
    /// assert!(tree2.contains(&2));  // New version
    /// assert_eq!(tree2.insert(2).len(), 2);
    /// ```
    #[must_use]
    pub fn insert(&self, value: T) -> Self {
        let Ok(tree) = self.insert_with(value, |query, stored| {
            Ok::<_, Infallible>(query.cmp(stored))
        });
        tree
    }
}

// =============================================================================
// Partially Ordered Values
// =============================================================================

impl<T: PartialOrd> RedBlackTree<T> {
    /// Verifies the red-black and ordering invariants.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found. Trees built only
    /// through the public API never fail this check. Adjacent values that
    /// are not strictly ordered, including incomparable ones, are reported
    /// as [`InvariantViolation::OutOfOrder`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::persistent::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = (0..100).rev().collect();
    /// assert_eq!(tree.check_invariants(), Ok(()));
    /// ```
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        if self.root.color() == Color::Red {
            return Err(InvariantViolation::RedRoot);
        }
        Self::check_colors(&self.root, 0)?;

        let values = self.in_order();
        if let Some(position) = values
            .windows(2)
            .position(|pair| pair[0].partial_cmp(pair[1]) != Some(Ordering::Less))
        {
            return Err(InvariantViolation::OutOfOrder {
                position: position + 1,
            });
        }
        if values.len() != self.length {
            return Err(InvariantViolation::LengthMismatch {
                recorded: self.length,
                counted: values.len(),
            });
        }
        Ok(())
    }

    /// Compares two values, turning a missing order into an error.
    fn partial_compare(
        query: &T,
        stored: &T,
        operation: &'static str,
    ) -> Result<Ordering, IncomparableError> {
        query.partial_cmp(stored).ok_or_else(|| {
            debug!(operation, "rejected incomparable values");
            IncomparableError { operation }
        })
    }

    /// Rejects values with no order relative to themselves, such as `NaN`.
    fn ensure_comparable(value: &T, operation: &'static str) -> Result<(), IncomparableError> {
        Self::partial_compare(value, value, operation).map(|_| ())
    }

    /// Looks up a value in a tree of partially ordered values.
    ///
    /// # Errors
    ///
    /// Returns [`IncomparableError`] if `value` cannot be compared with
    /// itself or with a value met during the descent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::persistent::RedBlackTree;
    ///
    /// let tree = RedBlackTree::new().try_insert(0.5).unwrap();
    /// assert_eq!(tree.try_find(&0.5), Ok(Some(&0.5)));
    /// assert_eq!(tree.try_find(&1.5), Ok(None));
    /// assert!(tree.try_find(&f64::NAN).is_err());
    /// ```
    pub fn try_find(&self, value: &T) -> Result<Option<&T>, IncomparableError> {
        const OPERATION: &str = "try_find";
        Self::ensure_comparable(value, OPERATION)?;
        Self::find_with(&self.root, value, |query, stored| {
            Self::partial_compare(query, stored, OPERATION)
        })
    }

    /// Membership test for partially ordered values.
    ///
    /// # Errors
    ///
    /// Returns [`IncomparableError`] under the same conditions as
    /// [`RedBlackTree::try_find`].
    pub fn try_contains(&self, value: &T) -> Result<bool, IncomparableError> {
        const OPERATION: &str = "try_contains";
        Self::ensure_comparable(value, OPERATION)?;
        Self::find_with(&self.root, value, |query, stored| {
            Self::partial_compare(query, stored, OPERATION)
        })
        .map(|found| found.is_some())
    }
}

impl<T: Clone + PartialOrd> RedBlackTree<T> {
    /// Inserts a partially ordered value.
    ///
    /// On failure the receiver is untouched, as with every operation on
    /// this type.
    ///
    /// # Errors
    ///
    /// Returns [`IncomparableError`] if `value` cannot be compared with
    /// itself or with a value met during the descent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use redblack::persistent::RedBlackTree;
    ///
    /// let tree = RedBlackTree::new().try_insert(2.0).unwrap();
    /// let tree = tree.try_insert(1.0).unwrap();
    /// assert_eq!(tree.len(), 2);
    /// assert!(tree.try_insert(f64::NAN).is_err());
    /// ```
    pub fn try_insert(&self, value: T) -> Result<Self, IncomparableError> {
        const OPERATION: &str = "try_insert";
        Self::ensure_comparable(&value, OPERATION)?;
        self.insert_with(value, |query, stored| {
            Self::partial_compare(query, stored, OPERATION)
        })
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for RedBlackTree<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Ord> FromIterator<T> for RedBlackTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |tree, value| tree.insert(value))
    }
}

impl<T: PartialEq> PartialEq for RedBlackTree<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.length != other.length {
            return false;
        }
        self.ptr_eq(other) || self.in_order() == other.in_order()
    }
}

impl<T: Eq> Eq for RedBlackTree<T> {}

/// Hashes the length followed by every value in ascending order, so trees
/// holding the same values hash equally regardless of their shape.
impl<T: Hash> Hash for RedBlackTree<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for value in self.in_order() {
            value.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for RedBlackTree<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.in_order()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for RedBlackTree<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for value in self.in_order() {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{value}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T> serde::Serialize for RedBlackTree<T>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut sequence = serializer.serialize_seq(Some(self.len()))?;
        for value in self.in_order() {
            sequence.serialize_element(value)?;
        }
        sequence.end()
    }
}

#[cfg(feature = "serde")]
struct RedBlackTreeVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for RedBlackTreeVisitor<T>
where
    T: serde::Deserialize<'de> + Clone + Ord,
{
    type Value = RedBlackTree<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut tree = RedBlackTree::new();
        while let Some(value) = access.next_element()? {
            tree = tree.insert(value);
        }
        Ok(tree)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for RedBlackTree<T>
where
    T: serde::Deserialize<'de> + Clone + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(RedBlackTreeVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================


// =============================================================================
// Send + Sync Tests (arc feature only)
// =============================================================================

#[cfg(all(test, feature = "arc"))]
mod send_sync_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_red_black_tree_send_sync() {
        fn is_send_sync<T: Send + Sync>() {}
        is_send_sync::<RedBlackTree<i32>>();
        is_send_sync::<RedBlackTree<String>>();
    }
}

// =============================================================================
// Multithread Tests (arc feature only)
// =============================================================================
