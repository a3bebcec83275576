//! Unit tests for RedBlackTree.

use redblack::persistent::{IncomparableError, RedBlackTree};
use rstest::{fixture, rstest};
use std::cmp::Ordering;
use std::collections::HashSet;

#[fixture]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// =============================================================================
// Basic Construction Tests
// =============================================================================

#[rstest]
fn test_new_creates_empty_tree() {
    let tree: RedBlackTree<i32> = RedBlackTree::new();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
}

#[rstest]
fn test_empty_and_default_equal_new() {
    let empty: RedBlackTree<i32> = RedBlackTree::empty();
    let default: RedBlackTree<i32> = RedBlackTree::default();
    assert_eq!(empty, RedBlackTree::new());
    assert_eq!(default, RedBlackTree::new());
    assert!(empty.ptr_eq(&default));
}

#[rstest]
fn test_singleton_creates_tree_with_one_value() {
    let tree = RedBlackTree::singleton(42);
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.find(&42), Some(&42));
    assert_eq!(tree.check_invariants(), Ok(()));
}

// =============================================================================
// Insert and Find Tests
// =============================================================================

#[rstest]
fn test_find_after_inserting_zero_through_nine(#[from(init_tracing)] _tracing: ()) {
    let tree: RedBlackTree<i32> = (0..10).collect();
    assert_eq!(tree.find(&9), Some(&9));
    assert_eq!(tree.find(&100), None);
}

#[rstest]
#[case(vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9])]
#[case(vec![9, 8, 7, 6, 5, 4, 3, 2, 1, 0])]
#[case(vec![5, 0, 9, 1, 8, 2, 7, 3, 6, 4])]
#[case(vec![3, 7, 1, 9, 0, 4, 6, 2, 8, 5])]
fn test_find_is_independent_of_insertion_order(#[case] order: Vec<i32>) {
    let tree: RedBlackTree<i32> = order.into_iter().collect();
    assert_eq!(tree.len(), 10);
    assert_eq!(tree.find(&9), Some(&9));
    assert_eq!(tree.find(&100), None);
    let expected: Vec<i32> = (0..10).collect();
    assert_eq!(tree.in_order(), expected.iter().collect::<Vec<_>>());
}

#[rstest]
fn test_in_order_of_small_set() {
    let tree: RedBlackTree<i32> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    assert_eq!(tree.in_order(), vec![&1, &3, &4, &5, &7, &8, &9]);
}

#[rstest]
fn test_find_on_empty_tree_returns_none() {
    let tree: RedBlackTree<i32> = RedBlackTree::new();
    assert_eq!(tree.find(&1), None);
    assert!(!tree.contains(&1));
}

#[rstest]
fn test_contains_existing_and_missing() {
    let tree: RedBlackTree<i32> = [10, 20, 30].into_iter().collect();
    assert!(tree.contains(&10));
    assert!(tree.contains(&30));
    assert!(!tree.contains(&15));
    assert!(!tree.contains(&40));
}

#[rstest]
fn test_find_with_borrowed_query() {
    let tree: RedBlackTree<String> = ["pear", "apple", "fig"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(tree.find("fig"), Some(&"fig".to_string()));
    assert!(tree.contains("apple"));
    assert!(!tree.contains("plum"));
}

/// A record ordered by its key only.
#[derive(Debug, Clone)]
struct Entry {
    key: u32,
    payload: &'static str,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

#[rstest]
fn test_find_returns_stored_value_for_key_only_query() {
    let tree = RedBlackTree::new()
        .insert(Entry {
            key: 1,
            payload: "one",
        })
        .insert(Entry {
            key: 2,
            payload: "two",
        });
    let query = Entry {
        key: 2,
        payload: "",
    };
    assert_eq!(tree.find(&query).map(|entry| entry.payload), Some("two"));
}

#[rstest]
fn test_duplicate_insert_keeps_first_stored_value() {
    let tree = RedBlackTree::new().insert(Entry {
        key: 7,
        payload: "first",
    });
    let again = tree.insert(Entry {
        key: 7,
        payload: "second",
    });
    assert_eq!(again.len(), 1);
    assert!(again.ptr_eq(&tree));
    let query = Entry { key: 7, payload: "" };
    assert_eq!(again.find(&query).map(|entry| entry.payload), Some("first"));
}

// =============================================================================
// Persistence Tests
// =============================================================================

#[rstest]
fn test_insert_preserves_original_tree() {
    let tree1: RedBlackTree<i32> = [1, 2, 3].into_iter().collect();
    let tree2 = tree1.insert(4);

    assert_eq!(tree1.len(), 3);
    assert_eq!(tree2.len(), 4);
    assert!(!tree1.contains(&4));
    assert!(tree2.contains(&4));
    assert_eq!(tree1.in_order(), vec![&1, &2, &3]);
    assert_eq!(tree1.check_invariants(), Ok(()));
}

#[rstest]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn test_many_versions_remain_independent() {
    let mut versions = vec![RedBlackTree::new()];
    for value in 0..50 {
        let next = versions[versions.len() - 1].insert(value);
        versions.push(next);
    }

    for (size, version) in versions.iter().enumerate() {
        assert_eq!(version.len(), size);
        assert_eq!(version.check_invariants(), Ok(()));
        for value in 0..50 {
            assert_eq!(version.contains(&value), value < size as i32);
        }
    }
}

#[rstest]
fn test_duplicate_insert_preserves_height_and_sequence() {
    let tree: RedBlackTree<i32> = (0..100).collect();
    let again = tree.insert(50);
    assert_eq!(again.height(), tree.height());
    assert_eq!(again.in_order(), tree.in_order());
    assert!(again.ptr_eq(&tree));
}

// =============================================================================
// Balance Tests
// =============================================================================

#[rstest]
#[case(1)]
#[case(10)]
#[case(100)]
#[case(1_000)]
#[case(10_000)]
#[allow(clippy::cast_precision_loss)]
fn test_ascending_insertion_height_is_logarithmic(#[case] size: usize) {
    let tree: RedBlackTree<usize> = (0..size).collect();
    let bound = 2.0 * ((size + 1) as f64).log2();
    assert!(
        tree.height() as f64 <= bound,
        "height {} exceeds {bound}",
        tree.height()
    );
    assert_eq!(tree.check_invariants(), Ok(()));
}

#[rstest]
fn test_black_height_grows_slowly() {
    let tree: RedBlackTree<i32> = (0..1_000).collect();
    assert!(tree.black_height() >= 1);
    assert!(tree.black_height() <= 10);
    assert!(tree.height() <= 2 * tree.black_height());
}

// =============================================================================
// Partial Order Tests
// =============================================================================

#[rstest]
fn test_try_insert_accepts_ordinary_floats(#[from(init_tracing)] _tracing: ()) {
    let tree = [2.5, -1.0, 0.0, 10.25]
        .into_iter()
        .try_fold(RedBlackTree::new(), |tree, value| tree.try_insert(value))
        .unwrap();
    assert_eq!(tree.len(), 4);
    assert_eq!(tree.check_invariants(), Ok(()));
    assert_eq!(tree.try_find(&0.0), Ok(Some(&0.0)));
    assert_eq!(tree.try_contains(&3.0), Ok(false));
    assert_eq!(format!("{tree}"), "{-1, 0, 2.5, 10.25}");
}

#[rstest]
fn test_try_insert_rejects_nan_into_empty_tree(#[from(init_tracing)] _tracing: ()) {
    let tree: RedBlackTree<f64> = RedBlackTree::new();
    assert_eq!(
        tree.try_insert(f64::NAN).map(|tree| tree.len()),
        Err(IncomparableError {
            operation: "try_insert"
        })
    );
}

#[rstest]
fn test_failed_try_insert_leaves_tree_unchanged() {
    let tree = RedBlackTree::new()
        .try_insert(1.0)
        .and_then(|tree| tree.try_insert(2.0))
        .unwrap();
    assert!(tree.try_insert(f64::NAN).is_err());
    assert_eq!(tree.len(), 2);
    assert_eq!(tree.try_contains(&1.0), Ok(true));
}

#[rstest]
fn test_try_find_and_try_contains_report_operation() {
    let tree = RedBlackTree::new().try_insert(1.0_f32).unwrap();
    assert_eq!(
        tree.try_find(&f32::NAN),
        Err(IncomparableError {
            operation: "try_find"
        })
    );
    assert_eq!(
        tree.try_contains(&f32::NAN),
        Err(IncomparableError {
            operation: "try_contains"
        })
    );
}

#[rstest]
fn test_try_operations_agree_with_ord_operations_on_total_orders() {
    let tree = (0..20)
        .try_fold(RedBlackTree::new(), |tree, value| tree.try_insert(value))
        .unwrap();
    let reference: RedBlackTree<i32> = (0..20).collect();
    assert_eq!(tree, reference);
    assert_eq!(tree.try_find(&7), Ok(reference.find(&7)));
}

// =============================================================================
// Trait Tests
// =============================================================================

#[rstest]
fn test_eq_ignores_insertion_order() {
    let ascending: RedBlackTree<i32> = (0..20).collect();
    let descending: RedBlackTree<i32> = (0..20).rev().collect();
    assert_eq!(ascending, descending);
    assert_ne!(ascending, ascending.insert(20));
}

#[rstest]
fn test_equal_trees_hash_equally() {
    let ascending: RedBlackTree<i32> = (0..20).collect();
    let descending: RedBlackTree<i32> = (0..20).rev().collect();

    let mut seen = HashSet::new();
    seen.insert(ascending);
    assert!(seen.contains(&descending));
}

#[rstest]
fn test_debug_and_display() {
    let tree: RedBlackTree<i32> = [2, 3, 1].into_iter().collect();
    assert_eq!(format!("{tree:?}"), "{1, 2, 3}");
    assert_eq!(format!("{tree}"), "{1, 2, 3}");
}

#[rstest]
fn test_prelude_exports_tree() {
    use redblack::prelude::*;
    let tree: RedBlackTree<u8> = RedBlackTree::singleton(1);
    assert_eq!(tree.check_invariants(), Ok::<(), InvariantViolation>(()));
}
