//! Ordering capabilities for [`super::PriorityTree`].
//!
//! The tree never calls `Ord` on its keys directly. It asks a comparator
//! value, so the same key type can be stored under different orders
//! (e.g. search states ordered by priority, then creation order).

use std::cmp::Ordering;

/// A total order over keys of type `K`.
///
/// Implementations must be consistent: `compare(a, b)` and `compare(b, a)`
/// are mirror images, and the relation is transitive. The tree's
/// binary-search order is only as sound as the comparator.
pub trait KeyOrder<K: ?Sized> {
    /// Compare two keys.
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// Delegates to the key's own `Ord` implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<K: Ord + ?Sized> KeyOrder<K> for NaturalOrder {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Wraps a comparator function or closure.
///
/// ```
/// use ladder_kernel::tree::{FnOrder, PriorityTree};
///
/// // Max-first ordering over integers.
/// let mut tree = PriorityTree::with_order(FnOrder(|a: &i32, b: &i32| b.cmp(a)));
/// tree.insert(1);
/// tree.insert(7);
/// assert_eq!(tree.find_min(), Ok(&7));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnOrder<F>(pub F);

impl<K: ?Sized, F> KeyOrder<K> for FnOrder<F>
where
    F: Fn(&K, &K) -> Ordering,
{
    fn compare(&self, a: &K, b: &K) -> Ordering {
        (self.0)(a, b)
    }
}
