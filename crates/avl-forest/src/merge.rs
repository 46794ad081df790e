//! The merge protocol.
//!
//! On insert, a policy may absorb the incoming element into an existing
//! one instead of storing it separately. The target is the stored
//! element and is kept (possibly mutated) when the merge succeeds; the
//! incoming element is discarded by the caller.

use std::ops::AddAssign;

/// Decides whether an incoming element is absorbed by an existing one.
///
/// Returning `true` means the target absorbed the incoming value: no new
/// node is created and the tree size does not change. Returning `false`
/// lets the insert proceed structurally.
pub trait MergePolicy<E> {
    fn merge(&self, target: &mut E, incoming: &E) -> bool;
}

/// Never merges. Yields sequence/multiset semantics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NeverMerge;

impl<E> MergePolicy<E> for NeverMerge {
    fn merge(&self, _target: &mut E, _incoming: &E) -> bool {
        false
    }
}

/// Merges equal elements, suppressing duplicates. Yields set semantics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MergeIfEqual;

impl<E: PartialEq> MergePolicy<E> for MergeIfEqual {
    fn merge(&self, target: &mut E, incoming: &E) -> bool {
        target == incoming
    }
}

/// For `(key, count)` pairs: on key equality, sums the counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MergeCount;

impl<K, C> MergePolicy<(K, C)> for MergeCount
where
    K: PartialEq,
    C: AddAssign + Copy,
{
    fn merge(&self, target: &mut (K, C), incoming: &(K, C)) -> bool {
        if target.0 != incoming.0 {
            return false;
        }
        target.1 += incoming.1;
        true
    }
}

/// For `(key, value)` pairs: on key equality, replaces the stored value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MergeAssign;

impl<K, V> MergePolicy<(K, V)> for MergeAssign
where
    K: PartialEq,
    V: Clone,
{
    fn merge(&self, target: &mut (K, V), incoming: &(K, V)) -> bool {
        if target.0 != incoming.0 {
            return false;
        }
        target.1 = incoming.1.clone();
        true
    }
}
