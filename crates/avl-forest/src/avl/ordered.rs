//! Ordered (comparison-based) operations.
//!
//! These rely on the ordered invariant: the in-order traversal is
//! non-decreasing under `less`. Reported indexes are subtree-relative;
//! a parent frame adds `size(left) + 1` when its recursion went right
//! and passes the child's index through unchanged when it went left.

use crate::aggregate::RangeAggregate;
use crate::alloc::NodeAllocator;
use crate::merge::MergePolicy;

use super::node::{allocate_leaf, subtree_size, AvlNode, Link};
use super::position::remove_root;
use super::rotate::{rebalance_left_heavy, rebalance_right_heavy};

/// Inserts `value` at the leftmost position not less than it. Reports
/// height growth and the index the value ended up at. A successful merge
/// reports index 0 for its own frame: ancestors still add their right
/// offsets on the way up.
pub(crate) fn insert_ordered<E, G, M, L, A>(
    link: Link<E, G::Intermediate>,
    value: E,
    less: &L,
    merge: &M,
    agg: &G,
    alloc: &mut A,
) -> (Box<AvlNode<E, G::Intermediate>>, bool, usize)
where
    G: RangeAggregate<E>,
    M: MergePolicy<E>,
    L: Fn(&E, &E) -> bool,
    A: NodeAllocator<E, G::Intermediate>,
{
    let Some(mut node) = link else {
        return (allocate_leaf(value, agg, alloc), true, 0);
    };
    if merge.merge(&mut node.value, &value) {
        node.update(agg);
        return (node, false, 0);
    }
    if !less(&node.value, &value) {
        let (child, grew, index) =
            insert_ordered(node.left.take(), value, less, merge, agg, alloc);
        node.left = Some(child);
        node.balance -= grew as i8;
        if !grew || node.balance == 0 {
            node.update(agg);
            return (node, false, index);
        }
        if node.balance == -1 {
            node.update(agg);
            return (node, true, index);
        }
        (rebalance_left_heavy(node, agg), false, index)
    } else {
        let left_size = subtree_size(&node.left);
        let (child, grew, index) =
            insert_ordered(node.right.take(), value, less, merge, agg, alloc);
        node.right = Some(child);
        let index = left_size + 1 + index;
        node.balance += grew as i8;
        if !grew || node.balance == 0 {
            node.update(agg);
            return (node, false, index);
        }
        if node.balance == 1 {
            node.update(agg);
            return (node, true, index);
        }
        (rebalance_right_heavy(node, agg), false, index)
    }
}

/// Removes the first element equal to `target` on the search path. A
/// miss is reported as `None` and leaves the subtree untouched.
pub(crate) fn remove_ordered<E, G, L, A>(
    link: Link<E, G::Intermediate>,
    target: &E,
    less: &L,
    agg: &G,
    alloc: &mut A,
) -> (Link<E, G::Intermediate>, bool, Option<usize>)
where
    E: PartialEq,
    G: RangeAggregate<E>,
    L: Fn(&E, &E) -> bool,
    A: NodeAllocator<E, G::Intermediate>,
{
    let Some(mut node) = link else {
        return (None, false, None);
    };
    if node.value == *target {
        let index = subtree_size(&node.left);
        let (child, shrank, _removed) = remove_root(node, agg, alloc);
        return (child, shrank, Some(index));
    }
    if less(target, &node.value) {
        let (child, shrank, found) = remove_ordered(node.left.take(), target, less, agg, alloc);
        node.left = child;
        let Some(index) = found else {
            return (Some(node), false, None);
        };
        node.balance += shrank as i8;
        if !shrank || node.balance == 1 {
            node.update(agg);
            return (Some(node), false, Some(index));
        }
        if node.balance == 0 {
            node.update(agg);
            return (Some(node), true, Some(index));
        }
        let node = rebalance_right_heavy(node, agg);
        let shrank = node.balance == 0;
        (Some(node), shrank, Some(index))
    } else {
        let left_size = subtree_size(&node.left);
        let (child, shrank, found) = remove_ordered(node.right.take(), target, less, agg, alloc);
        node.right = child;
        let Some(index) = found else {
            return (Some(node), false, None);
        };
        let index = left_size + 1 + index;
        node.balance -= shrank as i8;
        if !shrank || node.balance == -1 {
            node.update(agg);
            return (Some(node), false, Some(index));
        }
        if node.balance == 0 {
            node.update(agg);
            return (Some(node), true, Some(index));
        }
        let node = rebalance_left_heavy(node, agg);
        let shrank = node.balance == 0;
        (Some(node), shrank, Some(index))
    }
}

/// Read-only twin of [`remove_ordered`]'s search: the index of the first
/// element equal to `target` on the search path.
pub(crate) fn find_ordered<E, I, L>(link: &Link<E, I>, target: &E, less: &L) -> Option<usize>
where
    E: PartialEq,
    L: Fn(&E, &E) -> bool,
{
    let node = link.as_deref()?;
    if node.value == *target {
        return Some(subtree_size(&node.left));
    }
    if less(target, &node.value) {
        find_ordered(&node.left, target, less)
    } else {
        find_ordered(&node.right, target, less)
            .map(|index| subtree_size(&node.left) + 1 + index)
    }
}
