//! The rotation algebra.
//!
//! All rotations keep the balance, size, and aggregate invariants exact.
//! Balance updates are derived from the height relations of the rotated
//! pair; the demoted node is refreshed before the new subtree root
//! because the root's aggregate depends on the already refreshed child.

use crate::aggregate::RangeAggregate;

use super::node::AvlNode;

pub(crate) fn rotate_left<E, G>(
    mut n: Box<AvlNode<E, G::Intermediate>>,
    agg: &G,
) -> Box<AvlNode<E, G::Intermediate>>
where
    G: RangeAggregate<E>,
{
    let mut pivot = n.right.take().expect("rotate_left requires a right child");
    n.right = pivot.left.take();
    n.balance -= 1 + pivot.balance.max(0);
    pivot.balance -= 1 - n.balance.min(0);
    n.update(agg);
    pivot.left = Some(n);
    pivot.update(agg);
    pivot
}

pub(crate) fn rotate_right<E, G>(
    mut n: Box<AvlNode<E, G::Intermediate>>,
    agg: &G,
) -> Box<AvlNode<E, G::Intermediate>>
where
    G: RangeAggregate<E>,
{
    let mut pivot = n.left.take().expect("rotate_right requires a left child");
    n.left = pivot.right.take();
    n.balance += 1 - pivot.balance.min(0);
    pivot.balance += 1 + n.balance.max(0);
    n.update(agg);
    pivot.right = Some(n);
    pivot.update(agg);
    pivot
}

/// No-op unless `n` is right heavy.
pub(crate) fn ensure_not_right_heavy<E, G>(
    n: Box<AvlNode<E, G::Intermediate>>,
    agg: &G,
) -> Box<AvlNode<E, G::Intermediate>>
where
    G: RangeAggregate<E>,
{
    if n.balance > 0 {
        rotate_left(n, agg)
    } else {
        n
    }
}

/// No-op unless `n` is left heavy.
pub(crate) fn ensure_not_left_heavy<E, G>(
    n: Box<AvlNode<E, G::Intermediate>>,
    agg: &G,
) -> Box<AvlNode<E, G::Intermediate>>
where
    G: RangeAggregate<E>,
{
    if n.balance < 0 {
        rotate_right(n, agg)
    } else {
        n
    }
}

/// Entry point for `balance == +2`. Handles both the single and the
/// double rotation case.
pub(crate) fn rebalance_right_heavy<E, G>(
    mut n: Box<AvlNode<E, G::Intermediate>>,
    agg: &G,
) -> Box<AvlNode<E, G::Intermediate>>
where
    G: RangeAggregate<E>,
{
    if let Some(right) = n.right.take() {
        n.right = Some(ensure_not_left_heavy(right, agg));
    }
    rotate_left(n, agg)
}

/// Entry point for `balance == -2`.
pub(crate) fn rebalance_left_heavy<E, G>(
    mut n: Box<AvlNode<E, G::Intermediate>>,
    agg: &G,
) -> Box<AvlNode<E, G::Intermediate>>
where
    G: RangeAggregate<E>,
{
    if let Some(left) = n.left.take() {
        n.left = Some(ensure_not_right_heavy(left, agg));
    }
    rotate_right(n, agg)
}
