//! Aggregated range queries.
//!
//! Pieces are combined strictly left to right. A subtree fully covered
//! by the query contributes its cached intermediate without being
//! descended into, which bounds the work at O(log n) combines.

use crate::aggregate::RangeAggregate;

use super::node::{subtree_size, Link};

/// Combined intermediate of the elements at `[from, to)` within this
/// subtree, or `None` for the empty range. The caller guarantees
/// `from <= to <= size`.
pub(crate) fn range_between<E, G>(
    link: &Link<E, G::Intermediate>,
    from: usize,
    to: usize,
    agg: &G,
) -> Option<G::Intermediate>
where
    G: RangeAggregate<E>,
{
    if from >= to {
        return None;
    }
    let node = link.as_deref()?;
    if from == 0 && to == node.size {
        return Some(node.subrange.clone());
    }
    let fold = |acc: Option<G::Intermediate>, piece: Option<G::Intermediate>| match (acc, piece) {
        (Some(a), Some(b)) => Some(agg.combine(&a, &b)),
        (Some(a), None) => Some(a),
        (None, piece) => piece,
    };
    let left_size = subtree_size(&node.left);
    let mut acc = None;
    if from < left_size {
        acc = fold(acc, range_between(&node.left, from, to.min(left_size), agg));
    }
    if from <= left_size && left_size < to {
        acc = fold(acc, Some(agg.preprocess(&node.value)));
    }
    if to > left_size + 1 {
        let lo = from.saturating_sub(left_size + 1);
        acc = fold(acc, range_between(&node.right, lo, to - left_size - 1, agg));
    }
    acc
}
