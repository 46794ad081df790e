//! Structural invariant checks, meant for tests and debugging.

use crate::aggregate::RangeAggregate;

use super::node::{subtree_size, Link};

/// Measured height of a subtree (empty = 0).
pub fn height<E, I>(link: &Link<E, I>) -> usize {
    match link.as_deref() {
        None => 0,
        Some(node) => 1 + height(&node.left).max(height(&node.right)),
    }
}

/// Worst-case AVL height for `size` nodes.
pub fn height_bound(size: usize) -> usize {
    (1.4405 * ((size + 2) as f64).log2() - 0.3277).ceil() as usize
}

/// Verifies balance factors against recomputed heights, sizes against
/// recomputed counts, cached aggregates against a fresh fold, and the
/// overall height bound.
pub(crate) fn check_tree<E, G>(link: &Link<E, G::Intermediate>, agg: &G) -> Result<(), String>
where
    G: RangeAggregate<E>,
    G::Intermediate: PartialEq,
{
    check_node(link, agg)?;
    let measured = height(link);
    let bound = height_bound(subtree_size(link));
    if measured > bound {
        return Err(format!(
            "height {measured} exceeds the AVL bound {bound} for {} nodes",
            subtree_size(link)
        ));
    }
    Ok(())
}

fn check_node<E, G>(link: &Link<E, G::Intermediate>, agg: &G) -> Result<usize, String>
where
    G: RangeAggregate<E>,
    G::Intermediate: PartialEq,
{
    let Some(node) = link.as_deref() else {
        return Ok(0);
    };
    let left_height = check_node(&node.left, agg)?;
    let right_height = check_node(&node.right, agg)?;

    let expected_bf = right_height as i64 - left_height as i64;
    if i64::from(node.balance) != expected_bf {
        return Err(format!(
            "balance factor mismatch: expected {expected_bf}, got {}",
            node.balance
        ));
    }
    if !(-1..=1).contains(&node.balance) {
        return Err(format!("AVL balance violated: {}", node.balance));
    }

    let expected_size = 1 + subtree_size(&node.left) + subtree_size(&node.right);
    if node.size != expected_size {
        return Err(format!(
            "size mismatch: expected {expected_size}, got {}",
            node.size
        ));
    }

    let mut expected = agg.preprocess(&node.value);
    if let Some(left) = &node.left {
        expected = agg.combine(&left.subrange, &expected);
    }
    if let Some(right) = &node.right {
        expected = agg.combine(&expected, &right.subrange);
    }
    if node.subrange != expected {
        return Err("cached subrange does not match a fresh fold".to_string());
    }

    Ok(1 + left_height.max(right_height))
}

/// Verifies that the in-order traversal is non-decreasing under `less`.
pub(crate) fn check_ordered<E, I, L>(link: &Link<E, I>, less: &L) -> Result<(), String>
where
    L: Fn(&E, &E) -> bool,
{
    let mut prev = None;
    sweep(link, &mut prev, less)
}

fn sweep<'a, E, I, L>(
    link: &'a Link<E, I>,
    prev: &mut Option<&'a E>,
    less: &L,
) -> Result<(), String>
where
    L: Fn(&E, &E) -> bool,
{
    let Some(node) = link.as_deref() else {
        return Ok(());
    };
    sweep(&node.left, prev, less)?;
    if let Some(prev) = *prev {
        if less(&node.value, prev) {
            return Err("node order violated".to_string());
        }
    }
    *prev = Some(&node.value);
    sweep(&node.right, prev, less)
}
