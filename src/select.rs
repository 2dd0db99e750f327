//! Quickselect: the k-th smallest item without sorting the whole input.

use thiserror::Error;

/// Rejected rank for [`select_kth`]: valid ranks are `1..=len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("rank {k} is outside the valid range 1..={len}")]
pub struct RankError {
    pub k: usize,
    pub len: usize,
}

/// Returns the `k`-th smallest item of `v`, where `k = 1` is the
/// minimum and `k = v.len()` the maximum. The input is untouched.
///
/// Partitions exactly like single-pivot quicksort (first item as pivot,
/// ties grouped with the greater side) but recurses into only the side
/// that holds rank `k`, which is what brings the average cost down to
/// O(n). The worst case matches quicksort's partitioning weakness:
/// O(n^2) time and O(n) recursion depth on adversarial input.
///
/// Fails with [`RankError`] before any partitioning work when `k` is
/// outside `1..=v.len()`; an empty slice has no valid rank at all.
pub fn select_kth<T>(v: &[T], k: usize) -> Result<T, RankError>
where
    T: Ord + Clone,
{
    if k == 0 || k > v.len() {
        return Err(RankError { k, len: v.len() });
    }

    let items: Vec<&T> = v.iter().collect();
    Ok(select(&items, k).clone())
}

/// Caller upholds `1 <= k <= items.len()`.
fn select<'a, T>(items: &[&'a T], k: usize) -> &'a T
where
    T: Ord,
{
    let pivot = items[0];
    let mut smaller = Vec::new();
    let mut larger = Vec::new();

    for &item in &items[1..] {
        if item < pivot {
            smaller.push(item);
        } else {
            larger.push(item);
        }
    }

    if k <= smaller.len() {
        select(&smaller, k)
    } else if k == smaller.len() + 1 {
        pivot
    } else {
        select(&larger, k - smaller.len() - 1)
    }
}
