//! Bogo sort, in both of its classroom guises: the randomized shuffler
//! and the deterministic permutation search.

use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::order::is_non_decreasing;

/// Puts `v` in non-descending order, in-place, by reshuffling it until
/// it happens to be sorted.
///
/// Expected running time O((n+1)!). Termination is probabilistic: every
/// shuffle reaches every permutation with positive probability, so the
/// sorted one eventually comes up, but no upper bound exists and none
/// is imposed here. Keep inputs to a handful of elements.
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    let mut rng = thread_rng();

    while !is_non_decreasing(v) {
        v.shuffle(&mut rng);
    }
}

/// Returns a new vector with `v`'s items in non-descending order, found
/// by walking the permutations of `v` until one is sorted. The input is
/// untouched.
///
/// The deterministic cousin of [`sort`]: same exhaustive idea, but the
/// permutations are enumerated instead of sampled, so it always
/// terminates, in O(n!) time.
pub fn sorted<T>(v: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    // A finite multiset always has a non-decreasing permutation, and
    // `permutations` yields one (empty) candidate even for an empty
    // slice, so the search cannot come up empty.
    v.iter()
        .permutations(v.len())
        .find(|candidate| is_non_decreasing(candidate))
        .map(|candidate| candidate.into_iter().cloned().collect())
        .unwrap_or_default()
}
