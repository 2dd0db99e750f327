//! Three-way (Dutch national flag) quicksort over a read-only input.

use std::cmp::Ordering;

use rand::Rng;

sorted_impl!("quicksort_three_way_unstable");

/// Returns a new vector with `v`'s items in non-descending order. The
/// input is untouched.
///
/// The pivot is drawn uniformly at random; one scan splits the items
/// into strictly-smaller, equal, and strictly-larger groups. Only the
/// outer two groups recurse: everything in the equal group already
/// compares equal, so it is placed as-is. That is what lets this
/// variant degrade gracefully on duplicate-heavy input. The random
/// pivot can still be unlucky, so the worst case stays O(n^2).
pub fn sorted<T>(v: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    if v.len() < 2 {
        return v.to_vec();
    }

    let pivot = &v[rand::thread_rng().gen_range(0..v.len())];
    let mut smaller = Vec::new();
    let mut equal = Vec::new();
    let mut larger = Vec::new();

    for item in v {
        match item.cmp(pivot) {
            Ordering::Less => smaller.push(item.clone()),
            Ordering::Equal => equal.push(item.clone()),
            Ordering::Greater => larger.push(item.clone()),
        }
    }

    let mut result = sorted(&smaller);
    result.extend(equal);
    result.extend(sorted(&larger));
    result
}
