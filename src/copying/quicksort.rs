//! Single-pivot quicksort over a read-only input.

sorted_impl!("quicksort_unstable");

/// Returns a new vector with `v`'s items in non-descending order. The
/// input is untouched.
///
/// The pivot is always the first item; one scan splits the remainder
/// into strictly-smaller items and everything else, including ties with
/// the pivot. Both partitions recurse. With no pivot randomization,
/// already-sorted input drives the worst case: O(n^2) time and O(n)
/// recursion depth. Average O(n log n).
pub fn sorted<T>(v: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    if v.len() < 2 {
        return v.to_vec();
    }

    let pivot = &v[0];
    let mut smaller = Vec::new();
    let mut larger = Vec::new();

    for item in &v[1..] {
        if item < pivot {
            smaller.push(item.clone());
        } else {
            larger.push(item.clone());
        }
    }

    let mut result = sorted(&smaller);
    result.push(pivot.clone());
    result.extend(sorted(&larger));
    result
}
