//! Merge sort: split in half, sort each half, merge the sorted runs.

sorted_impl!("merge_unstable");

/// Returns a new vector with `v`'s items in non-descending order. The
/// input is untouched.
///
/// Splits at `len / 2` (the left half gets the smaller share of an odd
/// length), recurses into both halves, then merges them in one pass.
/// O(n log n) for every input, with O(log n) recursion depth.
///
/// Not stable: the merge emits from the right run whenever the two run
/// heads compare equal, so an equal item from the right run can
/// overtake one still pending in the left run.
pub fn sorted<T>(v: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    if v.len() < 2 {
        return v.to_vec();
    }

    let middle = v.len() / 2;
    let left = sorted(&v[..middle]);
    let right = sorted(&v[middle..]);

    merge(&left, &right)
}

/// Merges two non-decreasing runs into one non-decreasing vector.
fn merge<T>(left: &[T], right: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left_index = 0;
    let mut right_index = 0;

    while left_index < left.len() && right_index < right.len() {
        // Ties go to the right run.
        if left[left_index] < right[right_index] {
            merged.push(left[left_index].clone());
            left_index += 1;
        } else {
            merged.push(right[right_index].clone());
            right_index += 1;
        }
    }

    // At most one of these tails is non-empty.
    merged.extend(left[left_index..].iter().cloned());
    merged.extend(right[right_index..].iter().cloned());

    merged
}
