//! Selection sort: repeatedly selects the smallest unsorted item.

sort_impl!("selection_unstable");

/// Puts `v` in non-descending order, in-place.
///
/// For each position, scan the remaining unsorted suffix for its
/// minimum (ties resolved by first occurrence) and swap it into place.
/// The long-distance swap can carry an item past its equals, so this
/// sort is not stable. Always O(n^2), presorted input included; the
/// scan cannot be cut short.
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    let len = v.len();

    for first_unsorted in 0..len.saturating_sub(1) {
        let mut smallest = first_unsorted;

        for index in first_unsorted + 1..len {
            if v[index] < v[smallest] {
                smallest = index;
            }
        }

        v.swap(first_unsorted, smallest);
    }
}
