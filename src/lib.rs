//! Classic sorting and selection algorithms, implemented for clarity.
//!
//! Every in-place sorter exposes `sort(&mut [T])`, every copying sorter
//! exposes `sorted(&[T]) -> Vec<T>` and leaves its input untouched, and
//! the selector finds the k-th smallest item without sorting the whole
//! input. All of them order by the element's natural `Ord` relation, in
//! non-descending order. None of these compete with `slice::sort`; the
//! point is to show how the algorithms work.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(v: &mut [T])
            where
                T: Ord,
            {
                sort(v);
            }
        }
    };
}

macro_rules! sorted_impl {
    ($name:expr) => {
        pub struct SortedImpl;

        impl sort_test_tools::Sorted for SortedImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sorted<T>(v: &[T]) -> Vec<T>
            where
                T: Ord + Clone,
            {
                sorted(v)
            }
        }
    };
}

pub mod copying;
pub mod inplace;
pub mod order;
pub mod select;
