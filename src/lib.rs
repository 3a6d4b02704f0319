//! Selection Sort
//!
//! In-place selection sort over integer slices, with a few baseline sorters
//! to compare it against.

pub mod baselines;
pub mod display;
pub mod error;
pub mod logging;
pub mod selection;

pub use error::{Error, Result};
pub use selection::{selection_sort, selection_sort_counted, SelectionSorter, SortStats};

/// Trait for sorting implementations
pub trait Sorter {
    /// Sort the slice in-place in ascending order
    fn sort(&self, data: &mut [i32]);
}

/// True when every adjacent pair is non-decreasing.
pub fn is_sorted(data: &[i32]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

/// True when `a` and `b` hold the same multiset of values.
pub fn is_permutation(a: &[i32], b: &[i32]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}
