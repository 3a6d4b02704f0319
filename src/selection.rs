use serde::Serialize;

use crate::Sorter;

/// Operation counts from one run of [`selection_sort_counted`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SortStats {
    pub comparisons: u64,
    pub swaps: u64,
}

impl SortStats {
    /// Counts every input of length `n` must produce: `n(n-1)/2` comparisons
    /// and `n-1` swaps.
    pub fn expected(n: usize) -> Self {
        let n = n as u64;
        SortStats {
            comparisons: n * n.saturating_sub(1) / 2,
            swaps: n.saturating_sub(1),
        }
    }
}

/// Classic O(n²) selection sort.
///
/// Each outer pass scans the unsorted tail for its minimum and swaps it into
/// position `i`. Only a strictly smaller element moves the tracked minimum,
/// so among equal minima the earliest one is picked. The swap is performed on
/// every pass, even when the minimum is already in place.
///
/// Not stable: a swap can carry an element past an equal one.
pub fn selection_sort(data: &mut [i32]) {
    sort_with(data, || {}, || {});
}

/// Same permutation as [`selection_sort`], also counting comparisons and swaps.
pub fn selection_sort_counted(data: &mut [i32]) -> SortStats {
    let mut comparisons = 0;
    let mut swaps = 0;
    sort_with(data, || comparisons += 1, || swaps += 1);
    SortStats { comparisons, swaps }
}

#[inline(always)]
fn sort_with(data: &mut [i32], mut on_compare: impl FnMut(), mut on_swap: impl FnMut()) {
    let n = data.len();
    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            on_compare();
            if data[j] < data[min] {
                min = j;
            }
        }
        data.swap(i, min);
        on_swap();
    }
}

/// Sorts `data` if present. A missing sequence sorts like an empty one.
pub fn sort_optional(data: Option<&mut [i32]>) {
    if let Some(data) = data {
        selection_sort(data);
    }
}

pub struct SelectionSorter;

impl Sorter for SelectionSorter {
    fn sort(&self, data: &mut [i32]) {
        selection_sort(data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{is_permutation, is_sorted};
    use proptest::prelude::*;

    #[test]
    fn sample_array() {
        let mut data = [3, 8, 15, 10, 1, 2, 3];
        selection_sort(&mut data);
        assert_eq!(data, [1, 2, 3, 3, 8, 10, 15]);
    }

    #[test]
    fn empty_and_single() {
        let mut empty: [i32; 0] = [];
        selection_sort(&mut empty);
        assert!(empty.is_empty());

        let mut single = [5];
        selection_sort(&mut single);
        assert_eq!(single, [5]);
    }

    #[test]
    fn empty_sorts_to_empty() {
        let mut data: Vec<i32> = Vec::new();
        let stats = selection_sort_counted(&mut data);
        assert!(data.is_empty());
        assert_eq!(stats, SortStats::default());
    }

    #[test]
    fn all_equal() {
        let mut data = [2, 2, 2];
        let stats = selection_sort_counted(&mut data);
        assert_eq!(data, [2, 2, 2]);
        assert_eq!(stats, SortStats { comparisons: 3, swaps: 2 });
    }

    #[test]
    fn counts_on_sample() {
        let mut data = [3, 8, 15, 10, 1, 2, 3];
        let stats = selection_sort_counted(&mut data);
        assert_eq!(stats, SortStats { comparisons: 21, swaps: 6 });
        assert_eq!(stats, SortStats::expected(7));
    }

    #[test]
    fn counts_on_degenerate_lengths() {
        assert_eq!(selection_sort_counted(&mut []), SortStats::default());
        assert_eq!(selection_sort_counted(&mut [9]), SortStats::default());
        assert_eq!(SortStats::expected(0), SortStats::default());
        assert_eq!(SortStats::expected(1), SortStats::default());
        assert_eq!(SortStats::expected(2), SortStats { comparisons: 1, swaps: 1 });
    }

    #[test]
    fn repeated_minimum() {
        let mut data = [9, 1, 5, 1];
        selection_sort(&mut data);
        assert_eq!(data, [1, 1, 5, 9]);
    }

    #[test]
    fn missing_sequence_is_noop() {
        sort_optional(None);

        let mut data = vec![4, -1, 0];
        sort_optional(Some(data.as_mut_slice()));
        assert_eq!(data, vec![-1, 0, 4]);
    }

    proptest! {
        #[test]
        fn sorts_any_sequence(input in prop::collection::vec(any::<i32>(), 0..128)) {
            let mut data = input.clone();
            selection_sort(&mut data);
            prop_assert!(is_sorted(&data));
            prop_assert!(is_permutation(&input, &data));
        }

        #[test]
        fn counted_matches_plain(input in prop::collection::vec(-20i32..20, 0..128)) {
            let mut plain = input.clone();
            let mut counted = input.clone();
            selection_sort(&mut plain);
            let stats = selection_sort_counted(&mut counted);
            prop_assert_eq!(&plain, &counted);
            prop_assert_eq!(stats, SortStats::expected(input.len()));
        }

        #[test]
        fn idempotent(input in prop::collection::vec(any::<i32>(), 0..64)) {
            let mut once = input;
            selection_sort(&mut once);
            let mut twice = once.clone();
            selection_sort(&mut twice);
            prop_assert_eq!(once, twice);
        }
    }
}
