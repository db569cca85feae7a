//! The sorting engine: bubble, insertion, and merge sort with timing.
//!
//! Every operation copies its input before sorting, so the caller's data is
//! never mutated. The copy is constructed inside the timed region,
//! consistently for all three algorithms, so comparative timings carry the
//! same constant copy overhead.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use strum_macros::{Display, EnumString};

/// The result of one sort invocation: a sorted copy of the input plus the
/// wall-clock time the invocation took.
#[derive(Debug, Clone)]
pub struct SortRun<T> {
    pub sorted: Vec<T>,
    pub elapsed: Duration,
}

impl<T> SortRun<T> {
    /// Elapsed time in seconds, for display and serialization.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Selector for the three sorting algorithms.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bubble,
    Insertion,
    Merge,
}

impl Algorithm {
    /// Every algorithm, in the order comparison runs execute them.
    pub const ALL: [Algorithm; 3] = [Algorithm::Bubble, Algorithm::Insertion, Algorithm::Merge];

    /// Run this algorithm against `input`.
    pub fn run<T: Ord + Clone>(self, input: &[T]) -> SortRun<T> {
        match self {
            Algorithm::Bubble => bubble_sort(input),
            Algorithm::Insertion => insertion_sort(input),
            Algorithm::Merge => merge_sort(input),
        }
    }
}

/// Bubble sort: repeated adjacent-swap passes over a working copy.
///
/// A pass that performs no swaps terminates the scan, so already-sorted
/// input costs a single pass.
pub fn bubble_sort<T: Ord + Clone>(input: &[T]) -> SortRun<T> {
    let start = Instant::now();
    let mut arr = input.to_vec();
    let n = arr.len();
    for i in 0..n {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
    SortRun {
        sorted: arr,
        elapsed: start.elapsed(),
    }
}

/// Insertion sort: for each position, shift larger predecessors one slot
/// right and drop the held value into the gap. Stable.
pub fn insertion_sort<T: Ord + Clone>(input: &[T]) -> SortRun<T> {
    let start = Instant::now();
    let mut arr = input.to_vec();
    for i in 1..arr.len() {
        let key = arr[i].clone();
        let mut j = i;
        while j > 0 && arr[j - 1] > key {
            arr[j] = arr[j - 1].clone();
            j -= 1;
        }
        arr[j] = key;
    }
    SortRun {
        sorted: arr,
        elapsed: start.elapsed(),
    }
}

/// Merge sort: recursively halve, then merge sorted halves. Ties take the
/// left element, so the sort is stable. O(n log n) in all cases.
pub fn merge_sort<T: Ord + Clone>(input: &[T]) -> SortRun<T> {
    let start = Instant::now();
    let arr = input.to_vec();
    let sorted = merge_halves(&arr);
    SortRun {
        sorted,
        elapsed: start.elapsed(),
    }
}

fn merge_halves<T: Ord + Clone>(arr: &[T]) -> Vec<T> {
    if arr.len() <= 1 {
        return arr.to_vec();
    }
    let mid = arr.len() / 2;
    let left = merge_halves(&arr[..mid]);
    let right = merge_halves(&arr[mid..]);
    merge(&left, &right)
}

fn merge<T: Ord + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            merged.push(left[i].clone());
            i += 1;
        } else {
            merged.push(right[j].clone());
            j += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_sorted<T: Ord>(arr: &[T]) -> bool {
        arr.windows(2).all(|w| w[0] <= w[1])
    }

    /// Deterministic pseudo-random fill (LCG).
    fn lcg_fill(size: usize) -> Vec<i64> {
        let mut arr = Vec::with_capacity(size);
        let mut seed: i64 = 42;
        for _ in 0..size {
            seed = (seed.wrapping_mul(1103515245).wrapping_add(12345)) % 2147483648;
            arr.push(seed % 1000);
        }
        arr
    }

    #[test]
    fn all_algorithms_sort_mixed_input() {
        let input = vec![5, 3, 8, 1, 9, 2];
        for algorithm in Algorithm::ALL {
            let run = algorithm.run(&input);
            assert_eq!(run.sorted, vec![1, 2, 3, 5, 8, 9], "{algorithm}");
        }
    }

    #[test]
    fn all_algorithms_sort_reverse_sorted_input() {
        let input = vec![9, 8, 7, 6, 5, 4, 3, 2, 1];
        for algorithm in Algorithm::ALL {
            let run = algorithm.run(&input);
            assert_eq!(run.sorted, vec![1, 2, 3, 4, 5, 6, 7, 8, 9], "{algorithm}");
        }
    }

    #[test]
    fn all_algorithms_handle_empty_input() {
        let input: Vec<i64> = vec![];
        for algorithm in Algorithm::ALL {
            let run = algorithm.run(&input);
            assert!(run.sorted.is_empty(), "{algorithm}");
            assert!(run.elapsed >= Duration::ZERO);
        }
    }

    #[test]
    fn all_algorithms_handle_singleton_input() {
        let input = vec![7];
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.run(&input).sorted, vec![7], "{algorithm}");
        }
    }

    #[test]
    fn all_algorithms_keep_duplicates() {
        let input = vec![1, 1, 2, 2];
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.run(&input).sorted, vec![1, 1, 2, 2], "{algorithm}");
        }
    }

    #[test]
    fn input_is_never_mutated() {
        let input = vec![4, 2, 9, -3, 0];
        let snapshot = input.clone();
        for algorithm in Algorithm::ALL {
            let _ = algorithm.run(&input);
            assert_eq!(input, snapshot, "{algorithm}");
        }
    }

    #[test]
    fn sorting_sorted_input_is_identity() {
        let input = vec![-5, -1, 0, 3, 3, 10];
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.run(&input).sorted, input, "{algorithm}");
        }
    }

    #[test]
    fn result_is_a_permutation_of_the_input() {
        let input = lcg_fill(500);
        let mut expected = input.clone();
        expected.sort();
        for algorithm in Algorithm::ALL {
            let run = algorithm.run(&input);
            assert!(is_sorted(&run.sorted), "{algorithm}");
            assert_eq!(run.sorted, expected, "{algorithm}");
        }
    }

    #[test]
    fn negative_values_sort_before_positive() {
        let input = vec![3, -7, 0, -1, 12, -7];
        for algorithm in Algorithm::ALL {
            assert_eq!(
                algorithm.run(&input).sorted,
                vec![-7, -7, -1, 0, 3, 12],
                "{algorithm}"
            );
        }
    }

    #[test]
    fn elapsed_is_recorded() {
        let input = lcg_fill(1000);
        for algorithm in Algorithm::ALL {
            let run = algorithm.run(&input);
            assert!(run.elapsed >= Duration::ZERO, "{algorithm}");
            assert!(run.elapsed_secs() >= 0.0, "{algorithm}");
        }
    }

    /// Record ordered by key only; the tag rides along to observe stability.
    #[derive(Debug, Clone)]
    struct Tagged {
        key: i32,
        tag: char,
    }

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }
    impl Eq for Tagged {}
    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }
    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.key.cmp(&other.key)
        }
    }

    fn tagged(key: i32, tag: char) -> Tagged {
        Tagged { key, tag }
    }

    #[test]
    fn insertion_sort_is_stable() {
        let input = vec![
            tagged(2, 'a'),
            tagged(1, 'a'),
            tagged(2, 'b'),
            tagged(1, 'b'),
            tagged(2, 'c'),
        ];
        let run = insertion_sort(&input);
        let tags: Vec<char> = run.sorted.iter().map(|t| t.tag).collect();
        assert_eq!(
            run.sorted.iter().map(|t| t.key).collect::<Vec<_>>(),
            vec![1, 1, 2, 2, 2]
        );
        assert_eq!(tags, vec!['a', 'b', 'a', 'b', 'c']);
    }

    #[test]
    fn merge_sort_is_stable() {
        let input = vec![
            tagged(3, 'a'),
            tagged(1, 'a'),
            tagged(3, 'b'),
            tagged(2, 'a'),
            tagged(1, 'b'),
            tagged(3, 'c'),
        ];
        let run = merge_sort(&input);
        let pairs: Vec<(i32, char)> = run.sorted.iter().map(|t| (t.key, t.tag)).collect();
        assert_eq!(
            pairs,
            vec![(1, 'a'), (1, 'b'), (2, 'a'), (3, 'a'), (3, 'b'), (3, 'c')]
        );
    }

    #[test]
    fn algorithm_display_round_trips() {
        for algorithm in Algorithm::ALL {
            let name = algorithm.to_string();
            assert_eq!(name.parse::<Algorithm>().unwrap(), algorithm);
        }
        assert_eq!("merge".parse::<Algorithm>().unwrap(), Algorithm::Merge);
        assert!("quick".parse::<Algorithm>().is_err());
    }
}
