//! Sortsuite Core
//!
//! The sorting engine shared by the CLI and the benchmark harness: three
//! classic algorithms over `Ord` data, each returning a sorted copy of its
//! input together with elapsed wall-clock time.

pub mod sort;

pub use sort::{bubble_sort, insertion_sort, merge_sort, Algorithm, SortRun};
