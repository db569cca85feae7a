//! Sortsuite CLI library.
//!
//! Everything around the sorting engine: dataset loading, statistics,
//! result formatting, and configuration.

pub mod colors;
pub mod config;
pub mod dataset;
pub mod report;
pub mod stats;
