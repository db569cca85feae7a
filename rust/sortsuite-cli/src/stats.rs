//! Summary statistics over a loaded dataset.

use serde::Serialize;

/// Count, extrema, sum, and mean of a dataset. Min/max/mean are absent for
/// an empty dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetStats {
    pub count: usize,
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub sum: i64,
    pub mean: Option<f64>,
}

impl DatasetStats {
    pub fn compute(data: &[i64]) -> Self {
        let count = data.len();
        let sum: i64 = data.iter().sum();
        let mean = if count == 0 {
            None
        } else {
            Some(sum as f64 / count as f64)
        };
        Self {
            count,
            min: data.iter().min().copied(),
            max: data.iter().max().copied(),
            sum,
            mean,
        }
    }
}
