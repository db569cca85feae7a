//! Renderings of sort runs and statistics: colored text, JSON, and CSV.

use crate::colors::{bold, cyan, gray, green};
use crate::stats::DatasetStats;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sortsuite_core::{Algorithm, SortRun};
use strum_macros::{Display, EnumString};

/// Output format selector shared by the `sort`, `stats`, and `compare`
/// commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

/// Serializable record of one sort invocation.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub algorithm: Algorithm,
    pub elements: usize,
    pub elapsed_secs: f64,
    pub timestamp: DateTime<Utc>,
    pub stats: DatasetStats,
    pub sorted: Vec<i64>,
}

impl RunReport {
    pub fn new(algorithm: Algorithm, run: SortRun<i64>, stats: DatasetStats) -> Self {
        Self {
            algorithm,
            elements: run.sorted.len(),
            elapsed_secs: run.elapsed_secs(),
            timestamp: Utc::now(),
            stats,
            sorted: run.sorted,
        }
    }
}

/// One row of the `compare` command: an algorithm's average timing.
#[derive(Debug, Clone, Serialize)]
pub struct CompareRow {
    pub algorithm: Algorithm,
    pub elements: usize,
    pub duration_ms: f64,
    pub iterations: u32,
}

/// Join a dataset for display, truncated to `limit` elements (0 = no limit).
pub fn format_preview(data: &[i64], limit: usize) -> String {
    if limit == 0 || data.len() <= limit {
        return data
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ");
    }
    let head = data[..limit]
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{}, … ({} more)", head, data.len() - limit)
}

/// Render a single run as a colored text block.
pub fn render_text(report: &RunReport, preview: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} {}\n",
        bold("Algorithm:"),
        cyan(&report.algorithm.to_string())
    ));
    out.push_str(&format!(
        "{} {}\n",
        bold("Execution Time:"),
        green(&format!("{:.6} sec", report.elapsed_secs))
    ));
    out.push_str(&format!(
        "{} {}\n",
        bold("Elements Sorted:"),
        report.elements
    ));
    out.push_str(&format!(
        "{} {}\n",
        gray("sorted:"),
        format_preview(&report.sorted, preview)
    ));
    out.push_str(&render_stats_text(&report.stats));
    out
}

/// Render the statistics block shown beside sorted output.
pub fn render_stats_text(stats: &DatasetStats) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", cyan("STATISTICS")));
    out.push_str(&format!("  Total: {} elements\n", stats.count));
    out.push_str(&format!("  Min: {}\n", opt_i64(stats.min)));
    out.push_str(&format!("  Max: {}\n", opt_i64(stats.max)));
    out.push_str(&format!(
        "  Average: {}\n",
        stats
            .mean
            .map_or("N/A".to_string(), |m| format!("{:.2}", m))
    ));
    out.push_str(&format!("  Sum: {}\n", stats.sum));
    out
}

fn opt_i64(v: Option<i64>) -> String {
    v.map_or("N/A".to_string(), |v| v.to_string())
}

/// Render runs as JSON: a single object for one run, an array otherwise.
pub fn render_json(reports: &[RunReport]) -> serde_json::Result<String> {
    match reports {
        [only] => serde_json::to_string_pretty(only),
        many => serde_json::to_string_pretty(many),
    }
}

pub fn csv_header() -> &'static str {
    "algorithm,elements,elapsed_secs,min,max,sum,mean"
}

pub fn csv_row(r: &RunReport) -> String {
    format!(
        "{},{},{:.6},{},{},{},{}",
        r.algorithm,
        r.elements,
        r.elapsed_secs,
        opt_i64(r.stats.min),
        opt_i64(r.stats.max),
        r.stats.sum,
        r.stats
            .mean
            .map_or("N/A".to_string(), |m| format!("{:.2}", m)),
    )
}

/// Render the timing comparison table, marking the fastest algorithm.
pub fn render_compare_text(rows: &[CompareRow]) -> String {
    let mut out = String::new();
    let fastest = rows
        .iter()
        .min_by(|a, b| a.duration_ms.total_cmp(&b.duration_ms))
        .map(|r| r.algorithm);
    for r in rows {
        let marker = if Some(r.algorithm) == fastest {
            green("◆")
        } else {
            gray("◇")
        };
        out.push_str(&format!(
            "{} {:<10} {:>12.6} ms avg ({} iters, {} elements)\n",
            marker,
            r.algorithm.to_string(),
            r.duration_ms,
            r.iterations,
            r.elements,
        ));
    }
    if let Some(winner) = fastest {
        out.push_str(&format!("{} {}\n", bold("fastest:"), green(&winner.to_string())));
    }
    out
}

pub fn compare_csv_header() -> &'static str {
    "algorithm,elements,duration_ms,iterations"
}

pub fn compare_csv_row(r: &CompareRow) -> String {
    format!(
        "{},{},{:.6},{}",
        r.algorithm, r.elements, r.duration_ms, r.iterations
    )
}
