//! Sortsuite Benchmark Runner
//!
//! Standalone binary comparing the three sorting algorithms across input
//! patterns and sizes, with JSON/CSV output.

use serde::Serialize;
use sortsuite_core::Algorithm;
use std::time::Duration;

/// Result of a single benchmark run.
#[derive(Debug, Clone, Serialize)]
pub struct BenchResult {
    pub algorithm: String,
    pub pattern: String,
    pub elements: usize,
    pub duration_ms: f64,
    pub throughput_elems_per_sec: f64,
    pub iterations: u32,
}

/// Deterministic pseudo-random fill (LCG).
fn lcg_fill(size: usize) -> Vec<i64> {
    let mut arr = Vec::with_capacity(size);
    let mut seed: i64 = 42;
    for _ in 0..size {
        seed = (seed.wrapping_mul(1103515245).wrapping_add(12345)) % 2147483648;
        arr.push(seed % 100_000);
    }
    arr
}

/// Build the input for a named pattern.
fn gen_pattern(pattern: &str, size: usize) -> Vec<i64> {
    match pattern {
        "sorted" => (0..size as i64).collect(),
        "reversed" => (0..size as i64).rev().collect(),
        "nearly_sorted" => {
            // Sorted run with one LCG-chosen adjacent swap per 20 elements.
            let mut arr: Vec<i64> = (0..size as i64).collect();
            if size > 1 {
                for pick in lcg_fill(size / 20) {
                    let i = (pick.unsigned_abs() as usize) % (size - 1);
                    arr.swap(i, i + 1);
                }
            }
            arr
        }
        _ => lcg_fill(size),
    }
}

/// Time `iterations` runs of one algorithm over `data`.
fn bench_algorithm(algorithm: Algorithm, data: &[i64], iterations: u32) -> Duration {
    let mut total = Duration::ZERO;
    for _ in 0..iterations {
        total += algorithm.run(data).elapsed;
    }
    total
}

/// Run a single benchmark and produce a BenchResult.
fn run_bench(algorithm: Algorithm, pattern: &str, size: usize, iterations: u32) -> BenchResult {
    let data = gen_pattern(pattern, size);

    // Warm up
    bench_algorithm(algorithm, &data, 3);

    // Measure
    let total = bench_algorithm(algorithm, &data, iterations);
    let avg_secs = total.as_secs_f64() / f64::from(iterations);

    BenchResult {
        algorithm: algorithm.to_string(),
        pattern: pattern.to_string(),
        elements: size,
        duration_ms: avg_secs * 1000.0,
        throughput_elems_per_sec: size as f64 / avg_secs,
        iterations,
    }
}

fn print_csv_header() {
    println!("algorithm,pattern,elements,duration_ms,elems_per_sec,iterations");
}

fn print_csv_row(r: &BenchResult) {
    println!(
        "{},{},{},{:.3},{:.0},{}",
        r.algorithm, r.pattern, r.elements, r.duration_ms, r.throughput_elems_per_sec, r.iterations,
    );
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let output_format = args.get(1).map(|s| s.as_str()).unwrap_or("text");
    let iterations: u32 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(10);

    let patterns = ["random", "sorted", "reversed", "nearly_sorted"];
    let sizes = [100, 1_000, 5_000];

    let mut results: Vec<BenchResult> = Vec::new();

    for pattern in &patterns {
        for &size in &sizes {
            for algorithm in Algorithm::ALL {
                results.push(run_bench(algorithm, pattern, size, iterations));
            }
        }
    }

    match output_format {
        "csv" => {
            print_csv_header();
            for r in &results {
                print_csv_row(r);
            }
        }
        "json" => match serde_json::to_string_pretty(&results) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("error serializing results: {}", e),
        },
        _ => {
            // Human-readable text output
            println!("Sortsuite Benchmarks");
            println!("====================");
            println!();
            for r in &results {
                println!(
                    "[{}/{}] {} elements: {:.3}ms avg ({} iters) | {:.0} elems/s",
                    r.algorithm,
                    r.pattern,
                    r.elements,
                    r.duration_ms,
                    r.iterations,
                    r.throughput_elems_per_sec,
                );
            }
        }
    }
}
