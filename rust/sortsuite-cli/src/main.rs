//! Sortsuite CLI — terminal interface for the sorting suite.

use clap::{Parser as ClapParser, Subcommand};
use sortsuite_cli::colors::{red, status_label};
use sortsuite_cli::config::SortsuiteConfig;
use sortsuite_cli::dataset;
use sortsuite_cli::report::{self, CompareRow, OutputFormat, RunReport};
use sortsuite_cli::stats::DatasetStats;
use sortsuite_core::Algorithm;
use std::path::{Path, PathBuf};

const DEFAULT_PREVIEW: usize = 50;

#[derive(ClapParser)]
#[command(
    name = "sortsuite",
    version,
    about = "Sorting algorithm suite with timing instrumentation"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort a dataset file and print the result with timing
    Sort {
        /// Path to the dataset file (one integer per line)
        file: PathBuf,

        /// Algorithm to run: bubble, insertion, merge, or all
        #[arg(long)]
        algorithm: Option<String>,

        /// Output format (text, json, or csv)
        #[arg(long)]
        format: Option<String>,

        /// Preview length for sorted output (0 prints everything)
        #[arg(long)]
        preview: Option<usize>,
    },
    /// Print dataset statistics without sorting
    Stats {
        /// Path to the dataset file
        file: PathBuf,

        /// Output format (text or json)
        #[arg(long)]
        format: Option<String>,
    },
    /// Run all three algorithms against the same dataset and compare timings
    Compare {
        /// Path to the dataset file
        file: PathBuf,

        /// Output format (text, json, or csv)
        #[arg(long)]
        format: Option<String>,

        /// Timed runs per algorithm
        #[arg(long, default_value_t = 1)]
        iterations: u32,
    },
    /// Create a sortsuite.toml config file in the current directory
    Init,
}

fn main() {
    let cli = Cli::parse();
    let config = SortsuiteConfig::load();

    match cli.command {
        Commands::Sort {
            file,
            algorithm,
            format,
            preview,
        } => cmd_sort(&file, algorithm.as_deref(), format.as_deref(), preview, &config),
        Commands::Stats { file, format } => cmd_stats(&file, format.as_deref(), &config),
        Commands::Compare {
            file,
            format,
            iterations,
        } => cmd_compare(&file, format.as_deref(), iterations, &config),
        Commands::Init => cmd_init(),
    }
}

fn load_dataset(path: &Path) -> Vec<i64> {
    dataset::load(path).unwrap_or_else(|e| {
        eprintln!("{} {}", red("error:"), e);
        std::process::exit(1);
    })
}

fn resolve_format(flag: Option<&str>, config: &SortsuiteConfig) -> OutputFormat {
    match flag {
        Some(name) => name.parse::<OutputFormat>().unwrap_or_else(|_| {
            eprintln!(
                "{} unknown format '{}' (expected text, json, or csv)",
                red("error:"),
                name
            );
            std::process::exit(1);
        }),
        None => config.defaults.format.unwrap_or(OutputFormat::Text),
    }
}

fn resolve_algorithms(flag: Option<&str>, config: &SortsuiteConfig) -> Vec<Algorithm> {
    match flag {
        Some("all") => Algorithm::ALL.to_vec(),
        Some(name) => match name.parse::<Algorithm>() {
            Ok(algorithm) => vec![algorithm],
            Err(_) => {
                eprintln!(
                    "{} unknown algorithm '{}' (expected bubble, insertion, merge, or all)",
                    red("error:"),
                    name
                );
                std::process::exit(1);
            }
        },
        None => vec![config.defaults.algorithm.unwrap_or(Algorithm::Merge)],
    }
}

fn cmd_sort(
    file: &Path,
    algorithm: Option<&str>,
    format: Option<&str>,
    preview: Option<usize>,
    config: &SortsuiteConfig,
) {
    let fmt = resolve_format(format, config);
    let algorithms = resolve_algorithms(algorithm, config);
    let preview = preview
        .or(config.defaults.preview)
        .unwrap_or(DEFAULT_PREVIEW);

    if fmt == OutputFormat::Text {
        println!("{} {}", status_label("Loading"), file.display());
    }
    let data = load_dataset(file);
    let stats = DatasetStats::compute(&data);

    let mut reports = Vec::new();
    for algorithm in algorithms {
        if fmt == OutputFormat::Text {
            println!(
                "{} {} ({} elements)",
                status_label("Sorting"),
                algorithm,
                data.len()
            );
        }
        let run = algorithm.run(&data);
        reports.push(RunReport::new(algorithm, run, stats.clone()));
    }

    match fmt {
        OutputFormat::Text => {
            for r in &reports {
                println!();
                print!("{}", report::render_text(r, preview));
            }
        }
        OutputFormat::Json => match report::render_json(&reports) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("{} {}", red("error:"), e);
                std::process::exit(1);
            }
        },
        OutputFormat::Csv => {
            println!("{}", report::csv_header());
            for r in &reports {
                println!("{}", report::csv_row(r));
            }
        }
    }
}

fn cmd_stats(file: &Path, format: Option<&str>, config: &SortsuiteConfig) {
    let fmt = resolve_format(format, config);
    let data = load_dataset(file);
    let stats = DatasetStats::compute(&data);

    match fmt {
        OutputFormat::Text => print!("{}", report::render_stats_text(&stats)),
        OutputFormat::Json => match serde_json::to_string_pretty(&stats) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("{} {}", red("error:"), e);
                std::process::exit(1);
            }
        },
        OutputFormat::Csv => {
            eprintln!("{} the stats command has no csv output", red("error:"));
            std::process::exit(1);
        }
    }
}

fn cmd_compare(file: &Path, format: Option<&str>, iterations: u32, config: &SortsuiteConfig) {
    let fmt = resolve_format(format, config);
    if iterations == 0 {
        eprintln!("{} iterations must be at least 1", red("error:"));
        std::process::exit(1);
    }

    if fmt == OutputFormat::Text {
        println!("{} {}", status_label("Loading"), file.display());
    }
    let data = load_dataset(file);

    let mut rows = Vec::new();
    for algorithm in Algorithm::ALL {
        if fmt == OutputFormat::Text {
            println!(
                "{} {} × {}",
                status_label("Comparing"),
                algorithm,
                iterations
            );
        }
        let mut total = std::time::Duration::ZERO;
        for _ in 0..iterations {
            total += algorithm.run(&data).elapsed;
        }
        rows.push(CompareRow {
            algorithm,
            elements: data.len(),
            duration_ms: total.as_secs_f64() * 1000.0 / f64::from(iterations),
            iterations,
        });
    }

    match fmt {
        OutputFormat::Text => {
            println!();
            print!("{}", report::render_compare_text(&rows));
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&rows) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("{} {}", red("error:"), e);
                std::process::exit(1);
            }
        },
        OutputFormat::Csv => {
            println!("{}", report::compare_csv_header());
            for r in &rows {
                println!("{}", report::compare_csv_row(r));
            }
        }
    }
}

fn cmd_init() {
    let path = PathBuf::from("sortsuite.toml");
    if path.exists() {
        eprintln!(
            "{} sortsuite.toml already exists — not overwriting",
            red("error:")
        );
        std::process::exit(1);
    }
    std::fs::write(&path, SortsuiteConfig::default_template()).unwrap_or_else(|e| {
        eprintln!("{} writing sortsuite.toml: {}", red("error:"), e);
        std::process::exit(1);
    });
    println!("{} sortsuite.toml", status_label("Created"));
}
