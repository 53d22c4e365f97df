//! Quicksort Demonstration and Benchmark Harness
//!
//! With no arguments this sorts the fixed sample `[7, 2, 3, 9, 1, 8, 5, 4, 6]`
//! and prints the result. Integers given on the command line are sorted
//! instead, or `--random N` generates N values. Every result is checked for
//! sortedness and for holding the same values as the input.
//!
//! `--benchmark` times the quicksort against `slice::sort_unstable` (pdqsort)
//! across a ladder of sizes and input patterns.
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`
//! (default `quicksort=info`).

use std::io::{self, Write};
use std::time::Instant;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use quicksort::{is_permutation, is_sorted};

/// Sample sorted when no input is given
const SAMPLE: [i32; 9] = [7, 2, 3, 9, 1, 8, 5, 4, 6];

/// Ordered inputs are quadratic for a pivot-last quicksort, so they stop here
const ORDERED_MAX_SIZE: usize = 1 << 14;

#[derive(Parser, Debug)]
#[command(
    name = "quicksort",
    version,
    about = "Sort integers with an in-place Lomuto quicksort"
)]
struct Cli {
    /// Integers to sort (defaults to a fixed sample)
    #[arg(allow_negative_numbers = true, conflicts_with_all = ["random", "benchmark"])]
    values: Vec<i32>,

    /// Sort N randomly generated integers instead
    #[arg(long, value_name = "N")]
    random: Option<usize>,

    /// Seed for random input, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Print only a verification summary instead of the sorted sequence
    #[arg(long)]
    quiet: bool,

    /// Compare against slice::sort_unstable across sizes and input patterns
    #[arg(long, conflicts_with = "random")]
    benchmark: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quicksort=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    debug!(?cli, "parsed arguments");

    let mut rng = make_rng(cli.seed);

    if cli.benchmark {
        return run_benchmark(&mut rng);
    }

    let input: Vec<i32> = match cli.random {
        Some(size) => {
            info!(size, seed = ?cli.seed, "generating random input");
            Pattern::Random.generate(size, &mut rng)
        }
        None if cli.values.is_empty() => SAMPLE.to_vec(),
        None => cli.values,
    };

    let mut output = input.clone();
    let start = Instant::now();
    quicksort::sort(&mut output);
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    check(&input, &output)?;
    info!(len = output.len(), elapsed_ms, "sort verified");

    let mut stdout = io::stdout().lock();
    let written = if cli.quiet {
        writeln!(
            stdout,
            "Sorted {} elements in {:.3} ms: verified OK",
            output.len(),
            elapsed_ms
        )
    } else {
        writeln!(stdout, "{}", render(&output))
    };
    written.context("failed to write to stdout")?;

    Ok(())
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Comma-separated values in brackets, e.g. `[1, 2, 3]`.
fn render(values: &[i32]) -> String {
    let items: Vec<String> = values.iter().map(i32::to_string).collect();
    format!("[{}]", items.join(", "))
}

/// Fail unless `output` is a sorted rearrangement of `input`.
fn check(input: &[i32], output: &[i32]) -> Result<()> {
    ensure!(is_sorted(output), "output is not in ascending order");
    ensure!(
        is_permutation(input, output),
        "output does not hold the same values as the input"
    );
    Ok(())
}

/// Shape of generated benchmark input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pattern {
    Random,
    Ascending,
    Descending,
}

impl Pattern {
    const ALL: [Pattern; 3] = [Pattern::Random, Pattern::Ascending, Pattern::Descending];

    fn label(self) -> &'static str {
        match self {
            Pattern::Random => "random",
            Pattern::Ascending => "ascending",
            Pattern::Descending => "descending",
        }
    }

    fn max_size(self) -> usize {
        match self {
            Pattern::Random => usize::MAX,
            Pattern::Ascending | Pattern::Descending => ORDERED_MAX_SIZE,
        }
    }

    fn generate(self, size: usize, rng: &mut StdRng) -> Vec<i32> {
        match self {
            Pattern::Random => (0..size).map(|_| rng.gen()).collect(),
            Pattern::Ascending => (0..size).map(|i| i as i32).collect(),
            Pattern::Descending => (0..size).rev().map(|i| i as i32).collect(),
        }
    }
}

/// Run benchmarks across multiple array sizes and input patterns
fn run_benchmark(rng: &mut StdRng) -> Result<()> {
    let sizes: Vec<usize> = vec![
        1 << 10, // 1K
        1 << 12, // 4K
        1 << 14, // 16K
        1 << 16, // 64K
        1 << 18, // 256K
        1 << 20, // 1M
    ];

    let mut stdout = io::stdout().lock();
    writeln!(
        stdout,
        "{:>10} | {:>10} | {:>14} | {:>18} | {:>10}",
        "Pattern", "Size", "quicksort (ms)", "sort_unstable (ms)", "Ratio"
    )?;
    writeln!(
        stdout,
        "{:-<10}-+-{:-<10}-+-{:-<14}-+-{:-<18}-+-{:-<10}",
        "", "", "", "", ""
    )?;

    for pattern in Pattern::ALL {
        for &size in sizes.iter().filter(|&&size| size <= pattern.max_size()) {
            let data = pattern.generate(size, rng);

            let mut quick_data = data.clone();
            let quick_start = Instant::now();
            quicksort::sort(&mut quick_data);
            let quick_ms = quick_start.elapsed().as_secs_f64() * 1000.0;

            let mut std_data = data.clone();
            let std_start = Instant::now();
            std_data.sort_unstable();
            let std_ms = std_start.elapsed().as_secs_f64() * 1000.0;

            check(&data, &quick_data)
                .with_context(|| format!("{} input of size {}", pattern.label(), size))?;
            ensure!(
                quick_data == std_data,
                "{} input of size {}: result differs from sort_unstable",
                pattern.label(),
                size
            );
            debug!(pattern = pattern.label(), size, quick_ms, std_ms, "benchmark row");

            writeln!(
                stdout,
                "{:>10} | {:>10} | {:>14.3} | {:>18.3} | {:>9.2}x",
                pattern.label(),
                size,
                quick_ms,
                std_ms,
                quick_ms / std_ms.max(f64::EPSILON)
            )?;
        }
    }

    writeln!(stdout)?;
    writeln!(stdout, "Ratio is quicksort time over sort_unstable time.")?;
    writeln!(
        stdout,
        "Ordered patterns stop at {} elements: they are quadratic for a pivot-last quicksort.",
        ORDERED_MAX_SIZE
    )?;
    Ok(())
}
