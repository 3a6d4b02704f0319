use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use selection_sort::baselines::{BubbleSorter, StdSorter, StdUnstableSorter};
use selection_sort::{
    is_permutation, is_sorted, logging, selection_sort_counted, Error, Result, SelectionSorter,
    SortStats, Sorter,
};
use serde::Serialize;
use std::process::ExitCode;
use std::time::{Duration, Instant};
use tracing::level_filters::LevelFilter;
use tracing::{error, info, warn};

/// Compare selection sort against the baseline sorters.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Input lengths to generate, comma separated.
    #[arg(long, value_delimiter = ',', default_value = "100,500,1000")]
    sizes: Vec<usize>,

    /// Seed for the data generator.
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    #[arg(long, default_value_t = 50)]
    warmup_ms: u64,

    #[arg(long, default_value_t = 300)]
    run_ms: u64,
}

#[derive(Serialize)]
struct BenchmarkResult {
    name: String,
    ops_per_second: f64,
    correct: bool,
}

#[derive(Serialize)]
struct SelectionStats {
    len: usize,
    #[serde(flatten)]
    stats: SortStats,
    expected: bool,
}

#[derive(Serialize)]
struct FullResults {
    results: Vec<BenchmarkResult>,
    selection_stats: SelectionStats,
    correctness: bool,
}

fn generate_test_data(sizes: &[usize], seed: u64) -> Vec<Vec<i32>> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut tests = Vec::new();

    for &size in sizes {
        // Random data
        for _ in 0..5 {
            let data: Vec<i32> = (0..size).map(|_| rng.gen_range(-10000..10000)).collect();
            tests.push(data);
        }

        // Nearly sorted (90% sorted)
        if size > 0 {
            for _ in 0..2 {
                let mut data: Vec<i32> = (0..size as i32).collect();
                for _ in 0..size / 10 {
                    let i = rng.gen_range(0..size);
                    let j = rng.gen_range(0..size);
                    data.swap(i, j);
                }
                tests.push(data);
            }
        }

        // Reverse sorted
        tests.push((0..size as i32).rev().collect());
    }

    tests
}

fn verify_correctness<S: Sorter>(sorter: &S, tests: &[Vec<i32>]) -> bool {
    tests.iter().all(|test| {
        let mut data = test.clone();
        sorter.sort(&mut data);
        is_sorted(&data) && is_permutation(test, &data)
    })
}

fn benchmark<S: Sorter>(sorter: &S, tests: &[Vec<i32>], warmup_ms: u64, run_ms: u64) -> f64 {
    // Warmup
    let warmup_end = Instant::now() + Duration::from_millis(warmup_ms);
    while Instant::now() < warmup_end {
        for test in tests.iter().take(3) {
            let mut data = test.clone();
            sorter.sort(&mut data);
            std::hint::black_box(&data);
        }
    }

    let mut ops = 0u64;
    let start = Instant::now();
    let end = start + Duration::from_millis(run_ms);
    while Instant::now() < end {
        for test in tests {
            let mut data = test.clone();
            sorter.sort(&mut data);
            std::hint::black_box(&data);
            ops += 1;
        }
    }
    ops as f64 / start.elapsed().as_secs_f64()
}

fn measure<S: Sorter>(
    name: &str,
    sorter: &S,
    tests: &[Vec<i32>],
    args: &Args,
) -> BenchmarkResult {
    let correct = verify_correctness(sorter, tests);
    if !correct {
        warn!(sorter = name, "incorrect output");
    }
    let ops_per_second = benchmark(sorter, tests, args.warmup_ms, args.run_ms);
    info!(sorter = name, ops_per_second, correct, "measured");
    BenchmarkResult { name: name.into(), ops_per_second, correct }
}

fn selection_stats(tests: &[Vec<i32>]) -> SelectionStats {
    let mut data = tests.iter().max_by_key(|t| t.len()).cloned().unwrap_or_default();
    let stats = selection_sort_counted(&mut data);
    let expected = stats == SortStats::expected(data.len());
    SelectionStats { len: data.len(), stats, expected }
}

fn run(args: &Args) -> Result<bool> {
    if args.sizes.is_empty() {
        return Err(Error::EmptySizes);
    }

    let tests = generate_test_data(&args.sizes, args.seed);
    info!(inputs = tests.len(), sizes = ?args.sizes, seed = args.seed, "generated test data");

    let results = vec![
        measure("selection", &SelectionSorter, &tests, args),
        measure("bubble", &BubbleSorter, &tests, args),
        measure("std", &StdSorter, &tests, args),
        measure("std_unstable", &StdUnstableSorter, &tests, args),
    ];

    let selection_stats = selection_stats(&tests);
    let correctness = selection_stats.expected && results.iter().all(|r| r.correct);

    let full = FullResults { results, selection_stats, correctness };
    println!("{}", serde_json::to_string(&full)?);

    if let Some(bad) = full.results.iter().find(|r| !r.correct) {
        return Err(Error::Incorrect { name: bad.name.clone() });
    }
    Ok(correctness)
}

fn main() -> ExitCode {
    logging::init(LevelFilter::INFO);
    let args = Args::parse();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => {
            error!("operation counts did not match n-1 swaps and n(n-1)/2 comparisons");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
