//! Benchmark binary for score transform throughput.
//!
//! Usage:
//!     score_bench <data_file> <iterations>
//!
//! The data file is JSON of the form
//! `{ "transforms": [{ "type": "gaussian", "center": 50, "std_dev": 10 }], "values": [...] }`.
//! Each transform is built through the process-wide registry and timed over the
//! full value batch. Outputs a JSON array of benchmark results to stdout;
//! progress is logged to stderr (set `RUST_LOG=debug` for construction details).

use serde::{Deserialize, Serialize};
use std::env;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::process;
use std::time::Instant;

use score_core::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Deserialize)]
struct BenchData {
    transforms: Vec<ParameterRecord>,
    values: Vec<f64>,
}

#[derive(Debug, Serialize)]
struct BenchmarkResult {
    name: String,
    values: usize,
    iterations: usize,
    total_time_ms: f64,
    avg_time_ms: f64,
    min_time_ms: f64,
    max_time_ms: f64,
    throughput_values_per_sec: f64,
    min_score: f64,
    max_score: f64,
}

fn load_data(path: &str) -> Result<BenchData, Box<dyn Error>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}

fn describe(record: &ParameterRecord) -> String {
    let fields: Vec<String> = record
        .field_names()
        .filter_map(|name| record.get(name).map(|v| format!("{name}={v}")))
        .collect();
    format!("{}({})", record.kind(), fields.join(", "))
}

fn benchmark(
    name: String,
    transform: &dyn Transform<f64>,
    values: &[f64],
    iterations: usize,
) -> BenchmarkResult {
    let mut times = Vec::with_capacity(iterations);
    let mut scores = Series::new();

    for _ in 0..iterations {
        let start = Instant::now();
        scores = Series::from_vec(transform.invoke(values));
        let elapsed = start.elapsed().as_secs_f64() * 1000.0;
        times.push(elapsed);
    }

    let total_time: f64 = times.iter().sum();
    let avg_time = total_time / iterations as f64;
    let min_time = times.iter().copied().fold(f64::INFINITY, f64::min);
    let max_time = times.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let throughput = if avg_time > 0.0 {
        (values.len() as f64 / avg_time) * 1000.0
    } else {
        0.0
    };

    BenchmarkResult {
        name,
        values: values.len(),
        iterations,
        total_time_ms: total_time,
        avg_time_ms: avg_time,
        min_time_ms: min_time,
        max_time_ms: max_time,
        throughput_values_per_sec: throughput,
        min_score: scores.min(),
        max_score: scores.max(),
    }
}

fn run(data_file: &str, iterations: usize) -> Result<(), Box<dyn Error>> {
    info!(data_file, "loading benchmark data");
    let data = load_data(data_file)?;
    info!(
        transforms = data.transforms.len(),
        values = data.values.len(),
        "loaded benchmark data"
    );

    let mut results = Vec::with_capacity(data.transforms.len());
    for record in &data.transforms {
        let name = describe(record);
        let transform = score_transforms::construct(record)?;
        info!(%name, "benchmarking");
        results.push(benchmark(name, transform.as_ref(), &data.values, iterations));
    }

    println!("{}", serde_json::to_string(&results)?);
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <data_file> <iterations>", args[0]);
        process::exit(1);
    }

    let iterations: usize = match args[2].parse() {
        Ok(n) if n > 0 => n,
        _ => {
            eprintln!("Invalid iterations: {}", args[2]);
            process::exit(1);
        }
    };

    if let Err(e) = run(&args[1], iterations) {
        error!(error = %e, "benchmark failed");
        process::exit(1);
    }
}
