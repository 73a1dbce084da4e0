// scripts/benchmark.rs
use coinflip_sim::analytics::coinflip_analytic;
use coinflip_sim::math_utils::Timer;
use coinflip_sim::mc::{simulate_seeded, summarize, EngineOptions, Sampling, SimulationConfig};
use coinflip_sim::models::PayoffMode;
use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Machine facts recorded next to every benchmark run
#[derive(Debug)]
struct Machine {
    os: &'static str,
    arch: &'static str,
    cores: usize,
    rayon_threads: usize,
}

impl Machine {
    fn detect() -> Self {
        Self {
            os: env::consts::OS,
            arch: env::consts::ARCH,
            cores: num_cpus::get(),
            rayon_threads: rayon::current_num_threads(),
        }
    }

    fn describe(&self) -> String {
        format!(
            "{}/{}, {} cores, {} rayon threads",
            self.os, self.arch, self.cores, self.rayon_threads
        )
    }
}

#[derive(Debug)]
struct BenchmarkResult {
    name: String,
    trials: usize,
    time_ms: f64,
    throughput_trials_per_sec: f64,
    mean: f64,
    analytic_mean: f64,
    relative_error: f64,
}

fn run_benchmarks() -> Vec<BenchmarkResult> {
    let mut results = Vec::new();
    let steps = 100;

    for &trials in &[10_000usize, 100_000, 1_000_000] {
        println!("Running benchmarks with {} trials...", trials);

        for mode in [PayoffMode::Additive, PayoffMode::Multiplicative] {
            let cfg = SimulationConfig::new(trials, steps, mode).expect("Valid configuration");
            let analytic_mean = coinflip_analytic::expected_mean(mode, steps as u64);

            for (sampling, parallel) in [
                (Sampling::PerFlip, false),
                (Sampling::PerFlip, true),
                (Sampling::HeadsCount, true),
            ] {
                let options = EngineOptions {
                    seed: Some(42),
                    sampling,
                    parallel,
                };

                let mut timer = Timer::new();
                timer.start();
                let balances = simulate_seeded(&cfg, &options).expect("Simulation runs");
                let (stats, _) = summarize(&balances, mode).expect("Non-empty results");
                let time_ms = timer.elapsed_ms();

                results.push(BenchmarkResult {
                    name: format!(
                        "{} {} {}",
                        mode,
                        sampling,
                        if parallel { "par" } else { "seq" }
                    ),
                    trials,
                    time_ms,
                    throughput_trials_per_sec: trials as f64 / (time_ms / 1000.0),
                    mean: stats.mean,
                    analytic_mean,
                    relative_error: (stats.mean - analytic_mean).abs() / analytic_mean,
                });
            }
        }
    }

    results
}

fn write_results_to_csv(
    results: &[BenchmarkResult],
    machine: &Machine,
    filename: &str,
) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(filename)?);

    writeln!(file, "# Machine: {}", machine.describe())?;
    writeln!(file, "# Date: {}", chrono::Utc::now().to_rfc3339())?;
    writeln!(
        file,
        "Benchmark,Trials,Time_ms,Throughput_trials_per_sec,Mean,Analytic_Mean,Relative_Error"
    )?;

    for result in results {
        writeln!(
            file,
            "{},{},{:.2},{:.0},{:.6},{:.6},{:.6}",
            result.name,
            result.trials,
            result.time_ms,
            result.throughput_trials_per_sec,
            result.mean,
            result.analytic_mean,
            result.relative_error
        )?;
    }
    file.flush()
}

fn main() {
    let machine = Machine::detect();
    println!("coinflip-sim benchmark on {}\n", machine.describe());

    let all_results = run_benchmarks();

    println!(
        "\n{:<36} {:>9} {:>12} {:>15} {:>10} {:>10} {:>10}",
        "Benchmark", "Trials", "Time (ms)", "Trials/s", "Mean", "Analytic", "Rel Error"
    );
    println!("{:-<108}", "");
    for result in &all_results {
        println!(
            "{:<36} {:>9} {:>12.2} {:>15.0} {:>10.4} {:>10.4} {:>9.2}%",
            result.name,
            result.trials,
            result.time_ms,
            result.throughput_trials_per_sec,
            result.mean,
            result.analytic_mean,
            result.relative_error * 100.0
        );
    }

    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let filename = format!("benchmark_results_{}.csv", timestamp);
    match write_results_to_csv(&all_results, &machine, &filename) {
        Ok(()) => println!("\nResults written to {}", filename),
        Err(e) => eprintln!("\nCould not write {}: {}", filename, e),
    }
}
