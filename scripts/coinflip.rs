// scripts/coinflip.rs
use coinflip_sim::config::{RunConfig, USAGE};
use coinflip_sim::math_utils::{standard_error, Timer};
use coinflip_sim::mc::{simulate_seeded, summarize};
use coinflip_sim::output::{self, format_balance, SimulationReport};
use coinflip_sim::SimResult;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging() {
    let use_json = std::env::var("LOG_FORMAT")
        .unwrap_or_else(|_| "text".to_string())
        .eq_ignore_ascii_case("json");

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "coinflip_sim=info,coinflip=info".into());

    if use_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn run(config: &RunConfig) -> SimResult<()> {
    let sim = config.simulation()?;
    let options = config.engine_options().resolve_seed();

    info!(
        trials = sim.trials(),
        seed = ?options.seed,
        steps = sim.steps(),
        mode = %sim.mode(),
        sampling = %options.sampling,
        parallel = options.parallel,
        "Running simulation"
    );

    let mut timer = Timer::new();
    timer.start();
    let results = simulate_seeded(&sim, &options)?;
    let (stats, histogram) = summarize(&results, sim.mode())?;
    let elapsed_ms = timer.elapsed_ms();

    info!(elapsed_ms, "Simulation complete");

    println!(
        "Coin-flip simulation: {} trials x {} flips ({})",
        sim.trials(),
        sim.steps(),
        sim.mode()
    );
    println!("{:-<60}", "");
    println!(
        "  Average payout : {} (± {:.4})",
        format_balance(stats.mean),
        1.96 * standard_error(&results)
    );
    println!("  Median payout  : {}", format_balance(stats.median));
    println!("  Min payout     : {}", format_balance(stats.min));
    println!("  Max payout     : {}", format_balance(stats.max));
    println!("{:-<60}", "");
    println!("Final balance distribution:");
    print!("{}", output::render_histogram(&histogram, 50));

    if let Some(path) = &config.csv_path {
        output::write_results_to_csv(path, &results)?;
        info!(path = %path.display(), "Wrote results CSV");
    }
    if let Some(path) = &config.histogram_csv_path {
        output::write_histogram_to_csv(path, &histogram)?;
        info!(path = %path.display(), "Wrote histogram CSV");
    }
    if let Some(path) = &config.json_path {
        let report = SimulationReport {
            config: sim,
            seed: options.seed,
            sampling: options.sampling,
            stats,
            histogram,
            generated_at: chrono::Utc::now(),
        };
        output::write_report_json(path, &report)?;
        info!(path = %path.display(), "Wrote JSON report");
    }

    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    init_logging();

    let config = match RunConfig::from_env().and_then(|c| c.apply_args(args)) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            eprintln!("{}\n\n{}", e, USAGE);
            return ExitCode::from(2);
        }
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Simulation failed");
            ExitCode::FAILURE
        }
    }
}
