// demos/demo.rs
use coinflip_sim::analytics::coinflip_analytic;
use coinflip_sim::math_utils::Timer;
use coinflip_sim::mc::{play_trial, simulate_seeded, summarize, EngineOptions, SimulationConfig};
use coinflip_sim::models::PayoffMode;
use coinflip_sim::output::{format_balance, render_histogram};
use coinflip_sim::rng::{FixedCoin, Flip};

fn main() {
    println!("Running coinflip-sim Monte Carlo Demo\n");

    let trials = 100_000;
    let steps = 100;
    let options = EngineOptions {
        seed: Some(42),
        ..Default::default()
    };

    for mode in [PayoffMode::Additive, PayoffMode::Multiplicative] {
        let cfg = SimulationConfig::new(trials, steps, mode).expect("Valid configuration");

        let mut timer = Timer::new();
        timer.start();
        let results = simulate_seeded(&cfg, &options).expect("Simulation runs");
        let (stats, histogram) = summarize(&results, mode).expect("Non-empty results");
        let elapsed = timer.elapsed_ms();

        let p_loss =
            coinflip_analytic::probability_of_loss(mode, steps as u64).expect("Valid step count");

        println!("--- {} game ({} trials x {} flips, {:.1} ms) ---", mode, trials, steps, elapsed);
        println!(
            "  Mean   : {:>12}   (analytic {})",
            format_balance(stats.mean),
            format_balance(coinflip_analytic::expected_mean(mode, steps as u64))
        );
        println!(
            "  Median : {:>12}   (typical  {})",
            format_balance(stats.median),
            format_balance(coinflip_analytic::typical_balance(mode, steps as u64))
        );
        println!("  Min    : {:>12}", format_balance(stats.min));
        println!("  Max    : {:>12}", format_balance(stats.max));
        println!("  P(loss): {:.4}", p_loss);
        println!();
        print!("{}", render_histogram(&histogram, 40));
        println!();
    }

    // A single lucky trial: two heads in a row on the multiplicative game
    let mut always_heads = FixedCoin(Flip::Heads);
    let lucky = play_trial(PayoffMode::Multiplicative, 2, &mut always_heads);
    println!("Two straight heads on a unit stake: {}", format_balance(lucky));
}
