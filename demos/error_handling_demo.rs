// demos/error_handling_demo.rs
use coinflip_sim::config::RunConfig;
use coinflip_sim::error::SimError;
use coinflip_sim::mc::{summarize, SimulationConfig};
use coinflip_sim::models::PayoffMode;

fn main() {
    println!("Error Handling Demo for coinflip-sim");
    println!("====================================\n");

    println!("1. Testing zero trials...");
    match SimulationConfig::new(0, 100, PayoffMode::Additive) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    println!("\n2. Testing negative steps...");
    match SimulationConfig::from_signed(1_000, -10, PayoffMode::Multiplicative) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    println!("\n3. Testing an unknown payoff mode...");
    match "martingale".parse::<PayoffMode>() {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    println!("\n4. Testing summary of an empty result set...");
    match summarize(&[], PayoffMode::Additive) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(SimError::EmptyResultSet) => println!("   ✓ Caught error: {}", SimError::EmptyResultSet),
        Err(e) => println!("   Unexpected error: {}", e),
    }

    println!("\n5. Testing malformed command-line input...");
    let args = vec!["--trials".to_string(), "lots".to_string()];
    match RunConfig::default().apply_args(args) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    println!("\nAll error paths reported before any simulation work began.");
}
