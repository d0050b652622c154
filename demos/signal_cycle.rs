//! Signal Cycle Walkthrough
//!
//! This example demonstrates the four-phase rotation of a signalized
//! intersection.
//!
//! Key concepts:
//! - The canonical four-phase transition table
//! - Value-typed cycle outcomes
//! - Inspecting the event journal after driving the core
//!
//! Run with: cargo run --example signal_cycle

use crosslight::builder::standard_intersection;
use crosslight::CycleOutcome;

fn main() {
    println!("=== Signal Cycle Walkthrough ===\n");

    let mut intersection = standard_intersection();
    println!(
        "Starting phase: {}",
        intersection.status().unwrap().phase()
    );

    println!("\nOne full rotation:");
    for step in 1..=4 {
        match intersection.cycle() {
            CycleOutcome::Advanced { from, to } => {
                println!("  step {step}: {from} -> {to}");
            }
            outcome => println!("  step {step}: unexpected outcome {outcome:?}"),
        }
    }

    println!(
        "\nBack at the starting phase: {}",
        intersection.status().unwrap().phase()
    );

    println!("\nEverything the intersection reported:");
    for record in intersection.journal().records() {
        println!("  [{}] {}", record.event.severity(), record.event);
    }

    println!("\n=== Example Complete ===");
}
