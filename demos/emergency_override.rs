//! Emergency Override
//!
//! This example demonstrates the emergency override dominating the
//! normal cycle.
//!
//! Key concepts:
//! - Forcing both heads red with the override
//! - Blocked cycles while the override is active
//! - Resuming from the cycle start after deactivation
//!
//! Run with: cargo run --example emergency_override

use crosslight::builder::standard_intersection;
use crosslight::{ModeOutcome, Severity};

fn main() {
    println!("=== Emergency Override ===\n");

    let mut intersection = standard_intersection();
    println!("Starting phase: {}", intersection.status().unwrap().phase());

    intersection.cycle();
    println!("After one cycle: {}", intersection.status().unwrap().phase());

    println!("\nActivating the override:");
    if let ModeOutcome::Applied { mode } = intersection.set_emergency_mode(true) {
        println!("  mode is now {mode}");
    }
    println!("  phase: {}", intersection.status().unwrap().phase());

    println!("\nCycling is blocked while the override is active:");
    for attempt in 1..=3 {
        println!("  attempt {attempt}: {:?}", intersection.cycle());
    }

    println!("\nDeactivating the override:");
    intersection.set_emergency_mode(false);
    println!("  phase: {}", intersection.status().unwrap().phase());

    println!("\nWarnings the journal captured:");
    for record in intersection.journal().of_severity(Severity::Warning) {
        println!("  [WARN] {}", record.event);
    }

    println!("\n=== Example Complete ===");
}
