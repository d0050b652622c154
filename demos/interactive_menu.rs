//! Interactive Menu
//!
//! The console application around the intersection core: two signal
//! heads, an intersection in normal mode, and a menu loop on
//! stdin/stdout.
//!
//! Key concepts:
//! - Building the intersection with the fluent builder
//! - The imperative shell rendering journaled events
//! - Clean termination on the exit option or end of input
//!
//! Run with: cargo run --example interactive_menu

use crosslight::shell::MenuShell;
use crosslight::{Axis, Color, IntersectionBuilder, SignalHead};
use std::io;

fn main() -> io::Result<()> {
    let intersection = IntersectionBuilder::new()
        .north_south(SignalHead::new(Axis::NorthSouth, Color::Red))
        .east_west(SignalHead::new(Axis::EastWest, Color::Red))
        .build()
        .unwrap();

    let stdin = io::stdin();
    let mut shell = MenuShell::new(intersection, stdin.lock(), io::stdout());
    shell.run()
}
