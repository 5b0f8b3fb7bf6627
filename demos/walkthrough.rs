//! Single-threaded tour of the machine
//!
//! This demo walks the full line forward, bounces off the end, and rolls
//! back to the start, printing the outcome of every request.
//!
//! Key concepts:
//! - Fixed linear topology (Initial ⇄ Middle ⇄ Final)
//! - Boundary requests resolve to descriptive rejections, not errors
//! - The log reconstructs the traversal
//!
//! Run with: cargo run --example walkthrough

use lockstep::Machine;

fn main() {
    println!("=== Lockstep Walkthrough ===\n");

    let machine = Machine::new();
    println!("Starting at: {}\n", machine.status());

    println!("Forward:");
    for _ in 0..3 {
        println!("  advance: {}", machine.advance());
    }

    println!("\nBackward:");
    for _ in 0..3 {
        println!("  retreat: {}", machine.retreat());
    }

    println!("\nResting at: {}", machine.status());

    let log = machine.log();
    let path: Vec<&str> = log.path().iter().map(|step| step.name()).collect();
    println!("Path taken: {}", path.join(" -> "));

    println!("\n=== Walkthrough Complete ===");
}
