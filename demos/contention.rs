//! Concurrent drivers hammering one machine
//!
//! Four threads share a single machine: one polls the status, one asks to
//! advance every millisecond, and two ask to retreat on slower timers.
//! Every run interleaves differently; what never changes is that each
//! request resolves to a descriptive outcome and the status poller is
//! never blocked behind a slow hop.
//!
//! Run with: cargo run --example contention

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use lockstep::Machine;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let machine = Machine::new();
    let (tx, rx) = mpsc::channel::<String>();

    thread::scope(|scope| {
        // Ask status constantly
        let status_tx = tx.clone();
        let status_machine = &machine;
        scope.spawn(move || {
            for _ in 0..50 {
                let _ = status_tx.send(format!("> Status? [{}]", status_machine.status()));
                thread::sleep(Duration::from_millis(1));
            }
        });

        // Ask to advance every 1 ms
        let advance_tx = tx.clone();
        let advance_machine = &machine;
        scope.spawn(move || {
            for _ in 0..20 {
                thread::sleep(Duration::from_millis(1));
                let _ = advance_tx.send(format!("advance: {}", advance_machine.advance()));
            }
        });

        // Ask to retreat every 10 ms
        let slow_tx = tx.clone();
        let slow_machine = &machine;
        scope.spawn(move || {
            for _ in 0..20 {
                thread::sleep(Duration::from_millis(10));
                let _ = slow_tx.send(format!("retreat (10ms): {}", slow_machine.retreat()));
            }
        });

        // Ask to retreat every 25 ms
        let slower_tx = tx.clone();
        let slower_machine = &machine;
        scope.spawn(move || {
            for _ in 0..20 {
                thread::sleep(Duration::from_millis(25));
                let _ = slower_tx.send(format!("retreat (25ms): {}", slower_machine.retreat()));
            }
        });
    });
    drop(tx);

    for line in rx {
        println!("{line}");
    }

    println!("\nFinal status: {}", machine.status());
    println!("Completed hops: {}", machine.log().len());
}
