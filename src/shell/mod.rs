//! Imperative shell around the pure core.
//!
//! This is where locks, clocks, and sleeps live: the [`Machine`] owns the
//! gate and runs the two-phase hop protocol, and [`Timings`] is its one
//! configuration surface.

mod machine;
mod timings;

pub use machine::Machine;
pub use timings::{Timings, TimingsError};
