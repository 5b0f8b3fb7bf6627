//! The machine: one gate, one phase, two-phase hops.
//!
//! A hop is split into a decision half and a work half. The decision half
//! holds the gate exclusively just long enough to read the current phase,
//! reject or pick the edge, and install [`Phase::InTransition`]. The slow
//! work half runs with the gate open, so readers observe the transient
//! phase instead of blocking, and every competing request is answered
//! `Busy` from it. Installing the destination is a second, separate
//! critical section.

use std::thread;
use std::time::Duration;

use chrono::Utc;
use parking_lot::{Mutex, RwLock};
use tracing::{debug, trace};

use crate::core::{Direction, Outcome, Phase, Step, TransitionLog, TransitionRecord};
use crate::shell::timings::Timings;

/// A thread-safe linear state machine.
///
/// The machine is created resting on [`Step::Initial`] and moves along
/// `Initial ⇄ Middle ⇄ Final`. Forward hops take simulated time; backward
/// hops are instantaneous. All methods take `&self`: one instance is meant
/// to be shared across threads.
///
/// # Example
///
/// ```rust
/// use lockstep::{Machine, Outcome, Step};
///
/// let machine = Machine::new();
/// assert_eq!(machine.status(), "Initial");
///
/// let outcome = machine.advance();
/// assert_eq!(
///     outcome,
///     Outcome::Transitioned { from: Step::Initial, to: Step::Middle }
/// );
/// assert_eq!(machine.status(), "Middle");
///
/// let outcome = machine.retreat();
/// assert_eq!(outcome.to_string(), "Middle -> Initial");
/// ```
pub struct Machine {
    /// The gate: exclusive for the two installation points, shared for reads.
    phase: RwLock<Phase>,
    log: Mutex<TransitionLog>,
    timings: Timings,
}

impl Machine {
    /// Create a machine resting on `Initial` with default timings.
    pub fn new() -> Self {
        Self::with_timings(Timings::default())
    }

    /// Create a machine resting on `Initial` with the given timings.
    pub fn with_timings(timings: Timings) -> Self {
        Self {
            phase: RwLock::new(Phase::Initial),
            log: Mutex::new(TransitionLog::new()),
            timings,
        }
    }

    /// Name of the phase the machine is currently in.
    ///
    /// Takes the gate shared, so readers only ever wait out the brief
    /// decision critical sections, never a hop's slow work. Mid-hop this
    /// reports the label of the step being departed.
    pub fn status(&self) -> &'static str {
        self.phase.read().name()
    }

    /// Snapshot of the current phase.
    ///
    /// Same locking discipline as [`Machine::status`]; use this when the
    /// caller needs to tell the transient window apart from a resting step.
    pub fn current(&self) -> Phase {
        *self.phase.read()
    }

    /// Request forward movement.
    ///
    /// Blocks for the hop's simulated latency when the request wins the
    /// gate; resolves immediately with a rejection otherwise.
    pub fn advance(&self) -> Outcome {
        self.drive(Direction::Forward)
    }

    /// Request backward movement. Rollbacks carry no simulated latency.
    pub fn retreat(&self) -> Outcome {
        self.drive(Direction::Backward)
    }

    /// Snapshot of the completed-transition log.
    pub fn log(&self) -> TransitionLog {
        self.log.lock().clone()
    }

    /// The timings this machine was built with.
    pub fn timings(&self) -> Timings {
        self.timings
    }

    fn drive(&self, direction: Direction) -> Outcome {
        let permit = match self.begin(direction) {
            Ok(permit) => permit,
            Err(rejection) => return rejection,
        };

        // Work half: the gate is open, readers see InTransition.
        let delay = permit.delay;
        if !delay.is_zero() {
            thread::sleep(delay);
        }

        permit.finish()
    }

    /// Decision half of a hop.
    ///
    /// Holds the gate exclusively while it decides: a request that finds
    /// the machine mid-hop or at a boundary is rejected; otherwise
    /// `InTransition` is installed and a permit to finish is returned. The
    /// gate is released when this returns, before any slow work.
    fn begin(&self, direction: Direction) -> Result<Permit<'_>, Outcome> {
        let mut phase = self.phase.write();

        let Some(from) = phase.step() else {
            let departing = phase.name();
            drop(phase);
            trace!(departing, ?direction, "request rejected, hop in flight");
            return Err(Outcome::Busy { direction });
        };

        let Some(to) = from.toward(direction) else {
            drop(phase);
            let rejection = match direction {
                Direction::Forward => Outcome::AtEnd,
                Direction::Backward => Outcome::AtStart,
            };
            trace!(at = from.name(), ?direction, "request rejected at boundary");
            return Err(rejection);
        };

        *phase = Phase::InTransition { from };
        drop(phase);
        trace!(from = from.name(), to = to.name(), "hop begun");

        Ok(Permit {
            machine: self,
            from,
            to,
            delay: self.timings.delay(from, direction),
        })
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}

/// Capability to finish a hop whose decision half has already run.
///
/// While a permit exists the machine is parked in `InTransition`; the
/// holder must install the destination exactly once via [`Permit::finish`].
#[must_use]
struct Permit<'m> {
    machine: &'m Machine,
    from: Step,
    to: Step,
    delay: Duration,
}

impl Permit<'_> {
    /// Install the destination step and record the hop.
    fn finish(self) -> Outcome {
        {
            let mut phase = self.machine.phase.write();
            *phase = Phase::from(self.to);
        }

        let record = TransitionRecord {
            from: self.from,
            to: self.to,
            at: Utc::now(),
        };
        {
            let mut log = self.machine.log.lock();
            let appended = log.record(record);
            *log = appended;
        }

        debug!(from = self.from.name(), to = self.to.name(), "hop complete");
        Outcome::Transitioned {
            from: self.from,
            to: self.to,
        }
    }
}
