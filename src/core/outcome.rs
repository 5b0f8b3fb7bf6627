//! Request outcomes as data.
//!
//! Every `advance`/`retreat` request resolves to a descriptive [`Outcome`]
//! rather than an error: an illegal or contended request is a legitimate
//! answer, not a failure, and the machine stays usable after any of them.

use super::step::{Direction, Step};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What happened to a single `advance` or `retreat` request.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Outcome {
    /// The request won the gate and the hop completed.
    Transitioned { from: Step, to: Step },

    /// The request would move backward past the first step.
    AtStart,

    /// The request would move forward past the last step.
    AtEnd,

    /// Another hop was in flight; the request was rejected, not queued.
    Busy { direction: Direction },
}

impl Outcome {
    /// Check if the request actually moved the machine.
    pub fn is_transition(&self) -> bool {
        matches!(self, Self::Transitioned { .. })
    }

    /// Check if the request was rejected (boundary or contention).
    pub fn is_rejection(&self) -> bool {
        !self.is_transition()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transitioned { from, to } => write!(f, "{} -> {}", from.name(), to.name()),
            Self::AtStart => f.write_str("cannot retreat, already at the start"),
            Self::AtEnd => f.write_str("cannot advance, already at the end"),
            Self::Busy {
                direction: Direction::Forward,
            } => f.write_str("busy, cannot advance"),
            Self::Busy {
                direction: Direction::Backward,
            } => f.write_str("busy, cannot retreat"),
        }
    }
}
