//! Resting steps and the transition table.
//!
//! The machine moves along a fixed line of three steps. This module is the
//! complete transition function: every legal edge is encoded here, and the
//! concurrent shell never invents one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A resting step on the line.
///
/// A step is a position the machine may be observed in indefinitely absent
/// new requests. The line is `Initial ⇄ Middle ⇄ Final`; there are no other
/// edges.
///
/// # Example
///
/// ```rust
/// use lockstep::Step;
///
/// assert_eq!(Step::Initial.forward(), Some(Step::Middle));
/// assert_eq!(Step::Middle.forward(), Some(Step::Final));
/// assert_eq!(Step::Final.forward(), None);
///
/// assert_eq!(Step::Middle.backward(), Some(Step::Initial));
/// assert_eq!(Step::Initial.backward(), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Step {
    Initial,
    Middle,
    Final,
}

/// Which way a request wants to move.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Backward,
}

impl Step {
    /// The step's name for display and logging.
    pub fn name(self) -> &'static str {
        match self {
            Self::Initial => "Initial",
            Self::Middle => "Middle",
            Self::Final => "Final",
        }
    }

    /// The next step forward, or `None` at the end of the line.
    pub fn forward(self) -> Option<Step> {
        match self {
            Self::Initial => Some(Self::Middle),
            Self::Middle => Some(Self::Final),
            Self::Final => None,
        }
    }

    /// The next step backward, or `None` at the start of the line.
    pub fn backward(self) -> Option<Step> {
        match self {
            Self::Initial => None,
            Self::Middle => Some(Self::Initial),
            Self::Final => Some(Self::Middle),
        }
    }

    /// The neighboring step in the given direction.
    pub fn toward(self, direction: Direction) -> Option<Step> {
        match direction {
            Direction::Forward => self.forward(),
            Direction::Backward => self.backward(),
        }
    }

    /// Check if this is the first step (no predecessor).
    pub fn is_first(self) -> bool {
        matches!(self, Self::Initial)
    }

    /// Check if this is the last step (no successor).
    pub fn is_last(self) -> bool {
        matches!(self, Self::Final)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_stable() {
        assert_eq!(Step::Initial.name(), "Initial");
        assert_eq!(Step::Middle.name(), "Middle");
        assert_eq!(Step::Final.name(), "Final");
    }

    #[test]
    fn forward_walks_the_line() {
        assert_eq!(Step::Initial.forward(), Some(Step::Middle));
        assert_eq!(Step::Middle.forward(), Some(Step::Final));
        assert_eq!(Step::Final.forward(), None);
    }

    #[test]
    fn backward_walks_the_line() {
        assert_eq!(Step::Final.backward(), Some(Step::Middle));
        assert_eq!(Step::Middle.backward(), Some(Step::Initial));
        assert_eq!(Step::Initial.backward(), None);
    }

    #[test]
    fn toward_matches_the_directional_methods() {
        for step in [Step::Initial, Step::Middle, Step::Final] {
            assert_eq!(step.toward(Direction::Forward), step.forward());
            assert_eq!(step.toward(Direction::Backward), step.backward());
        }
    }

    #[test]
    fn boundary_predicates_identify_the_ends() {
        assert!(Step::Initial.is_first());
        assert!(!Step::Initial.is_last());
        assert!(!Step::Middle.is_first());
        assert!(!Step::Middle.is_last());
        assert!(Step::Final.is_last());
        assert!(!Step::Final.is_first());
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(Step::Middle.to_string(), "Middle");
    }

    #[test]
    fn step_serializes_correctly() {
        let step = Step::Middle;
        let json = serde_json::to_string(&step).unwrap();
        let deserialized: Step = serde_json::from_str(&json).unwrap();
        assert_eq!(step, deserialized);
    }
}
