//! The observable state of the machine, including the transient one.
//!
//! A reader can catch the machine either resting on a [`Step`] or mid-hop.
//! The mid-hop window is a first-class value, `InTransition`, not an
//! implicit lock: readers observe it instead of blocking behind the slow
//! half of a transition.

use super::step::Step;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a reader can observe the machine in.
///
/// Exactly four variants: the three resting steps plus the transient
/// `InTransition`, which carries the step being departed and is never a
/// valid resting state.
///
/// # Example
///
/// ```rust
/// use lockstep::{Phase, Step};
///
/// let resting = Phase::from(Step::Middle);
/// assert_eq!(resting.step(), Some(Step::Middle));
/// assert!(!resting.is_busy());
///
/// let mid_hop = Phase::InTransition { from: Step::Middle };
/// assert_eq!(mid_hop.step(), None);
/// assert!(mid_hop.is_busy());
/// assert_eq!(mid_hop.name(), "Middle");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Phase {
    Initial,
    Middle,
    Final,
    /// A hop's slow work is executing; `from` is the step being departed.
    InTransition { from: Step },
}

impl Phase {
    /// The phase's name for display and logging.
    ///
    /// While a hop is in flight this reports the label of the step being
    /// departed. Callers that need to tell the transient window apart use
    /// [`Phase::is_busy`] or [`Phase::step`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::Initial => Step::Initial.name(),
            Self::Middle => Step::Middle.name(),
            Self::Final => Step::Final.name(),
            Self::InTransition { from } => from.name(),
        }
    }

    /// The resting step, or `None` while a hop is in flight.
    pub fn step(&self) -> Option<Step> {
        match self {
            Self::Initial => Some(Step::Initial),
            Self::Middle => Some(Step::Middle),
            Self::Final => Some(Step::Final),
            Self::InTransition { .. } => None,
        }
    }

    /// Check if a hop is currently in flight.
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::InTransition { .. })
    }
}

impl From<Step> for Phase {
    fn from(step: Step) -> Self {
        match step {
            Step::Initial => Self::Initial,
            Step::Middle => Self::Middle,
            Step::Final => Self::Final,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resting_phases_report_their_step() {
        assert_eq!(Phase::Initial.step(), Some(Step::Initial));
        assert_eq!(Phase::Middle.step(), Some(Step::Middle));
        assert_eq!(Phase::Final.step(), Some(Step::Final));
    }

    #[test]
    fn in_transition_has_no_resting_step() {
        let phase = Phase::InTransition { from: Step::Initial };
        assert_eq!(phase.step(), None);
        assert!(phase.is_busy());
    }

    #[test]
    fn resting_phases_are_not_busy() {
        assert!(!Phase::Initial.is_busy());
        assert!(!Phase::Middle.is_busy());
        assert!(!Phase::Final.is_busy());
    }

    #[test]
    fn in_transition_reports_the_departing_label() {
        for from in [Step::Initial, Step::Middle, Step::Final] {
            let phase = Phase::InTransition { from };
            assert_eq!(phase.name(), from.name());
        }
    }

    #[test]
    fn from_step_round_trips() {
        for step in [Step::Initial, Step::Middle, Step::Final] {
            assert_eq!(Phase::from(step).step(), Some(step));
        }
    }

    #[test]
    fn phase_serializes_correctly() {
        let phase = Phase::InTransition { from: Step::Middle };
        let json = serde_json::to_string(&phase).unwrap();
        let deserialized: Phase = serde_json::from_str(&json).unwrap();
        assert_eq!(phase, deserialized);
    }
}
