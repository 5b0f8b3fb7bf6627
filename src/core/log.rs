//! Completed-transition log.
//!
//! Tracks the hops a machine has actually made, in order. The log is
//! immutable: [`TransitionLog::record`] returns a new log with the record
//! appended, so a snapshot handed to a caller never changes underneath it.

use super::step::Step;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single completed hop.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The step departed
    pub from: Step,
    /// The step installed
    pub to: Step,
    /// When the destination was installed
    pub at: DateTime<Utc>,
}

/// Ordered log of completed hops.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use lockstep::{Step, TransitionLog, TransitionRecord};
///
/// let log = TransitionLog::new();
/// let log = log.record(TransitionRecord {
///     from: Step::Initial,
///     to: Step::Middle,
///     at: Utc::now(),
/// });
///
/// assert_eq!(log.path(), vec![Step::Initial, Step::Middle]);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TransitionLog {
    records: Vec<TransitionRecord>,
}

impl Default for TransitionLog {
    fn default() -> Self {
        Self::new()
    }
}

impl TransitionLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record, returning a new log.
    ///
    /// The existing log is left untouched.
    pub fn record(&self, record: TransitionRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// The sequence of resting steps traversed: the first record's origin,
    /// then the destination of each hop.
    pub fn path(&self) -> Vec<Step> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(first.from);
        }
        for record in &self.records {
            path.push(record.to);
        }
        path
    }

    /// Time spanned from the first to the last recorded hop.
    ///
    /// `None` on an empty log.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.first()?, self.records.last()?);
        last.at.signed_duration_since(first.at).to_std().ok()
    }

    /// All records, in order.
    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }

    /// Number of completed hops.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if no hops have completed yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hop(from: Step, to: Step) -> TransitionRecord {
        TransitionRecord {
            from,
            to,
            at: Utc::now(),
        }
    }

    #[test]
    fn new_log_is_empty() {
        let log = TransitionLog::new();
        assert!(log.is_empty());
        assert!(log.path().is_empty());
        assert!(log.duration().is_none());
    }

    #[test]
    fn record_leaves_the_original_untouched() {
        let log = TransitionLog::new();
        let appended = log.record(hop(Step::Initial, Step::Middle));

        assert_eq!(log.len(), 0);
        assert_eq!(appended.len(), 1);
    }

    #[test]
    fn path_reconstructs_the_traversal() {
        let log = TransitionLog::new()
            .record(hop(Step::Initial, Step::Middle))
            .record(hop(Step::Middle, Step::Final))
            .record(hop(Step::Final, Step::Middle));

        assert_eq!(
            log.path(),
            vec![Step::Initial, Step::Middle, Step::Final, Step::Middle]
        );
    }

    #[test]
    fn duration_spans_first_to_last() {
        let log = TransitionLog::new().record(hop(Step::Initial, Step::Middle));
        std::thread::sleep(Duration::from_millis(10));
        let log = log.record(hop(Step::Middle, Step::Final));

        let duration = log.duration().unwrap();
        assert!(duration >= Duration::from_millis(10));
    }

    #[test]
    fn single_record_spans_zero() {
        let log = TransitionLog::new().record(hop(Step::Initial, Step::Middle));
        assert_eq!(log.duration(), Some(Duration::ZERO));
    }

    #[test]
    fn log_serializes_correctly() {
        let log = TransitionLog::new().record(hop(Step::Initial, Step::Middle));
        let json = serde_json::to_string(&log).unwrap();
        let deserialized: TransitionLog = serde_json::from_str(&json).unwrap();
        assert_eq!(log, deserialized);
    }
}
