//! Session aggregation for classification results.
//!
//! The [`Aggregator`] is the only stateful piece of the pipeline. It
//! accumulates per-label counts for one session behind a mutex, so that
//! concurrent `record` calls from in-flight requests net out to a serial
//! order and the snapshot invariant (counts sum to total) always holds.
//!
//! # Examples
//!
//! ```
//! use sentira::aggregate::Aggregator;
//! use sentira::sentiment::label::SentimentLabel;
//!
//! let aggregator = Aggregator::new();
//! aggregator.record(SentimentLabel::Positive);
//! aggregator.record(SentimentLabel::Neutral);
//!
//! let snapshot = aggregator.snapshot();
//! assert_eq!(snapshot.total, 2);
//! assert_eq!(snapshot.positive, 1);
//!
//! aggregator.reset();
//! assert!(aggregator.snapshot().is_empty());
//! ```

use parking_lot::Mutex;

use crate::sentiment::label::SentimentLabel;

pub mod snapshot;

pub use snapshot::DistributionSnapshot;

/// Mutable session counters, guarded by the aggregator's mutex.
#[derive(Debug, Default)]
struct SessionCounts {
    positive: u64,
    negative: u64,
    neutral: u64,
    total: u64,
}

/// Accumulates classification results for one session.
///
/// Session state is explicitly owned: create one aggregator per session and
/// share it (e.g. inside an `Arc`) with whatever handles that session's
/// requests. `record` takes a single critical section, so updates are atomic
/// and totals stay consistent. Counts never decrease except on
/// [`Aggregator::reset`].
#[derive(Debug, Default)]
pub struct Aggregator {
    counts: Mutex<SessionCounts>,
}

impl Aggregator {
    /// Create a new aggregator with all counts at zero.
    pub fn new() -> Self {
        Aggregator {
            counts: Mutex::new(SessionCounts::default()),
        }
    }

    /// Record one classification result. The only mutator of session state.
    pub fn record(&self, label: SentimentLabel) {
        let mut counts = self.counts.lock();
        match label {
            SentimentLabel::Positive => counts.positive += 1,
            SentimentLabel::Negative => counts.negative += 1,
            SentimentLabel::Neutral => counts.neutral += 1,
        }
        counts.total += 1;
    }

    /// Take an immutable copy of the current counts.
    pub fn snapshot(&self) -> DistributionSnapshot {
        let counts = self.counts.lock();
        DistributionSnapshot {
            positive: counts.positive,
            negative: counts.negative,
            neutral: counts.neutral,
            total: counts.total,
        }
    }

    /// Record one result and return the snapshot as of that record, in one
    /// critical section.
    pub fn record_and_snapshot(&self, label: SentimentLabel) -> DistributionSnapshot {
        let mut counts = self.counts.lock();
        match label {
            SentimentLabel::Positive => counts.positive += 1,
            SentimentLabel::Negative => counts.negative += 1,
            SentimentLabel::Neutral => counts.neutral += 1,
        }
        counts.total += 1;
        DistributionSnapshot {
            positive: counts.positive,
            negative: counts.negative,
            neutral: counts.neutral,
            total: counts.total,
        }
    }

    /// Clear all counts, starting a new session in place.
    pub fn reset(&self) {
        let mut counts = self.counts.lock();
        *counts = SessionCounts::default();
    }
}
