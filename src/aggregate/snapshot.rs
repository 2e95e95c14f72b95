//! Distribution snapshot: a point-in-time view of accumulated counts.

use serde::{Deserialize, Serialize};

use crate::sentiment::label::SentimentLabel;

/// An immutable copy of the session's sentiment counts.
///
/// Invariant: the per-label counts always sum to `total`. Percentages are
/// computed at read time, so a snapshot of an empty session reports 0.0
/// everywhere instead of dividing by zero.
///
/// # Examples
///
/// ```
/// use sentira::aggregate::snapshot::DistributionSnapshot;
/// use sentira::sentiment::label::SentimentLabel;
///
/// let snapshot = DistributionSnapshot {
///     positive: 1,
///     negative: 1,
///     neutral: 2,
///     total: 4,
/// };
///
/// assert_eq!(snapshot.count(SentimentLabel::Neutral), 2);
/// assert_eq!(snapshot.percentage(SentimentLabel::Neutral), 50.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionSnapshot {
    /// Number of Positive results recorded.
    pub positive: u64,
    /// Number of Negative results recorded.
    pub negative: u64,
    /// Number of Neutral results recorded.
    pub neutral: u64,
    /// Total number of results recorded.
    pub total: u64,
}

impl DistributionSnapshot {
    /// Get the count for a label.
    pub fn count(&self, label: SentimentLabel) -> u64 {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Negative => self.negative,
            SentimentLabel::Neutral => self.neutral,
        }
    }

    /// Get the share of a label as a percentage in [0.0, 100.0].
    ///
    /// Returns 0.0 when the snapshot is empty.
    pub fn percentage(&self, label: SentimentLabel) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.count(label) as f64 / self.total as f64) * 100.0
    }

    /// Check whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
