//! Sentiment label type and threshold policy.
//!
//! The label is a closed enumeration of exactly {Positive, Negative,
//! Neutral}, so the threshold policy and chart ordering are exhaustive and
//! compiler-checked.
//!
//! # Threshold Policy
//!
//! A score above +0.05 is Positive, below -0.05 is Negative, and anything in
//! between is Neutral. The dead zone around zero is deliberate: it avoids
//! label flicker on near-neutral text.
//!
//! # Examples
//!
//! ```
//! use sentira::sentiment::label::SentimentLabel;
//!
//! assert_eq!(SentimentLabel::from_score(0.9), SentimentLabel::Positive);
//! assert_eq!(SentimentLabel::from_score(-0.2), SentimentLabel::Negative);
//! assert_eq!(SentimentLabel::from_score(0.03), SentimentLabel::Neutral);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Scores above this threshold are classified Positive, below its negation
/// Negative. The range in between is the neutral dead zone.
pub const NEUTRAL_THRESHOLD: f64 = 0.05;

/// A discrete sentiment category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    /// Net positive polarity (score > +0.05)
    Positive,
    /// Net negative polarity (score < -0.05)
    Negative,
    /// Score inside the dead zone around zero
    Neutral,
}

impl SentimentLabel {
    /// Canonical ordering for chart legends and series.
    ///
    /// Chart builders always emit labels in this order regardless of
    /// snapshot internals, so legends are stable across renders.
    pub const CHART_ORDER: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
    ];

    /// Apply the threshold policy to a polarity score.
    pub fn from_score(score: f64) -> Self {
        if score > NEUTRAL_THRESHOLD {
            SentimentLabel::Positive
        } else if score < -NEUTRAL_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    /// Display name used in chart series.
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }

    /// Fixed hex color for chart rendering.
    pub fn color(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "#4CAF50",
            SentimentLabel::Negative => "#F44336",
            SentimentLabel::Neutral => "#FFC107",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
