//! Summary statistics and JSON report export.
//!
//! The hosting application may want more than raw counts when presenting a
//! session: aggregate percentages, average confidence, and an exportable
//! record of what was analyzed. This module derives those from a batch of
//! classification results.
//!
//! # Examples
//!
//! ```
//! use sentira::report::SummaryStats;
//! use sentira::sentiment::classifier::Classifier;
//! use sentira::sentiment::lexicon::Lexicon;
//! use sentira::analysis::token::Token;
//!
//! let classifier = Classifier::new(Lexicon::default_english()).unwrap();
//! let results = vec![classifier.classify(&[Token::new("great", 0)])];
//!
//! let stats = SummaryStats::from_results(&results);
//! assert_eq!(stats.total_analyzed, 1);
//! assert_eq!(stats.positive_percentage, 100.0);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sentiment::classifier::SentimentResult;
use crate::sentiment::label::SentimentLabel;

/// Aggregate statistics over a batch of classification results.
///
/// Percentages are rounded to one decimal place and the average confidence
/// to two, matching what the dashboard displays.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Number of results summarized.
    pub total_analyzed: u64,
    /// Number of Positive results.
    pub positive_count: u64,
    /// Number of Negative results.
    pub negative_count: u64,
    /// Number of Neutral results.
    pub neutral_count: u64,
    /// Positive share in percent, one decimal.
    pub positive_percentage: f64,
    /// Negative share in percent, one decimal.
    pub negative_percentage: f64,
    /// Neutral share in percent, one decimal.
    pub neutral_percentage: f64,
    /// Mean confidence across results, two decimals. 0.0 for an empty batch.
    pub average_confidence: f64,
    /// Mean polarity score across results. 0.0 for an empty batch.
    pub average_score: f64,
}

impl SummaryStats {
    /// Summarize a batch of results.
    pub fn from_results(results: &[SentimentResult]) -> Self {
        let total = results.len() as u64;
        if total == 0 {
            return SummaryStats {
                total_analyzed: 0,
                positive_count: 0,
                negative_count: 0,
                neutral_count: 0,
                positive_percentage: 0.0,
                negative_percentage: 0.0,
                neutral_percentage: 0.0,
                average_confidence: 0.0,
                average_score: 0.0,
            };
        }

        let count_of = |label: SentimentLabel| -> u64 {
            results.iter().filter(|r| r.label == label).count() as u64
        };
        let positive_count = count_of(SentimentLabel::Positive);
        let negative_count = count_of(SentimentLabel::Negative);
        let neutral_count = count_of(SentimentLabel::Neutral);

        let percentage =
            |count: u64| -> f64 { round_to(count as f64 / total as f64 * 100.0, 10.0) };

        let confidence_sum: f64 = results.iter().map(|r| r.confidence).sum();
        let score_sum: f64 = results.iter().map(|r| r.score).sum();

        SummaryStats {
            total_analyzed: total,
            positive_count,
            negative_count,
            neutral_count,
            positive_percentage: percentage(positive_count),
            negative_percentage: percentage(negative_count),
            neutral_percentage: percentage(neutral_count),
            average_confidence: round_to(confidence_sum / total as f64, 100.0),
            average_score: score_sum / total as f64,
        }
    }
}

/// An exportable record of one analysis session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Report {
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Aggregate statistics over `results`.
    pub summary: SummaryStats,
    /// The individual classification results, in submission order.
    pub results: Vec<SentimentResult>,
}

impl Report {
    /// Build a report over the given results, stamped with the current time.
    pub fn new(results: Vec<SentimentResult>) -> Self {
        Report {
            generated_at: Utc::now(),
            summary: SummaryStats::from_results(&results),
            results,
        }
    }

    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Round half away from zero at the given precision (10.0 for one decimal,
/// 100.0 for two).
fn round_to(value: f64, precision: f64) -> f64 {
    (value * precision).round() / precision
}
