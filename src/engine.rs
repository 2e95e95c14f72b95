//! The sentiment engine: programmatic entry points for the hosting layer.
//!
//! [`SentimentEngine`] wires the full pipeline together — normalization,
//! classification, session aggregation and chart shaping — behind the small
//! API the web layer consumes. The engine owns its session state; create one
//! engine per session and share it (e.g. inside an `Arc`) across that
//! session's request handlers.
//!
//! # Examples
//!
//! ```
//! use sentira::chart::ChartKind;
//! use sentira::engine::SentimentEngine;
//! use sentira::sentiment::label::SentimentLabel;
//!
//! let engine = SentimentEngine::new().unwrap();
//!
//! let (result, snapshot) = engine.record_and_snapshot("What a great movie!").unwrap();
//! assert_eq!(result.label, SentimentLabel::Positive);
//! assert_eq!(snapshot.total, 1);
//!
//! let series = engine.chart_series(ChartKind::Pie);
//! assert_eq!(series.points[0].value, 1.0);
//!
//! engine.reset_session();
//! assert!(engine.snapshot().is_empty());
//! ```

use rayon::prelude::*;

use crate::aggregate::Aggregator;
use crate::aggregate::snapshot::DistributionSnapshot;
use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::standard::StandardAnalyzer;
use crate::analysis::token::Token;
use crate::chart::{ChartDataBuilder, ChartKind, ChartSeries};
use crate::error::Result;
use crate::report::Report;
use crate::sentiment::classifier::{Classifier, SentimentResult};
use crate::sentiment::lexicon::Lexicon;

/// The complete text → chart-data pipeline for one session.
///
/// Classification is pure computation with no I/O; only the session counters
/// are mutable, and they sit behind the aggregator's mutex, so the engine is
/// safe to share across concurrent requests.
#[derive(Debug)]
pub struct SentimentEngine {
    analyzer: StandardAnalyzer,
    classifier: Classifier,
    aggregator: Aggregator,
}

impl SentimentEngine {
    /// Create an engine over the built-in English lexicon.
    pub fn new() -> Result<Self> {
        Self::with_lexicon(Lexicon::default_english())
    }

    /// Create an engine over a custom lexicon.
    ///
    /// Fails at construction if the lexicon's weight table is empty; this is
    /// a configuration fault and is never deferred to classification calls.
    pub fn with_lexicon(lexicon: Lexicon) -> Result<Self> {
        Ok(SentimentEngine {
            analyzer: StandardAnalyzer::new()?,
            classifier: Classifier::new(lexicon)?,
            aggregator: Aggregator::new(),
        })
    }

    /// Classify one text without touching session state.
    ///
    /// Empty or whitespace-only input fails with
    /// [`crate::error::SentiraError::InvalidInput`].
    pub fn classify_text(&self, text: &str) -> Result<SentimentResult> {
        let tokens: Vec<Token> = self.analyzer.analyze(text)?.collect();
        Ok(self.classifier.classify(&tokens))
    }

    /// Classify one text, record it in the session, and return the result
    /// together with the distribution as of that record.
    pub fn record_and_snapshot(
        &self,
        text: &str,
    ) -> Result<(SentimentResult, DistributionSnapshot)> {
        let result = self.classify_text(text)?;
        let snapshot = self.aggregator.record_and_snapshot(result.label);
        Ok((result, snapshot))
    }

    /// Classify a batch of texts in parallel and record every result.
    ///
    /// Results come back in input order and are recorded in that order, so
    /// the session counts equal those of sequential submission. The whole
    /// batch fails if any single text is invalid; nothing is recorded in
    /// that case.
    pub fn classify_batch<S>(&self, texts: &[S]) -> Result<Vec<SentimentResult>>
    where
        S: AsRef<str> + Sync,
    {
        let results: Vec<SentimentResult> = texts
            .par_iter()
            .map(|text| self.classify_text(text.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        for result in &results {
            self.aggregator.record(result.label);
        }

        Ok(results)
    }

    /// Take an immutable snapshot of the session distribution.
    pub fn snapshot(&self) -> DistributionSnapshot {
        self.aggregator.snapshot()
    }

    /// Shape the current distribution into a chart series.
    pub fn chart_series(&self, kind: ChartKind) -> ChartSeries {
        ChartDataBuilder::series(kind, &self.snapshot())
    }

    /// Build an exportable report over the given results.
    pub fn report(&self, results: Vec<SentimentResult>) -> Report {
        Report::new(results)
    }

    /// Clear the session counters. Invoked by the hosting layer on explicit
    /// user action.
    pub fn reset_session(&self) {
        self.aggregator.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SentiraError;
    use crate::sentiment::label::SentimentLabel;

    #[test]
    fn test_classify_text() {
        let engine = SentimentEngine::new().unwrap();

        let result = engine.classify_text("This product is really great!").unwrap();
        assert_eq!(result.label, SentimentLabel::Positive);

        // classify_text does not touch session state
        assert!(engine.snapshot().is_empty());
    }

    #[test]
    fn test_empty_input_is_an_error_not_neutral() {
        let engine = SentimentEngine::new().unwrap();

        for text in ["", "   ", "\t\n"] {
            assert!(matches!(
                engine.classify_text(text),
                Err(SentiraError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_stripped_input_is_neutral_not_an_error() {
        let engine = SentimentEngine::new().unwrap();

        let result = engine.classify_text("it is the ...").unwrap();
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_record_and_snapshot() {
        let engine = SentimentEngine::new().unwrap();

        let (result, snapshot) = engine.record_and_snapshot("awful experience").unwrap();
        assert_eq!(result.label, SentimentLabel::Negative);
        assert_eq!(snapshot.negative, 1);
        assert_eq!(snapshot.total, 1);
    }

    #[test]
    fn test_empty_lexicon_fails_at_construction() {
        assert!(matches!(
            SentimentEngine::with_lexicon(Lexicon::empty()),
            Err(SentiraError::Lexicon(_))
        ));
    }

    #[test]
    fn test_batch_preserves_order_and_records() {
        let engine = SentimentEngine::new().unwrap();
        let texts = ["love it", "hate it", "it is a table"];

        let results = engine.classify_batch(&texts).unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].label, SentimentLabel::Positive);
        assert_eq!(results[1].label, SentimentLabel::Negative);
        assert_eq!(results[2].label, SentimentLabel::Neutral);

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.total, 3);
        assert_eq!(snapshot.positive, 1);
    }

    #[test]
    fn test_batch_fails_atomically_on_invalid_text() {
        let engine = SentimentEngine::new().unwrap();

        let outcome = engine.classify_batch(&["good", "", "bad"]);
        assert!(outcome.is_err());
        assert!(engine.snapshot().is_empty());
    }

    #[test]
    fn test_chart_series_from_session() {
        let engine = SentimentEngine::new().unwrap();
        engine.record_and_snapshot("wonderful").unwrap();

        let series = engine.chart_series(ChartKind::Pie);
        assert_eq!(series.points[0].value, 1.0);
        assert_eq!(series.points[1].value, 0.0);
    }

    #[test]
    fn test_reset_session() {
        let engine = SentimentEngine::new().unwrap();
        engine.record_and_snapshot("wonderful").unwrap();
        engine.reset_session();

        assert!(engine.snapshot().is_empty());

        let series = engine.chart_series(ChartKind::Bar);
        assert!(series.points.iter().all(|p| p.value == 0.0));
    }
}
