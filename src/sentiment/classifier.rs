//! Lexicon-based polarity classifier.
//!
//! The classifier is a pure function over an immutable [`Lexicon`]: the same
//! token sequence always yields the identical score and label, and no call
//! has side effects.
//!
//! # Algorithm
//!
//! Each token contributes its lexicon weight. A negation marker inverts the
//! sign of the immediately following token's contribution; an intensifier
//! scales it by the marker's multiplier. Both use a strict lookahead window
//! of one token. The contributions are summed, normalized by the token count
//! and clamped into [-1.0, 1.0]; the threshold policy in
//! [`super::label::SentimentLabel::from_score`] turns the score into a
//! label.
//!
//! # Examples
//!
//! ```
//! use sentira::sentiment::classifier::Classifier;
//! use sentira::sentiment::label::SentimentLabel;
//! use sentira::sentiment::lexicon::Lexicon;
//! use sentira::analysis::token::Token;
//!
//! let classifier = Classifier::new(Lexicon::default_english()).unwrap();
//!
//! let tokens = vec![Token::new("not", 0), Token::new("bad", 1)];
//! let result = classifier.classify(&tokens);
//!
//! // Negation inverts "bad" into a positive contribution
//! assert_eq!(result.label, SentimentLabel::Positive);
//! assert!(result.score > 0.05);
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::error::{Result, SentiraError};
use crate::sentiment::label::SentimentLabel;
use crate::sentiment::lexicon::Lexicon;

/// Maximum number of key terms reported per classification.
const MAX_KEY_TERMS: usize = 5;

/// The outcome of classifying one token sequence.
///
/// Invariant: `label` is always the threshold policy applied to `score`,
/// and `score` is finite and within [-1.0, 1.0].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Discrete sentiment category.
    pub label: SentimentLabel,
    /// Polarity score in [-1.0, 1.0].
    pub score: f64,
    /// Confidence in [0.0, 1.0]; the absolute polarity strength.
    pub confidence: f64,
    /// Up to five tokens with the largest absolute contribution, strongest
    /// first, ties broken by position.
    pub key_terms: Vec<String>,
}

impl SentimentResult {
    fn from_score(score: f64, key_terms: Vec<String>) -> Self {
        SentimentResult {
            label: SentimentLabel::from_score(score),
            score,
            confidence: score.abs(),
            key_terms,
        }
    }

    /// The neutral result produced for a fully stripped input.
    pub fn neutral() -> Self {
        Self::from_score(0.0, Vec::new())
    }
}

/// Pending modifier carried from a marker token to the next token.
#[derive(Clone, Copy, Debug)]
enum Pending {
    None,
    Negate,
    Intensify(f64),
}

/// A lexicon-based sentiment classifier.
///
/// The lexicon is validated once at construction: an empty weight table is a
/// configuration fault ([`SentiraError::Lexicon`]), never a per-call
/// condition. The classifier is cheap to clone and safe to share across
/// threads.
#[derive(Clone, Debug)]
pub struct Classifier {
    lexicon: Arc<Lexicon>,
}

impl Classifier {
    /// Create a classifier over the given lexicon.
    ///
    /// Fails with [`SentiraError::Lexicon`] if the lexicon's weight table is
    /// empty.
    pub fn new(lexicon: Lexicon) -> Result<Self> {
        if lexicon.is_empty() {
            return Err(SentiraError::lexicon(
                "lexicon weight table is empty or uninitialized",
            ));
        }

        Ok(Classifier {
            lexicon: Arc::new(lexicon),
        })
    }

    /// Get the lexicon backing this classifier.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Classify a normalized token sequence.
    ///
    /// An empty sequence (input that was entirely stop words and
    /// punctuation) yields score 0.0 and Neutral, never an error.
    pub fn classify(&self, tokens: &[Token]) -> SentimentResult {
        if tokens.is_empty() {
            return SentimentResult::neutral();
        }

        let mut sum = 0.0;
        let mut contributions: Vec<(usize, &str, f64)> = Vec::new();
        let mut pending = Pending::None;

        for (index, token) in tokens.iter().enumerate() {
            let word = token.text.as_str();

            // Marker tokens carry no weight themselves; they set the
            // modifier for the next token. A later marker replaces an
            // unconsumed earlier one.
            if self.lexicon.is_negation(word) {
                pending = Pending::Negate;
                continue;
            }
            if let Some(multiplier) = self.lexicon.intensifier(word) {
                pending = Pending::Intensify(multiplier);
                continue;
            }

            let mut contribution = self.lexicon.weight(word);
            match pending {
                Pending::Negate => contribution = -contribution,
                Pending::Intensify(multiplier) => contribution *= multiplier,
                Pending::None => {}
            }
            // Window of 1: the modifier is spent on this token even when
            // the token is unweighted.
            pending = Pending::None;

            if contribution != 0.0 {
                sum += contribution;
                contributions.push((index, word, contribution));
            }
        }

        let score = (sum / tokens.len() as f64).clamp(-1.0, 1.0);

        contributions.sort_by(|a, b| {
            b.2.abs()
                .partial_cmp(&a.2.abs())
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        let key_terms = contributions
            .into_iter()
            .take(MAX_KEY_TERMS)
            .map(|(_, word, _)| word.to_string())
            .collect();

        SentimentResult::from_score(score, key_terms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<Token> {
        words
            .iter()
            .enumerate()
            .map(|(i, w)| Token::new(*w, i))
            .collect()
    }

    fn classifier() -> Classifier {
        Classifier::new(Lexicon::default_english()).unwrap()
    }

    #[test]
    fn test_empty_lexicon_rejected() {
        let result = Classifier::new(Lexicon::empty());
        assert!(matches!(result, Err(SentiraError::Lexicon(_))));
    }

    #[test]
    fn test_empty_sequence_is_neutral() {
        let result = classifier().classify(&[]);
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.score, 0.0);
        assert!(result.key_terms.is_empty());
    }

    #[test]
    fn test_positive_text() {
        let result = classifier().classify(&tokens(&["great", "movie"]));
        assert_eq!(result.label, SentimentLabel::Positive);
        // 1.5 / 2 = 0.75
        assert!((result.score - 0.75).abs() < 1e-9);
        assert!((result.confidence - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_negative_text() {
        let result = classifier().classify(&tokens(&["terrible", "service"]));
        assert_eq!(result.label, SentimentLabel::Negative);
        assert!((result.score - (-1.0)).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_tokens_are_neutral() {
        let result = classifier().classify(&tokens(&["table", "chair", "lamp"]));
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_negation_inverts_next_token() {
        let result = classifier().classify(&tokens(&["not", "bad"]));
        // -(-1.5) / 2 = 0.75
        assert_eq!(result.label, SentimentLabel::Positive);
        assert!((result.score - 0.75).abs() < 1e-9);

        let result = classifier().classify(&tokens(&["not", "good"]));
        // -(1.0) / 2 = -0.5
        assert_eq!(result.label, SentimentLabel::Negative);
    }

    #[test]
    fn test_negation_window_expires() {
        // "not" is spent on the unweighted token "movie"; "bad" keeps its
        // own sign
        let result = classifier().classify(&tokens(&["not", "movie", "bad"]));
        assert_eq!(result.label, SentimentLabel::Negative);
        // -1.5 / 3 = -0.5
        assert!((result.score - (-0.5)).abs() < 1e-9);
    }

    #[test]
    fn test_intensifier_scales_next_token() {
        let plain = classifier().classify(&tokens(&["good", "movie"]));
        let boosted = classifier().classify(&tokens(&["very", "good"]));
        // very good: 1.0 * 1.5 / 2 = 0.75 vs good movie: 1.0 / 2 = 0.5
        assert!(boosted.score > plain.score);
        assert!((boosted.score - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_score_clamped() {
        let result = classifier().classify(&tokens(&["love"]));
        // 2.0 / 1 would be 2.0, clamped to 1.0
        assert!((result.score - 1.0).abs() < 1e-9);
        assert_eq!(result.label, SentimentLabel::Positive);
    }

    #[test]
    fn test_determinism() {
        let sequence = tokens(&["absolutely", "love", "not", "bad"]);
        let a = classifier().classify(&sequence);
        let b = classifier().classify(&sequence);
        assert_eq!(a, b);
    }

    #[test]
    fn test_label_matches_threshold_policy() {
        for words in [
            &["good"][..],
            &["bad"][..],
            &["not", "good"][..],
            &["table"][..],
            &["very", "slow"][..],
        ] {
            let result = classifier().classify(&tokens(words));
            assert_eq!(result.label, SentimentLabel::from_score(result.score));
        }
    }

    #[test]
    fn test_key_terms_ordered_by_contribution() {
        let result = classifier().classify(&tokens(&["nice", "but", "amazing"]));
        assert_eq!(result.key_terms, vec!["amazing", "nice"]);
    }

    #[test]
    fn test_negation_with_intensifier_nets_positive() {
        // "I absolutely love this, it is not bad at all" after normalization
        let sequence = tokens(&["absolutely", "love", "not", "bad", "all"]);
        let result = classifier().classify(&sequence);

        // love: 2.0 * 1.5 = 3.0, bad: -(-1.5) = 1.5, sum 4.5 / 5 = 0.9
        assert_eq!(result.label, SentimentLabel::Positive);
        assert!((result.score - 0.9).abs() < 1e-9);
        assert!(result.key_terms.contains(&"love".to_string()));
    }
}
