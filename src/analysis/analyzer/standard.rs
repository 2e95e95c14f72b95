//! Standard analyzer providing the default sentiment normalization pipeline.
//!
//! This is the Normalizer of the sentiment pipeline: it lower-cases text,
//! strips punctuation that carries no sentiment meaning (while retaining
//! negation markers such as "not" and "n't"), splits on whitespace
//! boundaries and removes stop words that carry no polarity.
//!
//! # Pipeline
//!
//! 1. PunctuationCharFilter (expands "n't", strips punctuation)
//! 2. WhitespaceTokenizer
//! 3. LowercaseFilter
//! 4. StopFilter (negations and intensifiers never filtered)
//! 5. RemoveEmptyFilter
//!
//! # Examples
//!
//! ```
//! use sentira::analysis::analyzer::Analyzer;
//! use sentira::analysis::analyzer::standard::StandardAnalyzer;
//!
//! let analyzer = StandardAnalyzer::new().unwrap();
//! let tokens: Vec<_> = analyzer.analyze("This movie isn't BAD!").unwrap().collect();
//!
//! let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, ["movie", "not", "bad"]);
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::char_filter::punctuation::PunctuationCharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::remove_empty::RemoveEmptyFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::error::{Result, SentiraError};

/// The standard sentiment normalizer.
///
/// Input must be non-empty after trimming leading and trailing whitespace;
/// otherwise [`SentiraError::InvalidInput`] is returned. The output stream
/// preserves original token order and is empty only when the entire input
/// consisted of stop words and punctuation — the classifier treats that as
/// Neutral, never as an error.
pub struct StandardAnalyzer {
    inner: PipelineAnalyzer,
}

impl StandardAnalyzer {
    /// Create a new standard analyzer with default settings.
    pub fn new() -> Result<Self> {
        let tokenizer = Arc::new(WhitespaceTokenizer::new());
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_char_filter(Arc::new(PunctuationCharFilter::new()?))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StopFilter::new()))
            .add_filter(Arc::new(RemoveEmptyFilter::new()))
            .with_name("standard".to_string());

        Ok(StandardAnalyzer { inner: analyzer })
    }

    /// Create a new standard analyzer without stop word filtering.
    pub fn without_stop_words() -> Result<Self> {
        let tokenizer = Arc::new(WhitespaceTokenizer::new());
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_char_filter(Arc::new(PunctuationCharFilter::new()?))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(RemoveEmptyFilter::new()))
            .with_name("standard_no_stop".to_string());

        Ok(StandardAnalyzer { inner: analyzer })
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Analyzer for StandardAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        if text.trim().is_empty() {
            return Err(SentiraError::invalid_input(
                "text must not be empty or whitespace-only",
            ));
        }

        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}

impl std::fmt::Debug for StandardAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandardAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_standard_analyzer() {
        let analyzer = StandardAnalyzer::new().unwrap();

        let tokens: Vec<Token> = analyzer
            .analyze("The product is really GREAT!")
            .unwrap()
            .collect();

        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["product", "really", "great"]);
    }

    #[test]
    fn test_negation_contraction_preserved() {
        let analyzer = StandardAnalyzer::new().unwrap();

        let tokens: Vec<Token> = analyzer.analyze("It isn't good").unwrap().collect();

        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["not", "good"]);
    }

    #[test]
    fn test_empty_input_rejected() {
        let analyzer = StandardAnalyzer::new().unwrap();

        assert!(matches!(
            analyzer.analyze(""),
            Err(SentiraError::InvalidInput(_))
        ));
        assert!(matches!(
            analyzer.analyze("   \t\n"),
            Err(SentiraError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_all_stop_words_yields_empty_stream() {
        let analyzer = StandardAnalyzer::new().unwrap();

        let tokens: Vec<Token> = analyzer.analyze("it is the...").unwrap().collect();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_token_order_preserved() {
        let analyzer = StandardAnalyzer::new().unwrap();

        let tokens: Vec<Token> = analyzer.analyze("good bad good").unwrap().collect();

        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["good", "bad", "good"]);
    }

    #[test]
    fn test_without_stop_words() {
        let analyzer = StandardAnalyzer::without_stop_words().unwrap();

        let tokens: Vec<Token> = analyzer.analyze("The Movie").unwrap().collect();

        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["the", "movie"]);
    }
}
