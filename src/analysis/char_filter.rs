//! Char filter implementations for text normalization.
//!
//! Char filters pre-process the raw text string before it is passed to the
//! tokenizer. For sentiment analysis the important normalization is
//! punctuation handling: punctuation that carries no polarity is stripped,
//! while negation contractions ("n't") are rewritten so the negation marker
//! survives tokenization.
//!
//! # Available Filters
//!
//! - [`punctuation::PunctuationCharFilter`] - Strips non-sentiment punctuation

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text, returning the filtered text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod punctuation;

pub use punctuation::PunctuationCharFilter;
