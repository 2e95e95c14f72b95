//! Stop filter implementation.
//!
//! This module provides a filter that removes common words (stop words) that
//! carry no polarity. The default list is deliberately conservative: negation
//! markers ("not", "no", "never", ...) and intensifiers ("very", "really",
//! ...) are never part of it, because removing them would corrupt
//! classification.
//!
//! # Examples
//!
//! ```
//! use sentira::analysis::token_filter::Filter;
//! use sentira::analysis::token_filter::stop::StopFilter;
//! use sentira::analysis::token::Token;
//!
//! let filter = StopFilter::new(); // Uses the default stop words
//! let tokens = vec![
//!     Token::new("the", 0),
//!     Token::new("movie", 1),
//!     Token::new("is", 2),
//!     Token::new("not", 3),
//!     Token::new("bad", 4),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! // "the" and "is" are removed; the negation marker survives
//! let texts: Vec<_> = result.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, ["movie", "not", "bad"]);
//! ```

use std::sync::{Arc, LazyLock};

use ahash::AHashSet;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Default stop words list.
///
/// Common English function words that carry no polarity. Negation markers
/// and intensifiers are intentionally absent from this list.
const DEFAULT_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "been", "but", "by", "for", "from", "had", "has",
    "have", "he", "her", "his", "i", "if", "in", "into", "is", "it", "its", "me", "my", "of", "on",
    "or", "our", "she", "that", "the", "their", "them", "then", "there", "these", "they", "this",
    "to", "was", "we", "were", "will", "with", "you", "your",
];

/// Default stop words as a HashSet.
pub static DEFAULT_STOP_WORDS_SET: LazyLock<AHashSet<String>> = LazyLock::new(|| {
    DEFAULT_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// A filter that removes stop words from the token stream.
///
/// This filter can either remove stop words entirely or mark them as stopped
/// while keeping them in the stream.
///
/// # Examples
///
/// ## Custom Stop Words
///
/// ```
/// use sentira::analysis::token_filter::stop::StopFilter;
///
/// let filter = StopFilter::from_words(vec!["custom", "words", "list"]);
/// assert!(filter.is_stop_word("custom"));
/// ```
///
/// ## Preserve Stopped Tokens
///
/// ```
/// use sentira::analysis::token_filter::Filter;
/// use sentira::analysis::token_filter::stop::StopFilter;
/// use sentira::analysis::token::Token;
///
/// // Mark as stopped but don't remove
/// let filter = StopFilter::from_words(vec!["the"]).remove_stopped(false);
/// let tokens = vec![Token::new("the", 0), Token::new("movie", 1)];
///
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .collect();
///
/// assert_eq!(result.len(), 2);
/// assert!(result[0].is_stopped());
/// assert!(!result[1].is_stopped());
/// ```
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<AHashSet<String>>,
    /// Whether to remove stopped tokens entirely or just mark them as stopped
    remove_stopped: bool,
}

impl StopFilter {
    /// Create a new stop filter with the default stop words.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentira::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::new();
    /// assert!(filter.is_stop_word("the"));
    /// assert!(!filter.is_stop_word("not"));
    /// assert!(!filter.is_stop_word("very"));
    /// ```
    pub fn new() -> Self {
        Self::with_stop_words(DEFAULT_STOP_WORDS_SET.clone())
    }

    /// Create a stop filter with a custom stop word set.
    pub fn with_stop_words(stop_words: AHashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
            remove_stopped: true,
        }
    }

    /// Create a stop filter from a list of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_stop_words(words.into_iter().map(|w| w.into()).collect())
    }

    /// Set whether stopped tokens are removed entirely (default) or kept in
    /// the stream with their stopped flag set.
    pub fn remove_stopped(mut self, remove: bool) -> Self {
        self.remove_stopped = remove;
        self
    }

    /// Check whether a word is in the stop word set.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stop_words = Arc::clone(&self.stop_words);
        let remove_stopped = self.remove_stopped;

        let filtered_tokens: Vec<Token> = tokens
            .filter_map(|token| {
                if stop_words.contains(&token.text) {
                    if remove_stopped {
                        None
                    } else {
                        Some(token.stop())
                    }
                } else {
                    Some(token)
                }
            })
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
