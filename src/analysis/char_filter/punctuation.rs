//! Punctuation char filter implementation.
//!
//! This module provides a filter that removes punctuation carrying no
//! sentiment meaning. Negation contractions are expanded first so that the
//! "n't" marker is preserved as a standalone "not" token rather than being
//! destroyed along with the apostrophe.
//!
//! # Examples
//!
//! ```
//! use sentira::analysis::char_filter::CharFilter;
//! use sentira::analysis::char_filter::punctuation::PunctuationCharFilter;
//!
//! let filter = PunctuationCharFilter::new().unwrap();
//! assert_eq!(filter.filter("isn't bad, really!"), "is not bad  really ");
//! ```

use regex::Regex;

use crate::analysis::char_filter::CharFilter;
use crate::error::{Result, SentiraError};

/// A filter that strips punctuation not carrying sentiment meaning.
///
/// # Behavior
///
/// - Rewrites `n't` contractions to ` not` (e.g. "isn't" becomes "is not"),
///   preserving the negation marker for the classifier
/// - Replaces every remaining non-alphanumeric, non-whitespace character
///   with a space so token boundaries are kept intact
///
/// Both regexes are compiled once at construction.
#[derive(Clone, Debug)]
pub struct PunctuationCharFilter {
    contraction: Regex,
    punctuation: Regex,
}

impl PunctuationCharFilter {
    /// Create a new punctuation char filter.
    pub fn new() -> Result<Self> {
        let contraction = Regex::new(r"(?i)n't\b")
            .map_err(|e| SentiraError::analysis(format!("invalid contraction pattern: {e}")))?;
        let punctuation = Regex::new(r"[^\p{Alphabetic}\p{N}\s]+")
            .map_err(|e| SentiraError::analysis(format!("invalid punctuation pattern: {e}")))?;

        Ok(PunctuationCharFilter {
            contraction,
            punctuation,
        })
    }
}

impl CharFilter for PunctuationCharFilter {
    fn filter(&self, input: &str) -> String {
        let expanded = self.contraction.replace_all(input, " not");
        self.punctuation.replace_all(&expanded, " ").into_owned()
    }

    fn name(&self) -> &'static str {
        "punctuation"
    }
}
