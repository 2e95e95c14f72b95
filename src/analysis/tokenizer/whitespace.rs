//! Whitespace tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A tokenizer that splits text on whitespace.
///
/// This is the default tokenizer for the sentiment pipeline: the punctuation
/// char filter has already replaced punctuation with spaces, so whitespace
/// boundaries are exactly the word boundaries that matter.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut position = 0;

        for (start, word) in text.split_whitespace().map(|w| {
            // split_whitespace yields subslices of text, so offsets can be
            // recovered by pointer arithmetic
            let start = w.as_ptr() as usize - text.as_ptr() as usize;
            (start, w)
        }) {
            tokens.push(Token::with_offsets(
                word,
                position,
                start,
                start + word.len(),
            ));
            position += 1;
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
