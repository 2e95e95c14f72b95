//! Text analysis module for Sentira.
//!
//! This module provides the normalization half of the sentiment pipeline:
//! char filtering, tokenization, token filtering and the analyzers that
//! compose them into a canonical token sequence for the classifier.

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
