//! Sentiment classification module for Sentira.
//!
//! This module provides the discrete [`label::SentimentLabel`] type, the
//! immutable [`lexicon::Lexicon`] configuration table and the pure
//! [`classifier::Classifier`] that turns a normalized token sequence into a
//! [`classifier::SentimentResult`].

pub mod classifier;
pub mod label;
pub mod lexicon;

pub use classifier::{Classifier, SentimentResult};
pub use label::SentimentLabel;
pub use lexicon::Lexicon;
