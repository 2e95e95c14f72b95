//! Analyzer implementations that combine char filters, tokenizers and
//! token filters.
//!
//! Analyzers are the complete normalization pipeline:
//!
//! ```text
//! Raw Text → Char Filters → Tokenizer → Token Filters → Token Stream
//! ```
//!
//! # Available Implementations
//!
//! - [`standard::StandardAnalyzer`] - The default sentiment normalizer
//! - [`pipeline::PipelineAnalyzer`] - Custom char filter + tokenizer + filter chains

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// # Examples
///
/// Implementing a custom analyzer:
///
/// ```
/// use sentira::analysis::analyzer::Analyzer;
/// use sentira::analysis::token::TokenStream;
/// use sentira::error::Result;
///
/// struct MyAnalyzer;
///
/// impl Analyzer for MyAnalyzer {
///     fn analyze(&self, text: &str) -> Result<TokenStream> {
///         Ok(Box::new(std::iter::empty()))
///     }
///
///     fn name(&self) -> &'static str {
///         "my_analyzer"
///     }
/// }
/// ```
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod pipeline;
pub mod standard;

pub use pipeline::PipelineAnalyzer;
pub use standard::StandardAnalyzer;
