//! # Sentira
//!
//! A lexicon-based sentiment analysis library for Rust.
//!
//! Sentira takes free-form text, assigns it a sentiment label (Positive,
//! Negative, Neutral) with a confidence score, and aggregates results across
//! a session into a distribution ready for chart rendering.
//!
//! ## Pipeline
//!
//! ```text
//! raw text → analysis (normalizer) → sentiment (classifier)
//!          → aggregate (session counts) → chart (series shaping)
//! ```
//!
//! ## Features
//!
//! - Pure Rust implementation, no I/O in the core
//! - Pluggable normalization pipeline (char filters, tokenizers, token filters)
//! - Lexicon-driven classification with negation and intensifier handling
//! - Thread-safe session aggregation
//! - Stable, chart-ready series output
//!
//! ## Quick start
//!
//! ```
//! use sentira::chart::ChartKind;
//! use sentira::engine::SentimentEngine;
//! use sentira::sentiment::label::SentimentLabel;
//!
//! let engine = SentimentEngine::new().unwrap();
//!
//! let result = engine.classify_text("I absolutely love this!").unwrap();
//! assert_eq!(result.label, SentimentLabel::Positive);
//!
//! let (_, snapshot) = engine.record_and_snapshot("not bad at all").unwrap();
//! assert_eq!(snapshot.total, 1);
//!
//! let series = engine.chart_series(ChartKind::Bar);
//! assert_eq!(series.points.len(), 3);
//! ```

pub mod aggregate;
pub mod analysis;
pub mod chart;
pub mod engine;
pub mod error;
pub mod report;
pub mod sentiment;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
