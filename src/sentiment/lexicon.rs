//! Polarity lexicon: the immutable configuration table behind the classifier.
//!
//! A [`Lexicon`] maps tokens to polarity weights and additionally carries the
//! negation marker set and the intensifier multiplier table. It is loaded
//! once, shared read-only across calls, and never mutated afterwards.
//!
//! # Examples
//!
//! Using the built-in default lexicon:
//!
//! ```
//! use sentira::sentiment::lexicon::Lexicon;
//!
//! let lexicon = Lexicon::default_english();
//! assert!(lexicon.weight("love") > 0.0);
//! assert!(lexicon.weight("terrible") < 0.0);
//! assert_eq!(lexicon.weight("table"), 0.0);
//! assert!(lexicon.is_negation("not"));
//! assert_eq!(lexicon.intensifier("very"), Some(1.5));
//! ```
//!
//! Loading a lexicon from JSON:
//!
//! ```
//! use sentira::sentiment::lexicon::Lexicon;
//!
//! let json = r#"{
//!     "weights": { "good": 1.0, "bad": -1.5 },
//!     "negations": ["not"],
//!     "intensifiers": { "very": 1.5 }
//! }"#;
//!
//! let lexicon = Lexicon::from_json(json).unwrap();
//! assert_eq!(lexicon.weight("bad"), -1.5);
//! ```

use std::collections::HashMap;
use std::sync::LazyLock;

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default polarity weights.
///
/// Weights are in [-2.0, 2.0]; the classifier normalizes sums by token count
/// and clamps into [-1.0, 1.0], so individual weights may exceed 1.0.
const DEFAULT_WEIGHTS: &[(&str, f64)] = &[
    // Positive
    ("amazing", 2.0),
    ("awesome", 2.0),
    ("best", 2.0),
    ("enjoy", 1.5),
    ("enjoyed", 1.5),
    ("excellent", 2.0),
    ("excited", 1.5),
    ("fantastic", 2.0),
    ("fast", 0.5),
    ("good", 1.0),
    ("great", 1.5),
    ("happy", 1.5),
    ("helpful", 1.0),
    ("impressive", 1.5),
    ("like", 1.0),
    ("love", 2.0),
    ("loved", 2.0),
    ("nice", 1.0),
    ("outstanding", 2.0),
    ("perfect", 2.0),
    ("recommend", 1.5),
    ("recommended", 1.5),
    ("satisfied", 1.5),
    ("wonderful", 2.0),
    // Negative
    ("angry", -1.5),
    ("annoying", -1.0),
    ("awful", -2.0),
    ("bad", -1.5),
    ("broke", -1.0),
    ("broken", -1.0),
    ("disappointed", -1.5),
    ("disappointing", -1.5),
    ("hate", -2.0),
    ("horrible", -2.0),
    ("misleading", -1.0),
    ("poor", -1.0),
    ("sad", -1.0),
    ("slow", -0.5),
    ("terrible", -2.0),
    ("useless", -1.5),
    ("waste", -1.5),
    ("worst", -2.0),
    ("wrong", -0.5),
];

/// Default negation markers. These invert the sign of the immediately
/// following weighted token.
const DEFAULT_NEGATIONS: &[&str] = &["cannot", "neither", "never", "no", "nor", "not", "without"];

/// Default intensifier multipliers. These scale the magnitude of the
/// immediately following weighted token.
const DEFAULT_INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.5),
    ("completely", 1.5),
    ("extremely", 1.8),
    ("highly", 1.4),
    ("incredibly", 1.8),
    ("quite", 1.2),
    ("really", 1.3),
    ("so", 1.2),
    ("totally", 1.5),
    ("truly", 1.4),
    ("very", 1.5),
];

static DEFAULT_LEXICON: LazyLock<Lexicon> = LazyLock::new(|| {
    Lexicon {
        weights: DEFAULT_WEIGHTS.iter().map(|&(w, v)| (w.to_string(), v)).collect(),
        negations: DEFAULT_NEGATIONS.iter().map(|&w| w.to_string()).collect(),
        intensifiers: DEFAULT_INTENSIFIERS
            .iter()
            .map(|&(w, v)| (w.to_string(), v))
            .collect(),
    }
});

/// Serialized form of a lexicon file.
#[derive(Debug, Serialize, Deserialize)]
struct LexiconFile {
    weights: HashMap<String, f64>,
    #[serde(default)]
    negations: Vec<String>,
    #[serde(default)]
    intensifiers: HashMap<String, f64>,
}

/// An immutable token → polarity weight table, with negation and
/// intensifier word sets.
///
/// Unknown tokens have weight 0.0. An empty weight table is a configuration
/// fault that [`super::classifier::Classifier::new`] rejects at
/// construction.
#[derive(Clone, Debug)]
pub struct Lexicon {
    weights: AHashMap<String, f64>,
    negations: AHashSet<String>,
    intensifiers: AHashMap<String, f64>,
}

impl Lexicon {
    /// Get a copy of the built-in English lexicon.
    pub fn default_english() -> Self {
        DEFAULT_LEXICON.clone()
    }

    /// Create an empty lexicon to be filled via [`Lexicon::with_weight`] and
    /// friends. Remember that a classifier rejects a lexicon with no
    /// weights.
    pub fn empty() -> Self {
        Lexicon {
            weights: AHashMap::new(),
            negations: AHashSet::new(),
            intensifiers: AHashMap::new(),
        }
    }

    /// Parse a lexicon from its JSON representation.
    ///
    /// The expected shape is an object with a `weights` map and optional
    /// `negations` array and `intensifiers` map.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: LexiconFile = serde_json::from_str(json)?;

        Ok(Lexicon {
            weights: file.weights.into_iter().collect(),
            negations: file.negations.into_iter().collect(),
            intensifiers: file.intensifiers.into_iter().collect(),
        })
    }

    /// Add a polarity weight for a token.
    pub fn with_weight<S: Into<String>>(mut self, token: S, weight: f64) -> Self {
        self.weights.insert(token.into(), weight);
        self
    }

    /// Add a negation marker.
    pub fn with_negation<S: Into<String>>(mut self, token: S) -> Self {
        self.negations.insert(token.into());
        self
    }

    /// Add an intensifier with its multiplier.
    pub fn with_intensifier<S: Into<String>>(mut self, token: S, multiplier: f64) -> Self {
        self.intensifiers.insert(token.into(), multiplier);
        self
    }

    /// Look up the polarity weight of a token. Unknown tokens weigh 0.0.
    pub fn weight(&self, token: &str) -> f64 {
        self.weights.get(token).copied().unwrap_or(0.0)
    }

    /// Check whether a token is a negation marker.
    pub fn is_negation(&self, token: &str) -> bool {
        self.negations.contains(token)
    }

    /// Look up the intensifier multiplier of a token, if it is one.
    pub fn intensifier(&self, token: &str) -> Option<f64> {
        self.intensifiers.get(token).copied()
    }

    /// Number of weighted tokens in the lexicon.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Check whether the weight table is empty (a configuration fault).
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::default_english()
    }
}
