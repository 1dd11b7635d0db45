//! Lexicon sentiment scorer.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::SentimentError;
use crate::lexicon::{Lexicon, Stopwords};
use crate::types::SentimentLabel;

/// Raw score above which text is positive.
pub const POSITIVE_THRESHOLD: f64 = 0.2;
/// Raw score below which text is negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.2;

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z0-9_]+").expect("valid word regex"));

/// Inflection suffixes tried when a token has no exact lexicon entry.
/// The second element is appended to the stripped stem.
const SUFFIXES: &[(&str, &str)] = &[
    ("ies", "y"),
    ("es", ""),
    ("s", ""),
    ("ed", ""),
    ("ed", "e"),
    ("ing", ""),
    ("ing", "e"),
    ("ly", ""),
];

/// Split text into lowercase word tokens.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD_RE
        .find_iter(&lower)
        .map(|m| m.as_str().to_owned())
        .collect()
}

/// Lexicon and stopword tables bundled for the scoring and topic passes.
///
/// Holds no mutable state; share it behind an `Arc` when needed.
#[derive(Debug, Clone)]
pub struct Analyzer {
    lexicon: Lexicon,
    stopwords: Stopwords,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Analyzer {
    #[must_use]
    pub fn new(lexicon: Lexicon, stopwords: Stopwords) -> Self {
        Self { lexicon, stopwords }
    }

    /// Analyzer over the embedded lexicon and stopword list.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(Lexicon::builtin(), Stopwords::builtin())
    }

    /// Build an analyzer, replacing either built-in table with a file when a
    /// path is given.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError`] if a replacement file cannot be read or parsed.
    pub fn from_paths(
        lexicon_path: Option<&Path>,
        stopwords_path: Option<&Path>,
    ) -> Result<Self, SentimentError> {
        let lexicon = match lexicon_path {
            Some(path) => Lexicon::from_path(path)?,
            None => Lexicon::builtin(),
        };
        let stopwords = match stopwords_path {
            Some(path) => Stopwords::from_path(path)?,
            None => Stopwords::builtin(),
        };
        Ok(Self::new(lexicon, stopwords))
    }

    #[must_use]
    pub fn stopwords(&self) -> &Stopwords {
        &self.stopwords
    }

    /// Sum of lexicon weights over the tokens of `text`.
    ///
    /// The sum is not normalized by length, so longer texts reach the
    /// classification thresholds more easily. Empty or unknown text scores `0.0`.
    #[must_use]
    pub fn score(&self, text: &str) -> f64 {
        tokenize(text)
            .iter()
            .filter_map(|token| self.token_weight(token))
            .sum()
    }

    /// Bucket the raw score of `text` into a label.
    #[must_use]
    pub fn classify(&self, text: &str) -> SentimentLabel {
        SentimentLabel::from_score(self.score(text))
    }

    fn token_weight(&self, token: &str) -> Option<f64> {
        if let Some(weight) = self.lexicon.weight(token) {
            return Some(weight);
        }
        SUFFIXES.iter().find_map(|(suffix, replacement)| {
            let stem = token.strip_suffix(suffix)?;
            if stem.len() < 3 {
                return None;
            }
            self.lexicon.weight(&format!("{stem}{replacement}"))
        })
    }
}
