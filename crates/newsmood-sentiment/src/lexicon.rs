//! Word-polarity and stopword tables.
//!
//! Both tables are plain-text data assets. The built-in copies are compiled
//! into the binary; replacements can be loaded from disk at startup.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::error::SentimentError;

const BUILTIN_LEXICON: &str = include_str!("../data/lexicon.tsv");
const BUILTIN_STOPWORDS: &str = include_str!("../data/stopwords.txt");

/// Word polarity table.
///
/// Keys are lowercase single words. Positive weights mark positive words,
/// negative weights negative ones.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    weights: HashMap<String, f64>,
}

impl Lexicon {
    /// The embedded AFINN-style table.
    ///
    /// # Panics
    ///
    /// Panics if the embedded table is malformed, which the crate's own tests rule out.
    #[must_use]
    pub fn builtin() -> Self {
        Self::parse(BUILTIN_LEXICON).expect("embedded lexicon is well-formed")
    }

    /// Load a lexicon from a `word<TAB>weight` file.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Io`] if the file cannot be read and
    /// [`SentimentError::Lexicon`] if any line is malformed.
    pub fn from_path(path: &Path) -> Result<Self, SentimentError> {
        let raw = std::fs::read_to_string(path).map_err(|source| SentimentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let lexicon = Self::parse(&raw)?;
        tracing::info!(path = %path.display(), words = lexicon.len(), "loaded lexicon");
        Ok(lexicon)
    }

    /// Parse `word<whitespace>weight` lines. Blank lines and `#` comments are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Lexicon`] naming the first malformed line.
    pub fn parse(raw: &str) -> Result<Self, SentimentError> {
        let mut weights = HashMap::new();
        for (idx, line) in raw.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let bad = |reason: String| SentimentError::Lexicon {
                line: idx + 1,
                reason,
            };

            let (word, weight) = line
                .rsplit_once(char::is_whitespace)
                .ok_or_else(|| bad(format!("expected 'word weight', got '{line}'")))?;
            let word = word.trim();
            if word.contains(char::is_whitespace) {
                return Err(bad(format!("multi-word entry '{word}' is not supported")));
            }
            let weight = weight
                .parse::<f64>()
                .map_err(|e| bad(format!("invalid weight '{weight}': {e}")))?;

            weights.insert(word.to_lowercase(), weight);
        }
        Ok(Self { weights })
    }

    /// Weight for an exact lowercase word.
    #[must_use]
    pub fn weight(&self, word: &str) -> Option<f64> {
        self.weights.get(word).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// Words excluded from topic extraction.
#[derive(Debug, Clone, Default)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    #[must_use]
    pub fn builtin() -> Self {
        Self::parse(BUILTIN_STOPWORDS)
    }

    /// Load a one-word-per-line stopword file.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Io`] if the file cannot be read.
    pub fn from_path(path: &Path) -> Result<Self, SentimentError> {
        let raw = std::fs::read_to_string(path).map_err(|source| SentimentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let stopwords = Self::parse(&raw);
        tracing::info!(path = %path.display(), words = stopwords.words.len(), "loaded stopwords");
        Ok(stopwords)
    }

    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let words = raw
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(str::to_lowercase)
            .collect();
        Self { words }
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}
