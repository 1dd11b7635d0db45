use serde::{Deserialize, Serialize};

use crate::scorer::{NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};

/// Bucketed sentiment of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Bucket a raw lexicon score using the fixed ±0.2 thresholds.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score > POSITIVE_THRESHOLD {
            Self::Positive
        } else if score < NEGATIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "positive"),
            SentimentLabel::Neutral => write!(f, "neutral"),
            SentimentLabel::Negative => write!(f, "negative"),
        }
    }
}

/// Integer percentages of articles per label.
///
/// Computed from counts with independent rounding, so the three fields may
/// sum to 99 or 101. An empty input yields all zeros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentDistribution {
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
}

impl SentimentDistribution {
    #[must_use]
    pub fn total(&self) -> u32 {
        self.positive + self.neutral + self.negative
    }
}

/// A ranked topic term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
    /// Summed TF-IDF weight scaled by 10 for display; not a mention count.
    pub count: u32,
    /// `(positive - negative) / matching` over articles mentioning the term, in `[-1, 1]`.
    pub sentiment: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthBucket {
    /// Three-letter month name, e.g. `"Jan"`.
    pub month: String,
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceBucket {
    pub name: String,
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
}

/// An article surfaced as a notable quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub text: String,
    /// Raw lexicon score, not the bucketed label.
    pub score: f64,
    pub source: String,
    pub username: String,
}

/// Everything the dashboard renders for one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentReport {
    pub overall_sentiment: SentimentDistribution,
    pub sentiment_by_source: Vec<SourceBucket>,
    pub sentiment_trend: Vec<MonthBucket>,
    pub top_topics: Vec<Topic>,
    pub most_positive_comments: Vec<Comment>,
    pub most_negative_comments: Vec<Comment>,
    pub total_articles: usize,
}
