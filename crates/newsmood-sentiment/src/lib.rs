//! Sentiment aggregation pipeline for newsmood.
//!
//! Scores articles against a word-polarity lexicon, extracts TF-IDF topics,
//! and reduces an article set into the dashboard report: overall
//! distribution, per-source and per-month breakdowns, top topics and the most
//! extreme articles in each direction.

pub mod aggregate;
pub mod error;
pub mod lexicon;
pub mod notable;
pub mod report;
pub mod sample;
pub mod scorer;
pub mod topics;
pub mod types;

pub use aggregate::{by_month, by_month_at, by_source, overall_distribution};
pub use error::SentimentError;
pub use lexicon::{Lexicon, Stopwords};
pub use notable::{notable, Direction};
pub use report::build_report;
pub use sample::sample_report;
pub use scorer::{tokenize, Analyzer};
pub use topics::extract_topics;
pub use types::{
    Comment, MonthBucket, SentimentDistribution, SentimentLabel, SentimentReport, SourceBucket,
    Topic,
};
