//! Assembly of the full dashboard report.

use chrono::{DateTime, Utc};
use newsmood_core::Article;

use crate::aggregate::{by_month_at, by_source, overall_distribution};
use crate::notable::{notable, Direction, DEFAULT_COMMENT_COUNT};
use crate::scorer::Analyzer;
use crate::topics::{extract_topics, DEFAULT_TOPIC_COUNT};
use crate::types::SentimentReport;

/// Run every reducer over `articles`, bucketing the trend relative to `now`.
///
/// Pure: the same inputs always produce the same report.
#[must_use]
pub fn build_report(
    analyzer: &Analyzer,
    articles: &[Article],
    now: DateTime<Utc>,
) -> SentimentReport {
    let report = SentimentReport {
        overall_sentiment: overall_distribution(analyzer, articles),
        sentiment_by_source: by_source(analyzer, articles),
        sentiment_trend: by_month_at(analyzer, articles, now),
        top_topics: extract_topics(analyzer, articles, DEFAULT_TOPIC_COUNT),
        most_positive_comments: notable(
            analyzer,
            articles,
            Direction::Positive,
            DEFAULT_COMMENT_COUNT,
        ),
        most_negative_comments: notable(
            analyzer,
            articles,
            Direction::Negative,
            DEFAULT_COMMENT_COUNT,
        ),
        total_articles: articles.len(),
    };

    tracing::debug!(
        articles = report.total_articles,
        sources = report.sentiment_by_source.len(),
        topics = report.top_topics.len(),
        "built sentiment report"
    );

    report
}
