//! Distribution reducers over an article set.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, Months, Utc};
use newsmood_core::Article;

use crate::scorer::Analyzer;
use crate::types::{MonthBucket, SentimentDistribution, SentimentLabel, SourceBucket};

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Length of the trend window in calendar months.
pub const TREND_MONTHS: u32 = 6;

/// Sources need strictly more than this many articles to be reported.
const MIN_SOURCE_ARTICLES: usize = 2;
const MAX_SOURCES: usize = 5;

const UNKNOWN_SOURCE: &str = "Unknown";

/// Label distribution over every article.
#[must_use]
pub fn overall_distribution(analyzer: &Analyzer, articles: &[Article]) -> SentimentDistribution {
    distribution(analyzer, articles)
}

/// Per-source distributions for sources with more than two articles.
///
/// Groups keep the order in which their source was first seen and the result
/// is capped at five entries; it is not sorted by volume. Articles without a
/// source name are grouped under `"Unknown"`.
#[must_use]
pub fn by_source(analyzer: &Analyzer, articles: &[Article]) -> Vec<SourceBucket> {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&Article>> = HashMap::new();

    for article in articles {
        let name = match article.source.name.as_str() {
            "" => UNKNOWN_SOURCE,
            name => name,
        };
        groups
            .entry(name)
            .or_insert_with(|| {
                order.push(name);
                Vec::new()
            })
            .push(article);
    }

    order
        .into_iter()
        .filter_map(|name| {
            let group = groups.get(name)?;
            if group.len() <= MIN_SOURCE_ARTICLES {
                return None;
            }
            let dist = distribution(analyzer, group.iter().copied());
            Some(SourceBucket {
                name: name.to_owned(),
                positive: dist.positive,
                neutral: dist.neutral,
                negative: dist.negative,
            })
        })
        .take(MAX_SOURCES)
        .collect()
}

/// Monthly distributions for the trailing six months ending now.
#[must_use]
pub fn by_month(analyzer: &Analyzer, articles: &[Article]) -> Vec<MonthBucket> {
    by_month_at(analyzer, articles, Utc::now())
}

/// Monthly distributions for the six calendar months ending at `now`,
/// oldest first.
///
/// Only articles published on or after `now - 6 months` are counted, and they
/// are matched to a bucket by month name alone. Months without articles are
/// zero-filled. Articles with a missing or unparseable timestamp are skipped.
#[must_use]
pub fn by_month_at(
    analyzer: &Analyzer,
    articles: &[Article],
    now: DateTime<Utc>,
) -> Vec<MonthBucket> {
    let months = trailing_month_names(now);
    let window_start = now
        .checked_sub_months(Months::new(TREND_MONTHS))
        .unwrap_or(DateTime::<Utc>::MIN_UTC);

    let mut buckets: HashMap<&str, Vec<&Article>> = HashMap::new();
    for article in articles {
        let Some(published) = article.published() else {
            continue;
        };
        if published < window_start {
            continue;
        }
        let name = month_name(published);
        if months.contains(&name) {
            buckets.entry(name).or_default().push(article);
        }
    }

    months
        .into_iter()
        .map(|month| {
            let dist = buckets
                .get(month)
                .map(|group| distribution(analyzer, group.iter().copied()))
                .unwrap_or_default();
            MonthBucket {
                month: month.to_owned(),
                positive: dist.positive,
                neutral: dist.neutral,
                negative: dist.negative,
            }
        })
        .collect()
}

/// Names of the six calendar months ending with the month of `now`, oldest first.
pub(crate) fn trailing_month_names(now: DateTime<Utc>) -> Vec<&'static str> {
    (0..TREND_MONTHS)
        .rev()
        .map(|back| {
            now.checked_sub_months(Months::new(back))
                .map_or(MONTH_NAMES[0], month_name)
        })
        .collect()
}

fn month_name(at: DateTime<Utc>) -> &'static str {
    MONTH_NAMES[at.month0() as usize]
}

/// Classify each article's title and description and convert counts to
/// rounded percentages.
pub(crate) fn distribution<'a>(
    analyzer: &Analyzer,
    articles: impl IntoIterator<Item = &'a Article>,
) -> SentimentDistribution {
    let mut counts = LabelCounts::default();
    for article in articles {
        counts.add(analyzer.classify(&article.text()));
    }
    counts.distribution()
}

/// Running tally of labels.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct LabelCounts {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl LabelCounts {
    pub fn add(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Neutral => self.neutral += 1,
            SentimentLabel::Negative => self.negative += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }

    pub fn distribution(&self) -> SentimentDistribution {
        let total = self.total().max(1);
        SentimentDistribution {
            positive: percent(self.positive, total),
            neutral: percent(self.neutral, total),
            negative: percent(self.negative, total),
        }
    }
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn percent(count: usize, total: usize) -> u32 {
    ((count as f64 / total as f64) * 100.0).round() as u32
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod tests;
