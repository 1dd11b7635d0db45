//! Deterministic synthetic reports.
//!
//! Used when the upstream news API is unavailable so the dashboard still has
//! something plausible to render. The same query always produces the same
//! report (for a given month), seeded from a hash of the query string.

use chrono::{DateTime, Utc};

use crate::aggregate::trailing_month_names;
use crate::types::{
    Comment, MonthBucket, SentimentDistribution, SentimentReport, SourceBucket, Topic,
};

const COMMON_TOPICS: &[&str] = &[
    "price",
    "quality",
    "service",
    "delivery",
    "support",
    "product",
    "innovation",
    "technology",
    "value",
    "performance",
    "reliability",
    "design",
    "features",
    "responsiveness",
    "availability",
];

const SOURCE_NAMES: &[&str] = &[
    "News Media",
    "Industry Press",
    "Social Media",
    "Blog Posts",
    "Financial Reports",
    "Tech Journals",
    "Customer Reviews",
];

const POSITIVE_TEMPLATES: &[&str] = &[
    "[COMPANY]'s [TOPIC] is outstanding! I've been [VERB] it for months and couldn't be happier.",
    "The [TOPIC] of [COMPANY]'s [PRODUCT] exceeds all expectations. Worth every penny!",
    "Great [TOPIC] team at [COMPANY]. They resolved my issue within minutes!",
    "I'm impressed with how [COMPANY] handles [TOPIC]. It's rare to see such attention to detail.",
    "The new [PRODUCT] from [COMPANY] is revolutionary. Their [TOPIC] is top-notch.",
];

const NEGATIVE_TEMPLATES: &[&str] = &[
    "Disappointed with [COMPANY]'s [TOPIC]. Had to wait much longer than promised.",
    "The [TOPIC] increased again? [COMPANY] is getting too expensive for what they offer.",
    "[COMPANY]'s [TOPIC] team took days to respond. Not acceptable for a premium service.",
    "I've been a loyal customer, but [COMPANY]'s recent [TOPIC] changes are making me reconsider.",
    "The [PRODUCT] I received from [COMPANY] had quality issues. Their [TOPIC] needs improvement.",
];

const PRODUCTS: &[&str] = &["product", "service", "offering", "solution", "platform"];
const VERBS: &[&str] = &["using", "recommending", "enjoying", "testing", "evaluating"];
const COMMENT_SOURCES: &[&str] = &[
    "News Media",
    "Industry Press",
    "Social Media",
    "Blog Posts",
    "Customer Review",
];
const AUTHORS: &[&str] = &[
    "Industry Analyst",
    "Customer",
    "Tech Expert",
    "Business Reviewer",
    "Anonymous User",
];

const COMMENTS_PER_DIRECTION: u32 = 3;

/// Build a synthetic report for `query` with a trend ending at `now`.
#[must_use]
pub fn sample_report(query: &str, now: DateTime<Utc>) -> SentimentReport {
    let generator = SampleGenerator::new(query);
    let overall = generator.overall();
    let topics = generator.topics(overall);
    let (most_positive_comments, most_negative_comments) = generator.comments(&topics);

    SentimentReport {
        overall_sentiment: overall,
        sentiment_by_source: generator.sources(overall),
        sentiment_trend: generator.trend(overall, now),
        most_positive_comments,
        most_negative_comments,
        total_articles: generator.range_usize(50.0, 500.0, 50),
        top_topics: topics,
    }
}

/// 32-bit rolling hash of the UTF-16 code units of `s`, folded into `0..10000`.
#[must_use]
pub fn query_seed(s: &str) -> u32 {
    let hash = s.encode_utf16().fold(0_i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    });
    (hash % 10_000).unsigned_abs()
}

struct SampleGenerator<'q> {
    query: &'q str,
    seed: u32,
}

impl<'q> SampleGenerator<'q> {
    fn new(query: &'q str) -> Self {
        Self {
            query,
            seed: query_seed(query),
        }
    }

    /// Linear-congruential value in `[min, max)` for the given stream offset.
    fn range(&self, min: f64, max: f64, offset: u32) -> f64 {
        let x = f64::from(self.seed + offset);
        let value = (x * 9301.0 + 49297.0) % 233_280.0;
        min + (value / 233_280.0) * (max - min)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn range_usize(&self, min: f64, max: f64, offset: u32) -> usize {
        self.range(min, max, offset).floor().max(0.0) as usize
    }

    #[allow(clippy::cast_precision_loss)]
    fn pick<'a>(&self, items: &[&'a str], offset: u32) -> &'a str {
        let idx = self.range_usize(0.0, items.len() as f64, offset);
        items[idx.min(items.len() - 1)]
    }

    fn overall(&self) -> SentimentDistribution {
        let base_positive = self.range(40.0, 80.0, 1).clamp(30.0, 90.0);
        let base_negative = self.range(10.0, 40.0, 2).clamp(5.0, 50.0);
        let base_neutral = self
            .range(10.0, 30.0, 3)
            .max(5.0)
            .min(100.0 - base_positive - base_negative)
            .max(0.0);

        let total = base_positive + base_neutral + base_negative;
        let positive = to_percent(base_positive / total * 100.0);
        let negative = to_percent(base_negative / total * 100.0).min(100 - positive);
        SentimentDistribution {
            positive,
            neutral: 100 - positive - negative,
            negative,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn topics(&self, overall: SentimentDistribution) -> Vec<Topic> {
        let mut pool: Vec<String> = Vec::new();
        let query_words = self.query.to_lowercase();
        let candidates = query_words
            .split_whitespace()
            .filter(|w| w.chars().count() > 3)
            .chain(COMMON_TOPICS.iter().copied());
        for word in candidates {
            if !pool.iter().any(|p| p == word) {
                pool.push(word.to_owned());
            }
        }

        let topic_count = self.range_usize(5.0, 8.0, 10);
        let mut selected = Vec::with_capacity(topic_count);
        for i in 0..topic_count {
            if pool.is_empty() {
                break;
            }
            let idx = self
                .range_usize(0.0, pool.len() as f64, offset(i * 10))
                .min(pool.len() - 1);
            selected.push(pool.remove(idx));
        }

        let leaning_positive = overall.positive > overall.negative;
        let mut topics: Vec<Topic> = selected
            .into_iter()
            .enumerate()
            .map(|(i, name)| {
                let magnitude = self.range(0.1, 0.8, offset(i * 5));
                // Every third topic runs against the overall mood.
                let contrasting = i % 3 == 0;
                let sentiment = if leaning_positive != contrasting {
                    magnitude
                } else {
                    -magnitude
                };
                Topic {
                    name,
                    count: u32::try_from(self.range_usize(30.0, 150.0, offset(i * 3)))
                        .unwrap_or(u32::MAX),
                    sentiment: round2(sentiment),
                }
            })
            .collect();
        topics.sort_by(|a, b| b.count.cmp(&a.count));
        topics
    }

    fn trend(&self, overall: SentimentDistribution, now: DateTime<Utc>) -> Vec<MonthBucket> {
        let positive = f64::from(overall.positive);
        let negative = f64::from(overall.negative);
        let mut current_positive = self.range(positive - 15.0, positive + 15.0, 20).round();
        let mut current_negative = self.range(negative - 10.0, negative + 10.0, 30).round();

        trailing_month_names(now)
            .into_iter()
            .zip(0_u32..)
            .map(|(month, i)| {
                let (pos_step, neg_step) = match self.seed % 3 {
                    0 => (
                        self.range(-3.0, 5.0, i * 7),
                        self.range(-5.0, 2.0, i * 9),
                    ),
                    1 => (
                        self.range(-5.0, 2.0, i * 7),
                        self.range(-2.0, 5.0, i * 9),
                    ),
                    _ => (
                        self.range(-8.0, 8.0, i * 7),
                        self.range(-6.0, 6.0, i * 9),
                    ),
                };
                current_positive = (current_positive + pos_step).clamp(30.0, 90.0).round();
                current_negative = (current_negative + neg_step).clamp(5.0, 40.0).round();

                let (positive, neutral, negative) =
                    balance(to_percent(current_positive), to_percent(current_negative));
                MonthBucket {
                    month: month.to_owned(),
                    positive,
                    neutral,
                    negative,
                }
            })
            .collect()
    }

    fn sources(&self, overall: SentimentDistribution) -> Vec<SourceBucket> {
        let positive = f64::from(overall.positive);
        let negative = f64::from(overall.negative);
        let source_count = u32::try_from(self.range_usize(1.0, 4.0, 40)).unwrap_or(1);

        (0..source_count)
            .map(|i| {
                let name = self.pick(SOURCE_NAMES, i * 5);
                let source_positive =
                    to_percent(self.range(positive - 10.0, positive + 10.0, i * 7).round());
                let source_negative =
                    to_percent(self.range(negative - 8.0, negative + 8.0, i * 9).round());
                let (positive, neutral, negative) = balance(source_positive, source_negative);
                SourceBucket {
                    name: name.to_owned(),
                    positive,
                    neutral,
                    negative,
                }
            })
            .collect()
    }

    fn comments(&self, topics: &[Topic]) -> (Vec<Comment>, Vec<Comment>) {
        let companies = [self.query, "they", "the company", "their team"];
        let topic_names: Vec<&str> = topics.iter().map(|t| t.name.as_str()).collect();
        let topic_at = |offset: u32| {
            if topic_names.is_empty() {
                "service"
            } else {
                self.pick(&topic_names, offset)
            }
        };

        let positive = (0..COMMENTS_PER_DIRECTION)
            .map(|i| {
                let text = fill_template(
                    self.pick(POSITIVE_TEMPLATES, i * 3),
                    self.pick(&companies, i * 5),
                    topic_at(i * 7),
                    self.pick(PRODUCTS, i * 9),
                    self.pick(VERBS, i * 11),
                );
                Comment {
                    text,
                    score: round2(0.7 + self.range(0.0, 0.3, i * 13)),
                    source: self.pick(COMMENT_SOURCES, i * 15).to_owned(),
                    username: self.pick(AUTHORS, i * 17).to_owned(),
                }
            })
            .collect();

        let negative = (0..COMMENTS_PER_DIRECTION)
            .map(|i| {
                let text = fill_template(
                    self.pick(NEGATIVE_TEMPLATES, i * 4),
                    self.pick(&companies, i * 6),
                    topic_at(i * 8),
                    self.pick(PRODUCTS, i * 10),
                    "",
                );
                Comment {
                    text,
                    score: round2(-0.5 - self.range(0.0, 0.3, i * 12)),
                    source: self.pick(COMMENT_SOURCES, i * 14).to_owned(),
                    username: self.pick(AUTHORS, i * 16).to_owned(),
                }
            })
            .collect();

        (positive, negative)
    }
}

fn fill_template(template: &str, company: &str, topic: &str, product: &str, verb: &str) -> String {
    template
        .replacen("[COMPANY]", company, 1)
        .replacen("[TOPIC]", topic, 1)
        .replacen("[PRODUCT]", product, 1)
        .replacen("[VERB]", verb, 1)
}

/// Derive neutral as the remainder; when positive and negative overshoot 100,
/// the larger of the two absorbs the excess.
fn balance(mut positive: u32, mut negative: u32) -> (u32, u32, u32) {
    let sum = positive + negative;
    if sum > 100 {
        let excess = sum - 100;
        if positive > negative {
            positive -= excess;
        } else {
            negative -= excess;
        }
    }
    (positive, 100 - positive - negative, negative)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_percent(value: f64) -> u32 {
    value.round().clamp(0.0, 100.0) as u32
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn offset(i: usize) -> u32 {
    u32::try_from(i).unwrap_or(u32::MAX)
}
