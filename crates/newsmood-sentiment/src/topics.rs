//! TF-IDF topic extraction.
//!
//! Each article's `title + " " + description` is one document. Every
//! document contributes its ten highest-weighted terms; stopwords and terms of
//! three characters or fewer are dropped, and the survivors are merged across
//! documents by summing their weights.

use std::collections::{HashMap, HashSet};

use newsmood_core::Article;

use crate::aggregate::LabelCounts;
use crate::scorer::{tokenize, Analyzer};
use crate::types::Topic;

/// Default number of topics reported.
pub const DEFAULT_TOPIC_COUNT: usize = 5;

const TERMS_PER_DOCUMENT: usize = 10;
const MIN_TERM_LEN: usize = 4;
/// Display multiplier applied to summed weights.
const COUNT_SCALE: f64 = 10.0;

/// Extract up to `count` topics from `articles`, highest summed weight first.
///
/// Ties keep the order in which terms were first merged.
#[must_use]
pub fn extract_topics(analyzer: &Analyzer, articles: &[Article], count: usize) -> Vec<Topic> {
    if articles.is_empty() || count == 0 {
        return Vec::new();
    }

    let documents: Vec<Vec<String>> = articles.iter().map(|a| tokenize(&a.text())).collect();
    let idf = inverse_document_frequency(&documents);

    let mut merged: Vec<(String, f64)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for document in &documents {
        for (term, weight) in top_terms(document, &idf) {
            if term.chars().count() < MIN_TERM_LEN || analyzer.stopwords().contains(term) {
                continue;
            }
            match index.get(term) {
                Some(&slot) => merged[slot].1 += weight,
                None => {
                    index.insert(term.to_owned(), merged.len());
                    merged.push((term.to_owned(), weight));
                }
            }
        }
    }

    merged.sort_by(|a, b| b.1.total_cmp(&a.1));
    merged.truncate(count);

    let lowered: Vec<(String, String)> = articles
        .iter()
        .map(|a| (a.title.to_lowercase(), a.description.to_lowercase()))
        .collect();

    merged
        .into_iter()
        .map(|(name, weight)| {
            let sentiment = topic_sentiment(analyzer, articles, &lowered, &name);
            Topic {
                count: scale_count(weight),
                name,
                sentiment,
            }
        })
        .collect()
}

/// `1 + ln(N / (1 + df))` for every term in the corpus.
#[allow(clippy::cast_precision_loss)]
fn inverse_document_frequency(documents: &[Vec<String>]) -> HashMap<&str, f64> {
    let mut df: HashMap<&str, usize> = HashMap::new();
    for document in documents {
        let unique: HashSet<&str> = document.iter().map(String::as_str).collect();
        for term in unique {
            *df.entry(term).or_insert(0) += 1;
        }
    }

    let n = documents.len() as f64;
    df.into_iter()
        .map(|(term, freq)| (term, 1.0 + (n / (1.0 + freq as f64)).ln()))
        .collect()
}

/// The document's highest-weighted terms, ties in first-occurrence order.
#[allow(clippy::cast_precision_loss)]
fn top_terms<'a>(document: &'a [String], idf: &HashMap<&str, f64>) -> Vec<(&'a str, f64)> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();
    for token in document {
        match slots.get(token.as_str()) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(token.as_str(), counts.len());
                counts.push((token.as_str(), 1));
            }
        }
    }

    let mut weighted: Vec<(&str, f64)> = counts
        .into_iter()
        .map(|(term, tf)| (term, tf as f64 * idf.get(term).copied().unwrap_or(0.0)))
        .collect();
    weighted.sort_by(|a, b| b.1.total_cmp(&a.1));
    weighted.truncate(TERMS_PER_DOCUMENT);
    weighted
}

/// `(positive - negative) / matching` over articles whose title or
/// description contains `term`, `0.0` when none match.
#[allow(clippy::cast_precision_loss)]
fn topic_sentiment(
    analyzer: &Analyzer,
    articles: &[Article],
    lowered: &[(String, String)],
    term: &str,
) -> f64 {
    let needle = term.to_lowercase();
    let mut counts = LabelCounts::default();
    for (article, (title, description)) in articles.iter().zip(lowered) {
        if title.contains(&needle) || description.contains(&needle) {
            counts.add(analyzer.classify(&article.text()));
        }
    }
    let total = counts.total().max(1) as f64;
    (counts.positive as f64 - counts.negative as f64) / total
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scale_count(weight: f64) -> u32 {
    (weight * COUNT_SCALE).round().max(0.0) as u32
}
