//! Command handlers for the CLI.

use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use newsmood_newsapi::NewsApiClient;
use newsmood_sentiment::{build_report, sample_report, Analyzer};
use serde::Serialize;

/// Optional replacement lexicon tables from the command line or env.
#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub lexicon: Option<PathBuf>,
    pub stopwords: Option<PathBuf>,
}

impl Tables {
    fn analyzer(&self) -> anyhow::Result<Analyzer> {
        Analyzer::from_paths(self.lexicon.as_deref(), self.stopwords.as_deref())
            .context("failed to load lexicon tables")
    }
}

/// Fetch both article windows for `query`, build the report, print it as JSON.
///
/// # Errors
///
/// Returns an error if configuration is incomplete, the tables cannot be
/// loaded, or the upstream fetch fails.
pub(crate) async fn run_analyze(
    tables: &Tables,
    query: Option<&str>,
    max: u32,
    pretty: bool,
) -> anyhow::Result<()> {
    let config = newsmood_core::load_app_config().context("failed to load configuration")?;
    let analyzer = tables.analyzer()?;
    let client = NewsApiClient::with_base_url(
        &config.news_api_key,
        config.request_timeout_secs,
        &config.user_agent,
        &config.newsapi_base_url,
    )?;

    let query = query
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .unwrap_or(config.default_query.as_str());
    let now = Utc::now();

    tracing::info!(query, max, "fetching articles");
    let articles = client
        .fetch_articles(query, max, now)
        .await
        .with_context(|| format!("failed to fetch articles for '{query}'"))?;

    let report = build_report(&analyzer, &articles, now);
    println!("{}", render_json(&report, pretty)?);
    Ok(())
}

/// Print the raw score and label of `text`.
///
/// # Errors
///
/// Returns an error if a replacement table cannot be loaded.
pub(crate) fn run_score(tables: &Tables, text: &str) -> anyhow::Result<()> {
    let analyzer = tables.analyzer()?;
    println!("{}", format_score(&analyzer, text));
    Ok(())
}

/// Print the synthetic report for `query`.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub(crate) fn run_sample(query: &str, pretty: bool) -> anyhow::Result<()> {
    let report = sample_report(query, Utc::now());
    println!("{}", render_json(&report, pretty)?);
    Ok(())
}

pub(crate) fn format_score(analyzer: &Analyzer, text: &str) -> String {
    let score = analyzer.score(text);
    format!("{score}\t{}", analyzer.classify(text))
}

pub(crate) fn render_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(rendered)
}
