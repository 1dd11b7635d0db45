//! HTTP client for the NewsAPI `everything` endpoint.
//!
//! A report needs two sequential searches: the most recent articles with no
//! date filter, then a historical window from six months ago to one month
//! ago. Results are concatenated as-is; articles present in both windows are
//! not deduplicated.

use std::time::Duration;

use chrono::{DateTime, Months, NaiveDate, TimeDelta, Utc};
use newsmood_core::Article;
use reqwest::{Client, Url};

use crate::error::NewsApiError;
use crate::types::SearchResponse;

const DEFAULT_BASE_URL: &str = "https://newsapi.org/";
const SEARCH_PATH: &str = "v2/everything";

/// Upstream page-size limit per request.
pub const MAX_PAGE_SIZE: u32 = 100;

const HISTORY_MONTHS: u32 = 6;
const HISTORY_END_DAYS: i64 = 30;

/// Date range for the historical search, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// Six months before `now` through thirty days before `now`.
#[must_use]
pub fn fetch_window(now: DateTime<Utc>) -> FetchWindow {
    let from = now
        .checked_sub_months(Months::new(HISTORY_MONTHS))
        .unwrap_or(now);
    let to = now - TimeDelta::days(HISTORY_END_DAYS);
    FetchWindow {
        from: from.date_naive(),
        to: to.date_naive(),
    }
}

/// Client for the NewsAPI search endpoint.
///
/// Use [`NewsApiClient::new`] for production or
/// [`NewsApiClient::with_base_url`] to point at a mock server in tests.
pub struct NewsApiClient {
    client: Client,
    api_key: String,
    search_url: Url,
}

impl NewsApiClient {
    /// Creates a client pointed at `https://newsapi.org`.
    ///
    /// # Errors
    ///
    /// Returns [`NewsApiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, NewsApiError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`NewsApiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`NewsApiError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, NewsApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash so `join` appends rather than replaces
        // the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let search_url = Url::parse(&normalised)
            .and_then(|base| base.join(SEARCH_PATH))
            .map_err(|e| NewsApiError::InvalidBaseUrl {
                url: base_url.to_owned(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            search_url,
        })
    }

    /// Most recent English-language articles for `query`, newest first.
    ///
    /// # Errors
    ///
    /// - [`NewsApiError::Api`] if the API reports an error.
    /// - [`NewsApiError::Http`] on network failure.
    /// - [`NewsApiError::UnexpectedStatus`] on a non-2xx status without an error envelope.
    /// - [`NewsApiError::Deserialize`] if the body does not match the envelope.
    pub async fn search_recent(
        &self,
        query: &str,
        page_size: u32,
    ) -> Result<Vec<Article>, NewsApiError> {
        let url = self.build_url(query, page_size, &[]);
        self.request_articles(&url, &format!("search_recent(q={query})"))
            .await
    }

    /// English-language articles for `query` published within `window`.
    ///
    /// # Errors
    ///
    /// Same as [`NewsApiClient::search_recent`].
    pub async fn search_window(
        &self,
        query: &str,
        window: FetchWindow,
        page_size: u32,
    ) -> Result<Vec<Article>, NewsApiError> {
        let from = window.from.format("%Y-%m-%d").to_string();
        let to = window.to.format("%Y-%m-%d").to_string();
        let url = self.build_url(query, page_size, &[("from", &from), ("to", &to)]);
        self.request_articles(&url, &format!("search_window(q={query}, {from}..{to})"))
            .await
    }

    /// Recent articles followed by the historical window for `query`.
    ///
    /// `max` is clamped to `1..=100` and used as the page size of each call.
    /// The two calls run one after the other and any failure aborts the whole
    /// fetch; there is no retry and no partial result.
    ///
    /// # Errors
    ///
    /// Propagates the first error from either search.
    pub async fn fetch_articles(
        &self,
        query: &str,
        max: u32,
        now: DateTime<Utc>,
    ) -> Result<Vec<Article>, NewsApiError> {
        let page_size = max.clamp(1, MAX_PAGE_SIZE);

        let mut articles = self.search_recent(query, page_size).await?;
        let recent = articles.len();

        let window = fetch_window(now);
        let historical = self.search_window(query, window, page_size).await?;
        let older = historical.len();
        articles.extend(historical);

        tracing::info!(
            query,
            page_size,
            recent,
            historical = older,
            total = articles.len(),
            "fetched articles"
        );
        Ok(articles)
    }

    /// Search URL with the common parameters plus `extra`, percent-encoded.
    fn build_url(&self, query: &str, page_size: u32, extra: &[(&str, &str)]) -> Url {
        let mut url = self.search_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("q", query);
            pairs.append_pair("language", "en");
            pairs.append_pair("sortBy", "publishedAt");
            pairs.append_pair("pageSize", &page_size.to_string());
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
        }
        url
    }

    /// Sends a GET and unwraps the article list from the envelope.
    ///
    /// The API key travels in the `X-Api-Key` header so it never shows up in
    /// URLs that end up in error messages.
    async fn request_articles(
        &self,
        url: &Url,
        context: &str,
    ) -> Result<Vec<Article>, NewsApiError> {
        let response = self
            .client
            .get(url.clone())
            .header("X-Api-Key", &self.api_key)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        let parsed = serde_json::from_str::<SearchResponse>(&body);
        match parsed {
            Ok(envelope) if envelope.status == "error" => Err(NewsApiError::Api {
                code: envelope.code.unwrap_or_else(|| status.as_u16().to_string()),
                message: envelope.message.unwrap_or_default(),
            }),
            _ if !status.is_success() => Err(NewsApiError::UnexpectedStatus {
                status: status.as_u16(),
                context: context.to_owned(),
            }),
            Ok(envelope) => {
                tracing::debug!(
                    context,
                    returned = envelope.articles.len(),
                    total_results = envelope.total_results,
                    "search page received"
                );
                Ok(envelope.articles)
            }
            Err(source) => Err(NewsApiError::Deserialize {
                context: context.to_owned(),
                source,
            }),
        }
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
