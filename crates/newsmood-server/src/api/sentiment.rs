use axum::{
    extract::{Query, State},
    Extension, Json,
};
use chrono::Utc;
use newsmood_newsapi::MAX_PAGE_SIZE;
use newsmood_sentiment::{build_report, sample_report, SentimentReport};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{ApiError, AppState, REPORT_FAILURE_MESSAGE};

#[derive(Debug, Deserialize)]
pub(super) struct ReportQuery {
    pub query: Option<String>,
    pub max: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct SampleQuery {
    pub query: Option<String>,
}

/// Leading-integer parse of the `max` parameter.
///
/// Accepts a leading run of digits after optional whitespace and sign, so
/// `"50abc"` is 50. Absent, unparseable, zero, or negative values fall back to
/// [`MAX_PAGE_SIZE`].
pub(super) fn parse_max(raw: Option<&str>) -> u32 {
    let Some(raw) = raw else {
        return MAX_PAGE_SIZE;
    };
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() || negative {
        return MAX_PAGE_SIZE;
    }
    match digits.parse::<u32>() {
        Ok(0) => MAX_PAGE_SIZE,
        Ok(n) => n,
        Err(_) => u32::MAX,
    }
}

/// Trimmed `query`, or the configured default when absent or blank.
pub(super) fn resolve_query<'a>(query: Option<&'a str>, default: &'a str) -> &'a str {
    query
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .unwrap_or(default)
}

pub(super) async fn get_report(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<ReportQuery>,
) -> Result<Json<SentimentReport>, ApiError> {
    let query = resolve_query(params.query.as_deref(), &state.config.default_query);
    let max = parse_max(params.max.as_deref());
    let now = Utc::now();

    match state.news.fetch_articles(query, max, now).await {
        Ok(articles) => {
            let report = build_report(&state.analyzer, &articles, now);
            tracing::info!(
                request_id = %req_id.0,
                query,
                articles = report.total_articles,
                "sentiment report served"
            );
            Ok(Json(report))
        }
        Err(e) => {
            tracing::error!(
                request_id = %req_id.0,
                query,
                error = %e,
                "news fetch failed"
            );
            if state.config.fallback_to_sample {
                tracing::warn!(request_id = %req_id.0, query, "serving sample report");
                return Ok(Json(sample_report(query, now)));
            }
            Err(ApiError::new(REPORT_FAILURE_MESSAGE))
        }
    }
}

pub(super) async fn get_sample(
    State(state): State<AppState>,
    Query(params): Query<SampleQuery>,
) -> Json<SentimentReport> {
    let query = resolve_query(params.query.as_deref(), &state.config.default_query);
    Json(sample_report(query, Utc::now()))
}
