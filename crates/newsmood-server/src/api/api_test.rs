use std::net::SocketAddr;

use axum::body::{to_bytes, Body};
use axum::http::Request;
use newsmood_core::Environment;
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::sentiment::{parse_max, resolve_query};
use super::*;

fn test_config(base_url: &str, fallback_to_sample: bool) -> AppConfig {
    AppConfig {
        news_api_key: "test-key".to_string(),
        env: Environment::Test,
        bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        log_level: "debug".to_string(),
        newsapi_base_url: base_url.to_string(),
        request_timeout_secs: 5,
        user_agent: "newsmood-test".to_string(),
        default_query: "acme".to_string(),
        lexicon_path: None,
        stopwords_path: None,
        fallback_to_sample,
    }
}

fn test_app(base_url: &str, fallback_to_sample: bool) -> Router {
    let config = test_config(base_url, fallback_to_sample);
    let news = NewsApiClient::with_base_url(
        &config.news_api_key,
        config.request_timeout_secs,
        &config.user_agent,
        &config.newsapi_base_url,
    )
    .expect("client construction should not fail");
    build_app(AppState {
        analyzer: Arc::new(Analyzer::builtin()),
        news: Arc::new(news),
        config: Arc::new(config),
    })
}

async fn send_get(app: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("response");
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let json = serde_json::from_slice(&body).expect("json parse");
    (status, headers, json)
}

fn ok_body(articles: &serde_json::Value) -> serde_json::Value {
    serde_json::json!({ "status": "ok", "totalResults": 0, "articles": articles })
}

#[test]
fn parse_max_applies_leading_integer_rules() {
    assert_eq!(parse_max(None), 100);
    assert_eq!(parse_max(Some("")), 100);
    assert_eq!(parse_max(Some("abc")), 100);
    assert_eq!(parse_max(Some("0")), 100);
    assert_eq!(parse_max(Some("-5")), 100);
    assert_eq!(parse_max(Some("25")), 25);
    assert_eq!(parse_max(Some(" 40abc")), 40);
    assert_eq!(parse_max(Some("+7")), 7);
    assert_eq!(parse_max(Some("99999999999")), u32::MAX);
}

#[test]
fn resolve_query_falls_back_to_default() {
    assert_eq!(resolve_query(None, "acme"), "acme");
    assert_eq!(resolve_query(Some("   "), "acme"), "acme");
    assert_eq!(resolve_query(Some(" tesla "), "acme"), "tesla");
}

#[test]
fn api_error_maps_to_internal_server_error() {
    let response = ApiError::new(REPORT_FAILURE_MESSAGE).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn health_returns_ok() {
    let (status, headers, json) = send_get(test_app("http://127.0.0.1:9", false), "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!({ "status": "ok" }));
    assert!(headers.contains_key("x-request-id"));
}

#[tokio::test]
async fn request_id_header_is_echoed() {
    let app = test_app("http://127.0.0.1:9", false);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .header("x-request-id", "req-abc")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(
        response.headers().get("x-request-id").and_then(|v| v.to_str().ok()),
        Some("req-abc")
    );
}

#[tokio::test]
async fn report_analyzes_upstream_articles() {
    let server = MockServer::start().await;
    let articles = serde_json::json!([
        {
            "source": { "id": null, "name": "Wire" },
            "author": "Jane",
            "title": "Acme launch a great success",
            "description": "Analysts call the product amazing",
            "publishedAt": "2026-01-02T00:00:00Z"
        },
        {
            "source": { "id": null, "name": "Post" },
            "author": null,
            "title": "Acme recall",
            "description": "A terrible defect forces a recall",
            "publishedAt": "2026-01-03T00:00:00Z"
        }
    ]);

    Mock::given(method("GET"))
        .and(path("/v2/everything"))
        .and(query_param("q", "tesla"))
        .and(query_param("pageSize", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body(&articles)))
        .expect(2)
        .mount(&server)
        .await;

    let (status, _, json) = send_get(
        test_app(&server.uri(), false),
        "/api/news/sentiment?query=tesla&max=20",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // Both windows return the same two articles; they are not deduplicated.
    assert_eq!(json["totalArticles"], 4);
    assert_eq!(json["overallSentiment"]["positive"], 50);
    assert_eq!(json["overallSentiment"]["negative"], 50);
    assert_eq!(json["sentimentTrend"].as_array().map(Vec::len), Some(6));
    assert_eq!(
        json["mostPositiveComments"][0]["text"],
        "Analysts call the product amazing"
    );
    assert_eq!(json["mostNegativeComments"][0]["username"], "Editor");
}

#[tokio::test]
async fn report_uses_default_query_and_page_size() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("q", "acme"))
        .and(query_param("pageSize", "100"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(ok_body(&serde_json::json!([]))),
        )
        .expect(2)
        .mount(&server)
        .await;

    let (status, _, json) = send_get(
        test_app(&server.uri(), false),
        "/api/news/sentiment?max=nonsense",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["totalArticles"], 0);
    assert_eq!(
        json["overallSentiment"],
        serde_json::json!({ "positive": 0, "neutral": 0, "negative": 0 })
    );
}

#[tokio::test]
async fn upstream_failure_returns_generic_500() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "status": "error",
            "code": "apiKeyInvalid",
            "message": "Your API key is invalid"
        })))
        .mount(&server)
        .await;

    let (status, _, json) = send_get(test_app(&server.uri(), false), "/api/news/sentiment").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json,
        serde_json::json!({ "error": "Failed to fetch and analyze news data" })
    );
}

#[tokio::test]
async fn upstream_failure_serves_sample_when_enabled() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let (status, _, json) = send_get(
        test_app(&server.uri(), true),
        "/api/news/sentiment?query=tesla",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let expected = newsmood_sentiment::sample_report("tesla", chrono::Utc::now());
    assert_eq!(json["totalArticles"], expected.total_articles);
    assert_eq!(
        json["overallSentiment"],
        serde_json::to_value(expected.overall_sentiment).expect("serialize")
    );
}

#[tokio::test]
async fn sample_route_is_deterministic_per_query() {
    let app = test_app("http://127.0.0.1:9", false);
    let (status, _, first) = send_get(app.clone(), "/api/news/sentiment/sample?query=tesla").await;
    let (_, _, second) = send_get(app, "/api/news/sentiment/sample?query=tesla").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["overallSentiment"], second["overallSentiment"]);
    assert_eq!(first["topTopics"], second["topTopics"]);
    assert_eq!(first["sentimentTrend"].as_array().map(Vec::len), Some(6));
}
