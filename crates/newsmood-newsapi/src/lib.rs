//! Client for the NewsAPI `everything` search endpoint.
//!
//! Fetches a recent window and a historical window for a query and hands the
//! concatenated article list to the sentiment pipeline.

mod client;
mod error;
mod types;

pub use client::{fetch_window, FetchWindow, NewsApiClient, MAX_PAGE_SIZE};
pub use error::NewsApiError;
pub use types::SearchResponse;
