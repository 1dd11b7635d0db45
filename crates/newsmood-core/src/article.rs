use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Publication that carried an article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSource {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

/// A news article as returned by the upstream search API.
///
/// Every text field tolerates being absent or `null` and falls back to the
/// empty string, so a sparse upstream payload never fails to decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: ArticleSource,
    /// Raw RFC 3339 timestamp, parsed lazily by [`Article::published`].
    #[serde(default, deserialize_with = "null_as_empty")]
    pub published_at: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
}

impl Article {
    /// Title and description joined by a single space; the text every
    /// sentiment reducer scores.
    #[must_use]
    pub fn text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }

    /// Publication timestamp, or `None` when missing or unparseable.
    #[must_use]
    pub fn published(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(self.published_at.trim())
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
