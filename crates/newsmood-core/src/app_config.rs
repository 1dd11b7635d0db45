use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub news_api_key: String,
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub newsapi_base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Query used when a request does not carry one.
    pub default_query: String,
    pub lexicon_path: Option<PathBuf>,
    pub stopwords_path: Option<PathBuf>,
    /// Serve a synthetic report instead of a 500 when the upstream fetch fails.
    pub fallback_to_sample: bool,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("news_api_key", &"[redacted]")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("newsapi_base_url", &self.newsapi_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("default_query", &self.default_query)
            .field("lexicon_path", &self.lexicon_path)
            .field("stopwords_path", &self.stopwords_path)
            .field("fallback_to_sample", &self.fallback_to_sample)
            .finish()
    }
}
