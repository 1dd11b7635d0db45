use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real process environment so tests can drive it with a
/// plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_bool = |var: &str, default: &str| -> Result<bool, ConfigError> {
        let raw = or_default(var, default);
        match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            other => Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("expected a boolean, got '{other}'"),
            }),
        }
    };

    let optional_path = |var: &str| -> Option<PathBuf> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
    };

    let news_api_key = require("NEWS_API_KEY")?;

    let env = parse_environment(&or_default("NEWSMOOD_ENV", "development"))?;

    let bind_raw = or_default("NEWSMOOD_BIND_ADDR", "0.0.0.0:5000");
    let mut bind_addr =
        bind_raw
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: "NEWSMOOD_BIND_ADDR".to_string(),
                reason: e.to_string(),
            })?;
    if let Ok(port) = lookup("PORT") {
        let port = port
            .trim()
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: "PORT".to_string(),
                reason: e.to_string(),
            })?;
        bind_addr.set_port(port);
    }

    let log_level = or_default("NEWSMOOD_LOG_LEVEL", "info");
    let newsapi_base_url = or_default("NEWSMOOD_NEWSAPI_BASE_URL", "https://newsapi.org");
    let request_timeout_secs = parse_u64("NEWSMOOD_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("NEWSMOOD_USER_AGENT", "newsmood/0.1 (news-sentiment)");
    let default_query = or_default("NEWSMOOD_DEFAULT_QUERY", "your company name");
    let lexicon_path = optional_path("NEWSMOOD_LEXICON_PATH");
    let stopwords_path = optional_path("NEWSMOOD_STOPWORDS_PATH");
    let fallback_to_sample = parse_bool("NEWSMOOD_FALLBACK_TO_SAMPLE", "false")?;

    Ok(AppConfig {
        news_api_key,
        env,
        bind_addr,
        log_level,
        newsapi_base_url,
        request_timeout_secs,
        user_agent,
        default_query,
        lexicon_path,
        stopwords_path,
        fallback_to_sample,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "NEWSMOOD_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
