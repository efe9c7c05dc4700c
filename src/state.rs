use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use topstories::TextFetcher;

#[derive(Debug, Deserialize)]
pub struct TopStoriesQuery {
    pub n: Option<i64>,
}

pub type SharedState = AppState;

#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<dyn TextFetcher>,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub http_timeout: Duration,
    pub user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            http_timeout: Duration::from_secs(10),
            user_agent: "hn-top/0.1".to_string(),
        }
    }
}

impl AppConfig {
    /// 環境変数から読み込む。数値として読めない値はデフォルトに戻す
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = parse_or_default(&lookup, "PORT", defaults.port);
        let timeout_secs =
            parse_or_default(&lookup, "HTTP_TIMEOUT_SECS", defaults.http_timeout.as_secs());
        let user_agent = lookup("USER_AGENT")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.user_agent);

        Self {
            port,
            http_timeout: Duration::from_secs(timeout_secs),
            user_agent,
        }
    }
}

fn parse_or_default<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse() {
            Ok(v) => v,
            Err(_) => {
                tracing::warn!("Invalid {}={:?}, falling back to {}", key, raw, default);
                default
            }
        },
        None => default,
    }
}
