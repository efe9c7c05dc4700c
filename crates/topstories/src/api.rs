use crate::error::FetchError;
use crate::structs::RawPost;
use anyhow::{Context, Result};
use reqwest::Client;

pub const TOP_STORIES_URL: &str = "https://hacker-news.firebaseio.com/v0/topstories.json";

pub fn item_url(id: i64) -> String {
    format!(
        "https://hacker-news.firebaseio.com/v0/item/{}.json?print=pretty",
        id
    )
}

/// GET して本文をテキストで返すだけの口
///
/// タイムアウトやステータスの扱いは実装側の責任
#[async_trait::async_trait]
pub trait TextFetcher: Send + Sync {
    async fn fetch_text(&self, url: &str) -> Result<String>;
}

pub struct HttpTextFetcher {
    client: Client,
}

impl HttpTextFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl TextFetcher for HttpTextFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        let res = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        if !res.status().is_success() {
            let status = res.status();
            anyhow::bail!("{} returned {}", url, status);
        }

        res.text().await.context("Failed to read response body")
    }
}

pub async fn fetch_top_ids<F: TextFetcher + ?Sized>(fetcher: &F) -> Result<Vec<i64>, FetchError> {
    let body = fetcher
        .fetch_text(TOP_STORIES_URL)
        .await
        .map_err(FetchError::Transport)?;

    Ok(serde_json::from_str(&body)?)
}

/// 削除済みなどで本文が空 / `null` の場合は Ok(None)
pub async fn fetch_post_by_id<F: TextFetcher + ?Sized>(
    fetcher: &F,
    id: i64,
) -> Result<Option<RawPost>, FetchError> {
    let body = fetcher
        .fetch_text(&item_url(id))
        .await
        .map_err(FetchError::Transport)?;

    if body.trim().is_empty() {
        return Ok(None);
    }

    Ok(serde_json::from_str::<Option<RawPost>>(&body)?)
}
