use serde::{Deserialize, Serialize};

/// 1リクエストで返す件数の上限
pub const MAX_POST_COUNT: usize = 100;
pub const DEFAULT_POST_COUNT: usize = 30;

/// 検証済みの投稿
///
/// フィールドの順序がそのまま JSON の出力順になる
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedPost {
    pub title: String,
    pub author: String,
    pub uri: String,
    pub points: i64,
    pub comments: i64,
    pub rank: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    Ok,
    NoPostsFound,
}

/// `/topstories` のレスポンス型
#[derive(Debug, Serialize, Deserialize)]
pub struct TopPostsResponse {
    pub status: ResponseStatus,
    pub posts: Vec<ValidatedPost>,
}

/// インデント付きの JSON 配列にする
pub fn render_posts_json(posts: &[ValidatedPost]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(posts)
}

/// 符号付きの要求件数を 0..=max に丸める (0 以下は 0)
pub fn requested_count(n: i64, max: usize) -> usize {
    usize::try_from(n).unwrap_or(0).min(max)
}

/// CLI 引数の件数を解釈する。範囲外はエラー
pub fn parse_post_count(arg: &str) -> anyhow::Result<usize> {
    use anyhow::Context;

    let n: i64 = arg
        .trim()
        .parse()
        .with_context(|| format!("Invalid post count: {:?}", arg))?;

    if n < 0 || n > MAX_POST_COUNT as i64 {
        anyhow::bail!("Post count must be between 0 and {}, got {}", MAX_POST_COUNT, n);
    }

    Ok(n as usize)
}
