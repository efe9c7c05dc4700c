use serde::Deserialize;

/// `item/{id}.json` のレスポンス
///
/// 削除済みの投稿などではフィールドが丸ごと欠けたり `null` になるので、
/// すべて Option で受けておき判定は logic 側で行う
#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
pub struct RawPost {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "by")]
    pub author: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub score: Option<i64>,
    #[serde(default)]
    pub descendants: Option<i64>,
}

impl RawPost {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn author(&self) -> &str {
        self.author.as_deref().unwrap_or_default()
    }

    pub fn score(&self) -> i64 {
        self.score.unwrap_or(0)
    }

    pub fn descendants(&self) -> i64 {
        self.descendants.unwrap_or(0)
    }
}
