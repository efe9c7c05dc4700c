use thiserror::Error;

/// 1回の取得で起きうる失敗
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport error: {0:#}")]
    Transport(anyhow::Error),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// get_top_posts_list 全体を中断させるエラー
///
/// どの段階で失敗したか (トップ一覧 / 個別の投稿) を区別して返す
#[derive(Debug, Error)]
pub enum TopPostsError {
    #[error("failed to fetch top story ids: {0}")]
    TopIds(#[source] FetchError),
    #[error("failed to fetch post with id={id}: {source}")]
    Item {
        id: i64,
        #[source]
        source: FetchError,
    },
}

impl TopPostsError {
    /// 失敗した投稿の ID (トップ一覧で失敗した場合は None)
    pub fn item_id(&self) -> Option<i64> {
        match self {
            Self::TopIds(_) => None,
            Self::Item { id, .. } => Some(*id),
        }
    }
}
