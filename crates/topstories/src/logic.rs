use crate::api::{self, TextFetcher};
use crate::error::TopPostsError;
use crate::structs::RawPost;
use hn_core::ValidatedPost;

/// タイトル / 投稿者名の上限 (UTF-16 のコードユニット数)
const MAX_FIELD_UTF16_UNITS: usize = 256;

/// get_top_posts_list の成功時の結果
#[derive(Debug, Clone, PartialEq)]
pub enum TopPostsOutcome {
    Posts(Vec<ValidatedPost>),
    /// トップ一覧自体が空だった (0件の Posts とは区別する)
    NoPostsFound,
}

impl TopPostsOutcome {
    pub fn posts(&self) -> &[ValidatedPost] {
        match self {
            Self::Posts(posts) => posts,
            Self::NoPostsFound => &[],
        }
    }

    pub fn into_posts(self) -> Vec<ValidatedPost> {
        match self {
            Self::Posts(posts) => posts,
            Self::NoPostsFound => Vec::new(),
        }
    }
}

/// トップ一覧の先頭から順に投稿を取得し、妥当なものを最大 n 件集める
///
/// - 取得はすべて直列。n 件そろった時点で残りの ID は取得しない
/// - 本文が空 / `null` の投稿と、検証に通らない投稿は黙ってスキップ
/// - 個別の投稿の取得に失敗したら、それまでに集めた分も捨てて全体をエラーにする
/// - rank は ID 一覧での位置ではなく、採用した順の 1 始まりの番号
pub async fn get_top_posts_list<F: TextFetcher + ?Sized>(
    fetcher: &F,
    n: usize,
) -> Result<TopPostsOutcome, TopPostsError> {
    if n == 0 {
        return Ok(TopPostsOutcome::Posts(Vec::new()));
    }

    let ids = api::fetch_top_ids(fetcher)
        .await
        .map_err(TopPostsError::TopIds)?;

    if ids.is_empty() {
        tracing::info!("Top stories list is empty");
        return Ok(TopPostsOutcome::NoPostsFound);
    }

    let mut posts: Vec<ValidatedPost> = Vec::with_capacity(n.min(ids.len()));

    for id in ids {
        let post = match api::fetch_post_by_id(fetcher, id).await {
            Ok(Some(post)) => post,
            Ok(None) => {
                tracing::debug!("Skipping id={}: empty item", id);
                continue;
            }
            Err(source) => return Err(TopPostsError::Item { id, source }),
        };

        if !is_valid_post(&post) {
            tracing::debug!("Skipping id={}: failed validation", id);
            continue;
        }

        let rank = posts.len() + 1;
        posts.push(to_validated(post, rank));

        if posts.len() == n {
            break;
        }
    }

    tracing::info!("Collected {} of {} requested posts", posts.len(), n);

    Ok(TopPostsOutcome::Posts(posts))
}

pub fn is_valid_post(post: &RawPost) -> bool {
    is_valid_text(post.title())
        && is_valid_text(post.author())
        && post.url.as_deref().is_some_and(is_absolute_uri)
        && post.score() >= 0
        && post.descendants() >= 0
}

fn is_valid_text(text: &str) -> bool {
    !text.is_empty() && text.encode_utf16().count() <= MAX_FIELD_UTF16_UNITS
}

fn is_absolute_uri(s: &str) -> bool {
    url::Url::parse(s).is_ok()
}

fn to_validated(post: RawPost, rank: usize) -> ValidatedPost {
    let points = post.score();
    let comments = post.descendants();
    ValidatedPost {
        title: post.title.unwrap_or_default(),
        author: post.author.unwrap_or_default(),
        uri: post.url.unwrap_or_default(),
        points,
        comments,
        rank,
    }
}
