use crate::helpers::mock_server::MockServer;
use async_trait::async_trait;
use topstories::api::HttpTextFetcher;
use topstories::{get_top_posts_list, FetchError, TextFetcher, TopPostsError, TopPostsOutcome};

const UPSTREAM_BASE: &str = "https://hacker-news.firebaseio.com";

/// 本番の URL をモックサーバーへ向け直すフェッチャー
struct RedirectingFetcher {
    inner: HttpTextFetcher,
    base_url: String,
}

#[async_trait]
impl TextFetcher for RedirectingFetcher {
    async fn fetch_text(&self, url: &str) -> anyhow::Result<String> {
        let redirected = url.replacen(UPSTREAM_BASE, &self.base_url, 1);
        self.inner.fetch_text(&redirected).await
    }
}

fn fetcher_for(server: &MockServer) -> RedirectingFetcher {
    RedirectingFetcher {
        inner: HttpTextFetcher::new(reqwest::Client::new()),
        base_url: server.base_url(),
    }
}

/// 観点: 実際の HTTP 越しに、null と不正な投稿を飛ばして rank を振り直せるか
#[tokio::test]
async fn test_pipeline_over_http() {
    let server = MockServer::start().await;
    let fetcher = fetcher_for(&server);

    let outcome = get_top_posts_list(&fetcher, 5).await.unwrap();

    let posts = match outcome {
        TopPostsOutcome::Posts(posts) => posts,
        TopPostsOutcome::NoPostsFound => panic!("expected posts"),
    };
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].title, "Mock story 2");
    assert_eq!(posts[0].author, "mock2");
    assert_eq!(posts[0].uri, "https://mock.example/2");
    assert_eq!(posts[0].points, 99);
    assert_eq!(posts[0].comments, 12);
    assert_eq!(posts[0].rank, 1);
    assert_eq!(posts[1].title, "Mock story 3");
    assert_eq!(posts[1].rank, 2);
}

/// 観点: 採用済みの投稿があっても、途中の 500 で全体が Item エラーになるか
#[tokio::test]
async fn test_item_server_error_aborts_pipeline() {
    let server = MockServer::start_with_top_ids("[2, 500, 3]").await;
    let fetcher = fetcher_for(&server);

    let err = get_top_posts_list(&fetcher, 3).await.unwrap_err();

    assert!(matches!(
        err,
        TopPostsError::Item {
            id: 500,
            source: FetchError::Transport(_)
        }
    ));
    assert_eq!(err.item_id(), Some(500));
    assert!(err.to_string().starts_with("failed to fetch post with id=500"));
}

/// 観点: JSON ではない本文は Parse の Item エラーになり、部分的な結果は返らないか
#[tokio::test]
async fn test_malformed_item_aborts_pipeline() {
    let server = MockServer::start_with_top_ids("[1, 2, 13, 3]").await;
    let fetcher = fetcher_for(&server);

    let result = get_top_posts_list(&fetcher, 3).await;

    match result {
        Err(TopPostsError::Item {
            id: 13,
            source: FetchError::Parse(_),
        }) => {}
        other => panic!("expected Item parse error for id=13, got {:?}", other),
    }
}
