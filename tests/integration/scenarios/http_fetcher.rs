use crate::helpers::mock_server::MockServer;
use topstories::api::HttpTextFetcher;
use topstories::TextFetcher;

/// 観点: 200 の本文がそのまま返るか
#[tokio::test]
async fn test_fetch_text_returns_body() {
    let server = MockServer::start().await;
    let fetcher = HttpTextFetcher::new(reqwest::Client::new());

    let body = fetcher
        .fetch_text(&server.url("/v0/topstories.json"))
        .await
        .unwrap();

    assert_eq!(body, "[1, 2, 3, 4]");
}

/// 観点: 2xx 以外のステータスはエラーとして扱われるか
#[tokio::test]
async fn test_fetch_text_non_success_status_is_error() {
    let server = MockServer::start().await;
    let fetcher = HttpTextFetcher::new(reqwest::Client::new());

    let err = fetcher
        .fetch_text(&server.url("/v0/item/500.json"))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("500"), "error was: {:#}", err);
}
