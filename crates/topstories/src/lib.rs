pub mod api;
pub mod error;
pub mod logic;
pub mod structs;

use crate::api::HttpTextFetcher;
use reqwest::Client;

pub use api::TextFetcher;
pub use error::{FetchError, TopPostsError};
pub use logic::{get_top_posts_list, TopPostsOutcome};

/// reqwest のクライアントでトップ n 件を取得する
pub async fn get_top_posts(client: &Client, n: usize) -> Result<TopPostsOutcome, TopPostsError> {
    let fetcher = HttpTextFetcher::new(client.clone());
    logic::get_top_posts_list(&fetcher, n).await
}
