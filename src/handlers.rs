use crate::error::AppError;
use crate::state::{SharedState, TopStoriesQuery};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Json,
};
use hn_core::{ResponseStatus, TopPostsResponse, DEFAULT_POST_COUNT, MAX_POST_COUNT};
use topstories::TopPostsOutcome;

pub async fn root() -> &'static str {
    "Hacker News top stories, validated and ranked. GET /topstories?n=10"
}

pub async fn health() -> &'static str {
    "OK"
}

pub async fn get_top_stories(
    State(state): State<SharedState>,
    query: Result<Query<TopStoriesQuery>, QueryRejection>,
) -> Result<Json<TopPostsResponse>, AppError> {
    let Query(params) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let requested = params.n.unwrap_or(DEFAULT_POST_COUNT as i64);
    let n = hn_core::requested_count(requested, MAX_POST_COUNT);
    tracing::info!("Received top stories request (n={}, using {})", requested, n);

    let outcome = topstories::get_top_posts_list(state.fetcher.as_ref(), n).await?;

    let status = match &outcome {
        TopPostsOutcome::Posts(_) => ResponseStatus::Ok,
        TopPostsOutcome::NoPostsFound => ResponseStatus::NoPostsFound,
    };
    let response = TopPostsResponse {
        status,
        posts: outcome.into_posts(),
    };

    Ok(Json(response))
}
