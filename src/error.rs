use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use topstories::TopPostsError;
use tracing::error;

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Upstream(TopPostsError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Upstream(err) => {
                // 段階と ID はメッセージに含まれているのでそのまま返す
                error!(item_id = ?err.item_id(), "Upstream error: {}", err);
                (StatusCode::BAD_GATEWAY, err.to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<TopPostsError> for AppError {
    fn from(err: TopPostsError) -> Self {
        AppError::Upstream(err)
    }
}
