use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde_json::json;

/// GET / - send browsers to the API documentation
pub async fn root() -> Redirect {
    Redirect::temporary("/docs")
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "api_status": "ok" })))
}
