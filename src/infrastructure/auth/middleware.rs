use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::{domain::auth::ApiKeyGate, error::AppError};

/// Bearer authentication middleware.
/// On success the token is added to the request extensions as `BearerToken`.
pub async fn auth_middleware(
    State(gate): State<Arc<ApiKeyGate>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let authorization = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    let token = gate.authenticate(authorization)?;

    request.extensions_mut().insert(token);

    Ok(next.run(request).await)
}
