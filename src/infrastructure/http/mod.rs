use axum::{
    http::{header::HeaderName, Method},
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::controllers::{docs, health, speech::SpeechController};
use crate::domain::auth::ApiKeyGate;
use crate::infrastructure::auth::{auth_middleware, request_id_middleware};
use crate::infrastructure::config::Config;

/// Build the application router
pub fn create_app(gate: Arc<ApiKeyGate>, speech_controller: Arc<SpeechController>) -> Router {
    // Speech routes (need auth)
    let speech_routes = Router::new()
        .route("/audio/speech", post(SpeechController::create_speech))
        .with_state(speech_controller)
        .layer(middleware::from_fn_with_state(gate, auth_middleware));

    // Public routes
    let public_routes = Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .route("/docs", get(docs::docs))
        .route("/openapi.json", get(docs::openapi));

    Router::new()
        .merge(public_routes)
        .merge(speech_routes)
        .layer(cors_layer())
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Any origin may call the API with credentials; only POST and preflight are allowed
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_credentials(true)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request())
        .expose_headers([HeaderName::from_static("x-request-id")])
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
