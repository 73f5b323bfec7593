use crate::e2e::helpers;

use helpers::{TestContext, TEST_API_KEY};
use hyper::StatusCode;
use serde_json::{json, Value};
use test_context::test_context;

fn speech_body() -> Value {
    json!({
        "model": "tts-1",
        "voice": "en",
        "input": "Hello world",
        "response_format": "wav",
        "auto_detect_language": false
    })
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_missing_credentials(ctx: &TestContext) {
    let response = ctx.client.post("/audio/speech", &speech_body()).await.unwrap();

    response.assert_status(StatusCode::UNAUTHORIZED);
    response.assert_detail("Missing Authorization header with Bearer token");
    assert!(ctx.synthesizer.calls().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_non_bearer_scheme(ctx: &TestContext) {
    let response = ctx
        .client
        .post_with_authorization(
            "/audio/speech",
            &speech_body(),
            &format!("Basic {}", TEST_API_KEY),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::UNAUTHORIZED);
    response.assert_detail("Bearer scheme");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_bearer_without_token(ctx: &TestContext) {
    let response = ctx
        .client
        .post_with_authorization("/audio/speech", &speech_body(), "Bearer")
        .await
        .unwrap();

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_forbid_wrong_api_key(ctx: &TestContext) {
    let response = ctx
        .client
        .post_with_auth("/audio/speech", &speech_body(), "not-the-key")
        .await
        .unwrap();

    response.assert_status(StatusCode::FORBIDDEN);
    response.assert_detail("Could not validate credentials");
    assert!(ctx.synthesizer.calls().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_accept_lowercase_bearer_scheme(ctx: &TestContext) {
    let response = ctx
        .client
        .post_with_authorization(
            "/audio/speech",
            &speech_body(),
            &format!("bearer {}", TEST_API_KEY),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_not_require_auth_for_public_routes(ctx: &TestContext) {
    for path in ["/health", "/docs", "/openapi.json"] {
        let response = ctx.client.get(path).await.unwrap();
        response.assert_status(StatusCode::OK);
    }
}
