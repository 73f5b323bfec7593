use crate::e2e::helpers;

use helpers::TestContext;
use hyper::{Method, StatusCode};
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_ok_for_health_check(ctx: &TestContext) {
    let response = ctx.client.get("/health").await.unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body.get("api_status").and_then(|v| v.as_str()), Some("ok"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_redirect_root_to_docs(ctx: &TestContext) {
    let response = ctx.client.get("/").await.unwrap();

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    response.assert_header("location", "/docs");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_serve_docs_without_auth(ctx: &TestContext) {
    let response = ctx.client.get("/docs").await.unwrap();
    response.assert_status(StatusCode::OK);
    let page = String::from_utf8(response.body_bytes.clone()).unwrap();
    assert!(page.contains("/openapi.json"));

    let response = ctx.client.get("/openapi.json").await.unwrap();
    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert!(body["paths"]["/audio/speech"]["post"].is_object());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_include_request_id_in_health_responses(ctx: &TestContext) {
    let response = ctx.client.get("/health").await.unwrap();
    response.assert_header_exists("x-request-id");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_echo_incoming_request_id(ctx: &TestContext) {
    let response = ctx
        .client
        .request(Method::GET, "/health", None, &[("x-request-id", "trace-me-123")])
        .await
        .unwrap();

    response.assert_header("x-request-id", "trace-me-123");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_handle_concurrent_health_checks(ctx: &TestContext) {
    let mut futures = Vec::new();
    for _ in 0..10 {
        let client = ctx.client.clone();
        futures.push(async move { client.get("/health").await });
    }

    let results = futures::future::join_all(futures).await;

    for result in results {
        let response = result.unwrap();
        response.assert_status(StatusCode::OK);
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_answer_cors_preflight_for_speech(ctx: &TestContext) {
    let response = ctx
        .client
        .request(
            Method::OPTIONS,
            "/audio/speech",
            None,
            &[
                ("Origin", "https://app.example.com"),
                ("Access-Control-Request-Method", "POST"),
                ("Access-Control-Request-Headers", "authorization,content-type"),
            ],
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    response.assert_header("access-control-allow-origin", "https://app.example.com");
    response.assert_header("access-control-allow-credentials", "true");
    let methods = response.header("access-control-allow-methods").unwrap();
    assert!(methods.contains("POST"), "allowed methods: {}", methods);
}
