use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use axum_test::multipart::{MultipartForm, Part};
use platelens_api::application::http::server::http_server::{router, state};
use platelens_api::args::{Args, LlmArgs, ServerArgs};

fn test_args(gemini_api_key: &str) -> Args {
    Args {
        server: ServerArgs {
            host: "127.0.0.1".to_string(),
            port: 0,
            root_path: "".to_string(),
            allowed_origins: vec!["http://localhost:3000".to_string()],
            log_json: false,
        },
        llm: LlmArgs {
            gemini_api_key: gemini_api_key.to_string(),
            gemini_model: "gemini-2.5-pro".to_string(),
        },
    }
}

fn test_server() -> TestServer {
    let state = state(Arc::new(test_args("test-key"))).unwrap();
    TestServer::new(router(state).unwrap()).unwrap()
}

#[tokio::test]
async fn the_page_is_served_at_the_root() {
    let server = test_server();

    let response = server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("Platelens"));
}

#[tokio::test]
async fn health_reports_ok() {
    let server = test_server();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn public_config_exposes_the_model_handle() {
    let server = test_server();

    let body: serde_json::Value = server.get("/config").await.json();

    assert_eq!(body["model"], "gemini-2.5-pro");
    assert_eq!(body["max_image_bytes"], 10 * 1024 * 1024);
}

#[tokio::test]
async fn a_missing_credential_halts_startup() {
    let err = state(Arc::new(test_args(""))).unwrap_err();

    assert!(err.to_string().contains("no model credential is configured"));
}

#[tokio::test]
async fn the_session_starts_idle() {
    let server = test_server();

    let body: serde_json::Value = server.get("/analysis/state").await.json();

    assert_eq!(body["phase"], "idle");
}

#[tokio::test]
async fn a_submission_without_an_image_is_rejected() {
    let server = test_server();

    let response = server
        .post("/analysis/image")
        .multipart(MultipartForm::new().add_text("note", "no image here"))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(response.text().contains("Missing image field"));
}

#[tokio::test]
async fn an_undecodable_upload_is_reported_inline_and_frees_the_session() {
    let server = test_server();

    let form = MultipartForm::new().add_part(
        "upload",
        Part::bytes(b"definitely not an image".as_slice())
            .file_name("dinner.png")
            .mime_type("image/png"),
    );

    let response = server.post("/analysis/image").multipart(form).await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.text().contains("could not decode image"));

    // The failed attempt must not wedge the session.
    let body: serde_json::Value = server.get("/analysis/state").await.json();
    assert_eq!(body["phase"], "idle");
}
