use std::process::{Command, Output};

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Run the CLI binary against `server` and wait for it to exit.
async fn run_cli(server: &MockServer) -> Output {
    let url = server.uri();
    tokio::task::spawn_blocking(move || {
        Command::new(env!("CARGO_BIN_EXE_category-smoke"))
            .env("CATEGORY_API_URL", url)
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run category-smoke")
    })
    .await
    .expect("command thread panicked")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[tokio::test]
async fn rejected_login_exits_with_one() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_string(r#"{"error":"Identifiants invalides"}"#),
        )
        .mount(&server)
        .await;

    let output = run_cli(&server).await;
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout.matches("❌ Login failed: 401").count(), 1);
    assert!(stdout.contains(r#"{"error":"Identifiants invalides"}"#));
    assert!(!stdout.contains("Creating test category"));
    assert!(!stderr_of(&output).contains("Error:"));
}

#[tokio::test]
async fn login_without_token_exits_with_one() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "email": "admin@digikoder.local",
            "role": "superadmin"
        })))
        .mount(&server)
        .await;

    let output = run_cli(&server).await;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("no string `token` field"));
    assert!(!stdout_of(&output).contains("Creating test category"));
}

#[tokio::test]
async fn conflicting_create_still_exits_with_zero() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "abc123" })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/categories"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({ "error": "exists" })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "test", "label": "Test Catégorie", "icon": "Filter" }
        ])))
        .mount(&server)
        .await;

    let output = run_cli(&server).await;
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("Response status: 409"));
    assert!(stdout.contains("✅ Category 'test' found in list"));
}
