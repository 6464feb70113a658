//! Integration tests for the `usersort` binary.
//!
//! Each test runs the compiled binary against a local wiremock server and
//! checks the exit status and the stdout/stderr split.

use std::path::Path;
use std::process::Output;

use tokio::process::Command;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use usersort::orchestrator::showcase_views;

const PAGE: &str = r#"[
    {"login":"Zed","id":9,"type":"User"},
    {"login":"amy","id":2},
    {"login":"Bob","id":5,"type":"Organization"}
]"#;

/// Run the binary isolated from the caller's config files and environment.
async fn run_usersort(home: &Path, args: &[&str]) -> Output {
    run_usersort_with_env(home, &[], args).await
}

async fn run_usersort_with_env(home: &Path, vars: &[(&str, &str)], args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_usersort"));
    cmd.args(args)
        .current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("USERSORT_BASE_URL")
        .env_remove("USERSORT_PER_PAGE")
        .env_remove("USERSORT_LIMIT")
        .env_remove("USERSORT_TIMEOUT_SECS")
        .env_remove("USERSORT_LOG")
        .envs(vars.iter().copied());
    cmd.output().await.unwrap()
}

// ---------------------------------------------------------------------------
// showcase
// ---------------------------------------------------------------------------

#[tokio::test]
async fn showcase_succeeds_and_prints_every_view() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("per_page", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(PAGE, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    let output = run_usersort(home.path(), &["--base-url", &server.uri()]).await;
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert_eq!(output.status.code(), Some(0), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("3 users loaded!"));
    for view in showcase_views() {
        assert!(stdout.contains(view.title), "missing heading {}", view.title);
    }
    assert!(stdout.contains("AVAILABLE METHODS:"));
    assert!(output.stderr.is_empty());
}

#[tokio::test]
async fn sort_json_prints_only_the_listing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(PAGE, "application/json"))
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    let output = run_usersort(
        home.path(),
        &["--base-url", &server.uri(), "sort", "id", "--desc", "--format", "json"],
    )
    .await;

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["total"], 3);
    assert_eq!(parsed["users"][0]["login"], "Zed");
    assert_eq!(parsed["users"][2]["login"], "amy");
}

// ---------------------------------------------------------------------------
// failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn rate_limited_fetch_exits_non_zero_with_error_on_stderr() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_string(r#"{"message":"API rate limit exceeded"}"#),
        )
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    let output = run_usersort(home.path(), &["--base-url", &server.uri()]).await;
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.starts_with("Error:"), "got: {stderr}");
    assert!(stderr.contains("403"), "got: {stderr}");
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Total:"));
}

#[tokio::test]
async fn malformed_payload_exits_non_zero() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(r#"{"users":[]}"#, "application/json"))
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    let output = run_usersort(home.path(), &["--base-url", &server.uri()]).await;
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.starts_with("Error:"), "got: {stderr}");
    assert!(stderr.contains("unexpected response payload"), "got: {stderr}");
}

#[tokio::test]
async fn zero_per_page_is_rejected_by_argument_parsing() {
    let home = tempfile::tempdir().unwrap();
    let output = run_usersort(home.path(), &["--per-page", "0"]).await;
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert!(!output.status.success());
    assert!(stderr.contains("--per-page"), "got: {stderr}");
    assert!(output.stdout.is_empty());
}

#[tokio::test]
async fn invalid_env_value_is_warned_about_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("per_page", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(PAGE, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    let output = run_usersort_with_env(
        home.path(),
        &[("USERSORT_PER_PAGE", "lots")],
        &["--base-url", &server.uri()],
    )
    .await;
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert!(output.status.success(), "stderr: {stderr}");
    assert_eq!(stderr.matches("USERSORT_PER_PAGE").count(), 1, "got: {stderr}");
}

#[tokio::test]
async fn broken_local_config_exits_non_zero() {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(home.path().join(".usersort.toml"), "not valid {{ toml").unwrap();

    let output = run_usersort(home.path(), &[]).await;
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.starts_with("Error: failed to load configuration"), "got: {stderr}");
}
