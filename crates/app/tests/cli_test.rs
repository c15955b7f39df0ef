//! End-to-end tests for the `restcase` binary
//!
//! Each test pipes a test case document into the compiled binary and
//! checks its exit status and standard output.
#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::io::Write;
use std::process::{Command, Output, Stdio};

use chrono::DateTime;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use common::{case_json, spawn_server};

/// Runs the binary with `input` on stdin.
fn run_restcase(input: String, timeout_ms: Option<&str>) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_restcase"));
    command
        .env_remove("RESTCASE_TIMEOUT_MS")
        .env("NO_COLOR", "1")
        .env("RESTCASE_LOG", "debug")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(timeout_ms) = timeout_ms {
        command.env("RESTCASE_TIMEOUT_MS", timeout_ms);
    }

    let mut child = command.spawn().expect("Failed to spawn restcase");
    // The binary may exit before reading stdin (e.g. bad settings)
    let mut stdin = child.stdin.take().expect("stdin should be piped");
    let _ = stdin.write_all(input.as_bytes());
    drop(stdin);
    child.wait_with_output().expect("Failed to wait for restcase")
}

async fn run_async(input: String, timeout_ms: Option<&'static str>) -> Output {
    tokio::task::spawn_blocking(move || run_restcase(input, timeout_ms))
        .await
        .expect("runner task panicked")
}

#[tokio::test(flavor = "multi_thread")]
async fn test_scenario_output() {
    let addr = spawn_server().await;
    let url = format!("http://{addr}/ok");
    let input = json!({
        "test_info": {"id": "t1"},
        "request": {"verb": "GET", "url": url},
        "expect": {"http_code": 200}
    });

    let output = run_async(input.to_string(), None).await;

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("\"pass_fail\": \"pass\""));
    assert!(stdout.ends_with("}\n"));

    let value: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["test_info"]["id"], "t1");
    assert_eq!(
        value["request"],
        json!({"verb": "GET", "url": url, "payload": {"headers": null, "body": ""}})
    );
    assert_eq!(
        value["actual"],
        json!({"http_code": 0, "latency_ms": 0, "headers": null, "body": ""})
    );
    assert!(DateTime::parse_from_rfc3339(value["timestamp"].as_str().unwrap()).is_ok());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_test_info_and_expect_round_trip() {
    let addr = spawn_server().await;
    let input = case_json("GET", &format!("http://{addr}/ok"));

    let output = run_async(input.to_string(), None).await;

    assert!(output.status.success());
    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["test_info"], input["test_info"]);
    assert_eq!(value["expect"], input["expect"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_non_json_body_exits_non_zero() {
    let addr = spawn_server().await;
    let input = case_json("GET", &format!("http://{addr}/text"));

    let output = run_async(input.to_string(), None).await;

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not valid JSON"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_timeout_exits_non_zero() {
    let addr = spawn_server().await;
    let input = case_json("GET", &format!("http://{addr}/slow"));

    let output = run_async(input.to_string(), Some("200")).await;

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("timed out"));
}

#[test]
fn test_truncated_input_exits_non_zero() {
    let output = run_restcase(r#"{"test_info":{"id":"t1""#.to_string(), None);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error parsing test case input"));
    assert!(stderr.contains(r#"{"test_info":{"id":"t1""#));
}

#[test]
fn test_non_json_input_exits_non_zero() {
    let output = run_restcase("not json at all".to_string(), None);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_malformed_url_exits_non_zero() {
    let input = case_json("GET", "example.test/ok");

    let output = run_restcase(input.to_string(), None);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid URL"));
}

#[test]
fn test_invalid_timeout_setting_exits_non_zero() {
    let input = case_json("GET", "http://127.0.0.1:9/ok");

    let output = run_restcase(input.to_string(), Some("0"));

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("RESTCASE_TIMEOUT_MS"));
}
