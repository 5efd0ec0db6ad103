//! Exercises `GeminiService` against a mock Gemini endpoint.

use anyhow::Result;
use httpmock::prelude::*;
use menu_extractor::{CompletionClient, Config, GeminiService, MenuError};
use serde_json::json;
use std::time::{Duration, Instant};

const MODEL: &str = "gemini-test";
const GENERATE_PATH: &str = "/models/gemini-test:generateContent";

fn config_for(server: &MockServer, json_mode: bool) -> Config {
    let base = server.base_url();
    Config::from_lookup(|key| match key {
        "GOOGLE_API_KEY" => Some("test-key".to_string()),
        "GEMINI_API_BASE" => Some(base.clone()),
        "GEMINI_MODEL" => Some(MODEL.to_string()),
        "COMPLETION_TIMEOUT_SECS" => Some("5".to_string()),
        "GEMINI_JSON_MODE" => Some(json_mode.to_string()),
        _ => None,
    })
    .expect("test config is valid")
}

fn candidate(text: &str) -> serde_json::Value {
    json!({
        "candidates": [
            { "content": { "parts": [ { "text": text } ], "role": "model" } }
        ]
    })
}

#[tokio::test]
async fn returns_first_candidate_text() -> Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(GENERATE_PATH)
                .query_param("key", "test-key")
                .body_contains("Today is Monday");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(candidate("```json\n{\"Date\": \"Monday\"}\n```"));
        })
        .await;

    let service = GeminiService::new(&config_for(&server, false))?;
    let text = service.complete("Today is Monday.").await?;

    mock.assert_async().await;
    assert_eq!(text, "```json\n{\"Date\": \"Monday\"}\n```");
    Ok(())
}

#[tokio::test]
async fn json_mode_sets_response_mime_type() -> Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(GENERATE_PATH)
                .body_contains("\"response_mime_type\":\"application/json\"");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(candidate("{\"Date\": \"Monday\"}"));
        })
        .await;

    let service = GeminiService::new(&config_for(&server, true))?;
    service.complete("prompt").await?;

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn error_status_is_reported_with_body() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(GENERATE_PATH);
            then.status(403).body("API key not valid");
        })
        .await;

    let service = GeminiService::new(&config_for(&server, false))?;
    let err = service.complete("prompt").await.unwrap_err();

    match err {
        MenuError::CompletionApi { status, body } => {
            assert_eq!(status, 403);
            assert!(body.contains("API key not valid"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn no_candidates_is_an_empty_completion() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(GENERATE_PATH);
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({ "candidates": [] }));
        })
        .await;

    let service = GeminiService::new(&config_for(&server, false))?;
    let err = service.complete("prompt").await.unwrap_err();

    assert_eq!(err.kind(), "empty_completion");
    Ok(())
}

#[tokio::test]
async fn non_json_body_fails_deserialization() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(GENERATE_PATH);
            then.status(200).body("<html>gateway</html>");
        })
        .await;

    let service = GeminiService::new(&config_for(&server, false))?;
    let err = service.complete("prompt").await.unwrap_err();

    assert_eq!(err.kind(), "completion_deserialization");
    Ok(())
}

#[tokio::test]
async fn split_parts_are_joined_in_order() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(GENERATE_PATH);
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "candidates": [{
                        "content": {
                            "parts": [
                                { "text": "{\"Date\": \"Monday\", " },
                                { "text": "\"Lunch\": \"Soup\"}" }
                            ]
                        }
                    }]
                }));
        })
        .await;

    let service = GeminiService::new(&config_for(&server, false))?;
    let text = service.complete("prompt").await?;

    assert_eq!(text, "{\"Date\": \"Monday\", \"Lunch\": \"Soup\"}");
    Ok(())
}

#[tokio::test]
async fn slow_provider_hits_the_request_timeout() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(GENERATE_PATH);
            then.status(200)
                .header("content-type", "application/json")
                .delay(Duration::from_secs(3))
                .json_body(candidate("{}"));
        })
        .await;

    let base = server.base_url();
    let config = Config::from_lookup(|key| match key {
        "GOOGLE_API_KEY" => Some("test-key".to_string()),
        "GEMINI_API_BASE" => Some(base.clone()),
        "GEMINI_MODEL" => Some(MODEL.to_string()),
        "COMPLETION_TIMEOUT_SECS" => Some("1".to_string()),
        _ => None,
    })?;

    let service = GeminiService::new(&config)?;
    let started = Instant::now();
    let err = service.complete("prompt").await.unwrap_err();

    assert_eq!(err.kind(), "completion_request");
    assert!(started.elapsed() < Duration::from_secs(3));
    Ok(())
}
