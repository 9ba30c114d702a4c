//! Route tests for the HTTP layer.

mod common;

use axum::http::StatusCode;
use scripture_check::{
    corpus::GITA_2_47, testing::MockProvider, ProviderError, Verdict, VerdictKind,
};
use serde_json::json;

use common::TestHarness;

#[tokio::test]
async fn fact_check_returns_full_record() {
    let harness = TestHarness::offline();

    let (status, body) = harness
        .post_json("/api/fact-check", json!({"claim": "the right to work"}))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["verdict"], "Partially supported");
    assert_eq!(body["confidence"], 70);
    assert_eq!(body["mode"], "offline");
    assert_eq!(body["claim"], "the right to work");
    assert_eq!(body["language"], "en");
    assert_eq!(body["citations"][0]["reference"], "2:47");
    assert_eq!(body["citations"][0]["text"], GITA_2_47);
    assert!(body["timestamp"].is_string());
    assert!(body["next_steps"].is_array());
    assert!(body["alternative_views"].is_array());
    assert_eq!(harness.store.len(), 1);
}

#[tokio::test]
async fn fact_check_uses_provider_verdict() {
    let harness = TestHarness::with_providers(vec![
        MockProvider::failing(ProviderError::QuotaExceeded("429".into())),
        MockProvider::succeeding(Verdict::new(VerdictKind::Supported, 92, "Matches the text")),
    ]);

    let (status, body) = harness
        .post_json(
            "/api/fact-check",
            json!({"claim": "Gita 2:47 says work without attachment", "language": "hi"}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["verdict"], "Supported");
    assert_eq!(body["confidence"], 92);
    assert_eq!(body["language"], "hi");
    assert_eq!(body["claim_type"], "textual");
    assert_eq!(body["references_found"][0]["raw_match"], "Gita 2:47");
    assert!(body.get("mode").is_none());
}

#[tokio::test]
async fn blank_claim_is_bad_request() {
    let harness = TestHarness::offline();

    let (status, body) = harness
        .post_json("/api/fact-check", json!({"claim": "   "}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Claim is required");

    let (status, _) = harness.post_json("/api/fact-check", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert!(harness.store.is_empty());
}

#[tokio::test]
async fn unreadable_body_gets_json_error() {
    let harness = TestHarness::offline();

    let (status, body) = harness
        .post_raw("/api/fact-check", "application/json", "{\"claim\": ")
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!body["error"].as_str().unwrap().is_empty());

    let (status, body) = harness
        .post_raw("/api/fact-check", "text/plain", "Gita 2:47 says work matters")
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    assert!(harness.store.is_empty());
}

#[tokio::test]
async fn history_is_newest_first_and_limited() {
    let harness = TestHarness::offline();
    for claim in ["first claim", "second claim", "third claim"] {
        harness
            .post_json("/api/fact-check", json!({"claim": claim}))
            .await;
    }

    let (status, body) = harness.get("/api/history?limit=2").await;
    assert_eq!(status, StatusCode::OK);

    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["claim"], "third claim");
    assert_eq!(entries[1]["claim"], "second claim");
    assert!(entries[0]["id"].is_i64());

    let (_, body) = harness.get("/api/history").await;
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn export_returns_stored_record() {
    let harness = TestHarness::offline();
    harness
        .post_json("/api/fact-check", json!({"claim": "Blessed are the peacemakers"}))
        .await;

    let (_, history) = harness.get("/api/history?limit=1").await;
    let id = history[0]["id"].as_i64().unwrap();

    let (status, body) = harness.get(&format!("/api/export/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id);
    assert_eq!(body["claim"], "Blessed are the peacemakers");
    assert_eq!(body["citations"][0]["work"], "Bible");
}

#[tokio::test]
async fn export_missing_is_not_found() {
    let harness = TestHarness::offline();

    let (status, body) = harness.get("/api/export/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Fact check not found");
}

#[tokio::test]
async fn health_reports_mode_and_corpus() {
    let harness = TestHarness::offline();

    let (status, body) = harness.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["mode"], "offline");
    assert_eq!(body["corpus"]["verses"], 5);
    assert_eq!(body["corpus"]["retrieval"], "keyword");
    assert!(body["corpus"].get("dimension").is_none());

    let online = TestHarness::with_providers(vec![MockProvider::failing(
        ProviderError::Http("down".into()),
    )
    .named("openai")]);
    let (_, body) = online.get("/health").await;
    assert_eq!(body["mode"], "online");
    assert_eq!(body["providers"], json!(["openai"]));
}
