// tests/api_http.rs
//
// HTTP-level tests for the public API Router without opening sockets.
// We exercise the router directly via tower::ServiceExt::oneshot.
//
// Covered:
// - GET /health
// - POST /highlight (text, null text)
// - POST /highlight/batch
// - GET /debug/lexicon

use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value as Json};
use tower::ServiceExt as _; // for `oneshot`

use review_sentiment_highlighter::{api, Lexicon};

const BODY_LIMIT: usize = 1024 * 1024; // 1MB, safe for tests

/// Build the same Router the binary uses, over the built-in lexicon.
fn test_router() -> Router {
    let state = api::AppState::new(Lexicon::builtin().clone()).expect("lexicon compiles");
    api::create_router(state)
}

async fn json_body(resp: axum::response::Response) -> Json {
    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .expect("read body")
        .to_vec();
    serde_json::from_slice(&bytes).expect("parse json body")
}

#[tokio::test]
async fn health_returns_200_and_ok_body() {
    let app = test_router();

    let req = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .expect("build GET /health");

    let resp = app.oneshot(req).await.expect("oneshot /health");
    assert_eq!(resp.status(), StatusCode::OK, "health should be 200");

    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .expect("read body")
        .to_vec();
    let text = String::from_utf8(bytes).expect("utf8");
    assert_eq!(text.trim(), "ok");
}

#[tokio::test]
async fn highlight_returns_labeled_segments_and_html() {
    let app = test_router();

    let payload = json!({ "text": "재질은 좋아요 근데 배송은 별로였어요" });
    let req = Request::builder()
        .method("POST")
        .uri("/highlight")
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .expect("build POST /highlight");

    let resp = app.oneshot(req).await.expect("oneshot /highlight");
    assert!(resp.status().is_success(), "got {}", resp.status());

    let v = json_body(resp).await;
    let segments = v["segments"].as_array().expect("segments array");

    let joined: String = segments
        .iter()
        .map(|s| s["text"].as_str().expect("text"))
        .collect();
    assert_eq!(joined, "재질은 좋아요 근데 배송은 별로였어요");

    let labels: Vec<&str> = segments
        .iter()
        .map(|s| s["label"].as_str().expect("label"))
        .collect();
    assert!(labels.contains(&"positive"));
    assert!(labels.contains(&"negative"));

    let html = v["html"].as_str().expect("html string");
    assert!(html.contains("<mark"), "highlights should be marked: {html}");
}

#[tokio::test]
async fn highlight_with_null_text_returns_no_segments() {
    let app = test_router();

    let req = Request::builder()
        .method("POST")
        .uri("/highlight")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "text": null }).to_string()))
        .expect("build POST /highlight");

    let resp = app.oneshot(req).await.expect("oneshot /highlight");
    assert!(resp.status().is_success());

    let v = json_body(resp).await;
    assert_eq!(v["segments"].as_array().map(|a| a.len()), Some(0));
    assert_eq!(v["html"].as_str(), Some(""));
}

#[tokio::test]
async fn batch_highlights_each_review_in_order() {
    let app = test_router();

    let payload = json!([
        { "id": 1, "content": "핏도 예쁘고 너무 만족" },
        { "id": 2, "content": "배송 지연에 포장 엉망" },
        { "content": "키워드 없는 리뷰" }
    ]);
    let req = Request::builder()
        .method("POST")
        .uri("/highlight/batch")
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .expect("build POST /highlight/batch");

    let resp = app.oneshot(req).await.expect("oneshot batch");
    assert!(resp.status().is_success());

    let v = json_body(resp).await;
    let rows = v.as_array().expect("array response");
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["id"].as_i64(), Some(1));
    assert_eq!(rows[2]["id"], Json::Null);

    let labels_of = |row: &Json| -> Vec<String> {
        row["segments"]
            .as_array()
            .expect("segments")
            .iter()
            .map(|s| s["label"].as_str().expect("label").to_string())
            .collect()
    };
    assert!(labels_of(&rows[0]).iter().any(|l| l == "positive"));
    assert!(labels_of(&rows[1]).iter().any(|l| l == "negative"));
    assert!(labels_of(&rows[2]).iter().all(|l| l == "none"));
}

#[tokio::test]
async fn debug_lexicon_reports_phrase_counts() {
    let app = test_router();

    let req = Request::builder()
        .method("GET")
        .uri("/debug/lexicon")
        .body(Body::empty())
        .expect("build GET /debug/lexicon");

    let resp = app.oneshot(req).await.expect("oneshot /debug/lexicon");
    assert_eq!(resp.status(), StatusCode::OK);

    let v = json_body(resp).await;
    assert!(v["positive_phrases"].as_u64().unwrap_or(0) > 100);
    assert!(v["negative_phrases"].as_u64().unwrap_or(0) > 100);
}
