// src/api.rs
//! HTTP surface consumed by the dashboard: highlight endpoints plus a small
//! diagnostics route for the loaded lexicon.

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::CorsLayer;

use crate::highlight::{Highlighter, Segment};
use crate::lexicon::Lexicon;
use crate::render;

#[derive(Clone)]
pub struct AppState {
    pub highlighter: Arc<Highlighter>,
    pub lexicon: Arc<Lexicon>,
}

impl AppState {
    pub fn new(lexicon: Lexicon) -> anyhow::Result<Self> {
        let highlighter = Highlighter::new(&lexicon)?;
        Ok(Self {
            highlighter: Arc::new(highlighter),
            lexicon: Arc::new(lexicon),
        })
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/highlight", post(highlight_one))
        .route("/highlight/batch", post(highlight_batch))
        .route("/debug/lexicon", get(debug_lexicon))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(serde::Deserialize)]
struct HighlightReq {
    // Null or missing text behaves as empty input.
    #[serde(default)]
    text: Option<String>,
}

#[derive(serde::Serialize)]
struct HighlightResp {
    segments: Vec<Segment>,
    html: String,
}

async fn highlight_one(
    State(state): State<AppState>,
    Json(body): Json<HighlightReq>,
) -> Json<HighlightResp> {
    let segments = state.highlighter.highlight_opt(body.text.as_deref());
    let html = render::to_html(&segments);
    Json(HighlightResp { segments, html })
}

#[derive(serde::Deserialize)]
struct ReviewItem {
    #[serde(default)]
    id: Option<i64>,
    content: String,
}

#[derive(serde::Serialize)]
struct HighlightedReview {
    id: Option<i64>,
    segments: Vec<Segment>,
}

async fn highlight_batch(
    State(state): State<AppState>,
    Json(items): Json<Vec<ReviewItem>>,
) -> Json<Vec<HighlightedReview>> {
    let out = items
        .into_iter()
        .map(|it| HighlightedReview {
            id: it.id,
            segments: state.highlighter.highlight(&it.content),
        })
        .collect::<Vec<_>>();
    Json(out)
}

#[derive(serde::Serialize)]
struct LexiconInfo {
    positive_phrases: usize,
    negative_phrases: usize,
}

async fn debug_lexicon(State(state): State<AppState>) -> Json<LexiconInfo> {
    Json(LexiconInfo {
        positive_phrases: state.lexicon.positive.len(),
        negative_phrases: state.lexicon.negative.len(),
    })
}
