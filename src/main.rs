//! Review Sentiment Highlighter — Binary Entrypoint
//! Boots the Axum HTTP server, wiring the compiled highlighter into routes.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use review_sentiment_highlighter::api::{create_router, AppState};
use review_sentiment_highlighter::lexicon::Lexicon;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("review_sentiment_highlighter=info,warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op in prod environments. This enables
    // HIGHLIGHT_CONFIG_PATH / PORT from .env before anything reads them.
    let _ = dotenvy::dotenv();

    init_tracing();

    let lexicon = Lexicon::load()?;
    tracing::info!(
        positive = lexicon.positive.len(),
        negative = lexicon.negative.len(),
        "lexicon ready"
    );

    let state = AppState::new(lexicon)?;
    let router = create_router(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port, "listening");
    axum::serve(listener, router).await?;
    Ok(())
}
