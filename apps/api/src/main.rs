mod config;
mod errors;
mod extraction;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extraction::extractor::ProfileExtractor;
use crate::extraction::names::{HeuristicNameRecognizer, Lexicon, WordListLexicon};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Intake API v{}", env!("CARGO_PKG_VERSION"));

    let extractor = Arc::new(build_extractor(&config)?);
    info!(
        "Profile extractor initialized (max upload {} bytes, timeout {}s)",
        config.max_upload_bytes, config.request_timeout_secs
    );

    let state = AppState {
        config: config.clone(),
        extractor,
    };

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(config.request_timeout()))
            .layer(CorsLayer::permissive()), // TODO: restrict origins to the intake dashboard host
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the name recognizer, backed by the word list when `LEXICON_PATH`
/// is set. A configured but unreadable word list fails startup.
fn build_extractor(config: &Config) -> Result<ProfileExtractor> {
    let recognizer = match &config.lexicon_path {
        Some(path) => {
            let lexicon: Arc<dyn Lexicon> = Arc::new(
                WordListLexicon::load(path)
                    .with_context(|| format!("Failed to load lexicon from {}", path.display()))?,
            );
            HeuristicNameRecognizer::with_lexicon(lexicon)
        }
        None => {
            info!("LEXICON_PATH not set; name detection runs without a lexicon");
            HeuristicNameRecognizer::new()
        }
    };

    Ok(ProfileExtractor::new(Arc::new(recognizer)))
}
