mod config;
mod engine;
mod errors;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::engine::extractor::SkillExtractor;
use crate::engine::vocabulary::SkillVocabulary;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting HireLens API v{}", env!("CARGO_PKG_VERSION"));

    // Load the skill vocabulary once; it is immutable for the process lifetime.
    let vocabulary = match &config.vocabulary_path {
        Some(path) => SkillVocabulary::from_file(path)?,
        None => SkillVocabulary::builtin(),
    };
    info!(
        "Skill vocabulary loaded ({} canonical skills, {} synonyms)",
        vocabulary.skill_count(),
        vocabulary.synonym_count()
    );

    let extractor = SkillExtractor::new(Arc::new(vocabulary));

    let state = AppState {
        extractor,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
