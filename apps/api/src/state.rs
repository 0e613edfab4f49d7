use crate::config::Config;
use crate::engine::extractor::SkillExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The extractor wraps the process-wide `Arc<SkillVocabulary>`, built once at
/// startup and never mutated.
#[derive(Clone)]
pub struct AppState {
    pub extractor: SkillExtractor,
    /// Runtime settings; read during startup, kept for handlers that need them.
    #[allow(dead_code)]
    pub config: Config,
}
