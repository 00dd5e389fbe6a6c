use std::sync::Arc;

use crate::config::Config;
use crate::extraction::extractor::ProfileExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Built once at startup around the name recognizer (and lexicon, when
    /// configured); read-only afterwards.
    pub extractor: Arc<ProfileExtractor>,
}
