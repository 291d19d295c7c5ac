use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything in here is immutable and shared; requests never write to it.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Pluggable generation capability. Default: `LlmClient` (OpenAI).
    pub llm: Arc<dyn TextGenerator>,
}
