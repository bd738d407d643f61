use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;
use crate::session::SessionRegistry;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Generative-text backend. Production: `LlmClient`. Tests swap in a scripted one.
    pub llm: Arc<dyn TextGenerator>,
    pub sessions: SessionRegistry,
    pub config: Config,
}

impl AppState {
    pub fn new(llm: Arc<dyn TextGenerator>, config: Config) -> Self {
        Self {
            llm,
            sessions: SessionRegistry::new(),
            config,
        }
    }
}
