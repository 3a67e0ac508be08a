use std::sync::Arc;

use crate::config::Config;
use crate::improvement::PromptBuilder;
use crate::llm_client::CompletionGateway;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only: nothing here changes between requests.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable completion backend. Production: GeminiClient.
    pub gateway: Arc<dyn CompletionGateway>,
    /// Default prompt builder; requests may pick another template variant.
    pub prompts: PromptBuilder,
    pub config: Config,
}
