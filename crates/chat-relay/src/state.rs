use anthropic_api::Anthropic;

use crate::config::RelayConfig;

/// Per-process relay state shared across workers. The completion-service
/// client is injected at construction so tests can point it at a stub.
#[derive(Debug, Clone)]
pub struct RelayState {
    pub client: Anthropic,
    pub system_prompt: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: Option<f32>,
    pub echo: bool,
}

impl RelayState {
    pub fn new(config: &RelayConfig, client: Anthropic) -> Self {
        Self {
            client,
            system_prompt: config.system_prompt.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            echo: config.echo,
        }
    }
}
