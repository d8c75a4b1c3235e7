use anyhow::Context;

/// Sent as the system instruction when `SYSTEM_PROMPT` is not configured.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant.";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";
const DEFAULT_MAX_TOKENS: u32 = 1024;
const DEFAULT_TIMEOUT_SECS: u64 = 600;

/// Process-wide configuration, read from the environment exactly once at
/// startup and passed by reference from then on.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub host: String,
    pub port: u16,
    /// Required unless running in echo mode.
    pub api_key: Option<String>,
    pub system_prompt: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: Option<f32>,
    /// Echo mode answers every POST with a canned payload and never
    /// contacts the completion service. Used for connectivity testing.
    pub echo: bool,
    /// Outbound client timeout in seconds.
    pub timeout: u64,
}

impl RelayConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let max_tokens = match std::env::var("RELAY_MAX_TOKENS") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("invalid RELAY_MAX_TOKENS: {raw}"))?,
            Err(_) => DEFAULT_MAX_TOKENS,
        };
        let temperature = match std::env::var("RELAY_TEMPERATURE") {
            Ok(raw) => Some(
                raw.parse()
                    .with_context(|| format!("invalid RELAY_TEMPERATURE: {raw}"))?,
            ),
            Err(_) => None,
        };
        let timeout = match std::env::var("RELAY_TIMEOUT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("invalid RELAY_TIMEOUT: {raw}"))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            api_key: std::env::var("ANTHROPIC_API_KEY").ok(),
            system_prompt: std::env::var("SYSTEM_PROMPT")
                .unwrap_or_else(|_| DEFAULT_SYSTEM_PROMPT.to_string()),
            model: std::env::var("RELAY_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            max_tokens,
            temperature,
            echo: std::env::var("RELAY_ECHO").is_ok_and(|v| v == "1" || v == "true"),
            timeout,
        })
    }
}
