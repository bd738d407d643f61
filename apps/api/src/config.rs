use thiserror::Error;

/// Default chat-completion endpoint (Perplexity, OpenAI-compatible wire format).
pub const DEFAULT_LLM_API_URL: &str = "https://api.perplexity.ai/chat/completions";
pub const DEFAULT_LLM_MODEL: &str = "sonar-pro";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Required credential '{0}' is not set")]
    MissingCredential(&'static str),

    #[error("Environment variable '{key}' is invalid: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Application configuration loaded from environment variables.
/// Startup fails fast if the generative-text credential is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub llm_api_key: String,
    pub llm_api_url: String,
    pub llm_model: String,
    pub port: u16,
    pub rust_log: String,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. `from_env` passes the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let llm_api_key = lookup("PERPLEXITY_API_KEY")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingCredential("PERPLEXITY_API_KEY"))?;

        Ok(Config {
            llm_api_key,
            llm_api_url: lookup("LLM_API_URL").unwrap_or_else(|| DEFAULT_LLM_API_URL.to_string()),
            llm_model: lookup("LLM_MODEL").unwrap_or_else(|| DEFAULT_LLM_MODEL.to_string()),
            port: parse_or("PORT", lookup("PORT"), 8080)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            max_upload_bytes: parse_or(
                "MAX_UPLOAD_BYTES",
                lookup("MAX_UPLOAD_BYTES"),
                DEFAULT_MAX_UPLOAD_BYTES,
            )?,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
