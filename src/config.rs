use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

const DEFAULT_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Upstream credentials and endpoint, loaded once at startup and injected
/// into the client; nothing reads the environment after this.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub api_url: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Reads `GEMINI_API_KEY` (required) plus optional `GEMINI_API_URL` and
    /// `GEMINI_TIMEOUT_SECS` overrides.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("GEMINI_API_KEY").context("GEMINI_API_KEY is not set")?;
        let api_url =
            env::var("GEMINI_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let timeout = env::var("GEMINI_TIMEOUT_SECS")
            .ok()
            .and_then(|secs| secs.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        Ok(Self {
            api_key,
            api_url,
            timeout,
        })
    }
}
