use std::time::Duration;

use llm::vendor::openai::OPENAI_CHAT_API;

const DEFAULT_MODEL: &str = "gpt-4";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Provider configuration, read from the environment once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    api_base: String,
    api_key: String,
    model: String,
    timeout: Duration,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("invalid {0}: {1}")]
    Invalid(&'static str, std::num::ParseIntError),
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        let api_key = require("OPENAI_API_KEY")?;
        let api_base =
            std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| OPENAI_CHAT_API.to_string());
        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let timeout = match std::env::var("OPENAI_TIMEOUT_SECS") {
            Ok(secs) => Duration::from_secs(
                secs.parse()
                    .map_err(|e| Error::Invalid("OPENAI_TIMEOUT_SECS", e))?,
            ),
            Err(_) => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            api_base,
            api_key,
            model,
            timeout,
        })
    }

    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

fn require(key: &'static str) -> Result<String, Error> {
    std::env::var(key).map_err(|_| Error::Missing(key))
}
