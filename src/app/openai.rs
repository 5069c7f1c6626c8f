use std::future::Future;
use std::pin::Pin;

use llm::vendor::openai::{compat, Client};

use super::CompletionBackend;
use crate::config::Config;

const TEMPERATURE: f32 = 0.4;
const MAX_TOKENS: i32 = 2800;

/// Production backend: one chat completion per analysis, low temperature for
/// consistent structure, output bound sized for a multi-section analysis.
pub struct OpenAi {
    client: Client,
    model: String,
}

impl OpenAi {
    pub fn from_config(config: &Config) -> Result<Self, anyhow::Error> {
        Ok(Self {
            client: Client::new(config.api_base(), config.api_key(), config.timeout())?,
            model: config.model().to_string(),
        })
    }

    async fn completion(&self, system: String, user: String) -> Result<String, anyhow::Error> {
        let req = compat::RequestBuilder::default()
            .messages(compat::Chat::start_new(system, user))
            .model(self.model.clone())
            .temperature(TEMPERATURE)
            .max_tokens(MAX_TOKENS)
            .build()?;

        let response = self.client.completion(&req).await?;
        let content = response
            .content()
            .ok_or_else(|| anyhow::anyhow!("completion response contained no choices"))?;

        Ok(content.to_string())
    }
}

impl CompletionBackend for OpenAi {
    fn complete(
        &self,
        system: String,
        user: String,
    ) -> Pin<Box<dyn Future<Output = Result<String, anyhow::Error>> + Send + '_>> {
        Box::pin(self.completion(system, user))
    }
}
