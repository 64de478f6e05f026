//! OpenAI-compatible chat completions provider
//!
//! Talks to `POST {api_base}/chat/completions` with bearer authentication.
//! Works with the OpenAI API and any server exposing the same endpoint.

use crate::config::OpenAiConfig;
use crate::error::{CoachError, Result};
use crate::providers::{CompletionResponse, Message, Provider, TokenUsage};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// OpenAI chat completions provider
///
/// # Examples
///
/// ```no_run
/// use hevy_coach::config::OpenAiConfig;
/// use hevy_coach::providers::{Message, OpenAiProvider, Provider};
///
/// # async fn example() -> hevy_coach::error::Result<()> {
/// let config = OpenAiConfig {
///     api_key: Some("sk-...".to_string()),
///     ..Default::default()
/// };
/// let provider = OpenAiProvider::new(config)?;
/// let completion = provider.complete(&[Message::user("Hello!")]).await?;
/// println!("{}", completion.message.content);
/// # Ok(())
/// # }
/// ```
pub struct OpenAiProvider {
    client: Client,
    config: OpenAiConfig,
    api_key: String,
}

/// Request body for /chat/completions
#[derive(Debug, Serialize)]
struct OpenAiRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
}

/// Response body from /chat/completions
#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
    #[serde(default)]
    usage: Option<OpenAiUsage>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAiMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiUsage {
    #[serde(default)]
    prompt_tokens: usize,
    #[serde(default)]
    completion_tokens: usize,
}

impl OpenAiProvider {
    /// Create a new OpenAI provider
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::MissingCredentials`] if no API key is configured,
    /// or an error if HTTP client initialization fails
    pub fn new(config: OpenAiConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| CoachError::MissingCredentials("openai".to_string()))?;

        let client = Client::builder()
            .user_agent(concat!("hevy-coach/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CoachError::Provider(format!("Failed to create HTTP client: {}", e)))?;

        tracing::info!(
            "Initialized OpenAI provider: api_base={}, model={}",
            config.api_base,
            config.model
        );

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.api_base.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl Provider for OpenAiProvider {
    async fn complete(&self, messages: &[Message]) -> Result<CompletionResponse> {
        let request = OpenAiRequest {
            model: &self.config.model,
            messages,
        };

        tracing::debug!(
            "Sending OpenAI request: model={}, {} messages",
            self.config.model,
            messages.len()
        );

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("OpenAI request failed: {}", e);
                CoachError::Provider(format!("OpenAI request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("OpenAI returned error {}: {}", status, error_text);
            return Err(CoachError::Provider(format!(
                "OpenAI returned error {}: {}",
                status, error_text
            ))
            .into());
        }

        let body: OpenAiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse OpenAI response: {}", e);
            CoachError::Provider(format!("Failed to parse OpenAI response: {}", e))
        })?;

        let content = body
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| CoachError::Provider("OpenAI response contained no choices".into()))?
            .message
            .content
            .unwrap_or_default();

        let message = Message::assistant(content);
        let response = match body.usage {
            Some(usage) => CompletionResponse::with_usage(
                message,
                TokenUsage::new(usage.prompt_tokens, usage.completion_tokens),
            ),
            None => CompletionResponse::new(message),
        };

        if let Some(usage) = response.usage {
            tracing::debug!(
                "OpenAI usage: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens,
                usage.completion_tokens
            );
        }

        Ok(response)
    }

    fn model_name(&self) -> String {
        self.config.model.clone()
    }
}
