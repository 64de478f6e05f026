//! Provider module for Hevy Coach
//!
//! This module contains the chat provider abstraction and implementations
//! for OpenAI-compatible APIs and Ollama.

pub mod base;
pub mod ollama;
pub mod openai;

pub use base::{CompletionResponse, Message, Provider, TokenUsage};
pub use ollama::OllamaProvider;
pub use openai::OpenAiProvider;

use crate::config::ProviderConfig;
use crate::error::{CoachError, Result};

/// Provider type names accepted in configuration
pub const PROVIDER_TYPES: [&str; 2] = ["openai", "ollama"];

/// Create a provider instance based on configuration
///
/// # Arguments
///
/// * `provider_type` - Type of provider ("openai" or "ollama")
/// * `config` - Provider configuration
///
/// # Errors
///
/// Returns error if provider type is invalid or initialization fails
pub fn create_provider(provider_type: &str, config: &ProviderConfig) -> Result<Box<dyn Provider>> {
    create_provider_with_override(config, Some(provider_type), None)
}

/// Create a provider instance with optional provider and model overrides
///
/// # Arguments
///
/// * `config` - Full provider configuration
/// * `provider_override` - Optional provider type override
/// * `model_override` - Optional model name override
///
/// # Errors
///
/// Returns error if the provider type is unknown or initialization fails
///
/// # Examples
///
/// ```
/// use hevy_coach::config::ProviderConfig;
/// use hevy_coach::providers::create_provider_with_override;
///
/// # fn example() -> hevy_coach::error::Result<()> {
/// let config = ProviderConfig::default();
/// let provider = create_provider_with_override(&config, Some("ollama"), Some("gemma2:2b"))?;
/// assert_eq!(provider.model_name(), "gemma2:2b");
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
pub fn create_provider_with_override(
    config: &ProviderConfig,
    provider_override: Option<&str>,
    model_override: Option<&str>,
) -> Result<Box<dyn Provider>> {
    let provider_type = provider_override.unwrap_or(&config.provider_type);

    match provider_type {
        "openai" => {
            let mut openai_config = config.openai.clone();
            if let Some(model) = model_override {
                openai_config.model = model.to_string();
            }
            Ok(Box::new(OpenAiProvider::new(openai_config)?))
        }
        "ollama" => {
            let mut ollama_config = config.ollama.clone();
            if let Some(model) = model_override {
                ollama_config.model = model.to_string();
            }
            Ok(Box::new(OllamaProvider::new(ollama_config)?))
        }
        _ => Err(CoachError::Provider(format!("Unknown provider type: {}", provider_type)).into()),
    }
}
