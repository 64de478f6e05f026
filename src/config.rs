//! Configuration management for Hevy Coach
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files, environment variables, and CLI overrides.

use crate::error::{CoachError, Result};
use crate::prompts::{Persona, Verbosity};
use crate::providers::PROVIDER_TYPES;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Smallest number of workouts that may be requested
pub const MIN_WORKOUT_COUNT: u32 = 1;

/// Largest number of workouts that may be requested
pub const MAX_WORKOUT_COUNT: u32 = 20;

/// Main configuration structure for Hevy Coach
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Hevy workout API settings
    #[serde(default)]
    pub hevy: HevyConfig,
    /// Chat provider settings
    #[serde(default)]
    pub provider: ProviderConfig,
    /// Coaching style defaults
    #[serde(default)]
    pub coach: CoachConfig,
}

/// Hevy workout API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HevyConfig {
    /// Base URL of the Hevy API
    #[serde(default = "default_hevy_api_base")]
    pub api_base: String,

    /// API key sent in the `api-key` header
    #[serde(default)]
    pub api_key: Option<String>,

    /// Number of recent workouts to analyze (1-20)
    #[serde(default = "default_workout_count")]
    pub workout_count: u32,
}

fn default_hevy_api_base() -> String {
    "https://api.hevyapp.com".to_string()
}

fn default_workout_count() -> u32 {
    5
}

impl Default for HevyConfig {
    fn default() -> Self {
        Self {
            api_base: default_hevy_api_base(),
            api_key: None,
            workout_count: default_workout_count(),
        }
    }
}

/// Provider configuration
///
/// Specifies which chat provider to use and its settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Type of provider to use
    #[serde(rename = "type", default = "default_provider_type")]
    pub provider_type: String,

    /// OpenAI-compatible provider configuration
    #[serde(default)]
    pub openai: OpenAiConfig,

    /// Ollama configuration
    #[serde(default)]
    pub ollama: OllamaConfig,
}

fn default_provider_type() -> String {
    "openai".to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            provider_type: default_provider_type(),
            openai: OpenAiConfig::default(),
            ollama: OllamaConfig::default(),
        }
    }
}

/// OpenAI-compatible provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    /// API base URL, `/chat/completions` is appended
    #[serde(default = "default_openai_api_base")]
    pub api_base: String,

    /// Bearer token for the API
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model to use
    #[serde(default = "default_openai_model")]
    pub model: String,
}

fn default_openai_api_base() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_openai_model() -> String {
    "gpt-4.1-nano".to_string()
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_base: default_openai_api_base(),
            api_key: None,
            model: default_openai_model(),
        }
    }
}

/// Ollama provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaConfig {
    /// Ollama server host
    #[serde(default = "default_ollama_host")]
    pub host: String,

    /// Model to use for Ollama
    #[serde(default = "default_ollama_model")]
    pub model: String,
}

fn default_ollama_host() -> String {
    "http://localhost:11434".to_string()
}

fn default_ollama_model() -> String {
    "llama3.2:latest".to_string()
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            host: default_ollama_host(),
            model: default_ollama_model(),
        }
    }
}

/// Coaching style defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoachConfig {
    /// Coach persona
    #[serde(default)]
    pub persona: Persona,

    /// Answer verbosity
    #[serde(default)]
    pub verbosity: Verbosity,
}

impl Config {
    /// Load configuration from file with environment and CLI overrides
    ///
    /// # Arguments
    ///
    /// * `path` - Path to configuration file
    /// * `cli` - CLI arguments for overrides
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed
    pub fn load(path: &str, cli: &crate::cli::Cli) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            tracing::warn!("Config file not found at {}, using defaults", path);
            Self::default()
        };

        config.apply_env_vars();
        config.apply_cli_overrides(cli);

        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| CoachError::Config(format!("Failed to read config file: {}", e)))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| CoachError::Config(format!("Failed to parse config: {}", e)).into())
    }

    fn apply_env_vars(&mut self) {
        // Hevy overrides
        if let Ok(api_key) = std::env::var("HEVY_API_KEY") {
            self.hevy.api_key = Some(api_key);
        }

        if let Ok(api_base) = std::env::var("HEVY_COACH_HEVY_API_BASE") {
            self.hevy.api_base = api_base;
        }

        if let Ok(count) = std::env::var("HEVY_COACH_WORKOUT_COUNT") {
            if let Ok(value) = count.parse() {
                self.hevy.workout_count = value;
            } else {
                tracing::warn!("Invalid HEVY_COACH_WORKOUT_COUNT: {}", count);
            }
        }

        // Provider overrides
        if let Ok(provider_type) = std::env::var("HEVY_COACH_PROVIDER") {
            self.provider.provider_type = provider_type;
        }

        if let Ok(api_key) = std::env::var("OPENAI_API_KEY") {
            self.provider.openai.api_key = Some(api_key);
        }

        if let Ok(api_base) = std::env::var("HEVY_COACH_OPENAI_API_BASE") {
            self.provider.openai.api_base = api_base;
        }

        if let Ok(model) = std::env::var("HEVY_COACH_OPENAI_MODEL") {
            self.provider.openai.model = model;
        }

        if let Ok(host) = std::env::var("HEVY_COACH_OLLAMA_HOST") {
            self.provider.ollama.host = host;
        }

        if let Ok(model) = std::env::var("HEVY_COACH_OLLAMA_MODEL") {
            self.provider.ollama.model = model;
        }

        // Coach overrides
        if let Ok(persona) = std::env::var("HEVY_COACH_PERSONA") {
            self.coach.persona = Persona::from_name(&persona);
        }

        if let Ok(verbosity) = std::env::var("HEVY_COACH_VERBOSITY") {
            self.coach.verbosity = Verbosity::from_name(&verbosity);
        }
    }

    fn apply_cli_overrides(&mut self, cli: &crate::cli::Cli) {
        if cli.verbose {
            tracing::debug!("Verbose mode enabled");
        }

        let args = cli.command.coach_args();

        if let Some(count) = args.count {
            self.hevy.workout_count = count;
        }
        if let Some(key) = &args.hevy_api_key {
            self.hevy.api_key = Some(key.clone());
        }
        if let Some(persona) = &args.persona {
            self.coach.persona = Persona::from_name(persona);
        }
        if let Some(verbosity) = &args.verbosity {
            self.coach.verbosity = Verbosity::from_name(verbosity);
        }
        if let Some(provider) = &args.provider {
            self.provider.provider_type = provider.clone();
        }
        if let Some(model) = &args.model {
            match self.provider.provider_type.as_str() {
                "ollama" => self.provider.ollama.model = model.clone(),
                _ => self.provider.openai.model = model.clone(),
            }
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns error if any validation check fails
    pub fn validate(&self) -> Result<()> {
        if self.provider.provider_type.is_empty() {
            return Err(CoachError::Config("Provider type cannot be empty".to_string()).into());
        }

        if !PROVIDER_TYPES.contains(&self.provider.provider_type.as_str()) {
            return Err(CoachError::Config(format!(
                "Invalid provider type: {}. Must be one of: {}",
                self.provider.provider_type,
                PROVIDER_TYPES.join(", ")
            ))
            .into());
        }

        if !(MIN_WORKOUT_COUNT..=MAX_WORKOUT_COUNT).contains(&self.hevy.workout_count) {
            return Err(CoachError::Config(format!(
                "hevy.workout_count must be between {} and {}, got {}",
                MIN_WORKOUT_COUNT, MAX_WORKOUT_COUNT, self.hevy.workout_count
            ))
            .into());
        }

        if self.hevy.api_base.trim().is_empty() {
            return Err(CoachError::Config("hevy.api_base cannot be empty".to_string()).into());
        }

        if self.provider.openai.api_base.trim().is_empty() {
            return Err(
                CoachError::Config("provider.openai.api_base cannot be empty".to_string()).into(),
            );
        }

        if self.provider.ollama.host.trim().is_empty() {
            return Err(
                CoachError::Config("provider.ollama.host cannot be empty".to_string()).into(),
            );
        }

        if self.provider.openai.model.trim().is_empty() {
            return Err(
                CoachError::Config("provider.openai.model cannot be empty".to_string()).into(),
            );
        }

        if self.provider.ollama.model.trim().is_empty() {
            return Err(
                CoachError::Config("provider.ollama.model cannot be empty".to_string()).into(),
            );
        }

        Ok(())
    }

    /// Hevy API key, if one is configured
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::MissingCredentials`] if no non-blank key is set
    pub fn hevy_api_key(&self) -> Result<&str> {
        self.hevy
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| CoachError::MissingCredentials("hevy".to_string()).into())
    }
}
