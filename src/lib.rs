//! Hevy Coach - AI coaching feedback for Hevy workouts
//!
//! This library fetches recent workouts from the Hevy API, condenses them into
//! summaries, and asks a chat model for a personalized analysis that the user
//! can follow up on.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `hevy`: Workout record types and the Hevy API client
//! - `summary`: Per-workout summaries (date, duration, exercise lines)
//! - `prompts`: Persona, verbosity, and analysis prompt construction
//! - `providers`: Chat provider abstraction and implementations (OpenAI, Ollama)
//! - `session`: Analysis and follow-up conversation state
//! - `config`: Configuration management and validation
//! - `error`: Error types and result aliases
//! - `cli`: Command-line interface definition
//!
//! # Example
//!
//! ```no_run
//! use hevy_coach::hevy::HevyClient;
//! use hevy_coach::providers::create_provider;
//! use hevy_coach::session::{AnalysisRequest, CoachSession};
//! use hevy_coach::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config/config.yaml", &Default::default())?;
//!     config.validate()?;
//!
//!     let source = HevyClient::new(config.hevy.clone())?;
//!     let provider = create_provider(&config.provider.provider_type, &config.provider)?;
//!     let request = AnalysisRequest {
//!         api_key: config.hevy_api_key()?.to_string(),
//!         count: config.hevy.workout_count,
//!         persona: config.coach.persona.clone(),
//!         verbosity: config.coach.verbosity,
//!     };
//!
//!     let mut session = CoachSession::new();
//!     let analysis = session
//!         .fetch_and_analyze(&source, provider.as_ref(), &request)
//!         .await?;
//!     println!("{}", analysis);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod hevy;
pub mod prompts;
pub mod providers;
pub mod session;
pub mod summary;

// Re-export commonly used types
pub use config::Config;
pub use error::{CoachError, Result};
pub use hevy::{HevyClient, WorkoutRecord, WorkoutSource};
pub use prompts::{build_prompt, Persona, Verbosity};
pub use session::{AnalysisRequest, CoachSession, Reply};
pub use summary::{summarize, WorkoutSummary};

#[cfg(test)]
pub mod test_utils;
