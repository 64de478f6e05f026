//! Error types for Hevy Coach
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Message shown whenever no workouts could be obtained, regardless of cause
pub const NO_WORKOUT_DATA_MESSAGE: &str =
    "No workout data received. Please check your Hevy API key or your recent workouts.";

/// Main error type for Hevy Coach operations
///
/// Covers configuration loading, workout fetching, summary building,
/// chat provider interactions, and the interactive session.
#[derive(Error, Debug)]
pub enum CoachError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Hevy API errors (connection, status, response parsing)
    #[error("Hevy API error: {0}")]
    Hevy(String),

    /// Fetch produced nothing usable (failure or empty list)
    #[error("{}", NO_WORKOUT_DATA_MESSAGE)]
    NoWorkoutData,

    /// A workout timestamp was missing or not ISO-8601
    #[error("Invalid timestamp for {field}: {value}")]
    InvalidTimestamp {
        /// Which record field failed (start_time, end_time)
        field: &'static str,
        /// The offending raw value
        value: String,
    },

    /// Chat provider errors (API calls, response parsing)
    #[error("Provider error: {0}")]
    Provider(String),

    /// Missing credentials for a service
    #[error("Missing credentials for {0}")]
    MissingCredentials(String),

    /// Follow-up question submitted before any analysis exists
    #[error("No analysis available yet. Run an analysis before asking follow-up questions")]
    NoAnalysis,

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Line editor errors in interactive chat
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

/// Result type alias for Hevy Coach operations
///
/// Uses `anyhow::Error` so callers can attach context while still being able
/// to downcast to [`CoachError`].
pub type Result<T> = anyhow::Result<T>;
