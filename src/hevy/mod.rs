//! Hevy workout API access
//!
//! Raw record types and the HTTP client that fetches them.

pub mod client;
pub mod types;

pub use client::HevyClient;
pub use types::{ExerciseRecord, SetRecord, WorkoutRecord, WorkoutsPage};

use crate::error::Result;
use async_trait::async_trait;

/// Source of recent workout records
///
/// Implemented by [`HevyClient`]; the session only depends on this trait.
#[async_trait]
pub trait WorkoutSource: Send + Sync {
    /// Return up to `count` of the most recent workouts, newest first
    ///
    /// # Errors
    ///
    /// Returns error if the workouts could not be obtained
    async fn fetch(&self, api_key: &str, count: u32) -> Result<Vec<WorkoutRecord>>;
}
