//! Raw Hevy workout records
//!
//! These types mirror the JSON returned by `GET /v1/workouts`. Every field the
//! coach reads is optional so that sparse records still deserialize; fields the
//! coach does not read are kept in `extra` so the raw record can be shown
//! verbatim.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Title used when a workout has none
pub const DEFAULT_WORKOUT_TITLE: &str = "Untitled Workout";

/// Title used when an exercise has none
pub const DEFAULT_EXERCISE_TITLE: &str = "Unnamed Exercise";

/// Placeholder for a missing reps or weight value
pub const MISSING_VALUE: &str = "?";

/// One page of the workouts listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkoutsPage {
    /// Workouts on this page, newest first
    #[serde(default)]
    pub workouts: Vec<WorkoutRecord>,
}

/// A single workout as returned by the Hevy API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default)]
    pub exercises: Vec<ExerciseRecord>,
    /// Fields not interpreted by the coach (id, description, timestamps, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WorkoutRecord {
    /// Workout title, or [`DEFAULT_WORKOUT_TITLE`]
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_WORKOUT_TITLE)
    }
}

/// An exercise within a workout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExerciseRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub sets: Vec<SetRecord>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ExerciseRecord {
    /// Exercise title, or [`DEFAULT_EXERCISE_TITLE`]
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_EXERCISE_TITLE)
    }
}

/// A single set of an exercise
///
/// `reps` and `weight_kg` stay as JSON values: Hevy sends integers, floats or
/// `null` (bodyweight and timed sets), and the coach prints them as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SetRecord {
    /// Reps as display text, or [`MISSING_VALUE`]
    pub fn reps_text(&self) -> String {
        value_text(self.reps.as_ref())
    }

    /// Weight in kilograms as display text, or [`MISSING_VALUE`]
    pub fn weight_text(&self) -> String {
        value_text(self.weight_kg.as_ref())
    }
}

fn value_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => MISSING_VALUE.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
