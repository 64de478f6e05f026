//! Test utilities for Hevy Coach
//!
//! Workout fixtures, a scripted chat provider, and an in-memory workout
//! source.

use crate::error::{CoachError, Result};
use crate::hevy::{WorkoutRecord, WorkoutSource};
use crate::providers::{CompletionResponse, Message, Provider};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Sample `/v1/workouts` response body with two workouts
pub const SAMPLE_WORKOUTS_JSON: &str = r#"{
  "page": 1,
  "page_count": 12,
  "workouts": [
    {
      "id": "b459cba5-cd6d-463c-abd6-54f8eafcadcb",
      "title": "Leg Day",
      "start_time": "2024-01-01T10:00:00Z",
      "end_time": "2024-01-01T11:05:00Z",
      "exercises": [
        {
          "index": 0,
          "title": "Squat",
          "sets": [
            {"index": 0, "type": "normal", "reps": 5, "weight_kg": 100},
            {"index": 1, "type": "normal", "reps": 5, "weight_kg": 110}
          ]
        }
      ]
    },
    {
      "id": "6f3a2c10-21a4-4d5e-9c7b-0e1f2a3b4c5d",
      "title": "Upper",
      "start_time": "2023-12-30T18:15:00+01:00",
      "end_time": "2023-12-30T19:02:18+01:00",
      "exercises": [
        {
          "title": "Bench Press (Barbell)",
          "sets": [
            {"reps": 8, "weight_kg": 80.5},
            {"reps": 8, "weight_kg": 80.5},
            {"reps": 6, "weight_kg": 85},
            {"reps": 5, "weight_kg": 85}
          ]
        },
        {
          "title": "Pull Up",
          "sets": [{"reps": 10, "weight_kg": null}]
        }
      ]
    }
  ]
}"#;

/// Build a workout record from its parts
///
/// # Panics
///
/// Panics if `exercises` is not a valid exercise array
pub fn workout_record(
    title: &str,
    start_time: &str,
    end_time: &str,
    exercises: serde_json::Value,
) -> WorkoutRecord {
    serde_json::from_value(serde_json::json!({
        "title": title,
        "start_time": start_time,
        "end_time": end_time,
        "exercises": exercises,
    }))
    .expect("Failed to build workout record")
}

/// "Leg Day" on 2024-01-01, 65 minutes, two squat sets
pub fn leg_day() -> WorkoutRecord {
    workout_record(
        "Leg Day",
        "2024-01-01T10:00:00Z",
        "2024-01-01T11:05:00Z",
        serde_json::json!([{
            "title": "Squat",
            "sets": [
                {"reps": 5, "weight_kg": 100},
                {"reps": 5, "weight_kg": 110}
            ]
        }]),
    )
}

/// Workouts from [`SAMPLE_WORKOUTS_JSON`]
///
/// # Panics
///
/// Panics if the sample does not parse
pub fn sample_workouts() -> Vec<WorkoutRecord> {
    serde_json::from_str::<crate::hevy::WorkoutsPage>(SAMPLE_WORKOUTS_JSON)
        .expect("Failed to parse sample workouts")
        .workouts
}

/// Provider that answers from a fixed script and records every request
///
/// Fails with a provider error once the script runs out.
pub struct ScriptedProvider {
    replies: Mutex<VecDeque<String>>,
    requests: Mutex<Vec<Vec<Message>>>,
}

impl ScriptedProvider {
    /// Create a provider that returns `replies` in order
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: Mutex::new(replies.into_iter().map(Into::into).collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Every transcript passed to `complete`, oldest call first
    pub fn requests(&self) -> Vec<Vec<Message>> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Provider for ScriptedProvider {
    async fn complete(&self, messages: &[Message]) -> Result<CompletionResponse> {
        self.requests.lock().unwrap().push(messages.to_vec());
        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(content) => Ok(CompletionResponse::new(Message::assistant(content))),
            None => Err(CoachError::Provider("script exhausted".to_string()).into()),
        }
    }

    fn model_name(&self) -> String {
        "scripted".to_string()
    }
}

/// Workout source backed by a fixed list
pub struct StaticSource {
    workouts: Vec<WorkoutRecord>,
    failure: Option<String>,
    last_count: Mutex<Option<u32>>,
}

impl StaticSource {
    /// Source that returns at most `count` of `workouts`
    pub fn new(workouts: Vec<WorkoutRecord>) -> Self {
        Self {
            workouts,
            failure: None,
            last_count: Mutex::new(None),
        }
    }

    /// Source whose every fetch fails with `message`
    pub fn failing(message: &str) -> Self {
        Self {
            workouts: Vec::new(),
            failure: Some(message.to_string()),
            last_count: Mutex::new(None),
        }
    }

    /// Count passed to the most recent fetch
    pub fn last_count(&self) -> Option<u32> {
        *self.last_count.lock().unwrap()
    }
}

#[async_trait]
impl WorkoutSource for StaticSource {
    async fn fetch(&self, _api_key: &str, count: u32) -> Result<Vec<WorkoutRecord>> {
        *self.last_count.lock().unwrap() = Some(count);
        if let Some(message) = &self.failure {
            return Err(CoachError::Hevy(message.clone()).into());
        }
        Ok(self.workouts.iter().take(count as usize).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_workouts_parse() {
        let workouts = sample_workouts();
        assert_eq!(workouts.len(), 2);
        assert_eq!(workouts[0], leg_day_with_sample_extras(&workouts[0]));
    }

    fn leg_day_with_sample_extras(sample: &WorkoutRecord) -> WorkoutRecord {
        let mut expected = leg_day();
        expected.extra = sample.extra.clone();
        for (exercise, sample_exercise) in expected.exercises.iter_mut().zip(&sample.exercises) {
            exercise.extra = sample_exercise.extra.clone();
            for (set, sample_set) in exercise.sets.iter_mut().zip(&sample_exercise.sets) {
                set.extra = sample_set.extra.clone();
            }
        }
        expected
    }

    #[tokio::test]
    async fn test_scripted_provider_replays_in_order() {
        let provider = ScriptedProvider::new(["one", "two"]);
        let first = provider.complete(&[Message::user("a")]).await.unwrap();
        let second = provider.complete(&[Message::user("b")]).await.unwrap();
        assert_eq!(first.message.content, "one");
        assert_eq!(second.message.content, "two");
        assert!(provider.complete(&[]).await.is_err());
        assert_eq!(provider.requests().len(), 3);
    }

    #[tokio::test]
    async fn test_static_source_limits_count() {
        let source = StaticSource::new(sample_workouts());
        let workouts = source.fetch("key", 1).await.unwrap();
        assert_eq!(workouts.len(), 1);
        assert_eq!(source.last_count(), Some(1));
    }
}
