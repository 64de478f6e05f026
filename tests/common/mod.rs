use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Two-workout `/v1/workouts` response body
#[allow(dead_code)]
pub const WORKOUTS_BODY: &str = r#"{
  "page": 1,
  "page_count": 4,
  "workouts": [
    {
      "id": "b459cba5-cd6d-463c-abd6-54f8eafcadcb",
      "title": "Leg Day",
      "start_time": "2024-01-01T10:00:00Z",
      "end_time": "2024-01-01T11:05:00Z",
      "exercises": [
        {
          "title": "Squat",
          "sets": [
            {"reps": 5, "weight_kg": 100},
            {"reps": 5, "weight_kg": 110}
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
            {"reps": 6, "weight_kg": 85}
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

#[allow(dead_code)]
pub fn temp_config_file(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("failed to create tempdir");
    let config_path = temp_dir.path().join("config.yaml");
    fs::write(&config_path, contents).expect("failed to write config file");
    (temp_dir, config_path)
}

/// Serve `body` for every workouts request
#[allow(dead_code)]
pub async fn mount_workouts(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/v1/workouts"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(server)
        .await;
}

/// Serve one Ollama chat reply for every chat request
#[allow(dead_code)]
pub async fn mount_ollama_reply(server: &MockServer, content: &str) {
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "model": "llama3.2:latest",
            "message": {"role": "assistant", "content": content},
            "done": true,
            "prompt_eval_count": 120,
            "eval_count": 40
        })))
        .mount(server)
        .await;
}
