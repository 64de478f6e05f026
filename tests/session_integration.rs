//! End-to-end coaching session tests against mock Hevy and Ollama servers

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use hevy_coach::config::{HevyConfig, OllamaConfig};
use hevy_coach::error::NO_WORKOUT_DATA_MESSAGE;
use hevy_coach::hevy::HevyClient;
use hevy_coach::providers::{Message, OllamaProvider};
use hevy_coach::{AnalysisRequest, CoachError, CoachSession, Persona, Reply, Verbosity};

mod common;

fn hevy_for(server: &MockServer) -> HevyClient {
    HevyClient::new(HevyConfig {
        api_base: server.uri(),
        ..HevyConfig::default()
    })
    .unwrap()
}

fn ollama_for(server: &MockServer) -> OllamaProvider {
    OllamaProvider::new(OllamaConfig {
        host: server.uri(),
        model: "llama3.2:latest".to_string(),
    })
    .unwrap()
}

fn request(persona: Persona, verbosity: Verbosity) -> AnalysisRequest {
    AnalysisRequest {
        api_key: "hevy-key".to_string(),
        count: 2,
        persona,
        verbosity,
    }
}

fn ollama_reply(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "message": {"role": "assistant", "content": content},
        "done": true
    }))
}

#[tokio::test]
async fn test_analysis_prompt_reaches_provider() {
    let server = MockServer::start().await;
    common::mount_workouts(&server, common::WORKOUTS_BODY).await;

    let expected_prompt = "You are an experienced personal trainer with a strength focus. \
        Highlight strength gains, progressive overload, and powerlifting principles. \
        Keep the feedback very brief (2-3 sentences). \
        Here are the user's last 2 workouts: \
        'Leg Day' on 2024-01-01: Squat (2 sets); \
        'Upper' on 2023-12-30: Bench Press (Barbell) (2 sets), Pull Up (1 sets). \
        Give a motivating, clear analysis of the user's recent training, noting strengths \
        and suggesting one actionable improvement for the next week. Focus on overall trends, \
        and end with a suggested future workout plan. ";

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_partial_json(json!({
            "messages": [{"role": "user", "content": expected_prompt}]
        })))
        .respond_with(ollama_reply("Heavy and consistent."))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = CoachSession::new();
    let analysis = session
        .fetch_and_analyze(
            &hevy_for(&server),
            &ollama_for(&server),
            &request(Persona::Strength, Verbosity::Short),
        )
        .await
        .unwrap()
        .to_string();

    assert_eq!(analysis, "Heavy and consistent.");
    assert_eq!(session.workouts().len(), 2);
    assert_eq!(session.workouts()[1].duration, 47.3);
    assert_eq!(session.workouts()[1].date, "2023-12-30 18:15");
}

#[tokio::test]
async fn test_follow_up_conversation_with_dedup() {
    let server = MockServer::start().await;
    common::mount_workouts(&server, common::WORKOUTS_BODY).await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_partial_json(json!({
            "messages": [
                {"role": "assistant", "content": "Initial analysis."},
                {"role": "user", "content": "Should I deload?"}
            ]
        })))
        .respond_with(ollama_reply("Not yet."))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ollama_reply("Initial analysis."))
        .expect(1)
        .mount(&server)
        .await;

    let provider = ollama_for(&server);
    let mut session = CoachSession::new();
    session
        .fetch_and_analyze(
            &hevy_for(&server),
            &provider,
            &request(Persona::Motivational, Verbosity::Normal),
        )
        .await
        .unwrap();

    let first = session.submit(&provider, "Should I deload?").await.unwrap();
    let repeat = session.submit(&provider, "Should I deload?").await.unwrap();

    assert_eq!(first, Reply::Answered(Message::assistant("Not yet.")));
    assert_eq!(repeat, Reply::Duplicate);
    assert_eq!(
        session.transcript(),
        &[
            Message::assistant("Initial analysis."),
            Message::user("Should I deload?"),
            Message::assistant("Not yet."),
        ]
    );
}

#[tokio::test]
async fn test_empty_workouts_never_call_provider() {
    let server = MockServer::start().await;
    common::mount_workouts(&server, r#"{"workouts": []}"#).await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ollama_reply("unused"))
        .expect(0)
        .mount(&server)
        .await;

    let mut session = CoachSession::new();
    let err = session
        .fetch_and_analyze(
            &hevy_for(&server),
            &ollama_for(&server),
            &request(Persona::General, Verbosity::Normal),
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<CoachError>(),
        Some(CoachError::NoWorkoutData)
    ));
    assert_eq!(err.to_string(), NO_WORKOUT_DATA_MESSAGE);
    assert!(session.transcript().is_empty());
}

#[tokio::test]
async fn test_rejected_key_gives_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/workouts"))
        .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
        .mount(&server)
        .await;

    let mut session = CoachSession::new();
    let err = session
        .fetch_and_analyze(
            &hevy_for(&server),
            &ollama_for(&server),
            &request(Persona::default(), Verbosity::default()),
        )
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), NO_WORKOUT_DATA_MESSAGE);
}
