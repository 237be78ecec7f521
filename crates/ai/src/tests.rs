use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::{AiClient, AiError};

#[tokio::test]
async fn ask_ai_returns_the_answer_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ask_ai"))
        .and(body_partial_json(serde_json::json!({
            "question": "what is rust?",
            "engine": "gemini",
            "uid": 7
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "answer": "A systems programming language."
        })))
        .mount(&server)
        .await;

    let client = AiClient::new(&server.uri()).unwrap();
    let answer = client.ask_ai("what is rust?", "gemini", 7).await.unwrap();
    assert_eq!(answer, "A systems programming language.");
}

#[tokio::test]
async fn ask_ai_missing_answer_field_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ask_ai"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let client = AiClient::new(&server.uri()).unwrap();
    let err = client.ask_ai("q", "gemini", 1).await.unwrap_err();
    assert!(matches!(err, AiError::MissingField("answer")));
}

#[tokio::test]
async fn non_success_status_fails_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ask_ai"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let client = AiClient::new(&server.uri()).unwrap();
    let err = client.ask_ai("q", "gemini", 1).await.unwrap_err();
    assert!(matches!(err, AiError::HttpStatus { code: 500, .. }));
}

#[tokio::test]
async fn generate_roadmap_passes_the_plan_through_opaquely() {
    let server = MockServer::start().await;
    let plan = serde_json::json!({
        "roadmap": [
            {"step": 1, "title": "Learn the borrow checker"},
            {"step": 2, "title": "Build a CLI"}
        ],
        "planning_days": 45
    });
    Mock::given(method("POST"))
        .and(path("/generate_roadmap"))
        .and(body_partial_json(serde_json::json!({
            "uid": 3,
            "skills_to_learn": ["Rust"],
            "planning_days": 45
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(plan.clone()))
        .mount(&server)
        .await;

    let client = AiClient::new(&server.uri()).unwrap();
    let got = client.generate_roadmap(3, &["Rust".to_owned()], 45).await.unwrap();
    assert_eq!(got, plan);
}

#[tokio::test]
async fn suggestions_forward_domain_and_completion() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/suggest_event"))
        .and(body_partial_json(serde_json::json!({
            "domain": "data science",
            "completion_percentage": 45.0
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "events": [{"name": "PyData", "date": "2026-09-12"}]
        })))
        .mount(&server)
        .await;

    let client = AiClient::new(&server.uri()).unwrap();
    let events = client.suggest_events(1, "data science", 45.0).await.unwrap();
    assert_eq!(events["events"][0]["name"], "PyData");
}

#[tokio::test]
async fn send_notification_succeeds_on_2xx() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/send_notification"))
        .and(body_partial_json(serde_json::json!({
            "email": "ada@x.com",
            "subject": "🎉 40% Milestone Reached! Time for Events & Networking"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"sent": true})))
        .mount(&server)
        .await;

    let client = AiClient::new(&server.uri()).unwrap();
    client
        .send_notification(
            "ada@x.com",
            "🎉 40% Milestone Reached! Time for Events & Networking",
            "body",
        )
        .await
        .unwrap();
}
