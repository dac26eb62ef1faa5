mod common;

use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn app_with_upstream(mock_server: &MockServer) -> common::TestApp {
    let mut configuration = common::test_configuration();
    configuration.ai.base_url = mock_server.uri();
    configuration.ai.api_key = Some("sk-test".to_string());
    common::spawn_app_without_database(configuration)
}

#[tokio::test]
async fn chat_goes_through_to_the_model() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": "Let's name the feeling first." } }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let app = app_with_upstream(&mock_server).await;
    let response = reqwest::Client::new()
        .post(&format!("{}/chat", &app.address))
        .header(common::INIT_DATA_HEADER, common::SIGNED_PAYLOAD)
        .json(&json!({ "text": "Everything annoys me", "scenario": "anger" }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "answer": "Let's name the feeling first." }));
}

#[tokio::test]
async fn rejected_session_never_reaches_the_model() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let app = app_with_upstream(&mock_server).await;
    let response = reqwest::Client::new()
        .post(&format!("{}/chat", &app.address))
        .header(common::INIT_DATA_HEADER, common::SIGNED_PAYLOAD.replace("bd9f", "bd9e"))
        .json(&json!({ "text": "hello" }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn upstream_rate_limit_is_reported() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&mock_server)
        .await;

    let app = app_with_upstream(&mock_server).await;
    let response = reqwest::Client::new()
        .post(&format!("{}/chat", &app.address))
        .header(common::INIT_DATA_HEADER, common::SIGNED_PAYLOAD)
        .json(&json!({ "text": "hello" }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 429);
}

#[tokio::test]
async fn voice_message_is_transcribed_and_answered() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/audio/transcriptions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "text": " I feel tired " })))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "content": "Rest is allowed." } }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let app = app_with_upstream(&mock_server).await;
    let response = reqwest::Client::new()
        .post(&format!("{}/voice", &app.address))
        .header(common::INIT_DATA_HEADER, common::SIGNED_PAYLOAD)
        .header("content-type", "audio/webm")
        .body(vec![0u8; 256])
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["transcript"], "I feel tired");
    assert_eq!(body["answer"], "Rest is allowed.");
}

#[tokio::test]
async fn malformed_audio_type_is_uploaded_as_ogg() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/audio/transcriptions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "text": "hi" })))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "content": "Hello." } }]
        })))
        .mount(&mock_server)
        .await;

    let app = app_with_upstream(&mock_server).await;
    let response = reqwest::Client::new()
        .post(&format!("{}/voice", &app.address))
        .header(common::INIT_DATA_HEADER, common::SIGNED_PAYLOAD)
        .header("content-type", "audio/ogg; codecs")
        .body(vec![0u8; 64])
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 200);

    let requests = mock_server.received_requests().await.unwrap();
    let upload = requests
        .iter()
        .find(|r| r.url.path() == "/audio/transcriptions")
        .expect("transcription request");
    let body = String::from_utf8_lossy(&upload.body).to_lowercase();
    assert!(body.contains("filename=\"voice.ogg\""));
    assert!(body.contains("content-type: audio/ogg"));
}
