//! Service round-trip tests
//!
//! Each operation service against a mock API: verifies the exact wire
//! payloads (headers, query strings, JSON bodies) and the parsing of the
//! responses.

use musicgpt::{
    ConversionType, CoverRequest, ExtractionRequest, MusicRequest, SpeechRequest, VoiceInfo,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common;

#[tokio::test]
async fn test_generate_sends_auth_headers_and_parses_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/MusicAI"))
        .and(header("Authorization", common::TEST_API_KEY))
        .and(header("Accept", "application/json"))
        .and(body_json(json!({"prompt": "dreamy lofi beat"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Message published to queue",
            "task_id": "task-123",
            "conversion_id_1": "conv-1",
            "conversion_id_2": "conv-2",
            "eta": 120,
            "credit_estimate": 2.5
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::music_gpt(&server);
    let request = MusicRequest {
        prompt: Some("dreamy lofi beat".to_string()),
        ..Default::default()
    };
    let response = client.music.generate(&request).await.unwrap();

    assert!(response.success());
    assert_eq!(response.task_id(), "task-123");
    assert_eq!(response.conversion_ids(), ["conv-1", "conv-2"]);
    assert_eq!(response.eta(), 120);
}

#[tokio::test]
async fn test_create_cover_serializes_pitch_only_when_set() {
    let server = MockServer::start().await;
    // The body matcher is exact: a pitch key would fail the expectation.
    Mock::given(method("POST"))
        .and(path("/Cover"))
        .and(body_json(json!({
            "audio_url": "https://x/a.mp3",
            "voice_id": "Drake"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "task_id": "task-cover-123",
            "conversion_id": "conv-cover-456",
            "eta": 33
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::music_gpt(&server);
    let request = CoverRequest {
        audio_url: Some("https://x/a.mp3".to_string()),
        voice_id: Some("Drake".to_string()),
        ..Default::default()
    };
    let response = client.cover.create_cover(&request).await.unwrap();

    assert!(response.success());
    assert_eq!(response.task_id(), Some("task-cover-123"));
    assert_eq!(response.eta(), Some(33));
}

#[tokio::test]
async fn test_create_cover_includes_nonzero_pitch() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/Cover"))
        .and(body_json(json!({
            "audio_url": "https://x/a.mp3",
            "voice_id": "Drake",
            "pitch": 3
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": true, "task_id": "t", "conversion_id": "c"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = common::music_gpt(&server);
    let request = CoverRequest {
        audio_url: Some("https://x/a.mp3".to_string()),
        voice_id: Some("Drake".to_string()),
        pitch: 3,
        ..Default::default()
    };
    assert!(client.cover.create_cover(&request).await.is_ok());
}

#[tokio::test]
async fn test_create_speech_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/TextToSpeech"))
        .and(body_json(json!({
            "text": "Hello world",
            "gender": "female",
            "voice_id": "Morgan"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "task_id": "task-tts",
            "conversion_id": "conv-tts",
            "eta": "17",
            "credit_estimate": "0.68",
            "status": "IN_QUEUE"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::music_gpt(&server);
    let mut request = SpeechRequest::new("Hello world", "female");
    request.voice_id = Some("Morgan".to_string());
    let response = client.speech.create_speech(&request).await.unwrap();

    assert_eq!(response.task_id(), Some("task-tts"));
    // Numeric fields arrive as strings on this endpoint.
    assert_eq!(response.eta(), Some(17));
    assert_eq!(response.credit_estimate(), Some(0.68));
    assert_eq!(response.status(), Some("IN_QUEUE"));
}

#[tokio::test]
async fn test_extract_stems_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/Extraction"))
        .and(body_json(json!({
            "audio_url": "https://x/track.mp3",
            "stems": ["vocals", "drums"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "task_id": "task-ext",
            "conversion_id": "conv-ext",
            "eta": 45
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::music_gpt(&server);
    let request = ExtractionRequest {
        audio_url: Some("https://x/track.mp3".to_string()),
        stems: vec!["vocals".to_string(), "drums".to_string()],
        ..Default::default()
    };
    let response = client.extraction.extract_stems(&request).await.unwrap();

    assert!(response.success());
    assert_eq!(response.conversion_id(), Some("conv-ext"));
}

#[tokio::test]
async fn test_get_by_task_id_builds_query_and_unwraps_conversion() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/byId"))
        .and(query_param("conversionType", "MUSIC_AI"))
        .and(query_param("task_id", "task-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "conversion": {
                "task_id": "task-123",
                "status": "COMPLETED",
                "conversion_path_1": "https://x/1.mp3",
                "title_1": "Rainy Day"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::music_gpt(&server);
    let details = client
        .conversions
        .get_by_task_id("task-123", ConversionType::MusicAi)
        .await
        .unwrap();

    assert!(details.is_completed());
    assert_eq!(details.task_id(), "task-123");
    assert_eq!(details.audio_url_1(), Some("https://x/1.mp3"));
    assert_eq!(details.title_1(), Some("Rainy Day"));
}

#[tokio::test]
async fn test_get_by_conversion_id_accepts_flat_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/byId"))
        .and(query_param("conversionType", "COVER"))
        .and(query_param("conversion_id", "conv-456"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "conversion_id": "conv-456",
            "status": "PROCESSING",
            "status_msg": "rendering"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::music_gpt(&server);
    let details = client
        .conversions
        .get_by_conversion_id("conv-456", ConversionType::Cover)
        .await
        .unwrap();

    assert!(details.is_processing());
    assert_eq!(details.conversion_id(), "conv-456");
    assert_eq!(details.status_message(), "rendering");
}

#[tokio::test]
async fn test_search_voices_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/searchVoices"))
        .and(query_param("query", "drake"))
        .and(query_param("limit", "20"))
        .and(query_param("page", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "voices": [{"voice_id": "Drake", "voice_name": "Drake"}],
            "limit": 20,
            "page": 0,
            "total": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::music_gpt(&server);
    let response = client.voices.search_voices("drake", 20, 0).await.unwrap();

    assert!(response.success());
    assert_eq!(response.voices(), &[VoiceInfo::new("Drake", "Drake")]);
    assert_eq!(response.total(), 1);
}

#[tokio::test]
async fn test_get_all_voices_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/getAllVoices"))
        .and(query_param("limit", "50"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "voices": [],
            "limit": 50,
            "page": 2,
            "total": 120
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::music_gpt(&server);
    let response = client.voices.get_all_voices(50, 2).await.unwrap();

    assert!(response.voices().is_empty());
    assert_eq!(response.limit(), 50);
    assert_eq!(response.page(), 2);
    assert_eq!(response.total(), 120);
}
