//! Text-to-speech contracts (`/TextToSpeech`)

use serde_json::{Map, Value};

use super::{ApiRequest, ApiResponse, bool_or, insert_opt, opt_f64, opt_i64, opt_str};

/// Request to synthesize speech from text.
///
/// `text` and `gender` are required by the API and are always serialized;
/// the rest are omitted when unset.
#[derive(Debug, Clone)]
pub struct SpeechRequest {
    pub text: String,
    pub gender: String,
    pub voice_id: Option<String>,
    pub sample_audio_url: Option<String>,
    pub webhook_url: Option<String>,
}

impl SpeechRequest {
    pub fn new(text: impl Into<String>, gender: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            gender: gender.into(),
            voice_id: None,
            sample_audio_url: None,
            webhook_url: None,
        }
    }
}

impl ApiRequest for SpeechRequest {
    fn endpoint(&self) -> &'static str {
        "/TextToSpeech"
    }

    fn to_params(&self) -> Map<String, Value> {
        let mut params = Map::new();
        params.insert("text".to_string(), Value::from(self.text.clone()));
        params.insert("gender".to_string(), Value::from(self.gender.clone()));
        insert_opt(&mut params, "voice_id", &self.voice_id);
        insert_opt(&mut params, "sample_audio_url", &self.sample_audio_url);
        insert_opt(&mut params, "webhook_url", &self.webhook_url);
        params
    }
}

/// Queued text-to-speech job
#[derive(Debug, Clone)]
pub struct SpeechResponse {
    success: bool,
    message: Option<String>,
    task_id: Option<String>,
    conversion_id: Option<String>,
    eta: Option<i64>,
    credit_estimate: Option<f64>,
    status: Option<String>,
}

impl ApiResponse for SpeechResponse {
    fn from_map(data: Map<String, Value>) -> Self {
        Self {
            success: bool_or(&data, "success", false),
            message: opt_str(&data, "message").map(str::to_string),
            task_id: opt_str(&data, "task_id").map(str::to_string),
            conversion_id: opt_str(&data, "conversion_id").map(str::to_string),
            eta: opt_i64(&data, "eta"),
            credit_estimate: opt_f64(&data, "credit_estimate"),
            status: opt_str(&data, "status").map(str::to_string),
        }
    }
}

impl SpeechResponse {
    pub fn success(&self) -> bool {
        self.success
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn task_id(&self) -> Option<&str> {
        self.task_id.as_deref()
    }

    pub fn conversion_id(&self) -> Option<&str> {
        self.conversion_id.as_deref()
    }

    /// Estimated seconds until completion
    pub fn eta(&self) -> Option<i64> {
        self.eta
    }

    pub fn credit_estimate(&self) -> Option<f64> {
        self.credit_estimate
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}
