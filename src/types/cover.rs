//! Voice cover contracts (`/Cover`)

use serde_json::{Map, Value};

use super::{ApiRequest, ApiResponse, bool_or, insert_opt, opt_f64, opt_i64, opt_str};

/// Request to convert an audio track into a cover with another voice.
///
/// One of `audio_url` or `audio_file` is expected by the API. `pitch` uses 0
/// as the unset sentinel and is omitted at that value.
#[derive(Debug, Clone, Default)]
pub struct CoverRequest {
    pub audio_url: Option<String>,
    pub audio_file: Option<String>,
    pub voice_id: Option<String>,
    /// Semitone shift, negative to lower. 0 means unchanged and is not sent.
    pub pitch: i64,
    pub webhook_url: Option<String>,
}

impl ApiRequest for CoverRequest {
    fn endpoint(&self) -> &'static str {
        "/Cover"
    }

    fn to_params(&self) -> Map<String, Value> {
        let mut params = Map::new();
        insert_opt(&mut params, "audio_url", &self.audio_url);
        insert_opt(&mut params, "audio_file", &self.audio_file);
        insert_opt(&mut params, "voice_id", &self.voice_id);
        if self.pitch != 0 {
            params.insert("pitch".to_string(), Value::from(self.pitch));
        }
        insert_opt(&mut params, "webhook_url", &self.webhook_url);
        params
    }
}

/// Queued cover conversion job
#[derive(Debug, Clone)]
pub struct CoverResponse {
    success: bool,
    message: Option<String>,
    task_id: Option<String>,
    conversion_id: Option<String>,
    eta: Option<i64>,
    credit_estimate: Option<f64>,
    status: Option<String>,
}

impl ApiResponse for CoverResponse {
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

impl CoverResponse {
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

    /// Initial queue status, e.g. `IN_QUEUE`
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}
