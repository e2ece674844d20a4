//! Voice listing contracts (`/searchVoices`, `/getAllVoices`)

use serde_json::{Map, Value};

use super::{ApiResponse, bool_or, opt_i64, opt_str, str_or};

/// One available voice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceInfo {
    voice_id: String,
    voice_name: String,
}

impl VoiceInfo {
    pub fn new(voice_id: impl Into<String>, voice_name: impl Into<String>) -> Self {
        Self {
            voice_id: voice_id.into(),
            voice_name: voice_name.into(),
        }
    }

    pub fn voice_id(&self) -> &str {
        &self.voice_id
    }

    pub fn voice_name(&self) -> &str {
        &self.voice_name
    }

    fn from_value(data: &Map<String, Value>) -> Self {
        Self::new(str_or(data, "voice_id"), str_or(data, "voice_name"))
    }
}

/// One page of a voice listing
#[derive(Debug, Clone)]
pub struct VoicesResponse {
    success: bool,
    voices: Vec<VoiceInfo>,
    limit: i64,
    page: i64,
    total: i64,
    message: Option<String>,
}

impl ApiResponse for VoicesResponse {
    fn from_map(data: Map<String, Value>) -> Self {
        let voices = data
            .get("voices")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(Value::as_object)
                    .map(VoiceInfo::from_value)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            success: bool_or(&data, "success", false),
            voices,
            limit: opt_i64(&data, "limit").unwrap_or(20),
            page: opt_i64(&data, "page").unwrap_or(0),
            total: opt_i64(&data, "total").unwrap_or(0),
            message: opt_str(&data, "message").map(str::to_string),
        }
    }
}

impl VoicesResponse {
    pub fn success(&self) -> bool {
        self.success
    }

    /// Voices on this page, in listing order
    pub fn voices(&self) -> &[VoiceInfo] {
        &self.voices
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    /// Total matching voices across all pages
    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
