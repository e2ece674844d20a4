//! Request and response contracts for the MusicGPT API
//!
//! Requests serialize to a flat field map, omitting unset values; responses
//! are constructible from any JSON object, with missing fields degrading to
//! documented defaults rather than failing.

pub mod conversion;
pub mod cover;
pub mod extraction;
pub mod music;
pub mod speech;
pub mod voice;

pub use conversion::ConversionDetails;
pub use cover::{CoverRequest, CoverResponse};
pub use extraction::{ExtractionRequest, ExtractionResponse};
pub use music::{MusicRequest, MusicResponse};
pub use speech::{SpeechRequest, SpeechResponse};
pub use voice::{VoiceInfo, VoicesResponse};

pub use reqwest::Method;
use serde_json::{Map, Value};

/// A typed API request bound to one endpoint.
pub trait ApiRequest {
    /// Endpoint path, relative to the configured base URL
    fn endpoint(&self) -> &'static str;

    /// HTTP method for this request
    fn method(&self) -> Method {
        Method::POST
    }

    /// Flat field map for submission. Unset fields (None, `false`, empty
    /// lists, documented zero sentinels) are omitted.
    fn to_params(&self) -> Map<String, Value>;
}

/// A typed API response parsed from a JSON object.
pub trait ApiResponse {
    /// Build the response from the raw payload. Never fails: absent fields
    /// fall back to their defaults.
    fn from_map(data: Map<String, Value>) -> Self;
}

/// Job kind discriminator for status lookups on `/byId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionType {
    MusicAi,
    Cover,
    TextToSpeech,
    Extraction,
}

impl ConversionType {
    /// Wire value expected by the API
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MusicAi => "MUSIC_AI",
            Self::Cover => "COVER",
            Self::TextToSpeech => "TEXT_TO_SPEECH",
            Self::Extraction => "EXTRACTION",
        }
    }
}

impl std::fmt::Display for ConversionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Shared field accessors over raw payload maps. The API mixes types freely
// (numbers arrive as strings on some operations), so numeric helpers accept
// both encodings.

pub(crate) fn bool_or(data: &Map<String, Value>, key: &str, default: bool) -> bool {
    data.get(key).and_then(Value::as_bool).unwrap_or(default)
}

pub(crate) fn str_or<'a>(data: &'a Map<String, Value>, key: &str) -> &'a str {
    data.get(key).and_then(Value::as_str).unwrap_or("")
}

pub(crate) fn opt_str<'a>(data: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    data.get(key).and_then(Value::as_str)
}

pub(crate) fn opt_i64(data: &Map<String, Value>, key: &str) -> Option<i64> {
    let value = data.get(key)?;
    value
        .as_i64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
}

pub(crate) fn opt_f64(data: &Map<String, Value>, key: &str) -> Option<f64> {
    let value = data.get(key)?;
    value
        .as_f64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
}

/// Insert an optional string field, skipping `None`.
pub(crate) fn insert_opt(params: &mut Map<String, Value>, key: &str, value: &Option<String>) {
    if let Some(value) = value {
        params.insert(key.to_string(), Value::from(value.clone()));
    }
}
