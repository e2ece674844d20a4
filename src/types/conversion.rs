//! Job status lookup result (`/byId`)

use chrono::{DateTime, FixedOffset};
use serde_json::{Map, Value};

use super::{ApiResponse, bool_or, opt_f64, opt_i64, opt_str, str_or};

/// Details of one remote job, as returned by the status lookup.
///
/// The record shape depends on which operation produced the job, so every
/// accessor is independently optional. The API returns either a flat object
/// or one wrapped in a `conversion` key; both shapes are accepted.
#[derive(Debug, Clone)]
pub struct ConversionDetails {
    data: Map<String, Value>,
}

impl ApiResponse for ConversionDetails {
    fn from_map(data: Map<String, Value>) -> Self {
        let data = match data.get("conversion").and_then(Value::as_object) {
            Some(inner) => inner.clone(),
            None => data,
        };
        Self { data }
    }
}

impl ConversionDetails {
    /// Success flag; lookups that omit it are treated as successful.
    pub fn success(&self) -> bool {
        bool_or(&self.data, "success", true)
    }

    pub fn task_id(&self) -> &str {
        str_or(&self.data, "task_id")
    }

    pub fn conversion_id(&self) -> &str {
        str_or(&self.data, "conversion_id")
    }

    /// Raw job status, e.g. `PENDING`, `COMPLETED`, `FAILED`
    pub fn status(&self) -> &str {
        str_or(&self.data, "status")
    }

    pub fn is_completed(&self) -> bool {
        self.status() == "COMPLETED"
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status(), "FAILED" | "ERROR")
    }

    pub fn is_processing(&self) -> bool {
        matches!(self.status(), "PENDING" | "PROCESSING" | "QUEUED")
    }

    pub fn status_message(&self) -> &str {
        str_or(&self.data, "status_msg")
    }

    /// Result audio URL; cover/TTS/extraction jobs report it as
    /// `conversion_path`.
    pub fn audio_url(&self) -> Option<&str> {
        opt_str(&self.data, "audio_url").or_else(|| opt_str(&self.data, "conversion_path"))
    }

    pub fn video_url(&self) -> Option<&str> {
        opt_str(&self.data, "video_url")
    }

    /// Album cover URL; some job kinds report it as `album_cover_path`.
    pub fn image_url(&self) -> Option<&str> {
        opt_str(&self.data, "image_url").or_else(|| opt_str(&self.data, "album_cover_path"))
    }

    /// Audio URL for conversion 1 (music generation)
    pub fn audio_url_1(&self) -> Option<&str> {
        opt_str(&self.data, "conversion_path_1")
    }

    /// Audio URL for conversion 2 (music generation)
    pub fn audio_url_2(&self) -> Option<&str> {
        opt_str(&self.data, "conversion_path_2")
    }

    /// Lossless WAV URL for conversion 1
    pub fn audio_wav_url_1(&self) -> Option<&str> {
        opt_str(&self.data, "conversion_path_wav_1")
    }

    /// Lossless WAV URL for conversion 2
    pub fn audio_wav_url_2(&self) -> Option<&str> {
        opt_str(&self.data, "conversion_path_wav_2")
    }

    pub fn thumbnail_url(&self) -> Option<&str> {
        opt_str(&self.data, "album_cover_thumbnail")
    }

    pub fn title(&self) -> Option<&str> {
        opt_str(&self.data, "title")
    }

    /// Title of conversion 1 (music generation)
    pub fn title_1(&self) -> Option<&str> {
        opt_str(&self.data, "title_1")
    }

    /// Title of conversion 2 (music generation)
    pub fn title_2(&self) -> Option<&str> {
        opt_str(&self.data, "title_2")
    }

    pub fn lyrics(&self) -> Option<&str> {
        opt_str(&self.data, "lyrics")
    }

    pub fn music_style(&self) -> Option<&str> {
        opt_str(&self.data, "music_style")
    }

    pub fn conversion_cost(&self) -> Option<f64> {
        opt_f64(&self.data, "conversion_cost")
    }

    /// Duration in seconds
    pub fn duration(&self) -> Option<i64> {
        opt_i64(&self.data, "duration")
    }

    pub fn tags(&self) -> Vec<&str> {
        self.data
            .get("tags")
            .and_then(Value::as_array)
            .map(|tags| tags.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    pub fn created_at(&self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(&self.data, "createdAt")
    }

    pub fn updated_at(&self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(&self.data, "updatedAt")
    }

    /// Raw job record
    pub fn raw(&self) -> &Map<String, Value> {
        &self.data
    }
}

fn parse_timestamp(data: &Map<String, Value>, key: &str) -> Option<DateTime<FixedOffset>> {
    opt_str(data, key).and_then(|s| DateTime::parse_from_rfc3339(s).ok())
}
