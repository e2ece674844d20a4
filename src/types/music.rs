//! Music generation contracts (`/MusicAI`)

use serde_json::{Map, Value};

use super::{ApiRequest, ApiResponse, bool_or, insert_opt, opt_f64, opt_i64, str_or};

/// Request for AI music generation from a text prompt.
///
/// Every field is optional on the wire; unset fields are omitted entirely.
#[derive(Debug, Clone, Default)]
pub struct MusicRequest {
    pub prompt: Option<String>,
    pub music_style: Option<String>,
    pub lyrics: Option<String>,
    pub make_instrumental: bool,
    pub vocal_only: bool,
    pub voice_id: Option<String>,
    pub webhook_url: Option<String>,
}

impl ApiRequest for MusicRequest {
    fn endpoint(&self) -> &'static str {
        "/MusicAI"
    }

    fn to_params(&self) -> Map<String, Value> {
        let mut params = Map::new();
        insert_opt(&mut params, "prompt", &self.prompt);
        insert_opt(&mut params, "music_style", &self.music_style);
        insert_opt(&mut params, "lyrics", &self.lyrics);
        if self.make_instrumental {
            params.insert("make_instrumental".to_string(), Value::from(true));
        }
        if self.vocal_only {
            params.insert("vocal_only".to_string(), Value::from(true));
        }
        insert_opt(&mut params, "voice_id", &self.voice_id);
        insert_opt(&mut params, "webhook_url", &self.webhook_url);
        params
    }
}

/// Queued music generation job. Music generation always produces two
/// conversions, so two conversion IDs are returned.
#[derive(Debug, Clone)]
pub struct MusicResponse {
    data: Map<String, Value>,
}

impl ApiResponse for MusicResponse {
    fn from_map(data: Map<String, Value>) -> Self {
        Self { data }
    }
}

impl MusicResponse {
    pub fn success(&self) -> bool {
        bool_or(&self.data, "success", false)
    }

    pub fn message(&self) -> &str {
        str_or(&self.data, "message")
    }

    pub fn task_id(&self) -> &str {
        str_or(&self.data, "task_id")
    }

    pub fn conversion_id_1(&self) -> &str {
        str_or(&self.data, "conversion_id_1")
    }

    pub fn conversion_id_2(&self) -> &str {
        str_or(&self.data, "conversion_id_2")
    }

    /// Both conversion IDs, in order.
    pub fn conversion_ids(&self) -> [&str; 2] {
        [self.conversion_id_1(), self.conversion_id_2()]
    }

    /// Estimated seconds until completion, 0 when not reported.
    pub fn eta(&self) -> i64 {
        opt_i64(&self.data, "eta").unwrap_or(0)
    }

    pub fn credit_estimate(&self) -> Option<f64> {
        opt_f64(&self.data, "credit_estimate")
    }

    /// Raw payload
    pub fn raw(&self) -> &Map<String, Value> {
        &self.data
    }
}
