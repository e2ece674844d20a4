//! Stem extraction contracts (`/Extraction`)

use serde_json::{Map, Value};

use super::{ApiRequest, ApiResponse, bool_or, insert_opt, opt_f64, opt_i64, opt_str};

/// Request to split an audio track into stems (vocals, drums, bass, ...).
///
/// Empty `stems` / `preprocessing_options` lists are omitted from the wire
/// payload, letting the API apply its own defaults.
#[derive(Debug, Clone, Default)]
pub struct ExtractionRequest {
    pub audio_url: Option<String>,
    pub audio_file: Option<String>,
    pub stems: Vec<String>,
    pub preprocessing_options: Vec<String>,
    pub webhook_url: Option<String>,
}

impl ApiRequest for ExtractionRequest {
    fn endpoint(&self) -> &'static str {
        "/Extraction"
    }

    fn to_params(&self) -> Map<String, Value> {
        let mut params = Map::new();
        insert_opt(&mut params, "audio_url", &self.audio_url);
        insert_opt(&mut params, "audio_file", &self.audio_file);
        if !self.stems.is_empty() {
            params.insert("stems".to_string(), Value::from(self.stems.clone()));
        }
        if !self.preprocessing_options.is_empty() {
            params.insert(
                "preprocessing_options".to_string(),
                Value::from(self.preprocessing_options.clone()),
            );
        }
        insert_opt(&mut params, "webhook_url", &self.webhook_url);
        params
    }
}

/// Queued stem extraction job
#[derive(Debug, Clone)]
pub struct ExtractionResponse {
    success: bool,
    message: Option<String>,
    task_id: Option<String>,
    conversion_id: Option<String>,
    eta: Option<i64>,
    credit_estimate: Option<f64>,
    status: Option<String>,
}

impl ApiResponse for ExtractionResponse {
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

impl ExtractionResponse {
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
