//! Voice listing service

use reqwest::Method;
use serde_json::{Map, Value};

use crate::client::HttpClient;
use crate::error::Result;
use crate::types::{ApiResponse, VoicesResponse};

/// Voice search and listing.
#[derive(Debug, Clone)]
pub struct VoiceService {
    http: HttpClient,
}

impl VoiceService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Search voices by name. Pages start at 0; the API default page size
    /// is 20.
    pub async fn search_voices(
        &self,
        query: &str,
        limit: u32,
        page: u32,
    ) -> Result<VoicesResponse> {
        let mut params = Map::new();
        params.insert("query".to_string(), Value::from(query));
        params.insert("limit".to_string(), Value::from(limit));
        params.insert("page".to_string(), Value::from(page));

        let data = self
            .http
            .raw_request("/searchVoices", &params, Method::GET)
            .await?;
        Ok(VoicesResponse::from_map(data))
    }

    /// List all voices, paginated.
    pub async fn get_all_voices(&self, limit: u32, page: u32) -> Result<VoicesResponse> {
        let mut params = Map::new();
        params.insert("limit".to_string(), Value::from(limit));
        params.insert("page".to_string(), Value::from(page));

        let data = self
            .http
            .raw_request("/getAllVoices", &params, Method::GET)
            .await?;
        Ok(VoicesResponse::from_map(data))
    }
}
