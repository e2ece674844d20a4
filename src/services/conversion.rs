//! Job status lookup service

use reqwest::Method;
use serde_json::{Map, Value};

use crate::client::HttpClient;
use crate::error::Result;
use crate::types::{ApiResponse, ConversionDetails, ConversionType};

/// Status lookup for queued jobs, by task ID or conversion ID.
#[derive(Debug, Clone)]
pub struct ConversionService {
    http: HttpClient,
}

impl ConversionService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Look up a job by its task ID.
    pub async fn get_by_task_id(
        &self,
        task_id: &str,
        conversion_type: ConversionType,
    ) -> Result<ConversionDetails> {
        self.get_by_id("task_id", task_id, conversion_type).await
    }

    /// Look up a job by one of its conversion IDs.
    pub async fn get_by_conversion_id(
        &self,
        conversion_id: &str,
        conversion_type: ConversionType,
    ) -> Result<ConversionDetails> {
        self.get_by_id("conversion_id", conversion_id, conversion_type)
            .await
    }

    async fn get_by_id(
        &self,
        id_key: &str,
        id: &str,
        conversion_type: ConversionType,
    ) -> Result<ConversionDetails> {
        let mut params = Map::new();
        params.insert(
            "conversionType".to_string(),
            Value::from(conversion_type.as_str()),
        );
        params.insert(id_key.to_string(), Value::from(id));

        let data = self.http.raw_request("/byId", &params, Method::GET).await?;
        Ok(ConversionDetails::from_map(data))
    }
}
