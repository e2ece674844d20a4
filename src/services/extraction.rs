//! Stem extraction service

use crate::client::HttpClient;
use crate::error::Result;
use crate::types::{ExtractionRequest, ExtractionResponse};

/// Extracts audio stems (vocals, instrumental, drums, ...) from tracks.
#[derive(Debug, Clone)]
pub struct ExtractionService {
    http: HttpClient,
}

impl ExtractionService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Queue a stem extraction job.
    pub async fn extract_stems(&self, request: &ExtractionRequest) -> Result<ExtractionResponse> {
        self.http.send(request).await
    }
}
