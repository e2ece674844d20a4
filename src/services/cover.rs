//! Voice cover service

use crate::client::HttpClient;
use crate::error::Result;
use crate::types::{CoverRequest, CoverResponse};

/// Converts audio tracks to covers sung by another voice model.
#[derive(Debug, Clone)]
pub struct CoverService {
    http: HttpClient,
}

impl CoverService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Queue a cover conversion job.
    pub async fn create_cover(&self, request: &CoverRequest) -> Result<CoverResponse> {
        self.http.send(request).await
    }
}
