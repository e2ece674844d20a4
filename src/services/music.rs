//! Music generation service

use crate::client::HttpClient;
use crate::error::Result;
use crate::types::{MusicRequest, MusicResponse};

/// AI music generation from text prompts.
#[derive(Debug, Clone)]
pub struct MusicService {
    http: HttpClient,
}

impl MusicService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Queue a music generation job.
    pub async fn generate(&self, request: &MusicRequest) -> Result<MusicResponse> {
        self.http.send(request).await
    }
}
