//! Text-to-speech service

use crate::client::HttpClient;
use crate::error::Result;
use crate::types::{SpeechRequest, SpeechResponse};

/// Speech synthesis with the configured voice models.
#[derive(Debug, Clone)]
pub struct SpeechService {
    http: HttpClient,
}

impl SpeechService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Queue a text-to-speech job.
    pub async fn create_speech(&self, request: &SpeechRequest) -> Result<SpeechResponse> {
        self.http.send(request).await
    }
}
