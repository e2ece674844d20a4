//! Operation services
//!
//! One thin façade per API capability, each binding a request/response pair
//! to the shared [`HttpClient`]. Services never catch or translate errors;
//! classification happens once, in the transport.

pub mod conversion;
pub mod cover;
pub mod extraction;
pub mod music;
pub mod speech;
pub mod voice;

pub use conversion::ConversionService;
pub use cover::CoverService;
pub use extraction::ExtractionService;
pub use music::MusicService;
pub use speech::SpeechService;
pub use voice::VoiceService;

use crate::client::HttpClient;
use crate::config::ClientConfig;
use crate::error::Result;

/// One-stop MusicGPT client bundling all operation services over a shared
/// transport.
#[derive(Debug, Clone)]
pub struct MusicGpt {
    pub music: MusicService,
    pub cover: CoverService,
    pub speech: SpeechService,
    pub extraction: ExtractionService,
    pub voices: VoiceService,
    pub conversions: ConversionService,
}

impl MusicGpt {
    /// Build all services from one configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self::from_client(HttpClient::new(config)?))
    }

    /// Build all services over an existing transport.
    pub fn from_client(http: HttpClient) -> Self {
        Self {
            music: MusicService::new(http.clone()),
            cover: CoverService::new(http.clone()),
            speech: SpeechService::new(http.clone()),
            extraction: ExtractionService::new(http.clone()),
            voices: VoiceService::new(http.clone()),
            conversions: ConversionService::new(http),
        }
    }
}
