//! # musicgpt
//!
//! Typed async Rust client for the [MusicGPT](https://musicgpt.com) music
//! generation API.
//!
//! ## Features
//!
//! - **Typed operations**: music generation, voice covers, text-to-speech,
//!   stem extraction, voice listing, and job status lookup
//! - **Typed errors**: HTTP failures classified into a stable taxonomy
//!   (authentication, rate limit with retry hint, payment, validation with
//!   field detail, not-found, conflict) so callers can branch on error kind
//! - **Tolerant payload handling**: responses are constructible from any
//!   JSON object; missing fields degrade to documented defaults
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use musicgpt::{ClientConfig, ConversionType, MusicGpt, MusicRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MusicGpt::new(ClientConfig::from_env()?)?;
//!
//!     let request = MusicRequest {
//!         prompt: Some("dreamy lofi beat for rainy days".to_string()),
//!         ..Default::default()
//!     };
//!     let queued = client.music.generate(&request).await?;
//!     println!("queued task {} (eta {}s)", queued.task_id(), queued.eta());
//!
//!     let details = client
//!         .conversions
//!         .get_by_task_id(queued.task_id(), ConversionType::MusicAi)
//!         .await?;
//!     if details.is_completed() {
//!         println!("audio at {:?}", details.audio_url_1());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Jobs are asynchronous on the remote side: queueing operations return a
//! task ID immediately and the result is fetched later through the status
//! lookup. This crate performs no polling or retries of its own; rate-limit
//! errors expose [`MusicGptError::retry_after`] so callers can implement
//! their own backoff.

pub mod client;
pub mod config;
pub mod error;
pub mod services;
pub mod types;

pub use client::HttpClient;
pub use config::{ClientConfig, ConfigBuilder, DEFAULT_BASE_URL};
pub use error::{MusicGptError, Result};
pub use services::{
    ConversionService, CoverService, ExtractionService, MusicGpt, MusicService, SpeechService,
    VoiceService,
};
pub use types::{
    ApiRequest, ApiResponse, ConversionDetails, ConversionType, CoverRequest, CoverResponse, Method,
    ExtractionRequest, ExtractionResponse, MusicRequest, MusicResponse, SpeechRequest,
    SpeechResponse, VoiceInfo, VoicesResponse,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
