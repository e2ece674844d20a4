//! Shared test infrastructure

use musicgpt::{ConfigBuilder, HttpClient, MusicGpt};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test-api-key";

/// Transport pointed at a mock server.
pub fn http_client(server: &MockServer) -> HttpClient {
    let config = ConfigBuilder::new()
        .api_key(TEST_API_KEY)
        .base_url(&server.uri())
        .timeout(5)
        .build();
    HttpClient::new(config).expect("client construction")
}

/// Full service bundle pointed at a mock server.
pub fn music_gpt(server: &MockServer) -> MusicGpt {
    MusicGpt::from_client(http_client(server))
}
