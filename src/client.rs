//! HTTP transport for the MusicGPT API
//!
//! Single authenticated gateway to the remote API: builds requests,
//! dispatches them, and classifies error responses into the typed taxonomy.
//! Services layer on top of [`HttpClient::send`]; everything else in this
//! crate is free of HTTP concerns.

use std::time::Duration;

use reqwest::{Client, ClientBuilder, Method, header};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{MusicGptError, Result, classify_status};
use crate::types::{ApiRequest, ApiResponse};

/// Authenticated MusicGPT API client.
///
/// Cheap to clone; clones share the underlying connection pool. Holds no
/// mutable state, so one instance may be used from many tasks concurrently.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl HttpClient {
    /// Create a client from the given configuration.
    ///
    /// Fails when the API key is empty or the underlying transport cannot
    /// be constructed.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(MusicGptError::config("API key must not be empty"));
        }

        let http = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .map_err(|e| MusicGptError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }

    /// Send a raw request and return the parsed JSON object.
    ///
    /// `GET` sends `params` as the query string, any other method as a JSON
    /// body. Error statuses (>= 400) are classified into typed errors;
    /// transport failures surface as a generic API error with status 0 and
    /// the original error as source.
    pub async fn raw_request(
        &self,
        endpoint: &str,
        params: &Map<String, Value>,
        method: Method,
    ) -> Result<Map<String, Value>> {
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        );

        debug!(%method, endpoint, "dispatching MusicGPT API request");

        let mut request = self
            .http
            .request(method.clone(), &url)
            .header(header::AUTHORIZATION, self.api_key.as_str())
            .header(header::ACCEPT, "application/json");

        request = if method == Method::GET {
            request.query(params)
        } else {
            request.json(params)
        };

        let response = request
            .send()
            .await
            .map_err(|e| MusicGptError::network(endpoint, e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| MusicGptError::network(endpoint, e))?;

        if status >= 400 {
            // Error bodies are not guaranteed to be JSON; classification
            // treats anything unparseable as an empty payload.
            let data = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| v.as_object().cloned())
                .unwrap_or_default();
            warn!(status, endpoint, "MusicGPT API returned an error");
            return Err(classify_status(status, &data, endpoint));
        }

        match serde_json::from_str::<Value>(&body) {
            Ok(Value::Object(data)) => Ok(data),
            _ => Err(MusicGptError::Api {
                message: format!(
                    "Failed to request MusicGPT API endpoint \"{endpoint}\": response body is not a JSON object"
                ),
                status: 0,
                endpoint: Some(endpoint.to_string()),
                source: None,
            }),
        }
    }

    /// Send a typed request and parse the payload into the operation's
    /// response type.
    pub async fn send<R, T>(&self, request: &R) -> Result<T>
    where
        R: ApiRequest,
        T: ApiResponse,
    {
        let data = self
            .raw_request(request.endpoint(), &request.to_params(), request.method())
            .await?;
        Ok(T::from_map(data))
    }
}
