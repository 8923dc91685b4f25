//! HTTP client for the greeting endpoint.

use greeter_shared::{ApiError, HELLO_PATH};
use reqwest::Client;

/// Thin wrapper over `reqwest::Client` that knows the API base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: String::new(),
        }
    }

    /// Set the base URL for API requests
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        if self.base_url.is_empty() {
            if path.starts_with('/') {
                path.to_string()
            } else {
                format!("/{path}")
            }
        } else {
            let base = self.base_url.trim_end_matches('/');
            let path = path.trim_start_matches('/');
            format!("{base}/{path}")
        }
    }

    /// GET `path` and return the whole body as UTF-8 text.
    ///
    /// Non-2xx responses are errors even when they carry a body.
    pub async fn get_text(&self, path: &str) -> Result<String, ApiError> {
        let url = self.url(path);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status().as_u16();
        let is_success = resp.status().is_success();

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| ApiError::Body(format!("failed to read body: {e}")))?;

        if !is_success {
            return Err(ApiError::Http {
                status,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        String::from_utf8(bytes.to_vec()).map_err(|e| ApiError::Body(e.to_string()))
    }

    /// One refresh of the heading text.
    pub async fn fetch_hello(&self) -> Result<String, ApiError> {
        self.get_text(HELLO_PATH).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
