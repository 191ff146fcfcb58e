//! `reqwest`-backed [`Transport`].

use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode};

use super::Transport;
use crate::config::ClientConfig;
use crate::error::WireError;

/// HTTP transport rooted at the configured API base URL.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Builds a transport from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, WireError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self::with_client(client, &config.api_url))
    }

    /// Wraps an existing client.
    #[must_use]
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Returns the absolute URL for a relative `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send(
        &self,
        path: &str,
        request: RequestBuilder,
    ) -> Result<reqwest::Response, WireError> {
        let response = request.send().await.inspect_err(|err| {
            tracing::warn!(path, error = %err, "request failed");
        })?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(path, status = status.as_u16(), "backend returned error status");
            return Err(WireError::Status {
                status: status.as_u16(),
                path: path.to_owned(),
            });
        }
        Ok(response)
    }

    async fn send_json(
        &self,
        path: &str,
        request: RequestBuilder,
    ) -> Result<serde_json::Value, WireError> {
        let response = self.send(path, request).await?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(serde_json::Value::Null);
        }
        Ok(response.json::<serde_json::Value>().await?)
    }
}

impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> Result<serde_json::Value, WireError> {
        tracing::debug!(path, "GET");
        self.send_json(path, self.client.get(self.url(path))).await
    }

    async fn post(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, WireError> {
        tracing::debug!(path, "POST");
        self.send_json(path, self.client.post(self.url(path)).json(body))
            .await
    }

    async fn put(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, WireError> {
        tracing::debug!(path, "PUT");
        self.send_json(path, self.client.put(self.url(path)).json(body))
            .await
    }

    async fn delete(&self, path: &str) -> Result<(), WireError> {
        tracing::debug!(path, "DELETE");
        self.send(path, self.client.delete(self.url(path))).await?;
        Ok(())
    }
}
