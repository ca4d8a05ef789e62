use async_trait::async_trait;

use crate::domain::DomainError;

/// Trait for HTTP client operations (for mocking)
///
/// Status mapping happens here so adapters can pattern-match on the error
/// taxonomy: 404 becomes `NotFound`, any other non-2xx becomes `Upstream`.
#[async_trait]
pub trait HttpClientTrait: Send + Sync + std::fmt::Debug {
    /// GET returning the raw response body
    async fn get_text(&self, url: &str) -> Result<String, DomainError>;

    /// GET returning a parsed JSON body
    async fn get_json(&self, url: &str) -> Result<serde_json::Value, DomainError>;

    /// POST with a JSON body, returning a parsed JSON response
    async fn post_json(
        &self,
        url: &str,
        headers: Vec<(&str, &str)>,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, DomainError>;
}

/// Real HTTP client using reqwest
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub fn with_timeout(timeout: std::time::Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
        }
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, DomainError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();

        if status == reqwest::StatusCode::NOT_FOUND {
            Err(DomainError::not_found(format!("HTTP 404: {body}")))
        } else {
            Err(DomainError::upstream(status.as_u16(), body))
        }
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClientTrait for HttpClient {
    async fn get_text(&self, url: &str) -> Result<String, DomainError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DomainError::network(format!("Request failed: {e}"), 1))?;

        let response = Self::check_status(response).await?;

        response
            .text()
            .await
            .map_err(|e| DomainError::network(format!("Failed to read response body: {e}"), 1))
    }

    async fn get_json(&self, url: &str) -> Result<serde_json::Value, DomainError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DomainError::network(format!("Request failed: {e}"), 1))?;

        let response = Self::check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| DomainError::invalid_response(format!("Failed to parse response: {e}")))
    }

    async fn post_json(
        &self,
        url: &str,
        headers: Vec<(&str, &str)>,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, DomainError> {
        let mut request = self.client.post(url);

        for (key, value) in headers {
            request = request.header(key, value);
        }

        let response = request
            .json(body)
            .send()
            .await
            .map_err(|e| DomainError::network(format!("Request failed: {e}"), 1))?;

        let response = Self::check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| DomainError::invalid_response(format!("Failed to parse response: {e}")))
    }
}
