//! Client for making requests to the castles API server

use crate::types::{ApiErrorMessage, Castle, CastleResponse, CastlesResponse, CountryCode};

/// Error type for API operations
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

/// Client for the castles REST API
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch every castle of one country.
    pub async fn castles_by_country(
        &self,
        country: CountryCode,
    ) -> Result<Vec<Castle>, ClientError> {
        let url = format!("{}/castles/api?country={}", self.base_url, country);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        let envelope: CastlesResponse = response.json().await?;
        Ok(envelope.data)
    }

    /// Fetch a single castle by slug. Absence is `Ok(None)`.
    pub async fn castle_by_web_name(
        &self,
        web_name: &str,
    ) -> Result<Option<Castle>, ClientError> {
        let url = format!("{}/castles/api/{}", self.base_url, web_name);
        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        let envelope: CastleResponse = response.json().await?;
        Ok(Some(envelope.data))
    }

    async fn api_error(response: reqwest::Response) -> ClientError {
        let status = response.status().as_u16();
        let message = match response.json::<ApiErrorMessage>().await {
            Ok(body) => body.message,
            Err(_) => "unexpected API response".to_string(),
        };
        ClientError::Api { status, message }
    }
}

/// Create a client for server-side requests (direct to API)
#[cfg(feature = "server")]
pub fn server_client() -> ApiClient {
    let url = std::env::var("API_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
    ApiClient::new(url)
}
