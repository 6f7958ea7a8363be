/*
[INPUT]:  API key, HTTP configuration (base URL, timeouts)
[OUTPUT]: Configured reqwest client with basic auth and response handling
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use crate::http::{ApiError, ColumnError, Result};
use crate::types::{Environment, ErrorBody};
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};
use uuid::Uuid;

/// Base URL for the Column API
pub const COLUMN_API_ADDRESS: &str = "https://api.column.com";

/// Header carrying the idempotency key on create calls
pub const IDEMPOTENCY_HEADER: &str = "Idempotency-Key";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: COLUMN_API_ADDRESS.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl Environment {
    /// Derive the environment from the key prefix
    pub fn from_api_key(api_key: &str) -> Result<Self> {
        if api_key.starts_with("test_") {
            return Ok(Environment::Test);
        }
        if api_key.starts_with("live_") {
            return Ok(Environment::Live);
        }
        Err(ColumnError::InvalidApiKey)
    }
}

/// Fresh value for the `Idempotency-Key` header
pub fn new_idempotency_key() -> String {
    Uuid::new_v4().to_string()
}

/// Main async HTTP client for the Column API
#[derive(Clone)]
pub struct ColumnClient {
    http_client: Client,
    base_url: Url,
    api_key: String,
    environment: Environment,
}

impl std::fmt::Debug for ColumnClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnClient")
            .field("base_url", &self.base_url.as_str())
            .field("environment", &self.environment)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl ColumnClient {
    /// Create a new client with default configuration
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(api_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let api_key = api_key.into();
        let environment = Environment::from_api_key(&api_key)?;

        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ColumnError::InvalidRequest(format!(
                "base url cannot carry a path: {}",
                config.base_url
            )));
        }

        debug!(%environment, base_url = %base_url, "column client created");

        Ok(Self {
            http_client,
            base_url,
            api_key,
            environment,
        })
    }

    /// Environment derived from the API key
    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build full URL from path segments, percent-encoding each one
    pub(crate) fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ColumnError::InvalidRequest("base url cannot carry a path".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Build an authenticated request builder
    pub(crate) fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        let url = self.url(segments)?;
        Ok(self
            .http_client
            .request(method, url)
            .basic_auth("", Some(&self.api_key)))
    }

    /// Send and decode a 200 body into `T`
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let body = self.execute(builder).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Send and decode a 200 body as untyped JSON
    pub(crate) async fn send_value(&self, builder: RequestBuilder) -> Result<serde_json::Value> {
        self.send_json(builder).await
    }

    /// Send and discard the body of a successful response
    pub(crate) async fn send_unit(&self, builder: RequestBuilder) -> Result<()> {
        self.execute(builder).await.map(|_| ())
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<String> {
        let request = builder.build()?;
        debug!(method = %request.method(), path = request.url().path(), "sending request");

        let response = self.http_client.execute(request).await?;
        let status = response.status();
        let url = response.url().to_string();
        let body = response.text().await?;
        debug!(status = status.as_u16(), %url, "received response");

        check_status(status, &url, &body)?;
        Ok(body)
    }
}

/// Statuses the API documents an error body for
fn is_documented_error(status: StatusCode) -> bool {
    matches!(status.as_u16(), 400 | 401 | 403 | 404 | 429) || status.is_server_error()
}

/// Map a response status (and error body) onto the client's error type
pub(crate) fn check_status(status: StatusCode, url: &str, body: &str) -> Result<()> {
    if status == StatusCode::OK {
        return Ok(());
    }
    if is_documented_error(status) {
        let error_body: ErrorBody = serde_json::from_str(body)?;
        warn!(
            status = status.as_u16(),
            error_type = %error_body.error_type,
            code = %error_body.code,
            %url,
            "column api error"
        );
        return Err(ColumnError::Api(Box::new(ApiError::from_body(
            error_body, status, url,
        ))));
    }
    warn!(status = status.as_u16(), %url, "unhandled status code");
    Err(ColumnError::UnexpectedStatus {
        status,
        url: url.to_string(),
    })
}
