//! Generic JSON request client.
//!
//! One call issues exactly one HTTP request: default JSON headers merged with
//! caller overrides, the configured timeout, and an optional JSON body. The
//! outcome is either an [`ApiResponse`] envelope or an [`ApiError`]. There
//! are no retries; callers own any retry policy.

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{redirect, Client, Method};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

/// Message attached to every successful envelope.
pub const SUCCESS_MESSAGE: &str = "Request successful";

/// Client-side envelope around a decoded response body.
///
/// The server returns the raw entity or collection; the envelope is built
/// here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Decoded response body.
    pub data: T,

    /// Always `true` for envelopes produced by [`ApiClient`].
    pub success: bool,

    /// Status message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Wrap a successfully decoded body.
    pub fn ok(data: T) -> Self {
        Self {
            data,
            success: true,
            message: Some(SUCCESS_MESSAGE.to_string()),
        }
    }

    pub fn into_data(self) -> T {
        self.data
    }
}

/// Error body shape the server may send with a non-success status.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,

    /// Some services send numeric codes.
    #[serde(default)]
    code: Option<serde_json::Value>,
}

impl ErrorBody {
    fn parse(bytes: &[u8]) -> Self {
        serde_json::from_slice(bytes).unwrap_or_default()
    }

    fn code(&self) -> Option<String> {
        match self.code.as_ref()? {
            serde_json::Value::String(code) => Some(code.clone()),
            serde_json::Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}

/// Console API client.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct ApiClient {
    /// HTTP client instance.
    client: Client,

    /// Base URL and defaults.
    config: ClientConfig,

    /// Per-request timeout.
    timeout: Duration,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.config.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ApiClient {
    /// Create a new client from configuration.
    ///
    /// Redirects are not followed, so every status >= 300 surfaces as
    /// [`ApiError::Http`].
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let timeout = config.timeout();
        let client = Client::builder()
            .timeout(timeout)
            .redirect(redirect::Policy::none())
            .build()?;

        Ok(Self {
            client,
            config,
            timeout,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Copy of this client with a different per-request timeout.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        Self {
            timeout,
            ..self.clone()
        }
    }

    /// Headers sent with every request unless overridden.
    pub fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    /// Issue a single request against `endpoint` (relative to the base URL).
    ///
    /// `headers` replace the defaults key by key. A `body` is serialized as
    /// JSON when present.
    #[instrument(skip(self, body, headers), fields(method = %method, endpoint = %endpoint))]
    pub async fn request<T, B>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
        headers: Option<HeaderMap>,
    ) -> ApiResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.config.url(endpoint);
        debug!(url = %url, has_body = body.is_some(), "Sending API request");

        let mut merged = Self::default_headers();
        if let Some(overrides) = headers {
            merged.extend(overrides);
        }

        let mut request = self
            .client
            .request(method, &url)
            .headers(merged)
            .timeout(self.timeout);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                error!(url = %url, error = %e, timeout = e.is_timeout(), "API request failed");
                return Err(e.into());
            }
        };

        let status = response.status();
        if !status.is_success() {
            let bytes = response.bytes().await.unwrap_or_default();
            let body = ErrorBody::parse(&bytes);
            let err = ApiError::http(status.as_u16(), body.code(), body.message);
            warn!(
                status = status.as_u16(),
                code = err.code().unwrap_or(""),
                "API error: {}",
                err.message()
            );
            return Err(err);
        }

        let data = response.json::<T>().await.map_err(|e| {
            error!(url = %url, error = %e, "Failed to decode API response");
            ApiError::network(format!("Invalid response body: {}", e))
        })?;

        Ok(ApiResponse::ok(data))
    }

    pub async fn get<T>(&self, endpoint: &str, headers: Option<HeaderMap>) -> ApiResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
    {
        self.request::<T, ()>(Method::GET, endpoint, None, headers)
            .await
    }

    pub async fn post<T, B>(
        &self,
        endpoint: &str,
        body: Option<&B>,
        headers: Option<HeaderMap>,
    ) -> ApiResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, endpoint, body, headers).await
    }

    pub async fn put<T, B>(
        &self,
        endpoint: &str,
        body: Option<&B>,
        headers: Option<HeaderMap>,
    ) -> ApiResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::PUT, endpoint, body, headers).await
    }

    /// DELETE, optionally with a JSON body (used by bulk deletes).
    pub async fn delete<T, B>(
        &self,
        endpoint: &str,
        body: Option<&B>,
        headers: Option<HeaderMap>,
    ) -> ApiResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::DELETE, endpoint, body, headers).await
    }
}
