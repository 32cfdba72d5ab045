//! Search service client

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::ApiError;
use crate::response::SearchResponse;

/// Default path of the search endpoint, relative to the base URL.
pub const DEFAULT_SEARCH_PATH: &str = "/satellites/search";

/// The remote search collaborator.
///
/// One operation: fetch the full record set. Transport-level failures are
/// normalized into [`ApiError`] before they reach the caller; in-band
/// failures travel inside the returned [`SearchResponse`] discriminant.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Fetches the catalog from the remote service.
    async fn search(&self) -> Result<SearchResponse, ApiError>;
}

/// Reqwest-backed client for the satellite search service.
///
/// This client is cheap to clone (uses `Arc` internally) and can be shared
/// across threads safely.
///
/// # Example
///
/// ```ignore
/// use satcat_lib::SatcatClient;
///
/// let client = SatcatClient::builder()
///     .url("https://api.example.com")
///     .build();
///
/// let response = client.search().await?;
/// ```
#[derive(Clone)]
pub struct SatcatClient {
    inner: Arc<SatcatClientInner>,
}

struct SatcatClientInner {
    base_url: String,
    search_path: String,
    http_client: Client,
    timeout: Option<Duration>,
}

impl SatcatClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> SatcatClientBuilder<Missing> {
        SatcatClientBuilder::new()
    }

    /// Fetches the catalog from the search service.
    ///
    /// The body is parsed as a [`SearchResponse`] regardless of HTTP status,
    /// because the service reports failure in-band through the `message`
    /// discriminant. A non-2xx response whose body is not a search payload
    /// becomes [`ApiError::Http`]; an unparseable 2xx body becomes
    /// [`ApiError::Parse`] carrying the raw body.
    pub async fn search(&self) -> Result<SearchResponse, ApiError> {
        let url = format!(
            "{}{}",
            self.inner.base_url.trim_end_matches('/'),
            self.inner.search_path
        );

        log::debug!("fetching satellite catalog from {url}");

        let mut request = self.inner.http_client.get(&url);
        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(ApiError::from)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(ApiError::from)?;

        match serde_json::from_str::<SearchResponse>(&body) {
            Ok(mut parsed) => {
                // A failure payload without its own status inherits the
                // transport status.
                if !parsed.is_success()
                    && parsed.status.is_none()
                    && !(200..300).contains(&status)
                {
                    parsed.status = Some(status);
                }
                Ok(parsed)
            }
            Err(_) if !(200..300).contains(&status) => Err(ApiError::http(status, body)),
            Err(err) => Err(ApiError::parse_with_body(err.to_string(), body)),
        }
    }

    /// Returns the base URL of the search service.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Returns the search endpoint path.
    pub fn search_path(&self) -> &str {
        &self.inner.search_path
    }
}

#[async_trait]
impl SearchProvider for SatcatClient {
    async fn search(&self) -> Result<SearchResponse, ApiError> {
        SatcatClient::search(self).await
    }
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Marker type for missing required builder fields.
pub struct Missing;

/// Marker type for set builder fields.
pub struct Set<T>(T);

/// Builder for constructing a [`SatcatClient`].
///
/// Uses the typestate pattern to ensure the base URL is set at compile time.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use satcat_lib::SatcatClient;
///
/// let client = SatcatClient::builder()
///     .url("https://api.example.com")
///     .search_path("/v2/satellites")
///     .timeout(Duration::from_secs(30))
///     .build();
/// ```
pub struct SatcatClientBuilder<Url> {
    url: Url,
    search_path: String,
    timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl SatcatClientBuilder<Missing> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            url: Missing,
            search_path: DEFAULT_SEARCH_PATH.to_string(),
            timeout: None,
            http_client: None,
        }
    }

    /// Sets the base URL of the search service.
    pub fn url(self, url: impl Into<String>) -> SatcatClientBuilder<Set<String>> {
        SatcatClientBuilder {
            url: Set(url.into()),
            search_path: self.search_path,
            timeout: self.timeout,
            http_client: self.http_client,
        }
    }
}

impl Default for SatcatClientBuilder<Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> SatcatClientBuilder<U> {
    /// Sets the search endpoint path.
    ///
    /// Defaults to [`DEFAULT_SEARCH_PATH`].
    pub fn search_path(mut self, path: impl Into<String>) -> Self {
        self.search_path = path.into();
        self
    }

    /// Sets the request timeout.
    ///
    /// No timeout is enforced unless one is set here.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl SatcatClientBuilder<Set<String>> {
    /// Builds the [`SatcatClient`].
    ///
    /// This method is only available once `url` has been set.
    pub fn build(self) -> SatcatClient {
        SatcatClient {
            inner: Arc::new(SatcatClientInner {
                base_url: self.url.0,
                search_path: self.search_path,
                http_client: self.http_client.unwrap_or_default(),
                timeout: self.timeout,
            }),
        }
    }
}
