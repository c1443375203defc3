//! Main client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::HeaderValue;
use serde_json::Value;
use url::Url;

use crate::api::{CollectionsApi, ConversionApi, GenerationApi, ResourcesApi};
use crate::error::{Error, Result};
use crate::transport::{HttpMethod, HttpRequest, ReqwestTransport, RequestBody, Transport};
use crate::types::Envelope;

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.wetrocloud.com";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "WETROCLOUD_API_KEY";

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "WETROCLOUD_BASE_URL";

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Wetrocloud API client.
///
/// Every operation blocks until the remote service answers (or the 30 second
/// timeout expires) and returns the decoded JSON object unchanged. The client
/// does not interpret `success` fields or HTTP status codes; that is left to
/// the caller.
///
/// Cloning is cheap and clones share one connection pool.
///
/// # Example
///
/// ```no_run
/// use wetrocloud::WetrocloudClient;
///
/// # fn example() -> wetrocloud::Result<()> {
/// let client = WetrocloudClient::new("my-api-key")?;
///
/// let created = client.collections().create(Some("docs"))?;
/// println!("{:?}", created.get("collection_id"));
///
/// client
///     .resources()
///     .insert("docs", "https://example.com/guide", "web")?;
///
/// let answer = client
///     .collections()
///     .query("docs", "What does the guide cover?", None, None)?;
/// println!("{}", serde_json::Value::Object(answer));
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct WetrocloudClient {
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
struct ClientInner {
    transport: Arc<dyn Transport>,
    base_url: String,
    timeout: Duration,
    /// Headers attached to every request.
    headers: Vec<(String, String)>,
}

impl std::fmt::Debug for WetrocloudClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WetrocloudClient")
            .field("base_url", &self.inner.base_url)
            .field("timeout", &self.inner.timeout)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl WetrocloudClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client for the production endpoint.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// Create a client for a custom endpoint.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).base_url(base_url).build()
    }

    /// Create a client from `WETROCLOUD_API_KEY` and, if set,
    /// `WETROCLOUD_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup(API_KEY_ENV)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| Error::config(format!("{} is not set", API_KEY_ENV)))?;

        let mut builder = Self::builder().api_key(api_key);
        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            builder = builder.base_url(base_url);
        }
        builder.build()
    }

    /// Get the base URL (never ends with `/`).
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Get the request timeout.
    pub fn timeout(&self) -> Duration {
        self.inner.timeout
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the collections API.
    pub fn collections(&self) -> CollectionsApi {
        CollectionsApi::new(self.clone())
    }

    /// Access the resources API (insert, remove, categorize).
    pub fn resources(&self) -> ResourcesApi {
        ResourcesApi::new(self.clone())
    }

    /// Access the generation API (text generation, image-to-text).
    pub fn generation(&self) -> GenerationApi {
        GenerationApi::new(self.clone())
    }

    /// Access the conversion API (markdown, transcripts).
    pub fn conversion(&self) -> ConversionApi {
        ConversionApi::new(self.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Request/response layer
    // ─────────────────────────────────────────────────────────────────────────

    /// Build an absolute URL for an API path.
    ///
    /// Leading slashes on `path` are optional.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.inner.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request.
    pub(crate) fn get(&self, operation: &str, path: &str) -> Result<Envelope> {
        self.execute(operation, HttpMethod::Get, path, RequestBody::Empty)
    }

    /// Make a POST request with a JSON body.
    pub(crate) fn post<B>(&self, operation: &str, path: &str, body: &B) -> Result<Envelope>
    where
        B: serde::Serialize + ?Sized,
    {
        let body = json_body(body)?;
        self.execute(operation, HttpMethod::Post, path, body)
    }

    /// Make a DELETE request with a JSON body.
    pub(crate) fn delete<B>(&self, operation: &str, path: &str, body: &B) -> Result<Envelope>
    where
        B: serde::Serialize + ?Sized,
    {
        let body = json_body(body)?;
        self.execute(operation, HttpMethod::Delete, path, body)
    }

    /// Make a POST request with named multipart text fields.
    pub(crate) fn post_multipart(
        &self,
        operation: &str,
        path: &str,
        fields: Vec<(String, String)>,
    ) -> Result<Envelope> {
        self.execute(operation, HttpMethod::Post, path, RequestBody::Multipart(fields))
    }

    /// Send a request and decode the response envelope.
    ///
    /// `operation` describes the call in transport error messages
    /// ("failed to <operation>: ..."). This is the single entry point every
    /// typed operation goes through and can be used directly for endpoints
    /// without a wrapper.
    pub fn execute(
        &self,
        operation: &str,
        method: HttpMethod,
        path: &str,
        body: RequestBody,
    ) -> Result<Envelope> {
        let request = self.build_request(method, path, body);

        tracing::debug!(
            operation,
            method = %request.method,
            url = %request.url,
            body = request.body.mode(),
            "sending Wetrocloud request"
        );

        let response = self.inner.transport.send(&request).map_err(|e| {
            tracing::warn!(operation, url = %request.url, error = %e, "request failed");
            Error::transport(operation, e.to_string())
        })?;

        tracing::debug!(
            operation,
            status = response.status,
            bytes = response.body.len(),
            "received Wetrocloud response"
        );

        decode_envelope(response.body)
    }

    fn build_request(&self, method: HttpMethod, path: &str, body: RequestBody) -> HttpRequest {
        let mut headers = self.inner.headers.clone();
        // Multipart bodies carry their own boundary-bearing content type.
        if !matches!(body, RequestBody::Multipart(_)) {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }

        HttpRequest {
            method,
            url: self.url(path),
            headers,
            body,
        }
    }
}

/// Serialize a request payload into a JSON body.
fn json_body<B>(body: &B) -> Result<RequestBody>
where
    B: serde::Serialize + ?Sized,
{
    serde_json::to_value(body)
        .map(RequestBody::Json)
        .map_err(|e| Error::encoding("request body", &e))
}

/// Decode a response body into an envelope.
///
/// The body must be a JSON object; arrays, scalars, `null` and unparseable
/// text are rejected with the raw body attached.
pub(crate) fn decode_envelope(body: String) -> Result<Envelope> {
    match serde_json::from_str::<Value>(&body) {
        Ok(Value::Object(map)) => Ok(map),
        _ => Err(Error::response_shape(body)),
    }
}

/// Builder for creating a WetrocloudClient.
pub struct ClientBuilder {
    api_key: Option<String>,
    base_url: String,
    timeout: Duration,
    user_agent: Option<String>,
    transport: Option<Arc<dyn Transport>>,
}

impl std::fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("custom_transport", &self.transport.is_some())
            .finish_non_exhaustive()
    }
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
            transport: None,
        }
    }

    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the base URL for the API.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Only applies to the default transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Use a custom transport instead of the default reqwest one.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<WetrocloudClient> {
        let api_key = self
            .api_key
            .ok_or_else(|| Error::config("API key is required"))?;
        if api_key.trim().is_empty() {
            return Err(Error::config("API key cannot be empty"));
        }

        let authorization = format!("Token {}", api_key);
        HeaderValue::from_str(&authorization)
            .map_err(|_| Error::config("API key contains invalid header characters"))?;

        let base_url = self.base_url.trim_end_matches('/').to_string();
        let parsed = Url::parse(&base_url)
            .map_err(|e| Error::config(format!("invalid base URL '{}': {}", base_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "base URL must use http or https, got '{}'",
                parsed.scheme()
            )));
        }

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("wetrocloud-rust/{}", env!("CARGO_PKG_VERSION")));

        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(
                ReqwestTransport::new(self.timeout)
                    .map_err(|e| Error::config(e.to_string()))?,
            ),
        };

        let headers = vec![
            ("Authorization".to_string(), authorization),
            ("Accept".to_string(), "application/json".to_string()),
            ("User-Agent".to_string(), user_agent),
        ];

        tracing::info!(
            base_url = %base_url,
            timeout_secs = self.timeout.as_secs(),
            "created Wetrocloud client"
        );

        Ok(WetrocloudClient {
            inner: Arc::new(ClientInner {
                transport,
                base_url,
                timeout: self.timeout,
                headers,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
