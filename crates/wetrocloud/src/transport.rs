//! Transport layer for Wetrocloud requests.
//!
//! Requests and responses are plain data so the client can be driven by any
//! HTTP implementation. `ReqwestTransport` is the default, backed by a
//! blocking reqwest client with connection pooling.

use std::time::Duration;

use thiserror::Error;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    /// Method name as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request body encoding.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// No body.
    Empty,
    /// JSON document sent as `application/json`.
    Json(serde_json::Value),
    /// Named text parts sent as `multipart/form-data`, in order.
    Multipart(Vec<(String, String)>),
}

impl RequestBody {
    /// Short label for logging.
    pub fn mode(&self) -> &'static str {
        match self {
            RequestBody::Empty => "empty",
            RequestBody::Json(_) => "json",
            RequestBody::Multipart(_) => "multipart",
        }
    }

    /// Returns the JSON payload, if this is a JSON body.
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            RequestBody::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the multipart fields, if this is a multipart body.
    pub fn as_multipart(&self) -> Option<&[(String, String)]> {
        match self {
            RequestBody::Multipart(fields) => Some(fields),
            _ => None,
        }
    }
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// Absolute URL.
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl HttpRequest {
    /// Look up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// An HTTP response described as plain data.
///
/// Any status code is a valid response; the client inspects only the body.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// The transport could not complete a request.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct TransportError(String);

impl TransportError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// Something that can execute an `HttpRequest`.
///
/// Implementations must return 4xx/5xx responses as `Ok` and reserve `Err`
/// for requests that never produced a response (connection, DNS, TLS,
/// timeout, body read failures).
pub trait Transport: Send + Sync {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Default transport backed by `reqwest::blocking::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    /// Build a transport with the given request timeout.
    ///
    /// Headers, including `User-Agent`, come from each `HttpRequest`.
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        // reqwest only turns 4xx/5xx into errors through `error_for_status`,
        // which is never called here.
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(5)
            .tcp_keepalive(Duration::from_secs(30))
            .build()
            .map_err(|e| TransportError::new(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

impl Transport for ReqwestTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut req = self
            .client
            .request(Self::to_reqwest_method(request.method), &request.url);

        for (key, value) in &request.headers {
            req = req.header(key, value);
        }

        req = match &request.body {
            RequestBody::Empty => req,
            RequestBody::Json(value) => req.json(value),
            RequestBody::Multipart(fields) => {
                let mut form = reqwest::blocking::multipart::Form::new();
                for (name, value) in fields {
                    form = form.text(name.clone(), value.clone());
                }
                req.multipart(form)
            }
        };

        let resp = req.send().map_err(|e| {
            TransportError::new(format!("HTTP request failed: {}", error_chain(&e)))
        })?;

        let status = resp.status().as_u16();
        let body = resp.text().map_err(|e| {
            TransportError::new(format!("failed to read response body: {}", error_chain(&e)))
        })?;

        Ok(HttpResponse { status, body })
    }
}

/// Render an error followed by each of its causes, separated by `": "`.
///
/// reqwest's top-level message only names the URL; the reason (refused,
/// DNS, TLS, timeout) lives further down the source chain.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Error)]
    #[error("{message}")]
    struct Layered {
        message: &'static str,
        #[source]
        source: Option<Box<Layered>>,
    }

    #[test]
    fn test_error_chain_appends_causes() {
        let err = Layered {
            message: "error sending request",
            source: Some(Box::new(Layered {
                message: "tcp connect error",
                source: Some(Box::new(Layered {
                    message: "Connection refused (os error 111)",
                    source: None,
                })),
            })),
        };
        assert_eq!(
            error_chain(&err),
            "error sending request: tcp connect error: Connection refused (os error 111)"
        );
    }

    #[test]
    fn test_error_chain_skips_repeated_text() {
        let err = Layered {
            message: "operation timed out: deadline",
            source: Some(Box::new(Layered {
                message: "deadline",
                source: None,
            })),
        };
        assert_eq!(error_chain(&err), "operation timed out: deadline");
    }

    #[test]
    fn test_method_names() {
        assert_eq!(HttpMethod::Get.as_str(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_body_accessors() {
        let body = RequestBody::Json(json!({"a": 1}));
        assert_eq!(body.mode(), "json");
        assert_eq!(body.as_json(), Some(&json!({"a": 1})));
        assert!(body.as_multipart().is_none());

        let body = RequestBody::Multipart(vec![("model".to_string(), "m1".to_string())]);
        assert_eq!(body.mode(), "multipart");
        assert_eq!(body.as_multipart().map(|f| f.len()), Some(1));
        assert!(RequestBody::Empty.as_json().is_none());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let request = HttpRequest {
            method: HttpMethod::Get,
            url: "http://localhost/".to_string(),
            headers: vec![("Authorization".to_string(), "Token k".to_string())],
            body: RequestBody::Empty,
        };
        assert_eq!(request.header("authorization"), Some("Token k"));
        assert!(request.header("accept").is_none());
    }
}
