//! Client error types.

use thiserror::Error;

/// Client error type.
///
/// HTTP error statuses are not represented here: a 4xx/5xx response whose
/// body is a JSON object is returned to the caller like any other envelope.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid client configuration (empty API key, unparseable base URL).
    #[error("Configuration error: {0}")]
    Config(String),

    /// The HTTP transport could not complete the request.
    #[error("failed to {operation}: {message}")]
    Transport {
        /// What the client was trying to do, e.g. "create collection".
        operation: String,
        /// Message reported by the transport.
        message: String,
    },

    /// The response body was not a JSON object.
    #[error("invalid API response: expected JSON object, got {body}")]
    ResponseShape {
        /// Raw response body text.
        body: String,
    },

    /// An input value could not be JSON-encoded before sending.
    #[error("failed to encode {field}: {message}")]
    Encoding {
        /// Name of the request field being encoded.
        field: String,
        /// Serializer error message.
        message: String,
    },
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a transport error for the given operation.
    pub fn transport(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Create a response-shape error carrying the raw body.
    pub fn response_shape(body: impl Into<String>) -> Self {
        Self::ResponseShape { body: body.into() }
    }

    /// Create an encoding error for the given field.
    pub fn encoding(field: impl Into<String>, err: &serde_json::Error) -> Self {
        Self::Encoding {
            field: field.into(),
            message: err.to_string(),
        }
    }

    /// Check if this is a configuration error.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }

    /// Check if this is a transport failure.
    pub fn is_transport_error(&self) -> bool {
        matches!(self, Error::Transport { .. })
    }

    /// Check if the response body could not be decoded into an envelope.
    pub fn is_response_shape_error(&self) -> bool {
        matches!(self, Error::ResponseShape { .. })
    }

    /// Check if an input could not be encoded.
    pub fn is_encoding_error(&self) -> bool {
        matches!(self, Error::Encoding { .. })
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;
