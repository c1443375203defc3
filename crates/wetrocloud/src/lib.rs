//! Blocking HTTP client SDK for the Wetrocloud API.
//!
//! This crate wraps the Wetrocloud REST API: collection management, resource
//! ingestion, semantic query and chat, categorization, text generation,
//! image-to-text, markdown conversion and transcript extraction.
//!
//! Every operation returns the response body decoded as a JSON object
//! ([`Envelope`]). HTTP error statuses are not turned into errors; inspect
//! the envelope's `success` field instead.
//!
//! # Example
//!
//! ```no_run
//! use wetrocloud::{ChatMessage, MarkdownResourceType, Result, WetrocloudClient};
//!
//! # fn example() -> Result<()> {
//! let client = WetrocloudClient::builder()
//!     .api_key("my-api-key")
//!     .build()?;
//!
//! // Collections
//! client.collections().create(Some("research"))?;
//! client
//!     .resources()
//!     .insert("research", "https://example.com/paper", "web")?;
//! let reply = client
//!     .collections()
//!     .chat("research", "Summarize the paper", None)?;
//! println!("{:?}", reply.get("response"));
//!
//! // Text generation
//! let messages = [ChatMessage::user("Write a haiku about Rust")];
//! let generated = client.generation().text(&messages, "gpt-4o-mini")?;
//!
//! // Conversion
//! let markdown = client
//!     .conversion()
//!     .markdown("https://example.com", MarkdownResourceType::Web)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! - [`Error::Config`]: empty API key or invalid base URL, at construction.
//! - [`Error::Transport`]: the request never produced a response.
//! - [`Error::ResponseShape`]: the body was not a JSON object.
//! - [`Error::Encoding`]: an input could not be JSON-encoded; nothing is sent.

pub mod api;
pub mod client;
pub mod error;
pub mod transport;
pub mod types;

#[cfg(test)]
mod test_support;

pub use client::{API_KEY_ENV, BASE_URL_ENV, ClientBuilder, DEFAULT_BASE_URL, WetrocloudClient};
pub use error::{Error, Result};
pub use transport::{
    HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, RequestBody, Transport,
    TransportError,
};
pub use types::*;
