//! Request and response types for the Wetrocloud API.
//!
//! Request structs mirror the wire payloads exactly. Fields that the API
//! expects to be omitted when absent use `skip_serializing_if`; fields the
//! API expects as explicit `null` are plain `Option`s.

use serde::{Deserialize, Serialize};

/// Decoded response body: always a JSON object.
pub type Envelope = serde_json::Map<String, serde_json::Value>;

// ─────────────────────────────────────────────────────────────────────────────
// Collections
// ─────────────────────────────────────────────────────────────────────────────

/// Request to create a collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCollectionRequest {
    /// Optional caller-chosen collection ID. Omitted when `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,
}

/// Request to query a collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryCollectionRequest {
    pub collection_id: String,
    pub request_query: String,
    /// Sent as `null` when `None`.
    pub json_schema: Option<String>,
    /// Sent as `null` when `None`.
    pub json_schema_rules: Option<String>,
}

/// Request to chat with a collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCollectionRequest {
    pub collection_id: String,
    pub message: String,
    /// JSON-encoded chat history. Omitted when `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_history: Option<String>,
}

/// Request to delete a collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteCollectionRequest {
    pub collection_id: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Resources
// ─────────────────────────────────────────────────────────────────────────────

/// Request to insert a resource into a collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertResourceRequest {
    pub collection_id: String,
    pub resource: String,
    /// Resource kind, e.g. "web", "file", "text".
    #[serde(rename = "type")]
    pub resource_type: String,
}

/// Request to remove a resource from a collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveResourceRequest {
    pub collection_id: String,
    pub resource_id: String,
}

/// Request to categorize a resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorizeRequest {
    pub resource: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub json_schema: String,
    /// Comma-separated list of candidate categories.
    pub categories: String,
    /// Overall instruction for the categorization.
    pub prompt: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Generation
// ─────────────────────────────────────────────────────────────────────────────

/// A single chat message for text generation or chat history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new("assistant", content)
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }
}

/// Request to describe an image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageToTextRequest {
    pub image_url: String,
    pub request_query: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversion
// ─────────────────────────────────────────────────────────────────────────────

/// Kind of resource handed to the markdown converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkdownResourceType {
    File,
    Web,
    Image,
}

impl MarkdownResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkdownResourceType::File => "file",
            MarkdownResourceType::Web => "web",
            MarkdownResourceType::Image => "image",
        }
    }
}

impl std::str::FromStr for MarkdownResourceType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "file" => Ok(Self::File),
            "web" => Ok(Self::Web),
            "image" => Ok(Self::Image),
            other => Err(format!(
                "unknown resource type '{}' (expected file, web or image)",
                other
            )),
        }
    }
}

/// Source of a transcript.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptSource {
    #[default]
    Youtube,
}

/// Request to convert a resource to markdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkdownRequest {
    pub link: String,
    pub resource_type: MarkdownResourceType,
}

/// Request to extract a transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptRequest {
    pub link: String,
    #[serde(default)]
    pub resource_type: TranscriptSource,
}
