//! Collections API.

use crate::client::WetrocloudClient;
use crate::error::{Error, Result};
use crate::types::{
    ChatCollectionRequest, ChatMessage, CreateCollectionRequest, DeleteCollectionRequest,
    Envelope, QueryCollectionRequest,
};

/// Collections API client.
pub struct CollectionsApi {
    client: WetrocloudClient,
}

impl CollectionsApi {
    pub(crate) fn new(client: WetrocloudClient) -> Self {
        Self { client }
    }

    /// Create a collection, optionally with a caller-chosen ID.
    pub fn create(&self, collection_id: Option<&str>) -> Result<Envelope> {
        let request = CreateCollectionRequest {
            collection_id: collection_id.map(str::to_string),
        };
        self.client
            .post("create collection", "/v1/collection/create/", &request)
    }

    /// List all collections.
    pub fn list_all(&self) -> Result<Envelope> {
        self.client.get("fetch collections", "/v1/collection/all/")
    }

    /// Query a collection.
    ///
    /// `json_schema` and `json_schema_rules` are always sent, as `null` when
    /// not given.
    pub fn query(
        &self,
        collection_id: &str,
        request_query: &str,
        json_schema: Option<&str>,
        json_schema_rules: Option<&str>,
    ) -> Result<Envelope> {
        let request = QueryCollectionRequest {
            collection_id: collection_id.to_string(),
            request_query: request_query.to_string(),
            json_schema: json_schema.map(str::to_string),
            json_schema_rules: json_schema_rules.map(str::to_string),
        };
        self.client
            .post("query collection", "v1/collection/query/", &request)
    }

    /// Chat with a collection.
    ///
    /// `chat_history` is a pre-encoded JSON string and is omitted when `None`.
    pub fn chat(
        &self,
        collection_id: &str,
        message: &str,
        chat_history: Option<&str>,
    ) -> Result<Envelope> {
        let request = ChatCollectionRequest {
            collection_id: collection_id.to_string(),
            message: message.to_string(),
            chat_history: chat_history.map(str::to_string),
        };
        self.client
            .post("chat with collection", "/v1/collection/chat/", &request)
    }

    /// Chat with a collection, encoding the history client-side.
    pub fn chat_with_history(
        &self,
        collection_id: &str,
        message: &str,
        history: &[ChatMessage],
    ) -> Result<Envelope> {
        let encoded =
            serde_json::to_string(history).map_err(|e| Error::encoding("chat_history", &e))?;
        self.chat(collection_id, message, Some(&encoded))
    }

    /// Delete a collection.
    pub fn delete(&self, collection_id: &str) -> Result<Envelope> {
        let request = DeleteCollectionRequest {
            collection_id: collection_id.to_string(),
        };
        self.client
            .delete("delete collection", "/v1/collection/delete/", &request)
    }
}
