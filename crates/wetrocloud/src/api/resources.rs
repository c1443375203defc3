//! Resources API.

use crate::client::WetrocloudClient;
use crate::error::Result;
use crate::types::{CategorizeRequest, Envelope, InsertResourceRequest, RemoveResourceRequest};

/// Resources API client.
pub struct ResourcesApi {
    client: WetrocloudClient,
}

impl ResourcesApi {
    pub(crate) fn new(client: WetrocloudClient) -> Self {
        Self { client }
    }

    /// Insert a resource into a collection.
    pub fn insert(&self, collection_id: &str, resource: &str, resource_type: &str) -> Result<Envelope> {
        let request = InsertResourceRequest {
            collection_id: collection_id.to_string(),
            resource: resource.to_string(),
            resource_type: resource_type.to_string(),
        };
        self.client
            .post("insert resource", "/v1/resource/insert/", &request)
    }

    /// Remove a resource from a collection.
    pub fn remove(&self, collection_id: &str, resource_id: &str) -> Result<Envelope> {
        let request = RemoveResourceRequest {
            collection_id: collection_id.to_string(),
            resource_id: resource_id.to_string(),
        };
        self.client
            .delete("remove resource", "/v1/resource/remove/", &request)
    }

    /// Categorize a resource against a comma-separated list of categories.
    pub fn categorize(&self, request: CategorizeRequest) -> Result<Envelope> {
        self.client
            .post("categorize resource", "/v1/categorize/", &request)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use crate::test_support::RecordingTransport;
    use crate::transport::HttpMethod;
    use crate::{CategorizeRequest, WetrocloudClient};

    fn client(transport: Arc<RecordingTransport>) -> WetrocloudClient {
        WetrocloudClient::builder()
            .api_key("test-api-key")
            .base_url("http://localhost:8080")
            .transport(transport)
            .build()
            .unwrap()
    }

    #[test]
    fn test_insert() {
        let transport = RecordingTransport::ok(
            200,
            r#"{"success": true, "resource_id": "resource-123"}"#,
        );
        let result = client(transport.clone())
            .resources()
            .insert("test-collection", "Sample document content", "text")
            .unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, "http://localhost:8080/v1/resource/insert/");
        assert_eq!(
            request.body.as_json(),
            Some(&json!({
                "collection_id": "test-collection",
                "resource": "Sample document content",
                "type": "text"
            }))
        );
        assert_eq!(result.get("resource_id"), Some(&json!("resource-123")));
    }

    #[test]
    fn test_remove_uses_delete_with_body() {
        let transport = RecordingTransport::ok(200, r#"{"success": true}"#);
        client(transport.clone())
            .resources()
            .remove("c1", "r1")
            .unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(request.url, "http://localhost:8080/v1/resource/remove/");
        assert_eq!(
            request.body.as_json(),
            Some(&json!({"collection_id": "c1", "resource_id": "r1"}))
        );
    }

    #[test]
    fn test_categorize() {
        let transport = RecordingTransport::ok(
            200,
            r#"{"success": true, "response": {"label": "sports"}}"#,
        );
        let result = client(transport.clone())
            .resources()
            .categorize(CategorizeRequest {
                resource: "match report".to_string(),
                resource_type: "text".to_string(),
                json_schema: r#"{"label": "string"}"#.to_string(),
                categories: "sports,politics".to_string(),
                prompt: "Pick one".to_string(),
            })
            .unwrap();

        let request = transport.last_request();
        assert_eq!(request.url, "http://localhost:8080/v1/categorize/");
        assert_eq!(
            request.body.as_json(),
            Some(&json!({
                "resource": "match report",
                "type": "text",
                "json_schema": r#"{"label": "string"}"#,
                "categories": "sports,politics",
                "prompt": "Pick one"
            }))
        );
        assert_eq!(result["response"]["label"], "sports");
    }

    #[test]
    fn test_invalid_body_is_shape_error() {
        let transport = RecordingTransport::ok(500, "Internal Server Error");
        let err = client(transport)
            .resources()
            .insert("c1", "r", "text")
            .unwrap_err();
        assert!(err.is_response_shape_error());
        assert!(err.to_string().contains("Internal Server Error"));
    }
}
