//! Generation API: text generation and image-to-text.

use crate::client::WetrocloudClient;
use crate::error::{Error, Result};
use crate::types::{Envelope, ImageToTextRequest};

/// Generation API client.
pub struct GenerationApi {
    client: WetrocloudClient,
}

impl GenerationApi {
    pub(crate) fn new(client: WetrocloudClient) -> Self {
        Self { client }
    }

    /// Generate text from a list of messages.
    ///
    /// The endpoint takes form fields rather than JSON: `messages` carries the
    /// JSON-encoded message list and `model` the model identifier. Encoding
    /// failures are reported before anything is sent.
    pub fn text<M>(&self, messages: &M, model: &str) -> Result<Envelope>
    where
        M: serde::Serialize + ?Sized,
    {
        let encoded =
            serde_json::to_string(messages).map_err(|e| Error::encoding("messages", &e))?;

        let fields = vec![
            ("messages".to_string(), encoded),
            ("model".to_string(), model.to_string()),
        ];
        self.client
            .post_multipart("generate text", "/v1/text-generation/", fields)
    }

    /// Answer a question about an image.
    pub fn image_to_text(&self, image_url: &str, request_query: &str) -> Result<Envelope> {
        let request = ImageToTextRequest {
            image_url: image_url.to_string(),
            request_query: request_query.to_string(),
        };
        self.client
            .post("extract text from image", "/v1/image-to-text/", &request)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::Arc;

    use serde_json::json;

    use crate::test_support::RecordingTransport;
    use crate::transport::HttpMethod;
    use crate::{ChatMessage, WetrocloudClient};

    fn client(transport: Arc<RecordingTransport>) -> WetrocloudClient {
        WetrocloudClient::builder()
            .api_key("test-api-key")
            .base_url("http://localhost:8080")
            .transport(transport)
            .build()
            .unwrap()
    }

    #[test]
    fn test_text_generation_sends_multipart_fields() {
        let transport = RecordingTransport::ok(200, r#"{"success": true, "response": "hello"}"#);
        let messages = vec![ChatMessage::user("hi")];
        let result = client(transport.clone())
            .generation()
            .text(&messages, "m1")
            .unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, "http://localhost:8080/v1/text-generation/");

        let fields = request.body.as_multipart().unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].0, "messages");
        let decoded: serde_json::Value = serde_json::from_str(&fields[0].1).unwrap();
        assert_eq!(decoded, json!([{"role": "user", "content": "hi"}]));
        assert_eq!(fields[1], ("model".to_string(), "m1".to_string()));

        assert_eq!(result.get("response"), Some(&json!("hello")));
    }

    #[test]
    fn test_text_generation_accepts_raw_json() {
        let transport = RecordingTransport::ok(200, r#"{"success": true}"#);
        let messages = json!([{"role": "user", "content": "hi"}]);
        client(transport.clone())
            .generation()
            .text(&messages, "m1")
            .unwrap();

        let fields = transport.last_request().body.as_multipart().unwrap().to_vec();
        let decoded: serde_json::Value = serde_json::from_str(&fields[0].1).unwrap();
        assert_eq!(decoded, messages);
    }

    #[test]
    fn test_text_generation_encoding_failure_sends_nothing() {
        let transport = RecordingTransport::ok(200, r#"{"success": true}"#);
        let mut messages = BTreeMap::new();
        messages.insert((1, 2), "non-string key");

        let err = client(transport.clone())
            .generation()
            .text(&messages, "m1")
            .unwrap_err();

        assert!(err.is_encoding_error());
        assert!(err.to_string().contains("messages"));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn test_image_to_text() {
        let transport = RecordingTransport::ok(200, r#"{"success": true}"#);
        client(transport.clone())
            .generation()
            .image_to_text("https://example.com/cat.png", "What animal is this?")
            .unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, "http://localhost:8080/v1/image-to-text/");
        assert_eq!(
            request.body.as_json(),
            Some(&json!({
                "image_url": "https://example.com/cat.png",
                "request_query": "What animal is this?"
            }))
        );
    }
}
