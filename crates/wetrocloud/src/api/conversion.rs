//! Conversion API: markdown conversion and transcripts.

use crate::client::WetrocloudClient;
use crate::error::Result;
use crate::types::{
    Envelope, MarkdownRequest, MarkdownResourceType, TranscriptRequest, TranscriptSource,
};

/// Conversion API client.
pub struct ConversionApi {
    client: WetrocloudClient,
}

impl ConversionApi {
    pub(crate) fn new(client: WetrocloudClient) -> Self {
        Self { client }
    }

    /// Convert a file, web page or image to markdown.
    pub fn markdown(&self, link: &str, resource_type: MarkdownResourceType) -> Result<Envelope> {
        let request = MarkdownRequest {
            link: link.to_string(),
            resource_type,
        };
        self.client
            .post("convert to markdown", "/v2/markdown-converter/", &request)
    }

    /// Extract a YouTube transcript.
    pub fn transcript(&self, link: &str) -> Result<Envelope> {
        self.transcript_from(link, TranscriptSource::default())
    }

    /// Extract a transcript from the given source.
    pub fn transcript_from(&self, link: &str, source: TranscriptSource) -> Result<Envelope> {
        let request = TranscriptRequest {
            link: link.to_string(),
            resource_type: source,
        };
        self.client
            .post("fetch transcript", "/v2/transcript/", &request)
    }
}
