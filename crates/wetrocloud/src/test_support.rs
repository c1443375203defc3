//! In-memory transport for unit tests.

use std::sync::{Arc, Mutex};

use crate::transport::{HttpRequest, HttpResponse, Transport, TransportError};

/// Records every request and answers with a canned response or failure.
pub(crate) struct RecordingTransport {
    requests: Mutex<Vec<HttpRequest>>,
    outcome: Result<(u16, String), String>,
}

impl RecordingTransport {
    pub(crate) fn ok(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            outcome: Ok((status, body.to_string())),
        })
    }

    pub(crate) fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            outcome: Err(message.to_string()),
        })
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

impl Transport for RecordingTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.outcome {
            Ok((status, body)) => Ok(HttpResponse {
                status: *status,
                body: body.clone(),
            }),
            Err(message) => Err(TransportError::new(message.clone())),
        }
    }
}
