use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::services::http::{ApiRequest, ApiResponse, HttpTransport, TransportError, TransportResult};

enum Scripted {
    Respond(ApiResponse),
    Fail(String),
}

/// In-memory transport: records every request and replays scripted answers in order.
/// With nothing scripted it answers `200 {}`.
#[derive(Clone, Default)]
pub(crate) struct RecordingTransport {
    requests: Arc<Mutex<Vec<ApiRequest>>>,
    script: Arc<Mutex<VecDeque<Scripted>>>,
}

impl RecordingTransport {
    pub(crate) fn respond(&self, status: u16, body: &str) {
        self.script.lock().unwrap().push_back(Scripted::Respond(ApiResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub(crate) fn fail(&self, message: &str) {
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted::Fail(message.to_string()));
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    fn backend_name(&self) -> &'static str {
        "recording"
    }

    async fn send(&self, request: ApiRequest) -> TransportResult<ApiResponse> {
        self.requests.lock().unwrap().push(request);
        match self.script.lock().unwrap().pop_front() {
            Some(Scripted::Respond(response)) => Ok(response),
            Some(Scripted::Fail(message)) => Err(TransportError::Connect(message)),
            None => Ok(ApiResponse {
                status: 200,
                body: "{}".to_string(),
            }),
        }
    }
}
