//! Test doubles shared by the unit tests.

use std::sync::Mutex;

use async_trait::async_trait;
use prometheus::{Counter, Gauge, Opts, Registry};
use pushgateway_common::PushMethod;

use crate::error::TransportError;
use crate::http::{HttpClient, HttpResponse, RequestOptions};

/// A request seen by [`RecordingHttpClient`].
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: PushMethod,
    pub url: String,
    pub options: RequestOptions,
}

enum Reply {
    Response(HttpResponse),
    Fail(String),
}

/// [`HttpClient`] that records every request and answers with a canned reply.
pub struct RecordingHttpClient {
    reply: Reply,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingHttpClient {
    pub fn with_status(status: u16) -> Self {
        Self::with_response(status, "")
    }

    pub fn with_response(status: u16, body: &str) -> Self {
        Self {
            reply: Reply::Response(HttpResponse {
                status,
                body: body.to_string(),
            }),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Reply::Fail(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for RecordingHttpClient {
    async fn request(
        &self,
        method: PushMethod,
        url: &str,
        options: RequestOptions,
    ) -> Result<HttpResponse, TransportError> {
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            url: url.to_string(),
            options,
        });

        match &self.reply {
            Reply::Response(response) => Ok(response.clone()),
            Reply::Fail(message) => Err(TransportError::custom(message.clone())),
        }
    }
}

/// Registry with one counter and one gauge, as a batch job would have.
pub fn sample_registry() -> Registry {
    let registry = Registry::new();

    let rows = Counter::with_opts(Opts::new("rows_processed", "Rows processed by the job")).unwrap();
    rows.inc_by(42.0);
    let last_success = Gauge::new("last_success_seconds", "Unix time of the last success").unwrap();
    last_success.set(1_700_000_000.0);

    registry.register(Box::new(rows)).unwrap();
    registry.register(Box::new(last_success)).unwrap();
    registry
}
