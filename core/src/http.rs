//! HTTP transport types and the default blocking transport.
//!
//! # Design
//! Requests and responses are plain data. `PostmanClient` builds an
//! `HttpRequest`, hands it to a `Transport`, and classifies the returned
//! `HttpResponse`; the transport only moves bytes. Keeping the seam as a
//! trait lets tests substitute a canned transport and lets callers bring
//! their own HTTP stack.
//!
//! A transport reads the whole body into the `HttpResponse` before
//! returning, so the underlying connection is released on every path
//! regardless of how the response is later classified.

use std::time::Duration;

use crate::error::ApiError;

/// A GET request described as plain data.
///
/// Lookups never carry a body or query string, so only the URL and headers
/// are modelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
///
/// The body stays raw bytes; decoding it is part of classification, so a
/// body that is not UTF-8 never fails inside the transport.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Executes one request and returns the raw status and body.
///
/// Implementations must not retry and must report non-2xx statuses as data,
/// never as `Err`; `Err` is reserved for failures that produced no response.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Blocking transport backed by a `ureq` agent with a global timeout.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(timeout: Duration) -> Self {
        // Status interpretation belongs to the client, so 4xx/5xx must come
        // back as responses rather than errors.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = self.agent.get(request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let mut response = builder.call()?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .with_config()
            .limit(u64::MAX)
            .read_to_vec()?;

        Ok(HttpResponse { status, body })
    }
}
