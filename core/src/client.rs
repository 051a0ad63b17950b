//! Authenticated lookups against the Postman API.
//!
//! # Design
//! `PostmanClient` holds its configuration and a `Transport` and carries no
//! mutable state between calls, so a single instance can serve concurrent
//! lookups. Every lookup goes through the same three steps:
//! `build_lookup` produces an `HttpRequest`, the transport executes it, and
//! `parse_lookup` classifies the `HttpResponse`. The endpoint methods only
//! pick the resource segment and unwrap the success envelope.

use serde::de::DeserializeOwned;

use crate::config::{ClientConfig, API_KEY_HEADER};
use crate::error::{ApiError, ErrorResponse};
use crate::http::{HttpRequest, HttpResponse, Transport, UreqTransport};
use crate::types::{Environment, EnvironmentResponse, Workspace, WorkspaceResponse};

pub const WORKSPACES: &str = "workspaces";
pub const ENVIRONMENTS: &str = "environments";

/// Statuses for which the API documents an `{"error": {...}}` body.
const ERROR_STATUSES: [u16; 5] = [400, 401, 404, 500, 503];

/// Synchronous, stateless client for the workspace and environment endpoints.
#[derive(Debug, Clone)]
pub struct PostmanClient<T = UreqTransport> {
    config: ClientConfig,
    transport: T,
}

impl PostmanClient<UreqTransport> {
    pub fn new(config: ClientConfig) -> Self {
        let transport = UreqTransport::new(config.timeout);
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> PostmanClient<T> {
    pub fn with_transport(mut config: ClientConfig, transport: T) -> Self {
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn get_workspace(&self, id: &str) -> Result<Workspace, ApiError> {
        self.fetch::<WorkspaceResponse>(WORKSPACES, id)
            .map(|r| r.workspace)
    }

    pub fn get_environment(&self, id: &str) -> Result<Environment, ApiError> {
        self.fetch::<EnvironmentResponse>(ENVIRONMENTS, id)
            .map(|r| r.environment)
    }

    /// Fetch `<base>/<resource>/<id>` and decode a `200` body as `O`.
    pub fn fetch<O: DeserializeOwned>(&self, resource: &str, id: &str) -> Result<O, ApiError> {
        let request = self.build_lookup(resource, id);
        tracing::debug!(url = %request.url, "GET");
        let response = self.transport.execute(&request)?;
        self.parse_lookup(response)
    }

    pub fn build_lookup(&self, resource: &str, id: &str) -> HttpRequest {
        HttpRequest {
            url: compose_url(&self.config.base_url, resource, id),
            headers: vec![(API_KEY_HEADER.to_string(), self.config.api_key.clone())],
        }
    }

    /// Classify a lookup response by status code.
    ///
    /// `200` decodes the body as `O`; documented error statuses decode the
    /// body as an `ErrorResponse`; any other status is rejected without
    /// reading the body.
    pub fn parse_lookup<O: DeserializeOwned>(&self, response: HttpResponse) -> Result<O, ApiError> {
        tracing::debug!(status = response.status, "response");
        match response.status {
            200 => serde_json::from_slice(&response.body).map_err(ApiError::Deserialization),
            status if ERROR_STATUSES.contains(&status) => {
                let ErrorResponse { error } =
                    serde_json::from_slice(&response.body).map_err(ApiError::Deserialization)?;
                tracing::warn!(status, name = %error.name, "api error: {}", error.message);
                Err(ApiError::Remote { status, error })
            }
            status => {
                tracing::warn!(status, "unexpected status");
                Err(ApiError::UnexpectedStatus(status))
            }
        }
    }
}

/// Join `resource` and `id` under `base_url`, escaping each segment on its
/// own so that a `/` inside either never acts as a separator.
pub fn compose_url(base_url: &str, resource: &str, id: &str) -> String {
    format!(
        "{}/{}/{}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(resource),
        urlencoding::encode(id)
    )
}
