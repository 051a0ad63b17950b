//! Synchronous client for the Postman workspace and environment endpoints.
//!
//! # Overview
//! Each lookup composes `<base>/<resource>/<id>`, sends a GET with the
//! `X-API-Key` header, and classifies the response into a decoded value or
//! an `ApiError`.
//!
//! # Design
//! - `PostmanClient` is stateless; it holds only its `ClientConfig` and a
//!   `Transport`, and is safe to share between threads.
//! - One generic `fetch` does the build/execute/classify round trip;
//!   `get_workspace` and `get_environment` are thin wrappers over it.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod types;

pub use client::{compose_url, PostmanClient};
pub use config::ClientConfig;
pub use error::{ApiError, ErrorInfo, ErrorResponse};
pub use http::{HttpRequest, HttpResponse, Transport, UreqTransport};
pub use types::{
    Environment, EnvironmentResponse, EnvironmentVariable, ResourceRef, VariableValue, Workspace,
    WorkspaceResponse,
};
