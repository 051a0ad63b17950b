use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const API_KEY_HEADER: &str = "x-api-key";

/// The `{"error": {...}}` body Postman sends with its documented error statuses.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub name: String,
    pub message: String,
}

#[derive(Clone, Debug)]
struct Canned {
    status: StatusCode,
    body: Vec<u8>,
}

/// Read-only stand-in for the Postman API, keyed by `(resource, id)`.
#[derive(Clone, Debug, Default)]
pub struct MockApi {
    api_key: String,
    entries: HashMap<(String, String), Canned>,
}

impl MockApi {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            entries: HashMap::new(),
        }
    }

    /// Serve `workspace` as `{"workspace": ...}` under its own `id`.
    pub fn with_workspace(self, workspace: Value) -> Self {
        self.with_entity("workspaces", "workspace", workspace)
    }

    /// Serve `environment` as `{"environment": ...}` under its own `id`.
    pub fn with_environment(self, environment: Value) -> Self {
        self.with_entity("environments", "environment", environment)
    }

    /// Serve an arbitrary status and raw body for `/<resource>/<id>`. The body
    /// is sent byte for byte and need not be UTF-8.
    pub fn with_response(
        mut self,
        resource: &str,
        id: &str,
        status: u16,
        body: impl Into<Vec<u8>>,
    ) -> Self {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        self.entries.insert(
            (resource.to_string(), id.to_string()),
            Canned {
                status,
                body: body.into(),
            },
        );
        self
    }

    fn with_entity(self, resource: &str, envelope: &str, entity: Value) -> Self {
        let id = entity["id"].as_str().unwrap_or_default().to_string();
        let mut body = serde_json::Map::new();
        body.insert(envelope.to_string(), entity);
        self.with_response(resource, &id, 200, Value::Object(body).to_string())
    }

    /// A workspace with two environments, used by the standalone binary.
    pub fn sample(api_key: impl Into<String>) -> Self {
        Self::new(api_key)
            .with_workspace(json!({
                "id": "ws-demo",
                "name": "Demo Workspace",
                "type": "team",
                "description": "Seeded by mock-server",
                "collections": [{ "id": "col-1", "name": "Orders API", "uid": "u1-col-1" }],
                "environments": [
                    { "id": "env-prod", "name": "Production", "uid": "u1-env-prod" },
                    { "id": "env-dev", "name": "Development", "uid": "u1-env-dev" }
                ]
            }))
            .with_environment(json!({
                "id": "env-prod",
                "name": "Production",
                "owner": "u1",
                "createdAt": "2024-01-10T09:00:00.000Z",
                "updatedAt": "2024-03-02T17:30:00.000Z",
                "values": [
                    { "key": "HOST", "value": "api.example.com", "enabled": true },
                    { "key": "PORT", "value": 443, "enabled": true },
                    { "key": "DEBUG", "value": false, "enabled": false }
                ],
                "isPublic": false
            }))
            .with_environment(json!({
                "id": "env-dev",
                "name": "Development",
                "owner": "u1",
                "createdAt": "2024-01-10T09:00:00.000Z",
                "updatedAt": "2024-01-10T09:00:00.000Z",
                "values": [
                    { "key": "HOST", "value": "localhost", "enabled": true },
                    { "key": "TOKEN", "value": null, "enabled": false }
                ],
                "isPublic": false
            }))
    }
}

pub fn app(api: MockApi) -> Router {
    Router::new()
        .route("/{resource}/{id}", get(lookup))
        .fallback(unknown_route)
        .with_state(Arc::new(api))
}

pub async fn run(listener: TcpListener, api: MockApi) -> Result<(), std::io::Error> {
    axum::serve(listener, app(api)).await
}

async fn lookup(
    State(api): State<Arc<MockApi>>,
    Path((resource, id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Response {
    let key = headers.get(API_KEY_HEADER).and_then(|v| v.to_str().ok());
    if key != Some(api.api_key.as_str()) {
        return error_response(
            StatusCode::UNAUTHORIZED,
            "AuthenticationError",
            "Invalid API Key. Every request requires a valid API Key to be sent.",
        );
    }

    let entity = resource.trim_end_matches('s').to_string();
    match api.entries.get(&(resource, id)) {
        Some(canned) => json_response(canned.status, canned.body.clone()),
        None => error_response(
            StatusCode::NOT_FOUND,
            "instanceNotFoundError",
            &format!("We could not find the {entity} you are looking for"),
        ),
    }
}

async fn unknown_route() -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        "notFound",
        "Requested resource not found",
    )
}

fn error_response(status: StatusCode, name: &str, message: &str) -> Response {
    let body = json!({ "error": { "name": name, "message": message } });
    json_response(status, body.to_string().into_bytes())
}

fn json_response(status: StatusCode, body: Vec<u8>) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}
