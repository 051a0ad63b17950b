//! Response DTOs for the workspace and environment endpoints.
//!
//! # Design
//! These types mirror the remote JSON and nothing more. Success bodies are
//! wrapped in a single-key envelope (`{"workspace": ...}`,
//! `{"environment": ...}`); the envelope types exist so the generic lookup can
//! decode the body in one step and the endpoint methods can unwrap it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lightweight reference to an entity that belongs to a workspace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResourceRef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
}

/// A Postman workspace and the entities it groups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Workspace {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub collections: Vec<ResourceRef>,
    #[serde(default)]
    pub environments: Vec<ResourceRef>,
    #[serde(default)]
    pub mocks: Vec<ResourceRef>,
    #[serde(default)]
    pub monitors: Vec<ResourceRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkspaceResponse {
    pub workspace: Workspace,
}

/// A Postman environment: a named, ordered set of variables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    pub id: String,
    pub name: String,
    pub owner: String,
    pub created_at: String,
    pub updated_at: String,
    pub values: Vec<EnvironmentVariable>,
    pub is_public: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnvironmentResponse {
    pub environment: Environment,
}

/// One `key`/`value` entry of an environment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnvironmentVariable {
    pub key: String,
    #[serde(default)]
    pub value: VariableValue,
    pub enabled: bool,
}

/// The JSON scalar stored in a variable. The API does not constrain its type.
///
/// Numbers go through `serde_json::Number`, so integers that fit in
/// `u64`/`i64` stay exact while anything else becomes an `f64`: `1.50` reads
/// back as `1.5` and integers past `u64::MAX` lose precision.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum VariableValue {
    #[default]
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
}

impl VariableValue {
    pub fn is_null(&self) -> bool {
        matches!(self, VariableValue::Null)
    }
}

/// Strings print without quotes; everything else prints as its JSON literal.
impl fmt::Display for VariableValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableValue::Null => f.write_str("null"),
            VariableValue::Bool(b) => write!(f, "{b}"),
            VariableValue::Number(n) => write!(f, "{n}"),
            VariableValue::String(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_values(json: &str) -> Vec<EnvironmentVariable> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn workspace_reference_lists_default_to_empty() {
        let ws: Workspace = serde_json::from_str(
            r#"{"id":"w1","name":"Team","type":"team","description":"Shared"}"#,
        )
        .unwrap();
        assert_eq!(ws.kind, "team");
        assert_eq!(ws.description.as_deref(), Some("Shared"));
        assert!(ws.collections.is_empty());
        assert!(ws.environments.is_empty());
        assert!(ws.mocks.is_empty());
        assert!(ws.monitors.is_empty());
    }

    #[test]
    fn workspace_accepts_null_description() {
        let ws: Workspace =
            serde_json::from_str(r#"{"id":"w1","name":"Mine","type":"personal","description":null}"#)
                .unwrap();
        assert!(ws.description.is_none());
    }

    #[test]
    fn workspace_requires_name() {
        let result: Result<Workspace, _> = serde_json::from_str(r#"{"id":"w1","type":"team"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn resource_ref_name_and_uid_are_optional() {
        let r: ResourceRef = serde_json::from_str(r#"{"id":"e1"}"#).unwrap();
        assert_eq!(r.id, "e1");
        assert!(r.name.is_none());
        assert!(r.uid.is_none());
    }

    #[test]
    fn variable_values_cover_every_scalar() {
        let values = decode_values(
            r#"[
                {"key":"s","value":"text","enabled":true},
                {"key":"n","value":8080,"enabled":true},
                {"key":"f","value":1.5,"enabled":false},
                {"key":"b","value":false,"enabled":true},
                {"key":"z","value":null,"enabled":true},
                {"key":"m","enabled":true}
            ]"#,
        );
        assert_eq!(values[0].value, VariableValue::String("text".to_string()));
        assert_eq!(values[1].value, VariableValue::Number(8080.into()));
        assert!(matches!(values[2].value, VariableValue::Number(_)));
        assert_eq!(values[3].value, VariableValue::Bool(false));
        assert!(values[4].value.is_null());
        assert!(values[5].value.is_null());
    }

    #[test]
    fn variable_value_numbers_normalise_through_f64() {
        let values = decode_values(
            r#"[
                {"key":"f","value":1.50,"enabled":true},
                {"key":"i","value":-42,"enabled":true}
            ]"#,
        );
        assert_eq!(values[0].value.to_string(), "1.5");
        assert_eq!(values[1].value, VariableValue::Number((-42).into()));
    }

    #[test]
    fn variable_value_rejects_objects() {
        let result: Result<EnvironmentVariable, _> =
            serde_json::from_str(r#"{"key":"k","value":{"nested":1},"enabled":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn variable_value_display() {
        assert_eq!(VariableValue::String("a b".to_string()).to_string(), "a b");
        assert_eq!(VariableValue::Number(42.into()).to_string(), "42");
        assert_eq!(VariableValue::Bool(true).to_string(), "true");
        assert_eq!(VariableValue::Null.to_string(), "null");
    }

    #[test]
    fn environment_uses_camel_case_fields() {
        let env: Environment = serde_json::from_str(
            r#"{"id":"e","name":"Prod","owner":"u1","createdAt":"t1","updatedAt":"t2","values":[],"isPublic":true}"#,
        )
        .unwrap();
        assert_eq!(env.created_at, "t1");
        assert_eq!(env.updated_at, "t2");
        assert!(env.is_public);
    }
}
