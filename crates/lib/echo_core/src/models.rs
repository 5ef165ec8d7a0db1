//! Wire models for the `/mcp` and `/health` endpoints.
//!
//! Every field is lenient on decode: a missing field or an explicit `null`
//! yields the empty value (or `None` for context content), and unknown fields
//! are ignored. Only a field of the wrong JSON type is a decode error.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// Request
// =============================================================================

/// An opaque, typed context block attached to a request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Context {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    /// `None` when the field was missing or `null`; encodes as `null`.
    #[serde(default)]
    pub content: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "is_blank")]
    pub id: Option<String>,
}

/// One turn in a conversation. `role` is free-form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
}

impl Message {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

/// Body of `POST /mcp`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct McpRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub messages: Vec<Message>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub context: Vec<Context>,
}

impl McpRequest {
    /// Content of the last message, or `""` when there are none.
    pub fn last_message(&self) -> &str {
        self.messages
            .last()
            .map(|m| m.content.as_str())
            .unwrap_or_default()
    }
}

// =============================================================================
// Responses
// =============================================================================

/// Body returned by `POST /mcp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McpResponse {
    pub role: String,
    pub content: String,
}

impl McpResponse {
    pub const ASSISTANT_ROLE: &'static str = "assistant";

    /// Builds a response attributed to the assistant.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Self::ASSISTANT_ROLE.to_string(),
            content: content.into(),
        }
    }
}

/// Body returned by `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

fn is_blank(id: &Option<String>) -> bool {
    id.as_deref().is_none_or(str::is_empty)
}

/// Treats an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
