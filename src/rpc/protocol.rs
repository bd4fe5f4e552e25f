//! JSON-RPC 2.0 envelopes

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::errors::{PanelError, Result};

pub const VERSION: &str = "2.0";

/// JSON-RPC 2.0 request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: Value,
    pub id: Value,
}

impl JsonRpcRequest {
    /// Create a request with a fresh UUID id, so that concurrent calls never
    /// share correlation state.
    pub fn new(method: impl Into<String>, params: Value) -> Self {
        Self::with_id(method, params, Value::String(uuid::Uuid::new_v4().to_string()))
    }

    pub fn with_id(method: impl Into<String>, params: Value, id: Value) -> Self {
        Self {
            jsonrpc: VERSION.to_string(),
            method: method.into(),
            params,
            id,
        }
    }
}

/// JSON-RPC 2.0 response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
    #[serde(default)]
    pub id: Value,
}

// A present `"result": null` must stay distinguishable from a missing field.
fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl JsonRpcResponse {
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: VERSION.to_string(),
            result: Some(result),
            error: None,
            id,
        }
    }

    pub fn error(id: Value, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: VERSION.to_string(),
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
                data: None,
            }),
            id,
        }
    }

    /// Validates the envelope against the request it answers and yields the
    /// raw result value.
    pub fn into_result(self, expected_id: &Value) -> Result<Value> {
        if self.jsonrpc != VERSION {
            return Err(PanelError::Protocol(format!(
                "unsupported protocol version '{}'",
                self.jsonrpc
            )));
        }

        match (self.result, self.error) {
            (Some(_), Some(_)) => Err(PanelError::Protocol(
                "response carries both result and error".to_string(),
            )),
            (None, None) => Err(PanelError::Protocol(
                "response carries neither result nor error".to_string(),
            )),
            // Servers answer with a null id when they could not read the request id.
            (None, Some(error)) if self.id == *expected_id || self.id.is_null() => {
                Err(error.into())
            }
            (Some(result), None) if self.id == *expected_id => Ok(result),
            _ => Err(PanelError::Protocol(format!(
                "response id {} does not match request id {}",
                self.id, expected_id
            ))),
        }
    }
}

/// JSON-RPC 2.0 error object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl From<JsonRpcError> for PanelError {
    fn from(error: JsonRpcError) -> Self {
        PanelError::Remote {
            code: error.code,
            message: error.message,
            data: error.data,
        }
    }
}

/// Standard JSON-RPC error codes
pub mod error_codes {
    pub const PARSE_ERROR: i32 = -32700;
    pub const INVALID_REQUEST: i32 = -32600;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
}
