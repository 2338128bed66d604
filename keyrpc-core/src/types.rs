//! JSON-RPC 2.0 envelope types
//!
//! Only the pieces the dispatch adapter needs live here: the request id, the
//! request envelope whose `params` member feeds the argument decoders, and
//! the response envelope that carries either a result or an error.

use crate::error::JsonRpcErrorData;
use serde::{Deserialize, Serialize};
use std::fmt;

/// JSON-RPC 2.0 request ID
///
/// Untagged so it serializes as the bare string, number or null.
///
/// # Examples
///
/// ```rust
/// use keyrpc_core::Id;
///
/// let id1: Id = "req-123".into();
/// let id2: Id = 42i64.into();
///
/// assert_eq!(id1.to_string(), "\"req-123\"");
/// assert_eq!(id2.to_string(), "42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    String(String),
    Number(i64),
    /// Used when the request id could not be determined
    Null,
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::String(s) => write!(f, "\"{}\"", s),
            Id::Number(n) => write!(f, "{}", n),
            Id::Null => write!(f, "null"),
        }
    }
}

impl From<String> for Id {
    fn from(s: String) -> Self {
        Id::String(s)
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Id::String(s.to_string())
    }
}

impl From<i64> for Id {
    fn from(n: i64) -> Self {
        Id::Number(n)
    }
}

/// JSON-RPC 2.0 request message
///
/// For the `personal_*` family `params` is a positional JSON array; it is
/// kept as a raw value here and decoded per method.
///
/// # Examples
///
/// ```rust
/// use keyrpc_core::{JsonRpcRequest, Id};
/// use serde_json::json;
///
/// let req = JsonRpcRequest::new(
///     "personal_unlockAccount",
///     Some(json!(["0xabc", "pw", 30])),
///     Id::Number(1)
/// );
/// assert_eq!(req.jsonrpc, "2.0");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    /// JSON-RPC version - always "2.0"
    pub jsonrpc: String,
    /// Name of the remote method to invoke
    pub method: String,
    /// Raw parameters, skipped in JSON if None
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<serde_json::Value>,
    /// Identifier correlating this request with its response
    pub id: Id,
}

impl JsonRpcRequest {
    pub fn new(method: impl Into<String>, params: Option<serde_json::Value>, id: Id) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            method: method.into(),
            params,
            id,
        }
    }
}

/// JSON-RPC 2.0 response message
///
/// Exactly one of `result` and `error` is present; the constructors enforce
/// this.
///
/// # Examples
///
/// ```rust
/// use keyrpc_core::{JsonRpcResponse, JsonRpcErrorData, Id};
/// use serde_json::json;
///
/// let success = JsonRpcResponse::success(json!(true), Id::Number(1));
/// assert!(success.is_success());
///
/// let error = JsonRpcResponse::error(
///     JsonRpcErrorData::method_not_found("personal_sign"),
///     Id::Number(2)
/// );
/// assert!(error.is_error());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    /// JSON-RPC version - always "2.0"
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcErrorData>,
    /// Request ID from the original request, `Id::Null` if unknown
    pub id: Id,
}

impl JsonRpcResponse {
    pub fn success(result: serde_json::Value, id: Id) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            result: Some(result),
            error: None,
            id,
        }
    }

    pub fn error(error: JsonRpcErrorData, id: Id) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(error),
            id,
        }
    }

    pub fn is_success(&self) -> bool {
        self.result.is_some()
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_id_display() {
        assert_eq!(Id::String("test".to_string()).to_string(), "\"test\"");
        assert_eq!(Id::Number(42).to_string(), "42");
        assert_eq!(Id::Null.to_string(), "null");
    }

    #[test]
    fn test_id_untagged_roundtrip() {
        let id: Id = serde_json::from_value(json!("abc")).unwrap();
        assert_eq!(id, Id::String("abc".into()));

        let id: Id = serde_json::from_value(json!(7)).unwrap();
        assert_eq!(id, Id::Number(7));

        let id: Id = serde_json::from_value(json!(null)).unwrap();
        assert_eq!(id, Id::Null);
    }

    #[test]
    fn test_request_serialization() {
        let req = JsonRpcRequest::new("personal_newAccount", Some(json!(["pw"])), Id::Number(1));
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"jsonrpc\":\"2.0\""));
        assert!(json.contains("\"method\":\"personal_newAccount\""));
        assert!(json.contains("\"params\":[\"pw\"]"));
        assert!(json.contains("\"id\":1"));
    }

    #[test]
    fn test_request_without_params() {
        let req: JsonRpcRequest =
            serde_json::from_str(r#"{"jsonrpc":"2.0","method":"personal_newAccount","id":"a"}"#)
                .unwrap();
        assert!(req.params.is_none());
        assert_eq!(req.id, Id::String("a".into()));
    }

    #[test]
    fn test_response_success() {
        let resp = JsonRpcResponse::success(json!({"status": "ok"}), Id::Number(1));
        assert!(resp.is_success());
        assert!(!resp.is_error());

        let json = serde_json::to_string(&resp).unwrap();
        assert!(!json.contains("\"error\""));
    }

    #[test]
    fn test_response_error() {
        let resp = JsonRpcResponse::error(
            JsonRpcErrorData::internal_error("test error"),
            Id::Number(1),
        );
        assert!(!resp.is_success());
        assert!(resp.is_error());

        let json = serde_json::to_string(&resp).unwrap();
        assert!(!json.contains("\"result\""));
    }
}
