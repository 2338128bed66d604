//! Codec for JSON-RPC envelopes
//!
//! Converts between JSON text and the envelope types in [`crate::types`].
//! Parameter decoding is not done here; the request's `params` stays a raw
//! value until the per-method argument shape consumes it.
//!
//! # Error Mapping
//!
//! - Invalid JSON → `-32700` (Parse error)
//! - Valid JSON that is not a request object → `-32600` (Invalid Request)
//! - Serialization issues → `Error::Serialization`
//!
//! # Examples
//!
//! ```rust
//! use keyrpc_core::codec;
//!
//! let json = r#"{"jsonrpc":"2.0","method":"personal_newAccount","params":["pw"],"id":1}"#;
//! let request = codec::decode_request(json).unwrap();
//! assert_eq!(request.method, "personal_newAccount");
//! ```

use crate::error::{Error, JsonRpcErrorData, Result};
use crate::types::{JsonRpcRequest, JsonRpcResponse};
use serde::Serialize;

/// Encode any serializable message to a JSON string
///
/// # Errors
///
/// Returns `Error::Serialization` if the message cannot be serialized.
pub fn encode<T: Serialize>(msg: &T) -> Result<String> {
    serde_json::to_string(msg).map_err(|e| Error::Serialization(e.to_string()))
}

/// Decode a JSON string to a JSON-RPC request
///
/// Parsing happens in two steps so that a syntax error and a structural
/// error can be told apart.
///
/// # Errors
///
/// - `Error::JsonRpc` with code -32700 if the text is not valid JSON
/// - `Error::JsonRpc` with code -32600 if it is not a request object
pub fn decode_request(data: &str) -> Result<JsonRpcRequest> {
    let value: serde_json::Value =
        serde_json::from_str(data).map_err(|_e| Error::JsonRpc(JsonRpcErrorData::parse_error()))?;

    let request: JsonRpcRequest = serde_json::from_value(value)
        .map_err(|e| Error::JsonRpc(JsonRpcErrorData::invalid_request(e.to_string())))?;

    if request.jsonrpc != "2.0" {
        return Err(Error::JsonRpc(JsonRpcErrorData::invalid_request(format!(
            "unsupported jsonrpc version: {}",
            request.jsonrpc
        ))));
    }

    Ok(request)
}

/// Encode a JSON-RPC response to JSON
///
/// # Examples
///
/// ```rust
/// use keyrpc_core::{codec, JsonRpcResponse, Id};
/// use serde_json::json;
///
/// let response = JsonRpcResponse::success(json!(false), Id::Number(1));
/// let json = codec::encode_response(&response).unwrap();
/// assert!(json.contains("\"result\":false"));
/// ```
pub fn encode_response(resp: &JsonRpcResponse) -> Result<String> {
    encode(resp)
}
