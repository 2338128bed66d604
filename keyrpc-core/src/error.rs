//! Error types for keyrpc
//!
//! This module defines the three layers of error used across the workspace:
//!
//! - **DecodeError**: The parameter-decoding taxonomy. Every argument shape
//!   fails with exactly one of its three kinds.
//! - **Error**: Application-level errors for the dispatch path (uses thiserror)
//! - **JsonRpcErrorData**: Wire-format errors as defined in the JSON-RPC 2.0 spec
//!
//! # Error Codes
//!
//! JSON-RPC 2.0 defines standard error codes:
//! - `-32700`: Parse error (invalid JSON)
//! - `-32600`: Invalid request (missing required fields)
//! - `-32601`: Method not found
//! - `-32602`: Invalid params
//! - `-32603`: Internal error
//!
//! All three decode error kinds surface as `-32602` with the display text as
//! the message and the structured detail in `data`.
//!
//! # Examples
//!
//! ```rust
//! use keyrpc_core::{DecodeError, JsonRpcErrorData};
//!
//! let error = DecodeError::insufficient_params(1, 2);
//! assert_eq!(error.to_string(), "insufficient params: got 1, want at least 2");
//!
//! let wire = JsonRpcErrorData::from(&error);
//! assert_eq!(wire.code, -32602);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

/// Result type for keyrpc operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failure to turn a raw `params` value into a typed argument struct
///
/// Each kind is terminal for the decode attempt: no partial struct is
/// produced alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The raw params were not a JSON array (or not JSON at all)
    #[error("could not decode params: {0}")]
    DecodeParam(String),

    /// The array parsed but holds fewer elements than the method requires
    #[error("insufficient params: got {got}, want at least {want}")]
    InsufficientParams {
        /// Number of elements actually supplied
        got: usize,
        /// Minimum number of elements the method requires
        want: usize,
    },

    /// An element is present but its JSON type does not match the field
    #[error("invalid type on field {field}: {detail}")]
    InvalidType {
        /// Name of the offending field
        field: String,
        /// What was expected and what was found
        detail: String,
    },
}

impl DecodeError {
    pub fn decode_param(detail: impl Into<String>) -> Self {
        DecodeError::DecodeParam(detail.into())
    }

    pub fn insufficient_params(got: usize, want: usize) -> Self {
        DecodeError::InsufficientParams { got, want }
    }

    pub fn invalid_type(field: impl Into<String>, detail: impl Into<String>) -> Self {
        DecodeError::InvalidType {
            field: field.into(),
            detail: detail.into(),
        }
    }

    /// Stable camelCase tag for this kind, used in the wire `data` member
    pub fn kind(&self) -> &'static str {
        match self {
            DecodeError::DecodeParam(_) => "decodeParam",
            DecodeError::InsufficientParams { .. } => "insufficientParams",
            DecodeError::InvalidType { .. } => "invalidType",
        }
    }
}

/// Application-level error type for the dispatch path
///
/// Handlers and the router return this type. It is converted into
/// `JsonRpcErrorData` exactly once, when the response is built.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Parameter decoding failed for the target method
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// JSON-RPC protocol error (already in wire format)
    ///
    /// Account backends use this to return their own error codes.
    #[error("JSON-RPC error: {0}")]
    JsonRpc(#[from] JsonRpcErrorData),

    /// Serialization or deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid JSON-RPC request format
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Method not found in the router
    #[error("Method not found: {0}")]
    MethodNotFound(String),

    /// Invalid method parameters not covered by the decode taxonomy
    #[error("Invalid params: {0}")]
    InvalidParams(String),

    /// Internal error, usually raised by an account backend
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Convert into the wire-format error object sent to the caller
    pub fn to_error_data(&self) -> JsonRpcErrorData {
        match self {
            Error::Decode(e) => JsonRpcErrorData::from(e),
            Error::JsonRpc(data) => data.clone(),
            Error::InvalidRequest(msg) => JsonRpcErrorData::invalid_request(msg.clone()),
            Error::MethodNotFound(method) => JsonRpcErrorData::method_not_found(method.clone()),
            Error::InvalidParams(msg) => JsonRpcErrorData::invalid_params(msg.clone()),
            Error::Serialization(msg) | Error::Internal(msg) => {
                JsonRpcErrorData::internal_error(msg.clone())
            }
        }
    }
}

/// JSON-RPC 2.0 error data as defined in the specification
///
/// This structure represents the exact wire format for JSON-RPC errors.
/// It appears in the `error` field of a `JsonRpcResponse`.
///
/// # Examples
///
/// ```rust
/// use keyrpc_core::JsonRpcErrorData;
/// use serde_json::json;
///
/// let error = JsonRpcErrorData::method_not_found("personal_signAndSend");
/// assert_eq!(error.code, -32601);
///
/// let custom = JsonRpcErrorData::with_data(
///     -32000,
///     "account locked",
///     json!({"address": "0xabc"})
/// );
/// assert!(custom.data.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcErrorData {
    /// Numeric error code indicating the error type
    ///
    /// Negative codes from -32768 to -32000 are reserved by the spec.
    pub code: i32,

    /// Human-readable error message
    pub message: String,

    /// Optional additional error information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl JsonRpcErrorData {
    /// Create a new JSON-RPC error with code and message
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// Create a new JSON-RPC error with additional data
    pub fn with_data(code: i32, message: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            code,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Create a parse error (-32700)
    ///
    /// Per spec: "Invalid JSON was received by the server."
    pub fn parse_error() -> Self {
        Self::new(-32700, "Parse error")
    }

    /// Create an invalid request error (-32600)
    ///
    /// Per spec: "The JSON sent is not a valid Request object."
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::new(-32600, msg)
    }

    /// Create a method not found error (-32601)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyrpc_core::JsonRpcErrorData;
    ///
    /// let error = JsonRpcErrorData::method_not_found("personal_sign");
    /// assert_eq!(error.message, "Method not found: personal_sign");
    /// ```
    pub fn method_not_found(method: impl Into<String>) -> Self {
        Self::new(-32601, format!("Method not found: {}", method.into()))
    }

    /// Create an invalid params error (-32602)
    pub fn invalid_params(msg: impl Into<String>) -> Self {
        Self::new(-32602, msg)
    }

    /// Create an internal error (-32603)
    pub fn internal_error(msg: impl Into<String>) -> Self {
        Self::new(-32603, msg)
    }
}

impl From<&DecodeError> for JsonRpcErrorData {
    /// Every decode failure is an invalid-params error; the message is the
    /// display text verbatim and `data` carries the structured fields.
    fn from(err: &DecodeError) -> Self {
        let data = match err {
            DecodeError::DecodeParam(detail) => json!({
                "kind": err.kind(),
                "detail": detail,
            }),
            DecodeError::InsufficientParams { got, want } => json!({
                "kind": err.kind(),
                "got": got,
                "want": want,
            }),
            DecodeError::InvalidType { field, detail } => json!({
                "kind": err.kind(),
                "field": field,
                "detail": detail,
            }),
        };
        Self::with_data(-32602, err.to_string(), data)
    }
}

impl From<DecodeError> for JsonRpcErrorData {
    fn from(err: DecodeError) -> Self {
        Self::from(&err)
    }
}

impl std::fmt::Display for JsonRpcErrorData {
    /// Formats as "[code] message", e.g. "[-32601] Method not found: foo"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for JsonRpcErrorData {}
