//! Positional parameter decoding for the `personal_*` JSON-RPC methods
//!
//! This crate turns the `params` member of a JSON-RPC request into a typed
//! argument struct for each account method, or into a structured error the
//! transport can report back. It includes:
//!
//! - **Params**: Positional array decoding with arity checks and typed-variant
//!   inspection of each element
//! - **Args**: One argument shape per method family, behind the `FromParams` trait
//! - **Error handling**: The three-kind decode taxonomy and its JSON-RPC mapping
//! - **Types / Codec**: The JSON-RPC 2.0 envelopes the dispatch layer works with
//! - **Observability**: `tracing` subscriber setup
//!
//! # Architecture
//!
//! Decoding is synchronous and side-effect free. The `keyrpc-server` crate
//! builds on top of it to route requests to an account backend; transports
//! are left to the embedding application.
//!
//! # Example
//!
//! ```rust
//! use keyrpc_core::{DecodeError, FromParams, ListTransactionsArgs};
//! use serde_json::json;
//!
//! let args = ListTransactionsArgs::from_params(Some(&json!([["0xa", "0xb"]]))).unwrap();
//! assert_eq!(args.accounts, vec!["0xa", "0xb"]);
//!
//! let err = ListTransactionsArgs::from_params(Some(&json!([]))).unwrap_err();
//! assert_eq!(err, DecodeError::insufficient_params(0, 1));
//! ```

pub mod args;
pub mod codec;
pub mod error;
pub mod observability;
pub mod params;
pub mod types;

pub use args::{
    DeleteAccountArgs, FromParams, IsAccountLockedArgs, ListTransactionsArgs, NewAccountArgs,
    UnlockAccountArgs,
};
pub use error::{DecodeError, Error, JsonRpcErrorData, Result};
pub use observability::{init_logging, LoggingConfig};
pub use params::JsonKind;
pub use types::{Id, JsonRpcRequest, JsonRpcResponse};
