//! keyrpc - typed parameters for the `personal_*` JSON-RPC methods
//!
//! This is the convenience crate that re-exports the keyrpc sub-crates.
//!
//! # Architecture
//!
//! - **keyrpc-core**: Decode errors, positional params, argument shapes,
//!   JSON-RPC envelopes, logging setup
//! - **keyrpc-server**: Handlers, router and the `AccountBackend` binding
//!
//! # Quick Start - Decoding
//!
//! ```rust
//! use keyrpc::{FromParams, UnlockAccountArgs};
//! use serde_json::json;
//!
//! let args = UnlockAccountArgs::from_params(Some(&json!(["0xabc"]))).unwrap();
//! assert_eq!(args.passphrase, "");
//! assert_eq!(args.duration_secs, 0);
//! ```
//!
//! # Quick Start - Dispatch
//!
//! ```rust
//! use keyrpc::server::from_args_fn;
//! use keyrpc::{IsAccountLockedArgs, RouterBuilder};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let router = RouterBuilder::new()
//!     .handler(
//!         "personal_isAccountLocked",
//!         from_args_fn(|args: IsAccountLockedArgs| async move { Ok(args.address != "0x0") }),
//!     )
//!     .build();
//!
//! let reply = router
//!     .dispatch_str(r#"{"jsonrpc":"2.0","method":"personal_isAccountLocked","params":[],"id":1}"#)
//!     .await
//!     .unwrap();
//! assert!(reply.contains("insufficient params: got 0, want at least 1"));
//! # }
//! ```

pub use keyrpc_core as core;
pub use keyrpc_server as server;

pub use keyrpc_core::{
    DecodeError, DeleteAccountArgs, Error, FromParams, Id, IsAccountLockedArgs, JsonRpcErrorData,
    JsonRpcRequest, JsonRpcResponse, ListTransactionsArgs, NewAccountArgs, Result,
    UnlockAccountArgs,
};
pub use keyrpc_server::{personal_router, AccountBackend, Router, RouterBuilder};
