//! Transport-agnostic dispatch for the `personal_*` JSON-RPC methods
//!
//! This crate sits between a transport (HTTP, IPC, WebSocket; none of which
//! are provided here) and an account backend. It takes a JSON-RPC request,
//! decodes the positional params with the shape registered for the method,
//! calls the backend, and builds the response.
//!
//! # Components
//!
//! - **Handler**: The boxed async handler trait plus `from_fn` / `from_args_fn`
//! - **Router**: Method-name lookup and request → response dispatch
//! - **Personal**: The `AccountBackend` trait and the five method bindings
//!
//! # Error Responses
//!
//! | Failure | Code |
//! |---|---|
//! | Malformed JSON | -32700 |
//! | Not a request object | -32600 |
//! | Unknown method | -32601 |
//! | Any decode error | -32602 |
//! | Backend failure | -32603, or the backend's own code |

pub mod handler;
pub mod personal;
pub mod router;

pub use handler::{from_args_fn, from_fn, AsyncHandler, Handler, HandlerResult};
pub use personal::{personal_router, register_personal, AccountBackend};
pub use router::{Router, RouterBuilder};
