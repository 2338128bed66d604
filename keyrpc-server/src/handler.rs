//! Handler traits and types for JSON-RPC methods
//!
//! A handler receives the raw `params` of a request and produces a JSON
//! result. Two constructors cover the common cases:
//!
//! 1. **from_fn**: Wrap an async closure that works with raw JSON values
//! 2. **from_args_fn**: Wrap an async closure that takes a decoded argument
//!    shape; the positional params are decoded with `FromParams` before the
//!    closure runs
//!
//! # Examples
//!
//! ```rust
//! use keyrpc_server::{from_args_fn, from_fn};
//! use keyrpc_core::IsAccountLockedArgs;
//!
//! let raw = from_fn(|params| async move {
//!     Ok(serde_json::json!({"echo": params}))
//! });
//!
//! let typed = from_args_fn(|args: IsAccountLockedArgs| async move {
//!     Ok(args.address.is_empty())
//! });
//! ```

use keyrpc_core::{Error, FromParams, Result};
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Boxed future returned by every handler
///
/// Boxing gives all handlers one concrete type so they can share the
/// router's map.
pub type HandlerResult = Pin<Box<dyn Future<Output = Result<Value>> + Send>>;

/// Trait for JSON-RPC method handlers
///
/// Handlers must be `Send + Sync` because one router is shared by every
/// request in flight.
pub trait Handler: Send + Sync {
    /// Handle a request's params (`None` if the request had no params)
    ///
    /// Errors are turned into JSON-RPC error responses by the router:
    /// - `Error::Decode` → -32602 with the decode detail in `data`
    /// - `Error::MethodNotFound` → -32601
    /// - `Error::Internal` → -32603
    fn handle(&self, params: Option<Value>) -> HandlerResult;
}

/// Adapts an async function into a `Handler`
pub struct AsyncHandler<F, Fut>
where
    F: Fn(Option<Value>) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Value>> + Send + 'static,
{
    func: F,
}

impl<F, Fut> AsyncHandler<F, Fut>
where
    F: Fn(Option<Value>) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Value>> + Send + 'static,
{
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F, Fut> Handler for AsyncHandler<F, Fut>
where
    F: Fn(Option<Value>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Value>> + Send + 'static,
{
    fn handle(&self, params: Option<Value>) -> HandlerResult {
        Box::pin((self.func)(params))
    }
}

/// Create a handler from an async function that works with raw JSON values
pub fn from_fn<F, Fut>(func: F) -> Box<dyn Handler>
where
    F: Fn(Option<Value>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Value>> + Send + 'static,
{
    Box::new(AsyncHandler::new(func))
}

/// Create a handler that decodes positional params into `A` first
///
/// If decoding fails the closure is never called and the handler resolves
/// to `Error::Decode`. The closure's result is serialized with serde_json.
///
/// # Examples
///
/// ```rust
/// use keyrpc_server::from_args_fn;
/// use keyrpc_core::UnlockAccountArgs;
///
/// let handler = from_args_fn(|args: UnlockAccountArgs| async move {
///     Ok(args.duration_secs)
/// });
/// ```
pub fn from_args_fn<A, R, F, Fut>(func: F) -> Box<dyn Handler>
where
    A: FromParams + Send + 'static,
    R: serde::Serialize + Send + 'static,
    F: Fn(A) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<R>> + Send + 'static,
{
    let func = Arc::new(func);

    from_fn(move |params: Option<Value>| {
        let func = Arc::clone(&func);
        async move {
            let args = A::from_params(params.as_ref())?;
            let result = func(args).await?;
            serde_json::to_value(result).map_err(|e| Error::Serialization(e.to_string()))
        }
    })
}
