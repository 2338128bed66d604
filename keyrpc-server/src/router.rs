//! Router for JSON-RPC method routing
//!
//! The router maps method names to handlers and turns every outcome into a
//! JSON-RPC response. It is the only place in the workspace that logs a
//! decode failure.
//!
//! # Thread Safety
//!
//! Routers are cheaply cloneable (`Arc`-based) and can be shared across
//! any number of concurrent requests.
//!
//! # Examples
//!
//! ```rust
//! use keyrpc_server::{Router, from_fn};
//!
//! let mut router = Router::new();
//! router.register("ping", from_fn(|_| async {
//!     Ok(serde_json::json!("pong"))
//! }));
//! assert!(router.has_method("ping"));
//! ```

use crate::handler::Handler;
use keyrpc_core::{codec, Error, Id, JsonRpcRequest, JsonRpcResponse, Result};
use std::collections::HashMap;
use std::sync::Arc;

/// Router for JSON-RPC methods
#[derive(Clone)]
pub struct Router {
    handlers: Arc<HashMap<String, Arc<dyn Handler>>>,
}

impl Router {
    /// Create a new empty router
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(HashMap::new()),
        }
    }

    /// Register a handler for a method, replacing any previous one
    pub fn register(&mut self, method: impl Into<String>, handler: Box<dyn Handler>) {
        let handlers = Arc::make_mut(&mut self.handlers);
        handlers.insert(method.into(), Arc::from(handler));
    }

    pub fn get(&self, method: &str) -> Option<Arc<dyn Handler>> {
        self.handlers.get(method).cloned()
    }

    pub fn has_method(&self, method: &str) -> bool {
        self.handlers.contains_key(method)
    }

    /// Get all registered method names, sorted
    pub fn methods(&self) -> Vec<String> {
        let mut methods: Vec<String> = self.handlers.keys().cloned().collect();
        methods.sort();
        methods
    }

    /// Route a method call to the appropriate handler
    pub async fn route(
        &self,
        method: &str,
        params: Option<serde_json::Value>,
    ) -> Result<serde_json::Value> {
        let handler = self
            .get(method)
            .ok_or_else(|| Error::MethodNotFound(method.to_string()))?;

        handler.handle(params).await
    }

    /// Process a request and always produce a response
    ///
    /// The response carries the request's id. Failures are mapped with
    /// `Error::to_error_data`, so decode errors keep their message verbatim.
    #[tracing::instrument(skip(self, request), fields(method = %request.method, id = %request.id))]
    pub async fn dispatch(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        let id = request.id;

        match self.route(&request.method, request.params).await {
            Ok(result) => {
                tracing::debug!("request succeeded");
                JsonRpcResponse::success(result, id)
            }
            Err(err) => {
                match &err {
                    Error::Decode(decode) => {
                        tracing::warn!(kind = decode.kind(), error = %decode, "invalid params")
                    }
                    Error::MethodNotFound(_) => tracing::warn!("method not found"),
                    other => tracing::error!(error = %other, "request failed"),
                }
                JsonRpcResponse::error(err.to_error_data(), id)
            }
        }
    }

    /// Decode a request from text, dispatch it, and encode the response
    ///
    /// Text that is not a valid request yields an error response with
    /// `Id::Null`, as the id cannot be recovered.
    pub async fn dispatch_str(&self, data: &str) -> Result<String> {
        let response = match codec::decode_request(data) {
            Ok(request) => self.dispatch(request).await,
            Err(err) => {
                tracing::warn!(error = %err, "rejected malformed request");
                JsonRpcResponse::error(err.to_error_data(), Id::Null)
            }
        };
        codec::encode_response(&response)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing a router
pub struct RouterBuilder {
    router: Router,
}

impl RouterBuilder {
    pub fn new() -> Self {
        Self {
            router: Router::new(),
        }
    }

    /// Add a handler for a method
    pub fn handler(mut self, method: impl Into<String>, handler: Box<dyn Handler>) -> Self {
        self.router.register(method, handler);
        self
    }

    pub fn build(self) -> Router {
        self.router
    }
}

impl Default for RouterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
