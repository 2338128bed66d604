//! The `personal_*` account methods
//!
//! Wires each argument shape to its method name and forwards the decoded
//! arguments to an [`AccountBackend`]. Key storage and unlocking live in the
//! backend; this module only owns the mapping.
//!
//! # Examples
//!
//! ```rust
//! use async_trait::async_trait;
//! use keyrpc_core::{
//!     DeleteAccountArgs, IsAccountLockedArgs, ListTransactionsArgs, NewAccountArgs, Result,
//!     UnlockAccountArgs,
//! };
//! use keyrpc_server::{personal_router, AccountBackend};
//! use std::sync::Arc;
//!
//! struct Nothing;
//!
//! #[async_trait]
//! impl AccountBackend for Nothing {
//!     async fn new_account(&self, _args: NewAccountArgs) -> Result<String> { Ok("0x0".into()) }
//!     async fn list_transactions(&self, _args: ListTransactionsArgs) -> Result<serde_json::Value> {
//!         Ok(serde_json::json!([]))
//!     }
//!     async fn delete_account(&self, _args: DeleteAccountArgs) -> Result<bool> { Ok(false) }
//!     async fn unlock_account(&self, _args: UnlockAccountArgs) -> Result<bool> { Ok(false) }
//!     async fn is_account_locked(&self, _args: IsAccountLockedArgs) -> Result<bool> { Ok(true) }
//! }
//!
//! let router = personal_router(Arc::new(Nothing));
//! assert!(router.has_method("personal_unlockAccount"));
//! ```

use crate::handler::from_args_fn;
use crate::router::Router;
use async_trait::async_trait;
use keyrpc_core::{
    DeleteAccountArgs, FromParams, IsAccountLockedArgs, ListTransactionsArgs, NewAccountArgs,
    Result, UnlockAccountArgs,
};
use std::sync::Arc;

/// Account operations behind the `personal_*` methods
///
/// Every method receives fully decoded arguments. Returning
/// `Error::JsonRpc` lets a backend choose its own error code.
#[async_trait]
pub trait AccountBackend: Send + Sync + 'static {
    /// Create an account protected by the passphrase; returns its address
    async fn new_account(&self, args: NewAccountArgs) -> Result<String>;

    /// List transactions for the given accounts
    async fn list_transactions(&self, args: ListTransactionsArgs) -> Result<serde_json::Value>;

    /// Delete an account; returns whether it existed
    async fn delete_account(&self, args: DeleteAccountArgs) -> Result<bool>;

    /// Unlock an account for `args.duration()` (0 means the backend default)
    async fn unlock_account(&self, args: UnlockAccountArgs) -> Result<bool>;

    async fn is_account_locked(&self, args: IsAccountLockedArgs) -> Result<bool>;
}

/// Register the five `personal_*` methods on `router`
pub fn register_personal<B: AccountBackend>(router: &mut Router, backend: Arc<B>) {
    let b = Arc::clone(&backend);
    router.register(
        NewAccountArgs::METHOD,
        from_args_fn(move |args: NewAccountArgs| {
            let b = Arc::clone(&b);
            async move { b.new_account(args).await }
        }),
    );

    let b = Arc::clone(&backend);
    router.register(
        ListTransactionsArgs::METHOD,
        from_args_fn(move |args: ListTransactionsArgs| {
            let b = Arc::clone(&b);
            async move { b.list_transactions(args).await }
        }),
    );

    let b = Arc::clone(&backend);
    router.register(
        DeleteAccountArgs::METHOD,
        from_args_fn(move |args: DeleteAccountArgs| {
            let b = Arc::clone(&b);
            async move { b.delete_account(args).await }
        }),
    );

    let b = Arc::clone(&backend);
    router.register(
        UnlockAccountArgs::METHOD,
        from_args_fn(move |args: UnlockAccountArgs| {
            let b = Arc::clone(&b);
            async move { b.unlock_account(args).await }
        }),
    );

    router.register(
        IsAccountLockedArgs::METHOD,
        from_args_fn(move |args: IsAccountLockedArgs| {
            let b = Arc::clone(&backend);
            async move { b.is_account_locked(args).await }
        }),
    );
}

/// Build a router serving only the `personal_*` methods
pub fn personal_router<B: AccountBackend>(backend: Arc<B>) -> Router {
    let mut router = Router::new();
    register_personal(&mut router, backend);
    router
}
