//! End-to-end dispatch of the personal_* methods against an in-memory backend

use async_trait::async_trait;
use keyrpc_core::{
    DeleteAccountArgs, Error, Id, IsAccountLockedArgs, JsonRpcErrorData, JsonRpcRequest,
    JsonRpcResponse, ListTransactionsArgs, NewAccountArgs, Result, UnlockAccountArgs,
};
use keyrpc_server::{personal_router, AccountBackend, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct MemoryBackend {
    // address -> (passphrase, unlocked_for_secs)
    accounts: Mutex<HashMap<String, (String, Option<u64>)>>,
    last_unlock: Mutex<Option<UnlockAccountArgs>>,
}

impl MemoryBackend {
    fn with_account(address: &str, passphrase: &str) -> Self {
        let backend = Self::default();
        backend
            .accounts
            .lock()
            .unwrap()
            .insert(address.to_string(), (passphrase.to_string(), None));
        backend
    }
}

#[async_trait]
impl AccountBackend for MemoryBackend {
    async fn new_account(&self, args: NewAccountArgs) -> Result<String> {
        let mut accounts = self.accounts.lock().unwrap();
        let address = format!("0x{:040x}", accounts.len() + 1);
        accounts.insert(address.clone(), (args.passphrase, None));
        Ok(address)
    }

    async fn list_transactions(&self, args: ListTransactionsArgs) -> Result<Value> {
        Ok(json!({ "accounts": args.accounts, "transactions": [] }))
    }

    async fn delete_account(&self, args: DeleteAccountArgs) -> Result<bool> {
        let mut accounts = self.accounts.lock().unwrap();
        match accounts.get(&args.address) {
            Some((pass, _)) if *pass == args.passphrase => {
                accounts.remove(&args.address);
                Ok(true)
            }
            Some(_) => Err(Error::JsonRpc(JsonRpcErrorData::new(-32000, "wrong passphrase"))),
            None => Ok(false),
        }
    }

    async fn unlock_account(&self, args: UnlockAccountArgs) -> Result<bool> {
        *self.last_unlock.lock().unwrap() = Some(args.clone());
        let mut accounts = self.accounts.lock().unwrap();
        match accounts.get_mut(&args.address) {
            Some((pass, unlocked)) if *pass == args.passphrase => {
                *unlocked = Some(args.duration_secs);
                Ok(true)
            }
            Some(_) => Ok(false),
            None => Err(Error::Internal(format!("unknown account {}", args.address))),
        }
    }

    async fn is_account_locked(&self, args: IsAccountLockedArgs) -> Result<bool> {
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts
            .get(&args.address)
            .map_or(true, |(_, unlocked)| unlocked.is_none()))
    }
}

async fn call(router: &Router, method: &str, params: Value) -> JsonRpcResponse {
    router
        .dispatch(JsonRpcRequest::new(method, Some(params), Id::Number(1)))
        .await
}

#[tokio::test]
async fn test_all_methods_registered() {
    let router = personal_router(Arc::new(MemoryBackend::default()));

    assert_eq!(
        router.methods(),
        vec![
            "personal_deleteAccount",
            "personal_isAccountLocked",
            "personal_listTransactions",
            "personal_newAccount",
            "personal_unlockAccount",
        ]
    );
}

#[tokio::test]
async fn test_new_account_then_unlock() {
    let backend = Arc::new(MemoryBackend::default());
    let router = personal_router(Arc::clone(&backend));

    let created = call(&router, "personal_newAccount", json!(["pw"])).await;
    let address = created.result.unwrap();
    let address = address.as_str().unwrap().to_string();

    let locked = call(&router, "personal_isAccountLocked", json!([address])).await;
    assert_eq!(locked.result, Some(json!(true)));

    let unlocked = call(&router, "personal_unlockAccount", json!([address, "pw", 300])).await;
    assert_eq!(unlocked.result, Some(json!(true)));

    let locked = call(&router, "personal_isAccountLocked", json!([address])).await;
    assert_eq!(locked.result, Some(json!(false)));
}

#[tokio::test]
async fn test_unlock_lenient_duration_reaches_backend() {
    let backend = Arc::new(MemoryBackend::with_account("0xabc", "pw"));
    let router = personal_router(Arc::clone(&backend));

    let response = call(&router, "personal_unlockAccount", json!(["0xabc", "pw", "soon"])).await;
    assert!(response.is_success());

    let seen = backend.last_unlock.lock().unwrap().clone().unwrap();
    assert_eq!(seen.duration_secs, 0);
}

#[tokio::test]
async fn test_list_transactions_both_shapes() {
    let router = personal_router(Arc::new(MemoryBackend::default()));

    let nested = call(&router, "personal_listTransactions", json!([["a", "b"]])).await;
    let flat = call(&router, "personal_listTransactions", json!(["a", "b"])).await;

    assert_eq!(nested.result, flat.result);
    assert_eq!(nested.result.unwrap()["accounts"], json!(["a", "b"]));
}

#[tokio::test]
async fn test_delete_insufficient_params() {
    let router = personal_router(Arc::new(MemoryBackend::with_account("addr", "pw")));

    let response = call(&router, "personal_deleteAccount", json!(["addr"])).await;
    let error = response.error.unwrap();

    assert_eq!(error.code, -32602);
    assert_eq!(error.message, "insufficient params: got 1, want at least 2");
    assert_eq!(
        error.data,
        Some(json!({"kind": "insufficientParams", "got": 1, "want": 2}))
    );
}

#[tokio::test]
async fn test_non_array_params_rejected_for_every_method() {
    let router = personal_router(Arc::new(MemoryBackend::default()));

    for method in router.methods() {
        let response = call(&router, &method, json!({"address": "0xabc"})).await;
        let error = response.error.unwrap();

        assert_eq!(error.code, -32602, "method {}", method);
        assert_eq!(error.data.unwrap()["kind"], "decodeParam");
    }
}

#[tokio::test]
async fn test_backend_error_codes_pass_through() {
    let router = personal_router(Arc::new(MemoryBackend::with_account("0xabc", "pw")));

    let response = call(&router, "personal_deleteAccount", json!(["0xabc", "nope"])).await;
    assert_eq!(response.error.unwrap().code, -32000);

    let response = call(&router, "personal_unlockAccount", json!(["0xdef"])).await;
    assert_eq!(response.error.unwrap().code, -32603);
}

#[tokio::test]
async fn test_unknown_method() {
    let router = personal_router(Arc::new(MemoryBackend::default()));

    let response = call(&router, "personal_sign", json!(["0xabc"])).await;
    assert_eq!(response.error.unwrap().code, -32601);
}

#[tokio::test]
async fn test_dispatch_str_roundtrip() {
    let router = personal_router(Arc::new(MemoryBackend::with_account("0xabc", "pw")));

    let text = router
        .dispatch_str(r#"{"jsonrpc":"2.0","method":"personal_isAccountLocked","params":["0xabc"],"id":"q"}"#)
        .await
        .unwrap();
    let response: JsonRpcResponse = serde_json::from_str(&text).unwrap();

    assert_eq!(response.id, Id::String("q".into()));
    assert_eq!(response.result, Some(json!(true)));
}

#[tokio::test]
async fn test_concurrent_dispatch() {
    let router = personal_router(Arc::new(MemoryBackend::default()));

    let mut tasks = Vec::new();
    for i in 0..16 {
        let router = router.clone();
        tasks.push(tokio::spawn(async move {
            call(&router, "personal_newAccount", json!([format!("pw-{}", i)])).await
        }));
    }

    for task in tasks {
        assert!(task.await.unwrap().is_success());
    }
}
