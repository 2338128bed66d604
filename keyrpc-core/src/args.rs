//! Typed argument shapes for the `personal_*` methods
//!
//! Each method family gets its own struct and its own decoder. The decoders
//! share the positional and type-inspection helpers from [`crate::params`] but
//! otherwise stay independent, so an error always names the exact field that
//! was wrong.
//!
//! | Shape | Method | Min params |
//! |---|---|---|
//! | [`NewAccountArgs`] | `personal_newAccount` | 1 |
//! | [`ListTransactionsArgs`] | `personal_listTransactions` | 1 |
//! | [`DeleteAccountArgs`] | `personal_deleteAccount` | 2 |
//! | [`UnlockAccountArgs`] | `personal_unlockAccount` | 1 |
//! | [`IsAccountLockedArgs`] | `personal_isAccountLocked` | 1 |
//!
//! # Examples
//!
//! ```rust
//! use keyrpc_core::args::{FromParams, UnlockAccountArgs};
//! use serde_json::json;
//!
//! let args = UnlockAccountArgs::from_params(Some(&json!(["0xabc", "pw", 30]))).unwrap();
//! assert_eq!(args.address, "0xabc");
//! assert_eq!(args.duration_secs, 30);
//! ```

use crate::error::DecodeError;
use crate::params::{expect_str, optional_f64, optional_str, parse_params, positional};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// Decoding from a positional `params` value into a typed argument struct
///
/// Implementations are pure: the same input always yields an equal output
/// and nothing is logged.
pub trait FromParams: Sized {
    /// JSON-RPC method name these arguments belong to
    const METHOD: &'static str;

    /// Minimum number of positional elements
    const MIN_PARAMS: usize;

    /// Decode from the `params` member of a request (`None` when absent)
    fn from_params(params: Option<&Value>) -> Result<Self, DecodeError>;

    /// Decode from raw `params` text
    fn from_params_str(text: &str) -> Result<Self, DecodeError> {
        let raw = parse_params(text)?;
        Self::from_params(Some(&raw))
    }
}

macro_rules! impl_try_from_value {
    ($($shape:ty),* $(,)?) => {
        $(
            impl TryFrom<&Value> for $shape {
                type Error = DecodeError;

                fn try_from(value: &Value) -> Result<Self, Self::Error> {
                    <$shape as FromParams>::from_params(Some(value))
                }
            }
        )*
    };
}

/// Arguments for `personal_newAccount`: `[passphrase]`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct NewAccountArgs {
    pub passphrase: String,
}

impl FromParams for NewAccountArgs {
    const METHOD: &'static str = "personal_newAccount";
    const MIN_PARAMS: usize = 1;

    fn from_params(params: Option<&Value>) -> Result<Self, DecodeError> {
        let elems = positional(params, Self::MIN_PARAMS)?;
        Ok(Self {
            passphrase: expect_str(&elems[0], "passphrase")?,
        })
    }
}

/// Arguments for `personal_listTransactions`
///
/// Accepts both `[["a", "b"]]` and `["a", "b"]`: when the first element is
/// itself an array it is the account list, otherwise the whole parameter
/// list is. Every account must be a string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ListTransactionsArgs {
    pub accounts: Vec<String>,
}

impl FromParams for ListTransactionsArgs {
    const METHOD: &'static str = "personal_listTransactions";
    const MIN_PARAMS: usize = 1;

    fn from_params(params: Option<&Value>) -> Result<Self, DecodeError> {
        let elems = positional(params, Self::MIN_PARAMS)?;

        let list: &[Value] = match &elems[0] {
            Value::Array(inner) => inner,
            _ => elems,
        };

        let accounts = list
            .iter()
            .map(|account| expect_str(account, "accounts"))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { accounts })
    }
}

/// Arguments for `personal_deleteAccount`: `[address, passphrase]`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DeleteAccountArgs {
    pub address: String,
    pub passphrase: String,
}

impl FromParams for DeleteAccountArgs {
    const METHOD: &'static str = "personal_deleteAccount";
    const MIN_PARAMS: usize = 2;

    fn from_params(params: Option<&Value>) -> Result<Self, DecodeError> {
        let elems = positional(params, Self::MIN_PARAMS)?;
        let address = expect_str(&elems[0], "address")?;
        let passphrase = expect_str(&elems[1], "passphrase")?;
        Ok(Self { address, passphrase })
    }
}

/// Arguments for `personal_unlockAccount`: `[address, passphrase?, duration?]`
///
/// `passphrase` defaults to the empty string and `duration_secs` to 0 when
/// absent or null. A duration that is present but not a number is ignored
/// and left at 0 instead of failing the request. Fractional and out-of-range
/// numbers saturate into `u64` (negative values become 0).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct UnlockAccountArgs {
    pub address: String,
    pub passphrase: String,
    pub duration_secs: u64,
}

impl UnlockAccountArgs {
    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.duration_secs)
    }
}

impl FromParams for UnlockAccountArgs {
    const METHOD: &'static str = "personal_unlockAccount";
    const MIN_PARAMS: usize = 1;

    fn from_params(params: Option<&Value>) -> Result<Self, DecodeError> {
        let elems = positional(params, Self::MIN_PARAMS)?;
        let address = expect_str(&elems[0], "address")?;
        let passphrase = optional_str(elems, 1, "passphrase")?.unwrap_or_default();
        // `as` truncates toward zero and saturates
        let duration_secs = optional_f64(elems, 2).map_or(0, |secs| secs as u64);

        Ok(Self {
            address,
            passphrase,
            duration_secs,
        })
    }
}

/// Arguments for `personal_isAccountLocked`: `[address]`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct IsAccountLockedArgs {
    pub address: String,
}

impl FromParams for IsAccountLockedArgs {
    const METHOD: &'static str = "personal_isAccountLocked";
    const MIN_PARAMS: usize = 1;

    fn from_params(params: Option<&Value>) -> Result<Self, DecodeError> {
        let elems = positional(params, Self::MIN_PARAMS)?;
        Ok(Self {
            address: expect_str(&elems[0], "address")?,
        })
    }
}

impl_try_from_value!(
    NewAccountArgs,
    ListTransactionsArgs,
    DeleteAccountArgs,
    UnlockAccountArgs,
    IsAccountLockedArgs,
);
