use alloy_primitives::{Address, B256, Bytes, U256};
use serde::Serialize;

use crate::error::ParamKind;

/// A caller-supplied JSON-RPC parameter.
///
/// Each variant serializes to its natural JSON form, so a list of
/// parameters can be placed directly into a request's `params`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Param {
    /// A typed 20-byte account address.
    Address(Address),
    /// A string, usually hex-encoded.
    Str(String),
    /// Raw bytes, serialized as `0x`-prefixed hex.
    Bytes(Bytes),
    /// A signed 64-bit integer.
    I64(i64),
    /// An unsigned 64-bit integer.
    U64(u64),
    /// A big integer, which may be absent.
    ///
    /// Limited to unsigned 256-bit values; larger or negative integers
    /// cannot be represented.
    BigInt(Option<U256>),
    /// A boolean flag.
    Bool(bool),
    /// A typed 32-byte hash.
    Hash(B256),
    /// Any other JSON value, e.g. an options object.
    Json(serde_json::Value),
    /// JSON `null`.
    Null,
}

impl Param {
    /// Retrieves the kind of the parameter.
    pub fn kind(&self) -> ParamKind {
        match self {
            Param::Address(_) => ParamKind::Address,
            Param::Str(_) => ParamKind::Str,
            Param::Bytes(_) => ParamKind::Bytes,
            Param::I64(_) | Param::U64(_) | Param::BigInt(_) => ParamKind::Integer,
            Param::Bool(_) => ParamKind::Bool,
            Param::Hash(_) => ParamKind::Hash,
            Param::Json(_) => ParamKind::Json,
            Param::Null => ParamKind::Null,
        }
    }
}

impl From<Address> for Param {
    fn from(value: Address) -> Self {
        Param::Address(value)
    }
}

impl From<&str> for Param {
    fn from(value: &str) -> Self {
        Param::Str(value.to_string())
    }
}

impl From<String> for Param {
    fn from(value: String) -> Self {
        Param::Str(value)
    }
}

impl From<Bytes> for Param {
    fn from(value: Bytes) -> Self {
        Param::Bytes(value)
    }
}

impl From<Vec<u8>> for Param {
    fn from(value: Vec<u8>) -> Self {
        Param::Bytes(Bytes::from(value))
    }
}

impl From<&[u8]> for Param {
    fn from(value: &[u8]) -> Self {
        Param::Bytes(Bytes::copy_from_slice(value))
    }
}

impl From<i64> for Param {
    fn from(value: i64) -> Self {
        Param::I64(value)
    }
}

impl From<u64> for Param {
    fn from(value: u64) -> Self {
        Param::U64(value)
    }
}

impl From<U256> for Param {
    fn from(value: U256) -> Self {
        Param::BigInt(Some(value))
    }
}

impl From<Option<U256>> for Param {
    fn from(value: Option<U256>) -> Self {
        Param::BigInt(value)
    }
}

impl From<bool> for Param {
    fn from(value: bool) -> Self {
        Param::Bool(value)
    }
}

impl From<B256> for Param {
    fn from(value: B256) -> Self {
        Param::Hash(value)
    }
}

impl From<serde_json::Value> for Param {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Param::Null,
            value => Param::Json(value),
        }
    }
}
