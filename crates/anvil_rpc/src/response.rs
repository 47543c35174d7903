use alloy_primitives::B256;
use serde::Serialize;

use crate::{AnvilMethod, FormatError, convert::hex_to_hash};

/// A response value after normalization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Response {
    /// A boolean result
    Bool(bool),
    /// A typed 32-byte hash
    Hash(B256),
    /// The result as it was received
    Value(serde_json::Value),
}

impl Response {
    /// Converts the response back into a JSON value.
    pub fn into_value(self) -> serde_json::Value {
        match self {
            Response::Bool(value) => serde_json::Value::Bool(value),
            Response::Hash(hash) => serde_json::Value::String(hash.to_string()),
            Response::Value(value) => value,
        }
    }
}

/// The type of response a method is normalized into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Expected {
    Bool,
    Hash,
    Any,
}

impl Expected {
    fn of(method: AnvilMethod) -> Self {
        match method {
            AnvilMethod::GetAutomine | AnvilMethod::SetStorageAt => Expected::Bool,
            AnvilMethod::DropTransaction => Expected::Hash,
            AnvilMethod::ImpersonateAccount
            | AnvilMethod::StopImpersonatingAccount
            | AnvilMethod::AutoImpersonateAccount
            | AnvilMethod::Mine
            | AnvilMethod::Reset
            | AnvilMethod::SetRpcUrl
            | AnvilMethod::SetBalance
            | AnvilMethod::SetCode
            | AnvilMethod::SetNonce
            | AnvilMethod::SetCoinbase
            | AnvilMethod::SetLoggingEnabled
            | AnvilMethod::SetMinGasPrice
            | AnvilMethod::SetNextBlockBaseFeePerGas
            | AnvilMethod::SetChainId
            | AnvilMethod::DumpState
            | AnvilMethod::LoadState
            | AnvilMethod::NodeInfo
            | AnvilMethod::EvmSetAutomine
            | AnvilMethod::EvmSetIntervalMining
            | AnvilMethod::EvmSnapshot
            | AnvilMethod::EvmRevert
            | AnvilMethod::EvmIncreaseTime
            | AnvilMethod::EvmSetNextBlockTimestamp
            | AnvilMethod::SetBlockTimestampInterval
            | AnvilMethod::EvmSetBlockGasLimit
            | AnvilMethod::RemoveBlockTimestampInterval
            | AnvilMethod::EvmMine
            | AnvilMethod::EnableTraces
            | AnvilMethod::SendUnsignedTransaction
            | AnvilMethod::TxpoolStatus
            | AnvilMethod::TxpoolInspect
            | AnvilMethod::TxpoolContent => Expected::Any,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Expected::Bool => "Boolean",
            Expected::Hash => "DATA, 32 bytes",
            Expected::Any => "any",
        }
    }
}

fn normalize(
    expected: Expected,
    response: serde_json::Value,
) -> Result<Response, serde_json::Value> {
    match (expected, response) {
        (Expected::Bool, serde_json::Value::Bool(value)) => Ok(Response::Bool(value)),
        (Expected::Hash, serde_json::Value::String(value)) => {
            Ok(Response::Hash(hex_to_hash(&value)))
        }
        (Expected::Any, response) => Ok(Response::Value(response)),
        (_, response) => Err(response),
    }
}

/// Formats a decoded response into its typed value.
///
/// A response that does not have the type the method returns is passed
/// through unchanged. See [`try_format_response`] for a strict alternative.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub fn format_response(method: AnvilMethod, response: serde_json::Value) -> Response {
    normalize(Expected::of(method), response).unwrap_or_else(|response| {
        log::debug!("Unexpected response '{response}' for method {method}. Passing it through.");
        Response::Value(response)
    })
}

/// Formats a decoded response into its typed value, rejecting responses of
/// an unexpected type.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub fn try_format_response(
    method: AnvilMethod,
    response: serde_json::Value,
) -> Result<Response, FormatError> {
    let expected = Expected::of(method);
    normalize(expected, response).map_err(|response| FormatError::UnexpectedResponse {
        method,
        expected: expected.name(),
        response: response.to_string(),
    })
}
