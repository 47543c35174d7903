use core::str::FromStr;

use alloy_primitives::Address;

use crate::{
    AnvilMethod, FormatError, Param, ParamKind,
    convert::{encode_u64, to_hex_if_bytes, to_hex_if_integer, to_normalized_address},
    validation::{is_valid_address, is_valid_bytes},
};

/// The parameter layout a method is normalized into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Shape {
    /// `[DATA, 20 bytes]`
    Account,
    /// `[DATA, 20 bytes, QUANTITY]`
    AccountQuantity,
    /// `[DATA, 20 bytes, DATA]`
    AccountData,
    /// `[DATA, 20 bytes, QUANTITY, DATA]`
    AccountQuantityData,
    /// Params are sent as supplied.
    Passthrough,
}

impl Shape {
    fn of(method: AnvilMethod) -> Self {
        match method {
            AnvilMethod::ImpersonateAccount | AnvilMethod::StopImpersonatingAccount => {
                Shape::Account
            }
            AnvilMethod::SetBalance => Shape::AccountQuantity,
            AnvilMethod::SetCode => Shape::AccountData,
            AnvilMethod::SetStorageAt => Shape::AccountQuantityData,
            AnvilMethod::AutoImpersonateAccount
            | AnvilMethod::GetAutomine
            | AnvilMethod::Mine
            | AnvilMethod::DropTransaction
            | AnvilMethod::Reset
            | AnvilMethod::SetRpcUrl
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
            | AnvilMethod::TxpoolContent => Shape::Passthrough,
        }
    }

    fn arity(self) -> usize {
        match self {
            Shape::Account => 1,
            Shape::AccountQuantity | Shape::AccountData => 2,
            Shape::AccountQuantityData => 3,
            Shape::Passthrough => 0,
        }
    }
}

/// Formats the params of a request into their wire encoding.
///
/// Only methods that take an account as first param are normalized. When
/// such a method receives too few params, or for any other method, the
/// params are returned as supplied. This function never fails; see
/// [`try_format_request`] for a strict alternative.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub fn format_request(method: AnvilMethod, params: Vec<Param>) -> Vec<Param> {
    let shape = Shape::of(method);
    let formatted = match (shape, params.as_slice()) {
        (Shape::Account, [account, ..]) => Some(vec![Param::Address(to_normalized_address(
            account,
        ))]),
        (Shape::AccountQuantity, [account, quantity, ..]) => Some(vec![
            Param::Address(to_normalized_address(account)),
            Param::Str(to_hex_if_integer(quantity)),
        ]),
        (Shape::AccountData, [account, data, ..]) => Some(vec![
            Param::Address(to_normalized_address(account)),
            Param::Str(to_hex_if_bytes(data)),
        ]),
        (Shape::AccountQuantityData, [account, slot, value, ..]) => Some(vec![
            Param::Address(to_normalized_address(account)),
            Param::Str(to_hex_if_integer(slot)),
            Param::Str(to_hex_if_bytes(value)),
        ]),
        _ => None,
    };

    formatted.unwrap_or_else(|| {
        if shape != Shape::Passthrough {
            log::debug!(
                "Method {method} expects {} params but got {}. Sending params as supplied.",
                shape.arity(),
                params.len()
            );
        }
        params
    })
}

/// Formats the params of a request into their wire encoding, rejecting
/// malformed input.
///
/// Applies the same rules as [`format_request`], but returns an error when a
/// normalized method receives too few params or a param cannot be encoded.
/// Strings supplied as data must be `0x`-prefixed, even-length hex.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub fn try_format_request(
    method: AnvilMethod,
    params: Vec<Param>,
) -> Result<Vec<Param>, FormatError> {
    let shape = Shape::of(method);
    if shape == Shape::Passthrough {
        return Ok(params);
    }

    match (shape, params.as_slice()) {
        (Shape::Account, [account, ..]) => Ok(vec![strict_address(method, 0, account)?]),
        (Shape::AccountQuantity, [account, quantity, ..]) => Ok(vec![
            strict_address(method, 0, account)?,
            strict_quantity(method, 1, quantity)?,
        ]),
        (Shape::AccountData, [account, data, ..]) => Ok(vec![
            strict_address(method, 0, account)?,
            strict_data(method, 1, data)?,
        ]),
        (Shape::AccountQuantityData, [account, slot, value, ..]) => Ok(vec![
            strict_address(method, 0, account)?,
            strict_quantity(method, 1, slot)?,
            strict_data(method, 2, value)?,
        ]),
        _ => Err(FormatError::InsufficientParams {
            method,
            expected: shape.arity(),
            actual: params.len(),
        }),
    }
}

fn strict_address(method: AnvilMethod, index: usize, param: &Param) -> Result<Param, FormatError> {
    match param {
        Param::Address(address) => Ok(Param::Address(*address)),
        Param::Str(value) => {
            let invalid = || FormatError::InvalidAddress {
                value: value.clone(),
            };

            if !is_valid_address(value) {
                return Err(invalid());
            }

            Address::from_str(value)
                .map(Param::Address)
                .map_err(|_error| invalid())
        }
        other => Err(unexpected(method, index, ParamKind::Address, other)),
    }
}

fn strict_quantity(method: AnvilMethod, index: usize, param: &Param) -> Result<Param, FormatError> {
    match param {
        Param::I64(value) => {
            let value = u64::try_from(*value)
                .map_err(|_error| FormatError::NegativeQuantity { value: *value })?;
            Ok(Param::Str(encode_u64(value)))
        }
        Param::U64(_) | Param::BigInt(Some(_)) => Ok(Param::Str(to_hex_if_integer(param))),
        Param::BigInt(None) => Err(FormatError::UnexpectedParam {
            method,
            index,
            expected: ParamKind::Integer,
            found: ParamKind::Null,
        }),
        other => Err(unexpected(method, index, ParamKind::Integer, other)),
    }
}

fn strict_data(method: AnvilMethod, index: usize, param: &Param) -> Result<Param, FormatError> {
    match param {
        Param::Bytes(_) => Ok(Param::Str(to_hex_if_bytes(param))),
        Param::Str(value) => {
            let data = to_hex_if_bytes(param);
            if is_valid_bytes(&data) && data.len() % 2 == 0 {
                Ok(Param::Str(data))
            } else {
                Err(FormatError::InvalidData {
                    value: value.clone(),
                })
            }
        }
        other => Err(unexpected(method, index, ParamKind::Bytes, other)),
    }
}

fn unexpected(
    method: AnvilMethod,
    index: usize,
    expected: ParamKind,
    found: &Param,
) -> FormatError {
    FormatError::UnexpectedParam {
        method,
        index,
        expected,
        found: found.kind(),
    }
}
