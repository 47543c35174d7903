//! The lenient conversions never fail. Inputs of an unexpected kind take a
//! default value instead: the zero address, `"0x0"`, or an empty string.

use alloy_primitives::{Address, B256, FixedBytes};

use crate::Param;

/// Converts a parameter into a typed address.
///
/// Strings are converted with [`hex_to_address`]. Any other kind yields the
/// zero address.
pub fn to_normalized_address(param: &Param) -> Address {
    match param {
        Param::Str(value) => hex_to_address(value),
        Param::Address(address) => *address,
        other => {
            log::warn!(
                "Cannot convert {} param to an address. Using the zero address.",
                other.kind()
            );
            Address::ZERO
        }
    }
}

/// Converts a parameter into `0x`-prefixed hex data.
///
/// Bytes are hex encoded. Strings are returned as-is when they start with
/// `0x`, otherwise they are prefixed. Any other kind yields an empty string.
pub fn to_hex_if_bytes(param: &Param) -> String {
    match param {
        Param::Bytes(bytes) => hex::encode_prefixed(bytes),
        Param::Str(value) => {
            if value.starts_with("0x") {
                value.clone()
            } else {
                format!("0x{value}")
            }
        }
        other => {
            log::warn!(
                "Cannot convert {} param to hex data. Using an empty string.",
                other.kind()
            );
            String::new()
        }
    }
}

/// Converts a parameter into a minimal-width hex quantity.
///
/// Signed integers are reinterpreted as their unsigned 64-bit two's
/// complement. An absent big integer, or any non-integer kind, yields `"0x0"`.
pub fn to_hex_if_integer(param: &Param) -> String {
    match param {
        Param::I64(value) => encode_u64(u64::from_ne_bytes(value.to_ne_bytes())),
        Param::U64(value) => encode_u64(*value),
        Param::BigInt(Some(value)) => format!("0x{value:x}"),
        Param::BigInt(None) => String::from("0x0"),
        other => {
            log::warn!(
                "Cannot convert {} param to a quantity. Using 0x0.",
                other.kind()
            );
            String::from("0x0")
        }
    }
}

/// Converts a hex string into an address, leniently.
///
/// See [`hex_to_hash`] for the conversion rules.
pub fn hex_to_address(value: &str) -> Address {
    Address::from(right_aligned::<20>(&decode_lenient(value)))
}

/// Converts a hex string into a 32-byte hash, leniently.
///
/// An optional `0x` or `0X` prefix is stripped and an odd number of digits
/// is padded with a leading zero. Digit pairs are decoded up to the first
/// invalid pair. The decoded bytes are right-aligned: shorter input is
/// left-padded with zeroes, longer input keeps its rightmost bytes.
pub fn hex_to_hash(value: &str) -> B256 {
    right_aligned::<32>(&decode_lenient(value))
}

pub(crate) fn encode_u64(value: u64) -> String {
    format!("{value:#x}")
}

fn decode_lenient(value: &str) -> Vec<u8> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);

    let padded;
    let digits = if digits.len() % 2 == 1 {
        padded = format!("0{digits}");
        padded.as_str()
    } else {
        digits
    };

    digits
        .as_bytes()
        .chunks_exact(2)
        .map_while(|pair| match pair {
            [high, low] => Some((nibble(*high)? << 4) | nibble(*low)?),
            _ => None,
        })
        .collect()
}

fn nibble(digit: u8) -> Option<u8> {
    char::from(digit)
        .to_digit(16)
        .and_then(|value| u8::try_from(value).ok())
}

fn right_aligned<const N: usize>(bytes: &[u8]) -> FixedBytes<N> {
    let tail = bytes
        .get(bytes.len().saturating_sub(N)..)
        .unwrap_or_default();

    let mut result = FixedBytes::<N>::ZERO;
    if let Some(destination) = result.as_mut_slice().get_mut(N - tail.len()..) {
        destination.copy_from_slice(tail);
    }
    result
}
