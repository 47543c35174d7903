use core::fmt;

use crate::AnvilMethod;

/// The kind of a [`crate::Param`], used in error messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamKind {
    /// Typed address
    Address,
    /// String
    Str,
    /// Raw bytes
    Bytes,
    /// Any integer width
    Integer,
    /// Boolean
    Bool,
    /// Typed 32-byte hash
    Hash,
    /// Arbitrary JSON value
    Json,
    /// JSON `null`
    Null,
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParamKind::Address => "ADDRESS",
            ParamKind::Str => "STRING",
            ParamKind::Bytes => "BYTES",
            ParamKind::Integer => "QUANTITY",
            ParamKind::Bool => "BOOLEAN",
            ParamKind::Hash => "HASH",
            ParamKind::Json => "OBJECT",
            ParamKind::Null => "NULL",
        };
        f.write_str(name)
    }
}

/// An error raised by the strict request and response formatters.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// Fewer parameters were supplied than the method requires.
    #[error("Method {method} expects {expected} params but got {actual}")]
    InsufficientParams {
        /// The invoked method
        method: AnvilMethod,
        /// The number of params the method requires
        expected: usize,
        /// The number of params that were supplied
        actual: usize,
    },
    /// A string could not be parsed as a 20-byte address.
    #[error("invalid value \"{value}\" supplied to : ADDRESS")]
    InvalidAddress {
        /// The rejected value
        value: String,
    },
    /// A string is not valid `0x`-prefixed, even-length hex.
    #[error("invalid value \"{value}\" supplied to : DATA")]
    InvalidData {
        /// The rejected value
        value: String,
    },
    /// A signed integer is negative and has no quantity encoding.
    #[error("Quantity must be non-negative but got {value}")]
    NegativeQuantity {
        /// The rejected value
        value: i64,
    },
    /// A parameter has a kind that cannot be converted.
    #[error("Param {index} of method {method} cannot be {found}; expected {expected}")]
    UnexpectedParam {
        /// The invoked method
        method: AnvilMethod,
        /// The position of the param
        index: usize,
        /// The expected wire type
        expected: ParamKind,
        /// The kind that was supplied
        found: ParamKind,
    },
    /// A response does not have the type the method returns.
    #[error("Response '{response}' of method {method} is not of type {expected}")]
    UnexpectedResponse {
        /// The invoked method
        method: AnvilMethod,
        /// The expected response type
        expected: &'static str,
        /// The response JSON
        response: String,
    },
}
