#![warn(missing_docs)]

//! Anvil JSON-RPC formatting
//!
//! Catalog of the Anvil development-node JSON-RPC methods, together with the
//! normalization of request parameters into their wire encoding and of
//! responses into typed values. Sending the requests is left to the caller.

mod config;
/// Conversions of loosely-typed parameters into their wire encoding
pub mod convert;
mod error;
mod invocation;
/// Types specific to JSON-RPC
pub mod jsonrpc;
mod method;
mod param;
mod request;
mod reset;
mod response;
/// Validation of user-supplied hex strings
pub mod validation;

pub use alloy_primitives::{Address, B256, Bytes, U256};

pub use self::{
    config::{ConfigError, Formatter, FormatterConfig, STRICTNESS_ENV_VAR, Strictness},
    error::{FormatError, ParamKind},
    invocation::AnvilRequest,
    method::{AnvilMethod, MethodGroup, UnknownMethod},
    param::Param,
    request::{format_request, try_format_request},
    reset::{Forking, ResetOptions},
    response::{Response, format_response, try_format_response},
};
