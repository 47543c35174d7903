use serde::{Deserialize, Serialize};

use crate::{AnvilMethod, Param, format_response};

/// Invalid JSON was received.
pub const PARSE_ERROR: i16 = -32700;
/// The JSON sent is not a valid request object.
pub const INVALID_REQUEST: i16 = -32600;
/// The method does not exist or is not available.
pub const METHOD_NOT_FOUND: i16 = -32601;
/// Invalid method parameters.
pub const INVALID_PARAMS: i16 = -32602;
/// Internal JSON-RPC error.
pub const INTERNAL_ERROR: i16 = -32603;

/// The JSON-RPC protocol version
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum Version {
    /// Version 2.0
    #[default]
    #[serde(rename = "2.0")]
    V2_0,
}

/// The identifier of a request, echoed by the response.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Id {
    /// A numeric id
    Num(u64),
    /// A string id
    Str(String),
    /// The id of a request that could not be read
    Null,
}

impl From<u64> for Id {
    fn from(value: u64) -> Self {
        Id::Num(value)
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        Id::Str(value)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Id::Str(value.to_string())
    }
}

/// A JSON-RPC request to an Anvil node.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Request {
    /// The protocol version
    #[serde(rename = "jsonrpc")]
    pub version: Version,
    /// The invoked method
    pub method: AnvilMethod,
    /// The method's params, in wire encoding
    pub params: Vec<Param>,
    /// The request id
    pub id: Id,
}

impl Request {
    /// Constructs a request. The params are used as supplied; see
    /// [`crate::format_request`] to normalize them first.
    pub fn new(id: impl Into<Id>, method: AnvilMethod, params: Vec<Param>) -> Self {
        Self {
            version: Version::V2_0,
            method,
            params,
            id: id.into(),
        }
    }
}

/// A JSON-RPC error object.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, thiserror::Error)]
#[error("{message} ({code})")]
pub struct Error {
    /// The error code
    pub code: i16,
    /// A short description of the error
    pub message: String,
    /// Additional information about the error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// A JSON-RPC response.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Response<T> {
    /// The protocol version
    pub jsonrpc: Version,
    /// The id of the request
    pub id: Id,
    /// The result or error
    #[serde(flatten)]
    pub data: ResponseData<T>,
}

/// The payload of a JSON-RPC response.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ResponseData<T> {
    /// An error response
    Error {
        /// The error
        error: Error,
    },
    /// A successful response
    Success {
        /// The result
        result: T,
    },
}

impl<T> ResponseData<T> {
    /// Converts the payload into a `Result`.
    pub fn into_result(self) -> Result<T, Error> {
        match self {
            ResponseData::Success { result } => Ok(result),
            ResponseData::Error { error } => Err(error),
        }
    }
}

impl<T> Response<T> {
    /// Converts the response into a `Result`, dropping the envelope.
    pub fn into_result(self) -> Result<T, Error> {
        self.data.into_result()
    }
}

/// Normalizes the result of a response to a request for `method`.
///
/// Error responses are returned unchanged.
pub fn format_jsonrpc_response(
    method: AnvilMethod,
    response: Response<serde_json::Value>,
) -> Result<crate::Response, Error> {
    response
        .into_result()
        .map(|result| format_response(method, result))
}
