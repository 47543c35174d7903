use serde::{Deserialize, Serialize};

use crate::Param;

/// Options for `anvil_reset`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResetOptions {
    /// The JSON-RPC URL of the node to fork from.
    pub json_rpc_url: String,
    /// The block number or tag to fork at.
    pub block_number: String,
}

impl ResetOptions {
    /// Checks that the upstream URL can be parsed.
    pub fn validate(&self) -> Result<(), url::ParseError> {
        url::Url::parse(&self.json_rpc_url).map(|_url| ())
    }
}

/// Forking configuration of `anvil_reset`, as sent by the typed request
/// helpers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Forking {
    /// The JSON-RPC URL of the node to fork from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_rpc_url: Option<String>,
    /// The block number to fork at. Defaults to the latest block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_number: Option<u64>,
}

impl From<ResetOptions> for Param {
    fn from(value: ResetOptions) -> Self {
        Param::Json(serde_json::json!({
            "json_rpc_url": value.json_rpc_url,
            "block_number": value.block_number,
        }))
    }
}

impl From<Forking> for Param {
    fn from(value: Forking) -> Self {
        let mut object = serde_json::Map::new();
        if let Some(json_rpc_url) = value.json_rpc_url {
            object.insert("jsonRpcUrl".into(), json_rpc_url.into());
        }
        if let Some(block_number) = value.block_number {
            object.insert("blockNumber".into(), block_number.into());
        }
        Param::Json(serde_json::Value::Object(object))
    }
}
