use alloy_primitives::{Address, B256, Bytes, U256};

use crate::{AnvilMethod, Forking, Param, convert::encode_u64, format_request, jsonrpc};

/// A typed invocation of an Anvil JSON-RPC method.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnvilRequest {
    /// # `anvil_impersonateAccount`
    ImpersonateAccount(Address),
    /// # `anvil_stopImpersonatingAccount`
    StopImpersonatingAccount(Address),
    /// # `anvil_autoImpersonateAccount`
    AutoImpersonateAccount(bool),
    /// # `anvil_getAutomine`
    GetAutomine,
    /// # `evm_setAutomine`
    SetAutomine(bool),
    /// # `anvil_mine`
    Mine {
        /// Number of blocks to mine. Defaults to one.
        blocks: Option<u64>,
        /// Seconds between the timestamps of the mined blocks.
        interval: Option<u64>,
    },
    /// # `evm_setIntervalMining`
    ///
    /// Zero disables interval mining.
    SetIntervalMining(u64),
    /// # `anvil_dropTransaction`
    DropTransaction(B256),
    /// # `anvil_reset`
    Reset(Option<Forking>),
    /// # `anvil_setChainId`
    SetChainId(u64),
    /// # `anvil_setBalance`
    SetBalance(Address, U256),
    /// # `anvil_setCode`
    SetCode(Address, Bytes),
    /// # `anvil_setNonce`
    SetNonce(Address, u64),
    /// # `anvil_setStorageAt`
    SetStorageAt {
        /// The account whose storage is modified.
        address: Address,
        /// The storage slot index.
        slot: U256,
        /// The new 32-byte value of the slot.
        value: B256,
    },
    /// # `evm_setNextBlockTimestamp`
    SetNextBlockTimestamp(u64),
    /// # `evm_snapshot`
    Snapshot,
    /// # `evm_revert`
    Revert(U256),
    /// # `evm_increaseTime`
    IncreaseTime(u64),
}

impl AnvilRequest {
    /// Retrieves the invoked method.
    pub fn method(&self) -> AnvilMethod {
        match self {
            AnvilRequest::ImpersonateAccount(_) => AnvilMethod::ImpersonateAccount,
            AnvilRequest::StopImpersonatingAccount(_) => AnvilMethod::StopImpersonatingAccount,
            AnvilRequest::AutoImpersonateAccount(_) => AnvilMethod::AutoImpersonateAccount,
            AnvilRequest::GetAutomine => AnvilMethod::GetAutomine,
            AnvilRequest::SetAutomine(_) => AnvilMethod::EvmSetAutomine,
            AnvilRequest::Mine { .. } => AnvilMethod::Mine,
            AnvilRequest::SetIntervalMining(_) => AnvilMethod::EvmSetIntervalMining,
            AnvilRequest::DropTransaction(_) => AnvilMethod::DropTransaction,
            AnvilRequest::Reset(_) => AnvilMethod::Reset,
            AnvilRequest::SetChainId(_) => AnvilMethod::SetChainId,
            AnvilRequest::SetBalance(_, _) => AnvilMethod::SetBalance,
            AnvilRequest::SetCode(_, _) => AnvilMethod::SetCode,
            AnvilRequest::SetNonce(_, _) => AnvilMethod::SetNonce,
            AnvilRequest::SetStorageAt { .. } => AnvilMethod::SetStorageAt,
            AnvilRequest::SetNextBlockTimestamp(_) => AnvilMethod::EvmSetNextBlockTimestamp,
            AnvilRequest::Snapshot => AnvilMethod::EvmSnapshot,
            AnvilRequest::Revert(_) => AnvilMethod::EvmRevert,
            AnvilRequest::IncreaseTime(_) => AnvilMethod::EvmIncreaseTime,
        }
    }

    /// Converts the invocation into its params, before normalization.
    pub fn into_params(self) -> Vec<Param> {
        match self {
            AnvilRequest::ImpersonateAccount(address)
            | AnvilRequest::StopImpersonatingAccount(address) => vec![Param::Address(address)],
            AnvilRequest::AutoImpersonateAccount(enabled) | AnvilRequest::SetAutomine(enabled) => {
                vec![Param::Bool(enabled)]
            }
            AnvilRequest::GetAutomine | AnvilRequest::Snapshot => Vec::new(),
            AnvilRequest::Mine { blocks, interval } => {
                vec![quantity_or_null(blocks), quantity_or_null(interval)]
            }
            AnvilRequest::SetIntervalMining(value)
            | AnvilRequest::SetChainId(value)
            | AnvilRequest::SetNextBlockTimestamp(value)
            | AnvilRequest::IncreaseTime(value) => vec![quantity(value)],
            AnvilRequest::DropTransaction(hash) => vec![Param::Hash(hash)],
            AnvilRequest::Reset(forking) => vec![forking.map_or(Param::Null, Param::from)],
            AnvilRequest::SetBalance(address, balance) => {
                vec![Param::Address(address), Param::from(balance)]
            }
            AnvilRequest::SetCode(address, code) => {
                vec![Param::Address(address), Param::Bytes(code)]
            }
            AnvilRequest::SetNonce(address, nonce) => {
                vec![Param::Address(address), quantity(nonce)]
            }
            AnvilRequest::SetStorageAt {
                address,
                slot,
                value,
            } => vec![
                Param::Address(address),
                Param::from(slot),
                Param::from(value.as_slice()),
            ],
            AnvilRequest::Revert(snapshot_id) => vec![Param::from(snapshot_id)],
        }
    }

    /// Converts the invocation into a JSON-RPC request with normalized
    /// params.
    pub fn into_jsonrpc(self, id: impl Into<jsonrpc::Id>) -> jsonrpc::Request {
        let method = self.method();
        let params = format_request(method, self.into_params());
        jsonrpc::Request::new(id, method, params)
    }
}

fn quantity(value: u64) -> Param {
    Param::Str(encode_u64(value))
}

fn quantity_or_null(value: Option<u64>) -> Param {
    value.map_or(Param::Null, quantity)
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{address, b256};
    use serde_json::json;

    use super::*;

    #[test]
    fn set_storage_at_is_normalized() {
        let request = AnvilRequest::SetStorageAt {
            address: address!("0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"),
            slot: U256::from(9),
            value: b256!("0x0000000000000000000000000000000000000000000000000000000000002710"),
        };

        let request = request.into_jsonrpc(1_u64);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "jsonrpc": "2.0",
                "method": "anvil_setStorageAt",
                "params": [
                    "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48",
                    "0x9",
                    "0x0000000000000000000000000000000000000000000000000000000000002710"
                ],
                "id": 1
            })
        );
    }

    #[test]
    fn mine_with_defaults() {
        let params = AnvilRequest::Mine {
            blocks: Some(1),
            interval: None,
        }
        .into_params();
        assert_eq!(params, vec![Param::from("0x1"), Param::Null]);
    }

    #[test]
    fn reset_without_forking() {
        let request = AnvilRequest::Reset(None);
        assert_eq!(request.method(), AnvilMethod::Reset);
        assert_eq!(request.into_params(), vec![Param::Null]);
    }

    #[test]
    fn set_nonce_uses_quantity() {
        let params =
            AnvilRequest::SetNonce(Address::ZERO, 10).into_jsonrpc(jsonrpc::Id::Str("a".into()));
        assert_eq!(
            serde_json::to_value(&params.params).unwrap(),
            json!(["0x0000000000000000000000000000000000000000", "0xa"])
        );
    }
}
