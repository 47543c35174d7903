use core::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A JSON-RPC method exposed by an Anvil development node.
///
/// The wire names are part of the node's public interface; changing any of
/// them is a breaking change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub enum AnvilMethod {
    /// # `anvil_impersonateAccount`
    ///
    /// Sends transactions on behalf of an address without its private key.
    #[serde(rename = "anvil_impersonateAccount")]
    ImpersonateAccount,
    /// # `anvil_stopImpersonatingAccount`
    #[serde(rename = "anvil_stopImpersonatingAccount")]
    StopImpersonatingAccount,
    /// # `anvil_autoImpersonateAccount`
    ///
    /// Toggles impersonation of every sender.
    #[serde(rename = "anvil_autoImpersonateAccount")]
    AutoImpersonateAccount,
    /// # `anvil_getAutomine`
    ///
    /// ## Result
    ///
    /// `Boolean` - `true` if automining is enabled.
    #[serde(rename = "anvil_getAutomine")]
    GetAutomine,
    /// # `anvil_mine`
    ///
    /// Mines a number of blocks, optionally with a time interval between
    /// them.
    #[serde(rename = "anvil_mine")]
    Mine,
    /// # `anvil_dropTransaction`
    ///
    /// Removes a transaction from the pool.
    ///
    /// ## Result
    ///
    /// `DATA, 32 bytes` - The hash of the dropped transaction.
    #[serde(rename = "anvil_dropTransaction")]
    DropTransaction,
    /// # `anvil_reset`
    ///
    /// Resets the node, optionally forking from a remote node.
    #[serde(rename = "anvil_reset")]
    Reset,
    /// # `anvil_setRpcUrl`
    #[serde(rename = "anvil_setRpcUrl")]
    SetRpcUrl,
    /// # `anvil_setBalance`
    ///
    /// ## Params
    ///
    /// `DATA, 20 bytes`, `QUANTITY`
    #[serde(rename = "anvil_setBalance")]
    SetBalance,
    /// # `anvil_setCode`
    ///
    /// ## Params
    ///
    /// `DATA, 20 bytes`, `DATA`
    #[serde(rename = "anvil_setCode")]
    SetCode,
    /// # `anvil_setNonce`
    #[serde(rename = "anvil_setNonce")]
    SetNonce,
    /// # `anvil_setStorageAt`
    ///
    /// ## Params
    ///
    /// `DATA, 20 bytes`, `QUANTITY`, `DATA`
    ///
    /// ## Result
    ///
    /// `Boolean` - `true` if the slot was written.
    #[serde(rename = "anvil_setStorageAt")]
    SetStorageAt,
    /// # `anvil_setCoinbase`
    #[serde(rename = "anvil_setCoinbase")]
    SetCoinbase,
    /// # `anvil_setLoggingEnabled`
    #[serde(rename = "anvil_setLoggingEnabled")]
    SetLoggingEnabled,
    /// # `anvil_setMinGasPrice`
    #[serde(rename = "anvil_setMinGasPrice")]
    SetMinGasPrice,
    /// # `anvil_setNextBlockBaseFeePerGas`
    #[serde(rename = "anvil_setNextBlockBaseFeePerGas")]
    SetNextBlockBaseFeePerGas,
    /// # `anvil_setChainId`
    #[serde(rename = "anvil_setChainId")]
    SetChainId,
    /// # `anvil_dumpState`
    #[serde(rename = "anvil_dumpState")]
    DumpState,
    /// # `anvil_loadState`
    #[serde(rename = "anvil_loadState")]
    LoadState,
    /// # `anvil_nodeInfo`
    #[serde(rename = "anvil_nodeInfo")]
    NodeInfo,
    /// # `evm_setAutomine`
    #[serde(rename = "evm_setAutomine")]
    EvmSetAutomine,
    /// # `evm_setIntervalMining`
    #[serde(rename = "evm_setIntervalMining")]
    EvmSetIntervalMining,
    /// # `evm_snapshot`
    #[serde(rename = "evm_snapshot")]
    EvmSnapshot,
    /// # `evm_revert`
    #[serde(rename = "evm_revert")]
    EvmRevert,
    /// # `evm_increaseTime`
    #[serde(rename = "evm_increaseTime")]
    EvmIncreaseTime,
    /// # `evm_setNextBlockTimestamp`
    #[serde(rename = "evm_setNextBlockTimestamp")]
    EvmSetNextBlockTimestamp,
    /// # `anvil_setBlockTimestampInterval`
    #[serde(rename = "anvil_setBlockTimestampInterval")]
    SetBlockTimestampInterval,
    /// # `evm_setBlockGasLimit`
    #[serde(rename = "evm_setBlockGasLimit")]
    EvmSetBlockGasLimit,
    /// # `anvil_removeBlockTimestampInterval`
    #[serde(rename = "anvil_removeBlockTimestampInterval")]
    RemoveBlockTimestampInterval,
    /// # `evm_mine`
    #[serde(rename = "evm_mine")]
    EvmMine,
    /// # `anvil_enableTraces`
    #[serde(rename = "anvil_enableTraces")]
    EnableTraces,
    /// # `eth_sendUnsignedTransaction`
    #[serde(rename = "eth_sendUnsignedTransaction")]
    SendUnsignedTransaction,
    /// # `txpool_status`
    #[serde(rename = "txpool_status")]
    TxpoolStatus,
    /// # `txpool_inspect`
    #[serde(rename = "txpool_inspect")]
    TxpoolInspect,
    /// # `txpool_content`
    #[serde(rename = "txpool_content")]
    TxpoolContent,
}

/// The section of the catalog a method belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MethodGroup {
    /// `anvil_*` node management methods.
    Standard,
    /// Mining and time control methods shared with other development nodes.
    Special,
    /// Transaction pool inspection, following Geth.
    TxPool,
}

/// An error that occurs when parsing a method name that is not in the catalog.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Method {0} is not supported")]
pub struct UnknownMethod(pub String);

impl AnvilMethod {
    /// All methods, in catalog order.
    pub const ALL: [AnvilMethod; 35] = [
        AnvilMethod::ImpersonateAccount,
        AnvilMethod::StopImpersonatingAccount,
        AnvilMethod::AutoImpersonateAccount,
        AnvilMethod::GetAutomine,
        AnvilMethod::Mine,
        AnvilMethod::DropTransaction,
        AnvilMethod::Reset,
        AnvilMethod::SetRpcUrl,
        AnvilMethod::SetBalance,
        AnvilMethod::SetCode,
        AnvilMethod::SetNonce,
        AnvilMethod::SetStorageAt,
        AnvilMethod::SetCoinbase,
        AnvilMethod::SetLoggingEnabled,
        AnvilMethod::SetMinGasPrice,
        AnvilMethod::SetNextBlockBaseFeePerGas,
        AnvilMethod::SetChainId,
        AnvilMethod::DumpState,
        AnvilMethod::LoadState,
        AnvilMethod::NodeInfo,
        AnvilMethod::EvmSetAutomine,
        AnvilMethod::EvmSetIntervalMining,
        AnvilMethod::EvmSnapshot,
        AnvilMethod::EvmRevert,
        AnvilMethod::EvmIncreaseTime,
        AnvilMethod::EvmSetNextBlockTimestamp,
        AnvilMethod::SetBlockTimestampInterval,
        AnvilMethod::EvmSetBlockGasLimit,
        AnvilMethod::RemoveBlockTimestampInterval,
        AnvilMethod::EvmMine,
        AnvilMethod::EnableTraces,
        AnvilMethod::SendUnsignedTransaction,
        AnvilMethod::TxpoolStatus,
        AnvilMethod::TxpoolInspect,
        AnvilMethod::TxpoolContent,
    ];

    /// Retrieves the method's wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnvilMethod::ImpersonateAccount => "anvil_impersonateAccount",
            AnvilMethod::StopImpersonatingAccount => "anvil_stopImpersonatingAccount",
            AnvilMethod::AutoImpersonateAccount => "anvil_autoImpersonateAccount",
            AnvilMethod::GetAutomine => "anvil_getAutomine",
            AnvilMethod::Mine => "anvil_mine",
            AnvilMethod::DropTransaction => "anvil_dropTransaction",
            AnvilMethod::Reset => "anvil_reset",
            AnvilMethod::SetRpcUrl => "anvil_setRpcUrl",
            AnvilMethod::SetBalance => "anvil_setBalance",
            AnvilMethod::SetCode => "anvil_setCode",
            AnvilMethod::SetNonce => "anvil_setNonce",
            AnvilMethod::SetStorageAt => "anvil_setStorageAt",
            AnvilMethod::SetCoinbase => "anvil_setCoinbase",
            AnvilMethod::SetLoggingEnabled => "anvil_setLoggingEnabled",
            AnvilMethod::SetMinGasPrice => "anvil_setMinGasPrice",
            AnvilMethod::SetNextBlockBaseFeePerGas => "anvil_setNextBlockBaseFeePerGas",
            AnvilMethod::SetChainId => "anvil_setChainId",
            AnvilMethod::DumpState => "anvil_dumpState",
            AnvilMethod::LoadState => "anvil_loadState",
            AnvilMethod::NodeInfo => "anvil_nodeInfo",
            AnvilMethod::EvmSetAutomine => "evm_setAutomine",
            AnvilMethod::EvmSetIntervalMining => "evm_setIntervalMining",
            AnvilMethod::EvmSnapshot => "evm_snapshot",
            AnvilMethod::EvmRevert => "evm_revert",
            AnvilMethod::EvmIncreaseTime => "evm_increaseTime",
            AnvilMethod::EvmSetNextBlockTimestamp => "evm_setNextBlockTimestamp",
            AnvilMethod::SetBlockTimestampInterval => "anvil_setBlockTimestampInterval",
            AnvilMethod::EvmSetBlockGasLimit => "evm_setBlockGasLimit",
            AnvilMethod::RemoveBlockTimestampInterval => "anvil_removeBlockTimestampInterval",
            AnvilMethod::EvmMine => "evm_mine",
            AnvilMethod::EnableTraces => "anvil_enableTraces",
            AnvilMethod::SendUnsignedTransaction => "eth_sendUnsignedTransaction",
            AnvilMethod::TxpoolStatus => "txpool_status",
            AnvilMethod::TxpoolInspect => "txpool_inspect",
            AnvilMethod::TxpoolContent => "txpool_content",
        }
    }

    /// Retrieves the catalog section of the method.
    pub fn group(&self) -> MethodGroup {
        match self {
            AnvilMethod::ImpersonateAccount
            | AnvilMethod::StopImpersonatingAccount
            | AnvilMethod::AutoImpersonateAccount
            | AnvilMethod::GetAutomine
            | AnvilMethod::Mine
            | AnvilMethod::DropTransaction
            | AnvilMethod::Reset
            | AnvilMethod::SetRpcUrl
            | AnvilMethod::SetBalance
            | AnvilMethod::SetCode
            | AnvilMethod::SetNonce
            | AnvilMethod::SetStorageAt
            | AnvilMethod::SetCoinbase
            | AnvilMethod::SetLoggingEnabled
            | AnvilMethod::SetMinGasPrice
            | AnvilMethod::SetNextBlockBaseFeePerGas
            | AnvilMethod::SetChainId
            | AnvilMethod::DumpState
            | AnvilMethod::LoadState
            | AnvilMethod::NodeInfo => MethodGroup::Standard,
            AnvilMethod::EvmSetAutomine
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
            | AnvilMethod::SendUnsignedTransaction => MethodGroup::Special,
            AnvilMethod::TxpoolStatus | AnvilMethod::TxpoolInspect | AnvilMethod::TxpoolContent => {
                MethodGroup::TxPool
            }
        }
    }
}

impl fmt::Display for AnvilMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnvilMethod {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnvilMethod::ALL
            .into_iter()
            .find(|method| method.as_str() == s)
            .ok_or_else(|| UnknownMethod(s.to_string()))
    }
}

impl From<AnvilMethod> for &'static str {
    fn from(method: AnvilMethod) -> Self {
        method.as_str()
    }
}
