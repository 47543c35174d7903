use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Pruning of historic state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum PruneHistory {
    /// Enables or disables pruning of all historic state.
    Enabled(bool),
    /// Keeps the state of the given number of most recent blocks.
    Count(u64),
}

/// Launch options of an Anvil node. Options that are not set are left to the
/// node's defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct AnvilConfig {
    // Node
    /// Number of dev accounts to generate
    pub accounts: Option<u64>,
    /// Block time in seconds for interval mining
    pub block_time: Option<u64>,
    /// Balance of every dev account, in ether
    pub balance: Option<u64>,
    /// Writes the node's configuration to the given file
    pub config_out: Option<String>,
    /// Derivation path of the child key pairs
    pub derivation_path: Option<String>,
    /// Dumps the state of the chain on exit to the given file
    pub dump_state: Option<String>,
    /// The EVM hardfork to use
    pub hardfork: Option<String>,
    /// Genesis file to initialize the chain with
    pub init: Option<String>,
    /// Path of the IPC endpoint
    pub ipc: Option<String>,
    /// Initializes the chain from a previously dumped state
    pub load_state: Option<String>,
    /// BIP39 mnemonic of the dev accounts
    pub mnemonic: Option<String>,
    /// Disables auto and interval mining
    pub no_mining: Option<bool>,
    /// Order of transactions in the mempool
    pub order: Option<String>,
    /// Pruning of historic state
    pub prune_history: Option<PruneHistory>,
    /// Interval in seconds at which the state is dumped
    pub state_interval: Option<u64>,
    /// Suppresses the node's output
    pub silent: Option<bool>,
    /// Loads the state from and dumps it to the given file
    pub state: Option<String>,
    /// Timestamp of the genesis block
    pub timestamp: Option<u64>,
    /// Number of blocks whose transactions are kept in memory
    pub transaction_block_keeper: Option<u64>,

    // Server
    /// Value of the `Access-Control-Allow-Origin` response header
    pub allow_origin: Option<String>,
    /// Disables CORS
    pub no_cors: Option<bool>,

    // Fork
    /// Assumed compute units per second of the fork provider
    pub compute_units_per_second: Option<u64>,
    /// JSON-RPC URL of the node to fork from
    pub fork_url: Option<String>,
    /// Block number to fork at
    pub fork_block_number: Option<u64>,
    /// Chain id reported by the fork
    pub fork_chain_id: Option<u64>,
    /// Initial retry backoff of the fork provider, in milliseconds
    pub fork_retry_backoff: Option<u64>,
    /// Disables rate limiting of the fork provider
    pub no_rate_limit: Option<bool>,
    /// Disables caching of fork storage
    pub no_storage_caching: Option<bool>,
    /// Number of retry requests for spurious networks
    pub retries: Option<u64>,
    /// Timeout of fork requests, in milliseconds
    pub timeout: Option<u64>,

    // Environment
    /// Base fee of the genesis block
    pub block_base_fee_per_gas: Option<u64>,
    /// Chain id of the node
    pub chain_id: Option<u64>,
    /// Maximum contract code size, in bytes
    pub code_size_limit: Option<u64>,
    /// Disables the block gas limit
    pub disable_block_gas_limit: Option<bool>,
    /// Block gas limit
    pub gas_limit: Option<u64>,
    /// Gas price of transactions
    pub gas_price: Option<u64>,

    // EVM
    /// Impersonates every sender
    pub auto_impersonate: Option<bool>,
    /// Enables steps tracing
    pub steps_tracing: Option<bool>,

    /// Interface to listen on. Defaults to [`crate::DEFAULT_HOST`].
    pub host: Option<String>,
    /// Port to listen on. Defaults to a free port.
    pub port: Option<u16>,
}

impl AnvilConfig {
    /// Parses a configuration from TOML.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(ConfigError::from)
    }

    /// Reads a configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::debug!("Loading Anvil config from '{}'", path.display());

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&contents)
    }
}
