use core::fmt::Display;

use crate::{AnvilConfig, PruneHistory};

/// Accumulates `anvil` command-line arguments.
#[derive(Default)]
struct CliArgs {
    args: Vec<String>,
}

impl CliArgs {
    fn flag(&mut self, name: &str, enabled: Option<bool>) -> &mut Self {
        if enabled == Some(true) {
            self.args.push(format!("--{name}"));
        }
        self
    }

    fn value(&mut self, name: &str, value: Option<impl Display>) -> &mut Self {
        if let Some(value) = value {
            self.args.push(format!("--{name}"));
            self.args.push(value.to_string());
        }
        self
    }

    fn prune_history(&mut self, prune_history: Option<PruneHistory>) -> &mut Self {
        match prune_history {
            Some(PruneHistory::Enabled(enabled)) => self.flag("prune-history", Some(enabled)),
            Some(PruneHistory::Count(count)) => self.value("prune-history", Some(count)),
            None => self,
        }
    }
}

impl AnvilConfig {
    /// Converts the set options into `anvil` command-line arguments, in
    /// declaration order.
    ///
    /// Boolean options are emitted as a bare flag when enabled and omitted
    /// otherwise.
    pub fn to_cli_args(&self) -> Vec<String> {
        let mut args = CliArgs::default();
        args.value("accounts", self.accounts)
            .value("block-time", self.block_time)
            .value("balance", self.balance)
            .value("config-out", self.config_out.as_deref())
            .value("derivation-path", self.derivation_path.as_deref())
            .value("dump-state", self.dump_state.as_deref())
            .value("hardfork", self.hardfork.as_deref())
            .value("init", self.init.as_deref())
            .value("ipc", self.ipc.as_deref())
            .value("load-state", self.load_state.as_deref())
            .value("mnemonic", self.mnemonic.as_deref())
            .flag("no-mining", self.no_mining)
            .value("order", self.order.as_deref())
            .prune_history(self.prune_history)
            .value("state-interval", self.state_interval)
            .flag("silent", self.silent)
            .value("state", self.state.as_deref())
            .value("timestamp", self.timestamp)
            .value("transaction-block-keeper", self.transaction_block_keeper)
            .value("allow-origin", self.allow_origin.as_deref())
            .flag("no-cors", self.no_cors)
            .value("compute-units-per-second", self.compute_units_per_second)
            .value("fork-url", self.fork_url.as_deref())
            .value("fork-block-number", self.fork_block_number)
            .value("fork-chain-id", self.fork_chain_id)
            .value("fork-retry-backoff", self.fork_retry_backoff)
            .flag("no-rate-limit", self.no_rate_limit)
            .flag("no-storage-caching", self.no_storage_caching)
            .value("retries", self.retries)
            .value("timeout", self.timeout)
            .value("block-base-fee-per-gas", self.block_base_fee_per_gas)
            .value("chain-id", self.chain_id)
            .value("code-size-limit", self.code_size_limit)
            .flag("disable-block-gas-limit", self.disable_block_gas_limit)
            .value("gas-limit", self.gas_limit)
            .value("gas-price", self.gas_price)
            .flag("auto-impersonate", self.auto_impersonate)
            .flag("steps-tracing", self.steps_tracing)
            .value("host", self.host.as_deref())
            .value("port", self.port);

        args.args
    }
}
