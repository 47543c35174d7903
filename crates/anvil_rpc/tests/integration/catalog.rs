use anvil_rpc::{
    AnvilMethod, MethodGroup, Param, Response, format_request, format_response,
    try_format_request,
};
use serde_json::json;

#[test]
fn wire_names_round_trip() -> anyhow::Result<()> {
    for method in AnvilMethod::ALL {
        let parsed: AnvilMethod = method.as_str().parse()?;
        assert_eq!(parsed, method);
        assert_eq!(serde_json::to_value(method)?, json!(method.as_str()));
    }

    Ok(())
}

#[test]
fn group_sizes() {
    let count = |group: MethodGroup| {
        AnvilMethod::ALL
            .iter()
            .filter(|method| method.group() == group)
            .count()
    };

    assert_eq!(count(MethodGroup::Standard), 20);
    assert_eq!(count(MethodGroup::Special), 12);
    assert_eq!(count(MethodGroup::TxPool), 3);
}

#[test]
fn unknown_method() {
    let error = "eth_chainId".parse::<AnvilMethod>().unwrap_err();
    assert_eq!(error.to_string(), "Method eth_chainId is not supported");
}

macro_rules! impl_test_passthrough {
    ($($name:ident => $method:ident,)+) => {
        $(
            paste::item! {
                #[test]
                fn [<passthrough_ $name>]() -> anyhow::Result<()> {
                    let method = AnvilMethod::$method;
                    let params = vec![
                        Param::from("0x1000000000000000000000000000000000000000"),
                        Param::U64(2),
                        Param::Null,
                    ];

                    assert_eq!(format_request(method, params.clone()), params);
                    assert_eq!(try_format_request(method, params.clone())?, params);

                    let response = json!({ "result": [1, "0x2", null] });
                    assert_eq!(
                        format_response(method, response.clone()),
                        Response::Value(response)
                    );

                    Ok(())
                }
            }
        )+
    };
}

impl_test_passthrough! {
    auto_impersonate_account => AutoImpersonateAccount,
    mine => Mine,
    reset => Reset,
    set_rpc_url => SetRpcUrl,
    set_nonce => SetNonce,
    set_coinbase => SetCoinbase,
    set_logging_enabled => SetLoggingEnabled,
    set_min_gas_price => SetMinGasPrice,
    set_next_block_base_fee_per_gas => SetNextBlockBaseFeePerGas,
    set_chain_id => SetChainId,
    dump_state => DumpState,
    load_state => LoadState,
    node_info => NodeInfo,
    evm_set_automine => EvmSetAutomine,
    evm_set_interval_mining => EvmSetIntervalMining,
    evm_snapshot => EvmSnapshot,
    evm_revert => EvmRevert,
    evm_increase_time => EvmIncreaseTime,
    evm_set_next_block_timestamp => EvmSetNextBlockTimestamp,
    set_block_timestamp_interval => SetBlockTimestampInterval,
    evm_set_block_gas_limit => EvmSetBlockGasLimit,
    remove_block_timestamp_interval => RemoveBlockTimestampInterval,
    evm_mine => EvmMine,
    enable_traces => EnableTraces,
    send_unsigned_transaction => SendUnsignedTransaction,
    txpool_status => TxpoolStatus,
    txpool_inspect => TxpoolInspect,
    txpool_content => TxpoolContent,
}
