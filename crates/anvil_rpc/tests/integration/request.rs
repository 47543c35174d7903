use anvil_rpc::{
    Address, AnvilMethod, AnvilRequest, Bytes, Param, ResetOptions, U256, convert, format_request,
};
use serde_json::json;

const ACCOUNT: &str = "0x70997970c51812dc3a010c7d01b50e0d17dc79c8";

fn account() -> Address {
    ACCOUNT.parse().expect("valid address")
}

#[test]
fn impersonate_account() {
    for method in [
        AnvilMethod::ImpersonateAccount,
        AnvilMethod::StopImpersonatingAccount,
    ] {
        assert_eq!(
            format_request(method, vec![Param::from(ACCOUNT)]),
            vec![Param::Address(account())]
        );
        assert_eq!(format_request(method, Vec::new()), Vec::new());
    }
}

#[test]
fn set_balance() {
    let formatted = format_request(
        AnvilMethod::SetBalance,
        vec![Param::from(ACCOUNT), Param::U64(1000)],
    );
    assert_eq!(
        formatted,
        vec![Param::Address(account()), Param::from("0x3e8")]
    );
}

#[test]
fn set_balance_big_integer() {
    let balance = U256::from(10).pow(U256::from(24));
    let formatted = format_request(
        AnvilMethod::SetBalance,
        vec![Param::from(ACCOUNT), Param::from(balance)],
    );
    assert_eq!(
        formatted,
        vec![
            Param::Address(account()),
            Param::from("0xd3c21bcecceda1000000")
        ]
    );
}

#[test]
fn set_code() {
    let formatted = format_request(
        AnvilMethod::SetCode,
        vec![Param::from(ACCOUNT), Param::from(vec![0xab, 0xcd])],
    );
    assert_eq!(
        formatted,
        vec![Param::Address(account()), Param::from("0xabcd")]
    );
}

#[test]
fn set_storage_at() {
    let formatted = format_request(
        AnvilMethod::SetStorageAt,
        vec![Param::from(ACCOUNT), Param::I64(1), Param::from(vec![0xff])],
    );
    assert_eq!(
        formatted,
        vec![
            Param::Address(account()),
            Param::from("0x1"),
            Param::from("0xff")
        ]
    );
}

#[test]
fn typed_address_is_kept() {
    let formatted = format_request(
        AnvilMethod::SetCode,
        vec![Param::Address(account()), Param::Bytes(Bytes::new())],
    );
    assert_eq!(formatted, vec![Param::Address(account()), Param::from("0x")]);
}

#[test]
fn malformed_input_takes_defaults() {
    let formatted = format_request(
        AnvilMethod::SetStorageAt,
        vec![Param::Bool(true), Param::from("1"), Param::U64(1)],
    );
    assert_eq!(
        formatted,
        vec![
            Param::Address(Address::ZERO),
            Param::from("0x0"),
            Param::from("")
        ]
    );
}

#[test]
fn absent_big_integer() {
    assert_eq!(convert::to_hex_if_integer(&Param::BigInt(None)), "0x0");
}

#[test]
fn bytes_normalization_is_idempotent() {
    for value in [Param::from("0x1234"), Param::from("abcd"), Param::from(vec![1, 2])] {
        let once = convert::to_hex_if_bytes(&value);
        let twice = convert::to_hex_if_bytes(&Param::from(once.clone()));
        assert_eq!(once, twice);
    }
}

#[test]
fn reset_options_pass_through() -> anyhow::Result<()> {
    let options = ResetOptions {
        json_rpc_url: String::from("https://mainnet.example.com"),
        block_number: String::from("latest"),
    };
    options.validate()?;

    let params = vec![Param::from(options)];
    let formatted = format_request(AnvilMethod::Reset, params.clone());
    assert_eq!(formatted, params);
    assert_eq!(
        serde_json::to_value(&formatted)?,
        json!([{ "json_rpc_url": "https://mainnet.example.com", "block_number": "latest" }])
    );

    Ok(())
}

#[test]
fn typed_request_envelope() -> anyhow::Result<()> {
    let request = AnvilRequest::SetBalance(account(), U256::from(1000)).into_jsonrpc(7_u64);
    assert_eq!(
        serde_json::to_value(&request)?,
        json!({
            "jsonrpc": "2.0",
            "method": "anvil_setBalance",
            "params": [ACCOUNT, "0x3e8"],
            "id": 7
        })
    );

    let request = AnvilRequest::Mine {
        blocks: Some(16),
        interval: Some(12),
    }
    .into_jsonrpc("mine");
    assert_eq!(
        serde_json::to_value(&request)?,
        json!({
            "jsonrpc": "2.0",
            "method": "anvil_mine",
            "params": ["0x10", "0xc"],
            "id": "mine"
        })
    );

    Ok(())
}
