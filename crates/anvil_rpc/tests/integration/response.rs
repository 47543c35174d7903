use anvil_rpc::{
    AnvilMethod, B256, Response, format_response,
    jsonrpc::{self, format_jsonrpc_response},
};
use serde_json::json;

const HASH: &str = "0x2e8b4b7d51f1d4ba3e5c6dbb2f9b3d4fd0de24b5d2b6d96d1e34f48b9c0e4a1f";

#[test]
fn drop_transaction_hash() -> anyhow::Result<()> {
    let response = format_response(AnvilMethod::DropTransaction, json!(HASH));
    assert_eq!(response, Response::Hash(HASH.parse::<B256>()?));
    assert_eq!(serde_json::to_value(&response)?, json!(HASH));

    Ok(())
}

#[test]
fn drop_transaction_unexpected_type() {
    assert_eq!(
        format_response(AnvilMethod::DropTransaction, json!(42)),
        Response::Value(json!(42))
    );
    assert_eq!(
        format_response(AnvilMethod::DropTransaction, json!(null)),
        Response::Value(json!(null))
    );
}

#[test]
fn short_hash_is_right_aligned() {
    let response = format_response(AnvilMethod::DropTransaction, json!("0x1"));
    let mut expected = B256::ZERO;
    expected.0[31] = 1;
    assert_eq!(response, Response::Hash(expected));
}

#[test]
fn automine() {
    assert_eq!(
        format_response(AnvilMethod::GetAutomine, json!(false)),
        Response::Bool(false)
    );
}

#[test]
fn jsonrpc_envelope() -> anyhow::Result<()> {
    let response: jsonrpc::Response<serde_json::Value> = serde_json::from_value(json!({
        "jsonrpc": "2.0",
        "id": 3,
        "result": true
    }))?;
    assert_eq!(
        format_jsonrpc_response(AnvilMethod::GetAutomine, response)?,
        Response::Bool(true)
    );

    let response: jsonrpc::Response<serde_json::Value> = serde_json::from_value(json!({
        "jsonrpc": "2.0",
        "id": 4,
        "error": { "code": jsonrpc::INVALID_PARAMS, "message": "invalid params", "data": "0x" }
    }))?;
    let error = format_jsonrpc_response(AnvilMethod::SetCode, response).unwrap_err();
    assert_eq!(error.code, -32602);
    assert_eq!(error.data, Some(json!("0x")));

    Ok(())
}
