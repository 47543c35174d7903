use anvil_rpc::{
    AnvilMethod, FormatError, Formatter, FormatterConfig, Param, ParamKind, Response, Strictness,
};
use serde_json::json;

fn strict() -> Formatter {
    Formatter::new(FormatterConfig {
        strictness: Strictness::Strict,
    })
}

#[test]
fn accepts_well_formed_params() -> anyhow::Result<()> {
    let formatted = strict().request(
        AnvilMethod::SetCode,
        vec![
            Param::from("0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"),
            Param::from("0x6080"),
        ],
    )?;
    assert_eq!(
        serde_json::to_value(&formatted)?,
        json!(["0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266", "0x6080"])
    );

    Ok(())
}

#[test]
fn rejects_null_quantity() {
    let error = strict()
        .request(
            AnvilMethod::SetBalance,
            vec![
                Param::from("0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"),
                Param::BigInt(None),
            ],
        )
        .unwrap_err();
    assert_eq!(
        error,
        FormatError::UnexpectedParam {
            method: AnvilMethod::SetBalance,
            index: 1,
            expected: ParamKind::Integer,
            found: ParamKind::Null,
        }
    );
}

#[test]
fn rejects_unexpected_address_kind() {
    let error = strict()
        .request(AnvilMethod::ImpersonateAccount, vec![Param::U64(1)])
        .unwrap_err();
    assert!(matches!(
        error,
        FormatError::UnexpectedParam {
            index: 0,
            expected: ParamKind::Address,
            ..
        }
    ));
}

#[test]
fn response_types() -> anyhow::Result<()> {
    assert_eq!(
        strict().response(AnvilMethod::SetStorageAt, json!(true))?,
        Response::Bool(true)
    );
    assert_eq!(
        strict().response(AnvilMethod::NodeInfo, json!({ "currentBlockNumber": "0x0" }))?,
        Response::Value(json!({ "currentBlockNumber": "0x0" }))
    );
    assert!(strict().response(AnvilMethod::GetAutomine, json!("yes")).is_err());

    Ok(())
}
