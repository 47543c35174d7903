use std::io::Write as _;

use anvil_config::{AnvilConfig, ConfigError, PruneHistory};

#[test]
fn load_from_file() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(
        file,
        r#"
accounts = 5
hardfork = "prague"
pruneHistory = true
autoImpersonate = true
host = "localhost"
port = 9545
"#
    )?;

    let config = AnvilConfig::from_toml_file(file.path())?;
    assert_eq!(config.prune_history, Some(PruneHistory::Enabled(true)));
    assert_eq!(
        config.to_cli_args(),
        [
            "--accounts",
            "5",
            "--hardfork",
            "prague",
            "--prune-history",
            "--auto-impersonate",
            "--host",
            "localhost",
            "--port",
            "9545"
        ]
    );

    let instance = config.resolve()?;
    assert_eq!(instance.http_url()?.as_str(), "http://localhost:9545/");

    Ok(())
}

#[test]
fn missing_file() -> anyhow::Result<()> {
    let directory = tempfile::tempdir()?;
    let path = directory.path().join("anvil.toml");

    let error = AnvilConfig::from_toml_file(&path).unwrap_err();
    match error {
        ConfigError::Io { path: error_path, .. } => assert_eq!(error_path, path),
        other => panic!("unexpected error: {other}"),
    }

    Ok(())
}

#[test]
fn malformed_file() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "accounts = \"five\"")?;

    let error = AnvilConfig::from_toml_file(file.path()).unwrap_err();
    assert!(matches!(error, ConfigError::Toml(_)));

    Ok(())
}
