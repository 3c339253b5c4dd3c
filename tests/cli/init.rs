use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["init"])?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "\u{2713} Created .i18nrc.json\n");
    assert!(test.root().join(".i18nrc.json").exists());

    let content = test.read_file(".i18nrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["extensions"], serde_json::json!([".vue", ".ts", ".js"]));
    assert_eq!(parsed["backup"], Value::Bool(true));
    assert!(parsed.get("excludedDirs").is_some());

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".i18nrc.json", "{}")?;

    let output = test.run(&["init"])?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stderr(&output), "Error: .i18nrc.json already exists\n");
    assert_eq!(test.read_file(".i18nrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_no_command_prints_usage() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&[])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("Usage: i18n-manager"));

    Ok(())
}

#[test]
fn test_messages_from_locale_file() -> Result<()> {
    let test = CliTest::with_file(
        "locales/en.json",
        r#"{"init": {"created": "Wrote {{.Path}}"}}"#,
    )?;

    let output = test.run(&["init"])?;

    assert_eq!(stdout(&output), "\u{2713} Wrote .i18nrc.json\n");

    Ok(())
}
