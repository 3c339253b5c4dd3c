use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_resolve_nested_key() -> Result<()> {
    let test = CliTest::with_file(
        "en.json",
        r#"{"common": {"greeting": {"hello": "Hello"}}, "test": {"unescape": "line1\\nline2"}}"#,
    )?;

    let output = test.run(&["resolve", "en.json", "common.greeting.hello"])?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Hello\n");

    let output = test.run(&["resolve", "en.json", "test.unescape"])?;
    assert_eq!(stdout(&output), "line1\nline2\n");

    Ok(())
}

#[test]
fn test_resolve_fallback_and_alias() -> Result<()> {
    let test = CliTest::with_file("en.json", r#"{"common": {"save": "Save"}}"#)?;

    let output = test.run(&["simple", "en.json", "common.cancel", "Cancel"])?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Cancel\n");

    Ok(())
}

#[test]
fn test_resolve_template_data() -> Result<()> {
    let test = CliTest::with_file("en.json", r#"{"welcome": "Welcome, {{.Name}}!"}"#)?;

    let output = test.run(&["resolve", "en.json", "welcome", "--data", "Name=Ada"])?;

    assert_eq!(stdout(&output), "Welcome, Ada!\n");

    Ok(())
}

#[test]
fn test_resolve_missing_file_uses_embedded_table() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["resolve", "locales/de.json", "error.prefix"])?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Fehler\n");
    assert!(stderr(&output).contains("using embedded translations"));

    Ok(())
}

#[test]
fn test_resolve_missing_file_without_embedded_table_is_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["resolve", "xx.json", "a"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("Error: open xx.json"));

    Ok(())
}
