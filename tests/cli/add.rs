use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_add_nested_key() -> Result<()> {
    let test = CliTest::with_file("en.json", r#"{"common": {"save": "Save"}, "about": "About"}"#)?;

    let output = test.run(&["add", "en.json", "common.buttons.cancel", "Cancel"])?;

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.starts_with("Backup created: en.json.backup."));
    assert!(out.ends_with("\u{2713} Added translation 'common.buttons.cancel' = 'Cancel' to en.json\n"));

    assert_eq!(
        test.read_file("en.json")?,
        r#"{
  "about": "About",
  "common": {
    "buttons": {
      "cancel": "Cancel"
    },
    "save": "Save"
  }
}
"#
    );
    assert_eq!(test.backups_of("en.json")?.len(), 1);

    Ok(())
}

#[test]
fn test_add_existing_key_is_rejected() -> Result<()> {
    let original = r#"{"common": {"save": "Save"}}"#;
    let test = CliTest::with_file("en.json", original)?;

    let output = test.run(&["add", "en.json", "common.save", "Store"])?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr(&output),
        "Error: key 'common.save' already exists in en.json\n"
    );
    assert_eq!(test.read_file("en.json")?, original);

    Ok(())
}

#[test]
fn test_add_through_string_is_rejected() -> Result<()> {
    let test = CliTest::with_file("en.json", r#"{"title": "Home"}"#)?;

    let output = test.run(&["add", "en.json", "title.sub", "x"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("'title' is not an object"));

    Ok(())
}

#[test]
fn test_add_missing_file_is_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["add", "missing.json", "a", "b"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("Error: reading missing.json"));

    Ok(())
}

#[test]
fn test_add_uses_selected_language_messages() -> Result<()> {
    let test = CliTest::with_file("en.json", r#"{"a": "b"}"#)?;

    let output = test.run(&["--lang", "de", "add", "en.json", "a", "c"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("Fehler: "));

    Ok(())
}

#[test]
fn test_add_echoes_value_verbatim() -> Result<()> {
    let test = CliTest::with_file("en.json", "{}")?;

    let output = test.run(&["add", "en.json", "msg", r"line1\nline2"])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).ends_with("\u{2713} Added translation 'msg' = 'line1\\nline2' to en.json\n"));
    assert_eq!(
        test.read_file("en.json")?,
        "{\n  \"msg\": \"line1\\\\nline2\"\n}\n"
    );

    Ok(())
}
