use anyhow::Result;
use insta::{assert_snapshot, with_settings};
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_sort_writes_canonical_file_and_backup() -> Result<()> {
    let original = r#"{"z": "last", "a": {"y": "2", "b": "1"}, "list": [{"k": 2, "c": 1}]}"#;
    let test = CliTest::with_file("en.json", original)?;

    let output = test.run(&["sort", "en.json"])?;

    assert_eq!(output.status.code(), Some(0));
    with_settings!({filters => vec![(r"\.backup\.\d{8}-\d{6}", ".backup.[TIMESTAMP]")]}, {
        assert_snapshot!(stdout(&output), @r"
        Backup created: en.json.backup.[TIMESTAMP]
        ✓ Sorted and saved: en.json
        ");
    });

    assert_snapshot!(test.read_file("en.json")?, @r#"
    {
      "a": {
        "b": "1",
        "y": "2"
      },
      "list": [
        {
          "k": 2,
          "c": 1
        }
      ],
      "z": "last"
    }
    "#);
    assert!(test.read_file("en.json")?.ends_with("}\n"));

    let backups = test.backups_of("en.json")?;
    assert_eq!(backups.len(), 1);
    assert_eq!(test.read_file(&backups[0])?, original);

    Ok(())
}

#[test]
fn test_sort_no_backup() -> Result<()> {
    let test = CliTest::with_file("de.json", r#"{"b": "1", "a": "2"}"#)?;

    let output = test.run(&["sort", "de.json", "--no-backup"])?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "\u{2713} Sorted and saved: de.json\n");
    assert!(test.backups_of("de.json")?.is_empty());
    assert_eq!(test.read_file("de.json")?, "{\n  \"a\": \"2\",\n  \"b\": \"1\"\n}\n");

    Ok(())
}

#[test]
fn test_sort_backup_disabled_in_config() -> Result<()> {
    let test = CliTest::with_file(".i18nrc.json", r#"{"backup": false}"#)?;
    test.write_file("en.json", r#"{"b": "1", "a": "2"}"#)?;

    let output = test.run(&["sort", "en.json"])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(test.backups_of("en.json")?.is_empty());

    Ok(())
}

#[test]
fn test_sort_invalid_file_is_error() -> Result<()> {
    let test = CliTest::with_file("en.json", r#"{"b": "1", "a": "2"}"#)?;
    test.write_file("de.json", "[broken")?;

    let output = test.run(&["sort", "en.json", "de.json"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("de.json"));
    // Nothing is written when loading fails.
    assert_eq!(test.read_file("en.json")?, r#"{"b": "1", "a": "2"}"#);

    Ok(())
}
