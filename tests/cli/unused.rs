use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

fn project() -> Result<CliTest> {
    let test = CliTest::with_file(
        "en.json",
        r#"{"common": {"save": "Save", "cancel": "Cancel"}, "legacy": {"banner": "Old"}}"#,
    )?;
    test.write_file("src/App.vue", "<button>{{ $t('common.save') }}</button>")?;
    test.write_file("src/util.ts", "export const label = t(\"common.cancel\");")?;
    test.write_file("src/node_modules/lib/index.js", "t('legacy.banner')")?;
    Ok(test)
}

#[test]
fn test_unused_lists_unreferenced_keys() -> Result<()> {
    let test = project()?;

    let output = test.run(&["unused", "en.json", "--", "src"])?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "\u{2718} Found 1 unused translation keys:\n  - legacy.banner\n"
    );

    Ok(())
}

#[test]
fn test_unused_all_used() -> Result<()> {
    let test = project()?;
    test.write_file("src/banner.js", "i18n.t('legacy.banner')")?;

    let output = test.run(&["unused", "en.json", "--", "src"])?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "\u{2713} All translation keys are used.\n");

    Ok(())
}

#[test]
fn test_unused_respects_config_extensions() -> Result<()> {
    let test = project()?;
    test.write_file(".i18nrc.json", r#"{"extensions": [".tsx"]}"#)?;
    test.write_file("src/Banner.tsx", "t('legacy.banner')")?;

    let output = test.run(&["unused", "en.json", "--format", "json", "--", "src"])?;

    assert_eq!(output.status.code(), Some(1));
    let parsed: serde_json::Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(
        parsed,
        serde_json::json!({
            "unused": ["common.cancel", "common.save"],
            "filesScanned": 1
        })
    );

    Ok(())
}

#[test]
fn test_unused_verbose_reports_scanned_files() -> Result<()> {
    let test = project()?;

    let output = test.run(&["-v", "unused", "en.json", "--", "src"])?;

    assert!(stderr(&output).contains("Scanned 2 source files"));

    Ok(())
}

#[test]
fn test_unused_missing_root_is_error() -> Result<()> {
    let test = project()?;

    let output = test.run(&["unused", "en.json", "--", "does-not-exist"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("Error: scanning does-not-exist"));

    Ok(())
}
