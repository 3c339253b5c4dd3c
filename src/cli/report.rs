//! Report formatting and printing.
//!
//! Kept apart from the commands so the library can be used without any
//! terminal output. Every printer writes to a caller-supplied writer.

use std::io::{self, Write};

use colored::Colorize;
use serde_json::json;
use unicode_width::UnicodeWidthStr;

use super::{
    args::OutputFormat,
    commands::{
        AddSummary, CheckSummary, CommandResult, CommandSummary, InitSummary, SortSummary,
        UnusedSummary,
    },
    messages::Messages,
};
use crate::core::MissingEntry;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a command's result to stdout, with errors on stderr.
pub fn print(result: &CommandResult, messages: &Messages, verbose: bool) {
    print_to(
        result,
        messages,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

pub fn print_to<W: Write, E: Write>(
    result: &CommandResult,
    messages: &Messages,
    verbose: bool,
    out: &mut W,
    err: &mut E,
) {
    match &result.summary {
        CommandSummary::Usage => {
            let _ = writeln!(err, "{}", messages.text("usage.general"));
        }
        CommandSummary::Check(summary) => match result.format {
            OutputFormat::Text => print_check(summary, messages, out),
            OutputFormat::Json => print_json(&summary.missing, out),
        },
        CommandSummary::Sort(summary) => print_sort(summary, messages, out, err),
        CommandSummary::Unused(summary) => match result.format {
            OutputFormat::Text => print_unused(summary, messages, verbose, out, err),
            OutputFormat::Json => print_json(
                &json!({
                    "unused": summary.report.unused,
                    "filesScanned": summary.report.files_scanned,
                }),
                out,
            ),
        },
        CommandSummary::Add(summary) => print_add(summary, messages, out, err),
        CommandSummary::Resolve(summary) => {
            let _ = writeln!(out, "{}", summary.text);
        }
        CommandSummary::Init(InitSummary { path }) => {
            let line = messages.format(
                "init.created",
                &json!({ "Path": path.display().to_string() }),
            );
            let _ = writeln!(out, "{} {}", SUCCESS_MARK.green(), line.green());
        }
    }
}

fn print_json<T: serde::Serialize, W: Write>(value: &T, out: &mut W) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => {
            let _ = writeln!(out, "{}", text);
        }
        Err(e) => {
            let _ = writeln!(out, "{{\"error\": \"{}\"}}", e);
        }
    }
}

fn print_check<W: Write>(summary: &CheckSummary, messages: &Messages, out: &mut W) {
    if summary.missing.is_empty() {
        let line = messages.text("check.complete");
        let _ = writeln!(out, "{} {}", SUCCESS_MARK.green(), line.green());
        return;
    }

    let header = messages.format(
        "check.found_count",
        &json!({ "Count": summary.missing.len() }),
    );
    let _ = writeln!(out, "{} {}", FAILURE_MARK.red(), header.bold());
    let _ = writeln!(out);

    let key_width = summary
        .missing
        .iter()
        .map(|entry| UnicodeWidthStr::width(entry.key.as_str()))
        .max()
        .unwrap_or(0);

    for entry in &summary.missing {
        print_missing_entry(entry, key_width, out);
    }
}

fn print_missing_entry<W: Write>(entry: &MissingEntry, key_width: usize, out: &mut W) {
    let padding = key_width - UnicodeWidthStr::width(entry.key.as_str());
    let values = entry
        .translations
        .iter()
        .map(|(language, text)| {
            let shown = if text == "null" {
                text.red().to_string()
            } else {
                text.to_string()
            };
            format!("{}: {}", language.cyan(), shown)
        })
        .collect::<Vec<_>>()
        .join(", ");

    let _ = writeln!(
        out,
        "  {}{:padding$}  {{ {} }}",
        entry.key.yellow(),
        "",
        values,
        padding = padding
    );
}

fn print_sort<W: Write, E: Write>(
    summary: &SortSummary,
    messages: &Messages,
    out: &mut W,
    err: &mut E,
) {
    for outcome in &summary.outcomes {
        let path = outcome.path.display().to_string();

        if let Some(backup) = &outcome.backup {
            let line = messages.format(
                "backup.created",
                &json!({ "Path": backup.display().to_string() }),
            );
            let _ = writeln!(out, "{}", line.dimmed());
        }

        match &outcome.result {
            Ok(()) => {
                let line = messages.format("sort.saved", &json!({ "Path": path }));
                let _ = writeln!(out, "{} {}", SUCCESS_MARK.green(), line);
            }
            Err(e) => {
                let line = messages.format(
                    "sort.failed",
                    &json!({ "Path": path, "Error": e.to_string() }),
                );
                let _ = writeln!(err, "{} {}", FAILURE_MARK.red(), line.red());
            }
        }
    }
}

fn print_unused<W: Write, E: Write>(
    summary: &UnusedSummary,
    messages: &Messages,
    verbose: bool,
    out: &mut W,
    err: &mut E,
) {
    if verbose {
        let line = messages.format(
            "unused.files_scanned",
            &json!({ "Count": summary.report.files_scanned }),
        );
        let _ = writeln!(err, "{}", line.dimmed());
    }

    if summary.report.unused.is_empty() {
        let line = messages.text("unused.all_used");
        let _ = writeln!(out, "{} {}", SUCCESS_MARK.green(), line.green());
        return;
    }

    let header = messages.format(
        "unused.found_count",
        &json!({ "Count": summary.report.unused.len() }),
    );
    let _ = writeln!(out, "{} {}", FAILURE_MARK.red(), header.bold());
    for key in &summary.report.unused {
        let _ = writeln!(out, "  - {}", key.yellow());
    }
}

fn print_add<W: Write, E: Write>(
    summary: &AddSummary,
    messages: &Messages,
    out: &mut W,
    err: &mut E,
) {
    match &summary.result {
        Ok(backup) => {
            let line = messages.format(
                "backup.created",
                &json!({ "Path": backup.display().to_string() }),
            );
            let _ = writeln!(out, "{}", line.dimmed());

            let line = messages.format(
                "add.added",
                &json!({
                    "Key": summary.key,
                    "Value": summary.value,
                    "Path": summary.path.display().to_string(),
                }),
            );
            let _ = writeln!(out, "{} {}", SUCCESS_MARK.green(), line.green());
        }
        Err(e) => {
            let _ = writeln!(
                err,
                "{}: {}",
                messages.text("error.prefix").bold().red(),
                e
            );
        }
    }
}
