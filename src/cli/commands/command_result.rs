use std::path::PathBuf;

use crate::cli::{args::OutputFormat, exit_status::ExitStatus};
use crate::core::{MissingEntry, SortOutcome, UsageReport};
use crate::error::CatalogError;

#[derive(Debug)]
pub enum CommandSummary {
    /// No subcommand given; only the usage text is shown.
    Usage,
    Check(CheckSummary),
    Sort(SortSummary),
    Unused(UnusedSummary),
    Add(AddSummary),
    Resolve(ResolveSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct CheckSummary {
    pub languages: Vec<String>,
    pub missing: Vec<MissingEntry>,
}

#[derive(Debug)]
pub struct SortSummary {
    pub outcomes: Vec<SortOutcome>,
}

#[derive(Debug)]
pub struct UnusedSummary {
    pub report: UsageReport,
}

#[derive(Debug)]
pub struct AddSummary {
    pub path: PathBuf,
    pub key: String,
    pub value: String,
    /// Backup path on success, or the conflict that rejected the key.
    pub result: Result<PathBuf, CatalogError>,
}

#[derive(Debug)]
pub struct ResolveSummary {
    pub text: String,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
}

/// Result of running a command, printed by the report module.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub format: OutputFormat,
}

impl CommandResult {
    pub fn new(summary: CommandSummary) -> Self {
        Self {
            summary,
            format: OutputFormat::Text,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn exit_status(&self) -> ExitStatus {
        match &self.summary {
            CommandSummary::Usage => ExitStatus::Failure,
            CommandSummary::Check(summary) if !summary.missing.is_empty() => ExitStatus::Failure,
            CommandSummary::Unused(summary) if !summary.report.unused.is_empty() => {
                ExitStatus::Failure
            }
            CommandSummary::Sort(summary)
                if summary.outcomes.iter().any(|outcome| outcome.result.is_err()) =>
            {
                ExitStatus::Error
            }
            CommandSummary::Add(summary) if summary.result.is_err() => ExitStatus::Failure,
            _ => ExitStatus::Success,
        }
    }
}
