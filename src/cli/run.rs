//! Dispatch from parsed arguments to command handlers.

use std::path::Path;

use anyhow::Result;

use super::{
    args::Command,
    commands::{
        CommandResult, CommandSummary, add::add, check::check, init::init, resolve::resolve,
        sort::sort, unused::unused,
    },
};
use crate::config::Config;
use crate::resolve::FallbackTable;

/// Run `command` against the working directory `base`.
///
/// # Returns
/// - `Ok(CommandResult)` with what the command found or changed
/// - `Err` if the command could not complete (unreadable file, bad JSON, I/O)
pub fn run(
    command: Option<Command>,
    config: &Config,
    base: &Path,
    table: &FallbackTable,
) -> Result<CommandResult> {
    match command {
        Some(Command::Check(args)) => check(args),
        Some(Command::Sort(args)) => sort(args, config),
        Some(Command::Unused(args)) => unused(args, config),
        Some(Command::Add(args)) => add(args),
        Some(Command::Resolve(args)) => resolve(args, table),
        Some(Command::Init) => init(base),
        None => Ok(CommandResult::new(CommandSummary::Usage)),
    }
}
