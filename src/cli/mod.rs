//! Command-line interface layer.
//!
//! ## Module Structure
//!
//! - `args`: clap argument definitions
//! - `commands`: One handler per subcommand, each returning a `CommandResult`
//! - `languages`: Language codes inferred from catalog file names
//! - `messages`: The tool's own localized messages
//! - `report`: Text and JSON output

use std::env;

use anyhow::Result;
use tracing::debug;

use crate::config::load_config;
use crate::resolve::FallbackTable;

pub mod args;
pub mod commands;
mod exit_status;
pub mod languages;
pub mod messages;
pub mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;
use messages::Messages;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let base = env::current_dir()?;
    let loaded = load_config(&base)?;
    if let Some(path) = &loaded.path {
        debug!(path = %path.display(), "config loaded");
    }

    let lang = args.lang.unwrap_or_else(|| loaded.config.lang.clone());
    let table = FallbackTable::builtin();
    let messages = Messages::load(&loaded.config, &base, &lang, &table);

    let result = run::run(args.command, &loaded.config, &base, &table)?;
    report::print(&result, &messages, args.verbose);

    Ok(result.exit_status())
}
