use anyhow::Result;

use super::{CommandResult, CommandSummary, UnusedSummary};
use crate::cli::{args::UnusedArgs, languages::files_by_language};
use crate::config::Config;
use crate::core::CatalogStore;

pub fn unused(args: UnusedArgs, config: &Config) -> Result<CommandResult> {
    let store = CatalogStore::load(files_by_language(&args.files))?;
    let scanner = config.scanner()?;
    let report = store.scan_usage(&scanner, &args.roots)?;

    Ok(
        CommandResult::new(CommandSummary::Unused(UnusedSummary { report }))
            .with_format(args.format),
    )
}
