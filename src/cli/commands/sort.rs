use anyhow::Result;

use super::{CommandResult, CommandSummary, SortSummary};
use crate::cli::{args::SortArgs, languages::files_by_language};
use crate::config::Config;
use crate::core::CatalogStore;

/// Sort every catalog; a failure on one file does not stop the others.
pub fn sort(args: SortArgs, config: &Config) -> Result<CommandResult> {
    let mut store = CatalogStore::load(files_by_language(&args.files))?;
    let create_backup = config.backup && !args.no_backup;
    let outcomes = store.sort_and_save(create_backup);

    Ok(CommandResult::new(CommandSummary::Sort(SortSummary {
        outcomes,
    })))
}
