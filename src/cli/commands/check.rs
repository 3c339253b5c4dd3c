use anyhow::Result;

use super::{CheckSummary, CommandResult, CommandSummary};
use crate::cli::{args::CheckArgs, languages::files_by_language};
use crate::core::CatalogStore;

pub fn check(args: CheckArgs) -> Result<CommandResult> {
    let store = CatalogStore::load(files_by_language(&args.files))?;
    let missing = store.check_missing();

    Ok(CommandResult::new(CommandSummary::Check(CheckSummary {
        languages: store.languages().into_iter().map(String::from).collect(),
        missing,
    }))
    .with_format(args.format))
}
