use anyhow::Result;

use super::{AddSummary, CommandResult, CommandSummary};
use crate::cli::args::AddArgs;
use crate::core::add_translation;

/// Add one key. A conflicting key is reported as a finding, any other
/// failure is returned as an error.
pub fn add(AddArgs { file, key, value }: AddArgs) -> Result<CommandResult> {
    let result = match add_translation(&file, &key, &value) {
        Err(err) if !err.is_conflict() => return Err(err.into()),
        other => other,
    };

    Ok(CommandResult::new(CommandSummary::Add(AddSummary {
        path: file,
        key,
        value,
        result,
    })))
}
