use anyhow::Result;
use serde_json::{Map, Value};

use super::{CommandResult, CommandSummary, ResolveSummary};
use crate::cli::args::ResolveArgs;
use crate::resolve::{self, FallbackTable};

pub fn resolve(args: ResolveArgs, table: &FallbackTable) -> Result<CommandResult> {
    let tree = resolve::load(&args.file, table)?;

    let data: Option<Map<String, Value>> = (!args.data.is_empty()).then(|| {
        args.data
            .into_iter()
            .map(|(name, value)| (name, Value::String(value)))
            .collect()
    });
    let text = resolve::resolve(&tree, &args.key, data.as_ref(), &args.fallback);

    Ok(CommandResult::new(CommandSummary::Resolve(ResolveSummary {
        text,
    })))
}
