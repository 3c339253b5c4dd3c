use std::{fs, path::Path};

use anyhow::{Result, bail};

use super::{CommandResult, CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init(base: &Path) -> Result<CommandResult> {
    let config_path = base.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(&config_path, default_config_json()? + "\n")?;

    Ok(CommandResult::new(CommandSummary::Init(InitSummary {
        path: CONFIG_FILE_NAME.into(),
    })))
}
