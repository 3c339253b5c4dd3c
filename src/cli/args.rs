//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Report keys missing or `null` in any of the given catalogs
//! - `sort`: Sort catalogs in place, writing a timestamped backup first
//! - `unused`: List catalog keys that no source file mentions
//! - `add`: Add a new key to one catalog
//! - `resolve`: Print one translated string (alias `simple`)
//! - `init`: Initialize the `.i18nrc.json` configuration file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Language of the tool's own messages (overrides config file)
    #[arg(short, long, global = true, env = "I18N_MANAGER_LANG")]
    pub lang: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Catalog files to compare
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct SortArgs {
    /// Catalog files to sort in place
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Skip the backup copy (overrides config file)
    #[arg(long)]
    pub no_backup: bool,
}

#[derive(Debug, Args)]
pub struct UnusedArgs {
    /// Catalog files whose keys are looked up
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Source directories to scan, given after `--`
    #[arg(last = true, required = true)]
    pub roots: Vec<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Catalog file to modify
    pub file: PathBuf,
    /// Dotted key, e.g. `common.buttons.save`
    pub key: String,
    /// Text stored under the key
    pub value: String,
}

#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Translation file to read
    pub file: PathBuf,
    /// Dotted key to look up
    pub key: String,
    /// Printed when the key does not resolve to a string
    #[arg(default_value = "")]
    pub fallback: String,

    /// Template field, repeatable: --data Name=Ada
    #[arg(long = "data", value_name = "NAME=VALUE", value_parser = parse_data_pair)]
    pub data: Vec<(String, String)>,
}

fn parse_data_pair(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", raw))?;
    if name.is_empty() {
        return Err(format!("empty field name in '{}'", raw));
    }
    Ok((name.to_string(), value.to_string()))
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report keys that are missing or null in any of the given catalogs
    Check(CheckArgs),
    /// Sort catalog keys in place, writing a timestamped backup first
    Sort(SortArgs),
    /// List catalog keys that no scanned source file mentions
    Unused(UnusedArgs),
    /// Add a new key to a single catalog file
    Add(AddArgs),
    /// Print one translated string
    #[command(visible_alias = "simple")]
    Resolve(ResolveArgs),
    /// Initialize a new .i18nrc.json configuration file
    Init,
}
