use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::{
    UsageScanner,
    scanner::{DEFAULT_EXCLUDED_DIRS, DEFAULT_EXTENSIONS},
};

pub const CONFIG_FILE_NAME: &str = ".i18nrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_excluded_dirs")]
    pub excluded_dirs: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_backup")]
    pub backup: bool,
    #[serde(default = "default_lang")]
    pub lang: String,
    #[serde(default = "default_message_dirs")]
    pub message_dirs: Vec<String>,
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect()
}

fn default_excluded_dirs() -> Vec<String> {
    DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect()
}

fn default_backup() -> bool {
    true
}

fn default_lang() -> String {
    "en".to_string()
}

fn default_message_dirs() -> Vec<String> {
    ["locales", "examples/locales", "testfiles"]
        .map(String::from)
        .to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            excluded_dirs: default_excluded_dirs(),
            ignores: Vec::new(),
            backup: default_backup(),
            lang: default_lang(),
            message_dirs: default_message_dirs(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for invalid glob patterns in `ignores` and for empty
    /// entries in `extensions`, which would match every file.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.extensions.iter().any(|ext| ext.is_empty()) {
            bail!("Empty entry in 'extensions'");
        }

        Ok(())
    }

    /// Build the usage scanner described by this configuration.
    pub fn scanner(&self) -> Result<UsageScanner> {
        let ignores = self
            .ignores
            .iter()
            .map(|p| {
                Pattern::new(p)
                    .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", p))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(UsageScanner::new(
            self.extensions.clone(),
            self.excluded_dirs.clone(),
            ignores,
        ))
    }

    /// Candidate files for the tool's own messages in `lang`, relative to `base`.
    pub fn message_candidates(&self, base: &Path, lang: &str) -> Vec<PathBuf> {
        self.message_dirs
            .iter()
            .map(|dir| base.join(dir).join(format!("{}.json", lang)))
            .collect()
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Where the config was read from; `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
