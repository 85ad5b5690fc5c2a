use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

pub const CONFIG_FILE_NAME: &str = ".propcheckrc.json";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Base-name prefix of the primary reference locale.
    #[serde(default = "default_primary_prefix")]
    pub primary_prefix: String,
    /// Base-name prefix of the secondary reference locale.
    #[serde(default = "default_secondary_prefix")]
    pub secondary_prefix: String,
    /// Bundle file extension, matched case-insensitively, without the dot.
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_primary_prefix() -> String {
    "i18n.".to_string()
}

fn default_secondary_prefix() -> String {
    "i18n_de.".to_string()
}

fn default_extension() -> String {
    "properties".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            primary_prefix: default_primary_prefix(),
            secondary_prefix: default_secondary_prefix(),
            extension: default_extension(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if a prefix or the extension is empty, or if the
    /// extension carries a leading dot.
    pub fn validate(&self) -> Result<()> {
        if self.primary_prefix.is_empty() {
            bail!("'primaryPrefix' must not be empty");
        }
        if self.secondary_prefix.is_empty() {
            bail!("'secondaryPrefix' must not be empty");
        }
        if self.extension.is_empty() {
            bail!("'extension' must not be empty");
        }
        if self.extension.starts_with('.') {
            bail!(
                "'extension' must not include the leading dot: \"{}\"",
                self.extension
            );
        }
        Ok(())
    }
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
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
