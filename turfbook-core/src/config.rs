//! Global turfbook configuration.

use std::path::PathBuf;

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};

static DEFAULT_LEDGER_PATH: &str = "~/turfbook";

fn default_ledger_path() -> PathBuf {
    PathBuf::from(DEFAULT_LEDGER_PATH)
}

fn is_default_ledger_path(p: &PathBuf) -> bool {
    *p == default_ledger_path()
}

/// Global configuration at ~/.config/turfbook/config.toml
#[derive(Serialize, Deserialize, Clone)]
pub struct TurfbookConfig {
    #[serde(default = "default_ledger_path", skip_serializing_if = "is_default_ledger_path")]
    pub ledger_dir: PathBuf,
}

impl Default for TurfbookConfig {
    fn default() -> Self {
        TurfbookConfig {
            ledger_dir: default_ledger_path(),
        }
    }
}

impl TurfbookConfig {
    pub fn load() -> LedgerResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let config: TurfbookConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| LedgerError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| LedgerError::Config(e.to_string()))?;

        Ok(config)
    }

    pub fn config_path() -> LedgerResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| LedgerError::Config("Could not determine config directory".into()))?
            .join("turfbook");

        Ok(config_dir.join("config.toml"))
    }

    /// The ledger root with `~` expanded to the home directory.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str =
            shellexpand::tilde(&self.ledger_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// The ledger root in display-friendly form, keeping `~` instead of
    /// expanding to the full home directory.
    pub fn display_path(&self) -> PathBuf {
        self.ledger_dir.clone()
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &std::path::Path) -> LedgerResult<()> {
        let contents = format!(
            "\
# turfbook configuration

# Where your reservation ledger lives:
# ledger_dir = \"{}\"
",
            DEFAULT_LEDGER_PATH
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                LedgerError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| LedgerError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
