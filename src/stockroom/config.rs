use crate::error::{Result, StockError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "stockroom.json";
pub const DEFAULT_DATA_FILE: &str = "inventory.txt";

/// Configuration for stockroom, read from `stockroom.json` in the working directory.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct StockConfig {
    /// Path of the catalog file, relative to the working directory unless absolute
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Whether advisory messages (file created, malformed lines) are printed
    #[serde(default = "default_diagnostics")]
    pub diagnostics: bool,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_diagnostics() -> bool {
    true
}

impl Default for StockConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            diagnostics: default_diagnostics(),
        }
    }
}

impl StockConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: StockConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply command line overrides on top of the file values
    pub fn with_overrides(mut self, data_file: Option<PathBuf>, quiet: bool) -> Self {
        if let Some(path) = data_file {
            self.data_file = path;
        }
        if quiet {
            self.diagnostics = false;
        }
        self
    }

    fn validate(&self) -> Result<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(StockError::Config("data_file must not be empty".into()));
        }
        Ok(())
    }
}
