//! Persistent user preferences.

use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

use crate::core::utils::{config_dir_in, data_dir_in, ensure_dir, write_atomic};
use crate::errors::LedgerError;
use crate::storage::{JsonEntryStore, SimulatedLatency};

const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serde(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Directory holding the entry collection. Defaults to `<base>/data`.
    pub data_dir: Option<PathBuf>,
    #[serde(default = "Config::default_seed_sample_data")]
    pub seed_sample_data: bool,
    #[serde(default)]
    pub simulate_latency: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            data_dir: None,
            seed_sample_data: Self::default_seed_sample_data(),
            simulate_latency: false,
        }
    }
}

impl Config {
    pub fn default_seed_sample_data() -> bool {
        true
    }

    pub fn resolve_data_dir(&self, base: &Path) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| data_dir_in(base))
    }

    pub fn latency(&self) -> SimulatedLatency {
        if self.simulate_latency {
            SimulatedLatency::network()
        } else {
            SimulatedLatency::none()
        }
    }

    /// Builds the JSON entry store described by this configuration.
    pub fn open_store(&self, base: &Path) -> Result<JsonEntryStore, LedgerError> {
        Ok(JsonEntryStore::new(self.resolve_data_dir(base))?
            .with_sample_seed(self.seed_sample_data)
            .with_latency(self.latency()))
    }
}

/// Loads and saves [`Config`] as JSON under `<base>/config/config.json`.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    base: PathBuf,
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        let config_dir = config_dir_in(&base);
        ensure_dir(&config_dir)?;
        Ok(Self {
            config_path: config_dir.join(CONFIG_FILE),
            base,
        })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.config_path.exists() {
            let data = fs::read_to_string(&self.config_path)?;
            serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        write_atomic(&self.config_path, &json)?;
        Ok(())
    }
}
