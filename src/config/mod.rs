//! Operational limits and defaults, JSON file backed.

use std::{fs, io, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::settings_file;

const DEFAULT_MAX_PREDICTION_MONTHS: u32 = 120;
const DEFAULT_EXAMPLE_MONTHS: u32 = 36;
const DEFAULT_INITIAL_BUDGET: f64 = 48_750.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Operator-tunable limits for the prediction service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PredictorSettings {
    /// Upper bound on the horizon the validator accepts.
    pub max_prediction_months: u32,
    /// Horizon used by the example generator when the caller gives none.
    pub default_example_months: u32,
    /// Initial budget used by the example generator.
    pub default_initial_budget: f64,
    /// Whether the example command is available.
    pub enable_example_data: bool,
}

impl Default for PredictorSettings {
    fn default() -> Self {
        Self {
            max_prediction_months: DEFAULT_MAX_PREDICTION_MONTHS,
            default_example_months: DEFAULT_EXAMPLE_MONTHS,
            default_initial_budget: DEFAULT_INITIAL_BUDGET,
            enable_example_data: true,
        }
    }
}

impl PredictorSettings {
    /// Loads settings from `path`, defaulting when the file is absent.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let data = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads settings from the app data dir, falling back to defaults on any
    /// failure. CLI entry points use this so a corrupt settings file never
    /// blocks a prediction.
    pub fn load_or_default() -> Self {
        Self::load_from(&settings_file()).unwrap_or_default()
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            crate::utils::ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
