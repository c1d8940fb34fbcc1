//! TOML-based application configuration.
//!
//! Stores the two values the diagnosis engine treats as configuration:
//! - The study category label (time is only counted as study time under it)
//! - The exam requirement table
//!
//! Configuration is stored at `~/.config/studyroom/config.toml`. A missing
//! file yields the defaults; a present file is validated before use so an
//! invalid requirement table (e.g. zero required hours) is rejected at load
//! time rather than surfacing as a bad division during scoring.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::diagnosis::{DiagnosisEngine, RequirementTable, DEFAULT_STUDY_CATEGORY};
use crate::error::{ConfigError, Result};

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/studyroom/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyroomConfig {
    /// Category label counted as study time
    #[serde(default = "default_study_category")]
    pub study_category: String,
    /// Exam requirement table
    #[serde(default)]
    pub requirements: RequirementTable,
}

impl Default for StudyroomConfig {
    fn default() -> Self {
        Self {
            study_category: default_study_category(),
            requirements: RequirementTable::default(),
        }
    }
}

impl StudyroomConfig {
    /// Path to the configuration file
    pub fn path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("studyroom")
            .join("config.toml")
    }

    /// Load configuration from the default path, or defaults when absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path())
    }

    /// Load configuration from an explicit path, or defaults when absent
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config: Self =
            toml::from_str(&raw).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;

        config.requirements.validate()?;
        Ok(config)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path())
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::SaveFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        }

        let raw = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::SaveFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        std::fs::write(path, raw).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Build a diagnosis engine from this configuration
    pub fn engine(&self) -> DiagnosisEngine {
        DiagnosisEngine::with_table(self.requirements.clone(), self.study_category.clone())
    }
}

fn default_study_category() -> String {
    DEFAULT_STUDY_CATEGORY.to_string()
}
