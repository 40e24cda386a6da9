//! YAML Configuration File Support
//!
//! Loads the winnowing parameters and the hash strategy from a YAML file or
//! string, validates them, and builds a ready-to-use engine.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "plagiarism-check"
//!
//! winnow:
//!   min_detected_length: 8
//!   noise_threshold: 4
//!   mode: per_window_min      # or "robust"
//!
//! hash:
//!   algorithm: md5            # or "xxh3"
//!   seed: 0                   # xxh3 only
//!   modulus: 10000            # xxh3 only
//! ```
//!
//! Every section and field is optional except `version`; missing values take
//! the library defaults.

use std::fs;
use std::path::Path;

use perceptual::{
    DEFAULT_HASH_MODULUS, DEFAULT_MIN_DETECTED_LENGTH, DEFAULT_NOISE_THRESHOLD, FingerprintEngine,
    HashReducer, Md5Reducer, PerceptualError, WinnowConfig, WinnowMode, Xxh3Reducer,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),

    #[error(transparent)]
    Perceptual(#[from] PerceptualError),
}

/// Top-level YAML configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Winnowing parameters
    #[serde(default)]
    pub winnow: WinnowYamlConfig,

    /// Hash reduction strategy
    #[serde(default)]
    pub hash: HashYamlConfig,
}

impl FileConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        debug!(path = %path.display(), bytes = content.len(), "config_file_read");
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: FileConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.winnow.validate()?;
        self.hash.validate()?;
        Ok(())
    }

    /// The engine-level winnowing configuration.
    pub fn winnow_config(&self) -> WinnowConfig {
        self.winnow.to_winnow_config()
    }

    /// The configured hash strategy as a trait object.
    pub fn reducer(&self) -> Box<dyn HashReducer> {
        match self.hash.algorithm {
            HashAlgorithm::Md5 => Box::new(Md5Reducer),
            HashAlgorithm::Xxh3 => {
                Box::new(Xxh3Reducer::new(self.hash.seed).with_modulus(self.hash.modulus))
            }
        }
    }

    /// Build an engine from this configuration.
    pub fn build_engine(&self) -> Result<FingerprintEngine<Box<dyn HashReducer>>, ConfigLoadError> {
        let engine = FingerprintEngine::with_reducer(self.winnow_config(), self.reducer())?;
        debug!(
            name = ?self.name,
            algorithm = ?self.hash.algorithm,
            min_detected_length = engine.params().min_detected_length,
            window_size = engine.params().window_size,
            "engine_built"
        );
        Ok(engine)
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            winnow: WinnowYamlConfig::default(),
            hash: HashYamlConfig::default(),
        }
    }
}

/// Winnowing YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WinnowYamlConfig {
    #[serde(default = "default_min_detected_length")]
    pub min_detected_length: usize,

    #[serde(default = "default_noise_threshold")]
    pub noise_threshold: usize,

    #[serde(default)]
    pub mode: WinnowMode,
}

impl WinnowYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.noise_threshold > self.min_detected_length {
            return Err(ConfigLoadError::Validation(format!(
                "winnow.noise_threshold ({}) must not exceed winnow.min_detected_length ({})",
                self.noise_threshold, self.min_detected_length
            )));
        }
        Ok(())
    }

    fn to_winnow_config(&self) -> WinnowConfig {
        WinnowConfig::new()
            .with_min_detected_length(self.min_detected_length)
            .with_noise_threshold(self.noise_threshold)
            .with_mode(self.mode)
    }
}

impl Default for WinnowYamlConfig {
    fn default() -> Self {
        Self {
            min_detected_length: DEFAULT_MIN_DETECTED_LENGTH,
            noise_threshold: DEFAULT_NOISE_THRESHOLD,
            mode: WinnowMode::default(),
        }
    }
}

/// Supported hash reduction algorithms.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HashAlgorithm {
    #[default]
    Md5,
    Xxh3,
}

/// Hash strategy YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HashYamlConfig {
    #[serde(default)]
    pub algorithm: HashAlgorithm,

    /// Seed for `xxh3`; ignored by `md5`.
    #[serde(default)]
    pub seed: u64,

    /// Reduction bound for `xxh3`; `md5` is always reduced modulo 10000.
    #[serde(default = "default_modulus")]
    pub modulus: u32,
}

impl HashYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.modulus == 0 {
            return Err(ConfigLoadError::Validation(
                "hash.modulus must be >= 1".to_string(),
            ));
        }
        if self.algorithm == HashAlgorithm::Md5 && self.modulus != DEFAULT_HASH_MODULUS {
            return Err(ConfigLoadError::Validation(format!(
                "hash.modulus is fixed at {DEFAULT_HASH_MODULUS} for md5"
            )));
        }
        Ok(())
    }
}

impl Default for HashYamlConfig {
    fn default() -> Self {
        Self {
            algorithm: HashAlgorithm::Md5,
            seed: 0,
            modulus: DEFAULT_HASH_MODULUS,
        }
    }
}

// Helper functions for serde defaults
fn default_min_detected_length() -> usize {
    DEFAULT_MIN_DETECTED_LENGTH
}
fn default_noise_threshold() -> usize {
    DEFAULT_NOISE_THRESHOLD
}
fn default_modulus() -> u32 {
    DEFAULT_HASH_MODULUS
}
