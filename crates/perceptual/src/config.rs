//! Configuration and error types for winnowing fingerprints.
//!
//! The two winnowing parameters come from the guarantee they provide:
//!
//! - `min_detected_length` (t): any substring shared by two documents that is
//!   at least t n-grams long is guaranteed to produce a shared fingerprint
//!   value. It is also the n-gram size.
//! - `noise_threshold` (k): shared substrings shorter than k are not
//!   guaranteed to be detected.
//!
//! The winnowing window is derived from both: `w = t - k + 1`.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default minimum detected length (t).
pub const DEFAULT_MIN_DETECTED_LENGTH: usize = 8;

/// Default noise threshold (k).
pub const DEFAULT_NOISE_THRESHOLD: usize = 4;

/// Window size of the default configuration, `t - k + 1`.
pub const DEFAULT_WINDOW_SIZE: usize = DEFAULT_MIN_DETECTED_LENGTH - DEFAULT_NOISE_THRESHOLD + 1;

/// How one hash is picked from each window.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WinnowMode {
    /// The minimum of every window goes into the fingerprint, even when the
    /// same position was already picked by the previous window. Duplicates
    /// collapse in the resulting set.
    #[default]
    PerWindowMin,
    /// Canonical winnowing: rightmost minimum per window, and a position is
    /// recorded only when it differs from the previously recorded one.
    Robust,
}

impl WinnowMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WinnowMode::PerWindowMin => "per_window_min",
            WinnowMode::Robust => "robust",
        }
    }
}

impl fmt::Display for WinnowMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Winnowing configuration.
///
/// Owned by exactly one [`crate::FingerprintEngine`] once validated; the
/// engine never mutates it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WinnowConfig {
    /// Minimum shared-substring length (in n-grams) that is always detected.
    /// Also the n-gram size, in characters or words.
    pub min_detected_length: usize,
    /// Shared substrings shorter than this are treated as noise.
    pub noise_threshold: usize,
    /// Selection policy for each window.
    pub mode: WinnowMode,
}

impl WinnowConfig {
    /// Create a configuration with the default parameters (t=8, k=4).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum detected length (t).
    pub fn with_min_detected_length(mut self, min_detected_length: usize) -> Self {
        self.min_detected_length = min_detected_length;
        self
    }

    /// Set the noise threshold (k).
    pub fn with_noise_threshold(mut self, noise_threshold: usize) -> Self {
        self.noise_threshold = noise_threshold;
        self
    }

    /// Set the winnowing mode.
    pub fn with_mode(mut self, mode: WinnowMode) -> Self {
        self.mode = mode;
        self
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), PerceptualError> {
        if self.noise_threshold > self.min_detected_length {
            return Err(PerceptualError::InvalidConfiguration {
                noise_threshold: self.noise_threshold,
                min_detected_length: self.min_detected_length,
            });
        }
        Ok(())
    }

    /// Winnowing window size, `t - k + 1`.
    ///
    /// Fails with [`PerceptualError::WindowSizeOverflow`] when `t - k + 1`
    /// does not fit in `usize` (`t = usize::MAX`, `k = 0`).
    pub fn window_size(&self) -> Result<usize, PerceptualError> {
        self.validate()?;
        (self.min_detected_length - self.noise_threshold)
            .checked_add(1)
            .ok_or(PerceptualError::WindowSizeOverflow {
                min_detected_length: self.min_detected_length,
                noise_threshold: self.noise_threshold,
            })
    }
}

impl Default for WinnowConfig {
    fn default() -> Self {
        Self {
            min_detected_length: DEFAULT_MIN_DETECTED_LENGTH,
            noise_threshold: DEFAULT_NOISE_THRESHOLD,
            mode: WinnowMode::PerWindowMin,
        }
    }
}

/// Errors returned by the winnowing layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PerceptualError {
    #[error(
        "invalid configuration: noise threshold k={noise_threshold} must not exceed \
         minimum detected length t={min_detected_length}"
    )]
    InvalidConfiguration {
        noise_threshold: usize,
        min_detected_length: usize,
    },

    #[error(
        "invalid configuration: window size t-k+1 overflows for t={min_detected_length}, \
         k={noise_threshold}"
    )]
    WindowSizeOverflow {
        min_detected_length: usize,
        noise_threshold: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let cfg = WinnowConfig::default();
        assert_eq!(cfg.min_detected_length, 8);
        assert_eq!(cfg.noise_threshold, 4);
        assert_eq!(cfg.mode, WinnowMode::PerWindowMin);
        assert_eq!(cfg.window_size(), Ok(5));
    }

    #[test]
    fn config_new_creates_default() {
        assert_eq!(WinnowConfig::new(), WinnowConfig::default());
    }

    #[test]
    fn config_builder_chain() {
        let cfg = WinnowConfig::new()
            .with_min_detected_length(15)
            .with_noise_threshold(5)
            .with_mode(WinnowMode::Robust);

        assert_eq!(cfg.min_detected_length, 15);
        assert_eq!(cfg.noise_threshold, 5);
        assert_eq!(cfg.mode, WinnowMode::Robust);
        assert_eq!(cfg.window_size(), Ok(11));
    }

    #[test]
    fn window_size_is_one_when_thresholds_match() {
        let cfg = WinnowConfig::new()
            .with_min_detected_length(6)
            .with_noise_threshold(6);
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.window_size(), Ok(1));
    }

    #[test]
    fn validate_rejects_noise_above_min_length() {
        let cfg = WinnowConfig::new()
            .with_min_detected_length(5)
            .with_noise_threshold(10);
        assert_eq!(
            cfg.validate(),
            Err(PerceptualError::InvalidConfiguration {
                noise_threshold: 10,
                min_detected_length: 5,
            })
        );
        assert!(cfg.window_size().is_err());
    }

    #[test]
    fn default_window_size_constant_matches_derivation() {
        assert_eq!(WinnowConfig::default().window_size(), Ok(DEFAULT_WINDOW_SIZE));
    }

    #[test]
    fn window_size_overflow_is_an_error() {
        let cfg = WinnowConfig::new()
            .with_min_detected_length(usize::MAX)
            .with_noise_threshold(0);
        assert!(cfg.validate().is_ok());
        assert_eq!(
            cfg.window_size(),
            Err(PerceptualError::WindowSizeOverflow {
                min_detected_length: usize::MAX,
                noise_threshold: 0,
            })
        );

        let largest = cfg.with_noise_threshold(1);
        assert_eq!(largest.window_size(), Ok(usize::MAX));
    }

    #[test]
    fn config_serde_roundtrip() {
        let cfg = WinnowConfig::new()
            .with_min_detected_length(12)
            .with_noise_threshold(3)
            .with_mode(WinnowMode::Robust);

        let serialized = serde_json::to_string(&cfg).unwrap();
        assert!(serialized.contains("\"robust\""));
        let deserialized: WinnowConfig = serde_json::from_str(&serialized).unwrap();
        assert_eq!(cfg, deserialized);
    }

    #[test]
    fn config_serde_fills_missing_fields() {
        let cfg: WinnowConfig = serde_json::from_str(r#"{"noise_threshold": 2}"#).unwrap();
        assert_eq!(cfg.min_detected_length, DEFAULT_MIN_DETECTED_LENGTH);
        assert_eq!(cfg.noise_threshold, 2);
        assert_eq!(cfg.mode, WinnowMode::PerWindowMin);
    }

    #[test]
    fn mode_display_matches_serde_name() {
        assert_eq!(WinnowMode::PerWindowMin.to_string(), "per_window_min");
        assert_eq!(
            serde_json::to_string(&WinnowMode::PerWindowMin).unwrap(),
            "\"per_window_min\""
        );
    }

    #[test]
    fn error_display_names_both_values() {
        let err = PerceptualError::InvalidConfiguration {
            noise_threshold: 10,
            min_detected_length: 5,
        };
        let msg = err.to_string();
        assert!(msg.contains("invalid configuration"));
        assert!(msg.contains("k=10"));
        assert!(msg.contains("t=5"));
    }
}
