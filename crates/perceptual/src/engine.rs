//! The fingerprint engine: validated configuration plus a hash strategy.

use std::time::{Duration, Instant};

use canonical::strip_whitespace_lowercase;
use tracing::{debug, warn};

use crate::config::{PerceptualError, WinnowConfig, WinnowMode, DEFAULT_WINDOW_SIZE};
use crate::fingerprint::{Fingerprint, WinnowParams};
use crate::hash::{HashReducer, Md5Reducer};
use crate::shingles::{char_ngram_hashes, word_ngram_hashes, NGramUnit};
use crate::winnow::{winnow, winnow_robust};

/// Computes winnowing fingerprints for text.
///
/// The engine owns an immutable [`WinnowConfig`] and a [`HashReducer`]. It
/// keeps no per-call state, so one instance can be reused for any number of
/// documents and shared across threads when `H` allows it.
///
/// ```
/// use perceptual::FingerprintEngine;
///
/// let engine = FingerprintEngine::default();
/// let a = engine.fingerprint_chars("The quick brown fox jumps over the lazy dog");
/// let b = engine.fingerprint_chars("the QUICK brown fox\njumps over the lazy dog");
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone)]
pub struct FingerprintEngine<H = Md5Reducer> {
    config: WinnowConfig,
    window_size: usize,
    reducer: H,
}

impl FingerprintEngine<Md5Reducer> {
    /// Engine with the MD5 reducer and the given thresholds.
    ///
    /// Fails with [`PerceptualError::InvalidConfiguration`] when
    /// `noise_threshold > min_detected_length`.
    pub fn new(min_detected_length: usize, noise_threshold: usize) -> Result<Self, PerceptualError> {
        Self::from_config(
            WinnowConfig::new()
                .with_min_detected_length(min_detected_length)
                .with_noise_threshold(noise_threshold),
        )
    }

    /// Engine with the MD5 reducer and an explicit configuration.
    pub fn from_config(config: WinnowConfig) -> Result<Self, PerceptualError> {
        Self::with_reducer(config, Md5Reducer)
    }
}

impl Default for FingerprintEngine<Md5Reducer> {
    /// t=8, k=4, window of 5, MD5 reducer.
    fn default() -> Self {
        Self {
            config: WinnowConfig::default(),
            window_size: DEFAULT_WINDOW_SIZE,
            reducer: Md5Reducer,
        }
    }
}

impl<H: HashReducer> FingerprintEngine<H> {
    /// Engine with an injected hash strategy.
    pub fn with_reducer(config: WinnowConfig, reducer: H) -> Result<Self, PerceptualError> {
        let window_size = match config.window_size() {
            Ok(window_size) => window_size,
            Err(err) => {
                warn!(
                    min_detected_length = config.min_detected_length,
                    noise_threshold = config.noise_threshold,
                    error = %err,
                    "engine_config_rejected"
                );
                return Err(err);
            }
        };
        Ok(Self {
            config,
            window_size,
            reducer,
        })
    }

    /// Fingerprint over word n-grams.
    ///
    /// The text is not normalized: words are split on spaces and hashed with
    /// their original case and punctuation.
    pub fn fingerprint_words(&self, text: &str) -> Fingerprint {
        let start = Instant::now();
        let hashes = word_ngram_hashes(text, self.config.min_detected_length, &self.reducer);
        self.select(NGramUnit::Words, text.len(), &hashes, start)
    }

    /// Fingerprint over character n-grams of the whitespace-free, lowercased
    /// text.
    pub fn fingerprint_chars(&self, text: &str) -> Fingerprint {
        let start = Instant::now();
        let normalized = strip_whitespace_lowercase(text);
        let hashes = char_ngram_hashes(&normalized, self.config.min_detected_length, &self.reducer);
        self.select(NGramUnit::Characters, text.len(), &hashes, start)
    }

    pub fn fingerprint(&self, text: &str, unit: NGramUnit) -> Fingerprint {
        match unit {
            NGramUnit::Characters => self.fingerprint_chars(text),
            NGramUnit::Words => self.fingerprint_words(text),
        }
    }

    /// Minimum detected length and derived window size.
    pub fn params(&self) -> WinnowParams {
        WinnowParams {
            min_detected_length: self.config.min_detected_length,
            window_size: self.window_size,
        }
    }

    pub fn config(&self) -> &WinnowConfig {
        &self.config
    }

    pub fn reducer(&self) -> &H {
        &self.reducer
    }

    fn select(&self, unit: NGramUnit, input_len: usize, hashes: &[u32], start: Instant) -> Fingerprint {
        let fingerprint = match self.config.mode {
            WinnowMode::PerWindowMin => winnow(hashes, self.window_size),
            WinnowMode::Robust => winnow_robust(hashes, self.window_size)
                .into_iter()
                .map(|picked| picked.hash)
                .collect(),
        };
        debug!(
            unit = %unit,
            mode = %self.config.mode,
            input_len,
            ngrams = hashes.len(),
            fingerprint_len = fingerprint.len(),
            elapsed_micros = saturating_micros(start.elapsed()),
            "fingerprint_success"
        );
        fingerprint
    }
}

fn saturating_micros(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}
