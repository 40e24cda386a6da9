//! Workspace umbrella crate for winnowing text fingerprints.
//!
//! This crate stitches together the canonical text layer and the winnowing
//! layer so callers get a single entry point, and adds YAML configuration
//! loading for deployments that keep their parameters in a file.
//!
//! ```
//! use winnowfp::FingerprintEngine;
//!
//! let engine = FingerprintEngine::default();
//! let original = engine.fingerprint_chars("It was the best of times, it was the worst of times.");
//! let copied = engine.fingerprint_chars("Quote: it was the best of times, it was the worst of times!");
//!
//! let shared = original.as_set().intersection(copied.as_set()).count();
//! assert!(shared > 0);
//! ```

pub mod config;

pub use canonical::{WORD_DELIMITER, strip_whitespace_lowercase, tokenize_words};
pub use perceptual::{
    DEFAULT_HASH_MODULUS, DEFAULT_MIN_DETECTED_LENGTH, DEFAULT_NOISE_THRESHOLD,
    DEFAULT_WINDOW_SIZE, Fingerprint, FingerprintEngine, FnReducer, HashReducer, Md5Reducer,
    NGramUnit, PerceptualError, WinnowConfig, WinnowMode, WinnowParams, WinnowedHash,
    Xxh3Reducer, char_ngram_hashes, token_ngram_hashes, winnow, winnow_robust,
    word_ngram_hashes,
};

pub use crate::config::{
    ConfigLoadError, FileConfig, HashAlgorithm, HashYamlConfig, WinnowYamlConfig,
};
