//! # Winnowing Fingerprints
//!
//! This crate turns a text document into a compact, position-independent
//! fingerprint: a set of small integers. Two documents that share a long
//! enough substring share at least one fingerprint value, so comparing
//! fingerprints (set intersection) detects copied passages without comparing
//! the documents themselves.
//!
//! ## Core Pipeline
//!
//! 1.  **Normalization** (character mode only): every whitespace character is
//!     removed and the text is lowercased, via the `canonical` crate.
//!
//! 2.  **N-gram hashing**: every run of `t` consecutive characters, or of `t`
//!     consecutive space-separated words, is reduced to an integer by the
//!     configured [`HashReducer`] (MD5-based by default, values in
//!     `[0, 9999]`).
//!
//! 3.  **Winnowing**: a window of `w = t - k + 1` hashes slides over the
//!     n-gram sequence and the minimum of each window is kept. The kept values
//!     form the [`Fingerprint`], deduplicated and in ascending order.
//!
//! Here `t` is the minimum detected length (shared substrings at least this
//! long are always detected) and `k` the noise threshold (shorter shared
//! substrings are ignored).
//!
//! Invariant: for the same text, the same [`WinnowConfig`] and the same
//! reducer, the fingerprint is identical on every run and every machine.
//!
//! ## Example Usage
//!
//! ```
//! use perceptual::FingerprintEngine;
//!
//! let engine = FingerprintEngine::new(8, 4).unwrap();
//! let params = engine.params();
//! assert_eq!(params.window_size, 5);
//!
//! let fp = engine.fingerprint_words("the quick brown fox jumps over the lazy dog again and again");
//! assert!(!fp.is_empty());
//! assert!(fp.iter().all(|&h| h < 10_000));
//! ```
//!
pub mod config;
mod engine;
pub mod fingerprint;
mod hash;
mod shingles;
mod winnow;

pub use crate::config::{
    PerceptualError, WinnowConfig, WinnowMode, DEFAULT_MIN_DETECTED_LENGTH,
    DEFAULT_NOISE_THRESHOLD, DEFAULT_WINDOW_SIZE,
};
pub use crate::engine::FingerprintEngine;
pub use crate::fingerprint::{Fingerprint, WinnowParams, WinnowedHash};
pub use crate::hash::{FnReducer, HashReducer, Md5Reducer, Xxh3Reducer, DEFAULT_HASH_MODULUS};
pub use crate::shingles::{char_ngram_hashes, token_ngram_hashes, word_ngram_hashes, NGramUnit};
pub use crate::winnow::{winnow, winnow_robust};
