//! Hash reduction strategies.
//!
//! Every n-gram is reduced to a small integer before winnowing. The reduction
//! is a strategy injected into [`crate::FingerprintEngine`]: fingerprints are
//! only comparable when both sides used the same reducer.

use std::sync::Arc;

use xxhash_rust::xxh3::xxh3_64_with_seed;

/// Bound of the default reducers: values fall in `[0, DEFAULT_HASH_MODULUS)`.
pub const DEFAULT_HASH_MODULUS: u32 = 10_000;

/// Maps an n-gram to a non-negative integer.
///
/// Implementations must be pure: the same token always reduces to the same
/// value.
pub trait HashReducer: Send + Sync {
    fn reduce(&self, token: &str) -> u32;
}

/// MD5-based reducer; the default strategy.
///
/// The first four bytes of the MD5 digest of the token's UTF-8 bytes are read
/// as a little-endian `i32`, and the result is the absolute value of its
/// truncated remainder by 10000. Values are always in `[0, 9999]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Md5Reducer;

impl HashReducer for Md5Reducer {
    fn reduce(&self, token: &str) -> u32 {
        let digest = md5::compute(token.as_bytes());
        let head = i32::from_le_bytes([digest.0[0], digest.0[1], digest.0[2], digest.0[3]]);
        (head % DEFAULT_HASH_MODULUS as i32).unsigned_abs()
    }
}

/// Seeded XXH3-64 reduced modulo a configurable bound.
///
/// Much faster than [`Md5Reducer`], but its values are unrelated to it, so
/// fingerprints from the two reducers must never be compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Xxh3Reducer {
    seed: u64,
    modulus: u32,
}

impl Xxh3Reducer {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            modulus: DEFAULT_HASH_MODULUS,
        }
    }

    /// Set the reduction bound. A modulus of 0 is treated as 1.
    pub fn with_modulus(mut self, modulus: u32) -> Self {
        self.modulus = modulus.max(1);
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn modulus(&self) -> u32 {
        self.modulus
    }
}

impl Default for Xxh3Reducer {
    fn default() -> Self {
        Self::new(0)
    }
}

impl HashReducer for Xxh3Reducer {
    fn reduce(&self, token: &str) -> u32 {
        let h = xxh3_64_with_seed(token.as_bytes(), self.seed);
        (h % u64::from(self.modulus)) as u32
    }
}

/// Adapts a plain function or closure into a [`HashReducer`].
///
/// ```
/// use perceptual::{FnReducer, HashReducer};
///
/// let by_len = FnReducer(|token: &str| token.len() as u32);
/// assert_eq!(by_len.reduce("abcd"), 4);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnReducer<F>(pub F);

impl<F> HashReducer for FnReducer<F>
where
    F: Fn(&str) -> u32 + Send + Sync,
{
    fn reduce(&self, token: &str) -> u32 {
        (self.0)(token)
    }
}

impl<H: HashReducer + ?Sized> HashReducer for &H {
    fn reduce(&self, token: &str) -> u32 {
        (**self).reduce(token)
    }
}

impl<H: HashReducer + ?Sized> HashReducer for Box<H> {
    fn reduce(&self, token: &str) -> u32 {
        (**self).reduce(token)
    }
}

impl<H: HashReducer + ?Sized> HashReducer for Arc<H> {
    fn reduce(&self, token: &str) -> u32 {
        (**self).reduce(token)
    }
}
