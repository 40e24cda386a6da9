//! Fingerprint and parameter types.
//!
//! A [`Fingerprint`] is the only artifact the winnowing layer produces. It is
//! a plain set of reduced hash values: two documents share a substring of at
//! least `min_detected_length` n-grams only if their fingerprints intersect.

use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Deduplicated, ascending set of selected hash values.
///
/// Serializes as a JSON array and displays as `[a, b, c]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint {
    hashes: BTreeSet<u32>,
}

impl Fingerprint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    pub fn contains(&self, hash: u32) -> bool {
        self.hashes.contains(&hash)
    }

    /// Iterate values in ascending order.
    pub fn iter(&self) -> btree_set::Iter<'_, u32> {
        self.hashes.iter()
    }

    pub fn as_set(&self) -> &BTreeSet<u32> {
        &self.hashes
    }

    pub fn into_set(self) -> BTreeSet<u32> {
        self.hashes
    }

    /// Values in ascending order.
    pub fn to_vec(&self) -> Vec<u32> {
        self.hashes.iter().copied().collect()
    }

    pub(crate) fn insert(&mut self, hash: u32) {
        self.hashes.insert(hash);
    }
}

impl FromIterator<u32> for Fingerprint {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self {
            hashes: iter.into_iter().collect(),
        }
    }
}

impl From<BTreeSet<u32>> for Fingerprint {
    fn from(hashes: BTreeSet<u32>) -> Self {
        Self { hashes }
    }
}

impl IntoIterator for Fingerprint {
    type Item = u32;
    type IntoIter = btree_set::IntoIter<u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.hashes.into_iter()
    }
}

impl<'a> IntoIterator for &'a Fingerprint {
    type Item = &'a u32;
    type IntoIter = btree_set::Iter<'a, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.hashes.iter()
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, hash) in self.hashes.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{hash}")?;
        }
        f.write_str("]")
    }
}

/// Effective winnowing parameters of an engine.
///
/// The noise threshold is not reported on its own; it is reflected in
/// `window_size = min_detected_length - noise_threshold + 1`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct WinnowParams {
    pub min_detected_length: usize,
    pub window_size: usize,
}

/// Hash picked by robust winnowing, with its position in the n-gram sequence.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct WinnowedHash {
    pub hash: u32,
    /// Index of the selected n-gram in the hash sequence.
    pub position: usize,
}
