//! Sliding-window minimum selection.
//!
//! Both selection modes walk the n-gram hash sequence with a monotonic deque,
//! O(n) overall. The deque keeps the positions of the current window in
//! increasing hash order, so its front is always the window minimum. Equal
//! hashes evict older positions, which makes the front the **rightmost**
//! minimum.
//!
//! A sequence shorter than the window is treated as one window spanning the
//! whole sequence; an empty sequence selects nothing.

use std::collections::VecDeque;

use crate::fingerprint::{Fingerprint, WinnowedHash};

/// Per-window minimum selection.
///
/// The minimum of every window of `w` consecutive hashes goes into the set,
/// even when the previous window already picked that same position; the set
/// collapses repeats. A window size of 0 is treated as 1.
pub fn winnow(hashes: &[u32], w: usize) -> Fingerprint {
    let mut fingerprint = Fingerprint::new();
    for idx in WindowMinima::new(hashes, w) {
        fingerprint.insert(hashes[idx]);
    }
    fingerprint
}

/// Robust winnowing: rightmost minimum per window, each position at most once
/// in a row.
///
/// A position is emitted only when it differs from the previously emitted
/// position, so a minimum that stays in view across many windows is recorded
/// once. Output is in sequence order. A window size of 0 is treated as 1.
pub fn winnow_robust(hashes: &[u32], w: usize) -> Vec<WinnowedHash> {
    let mut out = Vec::new();
    let mut last_picked: Option<usize> = None;
    for idx in WindowMinima::new(hashes, w) {
        if last_picked != Some(idx) {
            out.push(WinnowedHash {
                hash: hashes[idx],
                position: idx,
            });
            last_picked = Some(idx);
        }
    }
    out
}

/// Yields the position of the rightmost minimum of each full window.
struct WindowMinima<'a> {
    hashes: &'a [u32],
    window: usize,
    next: usize,
    dq: VecDeque<usize>,
}

impl<'a> WindowMinima<'a> {
    fn new(hashes: &'a [u32], w: usize) -> Self {
        // Short sequences collapse to a single window.
        let window = w.max(1).min(hashes.len().max(1));
        Self {
            hashes,
            window,
            next: 0,
            dq: VecDeque::with_capacity(window),
        }
    }
}

impl Iterator for WindowMinima<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.next < self.hashes.len() {
            let i = self.next;
            self.next += 1;

            let val = self.hashes[i];
            while let Some(&j) = self.dq.back() {
                if val <= self.hashes[j] {
                    self.dq.pop_back();
                } else {
                    break;
                }
            }
            self.dq.push_back(i);

            if i + 1 < self.window {
                continue;
            }
            let left = i + 1 - self.window;
            while let Some(&j) = self.dq.front() {
                if j < left {
                    self.dq.pop_front();
                } else {
                    break;
                }
            }
            return self.dq.front().copied();
        }
        None
    }
}
