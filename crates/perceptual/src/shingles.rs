//! N-gram hashing over characters or words.
//!
//! Both generators produce one reduced hash per n-gram, in order of
//! occurrence. Neither ever returns an empty sequence: input too short to
//! form a single full n-gram is hashed as one remainder n-gram.

use std::collections::VecDeque;
use std::fmt;

use canonical::tokenize_words;
use serde::{Deserialize, Serialize};

use crate::hash::HashReducer;

/// Unit n-grams are built from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NGramUnit {
    Characters,
    Words,
}

impl NGramUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            NGramUnit::Characters => "characters",
            NGramUnit::Words => "words",
        }
    }
}

impl fmt::Display for NGramUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hash every window of `n` consecutive chars.
///
/// Lengths and offsets count Unicode scalar values, not bytes. Text shorter
/// than `n` chars produces a single hash of the whole text. The caller is
/// expected to have normalized the text already.
pub fn char_ngram_hashes<H>(text: &str, n: usize, reducer: &H) -> Vec<u32>
where
    H: HashReducer + ?Sized,
{
    // Byte offset of every char boundary, including the end of the text.
    let mut bounds: Vec<usize> = Vec::with_capacity(text.len() + 1);
    bounds.extend(text.char_indices().map(|(idx, _)| idx));
    bounds.push(text.len());

    let chars = bounds.len() - 1;
    if chars < n {
        return vec![reducer.reduce(text)];
    }

    let mut out = Vec::with_capacity(chars - n + 1);
    for start in 0..=chars - n {
        out.push(reducer.reduce(&text[bounds[start]..bounds[start + n]]));
    }
    out
}

/// Hash every window of `n` consecutive words of raw text.
///
/// Words come from [`canonical::tokenize_words`]; see
/// [`token_ngram_hashes`] for the windowing rules.
pub fn word_ngram_hashes<H>(text: &str, n: usize, reducer: &H) -> Vec<u32>
where
    H: HashReducer + ?Sized,
{
    let tokens = tokenize_words(text);
    token_ngram_hashes(&tokens, n, reducer)
}

/// Hash every window of `n` consecutive tokens, joined by single spaces.
///
/// Stride is one token. When there are fewer than `n` tokens the buffer never
/// fills, and whatever was collected is hashed once instead (the empty string
/// when there are no tokens at all).
pub fn token_ngram_hashes<S, H>(tokens: &[S], n: usize, reducer: &H) -> Vec<u32>
where
    S: AsRef<str>,
    H: HashReducer + ?Sized,
{
    let mut out = Vec::with_capacity(tokens.len().saturating_sub(n) + 1);
    let mut window: VecDeque<&str> = VecDeque::with_capacity(n);
    let mut joined = String::new();

    for token in tokens {
        window.push_back(token.as_ref());
        if window.len() == n {
            join_window(&window, &mut joined);
            out.push(reducer.reduce(&joined));
            window.pop_front();
        }
    }

    if out.is_empty() {
        join_window(&window, &mut joined);
        out.push(reducer.reduce(&joined));
    }
    out
}

fn join_window(window: &VecDeque<&str>, joined: &mut String) {
    joined.clear();
    for (i, word) in window.iter().enumerate() {
        if i > 0 {
            joined.push(' ');
        }
        joined.push_str(word);
    }
}
