//! Canonical text layer for winnowing fingerprints.
//!
//! Two small, pure transformations that run before n-gram hashing:
//!
//! - [`strip_whitespace_lowercase`] prepares text for **character** n-grams:
//!   every whitespace character is removed and the rest is lowercased.
//! - [`tokenize_words`] prepares text for **word** n-grams: the text is split
//!   on single spaces, pieces are trimmed and empty pieces dropped. No case
//!   folding is applied to words.
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no locale dependence. Same text in, same output
//! out, on any machine.

mod token;
mod whitespace;

pub use crate::token::{tokenize_words, WORD_DELIMITER};
pub use crate::whitespace::strip_whitespace_lowercase;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_mode_does_not_normalize_case() {
        assert_eq!(tokenize_words("Hello WORLD"), vec!["Hello", "WORLD"]);
    }

    #[test]
    fn char_and_word_preparation_agree_on_content() {
        let text = " The  Quick\tBrown ";
        let joined: String = tokenize_words(text).concat();
        assert_eq!(strip_whitespace_lowercase(&joined), strip_whitespace_lowercase(text));
    }
}
