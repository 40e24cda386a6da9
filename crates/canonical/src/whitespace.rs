//! Whitespace stripping for the character n-gram pipeline.
//!
//! Character n-grams are taken over text with **all** whitespace removed, so
//! reflowing a paragraph or re-indenting it leaves its character fingerprint
//! unchanged. This is different from collapsing: `"a  b"` becomes `"ab"`,
//! not `"a b"`.
//!
//! # Whitespace Definition
//!
//! The six ASCII whitespace characters only: space, tab, newline, vertical
//! tab (U+000B), form feed and carriage return. No-break space (U+00A0), em
//! space (U+2003) and the other Unicode spaces are ordinary characters here,
//! so fingerprints agree with other winnowing implementations that use the
//! regex `\s` class.
//!
//! # Examples
//!
//! ```rust
//! use canonical::strip_whitespace_lowercase;
//!
//! assert_eq!(strip_whitespace_lowercase("Hello,\n  World"), "hello,world");
//! ```

/// Removes every whitespace character and lowercases the rest.
///
/// Lowercasing runs on the stripped string with the locale-insensitive
/// [`str::to_lowercase`], so context rules such as the Greek final sigma
/// apply to the text as it is hashed. Some characters lowercase to more than
/// one char (e.g. `'İ'`), which is why the output length is not bounded by
/// the input char count.
///
/// The function is idempotent: its output contains no whitespace and no
/// uppercase characters, so a second application returns it unchanged.
///
/// # Examples
///
/// ```rust
/// use canonical::strip_whitespace_lowercase;
///
/// assert_eq!(strip_whitespace_lowercase("A    B\tC \t\nD"), "abcd");
/// assert_eq!(strip_whitespace_lowercase(" \n\t "), "");
/// assert_eq!(strip_whitespace_lowercase("already"), "already");
/// ```
pub fn strip_whitespace_lowercase(text: &str) -> String {
    let stripped: String = text.chars().filter(|&c| !is_pattern_whitespace(c)).collect();
    stripped.to_lowercase()
}

// `[ \t\n\x0B\f\r]`; `is_ascii_whitespace` leaves out vertical tab.
fn is_pattern_whitespace(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\u{000B}'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_mixed_whitespace_runs() {
        let input = "A    B\tC \t\nD E F\t\t1 2\n 3 \n\r4\n\n5";
        assert_eq!(strip_whitespace_lowercase(input), "abcdef12345");
    }

    #[test]
    fn removes_rather_than_collapses() {
        assert_eq!(strip_whitespace_lowercase("a  b"), "ab");
        assert_eq!(strip_whitespace_lowercase("  leading and trailing  "), "leadingandtrailing");
    }

    #[test]
    fn strips_all_ascii_whitespace() {
        assert_eq!(strip_whitespace_lowercase("form\u{000C}feed\u{000B}vt"), "formfeedvt");
        assert_eq!(strip_whitespace_lowercase("a\tb\nc\rd e"), "abcde");
    }

    #[test]
    fn keeps_non_ascii_spaces() {
        assert_eq!(
            strip_whitespace_lowercase("no\u{00A0}break\u{2003}here"),
            "no\u{00A0}break\u{2003}here"
        );
        assert_eq!(
            strip_whitespace_lowercase("Ideographic\u{3000}Space"),
            "ideographic\u{3000}space"
        );
    }

    #[test]
    fn lowercases_non_ascii() {
        assert_eq!(strip_whitespace_lowercase("ÉCOLE Straße"), "écolestraße");
        assert_eq!(strip_whitespace_lowercase("ΟΔΟΣ"), "οδος");
        // Sigma is final only once whitespace is gone.
        assert_eq!(strip_whitespace_lowercase("ΟΔΟΣ ΚΑΙ"), "οδοσκαι");
    }

    #[test]
    fn empty_and_whitespace_only() {
        assert_eq!(strip_whitespace_lowercase(""), "");
        assert_eq!(strip_whitespace_lowercase(" \t\r\n "), "");
    }

    #[test]
    fn idempotent() {
        let inputs = [
            "This is for generating a fingerprint.",
            "A    B\tC \t\nD E F",
            "MiXeD\u{00A0}CaSe ÄÖÜ",
            "",
        ];
        for input in inputs {
            let once = strip_whitespace_lowercase(input);
            let twice = strip_whitespace_lowercase(&once);
            assert_eq!(once, twice);
        }
    }
}
