/// The only delimiter used for word n-grams.
pub const WORD_DELIMITER: char = ' ';

/// Splits text into words for word n-grams.
///
/// The text is split on [`WORD_DELIMITER`] only. Each piece is trimmed of
/// surrounding whitespace and empty pieces are dropped, so runs of spaces and
/// leading or trailing spaces never produce empty words. Other whitespace
/// *inside* a piece is kept: `"a\tb"` is a single word.
///
/// Words borrow from `text`; nothing is copied.
pub fn tokenize_words(text: &str) -> Vec<&str> {
    text.split(WORD_DELIMITER)
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .collect()
}
