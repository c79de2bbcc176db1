// Character classification and lookup-key normalization

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

// ---------------------------------------------------------------------------
// Character type classification
// ---------------------------------------------------------------------------

/// Character type classification used by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharType {
    Unknown,
    Letter,
    Digit,
    Whitespace,
    /// A hyphen: splits tokens like whitespace does.
    Hyphen,
    Punctuation,
}

/// Returns the character type for a given character.
pub fn get_char_type(c: char) -> CharType {
    if is_hyphen(c) {
        return CharType::Hyphen;
    }
    if is_whitespace(c) {
        return CharType::Whitespace;
    }
    if c.is_alphabetic() {
        return CharType::Letter;
    }
    if c.is_numeric() {
        return CharType::Digit;
    }
    if is_punctuation_char(c) || c.is_ascii_punctuation() {
        return CharType::Punctuation;
    }
    CharType::Unknown
}

/// Check whether a character is a punctuation character outside ASCII that
/// may stick to a number word ("vingt-mille," or "«cent»").
fn is_punctuation_char(c: char) -> bool {
    matches!(
        c,
        '\u{00AB}' // « LEFT-POINTING DOUBLE ANGLE QUOTATION MARK
            | '\u{00BB}' // » RIGHT-POINTING DOUBLE ANGLE QUOTATION MARK
            | '\u{2013}' // EN DASH
            | '\u{2014}' // EM DASH
            | '\u{2018}' // LEFT SINGLE QUOTATION MARK
            | '\u{2019}' // RIGHT SINGLE QUOTATION MARK
            | '\u{201C}' // LEFT DOUBLE QUOTATION MARK
            | '\u{201D}' // RIGHT DOUBLE QUOTATION MARK
            | '\u{2026}' // HORIZONTAL ELLIPSIS
    )
}

/// Check whether a character is a hyphen that joins number words
/// ("vingt-cinq", "twenty-five").
pub fn is_hyphen(c: char) -> bool {
    matches!(
        c,
        '-' | '\u{2010}' // HYPHEN
            | '\u{2011}' // NON-BREAKING HYPHEN
    )
}

/// Check whether a character is a whitespace character.
pub fn is_whitespace(c: char) -> bool {
    let cp = c as u32;
    (0x09..=0x0D).contains(&cp)
        || cp == 0x20
        || cp == 0x85
        || cp == 0xA0
        || cp == 0x1680
        || (0x2000..=0x200A).contains(&cp)
        || cp == 0x2028
        || cp == 0x2029
        || cp == 0x202F
        || cp == 0x205F
        || cp == 0x3000
}

/// Check whether a character separates tokens (whitespace or hyphen).
pub fn is_separator(c: char) -> bool {
    is_whitespace(c) || is_hyphen(c)
}

/// Check whether a character is dropped when building a lookup key.
pub fn is_key_noise(c: char) -> bool {
    matches!(
        get_char_type(c),
        CharType::Punctuation | CharType::Unknown
    )
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Strip diacritics by canonical decomposition, dropping combining marks.
///
/// "troisième" becomes "troisieme". Characters without a canonical
/// decomposition pass through unchanged.
pub fn fold_accents(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Build the lexicon lookup key of a raw token: accents folded, lowercased,
/// punctuation removed.
///
/// The key may be empty (for a token made only of punctuation).
pub fn lookup_key(raw: &str) -> String {
    fold_accents(raw)
        .chars()
        .filter(|&c| !is_key_noise(c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Byte length of the leading punctuation of `text`.
pub fn leading_noise_len(text: &str) -> usize {
    text.len() - text.trim_start_matches(is_key_noise).len()
}

/// Byte length of the trailing punctuation of `text`.
pub fn trailing_noise_len(text: &str) -> usize {
    text.len() - text.trim_end_matches(is_key_noise).len()
}
