// Tokenizer: split text on whitespace and hyphens, keeping byte offsets

use numwords_core::character::is_separator;
use numwords_core::token::Token;

/// Split `text` into tokens at every whitespace or hyphen character.
///
/// Every separator closes a token, so consecutive separators yield empty
/// tokens and the output always has one more token than the text has
/// separators. Offsets are byte offsets into `text`.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut start = 0;

    for (i, c) in text.char_indices() {
        if is_separator(c) {
            tokens.push(Token::new(tokens.len(), &text[start..i], start));
            start = i + c.len_utf8();
        }
    }
    tokens.push(Token::new(tokens.len(), &text[start..], start));
    tokens
}
