// numwords: convert number words in text to numerals.
//
// Pipeline (see `converter`):
// - `tokenizer`: split on whitespace and hyphens with byte offsets
// - `fuzzy`: Jaro nearest-word correction (fuzzy mode only)
// - `grammar`: compiled lexicon, lexer, parser and evaluator
// - `region`: grouping of number words into number phrases
// - `rewrite`: offset-preserving splice of the results
//
// Built-in lexicons live in `lexicon` behind the `english` and `french`
// features; custom lexicons load from JSON.

pub mod converter;
pub mod fuzzy;
pub mod grammar;
pub mod lexicon;
pub mod region;
pub mod rewrite;
pub mod tokenizer;

pub use converter::{ConvertOptions, Converter};
pub use grammar::Grammar;
pub use lexicon::{Lexicon, LexiconError};
pub use numwords_core::character::lookup_key;
pub use numwords_core::{Conversion, Decimal, Number, Region, Token, WordClass};

/// Convert every number phrase of `text` using the built-in lexicons.
///
/// ```
/// use numwords::{ConvertOptions, Conversion, convert};
///
/// let options = ConvertOptions::default();
/// assert_eq!(convert("vingt-cinq", &options), Conversion::from(25));
/// assert_eq!(
///     convert("il y a cent ans", &options),
///     Conversion::from("il y a 100 ans")
/// );
/// ```
pub fn convert(text: &str, options: &ConvertOptions) -> Conversion {
    Converter::shared().convert(text, options)
}
