// Grammar engine: compiled number vocabulary, lexer, parser and evaluator
//
// Architecture:
//   - `lexer`: classifies tokens into words, joining multi-token compounds
//   - `parser`: recursive descent over ten/unit/magnitude terminals into a
//     `NumberTree` of `Section`s with an optional decimal tail
//   - `eval`: reduces a `NumberTree` to a `Number`
//
// The grammar is
//
//   Number              = Section* point? unit*
//   Section             = TenUnitAndMagnitude | TenAndUnit | TenAndMagnitude
//                       | Ten | UnitAndMagnitude | Unit | Magnitude
//   TenUnitAndMagnitude = ten unit magnitude
//   TenAndUnit          = ten unit ~magnitude
//   TenAndMagnitude     = ten ~unit magnitude
//   Ten                 = ten ~unit ~magnitude
//   UnitAndMagnitude    = ~ten unit magnitude
//   Unit                = ~ten unit ~magnitude
//   Magnitude           = ~ten ~unit magnitude
//
// with connectors removed before parsing.

pub mod eval;
pub mod lexer;
pub mod parser;

use hashbrown::{HashMap, HashSet};
use numwords_core::WordClass;
use numwords_core::character::{is_whitespace, lookup_key};
use numwords_core::value::Number;

use crate::lexicon::{Lexicon, LexiconError};

pub use eval::EvalError;
pub use lexer::Word;
pub use parser::{NumberTree, Section};

/// Error returned when a region's text does not match the grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseFailure {
    /// Nothing but connectors (or nothing at all) to parse.
    #[error("no number words to parse")]
    Empty,

    /// A word outside the vocabulary.
    #[error("unknown word {word:?} at position {position}")]
    UnknownWord { word: String, position: usize },

    /// A vocabulary word in a place the grammar does not allow.
    #[error("unexpected {class} {word:?} at position {position}")]
    UnexpectedWord {
        word: String,
        class: WordClass,
        position: usize,
    },
}

/// A vocabulary entry: its class and, for value words, its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Terminal {
    pub class: WordClass,
    pub value: u64,
}

/// The compiled number grammar of a lexicon.
///
/// Immutable once built, so one instance can serve any number of
/// conversions, from any number of threads.
#[derive(Debug, Clone)]
pub struct Grammar {
    language: String,
    terminals: HashMap<String, Terminal>,
    vocabulary: Vec<String>,
    helpers: HashSet<String>,
    /// Largest number of tokens in a compound word ("quatre-vingt-dix" = 3).
    max_compound: usize,
}

impl Grammar {
    /// Validate `lexicon` and compile it.
    pub fn compile(lexicon: &Lexicon) -> Result<Self, LexiconError> {
        let mut terminals: HashMap<String, Terminal> = HashMap::new();
        let mut vocabulary = Vec::new();
        let mut max_compound = 1;

        for (word, class, value) in lexicon.entries() {
            let parts = validate_word(word)?;
            if parts > 1 && !class.has_value() {
                return Err(LexiconError::InvalidWord {
                    word: word.to_string(),
                    reason: "connectors and decimal separators must be single words",
                });
            }
            if let Some(existing) = terminals.get(word) {
                return Err(LexiconError::Overlap {
                    word: word.to_string(),
                    first: existing.class,
                    second: class,
                });
            }
            max_compound = max_compound.max(parts);
            terminals.insert(word.to_string(), Terminal { class, value });
            vocabulary.push(word.to_string());
        }

        let helpers = lexicon.helpers.iter().map(|h| lookup_key(h)).collect();

        tracing::debug!(
            language = %lexicon.language,
            words = vocabulary.len(),
            max_compound,
            "compiled number grammar"
        );

        Ok(Self {
            language: lexicon.language.clone(),
            terminals,
            vocabulary,
            helpers,
            max_compound,
        })
    }

    /// A grammar that recognizes nothing.
    pub fn empty() -> Self {
        Self {
            language: String::new(),
            terminals: HashMap::new(),
            vocabulary: Vec::new(),
            helpers: HashSet::new(),
            max_compound: 1,
        }
    }

    /// Language tag of the compiled lexicon.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Look up a normalized word.
    pub fn terminal(&self, word: &str) -> Option<Terminal> {
        self.terminals.get(word).copied()
    }

    /// Every recognized word in vocabulary order.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Returns `true` for a bare helper word ("a", "un", "et").
    pub fn is_helper(&self, word: &str) -> bool {
        self.helpers.contains(word)
    }

    /// Parse and evaluate a region text.
    pub fn evaluate(&self, text: &str) -> Result<Number, EvalError> {
        let tree = self.parse(text)?;
        tree.evaluate()
    }
}

/// Check that a lexicon word is normalized; returns its number of parts.
fn validate_word(word: &str) -> Result<usize, LexiconError> {
    let invalid = |reason| LexiconError::InvalidWord {
        word: word.to_string(),
        reason,
    };
    if word.is_empty() {
        return Err(invalid("empty word"));
    }
    let mut parts = 0;
    for part in word.split('-') {
        if part.is_empty() {
            return Err(invalid("empty compound part"));
        }
        if part.chars().any(is_whitespace) {
            return Err(invalid("contains whitespace"));
        }
        if lookup_key(part) != part {
            return Err(invalid("not lowercase, accent-free and punctuation-free"));
        }
        parts += 1;
    }
    Ok(parts)
}
