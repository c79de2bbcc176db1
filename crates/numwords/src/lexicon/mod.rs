// Lexicons: per-language word tables for UNIT, TEN and MAGNITUDE words
//
// A lexicon is plain data. It is validated and compiled into a `Grammar`
// (see `crate::grammar`), which is what the rest of the crate consumes.

#[cfg(feature = "english")]
pub mod english;
#[cfg(feature = "french")]
pub mod french;

use std::fmt;

use hashbrown::HashMap;
use numwords_core::WordClass;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;

/// Error type for lexicon loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    /// A word is empty or not in normalized form (lowercase, no accents,
    /// no punctuation, parts joined by `-`).
    #[error("invalid lexicon word {word:?}: {reason}")]
    InvalidWord { word: String, reason: &'static str },

    /// The same word appears in two classes.
    #[error("word {word:?} is both {first} and {second}")]
    Overlap {
        word: String,
        first: WordClass,
        second: WordClass,
    },

    /// The JSON document could not be parsed.
    #[error("failed to parse lexicon JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// No built-in lexicon exists for the language.
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
}

// ---------------------------------------------------------------------------
// WordTable
// ---------------------------------------------------------------------------

/// An insertion-ordered map from normalized words to values.
///
/// Order matters: the fuzzy matcher breaks score ties by vocabulary order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordTable {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl WordTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from static `(word, value)` pairs.
    pub fn from_pairs(pairs: &[(&str, u64)]) -> Self {
        let mut table = Self::new();
        for &(word, value) in pairs {
            table.insert(word, value);
        }
        table
    }

    /// Insert or overwrite a word. An overwritten word keeps its position.
    pub fn insert(&mut self, word: impl Into<String>, value: u64) {
        let word = word.into();
        match self.index.get(&word) {
            Some(&i) => self.entries[i].1 = value,
            None => {
                self.index.insert(word.clone(), self.entries.len());
                self.entries.push((word, value));
            }
        }
    }

    /// Remove a word, returning its value.
    pub fn remove(&mut self, word: &str) -> Option<u64> {
        let i = self.index.remove(word)?;
        let (_, value) = self.entries.remove(i);
        for slot in self.index.values_mut() {
            if *slot > i {
                *slot -= 1;
            }
        }
        Some(value)
    }

    /// Look up a word.
    pub fn get(&self, word: &str) -> Option<u64> {
        self.index.get(word).map(|&i| self.entries[i].1)
    }

    /// Returns `true` if the table contains the word.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Iterate over `(word, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(w, v)| (w.as_str(), *v))
    }

    /// Number of words in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'de> Deserialize<'de> for WordTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = WordTable;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from words to non-negative integers")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<WordTable, A::Error> {
                let mut table = WordTable::new();
                while let Some((word, value)) = map.next_entry::<String, u64>()? {
                    if table.contains(&word) {
                        return Err(de::Error::custom(format!("duplicate word {word:?}")));
                    }
                    table.insert(word, value);
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}

// ---------------------------------------------------------------------------
// Lexicon
// ---------------------------------------------------------------------------

/// The number vocabulary of one language, or of several merged languages.
///
/// JSON form:
///
/// ```json
/// {
///   "language": "eo",
///   "unit": { "unu": 1, "du": 2 },
///   "ten": { "dek": 10 },
///   "magnitude": { "cent": 100, "mil": 1000 },
///   "connectors": ["kaj"],
///   "points": ["komo"],
///   "helpers": ["kaj"]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Lexicon {
    /// Language tag ("en", "fr", "en+fr" after merging).
    pub language: String,
    /// Digits, teens and their ordinals.
    pub unit: WordTable,
    /// Tens and their ordinals, including hyphen-joined compounds.
    pub ten: WordTable,
    /// Scale words and their ordinals.
    pub magnitude: WordTable,
    /// Words that join number words without a value ("and", "et").
    pub connectors: Vec<String>,
    /// Decimal separators ("point", "dot").
    pub points: Vec<String>,
    /// Words left untouched when they are the entire input ("a", "un").
    pub helpers: Vec<String>,
}

impl Lexicon {
    /// Parse a lexicon from JSON.
    pub fn from_json(json: &str) -> Result<Self, LexiconError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The built-in lexicon for a language tag.
    ///
    /// `"all"` merges every built-in language in a fixed order (English,
    /// then French).
    pub fn builtin(language: &str) -> Result<Self, LexiconError> {
        match language {
            #[cfg(feature = "english")]
            "en" => Ok(english::lexicon()),
            #[cfg(feature = "french")]
            "fr" => Ok(french::lexicon()),
            "all" => Ok(Self::all()),
            other => Err(LexiconError::UnsupportedLanguage(other.to_string())),
        }
    }

    /// Every built-in lexicon merged. French is merged last, so it wins on
    /// shared spellings ("billion", "trillion").
    pub fn all() -> Self {
        #[allow(unused_mut)]
        let mut merged = Self::default();
        #[cfg(feature = "english")]
        {
            merged = merged.merge(english::lexicon());
        }
        #[cfg(feature = "french")]
        {
            merged = merged.merge(french::lexicon());
        }
        merged
    }

    /// Union with `other`; on a shared word, `other` wins, including its
    /// class.
    pub fn merge(mut self, other: Lexicon) -> Self {
        for (word, value) in other.unit.iter() {
            self.release(word);
            self.unit.insert(word, value);
        }
        for (word, value) in other.ten.iter() {
            self.release(word);
            self.ten.insert(word, value);
        }
        for (word, value) in other.magnitude.iter() {
            self.release(word);
            self.magnitude.insert(word, value);
        }
        for word in &other.connectors {
            self.release(word);
            self.connectors.push(word.clone());
        }
        for word in &other.points {
            self.release(word);
            self.points.push(word.clone());
        }
        for word in other.helpers {
            if !self.helpers.contains(&word) {
                self.helpers.push(word);
            }
        }
        self.language = match (self.language.is_empty(), other.language.is_empty()) {
            (true, _) => other.language,
            (false, true) => self.language,
            (false, false) => format!("{}+{}", self.language, other.language),
        };
        self
    }

    /// Drop `word` from every class so it can be re-inserted elsewhere.
    fn release(&mut self, word: &str) {
        self.unit.remove(word);
        self.ten.remove(word);
        self.magnitude.remove(word);
        self.connectors.retain(|w| w != word);
        self.points.retain(|w| w != word);
    }

    /// Every `(word, class, value)` entry, in vocabulary order: connectors,
    /// decimal separators, units, tens, magnitudes.
    pub fn entries(&self) -> impl Iterator<Item = (&str, WordClass, u64)> {
        let connectors = self
            .connectors
            .iter()
            .map(|w| (w.as_str(), WordClass::Connector, 0));
        let points = self
            .points
            .iter()
            .map(|w| (w.as_str(), WordClass::Point, 0));
        let units = self.unit.iter().map(|(w, v)| (w, WordClass::Unit, v));
        let tens = self.ten.iter().map(|(w, v)| (w, WordClass::Ten, v));
        let magnitudes = self
            .magnitude
            .iter()
            .map(|(w, v)| (w, WordClass::Magnitude, v));
        connectors
            .chain(points)
            .chain(units)
            .chain(tens)
            .chain(magnitudes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_table_keeps_insertion_order() {
        let table = WordTable::from_pairs(&[("trois", 3), ("un", 1), ("deux", 2)]);
        let words: Vec<&str> = table.iter().map(|(w, _)| w).collect();
        assert_eq!(words, ["trois", "un", "deux"]);
    }

    #[test]
    fn word_table_overwrite_keeps_position() {
        let mut table = WordTable::from_pairs(&[("billion", 1_000_000_000), ("mille", 1000)]);
        table.insert("billion", 1_000_000_000_000);
        assert_eq!(table.get("billion"), Some(1_000_000_000_000));
        assert_eq!(table.iter().next(), Some(("billion", 1_000_000_000_000)));
    }

    #[test]
    fn word_table_remove_reindexes() {
        let mut table = WordTable::from_pairs(&[("a", 1), ("b", 2), ("c", 3)]);
        assert_eq!(table.remove("a"), Some(1));
        assert_eq!(table.get("b"), Some(2));
        assert_eq!(table.get("c"), Some(3));
        assert_eq!(table.len(), 2);
        assert_eq!(table.remove("a"), None);
    }

    #[test]
    fn merge_last_wins() {
        let first = Lexicon {
            language: "en".into(),
            magnitude: WordTable::from_pairs(&[("billion", 1_000_000_000)]),
            ..Lexicon::default()
        };
        let second = Lexicon {
            language: "fr".into(),
            magnitude: WordTable::from_pairs(&[("billion", 1_000_000_000_000)]),
            ..Lexicon::default()
        };
        let merged = first.merge(second);
        assert_eq!(merged.language, "en+fr");
        assert_eq!(merged.magnitude.get("billion"), Some(1_000_000_000_000));
        assert_eq!(merged.magnitude.len(), 1);
    }

    #[test]
    fn merge_moves_word_between_classes() {
        let first = Lexicon {
            unit: WordTable::from_pairs(&[("dix", 10)]),
            ..Lexicon::default()
        };
        let second = Lexicon {
            ten: WordTable::from_pairs(&[("dix", 10)]),
            ..Lexicon::default()
        };
        let merged = first.merge(second);
        assert!(!merged.unit.contains("dix"));
        assert!(merged.ten.contains("dix"));
    }

    #[test]
    fn merge_deduplicates_connectors_and_helpers() {
        let one = Lexicon {
            connectors: vec!["and".into()],
            helpers: vec!["and".into()],
            ..Lexicon::default()
        };
        let merged = one.clone().merge(one);
        assert_eq!(merged.connectors, ["and"]);
        assert_eq!(merged.helpers, ["and"]);
    }

    #[test]
    fn entries_order() {
        let lexicon = Lexicon {
            unit: WordTable::from_pairs(&[("one", 1)]),
            ten: WordTable::from_pairs(&[("twenty", 20)]),
            magnitude: WordTable::from_pairs(&[("hundred", 100)]),
            connectors: vec!["and".into()],
            points: vec!["point".into()],
            ..Lexicon::default()
        };
        let words: Vec<&str> = lexicon.entries().map(|(w, _, _)| w).collect();
        assert_eq!(words, ["and", "point", "one", "twenty", "hundred"]);
    }

    #[test]
    fn from_json_preserves_document_order() {
        let lexicon = Lexicon::from_json(
            r#"{
                "language": "eo",
                "unit": { "unu": 1, "du": 2, "tri": 3 },
                "magnitude": { "cent": 100 },
                "connectors": ["kaj"]
            }"#,
        )
        .unwrap();
        assert_eq!(lexicon.language, "eo");
        let units: Vec<&str> = lexicon.unit.iter().map(|(w, _)| w).collect();
        assert_eq!(units, ["unu", "du", "tri"]);
        assert_eq!(lexicon.magnitude.get("cent"), Some(100));
        assert!(lexicon.ten.is_empty());
    }

    #[test]
    fn from_json_rejects_duplicates_and_unknown_fields() {
        assert!(matches!(
            Lexicon::from_json(r#"{ "unit": { "unu": 1, "unu": 2 } }"#),
            Err(LexiconError::Json(_))
        ));
        assert!(matches!(
            Lexicon::from_json(r#"{ "units": {} }"#),
            Err(LexiconError::Json(_))
        ));
    }

    #[test]
    fn builtin_unknown_language() {
        assert!(matches!(
            Lexicon::builtin("xx"),
            Err(LexiconError::UnsupportedLanguage(lang)) if lang == "xx"
        ));
    }
}
