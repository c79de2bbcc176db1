// Recursive descent parser: words to NumberTree

use numwords_core::WordClass;

use super::{Grammar, ParseFailure};
use crate::tokenizer::tokenize;

/// One syntactic shape of a number phrase, with the values of its words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Ten(u64),
    Unit(u64),
    TenAndUnit(u64, u64),
    TenAndMagnitude(u64, u64),
    UnitAndMagnitude(u64, u64),
    TenUnitAndMagnitude(u64, u64, u64),
    Magnitude(u64),
}

impl Section {
    /// Number of words the section spans.
    pub fn width(&self) -> usize {
        match self {
            Self::Ten(_) | Self::Unit(_) | Self::Magnitude(_) => 1,
            Self::TenAndUnit(..) | Self::TenAndMagnitude(..) | Self::UnitAndMagnitude(..) => 2,
            Self::TenUnitAndMagnitude(..) => 3,
        }
    }
}

/// Parse tree of one region: sections, then an optional decimal tail.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NumberTree {
    pub sections: Vec<Section>,
    /// Whether a decimal separator was present.
    pub point: bool,
    /// Unit values after the separator, in spoken order.
    pub decimals: Vec<u64>,
}

/// A word ready for parsing.
#[derive(Debug, Clone)]
struct Item {
    key: String,
    class: WordClass,
    value: u64,
}

impl Grammar {
    /// Parse a region text into a `NumberTree`.
    ///
    /// Punctuation and connectors are ignored; every other word must be part
    /// of the parse.
    pub fn parse(&self, text: &str) -> Result<NumberTree, ParseFailure> {
        let mut items = Vec::new();
        for (position, word) in self.lex(&tokenize(text)).into_iter().enumerate() {
            let Some(terminal) = word.terminal else {
                return Err(ParseFailure::UnknownWord {
                    word: word.key,
                    position,
                });
            };
            if terminal.class != WordClass::Connector {
                items.push(Item {
                    key: word.key,
                    class: terminal.class,
                    value: terminal.value,
                });
            }
        }
        if items.is_empty() {
            return Err(ParseFailure::Empty);
        }
        Parser { items: &items, pos: 0 }.number()
    }
}

struct Parser<'a> {
    items: &'a [Item],
    pos: usize,
}

impl Parser<'_> {
    fn class_at(&self, offset: usize) -> Option<WordClass> {
        self.items.get(self.pos + offset).map(|item| item.class)
    }

    fn value_at(&self, offset: usize) -> u64 {
        self.items.get(self.pos + offset).map_or(0, |item| item.value)
    }

    fn unexpected(&self) -> ParseFailure {
        match self.items.get(self.pos) {
            Some(item) => ParseFailure::UnexpectedWord {
                word: item.key.clone(),
                class: item.class,
                position: self.pos,
            },
            None => ParseFailure::Empty,
        }
    }

    /// Number = Section* point? unit*
    fn number(mut self) -> Result<NumberTree, ParseFailure> {
        let mut tree = NumberTree::default();

        while let Some(section) = self.section() {
            self.pos += section.width();
            tree.sections.push(section);
        }

        if self.class_at(0) == Some(WordClass::Point) {
            tree.point = true;
            self.pos += 1;
            while self.class_at(0) == Some(WordClass::Unit) {
                tree.decimals.push(self.value_at(0));
                self.pos += 1;
            }
        }

        if self.pos < self.items.len() {
            return Err(self.unexpected());
        }
        Ok(tree)
    }

    /// The section starting at the current position, chosen by lookahead.
    fn section(&self) -> Option<Section> {
        use WordClass::{Magnitude, Ten, Unit};

        let v = |offset| self.value_at(offset);
        let section = match (self.class_at(0), self.class_at(1), self.class_at(2)) {
            (Some(Ten), Some(Unit), Some(Magnitude)) => Section::TenUnitAndMagnitude(v(0), v(1), v(2)),
            (Some(Ten), Some(Unit), _) => Section::TenAndUnit(v(0), v(1)),
            (Some(Ten), Some(Magnitude), _) => Section::TenAndMagnitude(v(0), v(1)),
            (Some(Ten), _, _) => Section::Ten(v(0)),
            (Some(Unit), Some(Magnitude), _) => Section::UnitAndMagnitude(v(0), v(1)),
            (Some(Unit), _, _) => Section::Unit(v(0)),
            (Some(Magnitude), _, _) => Section::Magnitude(v(0)),
            _ => return None,
        };
        Some(section)
    }
}
