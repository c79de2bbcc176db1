// English number words (short scale)

use super::{Lexicon, WordTable};

const UNIT: &[(&str, u64)] = &[
    ("zero", 0),
    ("first", 1),
    ("one", 1),
    ("second", 2),
    ("two", 2),
    ("third", 3),
    ("three", 3),
    ("fourth", 4),
    ("four", 4),
    ("fifth", 5),
    ("five", 5),
    ("sixth", 6),
    ("six", 6),
    ("seventh", 7),
    ("seven", 7),
    ("eighth", 8),
    ("eight", 8),
    ("ninth", 9),
    ("nine", 9),
    ("tenth", 10),
    ("ten", 10),
    ("eleventh", 11),
    ("eleven", 11),
    ("twelfth", 12),
    ("twelve", 12),
    ("thirteenth", 13),
    ("thirteen", 13),
    ("fourteenth", 14),
    ("fourteen", 14),
    ("fifteenth", 15),
    ("fifteen", 15),
    ("sixteenth", 16),
    ("sixteen", 16),
    ("seventeenth", 17),
    ("seventeen", 17),
    ("eighteenth", 18),
    ("eighteen", 18),
    ("nineteenth", 19),
    ("nineteen", 19),
];

const TEN: &[(&str, u64)] = &[
    ("twenty", 20),
    ("twentieth", 20),
    ("thirty", 30),
    ("thirtieth", 30),
    ("forty", 40),
    ("fortieth", 40),
    ("fifty", 50),
    ("fiftieth", 50),
    ("sixty", 60),
    ("sixtieth", 60),
    ("seventy", 70),
    ("seventieth", 70),
    ("eighty", 80),
    ("eightieth", 80),
    ("ninety", 90),
    ("ninetieth", 90),
];

const MAGNITUDE: &[(&str, u64)] = &[
    ("hundred", 100),
    ("hundredth", 100),
    ("thousand", 1_000),
    ("thousandth", 1_000),
    ("million", 1_000_000),
    ("millionth", 1_000_000),
    ("billion", 1_000_000_000),
    ("billionth", 1_000_000_000),
    ("trillion", 1_000_000_000_000),
    ("trillionth", 1_000_000_000_000),
    ("quadrillion", 1_000_000_000_000_000),
    ("quadrillionth", 1_000_000_000_000_000),
    ("quintillion", 1_000_000_000_000_000_000),
    ("quintillionth", 1_000_000_000_000_000_000),
];

/// The English lexicon.
pub fn lexicon() -> Lexicon {
    Lexicon {
        language: "en".to_string(),
        unit: WordTable::from_pairs(UNIT),
        ten: WordTable::from_pairs(TEN),
        magnitude: WordTable::from_pairs(MAGNITUDE),
        connectors: vec!["and".to_string()],
        points: vec!["point".to_string(), "dot".to_string()],
        helpers: vec!["a".to_string(), "and".to_string()],
    }
}
