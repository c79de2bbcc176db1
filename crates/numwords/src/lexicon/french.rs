// French number words (long scale), keys without accents
//
// "dix" is a TEN word so that "dix-sept" reads as ten + unit, and the
// vigesimal tens are hyphen-joined compounds ("quatre-vingt-dix").

use super::{Lexicon, WordTable};

const UNIT: &[(&str, u64)] = &[
    ("zero", 0),
    ("un", 1),
    ("une", 1),
    ("premier", 1),
    ("premiere", 1),
    ("unieme", 1),
    ("deux", 2),
    ("deuxieme", 2),
    ("second", 2),
    ("seconde", 2),
    ("trois", 3),
    ("troisieme", 3),
    ("quatre", 4),
    ("quatrieme", 4),
    ("cinq", 5),
    ("cinquieme", 5),
    ("six", 6),
    ("sixieme", 6),
    ("sept", 7),
    ("septieme", 7),
    ("huit", 8),
    ("huitieme", 8),
    ("neuf", 9),
    ("neuvieme", 9),
    ("onze", 11),
    ("onzieme", 11),
    ("douze", 12),
    ("douzieme", 12),
    ("treize", 13),
    ("treizieme", 13),
    ("quatorze", 14),
    ("quatorzieme", 14),
    ("quinze", 15),
    ("quinzieme", 15),
    ("seize", 16),
    ("seizieme", 16),
];

const TEN: &[(&str, u64)] = &[
    ("dix", 10),
    ("dixieme", 10),
    ("vingt", 20),
    ("vingts", 20),
    ("vingtieme", 20),
    ("trente", 30),
    ("trentieme", 30),
    ("quarante", 40),
    ("quarantieme", 40),
    ("cinquante", 50),
    ("cinquantieme", 50),
    ("soixante", 60),
    ("soixantieme", 60),
    ("soixante-dix", 70),
    ("soixante-dixieme", 70),
    ("septante", 70),
    ("septantieme", 70),
    ("quatre-vingt", 80),
    ("quatre-vingts", 80),
    ("quatre-vingtieme", 80),
    ("huitante", 80),
    ("quatre-vingt-dix", 90),
    ("quatre-vingt-dixieme", 90),
    ("nonante", 90),
    ("nonantieme", 90),
];

const MAGNITUDE: &[(&str, u64)] = &[
    ("cent", 100),
    ("cents", 100),
    ("centieme", 100),
    ("mille", 1_000),
    ("millieme", 1_000),
    ("million", 1_000_000),
    ("millions", 1_000_000),
    ("millionieme", 1_000_000),
    ("milliard", 1_000_000_000),
    ("milliards", 1_000_000_000),
    ("milliardieme", 1_000_000_000),
    ("billion", 1_000_000_000_000),
    ("billions", 1_000_000_000_000),
    ("billionieme", 1_000_000_000_000),
    ("trillion", 1_000_000_000_000_000_000),
    ("trillions", 1_000_000_000_000_000_000),
    ("trillionieme", 1_000_000_000_000_000_000),
];

/// The French lexicon.
pub fn lexicon() -> Lexicon {
    Lexicon {
        language: "fr".to_string(),
        unit: WordTable::from_pairs(UNIT),
        ten: WordTable::from_pairs(TEN),
        magnitude: WordTable::from_pairs(MAGNITUDE),
        connectors: vec!["et".to_string()],
        points: vec!["point".to_string(), "virgule".to_string()],
        helpers: vec!["un".to_string(), "et".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vigesimal_compounds() {
        let lex = lexicon();
        assert_eq!(lex.ten.get("soixante-dix"), Some(70));
        assert_eq!(lex.ten.get("quatre-vingt"), Some(80));
        assert_eq!(lex.ten.get("quatre-vingt-dix"), Some(90));
    }

    #[test]
    fn long_scale() {
        let lex = lexicon();
        assert_eq!(lex.magnitude.get("milliard"), Some(10u64.pow(9)));
        assert_eq!(lex.magnitude.get("billion"), Some(10u64.pow(12)));
        assert_eq!(lex.magnitude.get("trillion"), Some(10u64.pow(18)));
    }
}
