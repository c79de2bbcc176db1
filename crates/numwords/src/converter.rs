// Converter: top-level integration point for number-word conversion.
//
// Owns a compiled grammar and runs the pipeline:
//
//   tokenize -> (fuzzy correction) -> lex -> find regions
//            -> evaluate each region -> rewrite
//
// The grammar is immutable, so a `Converter` is `Send + Sync` and can be
// shared freely. `Converter::shared()` is the process-wide instance built
// from every built-in lexicon.

use std::sync::LazyLock;

use numwords_core::token::{Region, Token};
use numwords_core::value::Conversion;
use serde::{Deserialize, Serialize};

use crate::fuzzy::FuzzyMatcher;
use crate::grammar::{EvalError, Grammar};
use crate::lexicon::{Lexicon, LexiconError};
use crate::region::RegionFinder;
use crate::rewrite::{EvaluatedRegion, Resolution, rewrite, spans_whole_input};
use crate::tokenizer::tokenize;

/// Per-call conversion options.
///
/// Deserializes from `{"fuzzy": true}`; missing keys take their default and
/// unknown keys are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Correct every word to its nearest number word before matching.
    pub fuzzy: bool,
}

impl ConvertOptions {
    /// Options with fuzzy matching enabled.
    pub fn fuzzy() -> Self {
        Self { fuzzy: true }
    }
}

static SHARED: LazyLock<Converter> = LazyLock::new(|| {
    Converter::from_lexicon(&Lexicon::all()).unwrap_or_else(|err| {
        tracing::error!(%err, "built-in lexicon rejected, converting nothing");
        Converter::new(Grammar::empty())
    })
});

/// Converts number words in text to numerals.
#[derive(Debug, Clone)]
pub struct Converter {
    grammar: Grammar,
}

impl Converter {
    /// Create a converter around a compiled grammar.
    pub fn new(grammar: Grammar) -> Self {
        Self { grammar }
    }

    /// Compile `lexicon` and create a converter for it.
    pub fn from_lexicon(lexicon: &Lexicon) -> Result<Self, LexiconError> {
        Ok(Self::new(Grammar::compile(lexicon)?))
    }

    /// Converter for a built-in language: `"en"`, `"fr"` or `"all"`.
    pub fn for_language(language: &str) -> Result<Self, LexiconError> {
        Self::from_lexicon(&Lexicon::builtin(language)?)
    }

    /// The process-wide converter over every built-in lexicon.
    pub fn shared() -> &'static Converter {
        &SHARED
    }

    /// The compiled grammar.
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Tokenize `text`. In fuzzy mode every non-blank key is replaced by
    /// its nearest vocabulary word.
    pub fn tokens(&self, text: &str, options: &ConvertOptions) -> Vec<Token> {
        let mut tokens = tokenize(text);
        if options.fuzzy {
            let matcher = FuzzyMatcher::new(self.grammar.vocabulary());
            for token in tokens.iter_mut().filter(|t| !t.is_blank()) {
                if let Some(word) = matcher.correct(&token.key) {
                    if word != token.key {
                        tracing::trace!(from = %token.key, to = word, "fuzzy correction");
                        token.key = word.to_string();
                    }
                }
            }
        }
        tokens
    }

    /// Nearest vocabulary word to `word` (after normalization).
    pub fn correct(&self, word: &str) -> Option<&str> {
        let key = numwords_core::character::lookup_key(word);
        FuzzyMatcher::new(self.grammar.vocabulary()).correct(&key)
    }

    /// Find the number regions of `text`.
    pub fn regions(&self, text: &str, options: &ConvertOptions) -> Vec<Region> {
        let words = self.grammar.lex(&self.tokens(text, options));
        RegionFinder::new(&self.grammar).find(text, &words)
    }

    /// Evaluate one region. Failures leave the region unchanged.
    pub fn evaluate(&self, region: &Region) -> Resolution {
        match self.grammar.evaluate(&region.text) {
            Ok(number) => Resolution::Value(number),
            Err(EvalError::Overflow) => {
                tracing::warn!(text = %region.text, "number overflows 64 bits, left unchanged");
                Resolution::Unchanged
            }
            Err(EvalError::Parse(err)) => {
                tracing::debug!(text = %region.text, %err, "region does not parse, left unchanged");
                Resolution::Unchanged
            }
        }
    }

    /// Convert every number phrase of `text`.
    ///
    /// Returns `Conversion::Number` when the whole input is one number
    /// phrase and `Conversion::Text` otherwise. A lone helper word ("un")
    /// as the whole input is returned as text.
    pub fn convert(&self, text: &str, options: &ConvertOptions) -> Conversion {
        let regions = self.regions(text, options);
        let single = regions.len() == 1;
        let evaluated: Vec<EvaluatedRegion> = regions
            .into_iter()
            .map(|region| {
                let helper = single
                    && self.grammar.is_helper(&region.text)
                    && spans_whole_input(text, &region);
                let resolution = if helper {
                    Resolution::Unchanged
                } else {
                    self.evaluate(&region)
                };
                EvaluatedRegion { region, resolution }
            })
            .collect();
        rewrite(text, &evaluated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use numwords_core::value::Number;

    fn convert(text: &str) -> Conversion {
        Converter::shared().convert(text, &ConvertOptions::default())
    }

    fn fuzzy(text: &str) -> Conversion {
        Converter::shared().convert(text, &ConvertOptions::fuzzy())
    }

    #[test]
    fn whole_input_number() {
        assert_eq!(convert("cent"), Conversion::from(100));
        assert_eq!(convert("cent cinq"), Conversion::from(105));
    }

    #[test]
    fn embedded_numbers() {
        assert_eq!(convert("test un deux trois test"), Conversion::from("test 1 2 3 test"));
        assert_eq!(convert("xxxxxxx cent"), Conversion::from("xxxxxxx 100"));
    }

    #[test]
    fn helper_word_alone_is_kept() {
        assert_eq!(convert("un"), Conversion::from("un"));
        assert_eq!(convert("et"), Conversion::from("et"));
        assert_eq!(convert("digit un "), Conversion::from("digit 1 "));
        assert_eq!(convert("un."), Conversion::from("un."));
        assert_eq!(convert("  un "), Conversion::from("  un "));
    }

    #[test]
    fn sentence_punctuation_keeps_whole_number() {
        assert_eq!(convert("cent."), Conversion::from(100));
        assert_eq!(convert("(cent)"), Conversion::from(100));
        assert_eq!(convert("vingt-cinq !"), Conversion::from(25));
    }

    #[test]
    fn decimal_separator_after_blank_tokens() {
        let result = convert("cinq  point deux");
        assert!(result.is_number());
        assert_eq!(result.to_string(), "5.2");
        assert_eq!(convert("cinq xyz point deux"), Conversion::from("5 xyz 0.2"));
    }

    #[test]
    fn converter_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Converter>();
        assert_send_sync::<Grammar>();
    }

    #[test]
    fn overflow_leaves_text() {
        assert_eq!(
            convert("il y a quatre-vingt-dix trillion X"),
            Conversion::from("il y a quatre-vingt-dix trillion X")
        );
    }

    #[test]
    fn fuzzy_corrections() {
        assert_eq!(fuzzy("cant"), Conversion::from(100));
        assert_eq!(fuzzy("deu malle conq"), Conversion::from(2005));
    }

    #[test]
    fn fuzzy_tokens_keep_offsets() {
        let tokens = Converter::shared().tokens("deu malle", &ConvertOptions::fuzzy());
        assert_eq!(tokens[0].key, "deux");
        assert_eq!(tokens[0].text, "deu");
        assert_eq!((tokens[1].start, tokens[1].end), (4, 9));
        assert_eq!(tokens[1].key, "mille");
    }

    #[test]
    fn correct_normalizes_first() {
        assert_eq!(Converter::shared().correct("Malle,"), Some("mille"));
    }

    #[test]
    fn per_language_converters() {
        let en = Converter::for_language("en").unwrap();
        assert_eq!(
            en.convert("one hundred and five", &ConvertOptions::default()),
            Conversion::from(105)
        );
        // French-only words are plain text to the English grammar
        assert_eq!(
            en.convert("cent", &ConvertOptions::default()),
            Conversion::from("cent")
        );
        let fr = Converter::for_language("fr").unwrap();
        assert_eq!(
            fr.convert("deux billions", &ConvertOptions::default()).as_u64(),
            Some(2_000_000_000_000)
        );
        assert!(Converter::for_language("de").is_err());
    }

    #[test]
    fn custom_lexicon() {
        let lexicon = Lexicon::from_json(
            r#"{
                "language": "eo",
                "unit": { "unu": 1, "du": 2, "tri": 3 },
                "ten": { "dudek": 20 },
                "magnitude": { "cent": 100, "mil": 1000 },
                "connectors": ["kaj"],
                "points": ["komo"]
            }"#,
        )
        .unwrap();
        let converter = Converter::from_lexicon(&lexicon).unwrap();
        let options = ConvertOptions::default();
        assert_eq!(converter.convert("du mil tri", &options), Conversion::from(2003));
        assert_eq!(
            converter.convert("mi havas dudek du katojn", &options),
            Conversion::from("mi havas 22 katojn")
        );
    }

    #[test]
    fn regions_and_evaluate() {
        let converter = Converter::shared();
        let regions = converter.regions("vingt ans", &ConvertOptions::default());
        assert_eq!(regions.len(), 1);
        assert_eq!(
            converter.evaluate(&regions[0]),
            Resolution::Value(Number::Integer(20))
        );
    }

    #[test]
    fn options_from_json() {
        let options: ConvertOptions = serde_json::from_str(r#"{"fuzzy": true, "extra": 1}"#).unwrap();
        assert!(options.fuzzy);
        let options: ConvertOptions = serde_json::from_str("{}").unwrap();
        assert!(!options.fuzzy);
    }
}
