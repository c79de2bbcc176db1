// Region finder: group number words into maximal number phrases
//
// One left-to-right pass over the lexed words. Each number word either
// extends the open region or closes it and opens a new one, as decided by
// `policy::decide`.

pub mod policy;

use numwords_core::WordClass;
use numwords_core::character::{leading_noise_len, trailing_noise_len};
use numwords_core::token::Region;

use crate::grammar::{Grammar, Terminal, Word};
pub use policy::{Decision, Gap, decide};

/// Finds number regions in lexed text.
#[derive(Debug, Clone, Copy)]
pub struct RegionFinder<'g> {
    grammar: &'g Grammar,
}

impl<'g> RegionFinder<'g> {
    pub fn new(grammar: &'g Grammar) -> Self {
        Self { grammar }
    }

    /// The grammar whose vocabulary defines number words.
    pub fn grammar(&self) -> &'g Grammar {
        self.grammar
    }

    /// Find the regions of `text`, given its words as produced by
    /// `Grammar::lex`. Regions come back ordered and non-overlapping, with
    /// byte offsets into `text`.
    pub fn find(&self, text: &str, words: &[Word]) -> Vec<Region> {
        let mut regions = Vec::new();
        let mut current: Vec<(&Word, Terminal)> = Vec::new();
        let mut point_reached = false;
        let mut interrupted = false;

        for word in words {
            let Some(next) = word.terminal else {
                interrupted = true;
                continue;
            };

            let decision = match current.last() {
                None => Decision::Split,
                Some(&(prev_word, prev)) => {
                    let gap = if interrupted {
                        Gap::Interrupted
                    } else if word.first == prev_word.last + 1 {
                        Gap::Adjacent
                    } else {
                        Gap::Spaced
                    };
                    let decision = decide(prev, next, gap, point_reached);
                    tracing::debug!(
                        prev = %prev_word.key,
                        next = %word.key,
                        ?gap,
                        point_reached,
                        ?decision,
                        "region decision"
                    );
                    decision
                }
            };
            interrupted = false;

            match decision {
                Decision::Merge => current.push((word, next)),
                Decision::MergePoint => {
                    current.push((word, next));
                    point_reached = true;
                }
                Decision::Split => {
                    regions.extend(close(text, &current));
                    current.clear();
                    current.push((word, next));
                    point_reached = next.class == WordClass::Point;
                }
            }
        }
        regions.extend(close(text, &current));

        regions
    }
}

/// Finalize the words of a closed region.
///
/// Trailing connectors and separators and leading connectors are dropped,
/// and the span excludes punctuation at its edges. Returns `None` when no
/// value-bearing word remains.
fn close(text: &str, words: &[(&Word, Terminal)]) -> Option<Region> {
    let end = words
        .iter()
        .rposition(|(_, t)| t.class.has_value())?
        + 1;
    let start = words[..end]
        .iter()
        .position(|(_, t)| t.class != WordClass::Connector)?;
    let words = &words[start..end];

    let (first, _) = words.first()?;
    let (last, _) = words.last()?;
    let leading = text.get(first.start..first.end).map_or(0, leading_noise_len);
    let trailing = text.get(last.start..last.end).map_or(0, trailing_noise_len);

    let region = Region {
        text: words
            .iter()
            .map(|(w, _)| w.key.as_str())
            .collect::<Vec<_>>()
            .join(" "),
        start: first.start + leading,
        end: last.end - trailing,
        point_reached: words.iter().any(|(_, t)| t.class == WordClass::Point),
    };
    tracing::debug!(text = %region.text, start = region.start, end = region.end, "region");
    Some(region)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;
    use crate::tokenizer::tokenize;

    fn regions(text: &str) -> Vec<Region> {
        let grammar = Grammar::compile(&Lexicon::all()).unwrap();
        let words = grammar.lex(&tokenize(text));
        RegionFinder::new(&grammar).find(text, &words)
    }

    fn region_texts(text: &str) -> Vec<String> {
        regions(text).into_iter().map(|r| r.text).collect()
    }

    #[test]
    fn single_region() {
        let found = regions("six million cinq mille deux");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text, "six million cinq mille deux");
        assert_eq!((found[0].start, found[0].end), (0, 27));
        assert!(!found[0].point_reached);
    }

    #[test]
    fn embedded_regions_with_offsets() {
        let text = "il y avait vingt-mille, cinq-cent soixante-neuf X dans les cinq trillion Y";
        let found = regions(text);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].text, "vingt mille cinq cent soixante neuf");
        assert_eq!(found[0].source(text), Some("vingt-mille, cinq-cent soixante-neuf"));
        assert_eq!(found[1].source(text), Some("cinq trillion"));
    }

    #[test]
    fn adjacent_units_split() {
        assert_eq!(region_texts("un deux trois"), ["un", "deux", "trois"]);
        assert_eq!(region_texts("un trente"), ["un", "trente"]);
    }

    #[test]
    fn descending_magnitudes_merge() {
        assert_eq!(region_texts("mille cent onze"), ["mille cent onze"]);
        assert_eq!(region_texts("cent mille"), ["cent", "mille"]);
    }

    #[test]
    fn connector_bridges_and_is_trimmed() {
        assert_eq!(
            region_texts("cent et quatre vingt dix neuf"),
            ["cent et quatre-vingt-dix neuf"]
        );
        assert_eq!(region_texts("et cent et"), ["cent"]);
        assert!(regions("et").is_empty());
    }

    #[test]
    fn decimal_region() {
        let found = regions("quarante deux point cinq");
        assert_eq!(found.len(), 1);
        assert!(found[0].point_reached);
        assert_eq!(found[0].text, "quarante deux point cinq");
    }

    #[test]
    fn units_after_point_stay_together() {
        assert_eq!(
            region_texts("trois point un quatre un cinq"),
            ["trois point un quatre un cinq"]
        );
    }

    #[test]
    fn point_joins_across_blank_tokens() {
        let found = regions("cinq  point deux");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text, "cinq point deux");
        assert!(found[0].point_reached);
        assert_eq!((found[0].start, found[0].end), (0, 16));

        assert_eq!(region_texts("cinq xyz point deux"), ["cinq", "point deux"]);
    }

    #[test]
    fn trailing_point_is_trimmed() {
        let found = regions("dix point");
        assert_eq!(found[0].text, "dix");
        assert!(!found[0].point_reached);
        assert_eq!(found[0].end, 3);
    }

    #[test]
    fn edge_punctuation_is_excluded() {
        let text = "(cent).";
        let found = regions(text);
        assert_eq!(found[0].source(text), Some("cent"));
    }

    #[test]
    fn non_number_words_split() {
        assert_eq!(region_texts("vingt ans cinq"), ["vingt", "cinq"]);
        assert!(regions("junkvalue").is_empty());
        assert!(regions("").is_empty());
    }

    #[test]
    fn double_space_splits() {
        assert_eq!(region_texts("vingt  cinq"), ["vingt", "cinq"]);
    }
}
