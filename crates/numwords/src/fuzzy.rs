// Fuzzy matching of misspelled words against the number vocabulary
//
// Scores are Jaro similarities in [0, 1]. The matcher always answers when
// the vocabulary is non-empty, even for words that look nothing like a
// number: fuzzy mode trades precision for recall.

/// A vocabulary word and its similarity to the query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyMatch<'v> {
    pub word: &'v str,
    pub score: f64,
}

/// Nearest-word lookup over a fixed vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct FuzzyMatcher<'v> {
    vocabulary: &'v [String],
}

impl<'v> FuzzyMatcher<'v> {
    /// Create a matcher over `vocabulary`. Ties go to the word listed first.
    pub fn new(vocabulary: &'v [String]) -> Self {
        Self { vocabulary }
    }

    /// Find the best-scoring vocabulary word for `word`.
    ///
    /// Returns `None` only for an empty vocabulary.
    pub fn best_match(&self, word: &str) -> Option<FuzzyMatch<'v>> {
        let mut best: Option<FuzzyMatch<'v>> = None;
        for candidate in self.vocabulary {
            let score = strsim::jaro(candidate, word);
            if best.is_none_or(|b| score > b.score) {
                best = Some(FuzzyMatch {
                    word: candidate,
                    score,
                });
                // nothing scores above an exact match
                if score >= 1.0 {
                    break;
                }
            }
        }
        best
    }

    /// The vocabulary word closest to `word`.
    pub fn correct(&self, word: &str) -> Option<&'v str> {
        self.best_match(word).map(|m| m.word)
    }
}
