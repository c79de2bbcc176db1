// Lexer: tokens to classified words
//
// A word is one token, or a run of consecutive tokens whose keys joined by
// `-` form a compound in the vocabulary ("quatre" "vingt" "dix" becomes
// "quatre-vingt-dix"). The longest compound wins.

use numwords_core::character::{leading_noise_len, trailing_noise_len};
use numwords_core::token::Token;

use super::{Grammar, Terminal};

/// A classified word with its span in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    /// Normalized word (lexicon key for number words).
    pub key: String,
    /// Vocabulary entry, `None` for words outside the vocabulary.
    pub terminal: Option<Terminal>,
    /// Byte offset of the first token's start.
    pub start: usize,
    /// Byte offset of the last token's end.
    pub end: usize,
    /// Index of the first token.
    pub first: usize,
    /// Index of the last token.
    pub last: usize,
}

impl Word {
    /// Returns `true` if the word is in the vocabulary.
    pub fn is_number_word(&self) -> bool {
        self.terminal.is_some()
    }
}

impl Grammar {
    /// Classify `tokens` into words. Blank tokens produce no word.
    pub fn lex(&self, tokens: &[Token]) -> Vec<Word> {
        let mut words = Vec::with_capacity(tokens.len());
        let mut i = 0;

        while i < tokens.len() {
            let token = &tokens[i];
            if token.is_blank() {
                i += 1;
                continue;
            }

            let word = self.compound_at(tokens, i).unwrap_or_else(|| Word {
                key: token.key.clone(),
                terminal: self.terminal(&token.key),
                start: token.start,
                end: token.end,
                first: token.index,
                last: token.index,
            });
            i += word.last - word.first + 1;
            words.push(word);
        }

        words
    }

    /// The longest multi-token compound starting at `tokens[i]`, if any.
    fn compound_at(&self, tokens: &[Token], i: usize) -> Option<Word> {
        let longest = self.max_compound.min(tokens.len() - i);
        for n in (2..=longest).rev() {
            let run = &tokens[i..i + n];
            if !joinable(run) {
                continue;
            }
            let key = run
                .iter()
                .map(|t| t.key.as_str())
                .collect::<Vec<_>>()
                .join("-");
            match self.terminal(&key) {
                Some(terminal) if terminal.class.has_value() => {
                    return Some(Word {
                        key,
                        terminal: Some(terminal),
                        start: run[0].start,
                        end: run[n - 1].end,
                        first: run[0].index,
                        last: run[n - 1].index,
                    });
                }
                _ => {}
            }
        }
        None
    }
}

/// A run of tokens can form a compound when none is blank, indices are
/// consecutive and no punctuation sits between them.
fn joinable(run: &[Token]) -> bool {
    let last = run.len() - 1;
    run.iter().enumerate().all(|(k, token)| {
        !token.is_blank()
            && (k == 0 || token.index == run[k - 1].index + 1)
            && (k == 0 || leading_noise_len(&token.text) == 0)
            && (k == last || trailing_noise_len(&token.text) == 0)
    })
}
