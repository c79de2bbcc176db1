// numwords-correct: Fuzzy-match words against the number vocabulary.
//
// Prints each word with its nearest number word and Jaro similarity.
//
// Usage:
//   numwords-correct [--lang LANG] [--lexicon FILE] [WORD...]

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use numwords::fuzzy::FuzzyMatcher;
use numwords_cli::LexiconArgs;

#[derive(Parser)]
#[command(name = "numwords-correct")]
#[command(version)]
#[command(about = "Find the nearest number word for each word", long_about = None)]
struct Cli {
    #[command(flatten)]
    lexicon: LexiconArgs,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Words to correct (reads stdin when empty, one word per line)
    words: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    numwords_cli::init_logging(cli.verbose);

    let converter = cli.lexicon.converter()?;
    let matcher = FuzzyMatcher::new(converter.grammar().vocabulary());

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    numwords_cli::for_each_input(&cli.words, |word| {
        let word = word.trim();
        let key = numwords::lookup_key(word);
        match matcher.best_match(&key) {
            Some(m) => writeln!(out, "{word}\t{}\t{:.3}", m.word, m.score)?,
            None => writeln!(out, "{word}\t(empty vocabulary)")?,
        }
        Ok(())
    })?;
    out.flush()?;
    Ok(())
}
