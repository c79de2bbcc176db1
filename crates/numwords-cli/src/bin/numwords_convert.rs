// numwords-convert: Replace number words with numerals.
//
// Converts each TEXT argument, or each stdin line when none is given, and
// prints one result per line.
//
// Usage:
//   numwords-convert [--lang LANG] [--lexicon FILE] [--fuzzy] [--json] [TEXT...]

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use numwords::ConvertOptions;
use numwords_cli::LexiconArgs;

#[derive(Parser)]
#[command(name = "numwords-convert")]
#[command(version)]
#[command(about = "Replace number words in text with numerals", long_about = None)]
struct Cli {
    #[command(flatten)]
    lexicon: LexiconArgs,

    /// Correct misspelled words to the nearest number word
    #[arg(short, long)]
    fuzzy: bool,

    /// Print results as JSON (numbers as numbers, text as strings)
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Texts to convert (reads stdin when empty)
    text: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    numwords_cli::init_logging(cli.verbose);

    let converter = cli.lexicon.converter()?;
    let options = ConvertOptions { fuzzy: cli.fuzzy };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    numwords_cli::for_each_input(&cli.text, |text| {
        let result = converter.convert(text, &options);
        if cli.json {
            writeln!(out, "{}", serde_json::to_string(&result)?)?;
        } else {
            writeln!(out, "{result}")?;
        }
        Ok(())
    })?;
    out.flush()?;
    Ok(())
}
