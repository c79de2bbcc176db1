// numwords-regions: Show the number regions found in text.
//
// For each input, prints one line per region:
//
//   START..END <TAB> normalized words <TAB> value or "unchanged"
//
// Usage:
//   numwords-regions [--lang LANG] [--lexicon FILE] [--fuzzy] [--json] [TEXT...]

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use numwords::ConvertOptions;
use numwords::rewrite::Resolution;
use numwords_cli::LexiconArgs;

#[derive(Parser)]
#[command(name = "numwords-regions")]
#[command(version)]
#[command(about = "List the number phrases found in text", long_about = None)]
struct Cli {
    #[command(flatten)]
    lexicon: LexiconArgs,

    /// Correct misspelled words to the nearest number word
    #[arg(short, long)]
    fuzzy: bool,

    /// Print regions as JSON arrays
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Texts to scan (reads stdin when empty)
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
        let regions = converter.regions(text, &options);
        if cli.json {
            writeln!(out, "{}", serde_json::to_string(&regions)?)?;
            return Ok(());
        }

        writeln!(out, "{text}:")?;
        if regions.is_empty() {
            writeln!(out, "  (no regions)")?;
        }
        for region in &regions {
            let value = match converter.evaluate(region) {
                Resolution::Value(number) => number.to_string(),
                Resolution::Unchanged => "unchanged".to_string(),
            };
            writeln!(
                out,
                "  {}..{}\t{}\t{}",
                region.start, region.end, region.text, value
            )?;
        }
        Ok(())
    })?;
    out.flush()?;
    Ok(())
}
