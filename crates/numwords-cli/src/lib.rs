// numwords-cli: shared utilities for CLI tools.

use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use numwords::{Converter, Lexicon};
use tracing_subscriber::EnvFilter;

/// Lexicon selection shared by every tool.
///
/// Lookup order:
/// 1. `--lexicon FILE` (JSON)
/// 2. `NUMWORDS_LEXICON` environment variable
/// 3. built-in lexicon for `--lang`
#[derive(Debug, Clone, Args)]
pub struct LexiconArgs {
    /// Built-in language: en, fr or all
    #[arg(short, long, default_value = "all")]
    pub lang: String,

    /// Custom lexicon file (JSON)
    #[arg(long, env = "NUMWORDS_LEXICON")]
    pub lexicon: Option<PathBuf>,
}

impl LexiconArgs {
    /// Load the selected lexicon.
    pub fn load(&self) -> Result<Lexicon> {
        match &self.lexicon {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                Lexicon::from_json(&json)
                    .with_context(|| format!("invalid lexicon {}", path.display()))
            }
            None => Lexicon::builtin(&self.lang)
                .with_context(|| format!("no built-in lexicon for {:?}", self.lang)),
        }
    }

    /// Compile the selected lexicon into a converter.
    pub fn converter(&self) -> Result<Converter> {
        let lexicon = self.load()?;
        tracing::debug!(language = %lexicon.language, "loaded lexicon");
        Converter::from_lexicon(&lexicon).context("lexicon does not compile")
    }
}

/// Initialize logging on stderr. `RUST_LOG` wins over `-v`.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Run `f` on each argument, or on each non-empty stdin line when there are
/// no arguments.
pub fn for_each_input(args: &[String], mut f: impl FnMut(&str) -> Result<()>) -> Result<()> {
    if !args.is_empty() {
        for arg in args {
            f(arg)?;
        }
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("error reading stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        f(&line)?;
    }
    Ok(())
}
