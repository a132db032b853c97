//! sift command line
//!
//! Cleans a document and prints a per-stage summary.
//!
//! ```bash
//! # Full pipeline with lemmatization
//! sift notes.txt
//!
//! # Stemming, reading from stdin
//! cat notes.txt | sift - --method stemming
//!
//! # Clean each line on its own
//! sift notes.txt --lines
//!
//! # Stop after token filtering, with a custom stopword list
//! sift notes.txt --no-normalize --stopwords german.txt
//! ```

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use sift_core::report::fmt_count;
use sift_core::{
    validate_text, LineTable, NormalizationMethod, Pipeline, Report, RunOptions, StageLabel,
    StopwordSet, DEFAULT_MIN_TEXT_LENGTH,
};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "sift")]
#[command(version)]
#[command(about = "Staged text cleaning with per-stage statistics", long_about = None)]
struct Cli {
    /// Input file, or `-` for stdin
    input: PathBuf,

    /// Normalization method
    #[arg(short, long, value_enum, default_value_t = Method::Lemmatization)]
    method: Method,

    /// Stop after token filtering
    #[arg(long)]
    no_normalize: bool,

    /// Clean each line independently and print one summary line per row
    #[arg(short, long)]
    lines: bool,

    /// Minimum trimmed input length, in characters
    #[arg(long, default_value_t = DEFAULT_MIN_TEXT_LENGTH)]
    min_length: usize,

    /// Newline-separated stopword list replacing the built-in English one
    #[arg(short, long)]
    stopwords: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Command-line spelling of [`NormalizationMethod`], with short aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Method {
    #[value(alias = "lemma")]
    Lemmatization,
    #[value(alias = "stem")]
    Stemming,
}

impl From<Method> for NormalizationMethod {
    fn from(method: Method) -> Self {
        match method {
            Method::Lemmatization => NormalizationMethod::Lemmatization,
            Method::Stemming => NormalizationMethod::Stemming,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(if cli.verbose { "debug" } else { "warn" });

    let options = RunOptions {
        normalize: (!cli.no_normalize).then(|| cli.method.into()),
    };

    let stopwords = match &cli.stopwords {
        Some(path) => StopwordSet::load(path)
            .with_context(|| format!("failed to load stopwords from {}", path.display()))?,
        None => StopwordSet::english(),
    };
    info!(stopwords = stopwords.len(), "stopwords ready");

    let text = read_input(&cli.input)?;
    validate_text(&text, cli.min_length)?;

    let pipeline = Pipeline::new(stopwords);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.lines {
        let table = LineTable::from_raw(&text);
        info!(rows = table.len(), words = table.total_words(), "line table built");

        for (i, row) in table.iter().enumerate() {
            let history = pipeline.run(&row.text, options);
            let tokens = history
                .final_tokens()
                .and_then(|r| r.as_tokens())
                .unwrap_or_default();
            let intermediate = history
                .get(StageLabel::Intermediate)
                .map_or(0, |r| r.length);
            writeln!(
                out,
                "{:>6}  {:>8} -> {:>8} chars  {:>5} tokens  {}",
                i + 1,
                fmt_count(row.length),
                fmt_count(intermediate),
                fmt_count(tokens.len()),
                tokens.join(" "),
            )?;
        }
    } else {
        let history = pipeline.run(&text, options);
        write!(out, "{}", Report::new(&history))?;
    }

    out.flush()?;
    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(text);
    }

    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn setup_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}
