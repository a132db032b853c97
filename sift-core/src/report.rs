//! Human-readable summary of a pipeline run.

use core::fmt;

use sift_types::{
    reduction_percent, StageLabel, StageRecord, TokenMetrics, TransformationHistory,
};

/// Number of tokens shown in the sample section.
pub const SAMPLE_TOKENS: usize = 20;

const RULE_WIDTH: usize = 60;

/// Renders a [`TransformationHistory`] as a sectioned text report.
///
/// Sections appear only for stages present in the history. Reductions are
/// `(previous - current) / previous * 100`, shown with one decimal; a zero
/// denominator shows `0.0`. Token sections also show lexical diversity and
/// mean token length.
///
/// # Examples
///
/// ```
/// use sift_core::{Pipeline, Report, RunOptions};
///
/// let history = Pipeline::english().run("Cats and dogs!", RunOptions::lemmatize());
/// let text = Report::new(&history).to_string();
/// assert!(text.contains("MORPHOLOGICAL NORMALIZATION (LEMMATIZATION)"));
/// assert!(text.contains("cat dog"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    history: &'a TransformationHistory,
}

impl<'a> Report<'a> {
    /// Creates a report over `history`.
    pub fn new(history: &'a TransformationHistory) -> Self {
        Self { history }
    }

    /// Renders the report to a string.
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn stage(&self, label: StageLabel) -> Option<&'a StageRecord> {
        self.history.get(label)
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(f, "{rule}")?;
        writeln!(f, "TEXT CLEANING SUMMARY")?;
        writeln!(f, "{rule}")?;

        let original = self.stage(StageLabel::Original);
        let basic = self.stage(StageLabel::Basic);
        let filtered = self.stage(StageLabel::FilteredTokens);

        if let Some(original) = original {
            section(f, "ORIGINAL TEXT")?;
            text_metrics(f, original)?;
        }

        if let Some(basic) = basic {
            section(f, "BASIC CLEANING")?;
            text_metrics(f, basic)?;
            if let Some(original) = original {
                writeln!(
                    f,
                    "  Reduction   : {} chars, {} words",
                    percent(reduction_percent(original.length, basic.length)),
                    percent(reduction_percent(original.secondary, basic.secondary)),
                )?;
            }
        }

        if let Some(intermediate) = self.stage(StageLabel::Intermediate) {
            section(f, "INTERMEDIATE CLEANING")?;
            text_metrics(f, intermediate)?;
            if let Some(basic) = basic {
                writeln!(
                    f,
                    "  Reduction   : {} words",
                    percent(reduction_percent(basic.secondary, intermediate.secondary)),
                )?;
            }
        }

        if let Some(filtered) = filtered {
            section(f, "TOKENIZATION AND FILTERING")?;
            token_metrics(f, filtered)?;
        }

        if let Some(normalized) = self.stage(StageLabel::NormalizedTokens) {
            let method = normalized
                .method
                .map(|m| m.as_str().to_ascii_uppercase())
                .unwrap_or_else(|| "UNKNOWN".to_string());
            section(f, &format!("MORPHOLOGICAL NORMALIZATION ({method})"))?;
            token_metrics(f, normalized)?;
            if let Some(filtered) = filtered {
                writeln!(
                    f,
                    "  Vocabulary  : {} reduction",
                    percent(reduction_percent(filtered.secondary, normalized.secondary)),
                )?;
            }
        }

        if let Some(tokens) = self.history.final_tokens().and_then(StageRecord::as_tokens) {
            section(f, "PROCESSED TEXT SAMPLE")?;
            let shown = tokens.len().min(SAMPLE_TOKENS);
            write!(f, "  {}", tokens[..shown].join(" "))?;
            if tokens.len() > SAMPLE_TOKENS {
                f.write_str(" ...")?;
            }
            writeln!(f)?;
        }

        writeln!(f, "{rule}")
    }
}

fn section(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{title}")
}

fn text_metrics(f: &mut fmt::Formatter<'_>, record: &StageRecord) -> fmt::Result {
    writeln!(f, "  Length      : {} chars", fmt_count(record.length))?;
    writeln!(f, "  Words       : {}", fmt_count(record.secondary))
}

fn token_metrics(f: &mut fmt::Formatter<'_>, record: &StageRecord) -> fmt::Result {
    let metrics = record
        .metrics()
        .unwrap_or_else(|| TokenMetrics::from_tokens::<&str>(&[]));
    writeln!(f, "  Tokens      : {}", fmt_count(metrics.total))?;
    writeln!(f, "  Unique      : {}", fmt_count(metrics.unique))?;
    writeln!(
        f,
        "  Diversity   : {}",
        percent(metrics.lexical_richness * 100.0)
    )?;
    writeln!(f, "  Avg length  : {:.1} chars", metrics.average_length)
}

fn percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Formats an integer with `,` thousands separators.
pub fn fmt_count(n: usize) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);

    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}
