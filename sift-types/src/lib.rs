//! Core types for the sift text cleaning pipeline.
//!
//! This crate holds the data that crosses the boundary between the cleaning
//! engine and its consumers. Keeping it separate ensures:
//!
//! - **Stable records**: reports and callers depend on these types, not on the engine
//! - **Cheap inspection**: every stage payload and metric is a plain field
//! - **Clean boundaries**: no dependency on regex, stemmers or stopword data

#![warn(missing_docs)]

use core::fmt;
use core::str::FromStr;

use rustc_hash::FxHashSet;
use thiserror::Error;

/// Result alias used throughout sift.
pub type Result<T> = core::result::Result<T, CleanError>;

/// Errors produced by the cleaning pipeline and its resources.
#[derive(Debug, Error)]
pub enum CleanError {
    /// The morphological normalization selector was not recognized.
    #[error("invalid normalization method '{0}': expected 'lemmatization' or 'stemming'")]
    InvalidMethod(String),

    /// No stopword list is bundled for the requested language.
    #[error("no stopword list available for language '{0}'")]
    UnsupportedLanguage(String),

    /// Input text was empty.
    #[error("text must not be empty")]
    EmptyInput,

    /// Input text was shorter than the configured minimum.
    #[error("text too short: {length} characters (min: {min_length})")]
    TooShort {
        /// Trimmed length of the text, in characters.
        length: usize,
        /// The minimum required length, in characters.
        min_length: usize,
    },

    /// A generic contraction form was placed before a specific form containing it.
    #[error("contraction '{later}' must come before the more generic '{earlier}'")]
    ContractionOrder {
        /// The generic surface form that appeared first.
        earlier: String,
        /// The specific surface form it would partially consume.
        later: String,
    },

    /// The same contraction surface form was listed twice.
    #[error("duplicate contraction surface form '{0}'")]
    DuplicateContraction(String),

    /// Reading an external lexical resource failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Identifies one stage of a pipeline run.
///
/// Variants are declared in execution order, so `Ord` follows the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum StageLabel {
    /// The raw input, untouched.
    Original = 0,
    /// Output of the basic cleaner.
    Basic = 1,
    /// Output of the intermediate cleaner.
    Intermediate = 2,
    /// Tokens retained by the token filter.
    FilteredTokens = 3,
    /// Tokens after morphological normalization.
    NormalizedTokens = 4,
}

impl StageLabel {
    /// All stages in execution order.
    pub const ALL: [StageLabel; 5] = [
        StageLabel::Original,
        StageLabel::Basic,
        StageLabel::Intermediate,
        StageLabel::FilteredTokens,
        StageLabel::NormalizedTokens,
    ];

    /// Stable key used when the history is viewed as a mapping.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            StageLabel::Original => "original",
            StageLabel::Basic => "basic",
            StageLabel::Intermediate => "intermediate",
            StageLabel::FilteredTokens => "filtered-tokens",
            StageLabel::NormalizedTokens => "normalized-tokens",
        }
    }

    /// Whether this stage carries a token list rather than text.
    #[must_use]
    pub const fn is_token_stage(self) -> bool {
        matches!(
            self,
            StageLabel::FilteredTokens | StageLabel::NormalizedTokens
        )
    }
}

impl fmt::Display for StageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Morphological reduction strategy for the final stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NormalizationMethod {
    /// Reduce tokens to a dictionary base form.
    #[default]
    Lemmatization,
    /// Truncate tokens to an approximate root.
    Stemming,
}

impl NormalizationMethod {
    /// Canonical name of the method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            NormalizationMethod::Lemmatization => "lemmatization",
            NormalizationMethod::Stemming => "stemming",
        }
    }
}

impl fmt::Display for NormalizationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NormalizationMethod {
    type Err = CleanError;

    /// Parses a method name.
    ///
    /// Only the exact names `lemmatization` and `stemming` are accepted.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "lemmatization" => Ok(NormalizationMethod::Lemmatization),
            "stemming" => Ok(NormalizationMethod::Stemming),
            _ => Err(CleanError::InvalidMethod(s.to_string())),
        }
    }
}

/// The output a stage produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StagePayload {
    /// Text stages: original, basic, intermediate.
    Text(String),
    /// Token stages: filtered and normalized tokens.
    Tokens(Vec<String>),
}

impl StagePayload {
    /// Returns the text, if this is a text payload.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            StagePayload::Text(text) => Some(text),
            StagePayload::Tokens(_) => None,
        }
    }

    /// Returns the tokens, if this is a token payload.
    pub fn as_tokens(&self) -> Option<&[String]> {
        match self {
            StagePayload::Text(_) => None,
            StagePayload::Tokens(tokens) => Some(tokens),
        }
    }
}

/// Output and statistics of one stage.
///
/// For text stages `length` is the character count and `secondary` the word
/// count. For token stages `length` is the token count and `secondary` the
/// number of distinct tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageRecord {
    /// Which stage produced this record.
    pub label: StageLabel,
    /// The stage output, retained for inspection.
    pub payload: StagePayload,
    /// Character count (text) or token count (tokens).
    pub length: usize,
    /// Word count (text) or unique-token count (tokens).
    pub secondary: usize,
    /// Normalization method, set only on the normalized stage.
    pub method: Option<NormalizationMethod>,
}

impl StageRecord {
    /// Builds a record for a text stage.
    pub fn text(label: StageLabel, text: String) -> Self {
        let length = text.chars().count();
        let secondary = word_count(&text);
        Self {
            label,
            payload: StagePayload::Text(text),
            length,
            secondary,
            method: None,
        }
    }

    /// Builds a record for a token stage.
    pub fn tokens(label: StageLabel, tokens: Vec<String>) -> Self {
        let length = tokens.len();
        let secondary = unique_count(&tokens);
        Self {
            label,
            payload: StagePayload::Tokens(tokens),
            length,
            secondary,
            method: None,
        }
    }

    /// Attaches the normalization method that produced the tokens.
    #[must_use]
    pub fn with_method(mut self, method: NormalizationMethod) -> Self {
        self.method = Some(method);
        self
    }

    /// The stage text, for text stages.
    pub fn as_text(&self) -> Option<&str> {
        self.payload.as_text()
    }

    /// The stage tokens, for token stages.
    pub fn as_tokens(&self) -> Option<&[String]> {
        self.payload.as_tokens()
    }

    /// Word count, for text stages.
    pub fn word_count(&self) -> Option<usize> {
        self.as_text().map(|_| self.secondary)
    }

    /// Distinct token count, for token stages.
    pub fn unique_count(&self) -> Option<usize> {
        self.as_tokens().map(|_| self.secondary)
    }

    /// Token metrics, for token stages.
    pub fn metrics(&self) -> Option<TokenMetrics> {
        self.as_tokens().map(TokenMetrics::from_tokens)
    }
}

/// Ordered record of every stage output for one pipeline run.
///
/// Behaves as an insertion-ordered mapping from [`StageLabel`] to
/// [`StageRecord`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformationHistory {
    records: Vec<StageRecord>,
}

impl TransformationHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, replacing any earlier record with the same label
    /// in place.
    pub fn insert(&mut self, record: StageRecord) {
        match self.records.iter_mut().find(|r| r.label == record.label) {
            Some(slot) => *slot = record,
            None => self.records.push(record),
        }
    }

    /// Looks up a stage record.
    pub fn get(&self, label: StageLabel) -> Option<&StageRecord> {
        self.records.iter().find(|r| r.label == label)
    }

    /// Whether the stage ran.
    pub fn contains(&self, label: StageLabel) -> bool {
        self.get(label).is_some()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &StageRecord> {
        self.records.iter()
    }

    /// Labels in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = StageLabel> + '_ {
        self.records.iter().map(|r| r.label)
    }

    /// Number of recorded stages.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no stage was recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The most advanced token stage present (normalized, else filtered).
    pub fn final_tokens(&self) -> Option<&StageRecord> {
        self.get(StageLabel::NormalizedTokens)
            .or_else(|| self.get(StageLabel::FilteredTokens))
    }
}

impl<'a> IntoIterator for &'a TransformationHistory {
    type Item = &'a StageRecord;
    type IntoIter = core::slice::Iter<'a, StageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Summary metrics over a token list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenMetrics {
    /// Number of tokens.
    pub total: usize,
    /// Number of distinct tokens.
    pub unique: usize,
    /// `unique / total`, or 0 for an empty list.
    pub lexical_richness: f64,
    /// Mean token length in characters, or 0 for an empty list.
    pub average_length: f64,
}

impl TokenMetrics {
    /// Computes metrics over `tokens`.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        if tokens.is_empty() {
            return Self {
                total: 0,
                unique: 0,
                lexical_richness: 0.0,
                average_length: 0.0,
            };
        }

        let total = tokens.len();
        let unique = unique_count(tokens);
        let chars: usize = tokens.iter().map(|t| t.as_ref().chars().count()).sum();

        Self {
            total,
            unique,
            lexical_richness: unique as f64 / total as f64,
            average_length: chars as f64 / total as f64,
        }
    }
}

/// Number of whitespace-separated words.
#[inline]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Number of distinct tokens.
pub fn unique_count<S: AsRef<str>>(tokens: &[S]) -> usize {
    tokens
        .iter()
        .map(AsRef::as_ref)
        .collect::<FxHashSet<&str>>()
        .len()
}

/// Percentage drop from `previous` to `current`.
///
/// Negative when the metric grew. A zero `previous` yields 0 rather than a
/// division error.
#[inline]
pub fn reduction_percent(previous: usize, current: usize) -> f64 {
    if previous == 0 {
        return 0.0;
    }
    (previous as f64 - current as f64) / previous as f64 * 100.0
}

/// `part / whole` as a percentage, or 0 when `whole` is zero.
#[inline]
pub fn ratio_percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}
