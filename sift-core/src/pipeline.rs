//! The staged cleaning pipeline.
//!
//! [`Pipeline`] runs the four stages in fixed order and records every
//! intermediate output in a [`TransformationHistory`]:
//!
//! ```text
//! raw ──► basic ──► intermediate ──► filtered-tokens ──► normalized-tokens (optional)
//! ```
//!
//! Threading:
//! - A [`Pipeline`] holds only immutable configuration, so one instance can be
//!   shared across threads and reused across runs. Each run builds a fresh
//!   history owned by the caller.

use std::sync::Arc;

use sift_types::{
    NormalizationMethod, Result, StageLabel, StageRecord, TransformationHistory,
};
use tracing::{debug, debug_span};

use crate::analyzer::{
    BasicCleaner, ContractionTable, IntermediateCleaner, Lemmatizer, MorphologicalNormalizer,
    Reducer, Stemmer, TokenFilter,
};
use crate::stopwords::StopwordSet;

/// Per-run options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Method for the normalization stage, or `None` to stop after filtering.
    pub normalize: Option<NormalizationMethod>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self::lemmatize()
    }
}

impl RunOptions {
    /// Runs every stage, lemmatizing at the end.
    pub const fn lemmatize() -> Self {
        Self {
            normalize: Some(NormalizationMethod::Lemmatization),
        }
    }

    /// Runs every stage, stemming at the end.
    pub const fn stem() -> Self {
        Self {
            normalize: Some(NormalizationMethod::Stemming),
        }
    }

    /// Stops after token filtering.
    pub const fn filter_only() -> Self {
        Self { normalize: None }
    }

    /// Builds options from a flag and a method name.
    ///
    /// The name is only validated when normalization is requested.
    ///
    /// # Errors
    ///
    /// Returns `CleanError::InvalidMethod` if `apply_normalization` is set and
    /// `method` is not a recognized method.
    pub fn from_parts(apply_normalization: bool, method: &str) -> Result<Self> {
        if !apply_normalization {
            return Ok(Self::filter_only());
        }
        Ok(Self {
            normalize: Some(method.parse()?),
        })
    }
}

/// Construction-time configuration.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Stopword language; see [`StopwordSet::for_language`].
    pub language: String,
    /// Contraction table for the intermediate stage.
    pub contractions: ContractionTable,
    /// Options used by [`Pipeline::run_default`].
    pub defaults: RunOptions,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            language: "english".to_string(),
            contractions: ContractionTable::english(),
            defaults: RunOptions::default(),
        }
    }
}

/// Runs the cleaning stages and records their outputs.
///
/// # Examples
///
/// ```
/// use sift_core::{Pipeline, RunOptions, StageLabel};
///
/// let pipeline = Pipeline::english();
/// let history = pipeline.run("The cats aren't sleeping!!", RunOptions::lemmatize());
///
/// let tokens = history.get(StageLabel::NormalizedTokens).unwrap();
/// assert_eq!(tokens.as_tokens().unwrap(), ["cat", "sleeping"]);
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline {
    basic: BasicCleaner,
    intermediate: IntermediateCleaner,
    filter: TokenFilter,
    normalizer: MorphologicalNormalizer,
    defaults: RunOptions,
}

impl Pipeline {
    /// Creates a pipeline with the default reducers.
    pub fn new(stopwords: StopwordSet) -> Self {
        Self::with_reducers(
            stopwords,
            Arc::new(Lemmatizer::new()),
            Arc::new(Stemmer::english()),
        )
    }

    /// Creates an English pipeline with the built-in stopwords.
    pub fn english() -> Self {
        Self::new(StopwordSet::english())
    }

    /// Creates a pipeline with caller-supplied reducers.
    pub fn with_reducers(
        stopwords: StopwordSet,
        lemmatizer: Arc<dyn Reducer>,
        stemmer: Arc<dyn Reducer>,
    ) -> Self {
        Self {
            basic: BasicCleaner::new(),
            intermediate: IntermediateCleaner::default(),
            filter: TokenFilter::new(stopwords),
            normalizer: MorphologicalNormalizer::new(lemmatizer, stemmer),
            defaults: RunOptions::default(),
        }
    }

    /// Creates a pipeline from configuration.
    ///
    /// # Errors
    ///
    /// Returns `CleanError::UnsupportedLanguage` if no stopword list is bundled
    /// for `config.language`.
    pub fn from_config(config: PipelineConfig) -> Result<Self> {
        let stopwords = StopwordSet::for_language(&config.language)?;
        Ok(Self::new(stopwords)
            .with_contractions(config.contractions)
            .with_defaults(config.defaults))
    }

    /// Replaces the contraction table.
    #[must_use]
    pub fn with_contractions(mut self, contractions: ContractionTable) -> Self {
        self.intermediate = IntermediateCleaner::new(contractions);
        self
    }

    /// Replaces the options used by [`Pipeline::run_default`].
    #[must_use]
    pub fn with_defaults(mut self, defaults: RunOptions) -> Self {
        self.defaults = defaults;
        self
    }

    /// The stage-3 filter.
    pub fn filter(&self) -> &TokenFilter {
        &self.filter
    }

    /// The stage-4 normalizer.
    pub fn normalizer(&self) -> &MorphologicalNormalizer {
        &self.normalizer
    }

    /// Runs the pipeline over `text`.
    pub fn run(&self, text: &str, options: RunOptions) -> TransformationHistory {
        let _span = debug_span!("pipeline.run", chars = text.len()).entered();
        let mut history = TransformationHistory::new();

        record(&mut history, StageRecord::text(StageLabel::Original, text.to_owned()));

        let basic = self.basic.clean(text);
        let intermediate = self.intermediate.clean(&basic);
        record(&mut history, StageRecord::text(StageLabel::Basic, basic));

        let tokens = self.filter.filter(&intermediate);
        record(
            &mut history,
            StageRecord::text(StageLabel::Intermediate, intermediate),
        );

        if let Some(method) = options.normalize {
            let normalized = self.normalizer.normalize(&tokens, method);
            record(
                &mut history,
                StageRecord::tokens(StageLabel::FilteredTokens, tokens),
            );
            record(
                &mut history,
                StageRecord::tokens(StageLabel::NormalizedTokens, normalized).with_method(method),
            );
        } else {
            record(
                &mut history,
                StageRecord::tokens(StageLabel::FilteredTokens, tokens),
            );
        }

        history
    }

    /// Runs the pipeline with the configured default options.
    pub fn run_default(&self, text: &str) -> TransformationHistory {
        self.run(text, self.defaults)
    }

    /// Runs the pipeline with a method given by name.
    ///
    /// # Errors
    ///
    /// Returns `CleanError::InvalidMethod` if `apply_normalization` is set and
    /// `method` is neither `lemmatization` nor `stemming`. The name is checked
    /// before any stage runs, so no partial history is produced.
    pub fn run_named(
        &self,
        text: &str,
        apply_normalization: bool,
        method: &str,
    ) -> Result<TransformationHistory> {
        let options = RunOptions::from_parts(apply_normalization, method)?;
        Ok(self.run(text, options))
    }
}

fn record(history: &mut TransformationHistory, record: StageRecord) {
    debug!(
        stage = %record.label,
        length = record.length,
        secondary = record.secondary,
        method = record.method.map(NormalizationMethod::as_str),
        "stage complete"
    );
    history.insert(record);
}
