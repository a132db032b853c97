//! Staged text cleaning with per-stage statistics.
//!
//! A [`Pipeline`] turns raw text into a filtered, normalized token list and
//! records what each stage removed in a [`TransformationHistory`]. The
//! [`Report`] renders that history for people.

pub mod analyzer;
pub mod corpus;
pub mod pipeline;
pub mod report;
pub mod stopwords;
pub mod validate;

pub use corpus::{LineRow, LineTable};
pub use pipeline::{Pipeline, PipelineConfig, RunOptions};
pub use report::Report;
pub use stopwords::StopwordSet;
pub use validate::{validate_text, DEFAULT_MIN_TEXT_LENGTH};

pub use sift_types::{
    reduction_percent, ratio_percent, unique_count, word_count, CleanError,
    NormalizationMethod, Result, StageLabel, StagePayload, StageRecord, TokenMetrics,
    TransformationHistory,
};
