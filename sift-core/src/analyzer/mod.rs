//! Text cleaning stages.
//!
//! This module provides the components the pipeline runs, in order:
//! - **BasicCleaner**: lowercases and strips links, emails, mentions, hashtags
//! - **IntermediateCleaner**: expands contractions and removes stray punctuation
//! - **TokenFilter**: tokenizes and keeps alphabetic content words
//! - **MorphologicalNormalizer**: lemmatizes or stems the kept tokens
//!
//! The regular expressions behind the cleaners live in [`patterns`].

pub mod basic;
pub mod contractions;
pub mod filter;
pub mod intermediate;
pub mod morphology;
pub mod patterns;
pub mod tokenizer;

pub use basic::BasicCleaner;
pub use contractions::{ContractionRule, ContractionTable};
pub use filter::TokenFilter;
pub use intermediate::IntermediateCleaner;
pub use morphology::{Lemmatizer, MorphologicalNormalizer, Reducer, Stemmer};
pub use patterns::{CleaningPattern, PatternId, PatternLibrary};
pub use tokenizer::WordTokenizer;
