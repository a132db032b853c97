//! Stage 2: contraction expansion and punctuation cleanup.

use sift_types::StageLabel;

use crate::analyzer::contractions::ContractionTable;
use crate::analyzer::patterns::{rewrite, PatternId, PatternLibrary};

/// Second-stage cleaner.
///
/// Expects the output of [`BasicCleaner`](crate::analyzer::BasicCleaner)
/// and applies, in order:
/// 1. the contraction table, rule by rule
/// 2. removal of runs of two or more non-word, non-space characters
/// 3. replacement of any character outside words, whitespace and
///    `-'.,!?;:` with a space
/// 4. whitespace collapse and trim
///
/// Contractions are expanded before punctuation cleanup so the apostrophes
/// they depend on are still present.
#[derive(Debug, Clone)]
pub struct IntermediateCleaner {
    contractions: ContractionTable,
    patterns: &'static PatternLibrary,
}

impl Default for IntermediateCleaner {
    fn default() -> Self {
        Self::new(ContractionTable::english())
    }
}

impl IntermediateCleaner {
    /// Stage this cleaner produces.
    pub const STAGE: StageLabel = StageLabel::Intermediate;

    /// Creates a cleaner with the given contraction table.
    pub fn new(contractions: ContractionTable) -> Self {
        Self {
            contractions,
            patterns: PatternLibrary::shared(),
        }
    }

    /// The contraction table in use.
    pub fn contractions(&self) -> &ContractionTable {
        &self.contractions
    }

    /// Cleans text into an existing String buffer.
    pub fn clean_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.push_str(input);

        self.contractions.expand_in_place(out);
        rewrite(out, |s| self.patterns.strip(PatternId::RepeatedPunctuation, s));
        rewrite(out, |s| {
            self.patterns
                .replace(PatternId::DisallowedCharacter, s, " ")
        });
        self.patterns.collapse_whitespace(out);
    }

    /// Cleans text and returns a new String.
    #[inline]
    pub fn clean(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.clean_into(input, &mut out);
        out
    }
}
