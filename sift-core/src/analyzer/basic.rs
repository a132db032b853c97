//! Stage 1: case folding and link removal.

use sift_types::StageLabel;
use tracing::trace;

use crate::analyzer::patterns::{rewrite, PatternId, PatternLibrary};

/// Rules removed by the basic cleaner, in application order.
pub const STRIPPED_PATTERNS: [PatternId; 4] = [
    PatternId::Url,
    PatternId::Email,
    PatternId::Mention,
    PatternId::Hashtag,
];

/// First-stage cleaner.
///
/// Performs the following operations, in order:
/// - Converts all characters to lowercase (Unicode-aware)
/// - Removes URLs, email addresses, `@mentions` and `#hashtags`
/// - Collapses runs of two or more whitespace characters into one space
/// - Trims leading and trailing whitespace
///
/// Each removal rule runs once over the whole string; removing one kind of
/// match does not trigger another pass of the earlier rules.
/// A removal can therefore join text into a match for a rule that already
/// ran: in `http:a@b.cd//example.com` the email `a@b.cd` is removed after
/// the URL rule, leaving `http://example.com` in the output.
///
/// # Examples
///
/// ```
/// use sift_core::analyzer::BasicCleaner;
///
/// let cleaner = BasicCleaner::default();
/// assert_eq!(cleaner.clean("  Ping @ops  AT https://x.io  "), "ping at");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BasicCleaner {
    patterns: &'static PatternLibrary,
}

impl Default for BasicCleaner {
    fn default() -> Self {
        Self::new()
    }
}

impl BasicCleaner {
    /// Stage this cleaner produces.
    pub const STAGE: StageLabel = StageLabel::Basic;

    /// Creates a cleaner over the shared pattern library.
    pub fn new() -> Self {
        Self {
            patterns: PatternLibrary::shared(),
        }
    }

    /// Cleans text into an existing String buffer.
    ///
    /// Clears the buffer before writing and reuses its capacity.
    pub fn clean_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len());
        // Whole-string lowercasing, so a word-final sigma folds to `ς`.
        out.push_str(&input.to_lowercase());

        for id in STRIPPED_PATTERNS {
            rewrite(out, |s| self.patterns.strip(id, s));
            trace!(pattern = id.name(), len = out.len(), "stripped");
        }

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
