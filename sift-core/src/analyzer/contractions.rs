//! Ordered contraction expansion.
//!
//! Rules are literal substring replacements applied one after another over
//! the same string. Matching is not word-bounded: a surface form found
//! inside a longer token is rewritten too (`"don't"` becomes `"do not"` via
//! the generic `n't` rule).
//!
//! Because later rules see the output of earlier ones, order is part of the
//! table's meaning. A table must list specific forms before any generic form
//! they contain, so `can't → cannot` fires before `n't → " not"` can turn it
//! into `"ca not"`. [`ContractionTable::new`] rejects tables that break this.

use std::borrow::Cow;

use memchr::memmem::Finder;
use rustc_hash::FxHashSet;
use sift_types::{CleanError, Result};

/// Default English table, in application order.
pub const ENGLISH_CONTRACTIONS: [(&str, &str); 11] = [
    ("can't", "cannot"),
    ("won't", "will not"),
    ("n't", " not"),
    ("'re", " are"),
    ("'ve", " have"),
    ("'ll", " will"),
    ("'d", " would"),
    ("'m", " am"),
    ("it's", "it is"),
    ("that's", "that is"),
    ("what's", "what is"),
];

/// One `(surface form, expansion)` pair.
#[derive(Debug, Clone)]
pub struct ContractionRule {
    surface: String,
    expansion: String,
    finder: Finder<'static>,
}

impl ContractionRule {
    /// Creates a rule. The surface form is matched literally.
    pub fn new(surface: impl Into<String>, expansion: impl Into<String>) -> Self {
        let surface = surface.into();
        let finder = Finder::new(surface.as_bytes()).into_owned();
        Self {
            surface,
            expansion: expansion.into(),
            finder,
        }
    }

    /// The text being replaced.
    #[inline]
    pub fn surface(&self) -> &str {
        &self.surface
    }

    /// The replacement text.
    #[inline]
    pub fn expansion(&self) -> &str {
        &self.expansion
    }

    /// Replaces every non-overlapping occurrence, scanning left to right.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        if self.surface.is_empty() {
            return Cow::Borrowed(text);
        }

        let mut hits = self.finder.find_iter(text.as_bytes()).peekable();
        if hits.peek().is_none() {
            return Cow::Borrowed(text);
        }

        let mut out = String::with_capacity(text.len() + text.len() / 8);
        let mut last = 0usize;

        // A valid UTF-8 needle only matches at char boundaries of a valid
        // UTF-8 haystack, so these slices are always well formed.
        for start in hits {
            out.push_str(&text[last..start]);
            out.push_str(&self.expansion);
            last = start + self.surface.len();
        }
        out.push_str(&text[last..]);

        Cow::Owned(out)
    }
}

/// An ordered, validated list of contraction rules.
#[derive(Debug, Clone)]
pub struct ContractionTable {
    rules: Vec<ContractionRule>,
}

impl Default for ContractionTable {
    fn default() -> Self {
        Self::english()
    }
}

impl ContractionTable {
    /// Builds and validates a table from `(surface, expansion)` pairs.
    ///
    /// # Errors
    ///
    /// Returns `CleanError::DuplicateContraction` if a surface form repeats and
    /// `CleanError::ContractionOrder` if a form precedes a longer form that
    /// contains it.
    pub fn new<I, S, E>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, E)>,
        S: Into<String>,
        E: Into<String>,
    {
        let rules: Vec<_> = pairs
            .into_iter()
            .map(|(s, e)| ContractionRule::new(s, e))
            .collect();
        validate(&rules)?;
        Ok(Self { rules })
    }

    /// The built-in English table.
    pub fn english() -> Self {
        Self {
            rules: ENGLISH_CONTRACTIONS
                .iter()
                .map(|&(s, e)| ContractionRule::new(s, e))
                .collect(),
        }
    }

    /// A table that expands nothing.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Rules in application order.
    pub fn rules(&self) -> &[ContractionRule] {
        &self.rules
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Applies every rule in order, rewriting `buf` in place.
    pub fn expand_in_place(&self, buf: &mut String) {
        for rule in &self.rules {
            crate::analyzer::patterns::rewrite(buf, |s| rule.apply(s));
        }
    }

    /// Applies every rule in order.
    pub fn expand(&self, text: &str) -> String {
        let mut buf = text.to_owned();
        self.expand_in_place(&mut buf);
        buf
    }
}

/// Checks the specific-before-generic invariant.
fn validate(rules: &[ContractionRule]) -> Result<()> {
    let mut seen = FxHashSet::default();
    for rule in rules {
        if !seen.insert(rule.surface()) {
            return Err(CleanError::DuplicateContraction(rule.surface.clone()));
        }
    }

    for (i, earlier) in rules.iter().enumerate() {
        for later in &rules[i + 1..] {
            if later.surface().contains(earlier.surface()) {
                return Err(CleanError::ContractionOrder {
                    earlier: earlier.surface.clone(),
                    later: later.surface.clone(),
                });
            }
        }
    }

    Ok(())
}
