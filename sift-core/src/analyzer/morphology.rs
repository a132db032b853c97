//! Stage 4: morphological normalization.
//!
//! Two strategies sit behind the [`Reducer`] trait:
//!
//! - [`Lemmatizer`]: maps English nouns to their base form using an
//!   irregular-form table and suffix detachment rules
//! - [`Stemmer`]: Snowball English (Porter2) stemming from `rust-stemmers`
//!
//! [`MorphologicalNormalizer`] holds one of each and applies the one a
//! [`NormalizationMethod`] selects to every token.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use rust_stemmers::Algorithm;
use rustc_hash::FxHashMap;
use sift_types::{NormalizationMethod, Result, StageLabel};

/// Reduces a single token to a normalized form.
pub trait Reducer: Send + Sync {
    /// Returns the reduced form of `token`.
    fn reduce(&self, token: &str) -> String;
}

/// Irregular English plurals and their lemmas.
const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("people", "person"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("oxen", "ox"),
    ("lice", "louse"),
    ("data", "datum"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("analyses", "analysis"),
    ("theses", "thesis"),
    ("crises", "crisis"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("vertices", "vertex"),
    ("leaves", "leaf"),
    ("wives", "wife"),
    ("knives", "knife"),
    ("lives", "life"),
    ("wolves", "wolf"),
    ("halves", "half"),
    ("shelves", "shelf"),
    ("thieves", "thief"),
];

/// Words ending in `s` that are already base forms.
const UNINFLECTED: &[&str] = &[
    "news", "series", "species", "always", "towards", "afterwards", "whereas", "perhaps",
];

/// Suffixes whose `es` is dropped rather than just the `s`.
const ES_SUFFIXES: &[&str] = &["sses", "shes", "ches", "xes", "zzes"];

/// Rule-based English noun lemmatizer.
///
/// Lookup order: caller lexicon, irregular forms, then detachment rules:
/// - words of three characters or fewer are left alone
/// - words ending in `ss`, `us` or `is` are left alone
/// - `-ies` becomes `-y` when at least two characters remain before it
/// - `-sses`, `-shes`, `-ches`, `-xes`, `-zzes` drop `es`
/// - any other final `s` is dropped
///
/// # Examples
///
/// ```
/// use sift_core::analyzer::{Lemmatizer, Reducer};
///
/// let lemmatizer = Lemmatizer::new();
/// assert_eq!(lemmatizer.reduce("studies"), "study");
/// assert_eq!(lemmatizer.reduce("children"), "child");
/// ```
#[derive(Debug, Clone)]
pub struct Lemmatizer {
    irregular: FxHashMap<&'static str, &'static str>,
    lexicon: FxHashMap<String, String>,
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lemmatizer {
    /// Creates a lemmatizer with the built-in rules only.
    pub fn new() -> Self {
        Self {
            irregular: IRREGULAR_NOUNS.iter().copied().collect(),
            lexicon: FxHashMap::default(),
        }
    }

    /// Adds `(form, lemma)` overrides that take priority over every rule.
    #[must_use]
    pub fn with_lexicon<I, F, L>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (F, L)>,
        F: Into<String>,
        L: Into<String>,
    {
        self.lexicon
            .extend(entries.into_iter().map(|(f, l)| (f.into(), l.into())));
        self
    }

    /// Lemmatizes one token.
    pub fn lemmatize(&self, token: &str) -> String {
        if let Some(lemma) = self.lexicon.get(token) {
            return lemma.clone();
        }
        if let Some(lemma) = self.irregular.get(token) {
            return (*lemma).to_owned();
        }
        detach_suffix(token).into_owned()
    }
}

fn detach_suffix(token: &str) -> Cow<'_, str> {
    if token.chars().count() <= 3
        || UNINFLECTED.contains(&token)
        || ["ss", "us", "is"].iter().any(|s| token.ends_with(s))
    {
        return Cow::Borrowed(token);
    }

    if let Some(stem) = token.strip_suffix("ies") {
        if stem.chars().count() >= 2 {
            return Cow::Owned(format!("{stem}y"));
        }
    }

    if ES_SUFFIXES.iter().any(|s| token.ends_with(s)) {
        return Cow::Borrowed(&token[..token.len() - 2]);
    }

    Cow::Borrowed(token.strip_suffix('s').unwrap_or(token))
}

impl Reducer for Lemmatizer {
    fn reduce(&self, token: &str) -> String {
        self.lemmatize(token)
    }
}

/// Snowball English stemmer.
pub struct Stemmer {
    inner: rust_stemmers::Stemmer,
}

impl fmt::Debug for Stemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stemmer").field("algorithm", &"english").finish()
    }
}

impl Default for Stemmer {
    fn default() -> Self {
        Self::english()
    }
}

impl Stemmer {
    /// Creates the English (Porter2) stemmer.
    pub fn english() -> Self {
        Self {
            inner: rust_stemmers::Stemmer::create(Algorithm::English),
        }
    }

    /// Stems one token.
    #[inline]
    pub fn stem(&self, token: &str) -> String {
        self.inner.stem(token).into_owned()
    }
}

impl Reducer for Stemmer {
    fn reduce(&self, token: &str) -> String {
        self.stem(token)
    }
}

/// Applies the selected [`Reducer`] to every token.
///
/// Output has exactly one token per input token, in the same order.
#[derive(Clone)]
pub struct MorphologicalNormalizer {
    lemmatizer: Arc<dyn Reducer>,
    stemmer: Arc<dyn Reducer>,
}

impl fmt::Debug for MorphologicalNormalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MorphologicalNormalizer").finish_non_exhaustive()
    }
}

impl Default for MorphologicalNormalizer {
    fn default() -> Self {
        Self::new(Arc::new(Lemmatizer::new()), Arc::new(Stemmer::english()))
    }
}

impl MorphologicalNormalizer {
    /// Stage this normalizer produces.
    pub const STAGE: StageLabel = StageLabel::NormalizedTokens;

    /// Creates a normalizer from the two strategies.
    pub fn new(lemmatizer: Arc<dyn Reducer>, stemmer: Arc<dyn Reducer>) -> Self {
        Self {
            lemmatizer,
            stemmer,
        }
    }

    /// The reducer a method selects.
    pub fn reducer(&self, method: NormalizationMethod) -> &dyn Reducer {
        match method {
            NormalizationMethod::Lemmatization => self.lemmatizer.as_ref(),
            NormalizationMethod::Stemming => self.stemmer.as_ref(),
        }
    }

    /// Reduces every token with `method`.
    pub fn normalize<S: AsRef<str>>(&self, tokens: &[S], method: NormalizationMethod) -> Vec<String> {
        let reducer = self.reducer(method);
        tokens.iter().map(|t| reducer.reduce(t.as_ref())).collect()
    }

    /// Reduces every token with the method named `method`.
    ///
    /// # Errors
    ///
    /// Returns `CleanError::InvalidMethod` if `method` is not `lemmatization`
    /// or `stemming`. No tokens are reduced in that case.
    pub fn normalize_named<S: AsRef<str>>(&self, tokens: &[S], method: &str) -> Result<Vec<String>> {
        let method = method.parse()?;
        Ok(self.normalize(tokens, method))
    }
}
