//! Stopword sets
//!
//! A [`StopwordSet`] is supplied to the pipeline at construction time and
//! never changes afterwards. English ships built in; other languages are
//! loaded from newline-separated word lists.

use std::fs;
use std::path::Path;

use rustc_hash::FxHashSet;
use sift_types::{CleanError, Result};

/// English stopwords, as distributed with the NLTK stopwords corpus.
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// A read-only set of lowercase stopwords.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: FxHashSet<String>,
}

impl StopwordSet {
    /// The built-in English set.
    pub fn english() -> Self {
        Self::from_words(ENGLISH_STOPWORDS.iter().copied())
    }

    /// The built-in set for `language`.
    ///
    /// Accepts `english` or `en`, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns `CleanError::UnsupportedLanguage` for any other language; load
    /// those with [`StopwordSet::load`] instead.
    pub fn for_language(language: &str) -> Result<Self> {
        match language.trim().to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(Self::english()),
            _ => Err(CleanError::UnsupportedLanguage(language.to_string())),
        }
    }

    /// An empty set (no filtering).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a set from words, lowercasing each.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Parses a newline-separated list. Blank lines and lines starting with
    /// `#` are skipped.
    pub fn parse(list: &str) -> Self {
        Self::from_words(
            list.lines()
                .map(str::trim)
                .filter(|line| !line.starts_with('#')),
        )
    }

    /// Loads a newline-separated list from disk.
    ///
    /// # Errors
    ///
    /// Returns `CleanError::Io` if the file cannot be read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let list = fs::read_to_string(path)?;
        Ok(Self::parse(&list))
    }

    /// Whether `word` is a stopword. Lookups are exact; the pipeline only
    /// queries lowercase tokens.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates the stopwords in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
