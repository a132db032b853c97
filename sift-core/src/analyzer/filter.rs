//! Stage 3: tokenization and token filtering.

use sift_types::StageLabel;

use crate::analyzer::tokenizer::WordTokenizer;
use crate::stopwords::StopwordSet;

/// Tokens must be strictly longer than this many characters.
pub const MIN_TOKEN_CHARS: usize = 2;

/// Tokenizes cleaned text and keeps content words.
///
/// A token is kept iff it is entirely alphabetic, longer than
/// [`MIN_TOKEN_CHARS`] characters, not a stopword, and not purely numeric.
/// The numeric check is implied by the alphabetic one and is kept as an
/// explicit guard.
#[derive(Debug, Clone)]
pub struct TokenFilter {
    tokenizer: WordTokenizer,
    stopwords: StopwordSet,
}

impl Default for TokenFilter {
    fn default() -> Self {
        Self::new(StopwordSet::english())
    }
}

impl TokenFilter {
    /// Stage this filter produces.
    pub const STAGE: StageLabel = StageLabel::FilteredTokens;

    /// Creates a filter over the given stopword set.
    pub fn new(stopwords: StopwordSet) -> Self {
        Self {
            tokenizer: WordTokenizer::new(),
            stopwords,
        }
    }

    /// The stopword set in use.
    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    /// Whether a single token passes the filter.
    #[inline]
    pub fn accepts(&self, token: &str) -> bool {
        is_alphabetic(token)
            && token.chars().count() > MIN_TOKEN_CHARS
            && !self.stopwords.contains(token)
            && !is_numeric(token)
    }

    /// Tokenizes `text` and returns the retained tokens in order.
    pub fn filter(&self, text: &str) -> Vec<String> {
        let mut out = Vec::new();
        self.tokenizer.tokenize(text, |token, _| {
            if self.accepts(token) {
                out.push(token.to_owned());
            }
        });
        out
    }

    /// Applies the predicate to an existing token list.
    pub fn retain<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        tokens
            .iter()
            .map(AsRef::as_ref)
            .filter(|t| self.accepts(t))
            .map(str::to_owned)
            .collect()
    }
}

#[inline]
fn is_alphabetic(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

#[inline]
fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_numeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(text: &str) -> Vec<String> {
        TokenFilter::default().filter(text)
    }

    #[test]
    fn drops_stopwords_and_short_tokens() {
        assert_eq!(
            filter("this is a test text with some words"),
            ["test", "text", "words"]
        );
    }

    #[test]
    fn drops_punctuation_and_numbers() {
        assert_eq!(filter("hello! 2024 was great, ok?"), ["hello", "great"]);
    }

    #[test]
    fn drops_mixed_tokens() {
        assert_eq!(filter("covid19 well-known e.g rust"), ["rust"]);
    }

    #[test]
    fn clitic_stems_are_candidates() {
        assert_eq!(filter("john's house"), ["john", "house"]);
    }

    #[test]
    fn keeps_duplicates_and_order() {
        assert_eq!(filter("data science data"), ["data", "science", "data"]);
    }

    #[test]
    fn length_counts_characters() {
        // Two characters but four bytes.
        assert!(filter("éé").is_empty());
        assert_eq!(filter("été"), ["été"]);
    }

    #[test]
    fn empty_input() {
        assert!(filter("").is_empty());
    }

    #[test]
    fn custom_stopwords() {
        let f = TokenFilter::new(StopwordSet::from_words(["rust"]));
        assert_eq!(f.filter("rust and the borrow checker"), ["and", "the", "borrow", "checker"]);
        assert_eq!(f.stopwords().len(), 1);
    }

    #[test]
    fn retain_on_token_list() {
        let f = TokenFilter::default();
        let kept = f.retain(&["the", "Quick", "fox", "ab", "123", "x-y"]);
        assert_eq!(kept, ["Quick", "fox"]);
    }

    #[test]
    fn predicate() {
        let f = TokenFilter::default();
        assert!(f.accepts("hello"));
        assert!(!f.accepts("the"));
        assert!(!f.accepts("hi"));
        assert!(!f.accepts("123"));
        assert!(!f.accepts(""));
    }
}
