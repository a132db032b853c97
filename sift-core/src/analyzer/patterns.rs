//! Named cleaning patterns.
//!
//! Every regular expression the cleaners use lives in one table, keyed by
//! [`PatternId`]. Stages refer to rules by id instead of embedding literals,
//! so each rule can be inspected and tested on its own.
//!
//! The table is compiled once per process and shared read-only through
//! [`PatternLibrary::shared`].

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

/// Identifier of a cleaning rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PatternId {
    /// `http://` and `https://` links.
    Url = 0,
    /// Email addresses.
    Email = 1,
    /// `@handle` mentions.
    Mention = 2,
    /// `#tag` hashtags.
    Hashtag = 3,
    /// Standalone digit runs.
    Number = 4,
    /// Two or more consecutive characters that are neither word nor space.
    RepeatedPunctuation = 5,
    /// Two or more consecutive whitespace characters.
    RepeatedWhitespace = 6,
    /// Any character outside words, whitespace and `-'.,!?;:`.
    DisallowedCharacter = 7,
}

impl PatternId {
    /// All ids in declaration order.
    pub const ALL: [PatternId; 8] = [
        PatternId::Url,
        PatternId::Email,
        PatternId::Mention,
        PatternId::Hashtag,
        PatternId::Number,
        PatternId::RepeatedPunctuation,
        PatternId::RepeatedWhitespace,
        PatternId::DisallowedCharacter,
    ];

    /// Short stable name of the rule.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PatternId::Url => "urls",
            PatternId::Email => "emails",
            PatternId::Mention => "mentions",
            PatternId::Hashtag => "hashtags",
            PatternId::Number => "numbers",
            PatternId::RepeatedPunctuation => "repeated_punctuation",
            PatternId::RepeatedWhitespace => "repeated_whitespace",
            PatternId::DisallowedCharacter => "disallowed_characters",
        }
    }

    /// Regular expression source of the rule.
    #[must_use]
    pub const fn source(self) -> &'static str {
        match self {
            PatternId::Url => {
                r"http[s]?://(?:[a-zA-Z]|[0-9]|[$-_@.&+]|[!*\\(\\),]|(?:%[0-9a-fA-F][0-9a-fA-F]))+"
            }
            PatternId::Email => r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b",
            PatternId::Mention => r"@\w+",
            PatternId::Hashtag => r"#\w+",
            PatternId::Number => r"\b\d+\b",
            PatternId::RepeatedPunctuation => r"[^\w\s]{2,}",
            PatternId::RepeatedWhitespace => r"\s{2,}",
            PatternId::DisallowedCharacter => r"[^\w\s\-'.,!?;:]",
        }
    }
}

/// A compiled, named rule.
#[derive(Debug, Clone)]
pub struct CleaningPattern {
    id: PatternId,
    rule: Regex,
}

impl CleaningPattern {
    /// The rule's id.
    #[inline]
    pub fn id(&self) -> PatternId {
        self.id
    }

    /// The compiled expression.
    #[inline]
    pub fn rule(&self) -> &Regex {
        &self.rule
    }

    /// Whether the rule matches anywhere in `text`.
    #[inline]
    pub fn is_match(&self, text: &str) -> bool {
        self.rule.is_match(text)
    }

    /// Removes every match. Borrows `text` back when nothing matched.
    #[inline]
    pub fn strip<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.rule.replace_all(text, "")
    }

    /// Replaces every match with the literal `replacement`.
    #[inline]
    pub fn replace<'t>(&self, text: &'t str, replacement: &str) -> Cow<'t, str> {
        self.rule.replace_all(text, NoExpand(replacement))
    }
}

static LIBRARY: Lazy<PatternLibrary> = Lazy::new(PatternLibrary::compile);

/// The fixed table of cleaning rules.
#[derive(Debug)]
pub struct PatternLibrary {
    patterns: [CleaningPattern; 8],
}

impl PatternLibrary {
    /// The process-wide compiled library.
    pub fn shared() -> &'static PatternLibrary {
        &LIBRARY
    }

    fn compile() -> Self {
        let patterns = PatternId::ALL.map(|id| CleaningPattern {
            id,
            rule: Regex::new(id.source()).unwrap(),
        });
        Self { patterns }
    }

    /// Looks up a rule. Every id is present.
    #[inline]
    pub fn get(&self, id: PatternId) -> &CleaningPattern {
        &self.patterns[id as usize]
    }

    /// Rules in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &CleaningPattern> {
        self.patterns.iter()
    }

    /// Removes every match of `id` from `text`.
    #[inline]
    pub fn strip<'t>(&self, id: PatternId, text: &'t str) -> Cow<'t, str> {
        self.get(id).strip(text)
    }

    /// Replaces every match of `id` in `text` with `replacement`.
    #[inline]
    pub fn replace<'t>(&self, id: PatternId, text: &'t str, replacement: &str) -> Cow<'t, str> {
        self.get(id).replace(text, replacement)
    }

    /// Collapses whitespace runs to one space and trims, in place.
    pub fn collapse_whitespace(&self, buf: &mut String) {
        rewrite(buf, |s| self.replace(PatternId::RepeatedWhitespace, s, " "));
        trim_in_place(buf);
    }
}

/// Applies `f` to `buf`, swapping in the result only when `f` allocated.
pub(crate) fn rewrite<F>(buf: &mut String, f: F)
where
    F: for<'t> FnOnce(&'t str) -> Cow<'t, str>,
{
    let next = match f(buf.as_str()) {
        Cow::Borrowed(_) => return,
        Cow::Owned(next) => next,
    };
    *buf = next;
}

/// Trims leading and trailing whitespace without reallocating.
pub(crate) fn trim_in_place(buf: &mut String) {
    let end = buf.trim_end().len();
    buf.truncate(end);
    let start = buf.len() - buf.trim_start().len();
    if start > 0 {
        buf.drain(..start);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lib() -> &'static PatternLibrary {
        PatternLibrary::shared()
    }

    #[test]
    fn ids_are_unique_and_indexed() {
        for (i, id) in PatternId::ALL.iter().enumerate() {
            assert_eq!(*id as usize, i);
            assert_eq!(lib().get(*id).id(), *id);
        }
        let names: rustc_hash::FxHashSet<_> = PatternId::ALL.iter().map(|id| id.name()).collect();
        assert_eq!(names.len(), PatternId::ALL.len());
    }

    #[test]
    fn iter_follows_declaration_order() {
        let ids: Vec<_> = lib().iter().map(CleaningPattern::id).collect();
        assert_eq!(ids, PatternId::ALL.to_vec());
    }

    #[test]
    fn url_rule() {
        assert_eq!(
            lib().strip(PatternId::Url, "see http://example.com now"),
            "see  now"
        );
        assert_eq!(
            lib().strip(PatternId::Url, "https://a.b/c?d=1&e=%20f"),
            ""
        );
        assert!(!lib().get(PatternId::Url).is_match("ftp://example.com"));
    }

    #[test]
    fn email_rule() {
        assert_eq!(
            lib().strip(PatternId::Email, "mail test@example.com today"),
            "mail  today"
        );
        assert!(!lib().get(PatternId::Email).is_match("user@localhost"));
    }

    #[test]
    fn mention_and_hashtag_rules() {
        assert_eq!(lib().strip(PatternId::Mention, "hi @rust_lang!"), "hi !");
        assert_eq!(lib().strip(PatternId::Hashtag, "#nlp rocks"), " rocks");
    }

    #[test]
    fn number_rule_is_word_bounded() {
        let p = lib().get(PatternId::Number);
        assert!(p.is_match("in 2024"));
        assert!(!p.is_match("covid19"));
    }

    #[test]
    fn repeated_punctuation_rule() {
        assert_eq!(
            lib().strip(PatternId::RepeatedPunctuation, "wow!!! ok. fine?!"),
            "wow ok. fine"
        );
    }

    #[test]
    fn disallowed_character_rule_keeps_allowed_set() {
        let kept = "a-b 'c' d. e, f! g? h; i:";
        assert_eq!(lib().replace(PatternId::DisallowedCharacter, kept, " "), kept);
        assert_eq!(
            lib().replace(PatternId::DisallowedCharacter, "a(b)c*d", " "),
            "a b c d"
        );
    }

    #[test]
    fn strip_borrows_when_nothing_matches() {
        assert!(matches!(
            lib().strip(PatternId::Url, "plain text"),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn replace_is_literal() {
        assert_eq!(
            lib().replace(PatternId::Hashtag, "#tag", "$0"),
            "$0"
        );
    }

    #[test]
    fn collapse_whitespace_trims() {
        let mut buf = String::from("  hello \t\n world  ");
        lib().collapse_whitespace(&mut buf);
        assert_eq!(buf, "hello world");
    }

    #[test]
    fn collapse_keeps_single_newline() {
        let mut buf = String::from("a\nb");
        lib().collapse_whitespace(&mut buf);
        assert_eq!(buf, "a\nb");
    }

    #[test]
    fn trim_in_place_empty_and_blank() {
        let mut empty = String::new();
        trim_in_place(&mut empty);
        assert_eq!(empty, "");

        let mut blank = String::from(" \t ");
        trim_in_place(&mut blank);
        assert_eq!(blank, "");
    }
}
