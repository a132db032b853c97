//! Word Tokenizer Module
//!
//! Splits cleaned text into word-like units. It is the first half of the
//! filtering stage: it takes the output of the intermediate cleaner and emits
//! each token, in order, with its position.
//!
//! ## What It Does
//!
//! Given `"hello, world! it's fine."` it emits:
//!
//! ```text
//! ("hello", 0) (",", 1) ("world", 2) ("!", 3) ("it", 4) ("'s", 5) ("fine", 6) (".", 7)
//! ```
//!
//! ## Rules
//!
//! Applied to every whitespace-separated chunk:
//!
//! - `;`, `!` and `?` are always tokens of their own
//! - `,` and `:` are tokens of their own unless both neighbours are digits
//!   (`1,000` and `10:30` stay whole)
//! - leading and trailing runs of other punctuation are peeled off as one token each
//! - English clitics (`n't`, `'ll`, `'re`, `'ve`, `'s`, `'m`, `'d`) are split from the stem
//! - inner hyphens, apostrophes and periods stay inside the token (`well-known`, `e.g`)
//!
//! ## Zero Allocation
//!
//! Tokens are slices of the input, emitted through a callback. Collecting
//! them is left to the caller.

use smallvec::SmallVec;

/// Clitic suffixes split from the end of a word, longest first.
const CLITICS: [&str; 7] = ["n't", "'ll", "'re", "'ve", "'s", "'m", "'d"];

/// Treebank-style word tokenizer.
///
/// ## Example
///
/// ```
/// use sift_core::analyzer::WordTokenizer;
///
/// let mut words = Vec::new();
/// WordTokenizer::new().tokenize("stop, look!", |text, _pos| words.push(text));
/// assert_eq!(words, ["stop", ",", "look", "!"]);
/// ```
#[derive(Debug, Default, Copy, Clone)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Creates a new tokenizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Tokenizes `text` and emits `(token, position)`.
    ///
    /// Position is `u32`. After emitting a token at position `u32::MAX`,
    /// further emissions stop (overflow protection).
    pub fn tokenize<'n, F>(&self, text: &'n str, emit: F)
    where
        F: FnMut(&'n str, u32),
    {
        let mut sink = Sink {
            emit,
            pos: 0,
            exhausted: false,
        };

        for chunk in text.split(char::is_whitespace) {
            if chunk.is_empty() {
                continue;
            }
            for segment in split_separators(chunk) {
                for piece in split_segment(segment) {
                    sink.push(piece);
                }
            }
            if sink.exhausted {
                return;
            }
        }
    }

    /// Tokenizes `text` into a vector of slices.
    pub fn tokens<'n>(&self, text: &'n str) -> Vec<&'n str> {
        let mut out = Vec::new();
        self.tokenize(text, |token, _| out.push(token));
        out
    }
}

struct Sink<F> {
    emit: F,
    pos: u32,
    exhausted: bool,
}

impl<F> Sink<F> {
    #[inline]
    fn push<'n>(&mut self, text: &'n str)
    where
        F: FnMut(&'n str, u32),
    {
        if self.exhausted || text.is_empty() {
            return;
        }
        (self.emit)(text, self.pos);
        if self.pos == u32::MAX {
            self.exhausted = true;
        } else {
            self.pos += 1;
        }
    }
}

/// Splits a chunk on standalone separators, keeping the separators.
fn split_separators(chunk: &str) -> SmallVec<[&str; 4]> {
    let mut out = SmallVec::new();
    let mut start = 0usize;
    let mut prev: Option<char> = None;
    let mut iter = chunk.char_indices().peekable();

    while let Some((i, c)) = iter.next() {
        let next = iter.peek().map(|&(_, n)| n);
        let separate = match c {
            ';' | '!' | '?' => true,
            ',' | ':' => !(is_digit(prev) && is_digit(next)),
            _ => false,
        };

        if separate {
            if start < i {
                out.push(&chunk[start..i]);
            }
            let end = i + c.len_utf8();
            out.push(&chunk[i..end]);
            start = end;
        }
        prev = Some(c);
    }

    if start < chunk.len() {
        out.push(&chunk[start..]);
    }
    out
}

#[inline]
fn is_digit(c: Option<char>) -> bool {
    c.is_some_and(|c| c.is_ascii_digit())
}

/// Splits a separator-free segment into leading punctuation, stem, clitic
/// and trailing punctuation. Empty parts are omitted.
fn split_segment(segment: &str) -> SmallVec<[&str; 4]> {
    let mut out = SmallVec::new();

    let Some(start) = segment.find(char::is_alphanumeric) else {
        out.push(segment);
        return out;
    };
    // `find` succeeded, so a last alphanumeric char exists.
    let end = segment
        .char_indices()
        .rev()
        .find(|&(_, c)| c.is_alphanumeric())
        .map_or(segment.len(), |(i, c)| i + c.len_utf8());

    let (stem, clitic) = split_clitic(&segment[start..end]);

    for part in [&segment[..start], stem, clitic, &segment[end..]] {
        if !part.is_empty() {
            out.push(part);
        }
    }
    out
}

/// Separates a trailing clitic from `word`, if one is present and leaves a
/// non-empty stem.
fn split_clitic(word: &str) -> (&str, &str) {
    for clitic in CLITICS {
        if word.len() <= clitic.len() {
            continue;
        }
        let cut = word.len() - clitic.len();
        if word.is_char_boundary(cut) && word[cut..].eq_ignore_ascii_case(clitic) {
            return (&word[..cut], &word[cut..]);
        }
    }
    (word, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str) -> Vec<(&str, u32)> {
        let mut out = Vec::new();
        WordTokenizer::new().tokenize(input, |text, pos| out.push((text, pos)));
        out
    }

    fn words(input: &str) -> Vec<&str> {
        WordTokenizer::new().tokens(input)
    }

    #[test]
    fn single_word() {
        let out = collect("hello");
        assert_eq!(out, vec![("hello", 0)]);
    }

    #[test]
    fn positions_are_sequential() {
        let out = collect("the quick brown fox");
        assert_eq!(out.len(), 4);
        for (i, (_, pos)) in out.iter().enumerate() {
            assert_eq!(*pos, i as u32);
        }
    }

    #[test]
    fn empty_emits_nothing() {
        assert!(collect("").is_empty());
        assert!(collect("   \n\t").is_empty());
    }

    #[test]
    fn any_whitespace_splits() {
        assert_eq!(words("a\nb\tc  d"), ["a", "b", "c", "d"]);
    }

    #[test]
    fn trailing_punctuation_is_separated() {
        assert_eq!(words("hello! world."), ["hello", "!", "world", "."]);
        assert_eq!(words("end..."), ["end", "..."]);
    }

    #[test]
    fn leading_punctuation_is_separated() {
        assert_eq!(words("'quoted' -dash"), ["'", "quoted", "'", "-", "dash"]);
    }

    #[test]
    fn separators_inside_chunk() {
        assert_eq!(words("a,b;c!d?e:f"), ["a", ",", "b", ";", "c", "!", "d", "?", "e", ":", "f"]);
    }

    #[test]
    fn numeric_commas_and_colons_stay() {
        assert_eq!(words("1,000 at 10:30,"), ["1,000", "at", "10:30", ","]);
    }

    #[test]
    fn clitics_are_split() {
        assert_eq!(words("john's"), ["john", "'s"]);
        assert_eq!(words("can't"), ["ca", "n't"]);
        assert_eq!(words("we'll"), ["we", "'ll"]);
        assert_eq!(words("I'M"), ["I", "'M"]);
    }

    #[test]
    fn bare_clitic_is_not_split() {
        assert_eq!(words("n't"), ["n't"]);
        assert_eq!(words("'s"), ["'", "s"]);
    }

    #[test]
    fn inner_punctuation_kept() {
        assert_eq!(words("well-known e.g"), ["well-known", "e.g"]);
    }

    #[test]
    fn punctuation_only_chunk() {
        assert_eq!(words("- ..."), ["-", "..."]);
    }

    #[test]
    fn unicode_words() {
        assert_eq!(words("naïve café, señor!"), ["naïve", "café", ",", "señor", "!"]);
    }

    #[test]
    fn tokens_are_slices_of_input() {
        let input = String::from("hello, world");
        let base = input.as_ptr() as usize;
        let end = base + input.len();

        WordTokenizer::new().tokenize(&input, |text, _| {
            let ptr = text.as_ptr() as usize;
            assert!(ptr >= base && ptr < end);
        });
    }

    #[test]
    fn tokenizer_is_reusable() {
        let t = WordTokenizer::new();

        let mut n = 0usize;
        t.tokenize("hello world", |_, _| n += 1);
        assert_eq!(n, 2);

        n = 0;
        t.tokenize("one, two three", |_, _| n += 1);
        assert_eq!(n, 4);
    }
}
