//! Line tables over raw text.
//!
//! Splits a document into candidate lines for per-line cleaning. Lines that
//! are blank or too short to carry content once trimmed are dropped.

use sift_types::word_count;

/// Lines must be strictly longer than this many characters after trimming.
pub const MIN_LINE_CHARS: usize = 3;

/// One retained line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRow {
    /// The trimmed line.
    pub text: String,
    /// Length in characters.
    pub length: usize,
    /// Whitespace-separated word count.
    pub word_count: usize,
}

impl LineRow {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_owned(),
            length: text.chars().count(),
            word_count: word_count(text),
        }
    }
}

/// Retained lines of a document, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineTable {
    rows: Vec<LineRow>,
}

impl LineTable {
    /// Builds a table from raw text.
    ///
    /// # Examples
    ///
    /// ```
    /// use sift_core::LineTable;
    ///
    /// let table = LineTable::from_raw("first line\n\n ok \n  second line  ");
    /// assert_eq!(table.len(), 2);
    /// assert_eq!(table.rows()[1].text, "second line");
    /// ```
    pub fn from_raw(text: &str) -> Self {
        let rows = text
            .split('\n')
            .map(str::trim)
            .filter(|line| line.chars().count() > MIN_LINE_CHARS)
            .map(LineRow::new)
            .collect();
        Self { rows }
    }

    /// Rows in source order.
    pub fn rows(&self) -> &[LineRow] {
        &self.rows
    }

    /// Iterates rows in source order.
    pub fn iter(&self) -> impl Iterator<Item = &LineRow> {
        self.rows.iter()
    }

    /// Number of retained lines.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no line was retained.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of row lengths, in characters.
    pub fn total_length(&self) -> usize {
        self.rows.iter().map(|r| r.length).sum()
    }

    /// Sum of row word counts.
    pub fn total_words(&self) -> usize {
        self.rows.iter().map(|r| r.word_count).sum()
    }
}

impl<'a> IntoIterator for &'a LineTable {
    type Item = &'a LineRow;
    type IntoIter = std::slice::Iter<'a, LineRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_short_and_blank_lines() {
        let table = LineTable::from_raw("abc\nabcd\n\n   \n  xy  \nhello there");
        let texts: Vec<_> = table.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, ["abcd", "hello there"]);
    }

    #[test]
    fn rows_carry_metrics() {
        let table = LineTable::from_raw("  the quick brown fox \n");
        let row = &table.rows()[0];
        assert_eq!(row.text, "the quick brown fox");
        assert_eq!(row.length, 19);
        assert_eq!(row.word_count, 4);
    }

    #[test]
    fn totals() {
        let table = LineTable::from_raw("one two\nthree four five");
        assert_eq!(table.len(), 2);
        assert_eq!(table.total_length(), 7 + 15);
        assert_eq!(table.total_words(), 5);
    }

    #[test]
    fn crlf_lines_are_trimmed() {
        let table = LineTable::from_raw("first\r\nsecond\r\n");
        let texts: Vec<_> = (&table).into_iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, ["first", "second"]);
    }

    #[test]
    fn length_counts_characters() {
        // Three characters, six bytes.
        assert!(LineTable::from_raw("ééé").is_empty());
        assert_eq!(LineTable::from_raw("éééé").len(), 1);
    }

    #[test]
    fn empty_input() {
        let table = LineTable::from_raw("");
        assert!(table.is_empty());
        assert_eq!(table.total_words(), 0);
    }
}
