//! Input checks applied before cleaning.
//!
//! The pipeline accepts any text, including the empty string. These checks
//! are for front ends that want to refuse input too small to be worth
//! cleaning.

use sift_types::{CleanError, Result};

/// Minimum trimmed length, in characters, accepted by default.
pub const DEFAULT_MIN_TEXT_LENGTH: usize = 10;

/// Checks that `text` is non-empty and at least `min_length` characters once
/// trimmed.
///
/// # Errors
///
/// Returns `CleanError::EmptyInput` for an empty string and
/// `CleanError::TooShort` when the trimmed text is shorter than
/// `min_length`.
pub fn validate_text(text: &str, min_length: usize) -> Result<()> {
    if text.is_empty() {
        return Err(CleanError::EmptyInput);
    }

    let length = text.trim().chars().count();
    if length < min_length {
        return Err(CleanError::TooShort { length, min_length });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_long_enough_text() {
        assert!(validate_text("hello world", DEFAULT_MIN_TEXT_LENGTH).is_ok());
        assert!(validate_text("0123456789", DEFAULT_MIN_TEXT_LENGTH).is_ok());
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            validate_text("", DEFAULT_MIN_TEXT_LENGTH),
            Err(CleanError::EmptyInput)
        ));
    }

    #[test]
    fn length_is_measured_after_trimming() {
        let err = validate_text("   short    ", DEFAULT_MIN_TEXT_LENGTH).unwrap_err();
        assert!(matches!(
            err,
            CleanError::TooShort { length: 5, min_length: 10 }
        ));

        // Whitespace-only input is not empty, just too short.
        assert!(matches!(
            validate_text("   ", 1),
            Err(CleanError::TooShort { length: 0, .. })
        ));
    }

    #[test]
    fn counts_characters() {
        // Five characters, ten bytes.
        assert!(validate_text("ééééé", 5).is_ok());
        assert!(validate_text("ééééé", 6).is_err());
    }

    #[test]
    fn zero_minimum_only_rejects_empty() {
        assert!(validate_text(" ", 0).is_ok());
        assert!(validate_text("", 0).is_err());
    }
}
