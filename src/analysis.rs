//! Text analysis: whitespace tokenization and counting.
//!
//! The analysis itself is a pure function over a validated input string.
//! Validation happens at the boundary, before any counting runs: request
//! bodies are deserialized into [`AnalysisRequest`] and then promoted to
//! [`ValidText`], whose constructor is the single place the non-empty
//! constraint is enforced.

use serde::{Deserialize, Serialize};

/// Body of a `POST /analyze` request.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisRequest {
    /// Customer feedback text to be analyzed.
    pub text: String,
}

/// Error returned when a request fails domain validation.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("text must not be empty")]
    EmptyText,
}

impl ValidationError {
    /// Name of the request field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::EmptyText => "text",
        }
    }
}

/// A request text that passed validation: at least one character long.
///
/// A string consisting only of whitespace is valid; only the exact empty
/// string is rejected. No trimming or normalization is applied.
#[derive(Debug, Clone)]
pub struct ValidText(String);

impl ValidText {
    pub fn new(text: String) -> Result<Self, ValidationError> {
        if text.is_empty() {
            return Err(ValidationError::EmptyText);
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Metrics computed for a submitted text, echoed back with the original.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    /// The submitted text, unmodified.
    pub original_text: String,
    /// Number of whitespace-delimited words.
    pub word_count: usize,
    /// Number of non-whitespace characters.
    pub character_count: usize,
}

/// Count whitespace-delimited words.
///
/// A word is a maximal run of non-whitespace characters. Runs of consecutive
/// whitespace act as a single delimiter, and leading or trailing whitespace
/// produces no empty words. Whitespace classification follows the Unicode
/// `White_Space` property, so any non-whitespace code point, including CJK
/// ideographs and emoji, contributes to a word.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Count characters excluding whitespace.
///
/// Characters are Unicode scalar values; spaces, tabs, newlines, and other
/// `White_Space` code points are excluded, while punctuation, digits, and all
/// other code points are included.
pub fn character_count(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

/// Analyze a validated text, producing its metrics alongside the original.
pub fn analyze(text: ValidText) -> AnalysisResult {
    let word_count = word_count(text.as_str());
    let character_count = character_count(text.as_str());
    AnalysisResult {
        original_text: text.into_inner(),
        word_count,
        character_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid(text: &str) -> ValidText {
        ValidText::new(text.to_string()).expect("valid text")
    }

    #[test]
    fn counts_simple_sentence() {
        let result = analyze(valid("I love cloud engineering!"));
        assert_eq!(result.word_count, 4);
        assert_eq!(result.character_count, 22);
        assert_eq!(result.original_text, "I love cloud engineering!");
    }

    #[test]
    fn consecutive_spaces_act_as_one_delimiter() {
        let result = analyze(valid("Hello    world    test"));
        assert_eq!(result.word_count, 3);
        assert_eq!(result.character_count, 14);
    }

    #[test]
    fn punctuation_counts_as_characters_not_words() {
        let result = analyze(valid("Hello! How are you?"));
        assert_eq!(result.word_count, 4);
        assert_eq!(result.character_count, 16);
    }

    #[test]
    fn newlines_and_tabs_delimit_words() {
        assert_eq!(word_count("Line one\nLine two\nLine three"), 6);
        assert_eq!(word_count("a\tb\r\nc"), 3);
    }

    #[test]
    fn leading_and_trailing_whitespace_produce_no_words() {
        assert_eq!(word_count("  hello  "), 1);
        assert_eq!(character_count("  hello  "), 5);
    }

    #[test]
    fn unicode_text_counts_by_code_point() {
        let result = analyze(valid("Hello 世界 🌍"));
        assert_eq!(result.word_count, 3);
        // "Hello" (5) + two ideographs + one emoji scalar value
        assert_eq!(result.character_count, 8);
        assert_eq!(result.original_text, "Hello 世界 🌍");
    }

    #[test]
    fn whitespace_only_text_is_valid_and_yields_zero_counts() {
        let result = analyze(valid("   "));
        assert_eq!(result.word_count, 0);
        assert_eq!(result.character_count, 0);
        assert_eq!(result.original_text, "   ");
    }

    #[test]
    fn single_character_text() {
        let result = analyze(valid("x"));
        assert_eq!(result.word_count, 1);
        assert_eq!(result.character_count, 1);
    }

    #[test]
    fn character_count_equals_length_minus_whitespace() {
        for text in [
            "I love cloud engineering!",
            "Hello    world    test",
            "Line one\nLine two\nLine three",
            "Hello 世界 🌍",
            " \t\n ",
            "no-whitespace-at-all",
        ] {
            let whitespace = text.chars().filter(|c| c.is_whitespace()).count();
            assert_eq!(
                character_count(text),
                text.chars().count() - whitespace,
                "text: {text:?}"
            );
        }
    }

    #[test]
    fn analysis_is_deterministic() {
        let first = analyze(valid("Same input, same output."));
        let second = analyze(valid("Same input, same output."));
        assert_eq!(first, second);
    }

    #[test]
    fn empty_text_is_rejected() {
        let err = ValidText::new(String::new()).expect_err("empty must fail");
        assert!(matches!(err, ValidationError::EmptyText));
        assert_eq!(err.field(), "text");
    }
}
