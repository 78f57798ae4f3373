// src/import/mod.rs

//! Multi-format quiz import.
//!
//! Raw pasted or uploaded text is tried against each format in a fixed order
//! (JSON, CSV, Q&A text, flashcards). The first format that yields at least one
//! question wins. Everything here is pure and synchronous.

pub mod choices;
pub mod csv;
pub mod flashcard;
pub mod json;
pub mod normalize;
pub mod qa_text;

use crate::models::question::{ImportFormat, ParseResult};

pub use choices::generate_choices;
pub use csv::try_parse_csv;
pub use flashcard::try_parse_flashcards;
pub use json::try_parse_json;
pub use normalize::normalize_question;
pub use qa_text::try_parse_qa_text;

/// U+FEFF, left at the start of files saved by some Windows editors.
const BYTE_ORDER_MARK: char = '\u{feff}';

/// A format-specific parser.
pub type SubParser = fn(&str) -> ParseResult;

/// Sub-parsers in the order the dispatcher tries them.
pub const PARSERS: [(ImportFormat, SubParser); 4] = [
    (ImportFormat::Json, try_parse_json),
    (ImportFormat::Csv, try_parse_csv),
    (ImportFormat::QaText, try_parse_qa_text),
    (ImportFormat::Flashcards, try_parse_flashcards),
];

/// Detects the format of `text` and returns its questions.
///
/// * Surrounding whitespace and a byte order mark are stripped first.
/// * Blank input returns `Unknown` with the `"Empty input"` error; this is the only error reported.
/// * Otherwise the trimmed text goes through `PARSERS` in order and the first
///   non-empty result is returned as is.
/// * If nothing matches, the last (flashcard) attempt is returned: `Unknown`, no questions.
pub fn parse_import_data(text: &str) -> ParseResult {
    let text = text.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK);
    if text.is_empty() {
        return ParseResult::empty_input();
    }

    let mut result = ParseResult::unknown();
    for (format, parse) in PARSERS {
        result = parse(text);
        if !result.is_empty() {
            tracing::debug!("Import matched {} with {} question(s)", format, result.len());
            return result;
        }
        tracing::debug!("Import did not match {}", format);
    }

    result
}

/// Trimmed, non-blank lines of `text`. Splits on `\n`, so `\r\n` endings are trimmed away.
pub(crate) fn non_blank_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_order() {
        let order: Vec<ImportFormat> = PARSERS.iter().map(|(format, _)| *format).collect();
        assert_eq!(
            order,
            vec![
                ImportFormat::Json,
                ImportFormat::Csv,
                ImportFormat::QaText,
                ImportFormat::Flashcards
            ]
        );
    }

    #[test]
    fn test_empty_and_blank_input() {
        for input in ["", "   ", "   \n\n   "] {
            let result = parse_import_data(input);
            assert!(result.is_empty());
            assert_eq!(result.format, ImportFormat::Unknown);
            assert_eq!(result.error.as_deref(), Some("Empty input"));
        }
    }

    #[test]
    fn test_nothing_matches() {
        let result = parse_import_data("just one line");
        assert!(result.is_empty());
        assert_eq!(result.format, ImportFormat::Unknown);
        assert!(result.error.is_none());
    }

    #[test]
    fn test_json_without_questions_falls_through_to_csv() {
        // Valid JSON whose elements carry no question, but two CSV-shaped lines.
        let text = "[\"question,answer\",\n\"Q?\",\"A\"]";
        let result = parse_import_data(text);
        assert_eq!(result.format, ImportFormat::Csv);
        assert_eq!(result.len(), 1);
        assert_eq!(result.questions[0].q, "Q?");
    }

    #[test]
    fn test_csv_wins_over_flashcards() {
        let result = parse_import_data("question,answer\nTerm: Definition, extra");
        assert_eq!(result.format, ImportFormat::Csv);
        assert_eq!(result.questions[0].q, "Term: Definition");
    }

    #[test]
    fn test_comma_less_rows_fall_through_to_flashcards() {
        let result = parse_import_data("question,answer\nTerm: Definition");
        assert_eq!(result.format, ImportFormat::Flashcards);
        assert_eq!(result.questions[0].q, "What is Term?");
    }

    #[test]
    fn test_byte_order_mark_is_ignored() {
        let result = parse_import_data("\u{feff}[{\"question\":\"What is 2+2?\",\"answer\":\"4\"}]");
        assert_eq!(result.format, ImportFormat::Json);
        assert_eq!(result.len(), 1);
        assert_eq!(result.questions[0].q, "What is 2+2?");

        let result = parse_import_data("\u{feff}  \n");
        assert_eq!(result.error.as_deref(), Some("Empty input"));
    }

    #[test]
    fn test_non_blank_lines() {
        assert_eq!(non_blank_lines(" a \r\n\n  \nb"), vec!["a", "b"]);
    }
}
