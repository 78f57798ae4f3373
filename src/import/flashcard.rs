// src/import/flashcard.rs

use super::{choices::generate_choices, non_blank_lines};
use crate::models::question::{DEFAULT_CATEGORY, ImportFormat, ParseResult, QuestionRecord};

/// Term/definition separators, in precedence order.
const SEPARATORS: [&str; 3] = [":", " - ", "\t"];

/// Parses one `term<sep>definition` card per line.
///
/// The separator is the first of `:`, ` - ` or tab found in the line. The line is
/// split on every occurrence of it and only the first two parts are used, so a
/// definition containing the separator again is cut short.
///
/// Terms not already phrased as a question become `What is <term>?`.
pub fn try_parse_flashcards(text: &str) -> ParseResult {
    let mut questions = Vec::new();

    for line in non_blank_lines(text) {
        let Some(sep) = SEPARATORS.iter().find(|sep| line.contains(**sep)) else {
            continue;
        };

        let mut parts = line.split(*sep).map(str::trim);
        let (Some(term), Some(definition)) = (parts.next(), parts.next()) else {
            continue;
        };
        if term.is_empty() || definition.is_empty() {
            continue;
        }

        let q = if term.ends_with('?') {
            term.to_string()
        } else {
            format!("What is {}?", term)
        };

        questions.push(QuestionRecord {
            id: questions.len() + 1,
            category: DEFAULT_CATEGORY.to_string(),
            q,
            a: definition.to_string(),
            choices: generate_choices(definition),
            correct: 0,
        });
    }

    ParseResult::labelled(questions, ImportFormat::Flashcards)
}
