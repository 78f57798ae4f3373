// src/import/qa_text.rs

use std::sync::LazyLock;

use regex::Regex;

use super::choices::generate_choices;
use crate::models::question::{DEFAULT_CATEGORY, ImportFormat, ParseResult, QuestionRecord};

static QUESTION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)q:").expect("question marker pattern"));

/// Line break(s) followed by `A:`. Ends the question text.
static ANSWER_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[\r\n]+a:").expect("answer break pattern"));

/// Line break(s) followed by `Q:`. Ends the answer text.
static NEXT_QUESTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[\r\n]+q:").expect("next question pattern"));

/// Extracts `Q: ... / A: ...` pairs.
///
/// The question runs from a `Q:` marker to the first line break followed by `A:`.
/// The answer runs to the next line break followed by `Q:`, or to the end of input,
/// so multi-line answers are kept whole. Markers are case-insensitive. A `Q:` and
/// `A:` on the same line never pair up.
///
/// Scanning only moves forward and every search is a linear-time regex, so
/// large pasted inputs cannot trigger backtracking blowups.
pub fn try_parse_qa_text(text: &str) -> ParseResult {
    let mut questions = Vec::new();
    let mut pos = 0;

    while let Some(marker) = QUESTION_MARKER.find_at(text, pos) {
        let q_start = skip_whitespace(text, marker.end());

        let Some(answer_break) = ANSWER_BREAK.find_at(text, q_start) else {
            break;
        };
        // `A:` as the very last characters carries no answer text.
        if answer_break.end() == text.len() {
            break;
        }

        let a_start = skip_whitespace(text, answer_break.end());
        let a_end = NEXT_QUESTION
            .find_at(text, a_start)
            .map(|m| m.start())
            .unwrap_or(text.len());

        let q = text[q_start..answer_break.start()].trim();
        let a = text[a_start..a_end].trim();

        if !q.is_empty() {
            questions.push(QuestionRecord {
                id: questions.len() + 1,
                category: DEFAULT_CATEGORY.to_string(),
                q: q.to_string(),
                a: a.to_string(),
                choices: generate_choices(a),
                correct: 0,
            });
        }

        pos = a_end;
    }

    ParseResult::labelled(questions, ImportFormat::QaText)
}

/// Byte offset of the first non-whitespace character at or after `from`.
fn skip_whitespace(text: &str, from: usize) -> usize {
    text[from..]
        .char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map(|(i, _)| from + i)
        .unwrap_or(text.len())
}
