// src/import/csv.rs

use super::{choices::generate_choices, non_blank_lines};
use crate::models::question::{DEFAULT_CATEGORY, ImportFormat, ParseResult, QuestionRecord};

/// Column layout: question, answer, four choices, correct index.
const CHOICE_COLUMNS: std::ops::Range<usize> = 2..6;
const CORRECT_COLUMN: usize = 6;

/// Parses comma-separated rows of `question,answer[,c1,c2,c3,c4[,correct]]`.
///
/// * Needs at least two non-blank lines.
/// * A first line mentioning `question`, `q,` or `"q"` is treated as a header and skipped.
/// * Rows with fewer than two columns, or an empty question, are skipped.
pub fn try_parse_csv(text: &str) -> ParseResult {
    let lines = non_blank_lines(text);
    if lines.len() < 2 {
        return ParseResult::unknown();
    }

    let data_lines = if is_header(lines[0]) {
        &lines[1..]
    } else {
        &lines[..]
    };

    let mut questions = Vec::new();

    for line in data_lines {
        let cells = parse_csv_line(line);
        if cells.len() < 2 || cells[0].is_empty() {
            continue;
        }

        let choices = if cells.len() >= CHOICE_COLUMNS.end {
            cells[CHOICE_COLUMNS].to_vec()
        } else {
            generate_choices(&cells[1])
        };

        let correct = cells
            .get(CORRECT_COLUMN)
            .map(|raw| leading_index(raw))
            .unwrap_or(0);

        questions.push(QuestionRecord {
            id: questions.len() + 1,
            category: DEFAULT_CATEGORY.to_string(),
            q: cells[0].clone(),
            a: cells[1].clone(),
            choices,
            correct,
        });
    }

    ParseResult::labelled(questions, ImportFormat::Csv)
}

fn is_header(line: &str) -> bool {
    let lower = line.to_lowercase();
    lower.contains("question") || lower.contains("q,") || lower.contains("\"q\"")
}

/// Splits one CSV line on commas outside double quotes.
///
/// Quotes only toggle the quoted state and are dropped from the output;
/// there is no escaping. Every cell is trimmed.
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                cells.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    cells.push(current.trim().to_string());

    cells
}

/// Reads the leading integer of a cell (`"2abc"` gives 2). Anything else, negatives included, gives 0.
fn leading_index(raw: &str) -> usize {
    let raw = raw.trim_start();
    let digits = raw.strip_prefix('+').unwrap_or(raw);
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse().unwrap_or(0)
}
