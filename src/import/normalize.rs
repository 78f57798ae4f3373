// src/import/normalize.rs

use serde_json::{Map, Number, Value};

use super::choices::generate_choices;
use crate::models::question::{DEFAULT_CATEGORY, QuestionRecord};

/// Accepted keys per field, in priority order.
const QUESTION_KEYS: [&str; 4] = ["q", "question", "Q", "Question"];
const ANSWER_KEYS: [&str; 4] = ["a", "answer", "A", "Answer"];
const CHOICE_KEYS: [&str; 3] = ["choices", "options", "Options"];
const CORRECT_KEYS: [&str; 3] = ["correct", "correctIndex", "answer_index"];
const CATEGORY_KEYS: [&str; 2] = ["category", "Category"];

/// Converts one loosely-structured JSON object into a `QuestionRecord`.
///
/// * Each field is resolved from its alias list, first usable key wins.
/// * Returns `None` when no question text resolves (or `item` is not an object).
/// * Choices that are missing or shorter than 2 are replaced by the generated set,
///   and any supplied `correct` index is discarded with them.
/// * `index` is the 0-based position among emitted records; the record id is `index + 1`.
pub fn normalize_question(item: &Value, index: usize) -> Option<QuestionRecord> {
    let obj = item.as_object()?;

    let q = first_text(obj, &QUESTION_KEYS)?;
    let a = first_text(obj, &ANSWER_KEYS);

    let supplied = CHOICE_KEYS
        .iter()
        .find_map(|key| obj.get(*key).and_then(Value::as_array));

    let (choices, correct) = match supplied {
        Some(list) if list.len() >= 2 => {
            let choices: Vec<String> = list.iter().map(choice_text).collect();
            let correct = CORRECT_KEYS
                .iter()
                .find_map(|key| obj.get(*key).filter(|v| !v.is_null()))
                .map(index_value)
                .unwrap_or(0);
            (choices, correct)
        }
        _ => (generate_choices(a.as_deref().unwrap_or("")), 0),
    };

    let category = first_text(obj, &CATEGORY_KEYS).unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

    let a = a
        .or_else(|| choices.get(correct).cloned())
        .unwrap_or_default();

    Some(QuestionRecord {
        id: index + 1,
        category,
        q,
        a,
        choices,
        correct,
    })
}

/// First alias whose value reads as non-empty text.
fn first_text(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| obj.get(*key).and_then(scalar_text))
}

/// Text for scalar values. Empty strings, `0`, `false`, `null` and containers yield `None`.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(number_text(n)),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

fn choice_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Number(n) => number_text(n),
        other => other.to_string(),
    }
}

/// Renders integral floats without a fraction (`1.0` becomes `"1"`).
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        _ => n.to_string(),
    }
}

/// Reads a `correct` index. Values that are not a non-negative integer become 0.
fn index_value(value: &Value) -> usize {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| {
                n.as_f64()
                    .filter(|f| *f >= 0.0 && f.fract() == 0.0)
                    .map(|f| f as u64)
            })
            .and_then(|i| usize::try_from(i).ok())
            .unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}
