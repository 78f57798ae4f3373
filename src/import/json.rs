// src/import/json.rs

use serde_json::Value;

use super::normalize::normalize_question;
use crate::models::question::{ImportFormat, ParseResult};

/// Parses `text` as JSON: an array of question objects or a single object.
///
/// Parse errors are swallowed and reported as `Unknown`. On success the label is
/// always `JSON`, even if no element yields a question.
pub fn try_parse_json(text: &str) -> ParseResult {
    let data: Value = match serde_json::from_str(text) {
        Ok(data) => data,
        Err(e) => {
            tracing::debug!("Input is not JSON: {}", e);
            return ParseResult::unknown();
        }
    };

    let items = match data {
        Value::Array(items) => items,
        other => vec![other],
    };

    // Ids stay dense: elements that yield no question do not consume one.
    let mut questions = Vec::with_capacity(items.len());
    for item in &items {
        if let Some(record) = normalize_question(item, questions.len()) {
            questions.push(record);
        }
    }

    ParseResult {
        questions,
        format: ImportFormat::Json,
        error: None,
    }
}
