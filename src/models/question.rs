// src/models/question.rs

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Category assigned when the source data carries none.
pub const DEFAULT_CATEGORY: &str = "Imported";

/// File extensions accepted for uploaded import files.
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["json", "csv", "txt"];

/// Canonical question produced by every import format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// 1-based, sequential over the records actually emitted by one parse.
    pub id: usize,

    pub category: String,

    /// Question text. Never empty.
    pub q: String,

    /// Answer text. May be empty when the source gives neither answer nor choices.
    pub a: String,

    pub choices: Vec<String>,

    /// Zero-based index into `choices`.
    pub correct: usize,
}

/// Which interpretation the import pipeline applied to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImportFormat {
    #[serde(rename = "JSON")]
    Json,
    #[serde(rename = "CSV")]
    Csv,
    #[serde(rename = "Q&A Text")]
    QaText,
    #[serde(rename = "Flashcards")]
    Flashcards,
    #[serde(rename = "Unknown")]
    Unknown,
}

impl ImportFormat {
    pub fn label(&self) -> &'static str {
        match self {
            ImportFormat::Json => "JSON",
            ImportFormat::Csv => "CSV",
            ImportFormat::QaText => "Q&A Text",
            ImportFormat::Flashcards => "Flashcards",
            ImportFormat::Unknown => "Unknown",
        }
    }

    /// Maps an upload's file name to the format its extension suggests.
    ///
    /// `.txt` files may hold either Q&A text or flashcards; the hint names the
    /// first of the two the dispatcher tries. Returns `None` for any other extension.
    pub fn from_extension(filename: &str) -> Option<ImportFormat> {
        let ext = Path::new(filename).extension()?.to_str()?;
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(ImportFormat::Json),
            "csv" => Some(ImportFormat::Csv),
            "txt" => Some(ImportFormat::QaText),
            _ => None,
        }
    }
}

impl fmt::Display for ImportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Output of one import attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    pub questions: Vec<QuestionRecord>,
    pub format: ImportFormat,

    /// Only set for empty input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ParseResult {
    /// Labels the result with `format` when any question was found, `Unknown` otherwise.
    pub fn labelled(questions: Vec<QuestionRecord>, format: ImportFormat) -> Self {
        let format = if questions.is_empty() {
            ImportFormat::Unknown
        } else {
            format
        };
        Self {
            questions,
            format,
            error: None,
        }
    }

    pub fn unknown() -> Self {
        Self {
            questions: Vec::new(),
            format: ImportFormat::Unknown,
            error: None,
        }
    }

    pub fn empty_input() -> Self {
        Self {
            error: Some("Empty input".to_string()),
            ..Self::unknown()
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Summary shown to the user before the questions are committed.
    pub fn preview(&self, sample_size: usize) -> ImportPreview {
        ImportPreview {
            count: self.len(),
            format: self.format,
            sample: self.questions.iter().take(sample_size).cloned().collect(),
            error: self.error.clone(),
        }
    }
}

/// DTO for the import preview.
#[derive(Debug, Serialize, Deserialize)]
pub struct ImportPreview {
    pub count: usize,
    pub format: ImportFormat,
    pub sample: Vec<QuestionRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Query parameters for the import endpoints.
#[derive(Debug, Deserialize, Validate)]
pub struct ImportParams {
    /// Name of the uploaded file, when the text came from a file.
    #[validate(length(min = 1, max = 255), custom(function = validate_filename))]
    pub filename: Option<String>,
}

/// Validates that an uploaded file uses one of the accepted extensions.
fn validate_filename(filename: &str) -> Result<(), validator::ValidationError> {
    if ImportFormat::from_extension(filename).is_none() {
        return Err(validator::ValidationError::new("unsupported_file_extension"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_labels_serialize_verbatim() {
        let json = serde_json::to_string(&ImportFormat::QaText).unwrap();
        assert_eq!(json, "\"Q&A Text\"");
        assert_eq!(ImportFormat::Flashcards.to_string(), "Flashcards");
    }

    #[test]
    fn test_error_field_omitted_unless_set() {
        let value = serde_json::to_value(ParseResult::unknown()).unwrap();
        assert!(value.get("error").is_none());

        let value = serde_json::to_value(ParseResult::empty_input()).unwrap();
        assert_eq!(value["error"], "Empty input");
        assert_eq!(value["format"], "Unknown");
    }

    #[test]
    fn test_from_extension() {
        assert_eq!(ImportFormat::from_extension("deck.JSON"), Some(ImportFormat::Json));
        assert_eq!(ImportFormat::from_extension("deck.csv"), Some(ImportFormat::Csv));
        assert_eq!(ImportFormat::from_extension("notes.txt"), Some(ImportFormat::QaText));
        assert_eq!(ImportFormat::from_extension("slides.pdf"), None);
        assert_eq!(ImportFormat::from_extension("README"), None);
    }

    #[test]
    fn test_filename_validation() {
        let ok = ImportParams { filename: Some("quiz.csv".to_string()) };
        assert!(ok.validate().is_ok());

        let none = ImportParams { filename: None };
        assert!(none.validate().is_ok());

        let bad = ImportParams { filename: Some("quiz.exe".to_string()) };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_preview_caps_sample() {
        let questions = (1..=5)
            .map(|id| QuestionRecord {
                id,
                category: DEFAULT_CATEGORY.to_string(),
                q: format!("Q{}?", id),
                a: "A".to_string(),
                choices: vec!["A".to_string(), "B".to_string()],
                correct: 0,
            })
            .collect();
        let result = ParseResult::labelled(questions, ImportFormat::Csv);

        let preview = result.preview(3);
        assert_eq!(preview.count, 5);
        assert_eq!(preview.format, ImportFormat::Csv);
        assert_eq!(preview.sample.len(), 3);
        assert_eq!(preview.sample[2].id, 3);
    }
}
