// src/import/choices.rs

/// Placeholder distractors appended after the real answer.
pub const PLACEHOLDER_DISTRACTORS: [&str; 3] = [
    "Alternative answer 1",
    "Alternative answer 2",
    "Alternative answer 3",
];

/// Builds the four-option choice set used when a source supplies no usable choices.
///
/// The real answer is always at index 0. The distractors are fixed placeholders
/// with no relation to the question.
pub fn generate_choices(answer: &str) -> Vec<String> {
    let mut choices = Vec::with_capacity(1 + PLACEHOLDER_DISTRACTORS.len());
    choices.push(answer.to_string());
    choices.extend(PLACEHOLDER_DISTRACTORS.iter().map(|d| d.to_string()));
    choices
}
