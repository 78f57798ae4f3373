// src/handlers/import.rs

use axum::{
    Json,
    body::Bytes,
    extract::{
        Query, State,
        rejection::{BytesRejection, QueryRejection},
    },
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    config::Config,
    error::AppError,
    import::{PARSERS, parse_import_data},
    models::question::{ACCEPTED_EXTENSIONS, ImportFormat, ImportParams, ParseResult},
};

/// Parses raw import text and returns every detected question.
///
/// * Body: the pasted text or uploaded file contents (UTF-8).
/// * Optional `filename` query: must end in `.json`, `.csv` or `.txt`.
/// * Returns the `ParseResult` verbatim, including the empty-input and no-match cases.
pub async fn parse_import(
    params: Result<Query<ImportParams>, QueryRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, AppError> {
    let result = run_import(params, body).await?;
    Ok(Json(result))
}

/// Parses raw import text and returns the count, format and first few questions.
pub async fn preview_import(
    State(config): State<Config>,
    params: Result<Query<ImportParams>, QueryRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, AppError> {
    let result = run_import(params, body).await?;
    Ok(Json(result.preview(config.preview_sample)))
}

/// Lists supported formats in detection order and the accepted upload extensions.
pub async fn list_formats() -> impl IntoResponse {
    let formats: Vec<ImportFormat> = PARSERS.iter().map(|(format, _)| *format).collect();

    Json(serde_json::json!({
        "formats": formats,
        "extensions": ACCEPTED_EXTENSIONS,
    }))
}

async fn run_import(
    params: Result<Query<ImportParams>, QueryRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<ParseResult, AppError> {
    let Query(params) = params?;
    if let Err(validation_errors) = params.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let body = body?;
    let text = std::str::from_utf8(&body)?.to_owned();
    let size = text.len();

    // Parsing is CPU-bound; keep it off the async workers.
    let result = tokio::task::spawn_blocking(move || parse_import_data(&text)).await?;

    let hint = params.filename.as_deref().and_then(ImportFormat::from_extension);
    if let Some(hint) = hint {
        if hint != result.format {
            tracing::debug!("File extension suggested {}, detected {}", hint, result.format);
        }
    }

    tracing::info!(
        "Parsed import: {} bytes, format {}, {} question(s)",
        size,
        result.format,
        result.len()
    );

    Ok(result)
}
