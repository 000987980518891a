// src/web/handlers/resume_handlers.rs
//! Resume upload: text extraction, redacted preview and skill keywords

use rocket::form::Form;
use rocket::serde::json::Json;
use rocket::State;
use std::path::Path;

use crate::resume::{extract_skills, extract_text, ResumeError, ResumeFormat};
use crate::utils::preview;
use crate::web::types::*;

const PREVIEW_CHARS: usize = 500;

/// Client-supplied file name reduced to its final path component
fn display_name(upload: &UploadForm<'_>) -> Option<String> {
    let raw = upload.file.raw_name()?.dangerous_unsafe_unsanitized_raw().as_str();
    Path::new(raw)
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
}

pub async fn upload_resume_handler(
    mut upload: Form<UploadForm<'_>>,
    state: &State<AppState>,
) -> Result<Json<UploadResponse>, ApiError> {
    let filename = display_name(&upload).unwrap_or_else(|| "resume".to_string());
    let content_type = upload.file.content_type().map(|ct| ct.to_string());
    let size = upload.file.len();

    app_log!(info, "Resume upload: {} ({} bytes)", filename, size);

    let format = ResumeFormat::detect(content_type.as_deref(), Some(filename.as_str()))?;

    if size > state.upload_limit {
        return Err(ResumeError::TooLarge {
            size,
            limit: state.upload_limit,
        }
        .into());
    }

    let temp_path = std::env::temp_dir().join(format!("resume_upload_{}", uuid::Uuid::new_v4()));

    if let Err(e) = upload.file.persist_to(&temp_path).await {
        app_log!(error, "Failed to save uploaded file: {}", e);
        return Err(ApiError::internal(
            "Failed to process uploaded file".to_string(),
            "FILE_SAVE_ERROR",
        ));
    }

    let bytes = tokio::fs::read(&temp_path).await;
    let _ = tokio::fs::remove_file(&temp_path).await;

    let bytes = bytes.map_err(|e| {
        app_log!(error, "Failed to read uploaded file: {}", e);
        ApiError::internal("Failed to read uploaded file".to_string(), "FILE_READ_ERROR")
    })?;

    let text = extract_text(&bytes, format, state.upload_limit).inspect_err(|e| {
        app_log!(warn, "Resume extraction failed for {}: {}", filename, e);
    })?;

    let redacted = state.redactor.redact(&text);
    let skills = extract_skills(&text);

    app_log!(
        info,
        "Extracted {} characters and {} skills from {}",
        text.chars().count(),
        skills.len(),
        filename
    );

    Ok(Json(UploadResponse {
        status: ResponseStatus::Success,
        filename,
        text_length: redacted.chars().count(),
        anonymized_preview: preview(&redacted, PREVIEW_CHARS),
        skill_count: skills.len(),
        extracted_skills: skills,
        full_text: text,
    }))
}
