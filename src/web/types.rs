// src/web/types.rs
use chrono::{DateTime, Utc};
use rocket::form::FromForm;
use rocket::fs::TempFile;
use rocket::http::Status;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use rocket::serde::Serialize;
use rocket::Request;

use crate::core::AnalysisEngine;
use crate::resume::{Redactor, ResumeError, ResumeSample, SampleDataset};
use crate::types::{AnalysisResult, AnalysisSource, BaselineReport, SkillTrends};

/// Everything the request handlers share; read-only after start-up.
pub struct AppState {
    pub engine: AnalysisEngine,
    pub redactor: Box<dyn Redactor>,
    pub dataset: SampleDataset,
    pub upload_limit: u64,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(crate = "rocket::serde", rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Healthy,
    Error,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ServiceInfoResponse {
    pub message: String,
    pub version: String,
    pub status: String,
    pub analyzer_available: bool,
    pub data_loaded: bool,
    pub features: Vec<String>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct HealthResponse {
    pub status: ResponseStatus,
    pub timestamp: DateTime<Utc>,
    pub analyzer_available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_model: Option<String>,
    pub data_loaded: bool,
    pub ner_available: bool,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct RolesResponse {
    pub status: ResponseStatus,
    pub roles: Vec<String>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct SamplesResponse {
    pub status: ResponseStatus,
    pub count: usize,
    pub samples: Vec<ResumeSample>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct UploadResponse {
    pub status: ResponseStatus,
    pub filename: String,
    pub text_length: usize,
    pub full_text: String,
    pub anonymized_preview: String,
    pub extracted_skills: Vec<String>,
    pub skill_count: usize,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct AnalysisResponse {
    pub status: ResponseStatus,
    pub analysis: AnalysisResult,
    pub role: String,
    pub industry: String,
    pub analysis_source: AnalysisSource,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct TrendsResponse {
    pub status: ResponseStatus,
    pub role: String,
    pub trends: SkillTrends,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct BaselineResponse {
    pub status: ResponseStatus,
    #[serde(flatten)]
    pub report: BaselineReport,
}

#[derive(Serialize, Debug)]
#[serde(crate = "rocket::serde")]
pub struct ErrorResponse {
    pub status: ResponseStatus,
    pub error: String,
    pub error_code: String,
    pub suggestions: Vec<String>,
}

impl ErrorResponse {
    pub fn new(error: String, error_code: &str, suggestions: Vec<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            error,
            error_code: error_code.to_string(),
            suggestions,
        }
    }
}

/// Error body paired with the HTTP status it is sent with.
#[derive(Debug)]
pub struct ApiError {
    pub status: Status,
    pub body: ErrorResponse,
}

impl ApiError {
    pub fn new(status: Status, error: String, error_code: &str, suggestions: &[&str]) -> Self {
        Self {
            status,
            body: ErrorResponse::new(
                error,
                error_code,
                suggestions.iter().map(|s| s.to_string()).collect(),
            ),
        }
    }

    pub fn bad_request(error: String, error_code: &str, suggestions: &[&str]) -> Self {
        Self::new(Status::BadRequest, error, error_code, suggestions)
    }

    pub fn internal(error: String, error_code: &str) -> Self {
        Self::new(
            Status::InternalServerError,
            error,
            error_code,
            &["Try again in a few moments"],
        )
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        (self.status, Json(self.body)).respond_to(request)
    }
}

impl From<ResumeError> for ApiError {
    fn from(err: ResumeError) -> Self {
        let message = err.to_string();
        match err {
            ResumeError::UnsupportedFormat(_) => Self::bad_request(
                message,
                "INVALID_FORMAT",
                &["Upload a PDF file (.pdf)", "Upload a plain text file (.txt)"],
            ),
            ResumeError::TooLarge { .. } => Self::new(
                Status::PayloadTooLarge,
                message,
                "FILE_TOO_LARGE",
                &["Compress your resume file", "Use a smaller file size (max 10MB)"],
            ),
            ResumeError::PdfExtraction(_) => Self::bad_request(
                message,
                "PDF_EXTRACTION_FAILED",
                &["Make sure the PDF is not scanned or password protected"],
            ),
            ResumeError::Empty => Self::bad_request(
                message,
                "EMPTY_RESUME",
                &["Upload a resume that contains selectable text"],
            ),
        }
    }
}

#[derive(FromForm)]
pub struct UploadForm<'f> {
    pub file: TempFile<'f>,
}
