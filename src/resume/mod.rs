// src/resume/mod.rs
//! Resume intake collaborators: text extraction, skill keywords, redaction
//! and the sample corpus

pub mod dataset;
pub mod pdf;
pub mod redact;
pub mod skills;

use thiserror::Error;

pub use dataset::{ResumeSample, SampleDataset};
pub use pdf::{clean_text, extract_pdf_text};
pub use redact::{LexiconRedactor, PassThroughRedactor, Redactor};
pub use skills::extract_skills;

#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("File too large: {size} bytes (limit {limit} bytes)")]
    TooLarge { size: u64, limit: u64 },

    #[error("PDF extraction failed: {0}")]
    PdfExtraction(String),

    #[error("No text could be extracted from the file")]
    Empty,
}

/// Upload shape accepted by the intake pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeFormat {
    Pdf,
    PlainText,
}

impl ResumeFormat {
    /// Detect from the declared content type, then the file extension
    pub fn detect(content_type: Option<&str>, filename: Option<&str>) -> Result<Self, ResumeError> {
        let ext = filename.and_then(crate::utils::get_file_extension);

        match content_type.map(|ct| ct.to_lowercase()) {
            Some(ct) if ct.starts_with("application/pdf") => return Ok(Self::Pdf),
            Some(ct) if ct.starts_with("text/plain") => return Ok(Self::PlainText),
            _ => {}
        }

        match ext.as_deref() {
            Some("pdf") => Ok(Self::Pdf),
            Some("txt") | Some("text") => Ok(Self::PlainText),
            _ => Err(ResumeError::UnsupportedFormat(
                content_type
                    .map(str::to_string)
                    .or_else(|| ext.clone())
                    .unwrap_or_else(|| "unknown".to_string()),
            )),
        }
    }
}

/// Extract cleaned resume text from uploaded bytes
pub fn extract_text(bytes: &[u8], format: ResumeFormat, limit: u64) -> Result<String, ResumeError> {
    let size = bytes.len() as u64;
    if size > limit {
        return Err(ResumeError::TooLarge { size, limit });
    }

    let text = match format {
        ResumeFormat::Pdf => extract_pdf_text(bytes)?,
        ResumeFormat::PlainText => String::from_utf8_lossy(bytes).trim().to_string(),
    };

    if text.trim().is_empty() {
        return Err(ResumeError::Empty);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_format() {
        assert_eq!(
            ResumeFormat::detect(Some("application/pdf"), Some("cv.bin")).unwrap(),
            ResumeFormat::Pdf
        );
        assert_eq!(
            ResumeFormat::detect(Some("text/plain; charset=utf-8"), None).unwrap(),
            ResumeFormat::PlainText
        );
        assert_eq!(
            ResumeFormat::detect(Some("application/octet-stream"), Some("resume.PDF")).unwrap(),
            ResumeFormat::Pdf
        );
        assert!(matches!(
            ResumeFormat::detect(Some("image/png"), Some("photo.png")),
            Err(ResumeError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_extract_plain_text() {
        let text = extract_text(b"  Python and SQL  \n", ResumeFormat::PlainText, 1024).unwrap();
        assert_eq!(text, "Python and SQL");
    }

    #[test]
    fn test_size_limit() {
        assert!(matches!(
            extract_text(&[b'a'; 32], ResumeFormat::PlainText, 16),
            Err(ResumeError::TooLarge { size: 32, limit: 16 })
        ));
    }

    #[test]
    fn test_empty_text_rejected() {
        assert!(matches!(
            extract_text(b"   \n\t", ResumeFormat::PlainText, 1024),
            Err(ResumeError::Empty)
        ));
        assert!(matches!(
            extract_text(b"not a pdf", ResumeFormat::Pdf, 1024),
            Err(ResumeError::PdfExtraction(_))
        ));
    }
}
