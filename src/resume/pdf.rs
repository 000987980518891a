// src/resume/pdf.rs
use once_cell::sync::Lazy;
use regex::Regex;

use super::ResumeError;

static HYPHEN_JOIN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\w)-\n(\w)").expect("valid regex"));
static BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").expect("valid regex"));
static SPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]{2,}").expect("valid regex"));

/// Normalize extracted page text: rejoin hyphenated line breaks, unify line
/// endings, collapse blank lines and runs of spaces
pub fn clean_text(text: &str) -> String {
    let joined = HYPHEN_JOIN.replace_all(text, "${1}${2}");
    let unified = joined.replace('\r', "\n");
    let lines = BLANK_LINES.replace_all(&unified, "\n");
    SPACE_RUNS.replace_all(&lines, " ").trim().to_string()
}

/// Extract and clean the text of an in-memory PDF
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ResumeError> {
    let raw = pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
        app_log!(warn, "PDF extraction failed: {}", e);
        ResumeError::PdfExtraction(e.to_string())
    })?;

    Ok(clean_text(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text("data-\ndriven analyst"), "datadriven analyst");
        assert_eq!(clean_text("line one\r\n\r\nline two"), "line one\nline two");
        assert_eq!(clean_text("  Python    and\t\tSQL  "), "Python and SQL");
        assert_eq!(clean_text("a\n\n\n\nb"), "a\nb");
    }

    #[test]
    fn test_clean_text_keeps_single_hyphens() {
        assert_eq!(clean_text("full-stack developer"), "full-stack developer");
    }
}
