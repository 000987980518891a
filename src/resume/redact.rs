// src/resume/redact.rs
//! Named-entity redaction for resume previews

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::Path;

pub trait Redactor: Send + Sync {
    fn redact(&self, text: &str) -> String;

    /// Whether this redactor changes anything at all
    fn is_active(&self) -> bool {
        true
    }
}

/// Leaves text untouched; used when no lexicon is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassThroughRedactor;

impl Redactor for PassThroughRedactor {
    fn redact(&self, text: &str) -> String {
        text.to_string()
    }

    fn is_active(&self) -> bool {
        false
    }
}

/// Replaces every listed entity with `[LABEL_REDACTED]`.
///
/// The lexicon is a YAML map from label to entity names:
///
/// ```yaml
/// PERSON: ["Jane Doe"]
/// ORG: ["Acme Corp"]
/// GPE: ["Springfield"]
/// ```
#[derive(Debug, Clone)]
pub struct LexiconRedactor {
    // (entity, replacement) sorted longest entity first
    entries: Vec<(String, String)>,
}

impl LexiconRedactor {
    pub fn from_yaml(content: &str) -> Result<Self> {
        let lexicon: BTreeMap<String, Vec<String>> =
            serde_yaml::from_str(content).context("Invalid redaction lexicon")?;

        let mut entries: Vec<(String, String)> = lexicon
            .into_iter()
            .flat_map(|(label, names)| {
                let replacement = format!("[{}_REDACTED]", label.trim().to_uppercase());
                names
                    .into_iter()
                    .map(|name| name.trim().to_string())
                    .filter(|name| !name.is_empty())
                    .map(move |name| (name, replacement.clone()))
            })
            .collect();

        entries.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));
        entries.dedup_by(|a, b| a.0 == b.0);

        Ok(Self { entries })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read lexicon {}", path.display()))?;
        let redactor = Self::from_yaml(&content)?;
        app_log!(
            info,
            "Loaded redaction lexicon with {} entities from {}",
            redactor.entries.len(),
            path.display()
        );
        Ok(redactor)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Redactor for LexiconRedactor {
    fn redact(&self, text: &str) -> String {
        self.entries
            .iter()
            .fold(text.to_string(), |acc, (entity, replacement)| {
                acc.replace(entity.as_str(), replacement)
            })
    }
}

/// Lexicon redactor when `path` is configured and loads, pass-through otherwise
pub fn redactor_from_config(path: Option<&Path>) -> Box<dyn Redactor> {
    let Some(path) = path else {
        return Box::new(PassThroughRedactor);
    };

    match LexiconRedactor::load(path) {
        Ok(redactor) => Box::new(redactor),
        Err(e) => {
            app_log!(warn, "Redaction disabled: {:#}", e);
            Box::new(PassThroughRedactor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEXICON: &str = r#"
PERSON: ["Jane Doe", "Jane"]
org: ["Acme Corp"]
GPE: ["Springfield", ""]
"#;

    #[test]
    fn test_lexicon_redaction() {
        let redactor = LexiconRedactor::from_yaml(LEXICON).unwrap();
        assert_eq!(redactor.len(), 4);

        let text = "Jane Doe worked at Acme Corp in Springfield. Jane led analytics.";
        assert_eq!(
            redactor.redact(text),
            "[PERSON_REDACTED] worked at [ORG_REDACTED] in [GPE_REDACTED]. [PERSON_REDACTED] led analytics."
        );
    }

    #[test]
    fn test_pass_through() {
        let redactor = PassThroughRedactor;
        assert_eq!(redactor.redact("Jane Doe"), "Jane Doe");
        assert!(!redactor.is_active());
    }

    #[test]
    fn test_invalid_lexicon() {
        assert!(LexiconRedactor::from_yaml("- just\n- a list").is_err());
    }

    #[test]
    fn test_missing_lexicon_degrades_to_pass_through() {
        let redactor = redactor_from_config(Some(Path::new("/nonexistent/lexicon.yaml")));
        assert!(!redactor.is_active());
        assert!(redactor_from_config(None).redact("Acme").contains("Acme"));
    }
}
