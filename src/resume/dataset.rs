// src/resume/dataset.rs
//! Sample resume corpus served by `/sample-resumes`

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeSample {
    pub resume_text: String,
    pub extracted_skills: Vec<String>,
    pub positions: String,
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(default)]
    resume_text: Option<String>,
    #[serde(default)]
    extracted_skills: Option<String>,
    #[serde(default)]
    positions: Option<String>,
}

impl From<CsvRow> for ResumeSample {
    fn from(row: CsvRow) -> Self {
        Self {
            resume_text: row.resume_text.unwrap_or_default(),
            extracted_skills: parse_skill_list(row.extracted_skills.as_deref().unwrap_or("")),
            positions: row.positions.unwrap_or_default(),
        }
    }
}

/// Parse `['python', 'sql']` style list literals as well as plain comma lists
pub fn parse_skill_list(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(trimmed);

    inner
        .split(',')
        .map(|item| item.trim().trim_matches(|c| c == '\'' || c == '"').trim())
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone)]
pub struct SampleDataset {
    samples: Vec<ResumeSample>,
    source: Option<PathBuf>,
}

impl SampleDataset {
    /// Load the first readable CSV among `paths`, or fall back to mock samples
    pub fn load(paths: &[PathBuf]) -> Self {
        for path in paths {
            if !path.exists() {
                continue;
            }
            match Self::read_csv(path) {
                Ok(samples) => {
                    app_log!(info, "Loaded {} resumes from {}", samples.len(), path.display());
                    return Self {
                        samples,
                        source: Some(path.clone()),
                    };
                }
                Err(e) => app_log!(warn, "Skipping dataset {}: {:#}", path.display(), e),
            }
        }

        app_log!(warn, "No resume dataset found, serving mock samples");
        Self::mock()
    }

    fn read_csv(path: &Path) -> Result<Vec<ResumeSample>> {
        let mut reader = csv::Reader::from_path(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;

        reader
            .deserialize::<CsvRow>()
            .map(|row| row.map(ResumeSample::from).map_err(anyhow::Error::from))
            .collect::<Result<Vec<_>>>()
            .with_context(|| format!("Malformed CSV in {}", path.display()))
    }

    pub fn mock() -> Self {
        let sample = |text: &str, skills: &[&str], position: &str| ResumeSample {
            resume_text: text.to_string(),
            extracted_skills: skills.iter().map(|s| s.to_string()).collect(),
            positions: position.to_string(),
        };

        Self {
            samples: vec![
                sample(
                    "Experienced data analyst with 3 years in Python, SQL, and data visualization. Strong analytical skills and business acumen.",
                    &["python", "sql", "data analysis"],
                    "Data Analyst",
                ),
                sample(
                    "Software engineer specializing in web development with JavaScript, React, and Node.js. Experience with cloud platforms.",
                    &["javascript", "react", "node.js", "cloud"],
                    "Software Engineer",
                ),
            ],
            source: None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.source.is_some()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// First `count` samples
    pub fn samples(&self, count: usize) -> &[ResumeSample] {
        &self.samples[..count.min(self.samples.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skill_list() {
        assert_eq!(parse_skill_list("['python', 'sql']"), vec!["python", "sql"]);
        assert_eq!(parse_skill_list("python, power bi ,"), vec!["python", "power bi"]);
        assert_eq!(parse_skill_list("[]"), Vec::<String>::new());
        assert_eq!(parse_skill_list(""), Vec::<String>::new());
    }

    #[test]
    fn test_missing_dataset_uses_mock() {
        let dataset = SampleDataset::load(&[PathBuf::from("/nonexistent/cleaned_resumes.csv")]);
        assert!(!dataset.is_loaded());
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.samples(1)[0].positions, "Data Analyst");
        assert_eq!(dataset.samples(10).len(), 2);
    }

    #[test]
    fn test_load_csv() {
        let path = std::env::temp_dir().join(format!("resumes-{}.csv", uuid::Uuid::new_v4()));
        std::fs::write(
            &path,
            "resume_text,extracted_skills,positions,extra\n\
             \"Analyst, SQL reporting\",\"['sql', 'excel']\",Data Analyst,x\n\
             Backend dev,,,y\n",
        )
        .unwrap();

        let dataset = SampleDataset::load(&[PathBuf::from("/nonexistent.csv"), path.clone()]);
        std::fs::remove_file(&path).ok();

        assert!(dataset.is_loaded());
        let samples = dataset.samples(3);
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].resume_text, "Analyst, SQL reporting");
        assert_eq!(samples[0].extracted_skills, vec!["sql", "excel"]);
        assert_eq!(samples[1].positions, "");
        assert!(samples[1].extracted_skills.is_empty());
    }
}
