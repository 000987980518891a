// src/types/baseline.rs
use serde::{Deserialize, Serialize};

use super::analysis::{AnalysisSource, ExperienceLevel};

/// Output of the baseline skill-coverage scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineReport {
    pub analysis_source: AnalysisSource,
    pub target_role: String,
    pub experience_level: ExperienceLevel,
    pub industry: String,
    /// Coverage score in `0.0..=1.0`, two decimals.
    pub score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub recommendations: Vec<String>,
    pub notes: String,
}
