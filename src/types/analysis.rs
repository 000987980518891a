// src/types/analysis.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::market::MarketSignal;

pub const DEFAULT_TARGET_ROLE: &str = "Data Analyst";
pub const DEFAULT_INDUSTRY: &str = "Technology";

fn default_target_role() -> String {
    DEFAULT_TARGET_ROLE.to_string()
}

fn default_industry() -> String {
    DEFAULT_INDUSTRY.to_string()
}

/// Inbound analysis request. Skills are matched case-insensitively and may repeat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub resume_text: String,
    pub skills: Vec<String>,
    #[serde(default = "default_target_role")]
    pub target_role: String,
    #[serde(default)]
    pub experience_level: ExperienceLevel,
    #[serde(default = "default_industry")]
    pub industry: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[serde(alias = "entry", alias = "Entry-Level", alias = "Junior", alias = "junior")]
    Entry,
    #[default]
    #[serde(
        alias = "intermediate",
        alias = "Mid-Level",
        alias = "mid-level",
        alias = "Mid",
        alias = "mid"
    )]
    Intermediate,
    #[serde(alias = "senior", alias = "Lead", alias = "lead")]
    Senior,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Entry => "Entry",
            Self::Intermediate => "Intermediate",
            Self::Senior => "Senior",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    #[serde(alias = "low", alias = "LOW")]
    Low,
    #[serde(alias = "medium", alias = "MEDIUM")]
    Medium,
    #[serde(alias = "high", alias = "HIGH")]
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGaps {
    pub technical: Vec<String>,
    pub soft_skills: Vec<String>,
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerStep {
    pub role: String,
    pub requirements: Vec<String>,
    pub salary_range: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerPath {
    pub immediate: CareerStep,
    pub mid_term: CareerStep,
    pub long_term: CareerStep,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    pub platform: String,
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningRoadmap {
    pub courses: Vec<Course>,
    pub projects: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<String>,
    pub timeline: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketInsights {
    pub demand_trend: String,
    pub emerging_tech: Vec<String>,
    pub industry_advice: String,
}

/// The advisory part of an analysis: what a provider is asked to produce and
/// what the fallback analyzer fills from its templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisBody {
    pub skill_gaps: SkillGaps,
    pub career_path: CareerPath,
    pub learning_roadmap: LearningRoadmap,
    pub market_insights: MarketInsights,
}

/// Where an analysis came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum AnalysisSource {
    Ai { provider: String, model: String },
    EnhancedFallback,
    FallbackAnalyzer,
}

impl AnalysisSource {
    pub fn ai(provider: &str, model: &str) -> Self {
        Self::Ai {
            provider: provider.to_string(),
            model: model.to_string(),
        }
    }

    pub fn is_ai(&self) -> bool {
        matches!(self, Self::Ai { .. })
    }
}

impl fmt::Display for AnalysisSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ai { provider, model } => write!(f, "ai:{}:{}", provider, model),
            Self::EnhancedFallback => f.write_str("enhanced_fallback"),
            Self::FallbackAnalyzer => f.write_str("fallback_analyzer"),
        }
    }
}

impl From<AnalysisSource> for String {
    fn from(source: AnalysisSource) -> Self {
        source.to_string()
    }
}

impl TryFrom<String> for AnalysisSource {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "enhanced_fallback" => Ok(Self::EnhancedFallback),
            "fallback_analyzer" => Ok(Self::FallbackAnalyzer),
            other => {
                let rest = other
                    .strip_prefix("ai:")
                    .ok_or_else(|| format!("Unknown analysis source: {}", other))?;
                // Model names may themselves contain ':'
                let (provider, model) = rest
                    .split_once(':')
                    .ok_or_else(|| format!("Malformed AI analysis source: {}", other))?;
                Ok(Self::ai(provider, model))
            }
        }
    }
}

/// Full analysis returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub skill_gaps: SkillGaps,
    pub career_path: CareerPath,
    pub learning_roadmap: LearningRoadmap,
    pub market_insights: MarketInsights,
    pub real_time_insights: MarketSignal,
    pub analysis_timestamp: DateTime<Utc>,
    pub analysis_source: AnalysisSource,
}

impl AnalysisResult {
    pub fn assemble(
        body: AnalysisBody,
        signal: MarketSignal,
        source: AnalysisSource,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            skill_gaps: body.skill_gaps,
            career_path: body.career_path,
            learning_roadmap: body.learning_roadmap,
            market_insights: body.market_insights,
            real_time_insights: signal,
            analysis_timestamp: timestamp,
            analysis_source: source,
        }
    }
}
