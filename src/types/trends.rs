// src/types/trends.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::analysis::AnalysisSource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergingSkill {
    pub skill: String,
    pub growth: String,
    pub impact: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecliningSkill {
    pub skill: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillPrediction {
    pub skill: String,
    pub timeline: String,
    pub impact: String,
}

/// Trend content a provider is asked for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendBody {
    pub emerging_skills: Vec<EmergingSkill>,
    pub declining_skills: Vec<DecliningSkill>,
    pub future_predictions: Vec<SkillPrediction>,
    pub salary_impact: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillTrends {
    pub emerging_skills: Vec<EmergingSkill>,
    pub declining_skills: Vec<DecliningSkill>,
    pub future_predictions: Vec<SkillPrediction>,
    pub salary_impact: String,
    pub role: String,
    pub analysis_period: String,
    pub analysis_source: AnalysisSource,
    pub analysis_timestamp: DateTime<Utc>,
}

impl SkillTrends {
    pub fn assemble(
        body: TrendBody,
        role: &str,
        years_back: u32,
        source: AnalysisSource,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            emerging_skills: body.emerging_skills,
            declining_skills: body.declining_skills,
            future_predictions: body.future_predictions,
            salary_impact: body.salary_impact,
            role: role.to_string(),
            analysis_period: format!("Last {} years", years_back),
            analysis_source: source,
            analysis_timestamp: timestamp,
        }
    }
}
