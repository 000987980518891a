// src/core/prompts.rs
//! Prompt text sent to text-generation providers

use crate::types::{AnalysisRequest, MarketSignal};
use crate::utils::truncate_chars;

/// Liveness probe sent once per candidate at start-up.
pub const PROBE_PROMPT: &str = "Respond with: OK";

const ANALYSIS_SCHEMA: &str = r#"{
  "skill_gaps": {
    "technical": ["skill"],
    "soft_skills": ["skill"],
    "severity": "Low | Medium | High",
    "justification": "why these gaps matter"
  },
  "career_path": {
    "immediate": {"role": "title", "requirements": ["requirement"], "salary_range": "$X-$Y"},
    "mid_term": {"role": "title", "requirements": ["requirement"], "salary_range": "$X-$Y"},
    "long_term": {"role": "title", "requirements": ["requirement"], "salary_range": "$X-$Y"}
  },
  "learning_roadmap": {
    "courses": [{"name": "course", "platform": "platform", "duration": "X weeks", "focus": "topic"}],
    "projects": ["project"],
    "resources": ["resource"],
    "timeline": "overall timeline"
  },
  "market_insights": {
    "demand_trend": "trend",
    "emerging_tech": ["technology"],
    "industry_advice": "advice"
  }
}"#;

const TREND_SCHEMA: &str = r#"{
  "emerging_skills": [{"skill": "name", "growth": "growth description", "impact": "High | Medium | Low"}],
  "declining_skills": [{"skill": "name", "reason": "why it is declining"}],
  "future_predictions": [{"skill": "name", "timeline": "1-2 years", "impact": "expected impact"}],
  "salary_impact": "how these skills affect compensation"
}"#;

/// Analysis prompt for `request`, targeting the already-resolved `role`
pub fn build_analysis_prompt(
    request: &AnalysisRequest,
    role: &str,
    signal: &MarketSignal,
    excerpt_chars: usize,
) -> Result<String, serde_json::Error> {
    let market = serde_json::to_string_pretty(signal)?;
    let skills = if request.skills.is_empty() {
        "(none listed)".to_string()
    } else {
        request.skills.join(", ")
    };

    Ok(format!(
        "You are a career advisor with current knowledge of hiring markets.\n\n\
         Target role: {role}\n\
         Industry: {industry}\n\
         Experience level: {level}\n\n\
         Resume excerpt:\n{resume}\n\n\
         Current skills: {skills}\n\n\
         Market data for this role:\n{market}\n\n\
         Identify the candidate's technical and soft skill gaps for the target role, \
         a three-step career path with requirements and salary ranges, a learning \
         roadmap with concrete courses and projects, and market insights for the industry.\n\n\
         Respond with a single JSON object matching this structure and nothing else:\n{schema}\n",
        role = role,
        industry = request.industry,
        level = request.experience_level,
        resume = truncate_chars(&request.resume_text, excerpt_chars),
        skills = skills,
        market = market,
        schema = ANALYSIS_SCHEMA,
    ))
}

pub fn build_trend_prompt(role: &str, years_back: u32) -> String {
    format!(
        "You are a labor-market analyst. Describe how the skills required for the role \
         \"{role}\" have evolved over the last {years} years, which skills are emerging, \
         which are declining, what you expect next, and how these shifts affect salaries.\n\n\
         Respond with a single JSON object matching this structure and nothing else:\n{schema}\n",
        role = role,
        years = years_back,
        schema = TREND_SCHEMA,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MarketSignalProvider;
    use crate::types::ExperienceLevel;

    #[test]
    fn test_analysis_prompt_contents() {
        let request = AnalysisRequest {
            resume_text: "x".repeat(50),
            skills: vec!["SQL".to_string(), "Python".to_string()],
            target_role: "data scientist".to_string(),
            experience_level: ExperienceLevel::Senior,
            industry: "Healthcare".to_string(),
        };
        let signal = MarketSignalProvider::new().lookup("Data Scientist", "Healthcare");

        let prompt = build_analysis_prompt(&request, "Data Scientist", &signal, 10).unwrap();

        assert!(prompt.contains("Target role: Data Scientist"));
        assert!(prompt.contains("Industry: Healthcare"));
        assert!(prompt.contains("Experience level: Senior"));
        assert!(prompt.contains("Current skills: SQL, Python"));
        assert!(prompt.contains(&format!("{}\n", "x".repeat(10))));
        assert!(!prompt.contains(&"x".repeat(11)));
        assert!(prompt.contains("\"salary_range\": \"$120,000-$160,000\""));
        assert!(prompt.contains("\"learning_roadmap\""));
    }

    #[test]
    fn test_trend_prompt() {
        let prompt = build_trend_prompt("Data Analyst", 5);
        assert!(prompt.contains("\"Data Analyst\""));
        assert!(prompt.contains("last 5 years"));
        assert!(prompt.contains("\"declining_skills\""));
    }
}
