// src/core/baseline.rs
//! Lightweight skill-coverage scorer against per-role baseline skill lists

use std::collections::BTreeSet;

use crate::core::roles::resolve_role;
use crate::types::{AnalysisRequest, AnalysisSource, BaselineReport, ExperienceLevel};

const FOCUS_LIMIT: usize = 5;

fn baseline_for(role: &str) -> &'static [&'static str] {
    match role {
        "Data Scientist" => &[
            "python", "sql", "pandas", "numpy", "scikit-learn", "pytorch", "tensorflow", "ml",
            "statistics", "nlp",
        ],
        "Software Engineer" => &[
            "python", "java", "javascript", "react", "node.js", "git", "linux", "docker", "sql",
            "rest",
        ],
        "Machine Learning Engineer" => &[
            "python", "pytorch", "tensorflow", "ml", "docker", "kubernetes", "aws", "gcp",
            "feature engineering", "deployment",
        ],
        "Business Analyst" => &[
            "sql", "excel", "power bi", "tableau", "requirements", "stakeholder management",
            "process", "analysis", "dashboard",
        ],
        _ => &[
            "python", "sql", "excel", "tableau", "power bi", "pandas", "numpy", "data analysis",
            "statistics", "visualization",
        ],
    }
}

fn level_bonus(level: ExperienceLevel) -> f64 {
    match level {
        ExperienceLevel::Entry => 0.0,
        ExperienceLevel::Intermediate => 0.05,
        ExperienceLevel::Senior => 0.1,
    }
}

fn recommendations(
    resume_text: &str,
    matched: &[String],
    missing: &[String],
) -> Vec<String> {
    let has = |list: &[String], skill: &str| list.iter().any(|s| s == skill);
    let mut out = Vec::new();

    if !missing.is_empty() {
        let focus = missing
            .iter()
            .take(FOCUS_LIMIT)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        let ellipsis = if missing.len() > FOCUS_LIMIT { "…" } else { "" };
        out.push(format!("Focus on {}{}", focus, ellipsis));
    }
    if !resume_text.to_lowercase().contains("projects") {
        out.push("Add 1-2 impact-focused project bullets with metrics.".to_string());
    }
    if has(missing, "sql") && has(matched, "python") {
        out.push(
            "Pair Python with SQL queries on real datasets to close the analytics loop."
                .to_string(),
        );
    }
    if has(missing, "tableau") && has(missing, "power bi") {
        out.push(
            "Learn one BI tool (Tableau or Power BI) and build a portfolio dashboard.".to_string(),
        );
    }
    out
}

/// Score how much of the role's baseline skill list the request covers
pub fn score(request: &AnalysisRequest) -> BaselineReport {
    let role = resolve_role(&request.target_role);
    let baseline = baseline_for(role);

    let user_skills: BTreeSet<String> = request
        .skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    let matched: Vec<String> = user_skills
        .iter()
        .filter(|s| baseline.contains(&s.as_str()))
        .cloned()
        .collect();
    let missing: Vec<String> = baseline
        .iter()
        .filter(|s| !user_skills.contains(**s))
        .map(|s| s.to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let coverage = matched.len() as f64 / baseline.len().max(1) as f64;
    let raw = (coverage + level_bonus(request.experience_level)).min(1.0);
    let score = (raw * 100.0).round() / 100.0;

    app_log!(
        debug,
        "Baseline score for {}: {} ({} matched, {} missing)",
        role,
        score,
        matched.len(),
        missing.len()
    );

    BaselineReport {
        analysis_source: AnalysisSource::FallbackAnalyzer,
        target_role: role.to_string(),
        experience_level: request.experience_level,
        industry: request.industry.clone(),
        score,
        recommendations: recommendations(&request.resume_text, &matched, &missing),
        matched_skills: matched,
        missing_skills: missing,
        notes: "Scored against the local role baseline skill list.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(role: &str, skills: &[&str], level: ExperienceLevel, text: &str) -> AnalysisRequest {
        AnalysisRequest {
            resume_text: text.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            target_role: role.to_string(),
            experience_level: level,
            industry: "Technology".to_string(),
        }
    }

    #[test]
    fn test_data_analyst_entry_coverage() {
        let report = score(&request(
            "Data Analyst",
            &["Python", "SQL", "Rust"],
            ExperienceLevel::Entry,
            "Projects: sales dashboard",
        ));

        assert_eq!(report.score, 0.2);
        assert_eq!(report.matched_skills, vec!["python", "sql"]);
        assert_eq!(report.missing_skills.len(), 8);
        assert!(report.missing_skills.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(report.analysis_source, AnalysisSource::FallbackAnalyzer);
        assert_eq!(
            report.recommendations,
            vec![
                "Focus on data analysis, excel, numpy, pandas, power bi…".to_string(),
                "Learn one BI tool (Tableau or Power BI) and build a portfolio dashboard."
                    .to_string(),
            ]
        );
    }

    #[test]
    fn test_level_bonus_and_cap() {
        let all = baseline_for("Software Engineer");
        let report = score(&request("software engineer", all, ExperienceLevel::Senior, ""));
        assert_eq!(report.score, 1.0);
        assert!(report.missing_skills.is_empty());
        assert_eq!(report.target_role, "Software Engineer");

        let report = score(&request("Software Engineer", &["python"], ExperienceLevel::Intermediate, ""));
        assert_eq!(report.score, 0.15);
    }

    #[test]
    fn test_python_without_sql_recommendation() {
        let report = score(&request(
            "Data Scientist",
            &["python"],
            ExperienceLevel::Entry,
            "no project section",
        ));
        assert!(report
            .recommendations
            .iter()
            .any(|r| r.starts_with("Pair Python with SQL")));
        assert!(report
            .recommendations
            .iter()
            .any(|r| r.starts_with("Add 1-2 impact-focused")));
    }

    #[test]
    fn test_unknown_role_scored_as_data_analyst() {
        let report = score(&request("Astronaut", &[], ExperienceLevel::Entry, "projects"));
        assert_eq!(report.target_role, "Data Analyst");
        assert_eq!(report.score, 0.0);
    }
}
