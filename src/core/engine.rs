// src/core/engine.rs
use chrono::Utc;
use thiserror::Error;

use crate::config::AnalysisSettings;
use crate::core::extractor::{extract_typed, ExtractError};
use crate::core::fallback::FallbackAnalyzer;
use crate::core::market::MarketSignalProvider;
use crate::core::prompts::{build_analysis_prompt, build_trend_prompt};
use crate::core::provider::{ProviderError, ProviderSelector};
use crate::core::roles::resolve_role;
use crate::types::{
    AnalysisBody, AnalysisRequest, AnalysisResult, MarketSignal, SkillTrends, TrendBody,
};

/// Why an AI-backed answer could not be used
#[derive(Debug, Error)]
enum AnalysisFailure {
    #[error("provider: {0}")]
    Provider(#[from] ProviderError),

    #[error("extraction: {0}")]
    Extract(#[from] ExtractError),

    #[error("prompt: {0}")]
    Prompt(#[from] serde_json::Error),
}

/// Orchestrates market lookup, prompt, one provider call and JSON recovery,
/// degrading to the fallback analyzer on any failure.
pub struct AnalysisEngine {
    selector: ProviderSelector,
    market: MarketSignalProvider,
    fallback: FallbackAnalyzer,
    excerpt_chars: usize,
}

impl AnalysisEngine {
    pub fn new(selector: ProviderSelector, settings: &AnalysisSettings) -> Self {
        Self {
            selector,
            market: MarketSignalProvider::new(),
            fallback: FallbackAnalyzer::new(),
            excerpt_chars: settings.resume_excerpt_chars,
        }
    }

    pub fn selector(&self) -> &ProviderSelector {
        &self.selector
    }

    /// Never fails; every exit yields a complete result tagged with its source
    pub async fn analyze(&self, request: &AnalysisRequest) -> AnalysisResult {
        let role = resolve_role(&request.target_role);
        let signal = self.market.lookup(role, &request.industry);

        let Some(source) = self.selector.source() else {
            app_log!(info, "No AI provider bound, using fallback analysis for {}", role);
            return self.fallback.analyze(request, signal);
        };

        match self.ai_body(request, role, &signal).await {
            Ok(body) => {
                app_log!(info, "AI analysis completed for {} via {}", role, source);
                AnalysisResult::assemble(body, signal, source, Utc::now())
            }
            Err(e) => {
                app_log!(warn, "AI analysis failed for {}, using fallback: {}", role, e);
                self.fallback.analyze(request, signal)
            }
        }
    }

    async fn ai_body(
        &self,
        request: &AnalysisRequest,
        role: &str,
        signal: &MarketSignal,
    ) -> Result<AnalysisBody, AnalysisFailure> {
        let prompt = build_analysis_prompt(request, role, signal, self.excerpt_chars)?;
        let raw = self.selector.generate(&prompt).await?;
        Ok(extract_typed::<AnalysisBody>(&raw)?)
    }

    async fn ai_trends(&self, role: &str, years_back: u32) -> Result<TrendBody, AnalysisFailure> {
        let raw = self
            .selector
            .generate(&build_trend_prompt(role, years_back))
            .await?;
        Ok(extract_typed::<TrendBody>(&raw)?)
    }

    /// Skill evolution for `role`; `role` is reported back as given
    pub async fn analyze_trends(&self, role: &str, years_back: u32) -> SkillTrends {
        let Some(source) = self.selector.source() else {
            app_log!(info, "No AI provider bound, using fallback trends for {}", role);
            return self.fallback.trends(role, years_back);
        };

        match self.ai_trends(role, years_back).await {
            Ok(body) => SkillTrends::assemble(body, role, years_back, source, Utc::now()),
            Err(e) => {
                app_log!(warn, "Trend analysis failed for {}, using fallback: {}", role, e);
                self.fallback.trends(role, years_back)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::provider::testing::{failure, ScriptedGenerator};
    use crate::core::provider::ProviderKind;
    use crate::types::{AnalysisSource, ExperienceLevel, Severity};
    use std::sync::atomic::Ordering;

    const AI_BODY: &str = r#"{
        "skill_gaps": {"technical": ["dbt"], "soft_skills": ["Negotiation"], "severity": "low"},
        "career_path": {
            "immediate": {"role": "Analyst II", "requirements": ["dbt"], "salary_range": "$80,000-$95,000"},
            "mid_term": {"role": "Senior Analyst", "requirements": ["Mentoring"], "salary_range": "$95,000-$120,000"},
            "long_term": {"role": "Analytics Lead", "requirements": ["Strategy"], "salary_range": "$130,000-$160,000"}
        },
        "learning_roadmap": {
            "courses": [{"name": "dbt Fundamentals", "platform": "dbt Labs", "duration": "1 week"}],
            "projects": ["Model a warehouse"],
            "timeline": "3 months"
        },
        "market_insights": {"demand_trend": "Growing", "emerging_tech": ["dbt"], "industry_advice": "Own the semantic layer"}
    }"#;

    fn request() -> AnalysisRequest {
        AnalysisRequest {
            resume_text: "Built reporting pipelines in SQL".to_string(),
            skills: vec!["python".to_string(), "sql".to_string()],
            target_role: "Data Analyst".to_string(),
            experience_level: ExperienceLevel::Entry,
            industry: "Technology".to_string(),
        }
    }

    fn engine_with(generator: ScriptedGenerator) -> AnalysisEngine {
        let selector =
            ProviderSelector::bound(ProviderKind::Gemini, "models/gemini-2.5-flash", Box::new(generator));
        AnalysisEngine::new(selector, &AnalysisSettings::default())
    }

    #[tokio::test]
    async fn test_ai_answer_is_used() {
        let generator = ScriptedGenerator::replying(&format!("```json\n{}\n```", AI_BODY));
        let calls = generator.calls.clone();
        let engine = engine_with(generator);

        let result = engine.analyze(&request()).await;

        assert_eq!(
            result.analysis_source,
            AnalysisSource::ai("gemini", "models/gemini-2.5-flash")
        );
        assert_eq!(result.skill_gaps.technical, vec!["dbt"]);
        assert_eq!(result.skill_gaps.severity, Severity::Low);
        assert_eq!(result.real_time_insights.salary_range, "$70,000-$100,000");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unparseable_answer_falls_back() {
        let generator = ScriptedGenerator::replying("I cannot help with that.");
        let calls = generator.calls.clone();
        let engine = engine_with(generator);

        let result = engine.analyze(&request()).await;

        assert_eq!(result.analysis_source, AnalysisSource::EnhancedFallback);
        assert_eq!(
            result.skill_gaps.technical,
            vec!["Tableau/Power BI", "Statistics", "Data Visualization"]
        );
        // No retry after a bad answer
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_schema_mismatch_falls_back() {
        let engine = engine_with(ScriptedGenerator::replying(r#"{"skill_gaps": "lots"}"#));
        let result = engine.analyze(&request()).await;
        assert_eq!(result.analysis_source, AnalysisSource::EnhancedFallback);
    }

    #[tokio::test]
    async fn test_provider_error_falls_back() {
        let engine = engine_with(ScriptedGenerator::new(vec![Err(failure())]));
        let result = engine.analyze(&request()).await;
        assert_eq!(result.analysis_source, AnalysisSource::EnhancedFallback);
        assert_eq!(result.real_time_insights.growth_prediction, "18% growth expected");
    }

    #[tokio::test]
    async fn test_unbound_selector_falls_back() {
        let engine = AnalysisEngine::new(ProviderSelector::unbound(), &AnalysisSettings::default());
        let mut req = request();
        req.target_role = "Underwater Basket Weaver".to_string();

        let result = engine.analyze(&req).await;

        assert_eq!(result.analysis_source, AnalysisSource::EnhancedFallback);
        // Unknown roles resolve to the default role before the market lookup
        assert_eq!(result.real_time_insights.salary_range, "$70,000-$100,000");
        assert_eq!(result.career_path.immediate.role, "Junior Data Analyst");
    }

    #[tokio::test]
    async fn test_prompt_embeds_resolved_role() {
        let generator = ScriptedGenerator::new(vec![Err(failure())]);
        let prompts = generator.prompts.clone();
        let engine = engine_with(generator);
        let mut req = request();
        req.target_role = "data scientist".to_string();

        engine.analyze(&req).await;

        let prompts = prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Target role: Data Scientist"));
        assert!(prompts[0].contains("Current skills: python, sql"));
    }

    #[tokio::test]
    async fn test_trends_from_ai() {
        let body = r#"Here you go: {
            "emerging_skills": [{"skill": "LLMOps", "growth": "fast", "impact": "High"}],
            "declining_skills": [],
            "future_predictions": [],
            "salary_impact": "Premium for LLMOps"
        }"#;
        let engine = engine_with(ScriptedGenerator::replying(body));

        let trends = engine.analyze_trends("Data Scientist", 3).await;

        assert!(trends.analysis_source.is_ai());
        assert_eq!(trends.emerging_skills[0].skill, "LLMOps");
        assert_eq!(trends.analysis_period, "Last 3 years");
        assert_eq!(trends.role, "Data Scientist");
    }

    #[tokio::test]
    async fn test_trends_fallback_when_unbound() {
        let engine = AnalysisEngine::new(ProviderSelector::unbound(), &AnalysisSettings::default());
        let trends = engine.analyze_trends("Data Analyst", 5).await;
        assert_eq!(trends.analysis_source, AnalysisSource::FallbackAnalyzer);
        assert_eq!(trends.analysis_period, "Last 5 years");
    }
}
