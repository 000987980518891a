// src/web/handlers/system_handlers.rs
use chrono::Utc;
use rocket::serde::json::Json;
use rocket::State;

use crate::core::roles::KNOWN_ROLES;
use crate::web::types::*;

const DEFAULT_SAMPLE_COUNT: usize = 3;

pub async fn root_handler(state: &State<AppState>) -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse {
        message: "CareerCompass API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "active".to_string(),
        analyzer_available: state.engine.selector().is_bound(),
        data_loaded: state.dataset.is_loaded(),
        features: [
            "resume_analysis",
            "skill_gap_analysis",
            "career_path",
            "market_insights",
            "skill_trends",
            "baseline_score",
        ]
        .iter()
        .map(|f| f.to_string())
        .collect(),
    })
}

pub async fn health_handler(state: &State<AppState>) -> Json<HealthResponse> {
    let binding = state.engine.selector().describe();
    app_log!(
        debug,
        "Health check, provider: {}",
        binding
            .map(|(provider, model)| format!("{} {}", provider, model))
            .unwrap_or_else(|| "none".to_string())
    );

    Json(HealthResponse {
        status: ResponseStatus::Healthy,
        timestamp: Utc::now(),
        analyzer_available: binding.is_some(),
        ai_provider: binding.map(|(provider, _)| provider.to_string()),
        ai_model: binding.map(|(_, model)| model.to_string()),
        data_loaded: state.dataset.is_loaded(),
        ner_available: state.redactor.is_active(),
    })
}

pub async fn roles_handler() -> Json<RolesResponse> {
    Json(RolesResponse {
        status: ResponseStatus::Success,
        roles: KNOWN_ROLES.iter().map(|r| r.to_string()).collect(),
    })
}

pub async fn sample_resumes_handler(
    count: Option<usize>,
    state: &State<AppState>,
) -> Json<SamplesResponse> {
    let samples = state
        .dataset
        .samples(count.unwrap_or(DEFAULT_SAMPLE_COUNT))
        .to_vec();

    Json(SamplesResponse {
        status: ResponseStatus::Success,
        count: samples.len(),
        samples,
    })
}
