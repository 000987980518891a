// src/web/handlers/analysis_handlers.rs
use rocket::serde::json::Json;
use rocket::State;
use tracing::Instrument;

use crate::core::baseline;
use crate::types::AnalysisRequest;
use crate::web::types::*;

const DEFAULT_YEARS_BACK: i64 = 5;
const MAX_YEARS_BACK: i64 = 30;

pub async fn analyze_resume_handler(
    request: Json<AnalysisRequest>,
    state: &State<AppState>,
) -> Json<AnalysisResponse> {
    let request = request.into_inner();
    let span = app_span!(
        "analyze_resume",
        role = %request.target_role,
        level = %request.experience_level
    );

    let analysis = state.engine.analyze(&request).instrument(span).await;

    Json(AnalysisResponse {
        status: ResponseStatus::Success,
        analysis_source: analysis.analysis_source.clone(),
        analysis,
        role: request.target_role,
        industry: request.industry,
    })
}

pub async fn analyze_trends_handler(
    role: &str,
    years_back: Option<i64>,
    state: &State<AppState>,
) -> Result<Json<TrendsResponse>, ApiError> {
    let years_back = years_back.unwrap_or(DEFAULT_YEARS_BACK);
    if !(1..=MAX_YEARS_BACK).contains(&years_back) {
        return Err(ApiError::bad_request(
            format!("years_back must be between 1 and {}, got {}", MAX_YEARS_BACK, years_back),
            "INVALID_PARAMETER",
            &["Use a years_back value such as 5"],
        ));
    }

    let role = role.trim();
    if role.is_empty() {
        return Err(ApiError::bad_request(
            "Role must not be empty".to_string(),
            "INVALID_PARAMETER",
            &["Pick a role from /roles"],
        ));
    }

    let span = app_span!("analyze_trends", role = %role, years_back = years_back);
    let trends = state
        .engine
        .analyze_trends(role, years_back as u32)
        .instrument(span)
        .await;

    Ok(Json(TrendsResponse {
        status: ResponseStatus::Success,
        role: role.to_string(),
        trends,
    }))
}

pub async fn baseline_score_handler(request: Json<AnalysisRequest>) -> Json<BaselineResponse> {
    Json(BaselineResponse {
        status: ResponseStatus::Success,
        report: baseline::score(&request),
    })
}
