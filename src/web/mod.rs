// src/web/mod.rs

pub mod handlers;
pub mod types;

pub use types::*;

use anyhow::Result;
use rocket::data::{Limits, ToByteUnit};
use rocket::fairing::{Fairing, Info, Kind};
use rocket::form::Form;
use rocket::http::{Header, Status};
use rocket::serde::json::Json;
use rocket::{catchers, get, options, post, routes, Build, Request, Response, Rocket, State};

use crate::config::{ConfigManager, Settings};
use crate::core::{AnalysisEngine, ProviderSelector};
use crate::resume::redact::redactor_from_config;
use crate::resume::SampleDataset;
use crate::types::AnalysisRequest;

/// Multipart overhead allowed on top of the file limit.
const FORM_OVERHEAD_BYTES: u64 = 1024 * 1024;

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
        response.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
    }
}

#[get("/")]
pub async fn index(state: &State<AppState>) -> Json<ServiceInfoResponse> {
    handlers::root_handler(state).await
}

#[get("/health")]
pub async fn health(state: &State<AppState>) -> Json<HealthResponse> {
    handlers::health_handler(state).await
}

#[get("/roles")]
pub async fn roles() -> Json<RolesResponse> {
    handlers::roles_handler().await
}

#[get("/sample-resumes?<count>")]
pub async fn sample_resumes(count: Option<usize>, state: &State<AppState>) -> Json<SamplesResponse> {
    handlers::sample_resumes_handler(count, state).await
}

#[post("/upload-resume", data = "<upload>")]
pub async fn upload_resume(
    upload: Form<UploadForm<'_>>,
    state: &State<AppState>,
) -> Result<Json<UploadResponse>, ApiError> {
    handlers::upload_resume_handler(upload, state).await
}

#[post("/analyze-resume", data = "<request>")]
pub async fn analyze_resume(
    request: Json<AnalysisRequest>,
    state: &State<AppState>,
) -> Json<AnalysisResponse> {
    handlers::analyze_resume_handler(request, state).await
}

#[get("/analyze-trends/<role>?<years_back>")]
pub async fn analyze_trends(
    role: &str,
    years_back: Option<i64>,
    state: &State<AppState>,
) -> Result<Json<TrendsResponse>, ApiError> {
    handlers::analyze_trends_handler(role, years_back, state).await
}

#[post("/baseline-score", data = "<request>")]
pub async fn baseline_score(request: Json<AnalysisRequest>) -> Json<BaselineResponse> {
    handlers::baseline_score_handler(request).await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request() -> ApiError {
    ApiError::bad_request(
        "Invalid request format".to_string(),
        "BAD_REQUEST",
        &[
            "Check your request JSON format",
            "Verify all required fields are present",
        ],
    )
}

#[rocket::catch(404)]
pub fn not_found(request: &Request<'_>) -> ApiError {
    ApiError::new(
        Status::NotFound,
        format!("No route for {} {}", request.method(), request.uri()),
        "NOT_FOUND",
        &["Check the endpoint path"],
    )
}

#[rocket::catch(413)]
pub fn payload_too_large() -> ApiError {
    ApiError::new(
        Status::PayloadTooLarge,
        "File size exceeds the upload limit".to_string(),
        "FILE_TOO_LARGE",
        &["Use a smaller file size (max 10MB)"],
    )
}

#[rocket::catch(422)]
pub fn unprocessable() -> ApiError {
    ApiError::new(
        Status::UnprocessableEntity,
        "Request body does not match the expected schema".to_string(),
        "VALIDATION_ERROR",
        &[
            "Send resume_text and skills",
            "Use Entry, Intermediate or Senior for experience_level",
        ],
    )
}

#[rocket::catch(500)]
pub fn internal_error() -> ApiError {
    ApiError::internal("Internal server error".to_string(), "INTERNAL_ERROR")
}

/// Assemble the rocket with its routes, catchers and limits around `state`
pub fn build_rocket(state: AppState, settings: &Settings) -> Rocket<Build> {
    let file_limit = settings.upload.max_size_bytes;
    let limits = Limits::default()
        .limit("file", file_limit.bytes())
        .limit("data-form", (file_limit + FORM_OVERHEAD_BYTES).bytes());

    let figment = rocket::Config::figment()
        .merge(("address", settings.server.address.clone()))
        .merge(("port", settings.server.port))
        .merge(("limits", limits));

    rocket::custom(figment)
        .attach(Cors)
        .manage(state)
        .register(
            "/",
            catchers![
                bad_request,
                not_found,
                payload_too_large,
                unprocessable,
                internal_error
            ],
        )
        .mount(
            "/",
            routes![
                index,
                health,
                roles,
                sample_resumes,
                upload_resume,
                analyze_resume,
                analyze_trends,
                baseline_score,
                options,
            ],
        )
}

// Main server start function
pub async fn start_web_server(config: ConfigManager) -> Result<()> {
    let settings = config.settings;

    let selector = ProviderSelector::initialize(&settings.providers).await;
    let engine = AnalysisEngine::new(selector, &settings.analysis);
    let dataset = SampleDataset::load(&settings.dataset.paths);
    let redactor = redactor_from_config(settings.redaction.lexicon_path.as_deref());

    app_log!(info, "Starting CareerCompass API server");
    app_log!(info, "Environment: {}", config.environment);
    match engine.selector().describe() {
        Some((provider, model)) => app_log!(info, "AI provider: {} ({})", provider, model),
        None => app_log!(info, "AI provider: none, fallback analysis only"),
    }
    app_log!(
        info,
        "Server: http://{}:{}",
        settings.server.address,
        settings.server.port
    );

    let state = AppState {
        engine,
        redactor,
        dataset,
        upload_limit: settings.upload.max_size_bytes,
    };

    build_rocket(state, &settings)
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Server failed: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::PassThroughRedactor;
    use rocket::http::ContentType;
    use rocket::local::blocking::Client;
    use serde_json::Value;

    fn client() -> Client {
        let settings = Settings::default();
        let state = AppState {
            engine: AnalysisEngine::new(ProviderSelector::unbound(), &settings.analysis),
            redactor: Box::new(PassThroughRedactor),
            dataset: SampleDataset::mock(),
            upload_limit: settings.upload.max_size_bytes,
        };
        Client::tracked(build_rocket(state, &settings)).unwrap()
    }

    fn json(response: rocket::local::blocking::LocalResponse<'_>) -> Value {
        serde_json::from_str(&response.into_string().unwrap()).unwrap()
    }

    fn multipart(filename: &str, content_type: &str, body: &str) -> (ContentType, String) {
        let boundary = "careercompass-test-boundary";
        let payload = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{f}\"\r\n\
             Content-Type: {ct}\r\n\r\n{body}\r\n--{b}--\r\n",
            b = boundary,
            f = filename,
            ct = content_type,
            body = body
        );
        (
            ContentType::new("multipart", "form-data").with_params(("boundary", boundary)),
            payload,
        )
    }

    #[test]
    fn test_roles_fixed_order() {
        let client = client();
        let response = client.get("/roles").dispatch();
        assert_eq!(response.status(), Status::Ok);

        let body = json(response);
        assert_eq!(body["status"], "success");
        assert_eq!(
            body["roles"],
            serde_json::json!([
                "Data Analyst",
                "Data Scientist",
                "Software Engineer",
                "Machine Learning Engineer",
                "Business Analyst"
            ])
        );
    }

    #[test]
    fn test_health_reports_unbound_provider() {
        let client = client();
        let response = client.get("/health").dispatch();
        assert_eq!(
            response.headers().get_one("Access-Control-Allow-Origin"),
            Some("*")
        );

        let body = json(response);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["analyzer_available"], false);
        assert_eq!(body["data_loaded"], false);
        assert!(body.get("ai_provider").is_none());
    }

    #[test]
    fn test_analyze_resume_unbound_uses_fallback() {
        let client = client();
        let response = client
            .post("/analyze-resume")
            .header(ContentType::JSON)
            .body(
                r#"{"resume_text": "Reporting analyst", "skills": ["python", "SQL"],
                    "target_role": "Data Analyst", "experience_level": "Entry",
                    "industry": "Technology"}"#,
            )
            .dispatch();
        assert_eq!(response.status(), Status::Ok);

        let body = json(response);
        assert_eq!(body["status"], "success");
        assert_eq!(body["analysis_source"], "enhanced_fallback");
        assert_eq!(body["analysis"]["analysis_source"], "enhanced_fallback");
        assert_eq!(
            body["analysis"]["skill_gaps"]["technical"],
            serde_json::json!(["Tableau/Power BI", "Statistics", "Data Visualization"])
        );
        assert_eq!(
            body["analysis"]["real_time_insights"]["salary_range"],
            "$70,000-$100,000"
        );
        assert_eq!(body["role"], "Data Analyst");
    }

    #[test]
    fn test_analyze_resume_rejects_bad_level() {
        let client = client();
        let response = client
            .post("/analyze-resume")
            .header(ContentType::JSON)
            .body(r#"{"resume_text": "x", "skills": [], "experience_level": "Wizard"}"#)
            .dispatch();
        assert_eq!(response.status(), Status::UnprocessableEntity);
        assert_eq!(json(response)["error_code"], "VALIDATION_ERROR");
    }

    #[test]
    fn test_trends_validation_and_fallback() {
        let client = client();

        let response = client.get("/analyze-trends/Data%20Analyst?years_back=0").dispatch();
        assert_eq!(response.status(), Status::BadRequest);
        assert_eq!(json(response)["error_code"], "INVALID_PARAMETER");

        let response = client.get("/analyze-trends/DevOps").dispatch();
        assert_eq!(response.status(), Status::Ok);
        let body = json(response);
        assert_eq!(body["role"], "DevOps");
        assert_eq!(body["trends"]["analysis_period"], "Last 5 years");
        assert_eq!(body["trends"]["analysis_source"], "fallback_analyzer");
    }

    #[test]
    fn test_sample_resumes_count() {
        let client = client();
        let body = json(client.get("/sample-resumes?count=1").dispatch());
        assert_eq!(body["count"], 1);
        assert_eq!(body["samples"][0]["positions"], "Data Analyst");

        let body = json(client.get("/sample-resumes").dispatch());
        assert_eq!(body["count"], 2);
    }

    #[test]
    fn test_baseline_score() {
        let client = client();
        let body = json(
            client
                .post("/baseline-score")
                .header(ContentType::JSON)
                .body(r#"{"resume_text": "projects", "skills": ["python", "sql"], "experience_level": "Entry"}"#)
                .dispatch(),
        );
        assert_eq!(body["status"], "success");
        assert_eq!(body["analysis_source"], "fallback_analyzer");
        assert_eq!(body["score"], 0.2);
        assert_eq!(body["target_role"], "Data Analyst");
    }

    #[test]
    fn test_upload_plain_text_resume() {
        let client = client();
        let (content_type, payload) = multipart(
            "resume.txt",
            "text/plain",
            "Data analyst skilled in Python, SQL and Tableau dashboards.",
        );

        let response = client
            .post("/upload-resume")
            .header(content_type)
            .body(payload)
            .dispatch();
        assert_eq!(response.status(), Status::Ok);

        let body = json(response);
        assert_eq!(body["filename"], "resume.txt");
        assert_eq!(
            body["extracted_skills"],
            serde_json::json!(["dashboard", "python", "sql", "tableau"])
        );
        assert_eq!(body["skill_count"], 4);
        assert_eq!(
            body["anonymized_preview"],
            "Data analyst skilled in Python, SQL and Tableau dashboards."
        );
    }

    #[test]
    fn test_upload_rejects_unsupported_type() {
        let client = client();
        let (content_type, payload) = multipart("photo.png", "image/png", "not really a png");

        let response = client
            .post("/upload-resume")
            .header(content_type)
            .body(payload)
            .dispatch();
        assert_eq!(response.status(), Status::BadRequest);
        assert_eq!(json(response)["error_code"], "INVALID_FORMAT");
    }

    #[test]
    fn test_options_and_unknown_route() {
        let client = client();
        assert_eq!(client.options("/analyze-resume").dispatch().status(), Status::Ok);

        let response = client.get("/nope").dispatch();
        assert_eq!(response.status(), Status::NotFound);
        assert_eq!(json(response)["status"], "error");
    }
}
