// src/core/provider/mod.rs
//! Provider selection: probe candidates once at start-up, bind the first one
//! that answers, and expose a single best-effort `generate` capability

pub mod gemini;
pub mod openai;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

use crate::config::ProviderSettings;
use crate::core::prompts::PROBE_PROMPT;
use crate::types::AnalysisSource;

pub use gemini::GeminiClient;
pub use openai::OpenAiClient;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("no AI provider is bound")]
    Unbound,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider request timed out after {0:?}")]
    Timeout(Duration),

    #[error("provider returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("provider returned no text")]
    EmptyResponse,
}

impl ProviderError {
    /// Classify a transport failure, keeping timeouts distinct
    pub fn from_transport(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout)
        } else {
            Self::Http(err)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProviderKind {
    #[serde(rename = "gemini")]
    Gemini,
    #[serde(rename = "openai")]
    OpenAi,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::OpenAi => "openai",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One (provider, model) pair to try, with the env var holding its credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderCandidate {
    pub name: ProviderKind,
    pub model: String,
    pub credential_env: String,
}

impl ProviderCandidate {
    pub fn new(name: ProviderKind, model: &str, credential_env: &str) -> Self {
        Self {
            name,
            model: model.to_string(),
            credential_env: credential_env.to_string(),
        }
    }
}

/// A text-generation backend.
#[rocket::async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, timeout: Duration) -> Result<String, ProviderError>;
}

struct BoundProvider {
    provider: ProviderKind,
    model: String,
    generator: Box<dyn TextGenerator>,
}

/// Immutable after initialization; the binding is never re-evaluated.
pub struct ProviderSelector {
    bound: Option<BoundProvider>,
    generate_timeout: Duration,
}

const DEFAULT_GENERATE_TIMEOUT: Duration = Duration::from_secs(60);

impl ProviderSelector {
    pub fn unbound() -> Self {
        Self {
            bound: None,
            generate_timeout: DEFAULT_GENERATE_TIMEOUT,
        }
    }

    pub fn bound(provider: ProviderKind, model: &str, generator: Box<dyn TextGenerator>) -> Self {
        Self {
            bound: Some(BoundProvider {
                provider,
                model: model.to_string(),
                generator,
            }),
            generate_timeout: DEFAULT_GENERATE_TIMEOUT,
        }
    }

    pub fn with_generate_timeout(mut self, timeout: Duration) -> Self {
        self.generate_timeout = timeout;
        self
    }

    /// Probe the configured candidates with real HTTP clients and
    /// credentials read from the process environment
    pub async fn initialize(settings: &ProviderSettings) -> Self {
        let http = match reqwest::Client::builder().build() {
            Ok(client) => client,
            Err(e) => {
                app_log!(error, "Failed to create HTTP client for AI providers: {}", e);
                return Self::unbound();
            }
        };

        let credential = |var: &str| {
            std::env::var(var)
                .ok()
                .filter(|value| !value.trim().is_empty())
        };

        let factory = |candidate: &ProviderCandidate, api_key: String| -> Box<dyn TextGenerator> {
            match candidate.name {
                ProviderKind::Gemini => Box::new(GeminiClient::new(
                    http.clone(),
                    &settings.gemini_base_url,
                    &candidate.model,
                    api_key,
                )),
                ProviderKind::OpenAi => Box::new(OpenAiClient::new(
                    http.clone(),
                    &settings.openai_base_url,
                    &candidate.model,
                    api_key,
                )),
            }
        };

        Self::initialize_with(
            &settings.candidates,
            Duration::from_secs(settings.probe_timeout_secs),
            credential,
            factory,
        )
        .await
        .with_generate_timeout(Duration::from_secs(settings.generate_timeout_secs))
    }

    /// Try `candidates` in order; the first whose liveness probe succeeds is bound
    pub async fn initialize_with<L, F>(
        candidates: &[ProviderCandidate],
        probe_timeout: Duration,
        credential: L,
        factory: F,
    ) -> Self
    where
        L: Fn(&str) -> Option<String>,
        F: Fn(&ProviderCandidate, String) -> Box<dyn TextGenerator>,
    {
        for candidate in candidates {
            let Some(api_key) = credential(&candidate.credential_env) else {
                app_log!(
                    debug,
                    "Skipping {} {}: {} not set",
                    candidate.name,
                    candidate.model,
                    candidate.credential_env
                );
                continue;
            };

            app_log!(info, "Probing {} model {}", candidate.name, candidate.model);
            let generator = factory(candidate, api_key);

            match bounded(generator.as_ref(), PROBE_PROMPT, probe_timeout).await {
                Ok(_) => {
                    app_log!(
                        info,
                        "AI provider bound: {} with model {}",
                        candidate.name,
                        candidate.model
                    );
                    return Self::bound(candidate.name, &candidate.model, generator);
                }
                Err(e) => {
                    app_log!(
                        warn,
                        "Probe failed for {} {}: {}",
                        candidate.name,
                        candidate.model,
                        e
                    );
                }
            }
        }

        app_log!(warn, "No AI provider available, analyses will use fallback data");
        Self::unbound()
    }

    pub fn is_bound(&self) -> bool {
        self.bound.is_some()
    }

    /// Bound provider and model, if any
    pub fn describe(&self) -> Option<(ProviderKind, &str)> {
        self.bound
            .as_ref()
            .map(|bound| (bound.provider, bound.model.as_str()))
    }

    pub fn source(&self) -> Option<AnalysisSource> {
        self.describe()
            .map(|(provider, model)| AnalysisSource::ai(provider.as_str(), model))
    }

    /// One outbound call to the bound provider, capped at the generate timeout
    pub async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let bound = self.bound.as_ref().ok_or(ProviderError::Unbound)?;

        bounded(bound.generator.as_ref(), prompt, self.generate_timeout)
            .await
            .inspect_err(|e| {
                app_log!(
                    warn,
                    "Generation failed on {} {}: {}",
                    bound.provider,
                    bound.model,
                    e
                )
            })
    }
}

async fn bounded(
    generator: &dyn TextGenerator,
    prompt: &str,
    timeout: Duration,
) -> Result<String, ProviderError> {
    let text = tokio::time::timeout(timeout, generator.generate(prompt, timeout))
        .await
        .map_err(|_| ProviderError::Timeout(timeout))??;

    if text.trim().is_empty() {
        return Err(ProviderError::EmptyResponse);
    }
    Ok(text)
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// Generator that replays canned replies and records the prompts it saw.
    pub struct ScriptedGenerator {
        replies: Mutex<Vec<Result<String, ProviderError>>>,
        pub prompts: Arc<Mutex<Vec<String>>>,
        pub calls: Arc<AtomicUsize>,
    }

    impl ScriptedGenerator {
        pub fn new(replies: Vec<Result<String, ProviderError>>) -> Self {
            Self {
                replies: Mutex::new(replies),
                prompts: Arc::new(Mutex::new(Vec::new())),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        pub fn replying(text: &str) -> Self {
            Self::new(vec![Ok(text.to_string())])
        }
    }

    #[rocket::async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate(&self, prompt: &str, _timeout: Duration) -> Result<String, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(prompt.to_string());
            let mut replies = self.replies.lock().unwrap();
            if replies.is_empty() {
                return Err(ProviderError::EmptyResponse);
            }
            replies.remove(0)
        }
    }

    /// Generator that never answers.
    pub struct StalledGenerator;

    #[rocket::async_trait]
    impl TextGenerator for StalledGenerator {
        async fn generate(&self, _prompt: &str, _timeout: Duration) -> Result<String, ProviderError> {
            std::future::pending::<()>().await;
            Err(ProviderError::EmptyResponse)
        }
    }

    pub fn failure() -> ProviderError {
        ProviderError::Status {
            status: 503,
            message: "unavailable".to_string(),
        }
    }
}
