// src/config.rs
//! Unified configuration management: one YAML file with per-environment sections

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::provider::{ProviderCandidate, ProviderKind};

pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub environment: String,
    pub settings: Settings,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    local: Settings,
    production: Settings,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub providers: ProviderSettings,
    pub analysis: AnalysisSettings,
    pub upload: UploadSettings,
    pub dataset: DatasetSettings,
    pub redaction: RedactionSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub address: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            address: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    pub probe_timeout_secs: u64,
    pub generate_timeout_secs: u64,
    pub gemini_base_url: String,
    pub openai_base_url: String,
    pub candidates: Vec<ProviderCandidate>,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            probe_timeout_secs: 10,
            generate_timeout_secs: 60,
            gemini_base_url: "https://generativelanguage.googleapis.com".to_string(),
            openai_base_url: "https://api.openai.com".to_string(),
            candidates: default_candidates(),
        }
    }
}

/// Gemini models first, in order of preference, then OpenAI.
pub fn default_candidates() -> Vec<ProviderCandidate> {
    let gemini_models = [
        "models/gemini-2.5-flash",
        "models/gemini-2.5-flash-lite",
        "models/gemini-2.5-pro",
        "models/gemini-2.0-flash-001",
    ];

    let mut candidates: Vec<ProviderCandidate> = gemini_models
        .iter()
        .map(|model| ProviderCandidate::new(ProviderKind::Gemini, model, "GEMINI_API_KEY"))
        .collect();
    candidates.push(ProviderCandidate::new(
        ProviderKind::OpenAi,
        "gpt-3.5-turbo",
        "OPENAI_API_KEY",
    ));
    candidates
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Characters of resume text embedded in the analysis prompt.
    pub resume_excerpt_chars: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            resume_excerpt_chars: 2000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UploadSettings {
    pub max_size_bytes: u64,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            max_size_bytes: 10 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatasetSettings {
    pub paths: Vec<PathBuf>,
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            paths: vec![
                PathBuf::from("data/cleaned_resumes.csv"),
                PathBuf::from("../data/cleaned_resumes.csv"),
                PathBuf::from("./data/cleaned_resumes.csv"),
            ],
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RedactionSettings {
    /// YAML lexicon of entity names per label; absent means pass-through.
    pub lexicon_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Load configuration for the active environment
    pub fn load(path: &Path) -> Result<Self> {
        let environment = Self::get_environment();
        app_log!(info, "Loading configuration for environment: {}", environment);

        let settings = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Self::parse(&content, &environment)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        } else {
            app_log!(
                warn,
                "{} not found, using built-in defaults",
                path.display()
            );
            Settings::default()
        };

        Ok(Self {
            environment,
            settings,
        })
    }

    fn get_environment() -> String {
        std::env::var("CAREER_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .or_else(|_| std::env::var("ENV"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn parse(content: &str, environment: &str) -> Result<Settings> {
        let config_file: ConfigFile = serde_yaml::from_str(content)?;

        Ok(match environment {
            "production" => config_file.production,
            _ => config_file.local,
        })
    }

    /// Apply `ROCKET_PORT` and an explicit CLI port, the latter winning
    pub fn with_port_override(mut self, cli_port: Option<u16>) -> Result<Self> {
        if let Ok(raw) = std::env::var("ROCKET_PORT") {
            self.settings.server.port = raw
                .parse::<u16>()
                .map_err(|_| anyhow::anyhow!("ROCKET_PORT must be a valid port number"))?;
        }
        if let Some(port) = cli_port {
            self.settings.server.port = port;
        }
        Ok(self)
    }
}
