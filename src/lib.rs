//! Resume analysis service: skill extraction, AI-backed career analysis with
//! deterministic fallbacks, and the Rocket HTTP surface around them.

#[macro_use]
mod log;

pub mod config;
pub mod core;
pub mod resume;
pub mod types;
pub mod utils;
pub mod web;

pub use crate::config::ConfigManager;
pub use crate::core::{AnalysisEngine, ProviderSelector};
pub use crate::web::start_web_server;
