// src/core/mod.rs
//! Analysis core: provider selection, response recovery, market signals and
//! the deterministic fallbacks the engine degrades to

pub mod baseline;
pub mod engine;
pub mod extractor;
pub mod fallback;
pub mod market;
pub mod prompts;
pub mod provider;
pub mod roles;

pub use engine::AnalysisEngine;
pub use extractor::{extract_json, ExtractError};
pub use fallback::FallbackAnalyzer;
pub use market::MarketSignalProvider;
pub use provider::{ProviderError, ProviderSelector, TextGenerator};
