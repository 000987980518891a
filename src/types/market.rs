// src/types/market.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemandLevel {
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

/// Static market snapshot for a role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSignal {
    pub demand_level: DemandLevel,
    /// Formatted as `$X-$Y`.
    pub salary_range: String,
    pub trending_skills: Vec<String>,
    pub growth_prediction: String,
    pub last_updated: DateTime<Utc>,
}
