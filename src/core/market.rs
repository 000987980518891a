// src/core/market.rs
//! Role-keyed static market data

use chrono::Utc;

use crate::core::roles::known_role;
use crate::types::{DemandLevel, MarketSignal};

struct SignalEntry {
    demand_level: DemandLevel,
    salary_range: &'static str,
    trending_skills: &'static [&'static str],
    growth_prediction: &'static str,
}

const DEFAULT_SIGNAL: SignalEntry = SignalEntry {
    demand_level: DemandLevel::High,
    salary_range: "$80,000-$120,000",
    trending_skills: &["Python", "SQL", "Cloud Computing"],
    growth_prediction: "15% growth expected",
};

fn entry_for(role: &str) -> &'static SignalEntry {
    const DATA_ANALYST: SignalEntry = SignalEntry {
        demand_level: DemandLevel::High,
        salary_range: "$70,000-$100,000",
        trending_skills: &["SQL", "Tableau", "Python", "Statistics", "Power BI"],
        growth_prediction: "18% growth expected",
    };
    const DATA_SCIENTIST: SignalEntry = SignalEntry {
        demand_level: DemandLevel::VeryHigh,
        salary_range: "$120,000-$160,000",
        trending_skills: &["Machine Learning", "Python", "Deep Learning", "LLMs"],
        growth_prediction: "23% growth expected",
    };
    const SOFTWARE_ENGINEER: SignalEntry = SignalEntry {
        demand_level: DemandLevel::High,
        salary_range: "$100,000-$140,000",
        trending_skills: &["Cloud Computing", "Microservices", "DevOps", "Kubernetes"],
        growth_prediction: "15% growth expected",
    };
    const ML_ENGINEER: SignalEntry = SignalEntry {
        demand_level: DemandLevel::VeryHigh,
        salary_range: "$130,000-$180,000",
        trending_skills: &["PyTorch", "TensorFlow", "MLOps", "Deep Learning"],
        growth_prediction: "35% growth expected",
    };
    const BUSINESS_ANALYST: SignalEntry = SignalEntry {
        demand_level: DemandLevel::Medium,
        salary_range: "$65,000-$95,000",
        trending_skills: &["SQL", "Excel", "Requirements Gathering", "Process Modeling"],
        growth_prediction: "12% growth expected",
    };

    match known_role(role) {
        Some("Data Analyst") => &DATA_ANALYST,
        Some("Data Scientist") => &DATA_SCIENTIST,
        Some("Software Engineer") => &SOFTWARE_ENGINEER,
        Some("Machine Learning Engineer") => &ML_ENGINEER,
        Some("Business Analyst") => &BUSINESS_ANALYST,
        _ => &DEFAULT_SIGNAL,
    }
}

/// Pure lookup over the role table; unknown roles get the default entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarketSignalProvider;

impl MarketSignalProvider {
    pub fn new() -> Self {
        Self
    }

    /// `industry` is accepted for interface stability but does not vary the result.
    pub fn lookup(&self, role: &str, _industry: &str) -> MarketSignal {
        let entry = entry_for(role);

        MarketSignal {
            demand_level: entry.demand_level,
            salary_range: entry.salary_range.to_string(),
            trending_skills: entry.trending_skills.iter().map(|s| s.to_string()).collect(),
            growth_prediction: entry.growth_prediction.to_string(),
            last_updated: Utc::now(),
        }
    }
}
