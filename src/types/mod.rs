// src/types/mod.rs
//! Typed request/result schema shared by the analysis core and the web layer

pub mod analysis;
pub mod baseline;
pub mod market;
pub mod trends;

pub use analysis::{
    AnalysisBody, AnalysisRequest, AnalysisResult, AnalysisSource, CareerPath, CareerStep, Course,
    ExperienceLevel, LearningRoadmap, MarketInsights, Severity, SkillGaps,
};
pub use baseline::BaselineReport;
pub use market::{DemandLevel, MarketSignal};
pub use trends::{DecliningSkill, EmergingSkill, SkillPrediction, SkillTrends, TrendBody};
