// src/core/fallback.rs
//! Deterministic analysis from static role templates, used whenever no
//! provider answer can be used

use chrono::Utc;

use crate::core::roles::known_role;
use crate::types::{
    AnalysisBody, AnalysisRequest, AnalysisResult, AnalysisSource, CareerPath, CareerStep, Course,
    DecliningSkill, EmergingSkill, LearningRoadmap, MarketInsights, MarketSignal, Severity,
    SkillGaps, SkillPrediction, SkillTrends, TrendBody,
};

/// Number of canned technical gaps reported when the user already has them all.
const NEVER_EMPTY_GAPS: usize = 3;
const SOFT_GAPS_REPORTED: usize = 2;

struct StepTemplate {
    role: &'static str,
    salary_range: &'static str,
}

struct CourseTemplate {
    name: &'static str,
    platform: &'static str,
    duration: &'static str,
    focus: &'static str,
}

struct InsightTemplate {
    demand_trend: &'static str,
    emerging_tech: &'static [&'static str],
    industry_advice: &'static str,
}

struct RoleTemplate {
    name: &'static str,
    technical_gaps: &'static [&'static str],
    soft_gaps: &'static [&'static str],
    severity: Severity,
    immediate: StepTemplate,
    mid_term: StepTemplate,
    long_term: StepTemplate,
    courses: &'static [CourseTemplate],
    insights: InsightTemplate,
}

const IMMEDIATE_REQUIREMENTS: [&str; 3] = [
    "Build portfolio projects demonstrating core skills",
    "Learn fundamental technologies and tools",
    "Gain practical experience through internships or projects",
];

const MID_TERM_REQUIREMENTS: [&str; 3] = [
    "Develop advanced technical expertise",
    "Lead projects and mentor junior team members",
    "Specialize in specific domains or technologies",
];

const LONG_TERM_REQUIREMENTS: [&str; 3] = [
    "Team leadership and management skills",
    "Strategic planning and decision making",
    "Cross-functional collaboration and stakeholder management",
];

const RESOURCES: [&str; 3] = ["Industry blogs", "Meetup groups", "Online communities"];

const DATA_ANALYST: RoleTemplate = RoleTemplate {
    name: "Data Analyst",
    technical_gaps: &["SQL", "Python", "Tableau/Power BI", "Statistics", "Data Visualization"],
    soft_gaps: &["Business Communication", "Problem Solving", "Stakeholder Management"],
    severity: Severity::Medium,
    immediate: StepTemplate {
        role: "Junior Data Analyst",
        salary_range: "$60,000-$85,000",
    },
    mid_term: StepTemplate {
        role: "Senior Data Analyst",
        salary_range: "$90,000-$130,000",
    },
    long_term: StepTemplate {
        role: "Data Analytics Manager",
        salary_range: "$130,000-$180,000",
    },
    courses: &[
        CourseTemplate {
            name: "Google Data Analytics",
            platform: "Coursera",
            duration: "6 months",
            focus: "End-to-end analysis workflow and spreadsheets",
        },
        CourseTemplate {
            name: "SQL for Data Science",
            platform: "Udemy",
            duration: "2 weeks",
            focus: "Querying, joins and aggregations",
        },
        CourseTemplate {
            name: "Tableau Training",
            platform: "LinkedIn Learning",
            duration: "1 month",
            focus: "Dashboards and visual storytelling",
        },
    ],
    insights: InsightTemplate {
        demand_trend: "High Growth",
        emerging_tech: &["AI Analytics", "Cloud BI Tools", "Automated Reporting"],
        industry_advice: "Focus on business storytelling with data",
    },
};

const DATA_SCIENTIST: RoleTemplate = RoleTemplate {
    name: "Data Scientist",
    technical_gaps: &["Machine Learning", "Python", "SQL", "Statistics", "Big Data Tools"],
    soft_gaps: &["Business Acumen", "Storytelling", "Research Mindset"],
    severity: Severity::High,
    immediate: StepTemplate {
        role: "Junior Data Scientist",
        salary_range: "$85,000-$110,000",
    },
    mid_term: StepTemplate {
        role: "Data Scientist",
        salary_range: "$120,000-$160,000",
    },
    long_term: StepTemplate {
        role: "Lead Data Scientist",
        salary_range: "$160,000-$210,000",
    },
    courses: &[
        CourseTemplate {
            name: "Machine Learning Specialization",
            platform: "Coursera",
            duration: "4 months",
            focus: "Supervised and unsupervised learning fundamentals",
        },
        CourseTemplate {
            name: "Python for Data Science",
            platform: "DataCamp",
            duration: "3 months",
            focus: "pandas, NumPy and scikit-learn in practice",
        },
    ],
    insights: InsightTemplate {
        demand_trend: "Rapid Growth",
        emerging_tech: &["Generative AI", "MLOps", "Big Data Platforms"],
        industry_advice: "Combine technical skills with business domain knowledge",
    },
};

const SOFTWARE_ENGINEER: RoleTemplate = RoleTemplate {
    name: "Software Engineer",
    technical_gaps: &["Data Structures", "System Design", "Cloud Computing", "Testing", "DevOps"],
    soft_gaps: &["Team Collaboration", "Code Review", "Agile Methodology"],
    severity: Severity::Medium,
    immediate: StepTemplate {
        role: "Software Developer",
        salary_range: "$75,000-$100,000",
    },
    mid_term: StepTemplate {
        role: "Senior Software Engineer",
        salary_range: "$120,000-$160,000",
    },
    long_term: StepTemplate {
        role: "Engineering Manager",
        salary_range: "$160,000-$220,000",
    },
    courses: &[
        CourseTemplate {
            name: "CS50",
            platform: "edX",
            duration: "3 months",
            focus: "Computer science foundations",
        },
        CourseTemplate {
            name: "Full Stack Development",
            platform: "freeCodeCamp",
            duration: "6 months",
            focus: "Front end, back end and deployment",
        },
        CourseTemplate {
            name: "System Design",
            platform: "Educative",
            duration: "2 months",
            focus: "Scalability, caching and service boundaries",
        },
    ],
    insights: InsightTemplate {
        demand_trend: "Very High",
        emerging_tech: &["AI Programming", "Cloud Native", "DevOps"],
        industry_advice: "Build full-stack projects and learn system design",
    },
};

const ML_ENGINEER: RoleTemplate = RoleTemplate {
    name: "Machine Learning Engineer",
    technical_gaps: &["PyTorch", "TensorFlow", "MLOps", "Docker", "Kubernetes"],
    soft_gaps: &["Cross-team Communication", "Experiment Design", "Product Thinking"],
    severity: Severity::High,
    immediate: StepTemplate {
        role: "Machine Learning Engineer I",
        salary_range: "$100,000-$130,000",
    },
    mid_term: StepTemplate {
        role: "Senior Machine Learning Engineer",
        salary_range: "$140,000-$180,000",
    },
    long_term: StepTemplate {
        role: "ML Platform Lead",
        salary_range: "$180,000-$240,000",
    },
    courses: &[
        CourseTemplate {
            name: "Deep Learning Specialization",
            platform: "Coursera",
            duration: "5 months",
            focus: "Neural network architectures and training",
        },
        CourseTemplate {
            name: "Machine Learning Engineering for Production (MLOps)",
            platform: "Coursera",
            duration: "4 months",
            focus: "Deployment, monitoring and pipelines",
        },
    ],
    insights: InsightTemplate {
        demand_trend: "Rapid Growth",
        emerging_tech: &["LLM Fine-tuning", "Model Serving Platforms", "Feature Stores"],
        industry_advice: "Ship models end to end and show how you monitor them in production",
    },
};

const BUSINESS_ANALYST: RoleTemplate = RoleTemplate {
    name: "Business Analyst",
    technical_gaps: &["SQL", "Excel", "Power BI", "Requirements Gathering", "Process Modeling"],
    soft_gaps: &["Stakeholder Management", "Business Communication", "Facilitation"],
    severity: Severity::Medium,
    immediate: StepTemplate {
        role: "Junior Business Analyst",
        salary_range: "$55,000-$75,000",
    },
    mid_term: StepTemplate {
        role: "Senior Business Analyst",
        salary_range: "$80,000-$110,000",
    },
    long_term: StepTemplate {
        role: "Business Analysis Manager",
        salary_range: "$110,000-$150,000",
    },
    courses: &[
        CourseTemplate {
            name: "Business Analysis Fundamentals",
            platform: "Udemy",
            duration: "1 month",
            focus: "Requirements elicitation and documentation",
        },
        CourseTemplate {
            name: "Microsoft Power BI Data Analyst",
            platform: "Microsoft Learn",
            duration: "2 months",
            focus: "Data modeling and reporting",
        },
    ],
    insights: InsightTemplate {
        demand_trend: "Steady Growth",
        emerging_tech: &["Process Mining", "Low-code Automation", "Self-service BI"],
        industry_advice: "Pair domain expertise with hands-on data skills to move into product roles",
    },
};

fn template_for(role: &str) -> &'static RoleTemplate {
    match known_role(role) {
        Some("Data Scientist") => &DATA_SCIENTIST,
        Some("Software Engineer") => &SOFTWARE_ENGINEER,
        Some("Machine Learning Engineer") => &ML_ENGINEER,
        Some("Business Analyst") => &BUSINESS_ANALYST,
        _ => &DATA_ANALYST,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn step(template: &StepTemplate, requirements: &[&str]) -> CareerStep {
    CareerStep {
        role: template.role.to_string(),
        requirements: strings(requirements),
        salary_range: template.salary_range.to_string(),
    }
}

/// Canned technical gaps the user does not list; never empty.
fn missing_technical(template: &RoleTemplate, skills: &[String]) -> Vec<String> {
    let have: Vec<String> = skills.iter().map(|s| s.trim().to_lowercase()).collect();

    let missing: Vec<String> = template
        .technical_gaps
        .iter()
        .filter(|gap| !have.contains(&gap.to_lowercase()))
        .map(|gap| gap.to_string())
        .collect();

    if missing.is_empty() {
        strings(&template.technical_gaps[..NEVER_EMPTY_GAPS.min(template.technical_gaps.len())])
    } else {
        missing
    }
}

/// Pure function of its inputs plus the static role tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackAnalyzer;

impl FallbackAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, request: &AnalysisRequest, signal: MarketSignal) -> AnalysisResult {
        AnalysisResult::assemble(
            self.body(request),
            signal,
            AnalysisSource::EnhancedFallback,
            Utc::now(),
        )
    }

    /// Template-derived advisory content for `request`
    pub fn body(&self, request: &AnalysisRequest) -> AnalysisBody {
        let template = template_for(&request.target_role);
        let slug = template.name.to_lowercase().replace(' ', "_");

        let courses = template
            .courses
            .iter()
            .map(|course| Course {
                name: course.name.to_string(),
                platform: course.platform.to_string(),
                duration: course.duration.to_string(),
                focus: Some(course.focus.to_string()),
            })
            .collect();

        AnalysisBody {
            skill_gaps: SkillGaps {
                technical: missing_technical(template, &request.skills),
                soft_skills: strings(&template.soft_gaps[..SOFT_GAPS_REPORTED.min(template.soft_gaps.len())]),
                severity: template.severity,
                justification: Some(format!(
                    "Based on standard requirements for {} roles",
                    template.name
                )),
            },
            career_path: CareerPath {
                immediate: step(&template.immediate, &IMMEDIATE_REQUIREMENTS),
                mid_term: step(&template.mid_term, &MID_TERM_REQUIREMENTS),
                long_term: step(&template.long_term, &LONG_TERM_REQUIREMENTS),
            },
            learning_roadmap: LearningRoadmap {
                courses,
                projects: vec![
                    format!("Build a complete {}_portfolio project", slug),
                    "Contribute to open source projects in your target domain".to_string(),
                ],
                resources: strings(&RESOURCES),
                timeline: "6-12 months for comprehensive skill development".to_string(),
            },
            market_insights: MarketInsights {
                demand_trend: template.insights.demand_trend.to_string(),
                emerging_tech: strings(template.insights.emerging_tech),
                industry_advice: template.insights.industry_advice.to_string(),
            },
        }
    }

    /// Static skill-evolution content used when no provider answer is usable
    pub fn trend_body(&self) -> TrendBody {
        TrendBody {
            emerging_skills: vec![
                EmergingSkill {
                    skill: "AI/ML Integration".to_string(),
                    growth: "Rapid adoption across industries".to_string(),
                    impact: "High".to_string(),
                },
                EmergingSkill {
                    skill: "Cloud Computing".to_string(),
                    growth: "Steady enterprise adoption".to_string(),
                    impact: "High".to_string(),
                },
                EmergingSkill {
                    skill: "Data Engineering".to_string(),
                    growth: "Increasing specialization".to_string(),
                    impact: "Medium".to_string(),
                },
            ],
            declining_skills: vec![
                DecliningSkill {
                    skill: "Manual Reporting".to_string(),
                    reason: "Automation and self-service tools".to_string(),
                },
                DecliningSkill {
                    skill: "Traditional ETL".to_string(),
                    reason: "Modern data integration platforms".to_string(),
                },
            ],
            future_predictions: vec![
                SkillPrediction {
                    skill: "Generative AI Applications".to_string(),
                    timeline: "1-2 years".to_string(),
                    impact: "Transformative".to_string(),
                },
                SkillPrediction {
                    skill: "MLOps and AI Engineering".to_string(),
                    timeline: "2-3 years".to_string(),
                    impact: "High".to_string(),
                },
            ],
            salary_impact: "AI, cloud, and data engineering skills command 20-30% salary premiums"
                .to_string(),
        }
    }

    pub fn trends(&self, role: &str, years_back: u32) -> SkillTrends {
        SkillTrends::assemble(
            self.trend_body(),
            role,
            years_back,
            AnalysisSource::FallbackAnalyzer,
            Utc::now(),
        )
    }
}
