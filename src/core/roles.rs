// src/core/roles.rs
use crate::utils::match_known_role;

/// Roles with dedicated market and template data, in the order `/roles` lists them.
pub const KNOWN_ROLES: [&str; 5] = [
    "Data Analyst",
    "Data Scientist",
    "Software Engineer",
    "Machine Learning Engineer",
    "Business Analyst",
];

pub const DEFAULT_ROLE: &str = "Data Analyst";

/// Canonical known role for `role`, if any
pub fn known_role(role: &str) -> Option<&'static str> {
    match_known_role(role, &KNOWN_ROLES)
}

/// Canonical known role for `role`, or the default role
pub fn resolve_role(role: &str) -> &'static str {
    known_role(role).unwrap_or(DEFAULT_ROLE)
}
