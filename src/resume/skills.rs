// src/resume/skills.rs
use std::collections::BTreeSet;

/// Lowercase skill keywords recognised in resume text.
pub const SKILL_VOCABULARY: &[&str] = &[
    "python", "java", "javascript", "sql", "r", "c++", "c#", "php", "swift", "html", "css",
    "react", "angular", "vue", "node.js", "django", "flask", "spring", "mysql", "postgresql",
    "mongodb", "redis", "aws", "azure", "gcp", "docker", "kubernetes", "jenkins", "git", "linux",
    "machine learning", "deep learning", "data analysis", "tableau", "power bi", "excel",
    "tensorflow", "pytorch", "pandas", "numpy", "scikit-learn", "nlp", "computer vision", "rest",
    "feature engineering", "deployment", "statistics", "visualization", "requirements",
    "stakeholder management", "process", "dashboard", "ml",
];

/// Keywords this short only match as whole words.
const WHOLE_WORD_MAX_LEN: usize = 2;

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn contains_word(haystack: &str, needle: &str) -> bool {
    haystack.match_indices(needle).any(|(start, _)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + needle.len()..].chars().next();
        !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
    })
}

/// Sorted, deduplicated vocabulary keywords found in `text`, case-insensitively
pub fn extract_skills(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();

    SKILL_VOCABULARY
        .iter()
        .filter(|skill| {
            if skill.len() <= WHOLE_WORD_MAX_LEN {
                contains_word(&lower, skill)
            } else {
                lower.contains(*skill)
            }
        })
        .map(|skill| skill.to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_skills_sorted_and_unique() {
        let skills = extract_skills("SQL, Python, more SQL and Power BI dashboards");
        assert_eq!(skills, vec!["dashboard", "power bi", "python", "sql"]);
    }

    #[test]
    fn test_short_keywords_need_word_boundaries() {
        assert!(extract_skills("Senior reporting manager").is_empty());
        assert_eq!(extract_skills("Modeling in R and ML"), vec!["ml", "r"]);
        assert_eq!(extract_skills("C# and C++ services"), vec!["c#", "c++"]);
    }
}
