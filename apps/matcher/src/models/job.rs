use serde::{Deserialize, Serialize};

/// Structured requirements parsed from a job description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRequirement {
    pub title: String,
    /// Deduplicated case-insensitively, stored capitalized in discovery order.
    pub required_skills: Vec<String>,
    /// 0 means "unspecified".
    pub required_experience_years: u32,
    /// Full degree name, or empty when the JD names none.
    pub required_education: String,
    /// Original JD text retained for whole-document semantic comparison.
    pub match_text: String,
}
