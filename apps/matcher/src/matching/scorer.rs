//! Multi-factor match scorer: skill, experience, education, and
//! whole-document semantic similarity, combined by fixed weights into one
//! explainable result.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::inference::Embedder;
use crate::matching::experience::calculate_total_experience;
use crate::matching::skill_match::match_skills;
use crate::models::job::JobRequirement;
use crate::models::report::{CategoryDetail, MatchDetails, MatchResult, SkillMatchDetail};
use crate::models::resume::{EducationEntry, Resume};

/// Degree vocabulary for the binary education check. Literal keyword overlap
/// only: "B.Tech" does not satisfy "Bachelor" without an equivalency table.
pub const DEGREE_KEYWORDS: &[&str] = &["bachelor", "b.tech", "master", "m.tech", "phd"];

/// Category weights for the overall score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub semantic: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 0.5,
            experience: 0.3,
            education: 0.1,
            semantic: 0.1,
        }
    }
}

pub async fn calculate_match_score(
    resume: &Resume,
    jd: &JobRequirement,
    embedder: &dyn Embedder,
    weights: &ScoringWeights,
    current_year: i32,
) -> MatchResult {
    let resume_skill_names = resume.skill_names_folded();

    let skills = match_skills(&resume_skill_names, &jd.required_skills, embedder).await;

    let calculated_years = calculate_total_experience(&resume.work, current_year);
    let experience_score = if jd.required_experience_years > 0 {
        (calculated_years / jd.required_experience_years as f64).min(1.0)
    } else {
        1.0
    };

    let education_score = score_education(&resume.education, &jd.required_education);

    let resume_full_text = format!("{} {}", resume.summary, resume_skill_names.join(" "));
    let semantic_score = match embedder
        .similarity(resume_full_text.trim(), &jd.match_text)
        .await
    {
        Ok(similarity) => similarity.clamp(0.0, 1.0),
        Err(e) => {
            warn!("document similarity degraded to 0.0: {e}");
            0.0
        }
    };

    let overall_score = skills.score * weights.skills
        + experience_score * weights.experience
        + education_score * weights.education
        + semantic_score * weights.semantic;

    let experience_line = format!(
        "Candidate has {calculated_years:.1} years (required: {})",
        jd.required_experience_years
    );
    let experience_matches = if experience_score >= 1.0 {
        CategoryDetail {
            matched: vec![experience_line],
            missing: Vec::new(),
        }
    } else {
        CategoryDetail {
            matched: Vec::new(),
            missing: vec![experience_line],
        }
    };

    let education_matches = if jd.required_education.is_empty() {
        CategoryDetail::default()
    } else if education_score >= 1.0 {
        CategoryDetail {
            matched: vec![jd.required_education.clone()],
            missing: Vec::new(),
        }
    } else {
        CategoryDetail {
            matched: Vec::new(),
            missing: vec![jd.required_education.clone()],
        }
    };

    let details = MatchDetails {
        skill_matches: SkillMatchDetail {
            matched: skills.matched,
            missing: skills.missing,
            semantically_matched: skills
                .semantically_matched
                .iter()
                .map(|m| {
                    format!(
                        "{} (similar to {}, score: {:.2})",
                        m.requirement, m.resume_skill, m.score
                    )
                })
                .collect(),
        },
        education_matches,
        experience_matches,
    };

    MatchResult {
        overall_score,
        skill_score: skills.score,
        experience_score,
        education_score,
        semantic_score,
        calculated_experience_years: calculated_years,
        details,
    }
}

/// Binary pass/fail: 1.0 with no requirement, else 1.0 only when some resume
/// study type shares a degree keyword with the requirement string.
fn score_education(education: &[EducationEntry], required: &str) -> f64 {
    if required.is_empty() {
        return 1.0;
    }
    let required_lower = required.to_lowercase();
    for entry in education {
        let study_lower = entry.study_type.to_lowercase();
        if DEGREE_KEYWORDS
            .iter()
            .any(|kw| required_lower.contains(kw) && study_lower.contains(kw))
        {
            return 1.0;
        }
    }
    0.0
}
