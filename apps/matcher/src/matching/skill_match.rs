//! Skill reconciliation: an exact pass over case-folded names, then a
//! semantic pass over whatever requirements remain.

use tracing::warn;

use crate::inference::Embedder;

/// A requirement is semantically matched only above this similarity,
/// strictly: a score of exactly 0.7 stays missing.
pub const SEMANTIC_SKILL_THRESHOLD: f64 = 0.7;

/// A requirement judged equivalent to a resume skill by the embedding model.
#[derive(Debug, Clone, PartialEq)]
pub struct SemanticSkillMatch {
    pub requirement: String,
    pub resume_skill: String,
    pub score: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillMatchOutcome {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub semantically_matched: Vec<SemanticSkillMatch>,
    /// (|matched| + |semantically matched|) / |requirements|; 1.0 when the
    /// requirement list is empty.
    pub score: f64,
}

/// `resume_skills` must already be case-folded; requirements keep their raw
/// case and are reported back verbatim.
pub async fn match_skills(
    resume_skills: &[String],
    requirements: &[String],
    embedder: &dyn Embedder,
) -> SkillMatchOutcome {
    if requirements.is_empty() {
        return SkillMatchOutcome {
            score: 1.0,
            ..Default::default()
        };
    }

    let mut matched = Vec::new();
    let mut remaining = Vec::new();
    for requirement in requirements {
        let folded = requirement.to_lowercase();
        if resume_skills.iter().any(|s| *s == folded) {
            matched.push(requirement.clone());
        } else {
            remaining.push(requirement);
        }
    }

    let mut semantically_matched = Vec::new();
    let mut missing = Vec::new();
    for requirement in remaining {
        let mut best_skill: Option<&String> = None;
        let mut best_score = 0.0_f64;
        for skill in resume_skills {
            let similarity = match embedder.similarity(requirement, skill).await {
                Ok(s) => s,
                Err(e) => {
                    warn!("similarity for '{requirement}' vs '{skill}' degraded to 0.0: {e}");
                    0.0
                }
            };
            if similarity > best_score {
                best_score = similarity;
                best_skill = Some(skill);
            }
        }

        match best_skill {
            Some(skill) if best_score > SEMANTIC_SKILL_THRESHOLD => {
                semantically_matched.push(SemanticSkillMatch {
                    requirement: requirement.clone(),
                    resume_skill: title_case(skill),
                    score: best_score,
                });
            }
            _ => missing.push(requirement.clone()),
        }
    }

    let score = (matched.len() + semantically_matched.len()) as f64 / requirements.len() as f64;

    SkillMatchOutcome {
        matched,
        missing,
        semantically_matched,
        score,
    }
}

/// Uppercases the first letter of each whitespace-separated word.
pub(crate) fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
