use serde::{Deserialize, Serialize};

use crate::models::resume::Resume;

/// Skill-level audit trail: which requirements matched exactly, which were
/// judged equivalent by the embedding model, and which are absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillMatchDetail {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub semantically_matched: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryDetail {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchDetails {
    pub skill_matches: SkillMatchDetail,
    pub education_matches: CategoryDetail,
    pub experience_matches: CategoryDetail,
}

/// The scored comparison of one resume against one job requirement.
///
/// Field names and nesting are the data contract toward any API or CLI layer;
/// downstream consumers depend on them staying stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub overall_score: f64,
    pub skill_score: f64,
    pub experience_score: f64,
    pub education_score: f64,
    pub semantic_score: f64,
    pub calculated_experience_years: f64,
    pub details: MatchDetails,
}

/// One piece of resume evidence scored by the cross-encoder against the JD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEvidence {
    pub kind: String,
    pub text: String,
    pub score: f64,
}

/// Outcome of one item in a batch run. A failed item carries its filename and
/// the failure reason instead of aborting sibling items.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum BatchOutcome {
    Scored {
        file: String,
        resume: Resume,
        #[serde(rename = "match")]
        result: MatchResult,
        ranked_evidence: Vec<RankedEvidence>,
    },
    Failed {
        file: String,
        error: String,
    },
}

impl BatchOutcome {
    pub fn file(&self) -> &str {
        match self {
            BatchOutcome::Scored { file, .. } => file,
            BatchOutcome::Failed { file, .. } => file,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, BatchOutcome::Failed { .. })
    }
}
