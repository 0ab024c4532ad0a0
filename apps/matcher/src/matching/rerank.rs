//! Cross-encoder evidence ranking: resume facts scored for relevance against
//! the JD text, highest first.

use std::cmp::Ordering;

use tracing::warn;

use crate::inference::Reranker;
use crate::models::job::JobRequirement;
use crate::models::report::RankedEvidence;
use crate::models::resume::Resume;

/// Flattens resume facts into rerank candidates, skipping entries with
/// nothing to show.
fn prepare_evidence(resume: &Resume) -> Vec<(String, String)> {
    let mut candidates = Vec::new();

    for skill in &resume.skills {
        if !skill.name.is_empty() {
            candidates.push(("skill".to_string(), format!("Skill: {}", skill.name)));
        }
    }

    for work in &resume.work {
        if !work.position.is_empty() || !work.company.is_empty() {
            candidates.push((
                "experience".to_string(),
                format!("Experience: {} at {}", work.position, work.company),
            ));
        }
    }

    for education in &resume.education {
        if !education.study_type.is_empty() || !education.area.is_empty() {
            candidates.push((
                "education".to_string(),
                format!("Education: {} in {}", education.study_type, education.area),
            ));
        }
    }

    candidates
}

/// Scores every evidence candidate against the JD text and sorts descending.
/// A reranker failure degrades to an empty ranking; it never fails the item.
pub async fn rank_evidence(
    resume: &Resume,
    jd: &JobRequirement,
    reranker: &dyn Reranker,
) -> Vec<RankedEvidence> {
    let candidates = prepare_evidence(resume);
    let mut ranked = Vec::with_capacity(candidates.len());

    for (kind, text) in candidates {
        match reranker.rerank(&jd.match_text, &text).await {
            Ok(score) => ranked.push(RankedEvidence { kind, text, score }),
            Err(e) => {
                warn!("evidence reranking degraded to empty ranking: {e}");
                return Vec::new();
            }
        }
    }

    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    ranked
}
