//! End-to-end orchestration: one resume scored against one parsed job
//! description, or a batch of resumes against a JD parsed once.
//!
//! Every stage is a pure transformation over value records; the pipeline
//! itself keeps no state between items, so batches parallelize trivially.

use std::sync::Arc;
use std::time::Duration;

use chrono::{Datelike, Utc};
use tokio::time::timeout;
use tracing::{error, info};

use crate::errors::AppError;
use crate::extraction::jd_parser::parse_job_description;
use crate::extraction::resume_parser::parse_resume;
use crate::inference::{Embedder, EntityTagger, Reranker};
use crate::matching::rerank::rank_evidence;
use crate::matching::scorer::{calculate_match_score, ScoringWeights};
use crate::models::job::JobRequirement;
use crate::models::report::{BatchOutcome, MatchResult, RankedEvidence};
use crate::models::resume::Resume;
use crate::normalize::LookupTables;

pub struct Pipeline {
    tagger: Arc<dyn EntityTagger>,
    embedder: Arc<dyn Embedder>,
    reranker: Arc<dyn Reranker>,
    tables: LookupTables,
    weights: ScoringWeights,
    /// Single end-to-end deadline per document, covering every capability
    /// call made on its behalf. Exceeding it fails the item; there are no
    /// partial results.
    deadline: Duration,
}

impl Pipeline {
    pub fn new(
        tagger: Arc<dyn EntityTagger>,
        embedder: Arc<dyn Embedder>,
        reranker: Arc<dyn Reranker>,
        tables: LookupTables,
        weights: ScoringWeights,
        deadline: Duration,
    ) -> Self {
        Self {
            tagger,
            embedder,
            reranker,
            tables,
            weights,
            deadline,
        }
    }

    /// Parses, normalizes, scores, and ranks evidence for one resume.
    pub async fn process_pair(
        &self,
        resume_text: &str,
        jd: &JobRequirement,
    ) -> Result<(Resume, MatchResult, Vec<RankedEvidence>), AppError> {
        if resume_text.trim().is_empty() {
            return Err(AppError::Input("resume text is empty".to_string()));
        }

        let current_year = Utc::now().year();
        let mut resume = parse_resume(resume_text, self.tagger.as_ref(), current_year).await;
        self.tables.apply(&mut resume);

        let result = calculate_match_score(
            &resume,
            jd,
            self.embedder.as_ref(),
            &self.weights,
            current_year,
        )
        .await;
        let evidence = rank_evidence(&resume, jd, self.reranker.as_ref()).await;

        Ok((resume, result, evidence))
    }

    /// Parses the JD once and scores every resume against it. A failing item
    /// is recorded as an error entry and never aborts its siblings.
    pub async fn run_batch(&self, jd_text: &str, resumes: &[(String, String)]) -> Vec<BatchOutcome> {
        let jd = parse_job_description(jd_text);
        info!(
            title = %jd.title,
            skills = jd.required_skills.len(),
            "parsed job description"
        );

        let mut outcomes = Vec::with_capacity(resumes.len());
        for (file, text) in resumes {
            let outcome = match timeout(self.deadline, self.process_pair(text, &jd)).await {
                Ok(Ok((resume, result, ranked_evidence))) => BatchOutcome::Scored {
                    file: file.clone(),
                    resume,
                    result,
                    ranked_evidence,
                },
                Ok(Err(e)) => {
                    error!("batch item '{file}' failed: {e}");
                    BatchOutcome::Failed {
                        file: file.clone(),
                        error: e.to_string(),
                    }
                }
                Err(_) => {
                    let reason =
                        format!("deadline of {}s exceeded", self.deadline.as_secs());
                    error!("batch item '{file}' failed: {reason}");
                    BatchOutcome::Failed {
                        file: file.clone(),
                        error: reason,
                    }
                }
            };
            outcomes.push(outcome);
        }
        outcomes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::fakes::{FakeEmbedder, FakeReranker, FakeTagger, SlowEmbedder};
    use std::collections::HashMap;

    const RESUME: &str = "\
Jane Doe
jane@example.com

Skills
Python, K8s

Experience
Engineer | Acme Corp | 2018 - 2022
";

    const JD: &str = "Title: Backend Engineer\nRequirements:\n- 3+ years of experience\n- python\n- kubernetes";

    fn tables() -> LookupTables {
        LookupTables {
            skills: HashMap::from([("K8s".to_string(), "Kubernetes".to_string())]),
            job_titles: HashMap::new(),
        }
    }

    fn pipeline(embedder: Arc<dyn Embedder>, deadline: Duration) -> Pipeline {
        Pipeline::new(
            Arc::new(FakeTagger::empty()),
            embedder,
            Arc::new(FakeReranker::with_default(0.5)),
            tables(),
            ScoringWeights::default(),
            deadline,
        )
    }

    #[tokio::test]
    async fn test_happy_path_scores_and_ranks() {
        let pipeline = pipeline(
            Arc::new(FakeEmbedder::with_default(0.0)),
            Duration::from_secs(5),
        );
        let jd = parse_job_description(JD);

        let (resume, result, evidence) = pipeline.process_pair(RESUME, &jd).await.unwrap();

        // K8s is canonicalized to Kubernetes before matching, so both
        // requirements land in the exact-match bucket.
        assert_eq!(resume.skills[1].name, "Kubernetes");
        assert!(result
            .details
            .skill_matches
            .matched
            .contains(&"Python".to_string()));
        assert!(result
            .details
            .skill_matches
            .matched
            .contains(&"Kubernetes".to_string()));
        assert!(result.skill_score > 0.0);
        assert!(!evidence.is_empty());
    }

    #[tokio::test]
    async fn test_empty_resume_is_input_error() {
        let pipeline = pipeline(
            Arc::new(FakeEmbedder::with_default(0.0)),
            Duration::from_secs(5),
        );
        let jd = parse_job_description(JD);
        let err = pipeline.process_pair("   \n", &jd).await.unwrap_err();
        assert!(matches!(err, AppError::Input(_)));
    }

    #[tokio::test]
    async fn test_batch_isolates_failing_item() {
        let pipeline = pipeline(
            Arc::new(FakeEmbedder::with_default(0.0)),
            Duration::from_secs(5),
        );
        let resumes = vec![
            ("empty.txt".to_string(), "".to_string()),
            ("jane.txt".to_string(), RESUME.to_string()),
        ];

        let outcomes = pipeline.run_batch(JD, &resumes).await;

        assert_eq!(outcomes.len(), 2);
        assert!(outcomes[0].is_failed());
        assert_eq!(outcomes[0].file(), "empty.txt");
        assert!(!outcomes[1].is_failed());
        assert_eq!(outcomes[1].file(), "jane.txt");
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_exceeded_fails_item_without_partial_result() {
        let pipeline = pipeline(
            Arc::new(SlowEmbedder {
                delay: Duration::from_secs(60),
            }),
            Duration::from_secs(1),
        );
        let resumes = vec![("slow.txt".to_string(), RESUME.to_string())];

        let outcomes = pipeline.run_batch(JD, &resumes).await;

        assert_eq!(outcomes.len(), 1);
        match &outcomes[0] {
            BatchOutcome::Failed { file, error } => {
                assert_eq!(file, "slow.txt");
                assert!(error.contains("deadline"));
            }
            BatchOutcome::Scored { .. } => panic!("expected the slow item to fail"),
        }
    }
}
