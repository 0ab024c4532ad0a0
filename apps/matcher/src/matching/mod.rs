// Matching layer: skill reconciliation, experience accumulation, evidence
// reranking, and the weighted multi-factor scorer.

pub mod experience;
pub mod rerank;
pub mod scorer;
pub mod skill_match;
