use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub inference_api_url: String,
    pub skills_ontology_path: String,
    pub job_title_mapping_path: String,
    pub resume_dir: String,
    pub job_description_path: String,
    /// End-to-end deadline per document, covering every capability call.
    pub deadline_secs: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            inference_api_url: require_env("INFERENCE_API_URL")?,
            skills_ontology_path: env_or("SKILLS_ONTOLOGY_PATH", "data/skills_ontology.json"),
            job_title_mapping_path: env_or(
                "JOB_TITLE_MAPPING_PATH",
                "data/job_title_mapping.json",
            ),
            resume_dir: env_or("RESUME_DIR", "resumes"),
            job_description_path: env_or("JOB_DESCRIPTION_PATH", "files/job_description.txt"),
            deadline_secs: std::env::var("DOCUMENT_DEADLINE_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse::<u64>()
                .context("DOCUMENT_DEADLINE_SECS must be a number of seconds")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
