mod config;
mod errors;
mod extraction;
mod inference;
mod matching;
mod models;
mod normalize;
mod pipeline;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::inference::InferenceClient;
use crate::matching::scorer::ScoringWeights;
use crate::normalize::LookupTables;
use crate::pipeline::Pipeline;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting matcher v{}", env!("CARGO_PKG_VERSION"));

    // Lookup tables are required; a missing table is a configuration error.
    let tables = LookupTables::load(
        Path::new(&config.skills_ontology_path),
        Path::new(&config.job_title_mapping_path),
    )?;
    info!(
        skills = tables.skills.len(),
        job_titles = tables.job_titles.len(),
        "lookup tables loaded"
    );

    // One HTTP client serves all three capabilities.
    let client = Arc::new(InferenceClient::new(config.inference_api_url.clone()));
    info!("inference client initialized ({})", config.inference_api_url);

    let pipeline = Pipeline::new(
        client.clone(),
        client.clone(),
        client,
        tables,
        ScoringWeights::default(),
        Duration::from_secs(config.deadline_secs),
    );

    let jd_text = std::fs::read_to_string(&config.job_description_path).with_context(|| {
        format!("reading job description {}", config.job_description_path)
    })?;
    let resumes = load_resume_texts(Path::new(&config.resume_dir))?;
    info!(count = resumes.len(), "loaded resumes from {}", config.resume_dir);

    let outcomes = pipeline.run_batch(&jd_text, &resumes).await;

    let failed: Vec<&str> = outcomes
        .iter()
        .filter(|o| o.is_failed())
        .map(|o| o.file())
        .collect();
    info!(
        scored = outcomes.len() - failed.len(),
        failed = failed.len(),
        "batch complete"
    );
    if !failed.is_empty() {
        warn!("items recorded as error entries: {}", failed.join(", "));
    }

    println!("{}", serde_json::to_string_pretty(&outcomes)?);
    Ok(())
}

/// Reads every .txt resume in the directory, sorted by filename so batch
/// output order is stable. Unreadable files are skipped with a warning.
fn load_resume_texts(dir: &Path) -> Result<Vec<(String, String)>> {
    let mut resumes = Vec::new();

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("reading resume directory {}", dir.display()))?
    {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("txt") {
            continue;
        }
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        match std::fs::read_to_string(&path) {
            Ok(text) => resumes.push((name, text)),
            Err(e) => warn!("skipping unreadable resume {}: {e}", path.display()),
        }
    }

    resumes.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(resumes)
}
