//! Canonicalization of raw skill and role strings via external lookup tables.
//!
//! Lookups are exact and case-sensitive on the table's keys; misses pass the
//! original string through unchanged. This is the only in-place mutation in
//! the pipeline and runs once, after extraction and before matching.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::resume::Resume;

#[derive(Debug, Clone, Default)]
pub struct LookupTables {
    pub skills: HashMap<String, String>,
    pub job_titles: HashMap<String, String>,
}

impl LookupTables {
    /// Loads both tables. Missing or malformed files are configuration errors
    /// and abort startup.
    pub fn load(skills_path: &Path, job_titles_path: &Path) -> Result<Self> {
        Ok(Self {
            skills: load_table(skills_path)?,
            job_titles: load_table(job_titles_path)?,
        })
    }

    pub fn canonical_skill<'a>(&'a self, raw: &'a str) -> &'a str {
        self.skills.get(raw).map(String::as_str).unwrap_or(raw)
    }

    pub fn canonical_title<'a>(&'a self, raw: &'a str) -> &'a str {
        self.job_titles.get(raw).map(String::as_str).unwrap_or(raw)
    }

    /// Rewrites skill names and work positions to their canonical forms.
    pub fn apply(&self, resume: &mut Resume) {
        for skill in &mut resume.skills {
            skill.name = self.canonical_skill(&skill.name).to_string();
        }
        for entry in &mut resume.work {
            entry.position = self.canonical_title(&entry.position).to_string();
        }
    }
}

fn load_table(path: &Path) -> Result<HashMap<String, String>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading lookup table {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing lookup table {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{SkillEntry, WorkEntry};
    use std::io::Write;

    fn tables() -> LookupTables {
        LookupTables {
            skills: HashMap::from([
                ("JS".to_string(), "JavaScript".to_string()),
                ("K8s".to_string(), "Kubernetes".to_string()),
            ]),
            job_titles: HashMap::from([(
                "SWE".to_string(),
                "Software Engineer".to_string(),
            )]),
        }
    }

    fn resume_with(skill: &str, position: &str) -> Resume {
        Resume {
            skills: vec![SkillEntry {
                name: skill.to_string(),
                level: "Intermediate".to_string(),
            }],
            work: vec![WorkEntry {
                position: position.to_string(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_alias_replaced_with_canonical() {
        let mut resume = resume_with("JS", "SWE");
        tables().apply(&mut resume);
        assert_eq!(resume.skills[0].name, "JavaScript");
        assert_eq!(resume.work[0].position, "Software Engineer");
    }

    #[test]
    fn test_miss_passes_through_unchanged() {
        let mut resume = resume_with("Haskell", "Gardener");
        tables().apply(&mut resume);
        assert_eq!(resume.skills[0].name, "Haskell");
        assert_eq!(resume.work[0].position, "Gardener");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mut resume = resume_with("js", "swe");
        tables().apply(&mut resume);
        assert_eq!(resume.skills[0].name, "js");
        assert_eq!(resume.work[0].position, "swe");
    }

    #[test]
    fn test_normalizing_canonical_name_is_idempotent() {
        let mut resume = resume_with("JavaScript", "Software Engineer");
        tables().apply(&mut resume);
        assert_eq!(resume.skills[0].name, "JavaScript");
        tables().apply(&mut resume);
        assert_eq!(resume.skills[0].name, "JavaScript");
    }

    #[test]
    fn test_load_reads_json_maps() {
        let mut skills_file = tempfile::NamedTempFile::new().unwrap();
        write!(skills_file, r#"{{"JS": "JavaScript"}}"#).unwrap();
        let mut titles_file = tempfile::NamedTempFile::new().unwrap();
        write!(titles_file, r#"{{"SWE": "Software Engineer"}}"#).unwrap();

        let tables = LookupTables::load(skills_file.path(), titles_file.path()).unwrap();
        assert_eq!(tables.canonical_skill("JS"), "JavaScript");
        assert_eq!(tables.canonical_title("SWE"), "Software Engineer");
    }

    #[test]
    fn test_load_missing_file_is_hard_error() {
        let titles_file = tempfile::NamedTempFile::new().unwrap();
        let result = LookupTables::load(Path::new("/nonexistent/skills.json"), titles_file.path());
        assert!(result.is_err());
    }
}
