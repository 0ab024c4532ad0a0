//! Skill, certification, and language extraction: a shared split-and-trim
//! rule over comma, bullet, pipe, and newline delimiters.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::resume::SkillEntry;

/// Extraction does not parse explicit proficiency.
pub const DEFAULT_SKILL_LEVEL: &str = "Intermediate";

lazy_static! {
    static ref SPLIT_RE: Regex = Regex::new(r"[,•|\n]").unwrap();
    static ref BULLET_PREFIX_RE: Regex = Regex::new(r"^[-•]\s*").unwrap();
}

pub fn extract_skills(text: &str) -> Vec<SkillEntry> {
    split_tokens(text)
        .into_iter()
        .map(|name| SkillEntry {
            name,
            level: DEFAULT_SKILL_LEVEL.to_string(),
        })
        .collect()
}

/// Certifications and languages share the skill tokenization but stay flat.
pub fn extract_list_items(text: &str) -> Vec<String> {
    split_tokens(text)
}

fn split_tokens(text: &str) -> Vec<String> {
    SPLIT_RE
        .split(text)
        .filter_map(|raw| {
            let token = BULLET_PREFIX_RE.replace(raw.trim(), "");
            let token = token.trim().trim_end_matches(|c| matches!(c, '.' | ';' | ':'));
            if token.is_empty() {
                None
            } else {
                Some(token.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_separated_skills() {
        let skills = extract_skills("Python, SQL, Docker");
        let names: Vec<&str> = skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Python", "SQL", "Docker"]);
    }

    #[test]
    fn test_every_skill_gets_default_level() {
        let skills = extract_skills("Python\nRust");
        assert!(skills.iter().all(|s| s.level == DEFAULT_SKILL_LEVEL));
    }

    #[test]
    fn test_bullets_and_newlines_split_and_strip() {
        let skills = extract_skills("- Python\n• SQL\n- Kubernetes.");
        let names: Vec<&str> = skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Python", "SQL", "Kubernetes"]);
    }

    #[test]
    fn test_empty_tokens_discarded() {
        let skills = extract_skills("Python,, ,\n\n,SQL");
        assert_eq!(skills.len(), 2);
    }

    #[test]
    fn test_empty_input_yields_empty_list() {
        assert!(extract_skills("").is_empty());
        assert!(extract_list_items("   \n ").is_empty());
    }

    #[test]
    fn test_certifications_stay_flat() {
        let certs = extract_list_items("AWS Solutions Architect, CKA\n- Security+");
        assert_eq!(
            certs,
            vec!["AWS Solutions Architect", "CKA", "Security+"]
        );
    }
}
