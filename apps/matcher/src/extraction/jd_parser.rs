//! Job-description parser — extracts title, required skills, required years,
//! and required education from a raw JD document.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::models::job::JobRequirement;

/// Technology vocabulary shared by all four skill-extraction passes.
pub const TECH_KEYWORDS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "typescript",
    "react",
    "angular",
    "vue",
    "node.js",
    "express",
    "django",
    "flask",
    "spring",
    "spring boot",
    "sql",
    "nosql",
    "mongodb",
    "postgresql",
    "mysql",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "git",
    "ci/cd",
    "agile",
    "scrum",
    "microservices",
    "rest",
    "rest apis",
];

/// Degree keywords in priority order, mapped to full degree names.
const EDUCATION_LEVELS: &[(&str, &str)] = &[
    ("bachelor", "Bachelor's Degree"),
    ("master", "Master's Degree"),
    ("phd", "PhD"),
    ("associate", "Associate's Degree"),
    ("high school", "High School Diploma"),
];

lazy_static! {
    static ref TITLE_RE: Regex = Regex::new(r"Title:\s*([^\n]+)").unwrap();
    static ref BULLET_LINE_RE: Regex = Regex::new(r"[-•]\s*([^\n]+)").unwrap();
    static ref COLON_LIST_RE: Regex =
        Regex::new(r"(?:experience in:|skills:)\s*\n\s*([\s\S]*?)(?:\n\n|requirements|\z)")
            .unwrap();
    static ref REQUIREMENTS_RE: Regex =
        Regex::new(r"requirements:\s*\n([\s\S]*?)(?:\n\n|\z)").unwrap();
    static ref EXPERIENCE_RES: Vec<Regex> = vec![
        Regex::new(r"(\d+)\+?\s*years?\s+of\s+experience").unwrap(),
        Regex::new(r"(\d+)\+?\s*years?\s+experience").unwrap(),
        Regex::new(r"(\d+)\+?\s*years?\s+with").unwrap(),
    ];
    static ref REQ_EXPERIENCE_RE: Regex =
        Regex::new(r"requirements:\s*\n[\s\S]*?(\d+)\+?\s*years?\s+of\s+experience").unwrap();
    /// Word-bounded matcher per keyword, compiled once.
    static ref KEYWORD_RES: Vec<(&'static str, Regex)> = TECH_KEYWORDS
        .iter()
        .map(|k| {
            (
                *k,
                Regex::new(&format!(r"\b{}\b", regex::escape(k))).unwrap(),
            )
        })
        .collect();
}

pub fn parse_job_description(text: &str) -> JobRequirement {
    let title = TITLE_RE
        .captures(text)
        .map(|c| c[1].trim().to_string())
        .unwrap_or_default();
    let required_skills = extract_required_skills(text);
    let required_experience_years = extract_required_experience(text);
    let required_education = extract_required_education(text);

    debug!(
        %title,
        skills = required_skills.len(),
        years = required_experience_years,
        education = %required_education,
        "parsed job description"
    );

    JobRequirement {
        title,
        required_skills,
        required_experience_years,
        required_education,
        match_text: text.to_string(),
    }
}

/// Four passes over the same keyword vocabulary, unioned without removal and
/// deduplicated case-insensitively: bullet lines, "experience in:"/"skills:"
/// colon lists, the "Requirements:" block, and a whole-document fallback.
fn extract_required_skills(text: &str) -> Vec<String> {
    let text_lower = text.to_lowercase();
    let mut skills: Vec<String> = Vec::new();

    for cap in BULLET_LINE_RE.captures_iter(&text_lower) {
        let point = &cap[1];
        for keyword in TECH_KEYWORDS {
            if point.contains(keyword) {
                add_unique(&mut skills, keyword);
            }
        }
    }

    for cap in COLON_LIST_RE.captures_iter(&text_lower) {
        scan_keywords(&cap[1], &mut skills);
    }

    if let Some(cap) = REQUIREMENTS_RE.captures(&text_lower) {
        scan_keywords(&cap[1], &mut skills);
    }

    scan_keywords(&text_lower, &mut skills);

    skills
}

fn scan_keywords(block: &str, skills: &mut Vec<String>) {
    for (keyword, re) in KEYWORD_RES.iter() {
        if re.is_match(block) {
            add_unique(skills, keyword);
        }
    }
}

fn add_unique(skills: &mut Vec<String>, keyword: &str) {
    let capitalized = capitalize_first(keyword);
    if !skills.contains(&capitalized) {
        skills.push(capitalized);
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// First match among three shapes over the whole text, then a
/// requirements-scoped fallback. 0 means "unspecified".
fn extract_required_experience(text: &str) -> u32 {
    let text_lower = text.to_lowercase();

    for re in EXPERIENCE_RES.iter() {
        if let Some(cap) = re.captures(&text_lower) {
            if let Ok(years) = cap[1].parse() {
                return years;
            }
        }
    }

    if let Some(cap) = REQ_EXPERIENCE_RE.captures(&text_lower) {
        if let Ok(years) = cap[1].parse() {
            return years;
        }
    }

    0
}

fn extract_required_education(text: &str) -> String {
    let text_lower = text.to_lowercase();
    for (level, degree) in EDUCATION_LEVELS {
        if text_lower.contains(level) {
            return degree.to_string();
        }
    }
    String::new()
}
