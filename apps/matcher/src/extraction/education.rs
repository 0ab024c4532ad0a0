//! Education extraction.
//!
//! Pipe-delimited `degree | institution | dates` triples when present,
//! otherwise a line-oriented fold keyed on degree and institution keyword
//! vocabularies, with the same flush-on-boundary discipline as work history.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::resume::EducationEntry;

lazy_static! {
    static ref DEGREE_RE: Regex =
        Regex::new(r"(?i)(bachelor|master|phd|b\.s\.|m\.s\.|b\.a\.|m\.a\.)").unwrap();
    static ref INSTITUTION_RE: Regex =
        Regex::new(r"(?i)(university|college|institute|school)").unwrap();
    static ref YEAR_RE: Regex = Regex::new(r"\d{4}").unwrap();
}

pub fn extract_education(text: &str) -> Vec<EducationEntry> {
    if text.lines().any(is_pipe_triple) {
        extract_pipe_delimited(text)
    } else {
        extract_line_oriented(text)
    }
}

fn is_pipe_triple(line: &str) -> bool {
    line.split('|').count() >= 3
}

fn extract_pipe_delimited(text: &str) -> Vec<EducationEntry> {
    let mut entries = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || !line.contains('|') {
            continue;
        }
        let parts: Vec<&str> = line.split('|').map(str::trim).collect();
        if parts.len() < 3 {
            continue;
        }
        let years: Vec<&str> = YEAR_RE.find_iter(parts[2]).map(|m| m.as_str()).collect();
        let (start_date, end_date) = if years.len() >= 2 {
            (years[0].to_string(), years[1].to_string())
        } else {
            (String::new(), String::new())
        };
        entries.push(EducationEntry {
            study_type: parts[0].to_string(),
            institution: parts[1].to_string(),
            area: String::new(),
            start_date,
            end_date,
        });
    }

    entries
}

fn extract_line_oriented(text: &str) -> Vec<EducationEntry> {
    let mut entries = Vec::new();
    let mut current: Option<EducationEntry> = None;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if DEGREE_RE.is_match(line) {
            if let Some(prev) = current.take() {
                entries.push(prev);
            }
            current = Some(EducationEntry {
                study_type: line.to_string(),
                ..Default::default()
            });
        } else if YEAR_RE.is_match(line) {
            let years: Vec<&str> = YEAR_RE.find_iter(line).map(|m| m.as_str()).collect();
            let entry = current.get_or_insert_with(EducationEntry::default);
            if years.len() >= 2 {
                entry.start_date = years[0].to_string();
                entry.end_date = years[1].to_string();
            } else {
                entry.start_date = years[0].to_string();
                entry.end_date = "Present".to_string();
            }
        } else if INSTITUTION_RE.is_match(line) {
            current.get_or_insert_with(EducationEntry::default).institution = line.to_string();
        }
    }

    if let Some(prev) = current.take() {
        entries.push(prev);
    }

    entries
}
