//! Contact-info extraction over the preamble region.
//!
//! Precedence per field: explicit label > NER > capitalization heuristic.
//! The first rule that produces a value wins and later rules are skipped.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, warn};

use crate::inference::{EntityKind, EntityTagger};

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap();
    static ref PHONE_RE: Regex =
        Regex::new(r"\+?1?\s*\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}").unwrap();
    static ref NAME_LABEL_RE: Regex = Regex::new(r"(?i)Name:\s*(.+)").unwrap();
    static ref LOCATION_LABEL_RE: Regex = Regex::new(r"(?i)Location:\s*(.+)").unwrap();
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

pub async fn extract_contact_info(text: &str, tagger: &dyn EntityTagger) -> ContactInfo {
    let email = EMAIL_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();
    let phone = PHONE_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    let mut name = name_from_label(text);
    let mut location = location_from_label(text);

    if name.is_empty() || location.is_empty() {
        match tagger.tag_entities(text).await {
            Ok(spans) => {
                if name.is_empty() {
                    name = spans
                        .iter()
                        .find(|s| s.kind == EntityKind::Person)
                        .map(|s| s.text.clone())
                        .unwrap_or_default();
                }
                if location.is_empty() {
                    let parts: Vec<&str> = spans
                        .iter()
                        .filter(|s| {
                            s.kind == EntityKind::Location && !s.text.eq_ignore_ascii_case("N/A")
                        })
                        .map(|s| s.text.as_str())
                        .collect();
                    location = parts.join(", ");
                }
            }
            Err(e) => warn!("entity tagging degraded to no entities: {e}"),
        }
    }

    if name.is_empty() {
        name = name_from_capitalization(text);
        if !name.is_empty() {
            debug!("name fell back to capitalization heuristic: '{name}'");
        }
    }

    ContactInfo {
        name,
        email,
        phone,
        location,
    }
}

/// A labeled name is accepted only when the captured span has at most three
/// whitespace-delimited tokens; longer spans are usually headlines.
fn name_from_label(text: &str) -> String {
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(cap) = NAME_LABEL_RE.captures(line) {
            let candidate = cap[1].trim();
            if candidate.split_whitespace().count() <= 3 {
                return candidate.to_string();
            }
        }
    }
    String::new()
}

fn location_from_label(text: &str) -> String {
    if let Some(cap) = LOCATION_LABEL_RE.captures(text) {
        let candidate = cap[1].trim();
        if !candidate.eq_ignore_ascii_case("N/A") {
            return candidate.to_string();
        }
    }
    String::new()
}

/// A line of 2-3 tokens, each starting uppercase and containing no '@', is
/// treated as a name candidate.
fn name_from_capitalization(text: &str) -> String {
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.contains('@') {
            continue;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() >= 2
            && parts.len() <= 3
            && parts
                .iter()
                .all(|p| p.chars().next().is_some_and(|c| c.is_uppercase()))
        {
            return line.to_string();
        }
    }
    String::new()
}
