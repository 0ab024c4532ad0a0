//! Work-history extraction.
//!
//! Two recognized input shapes: pipe-delimited `position | company | dates`
//! triples, and a line-oriented heuristic keyed on company-suffix, year, and
//! job-title vocabularies. Entry assembly is an explicit builder that flushes
//! on each boundary line and once more at end of input.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::resume::WorkEntry;

const COMPANY_SUFFIXES: &[&str] = &[
    "inc",
    "llc",
    "ltd",
    "corp",
    "company",
    "corporation",
    "technologies",
    "solutions",
    "systems",
];

const JOB_TITLE_KEYWORDS: &[&str] = &[
    "engineer",
    "developer",
    "manager",
    "director",
    "lead",
    "architect",
    "consultant",
    "analyst",
    "specialist",
];

lazy_static! {
    static ref MONTH_RANGE_RE: Regex =
        Regex::new(r"(\w+\s+\d{4})\s*-\s*(\w+\s+\d{4}|Present)").unwrap();
    static ref YEAR_RE: Regex = Regex::new(r"\d{4}").unwrap();
}

/// Accumulator for the NoEntry/BuildingEntry line fold.
#[derive(Default)]
struct EntryBuilder {
    current: Option<WorkEntry>,
    entries: Vec<WorkEntry>,
}

impl EntryBuilder {
    /// Flushes any open entry and starts a new one.
    fn open(&mut self, entry: WorkEntry) {
        if let Some(prev) = self.current.take() {
            self.entries.push(prev);
        }
        self.current = Some(entry);
    }

    /// Opens a default entry if none is building yet.
    fn ensure_open(&mut self) -> &mut WorkEntry {
        self.current.get_or_insert_with(WorkEntry::default)
    }

    fn append_summary(&mut self, line: &str) {
        let entry = self.ensure_open();
        if entry.summary.is_empty() {
            entry.summary = line.to_string();
        } else {
            entry.summary.push(' ');
            entry.summary.push_str(line);
        }
    }

    fn finish(mut self) -> Vec<WorkEntry> {
        if let Some(prev) = self.current.take() {
            self.entries.push(prev);
        }
        self.entries
    }
}

pub fn extract_work_history(text: &str, current_year: i32) -> Vec<WorkEntry> {
    if text.lines().any(is_pipe_triple) {
        extract_pipe_delimited(text, current_year)
    } else {
        extract_line_oriented(text)
    }
}

fn is_pipe_triple(line: &str) -> bool {
    line.split('|').count() >= 3
}

fn extract_pipe_delimited(text: &str, current_year: i32) -> Vec<WorkEntry> {
    let mut builder = EntryBuilder::default();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.contains('|') {
            let parts: Vec<&str> = line.split('|').map(str::trim).collect();
            if parts.len() >= 3 {
                let (start_date, end_date) = parse_date_range(parts[2], current_year);
                builder.open(WorkEntry {
                    position: parts[0].to_string(),
                    company: parts[1].to_string(),
                    start_date,
                    end_date,
                    summary: String::new(),
                });
            }
        } else if builder.current.is_some() {
            builder.append_summary(line);
        }
    }

    builder.finish()
}

/// Parses a date-range cell: "Month Year - Month Year|Present" first, else
/// the first two 4-digit years found. "Present" normalizes to the current
/// calendar year.
fn parse_date_range(dates: &str, current_year: i32) -> (String, String) {
    if let Some(cap) = MONTH_RANGE_RE.captures(dates) {
        let start = cap[1].to_string();
        let end = if &cap[2] == "Present" {
            current_year.to_string()
        } else {
            cap[2].to_string()
        };
        return (start, end);
    }

    let years: Vec<&str> = YEAR_RE.find_iter(dates).map(|m| m.as_str()).collect();
    if years.len() >= 2 {
        (years[0].to_string(), years[1].to_string())
    } else {
        (String::new(), String::new())
    }
}

fn extract_line_oriented(text: &str) -> Vec<WorkEntry> {
    let mut builder = EntryBuilder::default();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let lower = line.to_lowercase();

        if COMPANY_SUFFIXES.iter().any(|s| lower.contains(s)) {
            builder.open(WorkEntry {
                company: line.to_string(),
                ..Default::default()
            });
        } else if YEAR_RE.is_match(line) {
            let years: Vec<&str> = YEAR_RE.find_iter(line).map(|m| m.as_str()).collect();
            let entry = builder.ensure_open();
            if years.len() >= 2 {
                entry.start_date = years[0].to_string();
                entry.end_date = years[1].to_string();
            } else {
                entry.start_date = years[0].to_string();
                entry.end_date = "Present".to_string();
            }
        } else if JOB_TITLE_KEYWORDS.iter().any(|k| lower.contains(k)) {
            let entry = builder.ensure_open();
            if entry.position.is_empty() {
                entry.position = line.to_string();
            }
        } else {
            builder.append_summary(line);
        }
    }

    builder.finish()
}
