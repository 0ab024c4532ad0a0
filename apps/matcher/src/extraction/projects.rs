//! Project extraction: blank-line blocks, first line split on a dash into
//! name and dates, remaining lines joined as the description.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::resume::ProjectEntry;

lazy_static! {
    static ref BLOCK_SPLIT_RE: Regex = Regex::new(r"\n\s*\n").unwrap();
    static ref DASH_SPLIT_RE: Regex = Regex::new(r"\s*[-–—]\s+").unwrap();
}

pub fn extract_projects(text: &str) -> Vec<ProjectEntry> {
    BLOCK_SPLIT_RE
        .split(text)
        .filter_map(|block| {
            let block = block.trim();
            if block.is_empty() {
                return None;
            }
            let mut lines = block.lines();
            let first = lines.next().unwrap_or("").trim();

            let mut halves = DASH_SPLIT_RE.splitn(first, 2);
            let name = halves.next().unwrap_or("").trim().to_string();
            let dates = halves.next().unwrap_or("").trim().to_string();

            let description = lines
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .collect::<Vec<_>>()
                .join(" ");

            Some(ProjectEntry {
                name,
                dates,
                description,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_block_with_dash_and_description() {
        let projects = extract_projects("Inventory Tracker - 2021\nBuilt a warehouse system.\nUsed by three teams.");
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, "Inventory Tracker");
        assert_eq!(projects[0].dates, "2021");
        assert_eq!(
            projects[0].description,
            "Built a warehouse system. Used by three teams."
        );
    }

    #[test]
    fn test_blank_lines_split_blocks() {
        let projects =
            extract_projects("Tracker - 2021\nFirst one.\n\nDashboard – 2022\nSecond one.");
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[1].name, "Dashboard");
        assert_eq!(projects[1].dates, "2022");
    }

    #[test]
    fn test_first_line_without_dash_keeps_name_only() {
        let projects = extract_projects("Side Project\nSomething small.");
        assert_eq!(projects[0].name, "Side Project");
        assert_eq!(projects[0].dates, "");
        assert_eq!(projects[0].description, "Something small.");
    }

    #[test]
    fn test_empty_input_yields_no_projects() {
        assert!(extract_projects("").is_empty());
        assert!(extract_projects("\n\n\n").is_empty());
    }
}
