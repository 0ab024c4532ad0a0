//! Total-experience accumulation from work-history date ranges.
//!
//! Intentionally coarse: the first 4-digit year token on each side of the
//! range is all that counts; months are ignored.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::models::resume::WorkEntry;

lazy_static! {
    static ref YEAR_TOKEN_RE: Regex = Regex::new(r"\b(19|20)\d{2}\b").unwrap();
}

/// Sums per-entry durations in whole years. An entry needs both date strings
/// present; a missing end year (e.g. "Present") resolves to `current_year`,
/// and a non-positive duration counts as one year so short stints still
/// register. Entries without a parseable start year are skipped.
pub fn calculate_total_experience(work: &[WorkEntry], current_year: i32) -> f64 {
    let mut total = 0.0;

    for entry in work {
        if entry.start_date.is_empty() || entry.end_date.is_empty() {
            continue;
        }
        let Some(start_year) = first_year(&entry.start_date) else {
            debug!(
                "skipping work entry with unparseable start date '{}'",
                entry.start_date
            );
            continue;
        };
        let end_year = first_year(&entry.end_date).unwrap_or(current_year);

        let duration = end_year - start_year;
        total += if duration > 0 { duration as f64 } else { 1.0 };
    }

    total
}

fn first_year(text: &str) -> Option<i32> {
    YEAR_TOKEN_RE.find(text).and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(start: &str, end: &str) -> WorkEntry {
        WorkEntry {
            start_date: start.to_string(),
            end_date: end.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_spec_scenario_present_resolves_to_current_year() {
        let work = vec![entry("2018", "2021"), entry("2021", "Present")];
        assert_eq!(calculate_total_experience(&work, 2024), 6.0);
    }

    #[test]
    fn test_month_year_forms_parse_by_year_token() {
        let work = vec![entry("June 2019", "March 2022")];
        assert_eq!(calculate_total_experience(&work, 2024), 3.0);
    }

    #[test]
    fn test_same_year_stint_counts_as_one() {
        let work = vec![entry("2020", "2020")];
        assert_eq!(calculate_total_experience(&work, 2024), 1.0);
    }

    #[test]
    fn test_reversed_range_counts_as_one() {
        let work = vec![entry("2022", "2019")];
        assert_eq!(calculate_total_experience(&work, 2024), 1.0);
    }

    #[test]
    fn test_unparseable_start_is_skipped() {
        let work = vec![entry("unknown", "2021"), entry("2018", "2020")];
        assert_eq!(calculate_total_experience(&work, 2024), 2.0);
    }

    #[test]
    fn test_missing_date_strings_skip_entry() {
        let work = vec![entry("", "2021"), entry("2019", "")];
        assert_eq!(calculate_total_experience(&work, 2024), 0.0);
    }

    #[test]
    fn test_years_outside_1900_2099_are_ignored() {
        let work = vec![entry("3021", "3024")];
        assert_eq!(calculate_total_experience(&work, 2024), 0.0);
    }

    #[test]
    fn test_empty_history_is_zero() {
        assert_eq!(calculate_total_experience(&[], 2024), 0.0);
    }
}
