//! Resume parsing orchestrator: segmentation, per-section extraction, and
//! contact extraction over the preamble.

use tracing::debug;

use crate::extraction::contact::extract_contact_info;
use crate::extraction::education::extract_education;
use crate::extraction::projects::extract_projects;
use crate::extraction::segmenter::{segment, Section};
use crate::extraction::skills::{extract_list_items, extract_skills};
use crate::extraction::work::extract_work_history;
use crate::inference::EntityTagger;
use crate::models::resume::Resume;

pub async fn parse_resume(text: &str, tagger: &dyn EntityTagger, current_year: i32) -> Resume {
    let doc = segment(text);
    debug!(sections = doc.sections.len(), "segmented resume");

    let mut resume = Resume::default();
    for (section, body) in &doc.sections {
        match section {
            Section::Summary => resume.summary = body.clone(),
            Section::Skills => resume.skills = extract_skills(body),
            Section::Work => resume.work = extract_work_history(body, current_year),
            Section::Education => resume.education = extract_education(body),
            Section::Certifications => resume.certifications = extract_list_items(body),
            Section::Languages => resume.languages = extract_list_items(body),
            Section::Projects => resume.projects = extract_projects(body),
        }
    }

    let contact = extract_contact_info(&doc.preamble, tagger).await;
    resume.name = contact.name;
    resume.email = contact.email;
    resume.phone = contact.phone;
    resume.location = contact.location;

    resume
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::fakes::FakeTagger;

    const SAMPLE_RESUME: &str = "\
Jane Doe
jane.doe@example.com
(512) 555-1234

Summary
Backend engineer with a focus on data systems.

Skills
Python, SQL, Docker

Experience
Software Engineer | Acme Corp | 2018 - 2021
Built ingestion pipelines.

Education
B.S. Computer Science | State University | 2014 - 2018

Certifications
AWS Solutions Architect

Languages
English, Spanish

Projects
Inventory Tracker - 2021
Warehouse tracking system.
";

    #[tokio::test]
    async fn test_full_resume_parse() {
        let resume = parse_resume(SAMPLE_RESUME, &FakeTagger::empty(), 2024).await;

        assert_eq!(resume.name, "Jane Doe");
        assert_eq!(resume.email, "jane.doe@example.com");
        assert_eq!(resume.phone, "(512) 555-1234");
        assert_eq!(
            resume.summary,
            "Backend engineer with a focus on data systems."
        );
        assert_eq!(resume.skills.len(), 3);
        assert_eq!(resume.work.len(), 1);
        assert_eq!(resume.work[0].company, "Acme Corp");
        assert_eq!(resume.education.len(), 1);
        assert_eq!(resume.education[0].institution, "State University");
        assert_eq!(resume.certifications, vec!["AWS Solutions Architect"]);
        assert_eq!(resume.languages, vec!["English", "Spanish"]);
        assert_eq!(resume.projects.len(), 1);
    }

    #[tokio::test]
    async fn test_headerless_text_extracts_contact_only() {
        let resume = parse_resume(
            "John Smith\njohn@example.com",
            &FakeTagger::empty(),
            2024,
        )
        .await;
        assert_eq!(resume.name, "John Smith");
        assert_eq!(resume.email, "john@example.com");
        assert!(resume.skills.is_empty());
        assert!(resume.work.is_empty());
        assert!(resume.summary.is_empty());
    }

    #[tokio::test]
    async fn test_empty_input_yields_default_resume() {
        let resume = parse_resume("", &FakeTagger::empty(), 2024).await;
        assert_eq!(resume, Resume::default());
    }
}
