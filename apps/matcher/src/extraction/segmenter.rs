//! Section segmenter — splits raw resume text into canonical labeled sections.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

/// Canonical section names recognized by the segmenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Summary,
    Skills,
    Work,
    Education,
    Certifications,
    Languages,
    Projects,
}

lazy_static! {
    /// A header is a line consisting solely of a recognized keyword followed
    /// by optional punctuation. Longer synonyms precede their prefixes so the
    /// alternation captures the most specific form.
    static ref HEADER_RE: Regex = Regex::new(
        r"(?im)^[ \t]*(?P<header>professional experience|work experience|project experience|language proficiency|technical skills|summary|profile|objective|skills|technologies|expertise|competencies|experience|work|employment|education|academic|qualification|certifications|certificates|accreditations|languages|projects|portfolio)[ \t:–-]*\r?\n"
    )
    .unwrap();
}

/// The segmented document: canonical section bodies, plus the preamble text
/// preceding the first recognized header (reserved for contact extraction and
/// excluded from every section body).
#[derive(Debug, Default)]
pub struct SegmentedDocument {
    pub sections: HashMap<Section, String>,
    pub preamble: String,
}

/// Splits a document on header lines.
///
/// Repeated headers mapping to the same canonical section follow a
/// last-write-wins policy: the final occurrence's body replaces earlier ones.
/// With no recognizable headers the section map is empty and the entire text
/// becomes the preamble.
pub fn segment(text: &str) -> SegmentedDocument {
    let matches: Vec<_> = HEADER_RE.captures_iter(text).collect();

    let preamble = match matches.first() {
        Some(first) => text[..first.get(0).unwrap().start()].trim().to_string(),
        None => text.trim().to_string(),
    };

    let mut sections = HashMap::new();
    for (i, cap) in matches.iter().enumerate() {
        let start = cap.get(0).unwrap().end();
        let end = matches
            .get(i + 1)
            .map(|next| next.get(0).unwrap().start())
            .unwrap_or(text.len());
        let section = canonicalize(&cap["header"]);
        sections.insert(section, text[start..end].trim().to_string());
    }

    SegmentedDocument { sections, preamble }
}

fn canonicalize(header: &str) -> Section {
    let h = header.to_lowercase();
    if h.contains("summary") || h.contains("profile") || h.contains("objective") {
        Section::Summary
    } else if h.contains("skill")
        || h.contains("technolog")
        || h.contains("expertise")
        || h.contains("competenc")
    {
        Section::Skills
    } else if h.contains("experience") || h.contains("work") || h.contains("employment") {
        Section::Work
    } else if h.contains("education") || h.contains("academic") || h.contains("qualification") {
        Section::Education
    } else if h.contains("certificat") || h.contains("accreditation") {
        Section::Certifications
    } else if h.contains("language") {
        Section::Languages
    } else {
        Section::Projects
    }
}
