use serde::{Deserialize, Serialize};

/// A single skill with its proficiency level.
/// Extraction does not parse explicit proficiency; the level is always the
/// fixed default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    pub level: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkEntry {
    pub company: String,
    pub position: String,
    /// A bare 4-digit year, a "Month Year" form, or the literal "Present".
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
    /// Free text accumulated line by line.
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    pub area: String,
    #[serde(rename = "studyType")]
    pub study_type: String,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub name: String,
    pub dates: String,
    pub description: String,
}

/// A fully parsed resume.
///
/// Every list field is always present (possibly empty) so consumers never
/// branch on absence; unextractable scalar fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
    pub skills: Vec<SkillEntry>,
    pub work: Vec<WorkEntry>,
    pub education: Vec<EducationEntry>,
    pub certifications: Vec<String>,
    pub languages: Vec<String>,
    pub projects: Vec<ProjectEntry>,
}

impl Resume {
    /// Skill names case-folded, in extraction order. This is the form the
    /// skill matcher and the whole-document comparison operate on.
    pub fn skill_names_folded(&self) -> Vec<String> {
        self.skills.iter().map(|s| s.name.to_lowercase()).collect()
    }
}
