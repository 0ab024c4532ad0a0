// Extraction layer: section segmentation and per-section field extractors.
// Every extractor is a pure function of section text; only contact extraction
// consults the injected entity tagger.

pub mod contact;
pub mod education;
pub mod jd_parser;
pub mod projects;
pub mod resume_parser;
pub mod segmenter;
pub mod skills;
pub mod work;
