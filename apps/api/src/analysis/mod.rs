//! Heuristic Analyzer: structural counts, keyword-based section detection and
//! keyword overlap with an optional job description.
//!
//! Everything here is a pure function of its inputs. Calling `analyze` twice with the
//! same text yields identical results, down to the serialized bytes.

pub mod job_match;
pub mod sections;

use serde::{Deserialize, Serialize};

use crate::analysis::job_match::{compare_with_job_description, JobMatch};
use crate::analysis::sections::{identify_sections, SectionFlags};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub word_count: usize,
    pub char_count: usize,
    pub sections_found: SectionFlags,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_match: Option<JobMatch>,
}

/// Analyzes resume text, optionally against a job description.
///
/// An absent or empty job description produces no `job_match`. A description made of
/// whitespace only still produces one, scored at zero.
pub fn analyze(resume_text: &str, job_description: Option<&str>) -> AnalysisResult {
    let job_match = job_description
        .filter(|jd| !jd.is_empty())
        .map(|jd| compare_with_job_description(resume_text, jd));

    AnalysisResult {
        word_count: resume_text.split_whitespace().count(),
        char_count: resume_text.chars().count(),
        sections_found: identify_sections(resume_text),
        job_match,
    }
}
