//! Keyword overlap between a resume and a job description.
//!
//! Both texts are lower-cased and split on whitespace into sets of unique tokens.
//! Punctuation stays attached to tokens, so "aws," and "aws" are different words.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobMatch {
    /// Sorted, so serialization is stable across runs.
    pub matching_keywords: BTreeSet<String>,
    pub keyword_match_count: usize,
    /// 0.0 – 100.0, rounded to two decimals.
    pub match_percentage: f64,
}

pub fn compare_with_job_description(resume: &str, job_description: &str) -> JobMatch {
    let job_words = unique_words(job_description);
    let resume_words = unique_words(resume);

    let matching_keywords: BTreeSet<String> =
        job_words.intersection(&resume_words).cloned().collect();
    let keyword_match_count = matching_keywords.len();

    JobMatch {
        matching_keywords,
        keyword_match_count,
        match_percentage: match_percentage(keyword_match_count, job_words.len()),
    }
}

fn unique_words(text: &str) -> BTreeSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn match_percentage(matched: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(matched as f64 / total as f64 * 100.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
