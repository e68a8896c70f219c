//! Keyword-based resume section detection.

use serde::{Deserialize, Serialize};

pub const EDUCATION_KEYWORDS: &[&str] = &["education", "degree", "university", "college"];
pub const EXPERIENCE_KEYWORDS: &[&str] = &["experience", "work", "employment", "job"];
pub const SKILLS_KEYWORDS: &[&str] = &["skills", "technologies", "tools", "programming"];
pub const PROJECTS_KEYWORDS: &[&str] = &["project", "portfolio", "development"];
pub const CONTACT_KEYWORDS: &[&str] = &["email", "phone", "contact", "linkedin"];

/// Presence flags for the five resume sections. Each flag is independent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionFlags {
    pub has_education: bool,
    pub has_experience: bool,
    pub has_skills: bool,
    pub has_projects: bool,
    pub has_contact: bool,
}

/// A section is present when any of its keywords occurs anywhere in the text,
/// ignoring case. Substring matches count: "networking" hits "work".
pub fn identify_sections(text: &str) -> SectionFlags {
    let lower = text.to_lowercase();
    let contains_any = |keywords: &[&str]| keywords.iter().any(|kw| lower.contains(kw));

    SectionFlags {
        has_education: contains_any(EDUCATION_KEYWORDS),
        has_experience: contains_any(EXPERIENCE_KEYWORDS),
        has_skills: contains_any(SKILLS_KEYWORDS),
        has_projects: contains_any(PROJECTS_KEYWORDS),
        has_contact: contains_any(CONTACT_KEYWORDS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_keyword_sets_only_its_own_flag() {
        let cases: [(&[&str], fn(&SectionFlags) -> bool); 5] = [
            (EDUCATION_KEYWORDS, |f| f.has_education),
            (EXPERIENCE_KEYWORDS, |f| f.has_experience),
            (SKILLS_KEYWORDS, |f| f.has_skills),
            (PROJECTS_KEYWORDS, |f| f.has_projects),
            (CONTACT_KEYWORDS, |f| f.has_contact),
        ];

        for (keywords, flag) in cases {
            for kw in keywords {
                let flags = identify_sections(kw);
                assert!(flag(&flags), "keyword {kw:?} did not set its flag");
            }
        }
    }

    #[test]
    fn test_matching_ignores_case() {
        let flags = identify_sections("UNIVERSITY OF WATERLOO\nLinkedIn: /in/jane");
        assert!(flags.has_education);
        assert!(flags.has_contact);
    }

    #[test]
    fn test_substring_counts_as_match() {
        // "networking" contains "work"; "toolsmith" contains "tools"
        let flags = identify_sections("Networking toolsmith");
        assert!(flags.has_experience);
        assert!(flags.has_skills);
        assert!(!flags.has_education);
    }

    #[test]
    fn test_text_without_keywords_sets_nothing() {
        assert_eq!(
            identify_sections("Jane Doe, Berlin, 2024"),
            SectionFlags::default()
        );
    }

    #[test]
    fn test_serialized_keys() {
        let json = serde_json::to_value(identify_sections("portfolio")).unwrap();
        assert_eq!(json["has_projects"], true);
        assert_eq!(json["has_education"], false);
        assert_eq!(json.as_object().unwrap().len(), 5);
    }
}
