//! Lightweight heuristics over extracted resume text. Advisory only: the
//! report travels alongside the enhancement batch and never blocks it.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

const MIN_TEXT_CHARS: usize = 50;
const POINTS_PER_CHECK: u32 = 20;
const EXPECTED_SECTIONS: &[&str] = &["experience", "education", "skills"];

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap()
});

static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\+\d{1,2}\s?)?\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}").unwrap()
});

/// Contact basics guessed from the raw text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicInfo {
    pub name: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub score: u32, // 0 – 100
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionReport {
    pub basic_info: BasicInfo,
    pub validation: TextValidation,
}

pub fn inspect(text: &str) -> InspectionReport {
    InspectionReport {
        basic_info: extract_basic_info(text),
        validation: validate_resume_text(text),
    }
}

/// First non-empty line is taken as the name, the second as the title.
pub fn extract_basic_info(text: &str) -> BasicInfo {
    let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());

    BasicInfo {
        name: lines.next().map(String::from),
        title: lines.next().map(String::from),
        email: EMAIL.find(text).map(|m| m.as_str().to_string()),
        phone: PHONE.find(text).map(|m| m.as_str().to_string()),
    }
}

/// Scores the text on length, presence of the core sections, and an e-mail
/// address. 20 points per check.
pub fn validate_resume_text(text: &str) -> TextValidation {
    let mut errors = Vec::new();
    let mut score = 0;

    if text.trim().chars().count() < MIN_TEXT_CHARS {
        errors.push("Resume text is too short".to_string());
    } else {
        score += POINTS_PER_CHECK;
    }

    let lower = text.to_lowercase();
    for section in EXPECTED_SECTIONS {
        if lower.contains(section) {
            score += POINTS_PER_CHECK;
        } else {
            errors.push(format!("Missing {section} section"));
        }
    }

    if EMAIL.is_match(text) {
        score += POINTS_PER_CHECK;
    } else {
        errors.push("No email address found".to_string());
    }

    TextValidation {
        is_valid: errors.is_empty(),
        errors,
        score: score.min(100),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Jane Doe\nSoftware Engineer\njane@x.com | +1 (555) 123-4567\n\n\
        EXPERIENCE\nAcme Corp 2020 - Present\n\nEDUCATION\nBS Computer Science\n\n\
        SKILLS\nRust, SQL";

    #[test]
    fn test_basic_info_from_header_lines() {
        let info = extract_basic_info(SAMPLE);
        assert_eq!(info.name.as_deref(), Some("Jane Doe"));
        assert_eq!(info.title.as_deref(), Some("Software Engineer"));
        assert_eq!(info.email.as_deref(), Some("jane@x.com"));
        assert_eq!(info.phone.as_deref(), Some("+1 (555) 123-4567"));
    }

    #[test]
    fn test_basic_info_on_empty_text() {
        assert_eq!(extract_basic_info("  \n "), BasicInfo::default());
    }

    #[test]
    fn test_complete_resume_scores_full_marks() {
        let validation = validate_resume_text(SAMPLE);
        assert!(validation.is_valid, "errors: {:?}", validation.errors);
        assert_eq!(validation.score, 100);
    }

    #[test]
    fn test_short_text_lists_every_gap() {
        let validation = validate_resume_text("Jane Doe");
        assert!(!validation.is_valid);
        assert_eq!(validation.score, 0);
        assert_eq!(validation.errors.len(), 5);
        assert!(validation
            .errors
            .contains(&"Missing education section".to_string()));
    }

    #[test]
    fn test_section_detection_is_case_insensitive() {
        let validation = validate_resume_text("Skills: Rust");
        assert!(!validation
            .errors
            .iter()
            .any(|e| e.contains("skills")));
    }
}
