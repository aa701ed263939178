//! Data models for enhanced resumes and the batch returned to callers.
//!
//! Model output is parsed through `ResumeDraft`, a lenient wire shape, and only
//! becomes an `EnhancedResume` after the required fields are validated.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::llm_client::{strip_json_fences, LlmError};

/// Number of improvement statements in every batch.
pub const IMPROVEMENT_COUNT: usize = 4;

pub type Improvements = [String; IMPROVEMENT_COUNT];

// ────────────────────────────────────────────────────────────────────────────
// Errors
// ────────────────────────────────────────────────────────────────────────────

/// Model output that parsed badly or lacks the required shape.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("response is not valid JSON for this shape: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("resume has no name")]
    MissingName,

    #[error("resume has no experience list")]
    MissingExperience,

    #[error("expected {expected} items, got {actual}")]
    Shape { expected: usize, actual: usize },

    #[error("item {0} is blank")]
    BlankItem(usize),
}

/// Why a single generation step fell back. Always absorbed locally.
#[derive(Debug, Error)]
pub enum GenerationFailure {
    #[error("generation failed: {0}")]
    Generation(#[from] LlmError),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}

// ────────────────────────────────────────────────────────────────────────────
// Resume record
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: String,
    #[serde(
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub linkedin: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub website: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub company: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub duration: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievements: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    #[serde(default, deserialize_with = "lenient_string")]
    pub degree: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub school: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub year: String,
    #[serde(
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub gpa: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub honors: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable")]
    pub technologies: Vec<String>,
    #[serde(
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub link: Option<String>,
}

/// A structured resume produced by one template (or its fallback).
///
/// Valid only with a non-empty `name` and a present (possibly empty)
/// `experience` list; see [`parse_resume`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnhancedResume {
    pub name: String,
    pub title: String,
    pub contact: Contact,
    pub summary: String,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<Project>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certifications: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
}

/// Wire shape of a model response before validation.
#[derive(Debug, Deserialize)]
struct ResumeDraft {
    #[serde(default, deserialize_with = "lenient_string")]
    name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    title: String,
    #[serde(default, deserialize_with = "nullable")]
    contact: Contact,
    #[serde(default, deserialize_with = "lenient_string")]
    summary: String,
    #[serde(default)]
    experience: Option<Vec<Experience>>,
    #[serde(default, deserialize_with = "nullable")]
    education: Vec<Education>,
    #[serde(default, deserialize_with = "nullable")]
    skills: Vec<String>,
    #[serde(default)]
    projects: Option<Vec<Project>>,
    #[serde(default)]
    certifications: Option<Vec<String>>,
    #[serde(default)]
    languages: Option<Vec<String>>,
}

impl TryFrom<ResumeDraft> for EnhancedResume {
    type Error = ValidationError;

    fn try_from(draft: ResumeDraft) -> Result<Self, Self::Error> {
        let name = draft.name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        let experience = draft.experience.ok_or(ValidationError::MissingExperience)?;

        Ok(EnhancedResume {
            name,
            title: draft.title,
            contact: draft.contact,
            summary: draft.summary,
            experience,
            education: draft.education,
            skills: draft.skills,
            projects: draft.projects,
            certifications: draft.certifications,
            languages: draft.languages,
        })
    }
}

/// Parses raw model text into a validated resume. Code fences are tolerated;
/// anything else that is not a JSON object of the resume shape is rejected.
pub fn parse_resume(raw: &str) -> Result<EnhancedResume, ValidationError> {
    let draft: ResumeDraft = serde_json::from_str(strip_json_fences(raw))?;
    EnhancedResume::try_from(draft)
}

// ────────────────────────────────────────────────────────────────────────────
// Variant and batch
// ────────────────────────────────────────────────────────────────────────────

/// One template's outcome within a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantResult {
    pub template_id: u32,
    pub resume: EnhancedResume,
    pub used_fallback: bool,
    /// Why the fallback was used. Telemetry only; absent on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,
}

impl VariantResult {
    pub fn generated(template_id: u32, resume: EnhancedResume) -> Self {
        Self {
            template_id,
            resume,
            used_fallback: false,
            fallback_reason: None,
        }
    }

    pub fn fallback(template_id: u32, resume: EnhancedResume, reason: String) -> Self {
        Self {
            template_id,
            resume,
            used_fallback: true,
            fallback_reason: Some(reason),
        }
    }
}

/// The final artifact handed to the renderer / persistence layer.
///
/// `variants` holds exactly one entry per catalog template in id order, and
/// `improvements` always has [`IMPROVEMENT_COUNT`] entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancementBatch {
    pub improvements: Improvements,
    pub variants: Vec<VariantResult>,
}

impl EnhancementBatch {
    pub fn fallback_count(&self) -> usize {
        self.variants.iter().filter(|v| v.used_fallback).count()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Lenient field helpers
// ────────────────────────────────────────────────────────────────────────────

/// JSON scalars a model may emit where text is expected.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Scalar::Text(s) => s,
            Scalar::Integer(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?
        .map(Scalar::into_text)
        .unwrap_or_default())
}

fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?
        .map(Scalar::into_text)
        .filter(|s| !s.trim().is_empty()))
}

/// Treats an explicit `null` like an absent field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
