//! Improvement Analysis: one generation call that names four concrete ways
//! the source resume can be improved.
//!
//! Never fails: any transport error, timeout, parse error or wrong-shaped
//! array yields the fixed fallback list.

use std::time::Duration;

use tracing::{info, warn};

use crate::enhancement::fallback::fallback_improvements;
use crate::enhancement::models::{GenerationFailure, Improvements, ValidationError, IMPROVEMENT_COUNT};
use crate::enhancement::prompts::{
    IMPROVEMENT_OPTIONS, IMPROVEMENT_PROMPT_TEMPLATE, IMPROVEMENT_SYSTEM,
};
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{generate_with_timeout, strip_json_fences, GenerationRequest, TextGenerator};

pub async fn analyze_improvements(
    llm: &dyn TextGenerator,
    document: &str,
    timeout: Duration,
) -> Improvements {
    match request_improvements(llm, document, timeout).await {
        Ok(improvements) => {
            info!("Improvement analysis succeeded");
            improvements
        }
        Err(e) => {
            warn!("Improvement analysis fell back to defaults: {e}");
            fallback_improvements()
        }
    }
}

async fn request_improvements(
    llm: &dyn TextGenerator,
    document: &str,
    timeout: Duration,
) -> Result<Improvements, GenerationFailure> {
    let system = format!("{IMPROVEMENT_SYSTEM} {JSON_ONLY_SYSTEM}");
    let prompt = IMPROVEMENT_PROMPT_TEMPLATE.replace("{document}", document);
    let request = GenerationRequest {
        system: &system,
        prompt: &prompt,
        options: IMPROVEMENT_OPTIONS,
    };

    let raw = generate_with_timeout(llm, &request, timeout).await?;
    Ok(parse_improvements(&raw)?)
}

/// Strict parse: a JSON array of exactly four non-blank strings.
pub fn parse_improvements(raw: &str) -> Result<Improvements, ValidationError> {
    let items: Vec<String> = serde_json::from_str(strip_json_fences(raw))?;

    if let Some(blank) = items.iter().position(|s| s.trim().is_empty()) {
        return Err(ValidationError::BlankItem(blank));
    }

    let actual = items.len();
    items.try_into().map_err(|_| ValidationError::Shape {
        expected: IMPROVEMENT_COUNT,
        actual,
    })
}
