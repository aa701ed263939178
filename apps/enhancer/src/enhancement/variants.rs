//! Variant Generation: one independent generation per catalog template,
//! run concurrently.
//!
//! Each template either yields a validated resume or its own canned fallback.
//! One template's failure, timeout or panic never affects another, and the
//! returned list is always in catalog order regardless of completion order.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinSet;
use tracing::{info, warn};

use crate::enhancement::fallback::fallback_resume;
use crate::enhancement::models::{parse_resume, EnhancedResume, GenerationFailure, VariantResult};
use crate::enhancement::prompts::{VARIANT_OPTIONS, VARIANT_PROMPT_TEMPLATE, VARIANT_SYSTEM_TEMPLATE};
use crate::enhancement::templates::TemplateSpec;
use crate::llm_client::prompts::{FACTUALITY_INSTRUCTION, JSON_ONLY_SYSTEM};
use crate::llm_client::{generate_with_timeout, GenerationRequest, TextGenerator};

/// Generates every template variant concurrently. The result has exactly
/// `catalog.len()` entries, entry `i` belonging to `catalog[i]`.
pub async fn generate_all(
    llm: Arc<dyn TextGenerator>,
    document: Arc<str>,
    catalog: &[TemplateSpec],
    timeout: Duration,
) -> Vec<VariantResult> {
    let mut tasks = JoinSet::new();
    for (slot, template) in catalog.iter().copied().enumerate() {
        let llm = Arc::clone(&llm);
        let document = Arc::clone(&document);
        tasks.spawn(async move {
            let result = generate_variant(llm.as_ref(), &document, &template, timeout).await;
            (slot, result)
        });
    }

    let mut slots: Vec<Option<VariantResult>> = vec![None; catalog.len()];
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((slot, result)) => slots[slot] = Some(result),
            Err(e) => warn!("Variant task aborted: {e}"),
        }
    }

    slots
        .into_iter()
        .zip(catalog)
        .map(|(slot, template)| {
            slot.unwrap_or_else(|| {
                VariantResult::fallback(
                    template.id,
                    fallback_resume(template.id),
                    "generation task did not complete".to_string(),
                )
            })
        })
        .collect()
}

/// Generates one variant. Never fails: any error is replaced by the template's
/// canned fallback and the reason is recorded on the result.
pub async fn generate_variant(
    llm: &dyn TextGenerator,
    document: &str,
    template: &TemplateSpec,
    timeout: Duration,
) -> VariantResult {
    match request_variant(llm, document, template, timeout).await {
        Ok(resume) => {
            info!(template = template.name, "Variant generated");
            VariantResult::generated(template.id, resume)
        }
        Err(e) => {
            warn!(template = template.name, "Variant fell back to canned resume: {e}");
            VariantResult::fallback(template.id, fallback_resume(template.id), e.to_string())
        }
    }
}

async fn request_variant(
    llm: &dyn TextGenerator,
    document: &str,
    template: &TemplateSpec,
    timeout: Duration,
) -> Result<EnhancedResume, GenerationFailure> {
    let system = build_variant_system(template);
    let prompt = build_variant_prompt(template, document);
    let request = GenerationRequest {
        system: &system,
        prompt: &prompt,
        options: VARIANT_OPTIONS,
    };

    let raw = generate_with_timeout(llm, &request, timeout).await?;
    Ok(parse_resume(&raw)?)
}

pub fn build_variant_system(template: &TemplateSpec) -> String {
    VARIANT_SYSTEM_TEMPLATE
        .replace("{style_directive}", template.style_directive)
        .replace("{factuality_instruction}", FACTUALITY_INSTRUCTION)
        .replace("{json_only}", JSON_ONLY_SYSTEM)
}

/// `{document}` is substituted last so resume text containing a placeholder
/// is never expanded.
pub fn build_variant_prompt(template: &TemplateSpec, document: &str) -> String {
    VARIANT_PROMPT_TEMPLATE
        .replace("{template_name}", template.name)
        .replace("{document}", document)
}
