//! Result Aggregation: combines the improvement list and the variant results
//! into one batch.
//!
//! Shape is checked, never repaired: a variant list that does not line up with
//! the catalog is a programming error in the stages above and is reported.

use crate::enhancement::models::{EnhancementBatch, Improvements, VariantResult};
use crate::enhancement::pipeline::PipelineError;
use crate::enhancement::templates::TemplateSpec;

pub fn combine(
    improvements: Improvements,
    variants: Vec<VariantResult>,
    catalog: &[TemplateSpec],
) -> Result<EnhancementBatch, PipelineError> {
    if variants.len() != catalog.len() {
        return Err(PipelineError::BatchShape {
            expected: catalog.len(),
            actual: variants.len(),
        });
    }

    if let Some((position, variant)) = variants
        .iter()
        .zip(catalog)
        .enumerate()
        .find(|(_, (variant, template))| variant.template_id != template.id)
        .map(|(position, (variant, _))| (position, variant))
    {
        return Err(PipelineError::MisplacedVariant {
            position,
            template_id: variant.template_id,
        });
    }

    Ok(EnhancementBatch {
        improvements,
        variants,
    })
}
