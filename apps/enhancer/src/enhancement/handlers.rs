use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::enhancement::models::EnhancementBatch;
use crate::errors::AppError;
use crate::extraction::inspect::{inspect, InspectionReport};
use crate::extraction::{Document, ExtractionError, RawFragment};
use crate::state::AppState;

/// Exactly one of `pages` or `text` must be present.
#[derive(Debug, Deserialize)]
pub struct EnhanceRequest {
    pub pages: Option<Vec<Vec<RawFragment>>>,
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EnhanceResponse {
    pub request_id: Uuid,
    pub document: String,
    pub inspection: InspectionReport,
    pub batch: EnhancementBatch,
    /// Export file name per variant, in the same order as `batch.variants`.
    pub export_filenames: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct TemplateSummary {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
}

/// GET /api/v1/templates
pub async fn handle_list_templates(State(state): State<AppState>) -> Json<Vec<TemplateSummary>> {
    Json(
        state
            .pipeline
            .catalog()
            .iter()
            .map(|t| TemplateSummary {
                id: t.id,
                name: t.name,
                description: t.description,
            })
            .collect(),
    )
}

/// POST /api/v1/resumes/enhance
pub async fn handle_enhance(
    State(state): State<AppState>,
    Json(req): Json<EnhanceRequest>,
) -> Result<Json<EnhanceResponse>, AppError> {
    let request_id = Uuid::new_v4();

    let (document, batch) = match (req.pages, req.text) {
        (Some(pages), None) => state.pipeline.enhance_pages(pages).await?,
        (None, Some(text)) => {
            let document = Document::from_text(&text);
            if document.is_empty() {
                return Err(ExtractionError::EmptyDocument.into());
            }
            let batch = state.pipeline.enhance(&document).await?;
            (document, batch)
        }
        _ => {
            return Err(AppError::Validation(
                "Provide exactly one of 'pages' or 'text'".to_string(),
            ))
        }
    };

    let export_filenames = batch
        .variants
        .iter()
        .zip(state.pipeline.catalog())
        .map(|(variant, template)| template.export_filename(&variant.resume))
        .collect();

    info!(
        %request_id,
        "Enhanced resume: {} chars, {} fallbacks",
        document.text().len(),
        batch.fallback_count()
    );

    Ok(Json(EnhanceResponse {
        request_id,
        inspection: inspect(document.text()),
        document: document.text().to_string(),
        batch,
        export_filenames,
        generated_at: Utc::now(),
    }))
}
