//! Enhancement pipeline: document → (improvements ∥ variants) → batch.
//!
//! Improvement analysis and variant generation run concurrently; both stages
//! absorb their own failures, so the only errors that escape are extraction
//! failures, caller aborts and batch-shape violations.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::info;

use crate::enhancement::aggregator::combine;
use crate::enhancement::analyzer::analyze_improvements;
use crate::enhancement::models::EnhancementBatch;
use crate::enhancement::templates::{catalog, TemplateSpec};
use crate::enhancement::variants::generate_all;
use crate::extraction::{extract_document, Document, ExtractionError, RawFragment};
use crate::llm_client::TextGenerator;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("enhancement aborted by caller")]
    Aborted,

    #[error("batch has {actual} variants, catalog has {expected}")]
    BatchShape { expected: usize, actual: usize },

    #[error("variant at position {position} belongs to template {template_id}")]
    MisplacedVariant { position: usize, template_id: u32 },
}

#[derive(Clone)]
pub struct EnhancementPipeline {
    llm: Arc<dyn TextGenerator>,
    catalog: &'static [TemplateSpec],
    timeout: Duration,
}

impl EnhancementPipeline {
    /// `timeout` bounds every individual generation call.
    pub fn new(llm: Arc<dyn TextGenerator>, timeout: Duration) -> Self {
        Self {
            llm,
            catalog: catalog(),
            timeout,
        }
    }

    pub fn with_catalog(mut self, catalog: &'static [TemplateSpec]) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn catalog(&self) -> &'static [TemplateSpec] {
        self.catalog
    }

    /// Extracts the document from raw page fragments, then enhances it.
    pub async fn enhance_pages(
        &self,
        pages: Vec<Vec<RawFragment>>,
    ) -> Result<(Document, EnhancementBatch), PipelineError> {
        let document = extract_document(pages)?;
        let batch = self.enhance(&document).await?;
        Ok((document, batch))
    }

    pub async fn enhance(&self, document: &Document) -> Result<EnhancementBatch, PipelineError> {
        let text: Arc<str> = Arc::from(document.text());

        let (improvements, variants) = tokio::join!(
            analyze_improvements(self.llm.as_ref(), &text, self.timeout),
            generate_all(
                Arc::clone(&self.llm),
                Arc::clone(&text),
                self.catalog,
                self.timeout
            ),
        );

        let batch = combine(improvements, variants, self.catalog)?;
        info!(
            "Enhancement complete: {} variants, {} fallbacks",
            batch.variants.len(),
            batch.fallback_count()
        );
        Ok(batch)
    }

    /// Like [`enhance`](Self::enhance), but stops as soon as `abort` resolves.
    /// In-flight generations are dropped and no partial batch is returned.
    pub async fn enhance_until<F>(
        &self,
        document: &Document,
        abort: F,
    ) -> Result<EnhancementBatch, PipelineError>
    where
        F: Future<Output = ()>,
    {
        tokio::select! {
            biased;
            _ = abort => {
                info!("Enhancement aborted before completion");
                Err(PipelineError::Aborted)
            }
            result = self.enhance(document) => result,
        }
    }
}
