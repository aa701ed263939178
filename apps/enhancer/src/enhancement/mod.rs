// Resume enhancement: improvement analysis and per-template variant generation.
// All generative calls go through llm_client::TextGenerator; every failure below
// the pipeline is absorbed into a deterministic fallback.

pub mod aggregator;
pub mod analyzer;
pub mod fallback;
pub mod handlers;
pub mod models;
pub mod pipeline;
pub mod prompts;
pub mod templates;
pub mod variants;

pub use models::{EnhancedResume, EnhancementBatch, VariantResult};
pub use pipeline::{EnhancementPipeline, PipelineError};
