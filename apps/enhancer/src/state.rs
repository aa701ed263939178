use crate::enhancement::EnhancementPipeline;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Owns the generator handle, the template catalog and the per-call timeout.
    pub pipeline: EnhancementPipeline,
}
