//! Resume ingestion and enhancement service.
//!
//! `extraction` turns positioned PDF text fragments into a normalized document;
//! `enhancement` fans the document out to a generative model once per template
//! and assembles a batch that always has a complete shape.

pub mod config;
pub mod enhancement;
pub mod errors;
pub mod extraction;
pub mod llm_client;
pub mod routes;
pub mod state;
