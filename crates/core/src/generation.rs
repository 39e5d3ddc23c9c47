//! The seam between the generation pipeline and the external text-to-form
//! capability.
//!
//! Implementations return the generator's output as untyped JSON; the pipeline
//! owns parsing and normalization, so nothing here trusts the shape of the
//! payload.

use async_trait::async_trait;

/// Errors from an external form generator.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The capability could not be reached or answered with a transport-level
    /// failure (network, timeout, non-2xx status).
    #[error("Generator unavailable: {0}")]
    Unavailable(String),

    /// The capability answered, but the content cannot be used as a form tree.
    #[error("Generator returned unusable content: {0}")]
    InvalidContent(String),
}

/// Turns a natural-language description into a candidate form tree.
///
/// The call is a single blocking attempt from the caller's point of view: the
/// pipeline awaits it and does not retry.
#[async_trait]
pub trait FormGenerator: Send + Sync {
    /// Produce a candidate form tree for `description`.
    async fn generate(&self, description: &str) -> Result<serde_json::Value, GenerationError>;
}
