//! The generation pipeline service.

use std::sync::Arc;

use formgen_core::error::CoreError;
use formgen_core::form::{validate_description, validate_owner_id};
use formgen_core::generation::FormGenerator;
use formgen_db::models::form::FormTree;
use formgen_db::repositories::FormRepo;
use formgen_db::{DbPool, StoreError};
use serde::Serialize;
use ts_rs::TS;

use crate::candidate::CandidateForm;
use crate::normalize::normalize;

/// Outcome of one generation attempt.
///
/// Request-level problems (blank description, blank owner) are returned as
/// `Err(CoreError::Validation)` by [`GenerationPipeline::generate`] instead;
/// everything that goes wrong after the request is accepted is a `Failure`.
#[derive(Debug, Serialize, TS)]
#[serde(tag = "status", rename_all = "snake_case")]
#[ts(export)]
pub enum GenerationResult {
    Success { form: FormTree },
    Failure { reason: String },
}

impl GenerationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, GenerationResult::Success { .. })
    }
}

/// Description → generator → normalization → store.
///
/// Cheap to share behind an `Arc`; holds only the pool and the generator.
pub struct GenerationPipeline {
    pool: DbPool,
    generator: Arc<dyn FormGenerator>,
}

impl GenerationPipeline {
    pub fn new(pool: DbPool, generator: Arc<dyn FormGenerator>) -> Self {
        Self { pool, generator }
    }

    /// Generate and persist a form for `owner_id` from `description`.
    ///
    /// Makes exactly one call to the generator. The store is only called with
    /// a fully normalized tree, and the tree write is atomic, so a `Failure`
    /// never leaves a partial form behind.
    pub async fn generate(
        &self,
        owner_id: &str,
        description: &str,
    ) -> Result<GenerationResult, CoreError> {
        validate_owner_id(owner_id)?;
        validate_description(description)?;

        let raw = match self.generator.generate(description).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(owner_id, error = %e, "Form generator failed");
                return Ok(GenerationResult::Failure {
                    reason: e.to_string(),
                });
            }
        };

        let normalized = match CandidateForm::from_value(raw)
            .and_then(|candidate| normalize(candidate, owner_id, description))
        {
            Ok(normalized) => normalized,
            Err(e) => {
                tracing::warn!(owner_id, error = %e, "Generated form could not be normalized");
                return Ok(GenerationResult::Failure {
                    reason: e.to_string(),
                });
            }
        };

        tracing::debug!(
            owner_id,
            questions = normalized.tree.questions.len(),
            defaulted_labels = normalized.defaulted_labels,
            stripped_options = normalized.stripped_options,
            dropped_questions = normalized.dropped_questions,
            "Generated form normalized"
        );

        match FormRepo::create_tree(&self.pool, &normalized.tree).await {
            Ok(form) => {
                tracing::info!(
                    owner_id,
                    form_id = form.form.id,
                    questions = form.questions.len(),
                    "Form generated"
                );
                Ok(GenerationResult::Success { form })
            }
            Err(StoreError::Core(e)) => {
                // Normalization should make this unreachable.
                tracing::error!(owner_id, error = %e, "Store rejected a normalized form tree");
                Ok(GenerationResult::Failure {
                    reason: format!("Normalized form was rejected by the store: {e}"),
                })
            }
            Err(StoreError::Database(e)) => {
                tracing::error!(owner_id, error = %e, "Failed to persist generated form");
                Ok(GenerationResult::Failure {
                    reason: "Failed to save the generated form".into(),
                })
            }
        }
    }
}
