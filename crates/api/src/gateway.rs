//! Authenticated boundary between the creation dialog and the generation
//! pipeline.

use std::sync::Arc;

use formgen_core::dialog::DialogState;
use formgen_core::error::CoreError;
use formgen_pipeline::{GenerationPipeline, GenerationResult};
use serde::Serialize;
use ts_rs::TS;

/// Message shown to the user when generation fails. The diagnostic reason is
/// logged, not returned.
pub const GENERATION_FAILED_MESSAGE: &str =
    "We couldn't generate a form from that description. Please try again.";

/// The signed-in user on whose behalf a description is submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity {
    pub user_id: String,
}

/// What the creation dialog needs after a submission: the outcome, the
/// resulting dialog state and whether to close.
#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct Submission {
    pub result: GenerationResult,
    pub dialog: DialogState,
    pub close_dialog: bool,
}

pub struct PresentationGateway {
    pipeline: Arc<GenerationPipeline>,
}

impl PresentationGateway {
    pub fn new(pipeline: Arc<GenerationPipeline>) -> Self {
        Self { pipeline }
    }

    /// The signed-in caller, or `Unauthenticated` when there is none or its
    /// identity is blank.
    pub fn require_caller(
        caller: Option<&CallerIdentity>,
    ) -> Result<&CallerIdentity, CoreError> {
        caller
            .filter(|c| !c.user_id.trim().is_empty())
            .ok_or_else(|| CoreError::Unauthenticated("Sign in to generate a form".into()))
    }

    /// Submit a description from the creation dialog.
    ///
    /// Without a caller, or with a blank identity, this returns
    /// `Unauthenticated` before the pipeline is invoked. Validation errors
    /// from the pipeline propagate unchanged and leave the dialog where it was.
    pub async fn submit_description(
        &self,
        caller: Option<&CallerIdentity>,
        description: &str,
    ) -> Result<Submission, CoreError> {
        let caller = Self::require_caller(caller)?;

        let dialog = DialogState::default().submit()?;

        match self.pipeline.generate(&caller.user_id, description).await? {
            GenerationResult::Success { form } => {
                let dialog = dialog.succeed(form.form.id)?;
                Ok(Submission {
                    close_dialog: dialog.should_close(),
                    result: GenerationResult::Success { form },
                    dialog,
                })
            }
            GenerationResult::Failure { reason } => {
                tracing::warn!(user_id = %caller.user_id, %reason, "Form generation failed");
                let dialog = dialog.fail(GENERATION_FAILED_MESSAGE)?;
                Ok(Submission {
                    close_dialog: dialog.should_close(),
                    result: GenerationResult::Failure {
                        reason: GENERATION_FAILED_MESSAGE.into(),
                    },
                    dialog,
                })
            }
        }
    }
}
