//! Creation-dialog state machine.
//!
//! ```text
//! Idle --submit--> Submitting --succeed--> Success   (close signal)
//!                       |
//!                       +-----fail-------> Idle { error }
//! ```
//!
//! `Success` is terminal for one interaction: the dialog closes and a new
//! interaction starts from [`DialogState::default`].

use serde::Serialize;
use ts_rs::TS;

use crate::error::CoreError;
use crate::types::DbId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(tag = "state", rename_all = "snake_case")]
#[ts(export)]
pub enum DialogState {
    /// Open and waiting for a description. Carries the error of the previous
    /// attempt, if any.
    Idle { error: Option<String> },
    /// A description was submitted and generation is in flight.
    Submitting,
    /// A form was created; the dialog should close.
    Success { form_id: DbId },
}

impl Default for DialogState {
    fn default() -> Self {
        DialogState::Idle { error: None }
    }
}

impl DialogState {
    fn name(&self) -> &'static str {
        match self {
            DialogState::Idle { .. } => "idle",
            DialogState::Submitting => "submitting",
            DialogState::Success { .. } => "success",
        }
    }

    fn invalid(&self, event: &str) -> CoreError {
        CoreError::Internal(format!(
            "Invalid dialog transition: '{event}' while {}",
            self.name()
        ))
    }

    /// `Idle -> Submitting`. Clears any previous error.
    pub fn submit(self) -> Result<Self, CoreError> {
        match self {
            DialogState::Idle { .. } => Ok(DialogState::Submitting),
            other => Err(other.invalid("submit")),
        }
    }

    /// `Submitting -> Success`.
    pub fn succeed(self, form_id: DbId) -> Result<Self, CoreError> {
        match self {
            DialogState::Submitting => Ok(DialogState::Success { form_id }),
            other => Err(other.invalid("succeed")),
        }
    }

    /// `Submitting -> Idle { error }`.
    pub fn fail(self, reason: impl Into<String>) -> Result<Self, CoreError> {
        match self {
            DialogState::Submitting => Ok(DialogState::Idle {
                error: Some(reason.into()),
            }),
            other => Err(other.invalid("fail")),
        }
    }

    /// Whether the creation surface should stay open.
    pub fn is_open(&self) -> bool {
        !matches!(self, DialogState::Success { .. })
    }

    /// Whether the caller should close the creation surface.
    pub fn should_close(&self) -> bool {
        !self.is_open()
    }
}
