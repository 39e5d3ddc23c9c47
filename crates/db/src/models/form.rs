//! Form entity model and DTOs.

use formgen_core::error::CoreError;
use formgen_core::form::{
    validate_form_name, validate_option, validate_owner_id, validate_question,
    validate_question_count,
};
use formgen_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;

use crate::models::question::{NewQuestion, QuestionWithOptions};

/// A row from the `forms` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, TS)]
#[ts(export)]
pub struct Form {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    /// Opaque id of the owning user, as issued by the auth provider.
    pub user_id: String,
    pub published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A form with its full question/option tree.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct FormTree {
    #[serde(flatten)]
    pub form: Form,
    pub questions: Vec<QuestionWithOptions>,
}

/// DTO for creating an empty, unpublished form.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateForm {
    pub owner_id: String,
    pub name: String,
    pub description: Option<String>,
}

impl CreateForm {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_owner_id(&self.owner_id)?;
        validate_form_name(&self.name)
    }
}

/// DTO for creating a form together with its questions and options in one
/// atomic write.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFormTree {
    pub owner_id: String,
    pub name: String,
    pub description: Option<String>,
    pub questions: Vec<NewQuestion>,
}

impl CreateFormTree {
    /// Check every rule the store enforces on a tree. Field types are already
    /// constrained by [`FieldType`](formgen_core::form::FieldType); this covers
    /// ownership, naming, and the options-only-on-choice-types rule.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_owner_id(&self.owner_id)?;
        validate_form_name(&self.name)?;
        validate_question_count(self.questions.len())?;
        for (position, question) in self.questions.iter().enumerate() {
            validate_question(
                position,
                &question.text,
                question.field_type,
                question.options.len(),
            )?;
            for option in &question.options {
                validate_option(position, &option.text, &option.value)?;
            }
        }
        Ok(())
    }
}
