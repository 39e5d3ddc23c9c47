//! Question entity model and DTOs.

use formgen_core::form::FieldType;
use formgen_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;

use crate::models::field_option::{FieldOption, NewFieldOption};

/// A row from the `questions` table.
///
/// `field_type` is read as text (`field_type::text`) and parsed strictly, so a
/// label outside the enumeration surfaces as a decode error.
#[derive(Debug, Clone, FromRow, Serialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: DbId,
    pub text: String,
    #[sqlx(try_from = "String")]
    pub field_type: FieldType,
    pub form_id: DbId,
    pub created_at: Timestamp,
}

/// A question together with its options, in creation order.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct QuestionWithOptions {
    #[serde(flatten)]
    pub question: Question,
    pub options: Vec<FieldOption>,
}

/// DTO for a question inserted as part of a form tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewQuestion {
    pub text: String,
    pub field_type: FieldType,
    #[serde(default)]
    pub options: Vec<NewFieldOption>,
}
