//! Field option entity model and DTOs.

use formgen_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;

/// A row from the `field_options` table.
#[derive(Debug, Clone, FromRow, Serialize, TS)]
#[ts(export)]
pub struct FieldOption {
    pub id: DbId,
    pub text: String,
    pub value: String,
    pub question_id: DbId,
}

/// DTO for an option inserted as part of a form tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewFieldOption {
    pub text: String,
    pub value: String,
}
