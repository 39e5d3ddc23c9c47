//! Repository for the `field_options` table.

use formgen_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::field_option::{FieldOption, NewFieldOption};

const COLUMNS: &str = "id, text, value, question_id";

pub struct FieldOptionRepo;

impl FieldOptionRepo {
    /// List the options of the given questions, ordered by question then
    /// creation order.
    pub async fn list_by_questions(
        pool: &PgPool,
        question_ids: &[DbId],
    ) -> Result<Vec<FieldOption>, sqlx::Error> {
        if question_ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!(
            "SELECT {COLUMNS} FROM field_options
             WHERE question_id = ANY($1)
             ORDER BY question_id ASC, id ASC"
        );
        sqlx::query_as::<_, FieldOption>(&query)
            .bind(question_ids)
            .fetch_all(pool)
            .await
    }

    /// Count every option that belongs to a question of the given form.
    pub async fn count_by_form(pool: &PgPool, form_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM field_options o
             JOIN questions q ON q.id = o.question_id
             WHERE q.form_id = $1",
        )
        .bind(form_id)
        .fetch_one(pool)
        .await
    }

    /// Insert one option within an existing transaction.
    pub(crate) async fn insert_inner(
        tx: &mut Transaction<'_, Postgres>,
        question_id: DbId,
        input: &NewFieldOption,
    ) -> Result<FieldOption, sqlx::Error> {
        let query = format!(
            "INSERT INTO field_options (text, value, question_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FieldOption>(&query)
            .bind(&input.text)
            .bind(&input.value)
            .bind(question_id)
            .fetch_one(&mut **tx)
            .await
    }
}
