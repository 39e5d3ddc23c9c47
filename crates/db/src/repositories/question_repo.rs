//! Repository for the `questions` table.

use formgen_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::question::{NewQuestion, Question};

/// Column list shared across queries. `field_type` is an enum column and is
/// read back as text.
const COLUMNS: &str = "id, text, field_type::text AS field_type, form_id, created_at";

/// Read access to questions, plus the transactional insert used by
/// [`FormRepo::create_tree`](crate::repositories::FormRepo::create_tree).
pub struct QuestionRepo;

impl QuestionRepo {
    /// List the questions of a form in creation order.
    pub async fn list_by_form(pool: &PgPool, form_id: DbId) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE form_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Question>(&query)
            .bind(form_id)
            .fetch_all(pool)
            .await
    }

    /// Count the questions of a form.
    pub async fn count_by_form(pool: &PgPool, form_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM questions WHERE form_id = $1")
            .bind(form_id)
            .fetch_one(pool)
            .await
    }

    /// Insert one question within an existing transaction.
    pub(crate) async fn insert_inner(
        tx: &mut Transaction<'_, Postgres>,
        form_id: DbId,
        input: &NewQuestion,
    ) -> Result<Question, sqlx::Error> {
        let query = format!(
            "INSERT INTO questions (text, field_type, form_id)
             VALUES ($1, $2::field_type, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(&input.text)
            .bind(input.field_type.as_str())
            .bind(form_id)
            .fetch_one(&mut **tx)
            .await
    }
}
