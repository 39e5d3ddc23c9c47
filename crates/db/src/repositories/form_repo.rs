//! Repository for the `forms` table and the form tree rooted at it.

use std::collections::HashMap;

use formgen_core::types::DbId;
use sqlx::PgPool;

use crate::error::StoreError;
use crate::models::field_option::FieldOption;
use crate::models::form::{CreateForm, CreateFormTree, Form, FormTree};
use crate::models::question::QuestionWithOptions;
use crate::repositories::{FieldOptionRepo, QuestionRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, user_id, published, created_at, updated_at";

/// Provides CRUD operations for forms.
pub struct FormRepo;

impl FormRepo {
    /// Insert a new unpublished form with no questions.
    pub async fn create(pool: &PgPool, input: &CreateForm) -> Result<Form, StoreError> {
        input.validate()?;

        let query = format!(
            "INSERT INTO forms (name, description, user_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let form = sqlx::query_as::<_, Form>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.owner_id)
            .fetch_one(pool)
            .await?;
        Ok(form)
    }

    /// Insert a form together with all of its questions and options.
    ///
    /// The input is validated before a transaction is opened; every row is then
    /// written in one transaction, so a failure at any point leaves nothing
    /// behind.
    pub async fn create_tree(
        pool: &PgPool,
        input: &CreateFormTree,
    ) -> Result<FormTree, StoreError> {
        input.validate()?;

        let mut tx = pool.begin().await?;

        let insert_form = format!(
            "INSERT INTO forms (name, description, user_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let form = sqlx::query_as::<_, Form>(&insert_form)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.owner_id)
            .fetch_one(&mut *tx)
            .await?;

        let mut questions = Vec::with_capacity(input.questions.len());
        for new_question in &input.questions {
            let question = QuestionRepo::insert_inner(&mut tx, form.id, new_question).await?;
            let mut options = Vec::with_capacity(new_question.options.len());
            for new_option in &new_question.options {
                let option = FieldOptionRepo::insert_inner(&mut tx, question.id, new_option).await?;
                options.push(option);
            }
            questions.push(QuestionWithOptions { question, options });
        }

        tx.commit().await?;

        tracing::debug!(
            form_id = form.id,
            question_count = questions.len(),
            "Form tree created"
        );
        Ok(FormTree { form, questions })
    }

    /// Find a form by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Form>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM forms WHERE id = $1");
        sqlx::query_as::<_, Form>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Load a form with its questions and options, both in creation order.
    pub async fn find_tree(pool: &PgPool, id: DbId) -> Result<Option<FormTree>, sqlx::Error> {
        let Some(form) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let questions = QuestionRepo::list_by_form(pool, form.id).await?;
        let question_ids: Vec<DbId> = questions.iter().map(|q| q.id).collect();
        let options = FieldOptionRepo::list_by_questions(pool, &question_ids).await?;

        let mut by_question: HashMap<DbId, Vec<FieldOption>> = HashMap::new();
        for option in options {
            by_question.entry(option.question_id).or_default().push(option);
        }

        let questions = questions
            .into_iter()
            .map(|question| {
                let options = by_question.remove(&question.id).unwrap_or_default();
                QuestionWithOptions { question, options }
            })
            .collect();

        Ok(Some(FormTree { form, questions }))
    }

    /// List the forms owned by a user, most recently created first.
    pub async fn list_by_owner(pool: &PgPool, owner_id: &str) -> Result<Vec<Form>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM forms WHERE user_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Form>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Mark a form as published.
    ///
    /// Idempotent: publishing an already-published form returns it unchanged,
    /// including `updated_at`. Returns `None` if no row with the given `id`
    /// exists.
    pub async fn publish(pool: &PgPool, id: DbId) -> Result<Option<Form>, sqlx::Error> {
        let query = format!(
            "UPDATE forms SET
                published = true,
                updated_at = CASE WHEN published THEN updated_at ELSE NOW() END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Form>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a form and, through the foreign keys, its questions
    /// and options. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM forms WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
