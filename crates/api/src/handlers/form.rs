//! Handlers for the `/forms` resource.
//!
//! Every handler requires a signed-in caller. Reads and writes on a single
//! form are restricted to its owner.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use formgen_core::error::CoreError;
use formgen_core::types::DbId;
use formgen_db::models::form::{Form, FormTree};
use formgen_db::repositories::FormRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::gateway::{PresentationGateway, Submission};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /forms/generate`.
#[derive(Debug, Deserialize)]
pub struct GenerateFormRequest {
    pub description: String,
}

/// POST /api/v1/forms/generate
///
/// Anonymous callers get 401 even when the body is unreadable, so the client
/// always learns to sign in first. Returns 201 when a form was created and
/// 200 when generation failed and the dialog stays open.
pub async fn generate(
    State(state): State<AppState>,
    auth: Option<AuthUser>,
    body: Result<Json<GenerateFormRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<DataResponse<Submission>>)> {
    let caller = auth.map(|a| a.identity());
    PresentationGateway::require_caller(caller.as_ref())?;
    let Json(input) = body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let submission = state
        .gateway
        .submit_description(caller.as_ref(), &input.description)
        .await?;

    let status = if submission.result.is_success() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(DataResponse { data: submission })))
}

/// GET /api/v1/forms
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DataResponse<Vec<Form>>>> {
    let forms = FormRepo::list_by_owner(&state.pool, &auth.user_id).await?;
    Ok(Json(DataResponse { data: forms }))
}

/// GET /api/v1/forms/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<FormTree>>> {
    let tree = FormRepo::find_tree(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Form", id }))?;
    ensure_owner(&tree.form, &auth)?;
    Ok(Json(DataResponse { data: tree }))
}

/// POST /api/v1/forms/{id}/publish
pub async fn publish(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Form>>> {
    load_owned(&state, &auth, id).await?;
    let form = FormRepo::publish(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Form", id }))?;

    tracing::info!(form_id = id, user_id = %auth.user_id, "Form published");
    Ok(Json(DataResponse { data: form }))
}

/// DELETE /api/v1/forms/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    load_owned(&state, &auth, id).await?;
    let deleted = FormRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(form_id = id, user_id = %auth.user_id, "Form deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Form", id }))
    }
}

async fn load_owned(state: &AppState, auth: &AuthUser, id: DbId) -> AppResult<Form> {
    let form = FormRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Form", id }))?;
    ensure_owner(&form, auth)?;
    Ok(form)
}

fn ensure_owner(form: &Form, auth: &AuthUser) -> AppResult<()> {
    if form.user_id != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You do not own this form".into(),
        )));
    }
    Ok(())
}
