//! HTTP handlers for idea endpoints.
//!
//! All three routes sit behind the auth middleware and start with an
//! ownership check: the `{id}` path segment must equal the authenticated
//! user id, otherwise the request fails with 403 before touching the store.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::ideas::db;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;

/// Body for POST /api/users/{id}/ideas. All fields required and non-empty.
#[derive(Debug, Deserialize)]
pub struct NewIdeaRequest {
    pub img: Option<String>,
    pub adj: Option<String>,
    #[serde(rename = "adjDef")]
    pub adj_def: Option<String>,
    pub noun: Option<String>,
    #[serde(rename = "nounDef")]
    pub noun_def: Option<String>,
}

impl NewIdeaRequest {
    fn validated(&self) -> Result<(&str, &str, &str, &str, &str), ApiError> {
        Ok((
            required(&self.img, "img is required")?,
            required(&self.adj, "adj is required")?,
            required(&self.adj_def, "adjDef is required")?,
            required(&self.noun, "noun is required")?,
            required(&self.noun_def, "nounDef is required")?,
        ))
    }
}

fn required<'a>(field: &'a Option<String>, message: &'static str) -> Result<&'a str, ApiError> {
    match field.as_deref() {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ApiError::Validation(message)),
    }
}

/// GET /api/users/{id}/ideas: the owner's ideas, newest first.
pub async fn get_ideas(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    auth.require_owner(user_id)?;

    let ideas = db::list_ideas(&state.db, user_id).await?;

    Ok(Json(json!({ "ideas": ideas })))
}

/// POST /api/users/{id}/ideas: persist a new idea for the owner.
pub async fn create_idea(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<i64>,
    Json(request): Json<NewIdeaRequest>,
) -> Result<Json<Value>, ApiError> {
    auth.require_owner(user_id)?;

    let (img, adj, adj_def, noun, noun_def) = request.validated()?;

    let idea = db::create_idea(&state.db, user_id, img, adj, adj_def, noun, noun_def).await?;

    tracing::info!(user_id, idea_id = idea.id, "idea created");

    Ok(Json(json!({ "idea": idea })))
}

/// DELETE /api/users/{id}/ideas/{idea_id}: remove one of the owner's
/// ideas. The store-level owner scope means a valid token can never delete
/// another user's idea. Deleting an already-gone idea still returns 200.
pub async fn delete_idea(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((user_id, idea_id)): Path<(i64, i64)>,
) -> Result<StatusCode, ApiError> {
    auth.require_owner(user_id)?;

    let removed = db::delete_idea(&state.db, user_id, idea_id).await?;
    if removed > 0 {
        tracing::info!(user_id, idea_id, "idea deleted");
    }

    Ok(StatusCode::OK)
}
