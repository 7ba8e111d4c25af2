use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::auth::TokenClaims;
use crate::db::{Note, NoteRepository};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct NotePayload {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct NoteResponse {
    pub note: Note,
}

#[derive(Debug, Serialize)]
pub struct NotesResponse {
    pub notes: Vec<Note>,
}

fn validate_payload(payload: &NotePayload) -> Result<(), AppError> {
    if payload.title.is_empty() || payload.content.is_empty() {
        return Err(AppError::Validation(
            "Title and content are required".to_string(),
        ));
    }
    Ok(())
}

fn validate_note_id(id: i64) -> Result<(), AppError> {
    if id <= 0 {
        return Err(AppError::Validation("Invalid note id".to_string()));
    }
    Ok(())
}

/// GET /api/notes (requires auth)
pub async fn list_notes(
    State(state): State<AppState>,
    Extension(claims): Extension<TokenClaims>,
) -> Result<Json<NotesResponse>, AppError> {
    tracing::debug!("fetching notes for user {}", claims.sub);

    let notes = NoteRepository::list_by_owner(&state.db, claims.sub).await?;

    Ok(Json(NotesResponse { notes }))
}

/// POST /api/notes (requires auth)
pub async fn create_note(
    State(state): State<AppState>,
    Extension(claims): Extension<TokenClaims>,
    Json(payload): Json<NotePayload>,
) -> Result<Json<NoteResponse>, AppError> {
    validate_payload(&payload)?;

    let note =
        NoteRepository::create(&state.db, claims.sub, &payload.title, &payload.content).await?;

    tracing::debug!("created note {} for user {}", note.id, claims.sub);

    Ok(Json(NoteResponse { note }))
}

/// PUT /api/notes/:id (requires auth)
pub async fn update_note(
    State(state): State<AppState>,
    Extension(claims): Extension<TokenClaims>,
    Path(id): Path<i64>,
    Json(payload): Json<NotePayload>,
) -> Result<Json<NoteResponse>, AppError> {
    validate_payload(&payload)?;
    validate_note_id(id)?;

    // Scoped to the caller: a note owned by someone else looks the same as a
    // nonexistent one.
    let note = NoteRepository::update_owned(
        &state.db,
        id,
        claims.sub,
        &payload.title,
        &payload.content,
    )
    .await?
    .ok_or_else(|| AppError::NotFound("Note not found".to_string()))?;

    Ok(Json(NoteResponse { note }))
}

/// DELETE /api/notes/:id (requires auth)
pub async fn delete_note(
    State(state): State<AppState>,
    Extension(claims): Extension<TokenClaims>,
    Path(id): Path<i64>,
) -> Result<Json<NoteResponse>, AppError> {
    validate_note_id(id)?;

    let note = NoteRepository::delete_owned(&state.db, id, claims.sub)
        .await?
        .ok_or_else(|| AppError::NotFound("Note not found".to_string()))?;

    tracing::debug!("deleted note {} for user {}", note.id, claims.sub);

    Ok(Json(NoteResponse { note }))
}
