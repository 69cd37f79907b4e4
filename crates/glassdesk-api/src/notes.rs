use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::WithRejection;
use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use glassdesk_store::StoreError;
use glassdesk_types::api::{Claims, MessageResponse, NoteRequest, NoteResponse};
use glassdesk_types::models::Note;

use crate::auth::AppState;
use crate::error::ApiError;

pub async fn create_note(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    WithRejection(Json(req), _): WithRejection<Json<NoteRequest>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let note = Note::new(&claims.username, req.content, Utc::now());
    state.notes.insert_note(note.clone())?;
    info!("Note {} created by {}", note.id, claims.username);

    Ok((
        StatusCode::CREATED,
        Json(NoteResponse {
            message: "Note saved successfully".into(),
            note,
        }),
    ))
}

pub async fn list_notes(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, ApiError> {
    let notes = state.notes.notes_for(&claims.username)?;
    Ok(Json(notes))
}

pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Extension(claims): Extension<Claims>,
    WithRejection(Json(req), _): WithRejection<Json<NoteRequest>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_note_id(&id, "update")?;
    let note = state
        .notes
        .update_note(&claims.username, id, req.content, Utc::now())
        .map_err(note_error("update"))?;
    debug!("Note {} updated by {}", note.id, claims.username);

    Ok(Json(NoteResponse {
        message: "Note updated successfully".into(),
        note,
    }))
}

pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_note_id(&id, "delete")?;
    state
        .notes
        .delete_note(&claims.username, id)
        .map_err(note_error("delete"))?;
    debug!("Note {} deleted by {}", id, claims.username);

    Ok(Json(MessageResponse {
        message: "Note deleted successfully".into(),
    }))
}

/// Ids are UUIDs; anything else cannot name a note the caller owns.
fn parse_note_id(raw: &str, action: &'static str) -> Result<Uuid, ApiError> {
    raw.parse().map_err(|_| ApiError::NoteNotFound(action))
}

fn note_error(action: &'static str) -> impl Fn(StoreError) -> ApiError {
    move |err| match err {
        StoreError::NoteNotFoundOrForbidden => ApiError::NoteNotFound(action),
        other => other.into(),
    }
}
