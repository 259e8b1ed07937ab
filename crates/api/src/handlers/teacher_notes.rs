//! Handlers for teacher notes.
//!
//! Provides create, list (own, public, recommended), get, update, delete
//! and Markdown export. Every owner-scoped lookup passes the caller's id to
//! the repository, and a note owned by someone else is reported exactly
//! like a missing one.

use axum::extract::{Path, Query, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use teachnotes_core::error::CoreError;
use teachnotes_core::export::{export_filename, render_markdown, EXPORT_CONTENT_TYPE};
use teachnotes_core::teacher_notes::{
    parse_note_id, resolve_access, validate_access, validate_association_id,
    validate_notes_body, validate_reference, validate_required_fields, validate_topic,
    NoteFilter,
};
use teachnotes_core::types::DbId;
use teachnotes_db::models::teacher_note::{
    AssociationId, CreateTeacherNote, JourneyQuery, TeacherNote, UpdateTeacherNote,
};
use teachnotes_db::repositories::TeacherNoteRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::{CreatedResponse, MessageResponse, RecommendationsResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn note_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "TeacherNote",
        id,
    })
}

/// Parse the `{note_id}` path segment, rejecting non-numeric ids with 400.
fn note_id_from_path(raw: &str) -> AppResult<DbId> {
    parse_note_id(raw).map_err(AppError::BadRequest)
}

/// Load a note owned by the caller, or 404.
async fn load_owned_note(state: &AppState, id: DbId, user_id: DbId) -> AppResult<TeacherNote> {
    TeacherNoteRepo::find_for_owner(&state.pool, id, user_id)
        .await?
        .ok_or_else(|| note_not_found(id))
}

/// An association id must be numeric (or blank) and positive.
fn validate_association(field: &str, value: Option<&AssociationId>) -> Result<(), String> {
    let id = match value {
        Some(raw) => raw.resolve(field)?,
        None => None,
    };
    validate_association_id(field, id)
}

/// Validate the optional fields shared by create and update.
fn validate_optional_fields(
    reference_books: Option<&str>,
    youtube_link: Option<&str>,
    journey_id: Option<&AssociationId>,
    chapter_id: Option<&AssociationId>,
) -> Result<(), String> {
    validate_reference("reference_books", reference_books)?;
    validate_reference("youtube_link", youtube_link)?;
    validate_association("journey_id", journey_id)?;
    validate_association("chapter_id", chapter_id)
}

fn validate_create(input: &CreateTeacherNote) -> Result<(), String> {
    validate_required_fields(&input.topic, &input.notes)?;
    resolve_access(input.access.as_deref())?;
    validate_optional_fields(
        input.reference_books.as_deref(),
        input.youtube_link.as_deref(),
        input.journey_id.as_ref(),
        input.chapter_id.as_ref(),
    )
}

/// A provided `topic`, `notes` or `access` must be valid; an empty string
/// is rejected instead of silently keeping the stored value. Access is
/// trimmed the same way as on create.
fn validate_update(input: &UpdateTeacherNote) -> Result<(), String> {
    if let Some(ref topic) = input.topic {
        validate_topic(topic)?;
    }
    if let Some(ref notes) = input.notes {
        validate_notes_body(notes)?;
    }
    if let Some(ref access) = input.access {
        validate_access(access.trim())?;
    }
    validate_optional_fields(
        input.reference_books.as_ref().and_then(|v| v.as_deref()),
        input.youtube_link.as_ref().and_then(|v| v.as_deref()),
        input.journey_id.as_ref().and_then(Option::as_ref),
        input.chapter_id.as_ref().and_then(Option::as_ref),
    )
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /teachernotes
///
/// Create a note owned by the caller.
pub async fn create_note(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateTeacherNote>,
) -> AppResult<impl IntoResponse> {
    validate_create(&input).map_err(CoreError::Validation)?;

    let note = TeacherNoteRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(
        user_id = auth.user_id,
        note_id = note.id,
        access = %note.access,
        journey_id = ?note.journey_id,
        "Teacher note created"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Teacher note created successfully!",
            id: note.id,
        }),
    ))
}

/// GET /teachernotes?journey_id=
///
/// List the caller's notes. With a journey id, only notes linked to that
/// journey plus the caller's public notes are returned.
pub async fn list_my_notes(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<JourneyQuery>,
) -> AppResult<impl IntoResponse> {
    let filter = NoteFilter::for_listing(params.journey_id.as_deref());
    let notes = TeacherNoteRepo::list_for_owner(&state.pool, auth.user_id, filter).await?;

    tracing::debug!(
        user_id = auth.user_id,
        ?filter,
        count = notes.len(),
        "Listed teacher notes"
    );

    Ok(Json(notes))
}

/// GET /teachernotes/public
///
/// List every public note, newest first. No authentication.
pub async fn list_public_notes(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let notes = TeacherNoteRepo::list_public(&state.pool).await?;
    Ok(Json(notes))
}

/// GET /teachernotes/recommend?journey_id=
///
/// Recommend the caller's notes for a journey: notes linked to it plus the
/// caller's public notes, or only public notes without a journey. Always
/// 200, with an empty list when nothing matches.
pub async fn recommend_notes(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<JourneyQuery>,
) -> AppResult<impl IntoResponse> {
    let filter = NoteFilter::for_recommendation(params.journey_id.as_deref());
    let notes = TeacherNoteRepo::list_for_owner(&state.pool, auth.user_id, filter).await?;

    tracing::debug!(
        user_id = auth.user_id,
        ?filter,
        count = notes.len(),
        "Recommended teacher notes"
    );

    Ok(Json(RecommendationsResponse {
        recommendations: notes,
    }))
}

/// GET /teachernotes/{note_id}
///
/// Get one of the caller's notes.
pub async fn get_note(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(note_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = note_id_from_path(&note_id)?;
    tracing::debug!(user_id = auth.user_id, note_id = id, "Fetching teacher note");

    let note = load_owned_note(&state, id, auth.user_id).await?;
    Ok(Json(note))
}

/// PUT /teachernotes/{note_id}
///
/// Apply a partial update to one of the caller's notes.
pub async fn update_note(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(note_id): Path<String>,
    Json(input): Json<UpdateTeacherNote>,
) -> AppResult<impl IntoResponse> {
    let id = note_id_from_path(&note_id)?;
    validate_update(&input).map_err(CoreError::Validation)?;

    load_owned_note(&state, id, auth.user_id).await?;

    // The note can vanish between the ownership check and the write.
    TeacherNoteRepo::update(&state.pool, id, auth.user_id, &input)
        .await?
        .ok_or_else(|| AppError::BadRequest("Failed to update note".to_string()))?;

    tracing::info!(user_id = auth.user_id, note_id = id, "Teacher note updated");

    Ok(Json(MessageResponse {
        message: "Teacher note updated successfully!",
    }))
}

/// DELETE /teachernotes/{note_id}
///
/// Delete one of the caller's notes.
pub async fn delete_note(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(note_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = note_id_from_path(&note_id)?;

    load_owned_note(&state, id, auth.user_id).await?;

    let deleted = TeacherNoteRepo::delete(&state.pool, id, auth.user_id).await?;
    if !deleted {
        return Err(AppError::BadRequest("Failed to delete note".to_string()));
    }

    tracing::info!(user_id = auth.user_id, note_id = id, "Teacher note deleted");

    Ok(Json(MessageResponse {
        message: "Teacher note deleted successfully!",
    }))
}

/// GET /teachernotes/{note_id}/export
///
/// Download one of the caller's notes as a Markdown document.
pub async fn export_note(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(note_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = note_id_from_path(&note_id)?;
    let note = load_owned_note(&state, id, auth.user_id).await?;

    let body = render_markdown(&note.as_document());
    let disposition = format!(
        "attachment; filename=\"{}\"",
        export_filename(note.id, &note.topic)
    );

    tracing::info!(user_id = auth.user_id, note_id = id, "Teacher note exported");

    Ok((
        StatusCode::OK,
        [
            (CONTENT_TYPE, EXPORT_CONTENT_TYPE.to_string()),
            (CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}
