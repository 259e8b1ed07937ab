//! Route definitions for teacher notes.
//!
//! Mounted at `/teachernotes` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::teacher_notes;
use crate::state::AppState;

/// Teacher note routes.
///
/// Static segments (`/public`, `/recommend`) take precedence over
/// `/{note_id}`. Only `/public` is reachable without a bearer token.
///
/// ```text
/// GET    /                      -> list_my_notes (?journey_id)
/// POST   /                      -> create_note
/// GET    /public                -> list_public_notes
/// GET    /recommend             -> recommend_notes (?journey_id)
/// GET    /{note_id}             -> get_note
/// PUT    /{note_id}             -> update_note
/// DELETE /{note_id}             -> delete_note
/// GET    /{note_id}/export      -> export_note
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(teacher_notes::list_my_notes).post(teacher_notes::create_note),
        )
        .route("/public", get(teacher_notes::list_public_notes))
        .route("/recommend", get(teacher_notes::recommend_notes))
        .route(
            "/{note_id}",
            get(teacher_notes::get_note)
                .put(teacher_notes::update_note)
                .delete(teacher_notes::delete_note),
        )
        .route("/{note_id}/export", get(teacher_notes::export_note))
}
