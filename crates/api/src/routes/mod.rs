pub mod health;
pub mod teacher_notes;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /teachernotes                      list own, create
/// /teachernotes/public               list public (no auth)
/// /teachernotes/recommend            recommendations
/// /teachernotes/{note_id}            get, update, delete
/// /teachernotes/{note_id}/export     Markdown download
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/teachernotes", teacher_notes::router())
}
