//! Response bodies for the teacher note endpoints.
//!
//! Lists and single notes are returned bare; mutations answer with a
//! `{ "message": ... }` object, and recommendations are wrapped under
//! `recommendations` so an empty result is still a valid payload.

use serde::Serialize;
use teachnotes_core::types::DbId;

/// `{ "message": ... }` acknowledgement for updates and deletes.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// `{ "message": ..., "id": ... }` returned by create.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
    pub id: DbId,
}

/// `{ "recommendations": [...] }` returned by the recommend endpoint.
#[derive(Debug, Serialize)]
pub struct RecommendationsResponse<T: Serialize> {
    pub recommendations: Vec<T>,
}
