//! Repository for the `teacher_notes` table.
//!
//! Every read and write of a single note is scoped to `(id, user_id)`, so a
//! note owned by someone else is indistinguishable from a missing one.

use sqlx::PgPool;
use teachnotes_core::teacher_notes::{
    normalize_optional_text, NoteFilter, ACCESS_PUBLIC, DEFAULT_ACCESS,
};
use teachnotes_core::types::DbId;

use crate::models::teacher_note::{CreateTeacherNote, TeacherNote, UpdateTeacherNote};

/// Column list for teacher_notes queries.
const COLUMNS: &str = "id, user_id, topic, notes, reference_books, youtube_link, \
    access, journey_id, chapter_id, created_at, updated_at";

/// Provides CRUD operations for teacher notes.
pub struct TeacherNoteRepo;

impl TeacherNoteRepo {
    /// Create a new note owned by `user_id`, returning the created row.
    ///
    /// Blank access falls back to public and blank reference fields are
    /// stored as NULL. The caller validates the input first.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateTeacherNote,
    ) -> Result<TeacherNote, sqlx::Error> {
        let access = input
            .access
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .unwrap_or(DEFAULT_ACCESS);
        let query = format!(
            "INSERT INTO teacher_notes
                (user_id, topic, notes, reference_books, youtube_link, access, journey_id, chapter_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TeacherNote>(&query)
            .bind(user_id)
            .bind(&input.topic)
            .bind(&input.notes)
            .bind(normalize_optional_text(input.reference_books.as_deref()))
            .bind(normalize_optional_text(input.youtube_link.as_deref()))
            .bind(access)
            .bind(input.journey_id_value())
            .bind(input.chapter_id_value())
            .fetch_one(pool)
            .await
    }

    /// List the notes owned by `user_id` that pass `filter`, newest first.
    ///
    /// The filter is evaluated by the database in a single statement:
    /// `All` returns every owned note, `PublicOnly` the public ones, and
    /// `JourneyOrPublic` adds the notes linked to the journey.
    pub async fn list_for_owner(
        pool: &PgPool,
        user_id: DbId,
        filter: NoteFilter,
    ) -> Result<Vec<TeacherNote>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM teacher_notes
             WHERE user_id = $1
               AND ($2 OR access = $3 OR journey_id = $4)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, TeacherNote>(&query)
            .bind(user_id)
            .bind(filter.includes_all())
            .bind(ACCESS_PUBLIC)
            .bind(filter.journey_id())
            .fetch_all(pool)
            .await
    }

    /// List every public note regardless of owner, newest first.
    pub async fn list_public(pool: &PgPool) -> Result<Vec<TeacherNote>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM teacher_notes
             WHERE access = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, TeacherNote>(&query)
            .bind(ACCESS_PUBLIC)
            .fetch_all(pool)
            .await
    }

    /// Find a note by ID, provided it is owned by `user_id`.
    pub async fn find_for_owner(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<TeacherNote>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM teacher_notes WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, TeacherNote>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Apply a patch to a note owned by `user_id`, returning the updated row.
    ///
    /// `topic`, `notes` and `access` use `COALESCE` so only provided values
    /// change. The nullable columns take a "provided" flag so they can be
    /// cleared as well as set. Returns `None` when no row matched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateTeacherNote,
    ) -> Result<Option<TeacherNote>, sqlx::Error> {
        let reference_books = input.reference_books_patch();
        let youtube_link = input.youtube_link_patch();
        let journey_id = input.journey_id_patch();
        let chapter_id = input.chapter_id_patch();

        let query = format!(
            "UPDATE teacher_notes SET
                topic           = COALESCE($3, topic),
                notes           = COALESCE($4, notes),
                access          = COALESCE($5, access),
                reference_books = CASE WHEN $6 THEN $7 ELSE reference_books END,
                youtube_link    = CASE WHEN $8 THEN $9 ELSE youtube_link END,
                journey_id      = CASE WHEN $10 THEN $11 ELSE journey_id END,
                chapter_id      = CASE WHEN $12 THEN $13 ELSE chapter_id END,
                updated_at      = NOW()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TeacherNote>(&query)
            .bind(id)
            .bind(user_id)
            .bind(input.topic.as_deref())
            .bind(input.notes.as_deref())
            .bind(input.access.as_deref().map(str::trim))
            .bind(reference_books.is_provided())
            .bind(reference_books.value())
            .bind(youtube_link.is_provided())
            .bind(youtube_link.value())
            .bind(journey_id.is_provided())
            .bind(journey_id.value().copied())
            .bind(chapter_id.is_provided())
            .bind(chapter_id.value().copied())
            .fetch_optional(pool)
            .await
    }

    /// Delete a note owned by `user_id`. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM teacher_notes WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
