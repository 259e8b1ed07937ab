//! Teacher note model.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};
use sqlx::FromRow;
use teachnotes_core::export::NoteDocument;
use teachnotes_core::teacher_notes::{
    parse_association_id, text_patch, FieldPatch, ACCESS_PUBLIC,
};
use teachnotes_core::types::{DbId, Timestamp};

/// A row from the `teacher_notes` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TeacherNote {
    pub id: DbId,
    pub user_id: DbId,
    pub topic: String,
    pub notes: String,
    pub reference_books: Option<String>,
    pub youtube_link: Option<String>,
    pub access: String,
    pub journey_id: Option<DbId>,
    pub chapter_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TeacherNote {
    pub fn is_public(&self) -> bool {
        self.access == ACCESS_PUBLIC
    }

    /// Borrow the fields that make up an exported document.
    pub fn as_document(&self) -> NoteDocument<'_> {
        NoteDocument {
            id: self.id,
            topic: &self.topic,
            notes: &self.notes,
            reference_books: self.reference_books.as_deref(),
            youtube_link: self.youtube_link.as_deref(),
            access: &self.access,
            created_at: self.created_at,
        }
    }
}

/// A journey or chapter reference as clients send it: a JSON number, or a
/// string holding one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AssociationId {
    Number(DbId),
    Text(String),
}

impl AssociationId {
    /// Resolve to an id. Blank text is no association; other non-numeric
    /// text is an error naming `field`.
    pub fn resolve(&self, field: &str) -> Result<Option<DbId>, String> {
        match self {
            AssociationId::Number(id) => Ok(Some(*id)),
            AssociationId::Text(raw) => parse_association_id(field, raw),
        }
    }

    /// The id, or `None` when blank. Handlers reject unparseable text before
    /// it reaches the repository.
    pub fn id(&self) -> Option<DbId> {
        self.resolve("id").ok().flatten()
    }
}

/// DTO for creating a new teacher note.
///
/// `topic` and `notes` default to empty when absent or `null`, so such a
/// request is rejected by validation rather than by the JSON extractor.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTeacherNote {
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub topic: String,
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub notes: String,
    pub reference_books: Option<String>,
    pub youtube_link: Option<String>,
    pub access: Option<String>,
    pub journey_id: Option<AssociationId>,
    pub chapter_id: Option<AssociationId>,
}

impl CreateTeacherNote {
    pub fn journey_id_value(&self) -> Option<DbId> {
        self.journey_id.as_ref().and_then(AssociationId::id)
    }

    pub fn chapter_id_value(&self) -> Option<DbId> {
        self.chapter_id.as_ref().and_then(AssociationId::id)
    }
}

/// DTO for updating a teacher note.
///
/// An absent field keeps the stored value. For the nullable columns an
/// explicit `null` clears the value; `topic`, `notes` and `access` cannot
/// be cleared, so `null` there is the same as absent. A blank journey or
/// chapter id clears the association like `null` does.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTeacherNote {
    pub topic: Option<String>,
    pub notes: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub reference_books: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub youtube_link: Option<Option<String>>,
    pub access: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub journey_id: Option<Option<AssociationId>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub chapter_id: Option<Option<AssociationId>>,
}

impl UpdateTeacherNote {
    pub fn reference_books_patch(&self) -> FieldPatch<String> {
        text_patch(self.reference_books.as_ref().map(|v| v.as_deref()))
    }

    pub fn youtube_link_patch(&self) -> FieldPatch<String> {
        text_patch(self.youtube_link.as_ref().map(|v| v.as_deref()))
    }

    pub fn journey_id_patch(&self) -> FieldPatch<DbId> {
        association_patch(self.journey_id.as_ref())
    }

    pub fn chapter_id_patch(&self) -> FieldPatch<DbId> {
        association_patch(self.chapter_id.as_ref())
    }
}

fn association_patch(value: Option<&Option<AssociationId>>) -> FieldPatch<DbId> {
    FieldPatch::from_double_option(value.map(|v| v.as_ref().and_then(AssociationId::id)))
}

/// Query parameters accepted by the owner listing and recommendation
/// endpoints. Kept as a raw string so blank and non-numeric values can be
/// interpreted instead of rejected.
#[derive(Debug, Default, Deserialize)]
pub struct JourneyQuery {
    pub journey_id: Option<String>,
}
