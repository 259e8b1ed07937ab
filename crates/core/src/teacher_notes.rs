//! Teacher note constants, validation, listing filters and patch rules.
//!
//! A note carries a topic, a free-text body, optional reference material
//! and an access scope. The functions here are shared by the repository
//! layer (which turns them into SQL) and the HTTP handlers (which turn
//! validation failures into 400 responses).

use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a topic in characters.
pub const MAX_TOPIC_LENGTH: usize = 255;

/// Maximum length of a note body in characters.
pub const MAX_NOTES_LENGTH: usize = 100_000;

/// Maximum length of the reference books and video link fields.
pub const MAX_REFERENCE_LENGTH: usize = 2_000;

/// Message returned when a note is created without a topic or body.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Topic and notes are required!";

// ---------------------------------------------------------------------------
// Access scope
// ---------------------------------------------------------------------------

/// Visible to every user through the public listing.
pub const ACCESS_PUBLIC: &str = "public";
/// Visible to the owner only.
pub const ACCESS_PRIVATE: &str = "private";

/// All valid access scopes.
pub const VALID_ACCESS_SCOPES: &[&str] = &[ACCESS_PUBLIC, ACCESS_PRIVATE];

/// Scope applied when a note is created without one.
pub const DEFAULT_ACCESS: &str = ACCESS_PUBLIC;

/// Validate that the access string is one of the accepted scopes.
pub fn validate_access(access: &str) -> Result<(), String> {
    if VALID_ACCESS_SCOPES.contains(&access) {
        Ok(())
    } else {
        Err(invalid_access(access))
    }
}

fn invalid_access(access: &str) -> String {
    format!(
        "Invalid access '{access}'. Must be one of: {}",
        VALID_ACCESS_SCOPES.join(", ")
    )
}

/// Resolve the access scope for a new note.
///
/// Missing or blank values fall back to [`DEFAULT_ACCESS`]; anything else
/// must be a valid scope.
pub fn resolve_access(access: Option<&str>) -> Result<&'static str, String> {
    match access.map(str::trim) {
        None | Some("") => Ok(DEFAULT_ACCESS),
        Some(ACCESS_PUBLIC) => Ok(ACCESS_PUBLIC),
        Some(ACCESS_PRIVATE) => Ok(ACCESS_PRIVATE),
        Some(other) => Err(invalid_access(other)),
    }
}

// ---------------------------------------------------------------------------
// Field validation
// ---------------------------------------------------------------------------

/// Validate the fields every note must carry at creation.
///
/// Whitespace-only values count as empty.
pub fn validate_required_fields(topic: &str, notes: &str) -> Result<(), String> {
    if topic.trim().is_empty() || notes.trim().is_empty() {
        return Err(REQUIRED_FIELDS_MESSAGE.to_string());
    }
    validate_topic(topic)?;
    validate_notes_body(notes)
}

/// Validate a topic: non-empty and within the length limit.
pub fn validate_topic(topic: &str) -> Result<(), String> {
    if topic.trim().is_empty() {
        return Err("Topic cannot be empty".to_string());
    }
    if topic.chars().count() > MAX_TOPIC_LENGTH {
        return Err(format!(
            "Topic exceeds maximum length of {MAX_TOPIC_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate a note body: non-empty and within the length limit.
pub fn validate_notes_body(notes: &str) -> Result<(), String> {
    if notes.trim().is_empty() {
        return Err("Notes cannot be empty".to_string());
    }
    if notes.chars().count() > MAX_NOTES_LENGTH {
        return Err(format!(
            "Notes exceed maximum length of {MAX_NOTES_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate an optional free-text reference field against its length limit.
pub fn validate_reference(field: &str, value: Option<&str>) -> Result<(), String> {
    match value {
        Some(v) if v.chars().count() > MAX_REFERENCE_LENGTH => Err(format!(
            "{field} exceeds maximum length of {MAX_REFERENCE_LENGTH} characters"
        )),
        _ => Ok(()),
    }
}

/// Validate an optional journey or chapter association.
pub fn validate_association_id(field: &str, id: Option<DbId>) -> Result<(), String> {
    match id {
        Some(id) if id <= 0 => Err(format!("{field} must be a positive integer")),
        _ => Ok(()),
    }
}

/// Parse a journey or chapter id sent as text.
///
/// Clients send these ids as strings taken from route parameters or form
/// inputs. Blank text means no association; anything else must be an
/// integer.
pub fn parse_association_id(field: &str, raw: &str) -> Result<Option<DbId>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<DbId>()
        .map(Some)
        .map_err(|_| format!("{field} must be a positive integer"))
}

/// Blank optional text is stored as NULL.
pub fn normalize_optional_text(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}

/// Parse a note id taken from a URL path segment.
pub fn parse_note_id(raw: &str) -> Result<DbId, String> {
    raw.trim()
        .parse::<DbId>()
        .map_err(|_| "Invalid note ID".to_string())
}

// ---------------------------------------------------------------------------
// Update patches
// ---------------------------------------------------------------------------

/// How an update treats a nullable column.
///
/// The request distinguishes an absent field (keep), an explicit `null`
/// (clear) and a value (set).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldPatch<T> {
    Keep,
    Clear,
    Set(T),
}

impl<T> FieldPatch<T> {
    /// Build a patch from the double option produced by deserialization.
    pub fn from_double_option(value: Option<Option<T>>) -> Self {
        match value {
            None => FieldPatch::Keep,
            Some(None) => FieldPatch::Clear,
            Some(Some(v)) => FieldPatch::Set(v),
        }
    }

    /// Whether the column is written at all.
    pub fn is_provided(&self) -> bool {
        !matches!(self, FieldPatch::Keep)
    }

    /// The value to write when provided; `None` for both keep and clear.
    pub fn value(&self) -> Option<&T> {
        match self {
            FieldPatch::Set(v) => Some(v),
            _ => None,
        }
    }
}

/// Patch for a nullable text column. Blank text clears the column, the
/// same way creation stores blank text as NULL.
pub fn text_patch(value: Option<Option<&str>>) -> FieldPatch<String> {
    match value {
        None => FieldPatch::Keep,
        Some(v) => match normalize_optional_text(v) {
            Some(text) => FieldPatch::Set(text),
            None => FieldPatch::Clear,
        },
    }
}

// ---------------------------------------------------------------------------
// Listing filters
// ---------------------------------------------------------------------------

/// Which of a user's own notes a listing returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteFilter {
    /// Every note the user owns.
    All,
    /// Only the user's public notes.
    PublicOnly,
    /// Notes linked to the journey, plus every public note.
    JourneyOrPublic(DbId),
}

impl NoteFilter {
    /// Filter for `GET /teachernotes?journey_id=`.
    ///
    /// No journey (or an empty one) lists everything. Any other value counts
    /// as a journey; one that is not a number, including whitespace, can
    /// never match, leaving only the public notes.
    pub fn for_listing(journey_id: Option<&str>) -> Self {
        match journey_id {
            None | Some("") => NoteFilter::All,
            Some(raw) => Self::journey_or_public(raw),
        }
    }

    /// Filter for `GET /teachernotes/recommend?journey_id=`.
    ///
    /// Without a journey only public notes are recommended.
    pub fn for_recommendation(journey_id: Option<&str>) -> Self {
        match journey_id.map(str::trim) {
            None | Some("") => NoteFilter::PublicOnly,
            Some(raw) => Self::journey_or_public(raw),
        }
    }

    fn journey_or_public(raw: &str) -> Self {
        match raw.trim().parse::<DbId>() {
            Ok(id) => NoteFilter::JourneyOrPublic(id),
            Err(_) => NoteFilter::PublicOnly,
        }
    }

    /// Whether the filter lets every owned note through.
    pub fn includes_all(&self) -> bool {
        matches!(self, NoteFilter::All)
    }

    /// Journey whose notes are included regardless of access scope.
    pub fn journey_id(&self) -> Option<DbId> {
        match self {
            NoteFilter::JourneyOrPublic(id) => Some(*id),
            _ => None,
        }
    }
}
