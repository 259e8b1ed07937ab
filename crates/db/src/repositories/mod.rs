//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod teacher_note_repo;

pub use teacher_note_repo::TeacherNoteRepo;
