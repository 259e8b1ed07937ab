//! Domain logic for teacher notes.
//!
//! Pure types, constants and validation shared by the database and API
//! crates. Nothing in here performs I/O.

pub mod error;
pub mod export;
pub mod teacher_notes;
pub mod types;
