//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers validate input, delegate to the corresponding repository in
//! `teachnotes_db` and map errors via [`AppError`](crate::error::AppError).

pub mod teacher_notes;
