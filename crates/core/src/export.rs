//! Markdown export of a single note.

use crate::types::{DbId, Timestamp};

/// Fields of a note that appear in an exported document.
#[derive(Debug, Clone, Copy)]
pub struct NoteDocument<'a> {
    pub id: DbId,
    pub topic: &'a str,
    pub notes: &'a str,
    pub reference_books: Option<&'a str>,
    pub youtube_link: Option<&'a str>,
    pub access: &'a str,
    pub created_at: Timestamp,
}

/// MIME type of the exported document.
pub const EXPORT_CONTENT_TYPE: &str = "text/markdown; charset=utf-8";

/// Longest slug taken from a topic before the `.md` suffix.
const MAX_SLUG_LENGTH: usize = 80;

/// Render a note as a standalone Markdown document.
pub fn render_markdown(doc: &NoteDocument<'_>) -> String {
    let mut out = String::with_capacity(doc.notes.len() + 256);

    out.push_str(&format!("# {}\n\n", doc.topic.trim()));
    out.push_str(doc.notes.trim_end());
    out.push('\n');

    if let Some(books) = doc.reference_books.filter(|b| !b.trim().is_empty()) {
        out.push_str(&section("References", books.trim_end()));
    }

    if let Some(link) = doc.youtube_link.filter(|l| !l.trim().is_empty()) {
        out.push_str(&section("Video", &format!("<{}>", link.trim())));
    }

    out.push_str(&format!(
        "\n---\n_{} note, created {}_\n",
        doc.access,
        doc.created_at.format("%Y-%m-%d")
    ));

    out
}

fn section(heading: &str, body: &str) -> String {
    format!("\n## {heading}\n\n{body}\n")
}

/// File name offered for download: the topic reduced to lowercase ASCII
/// alphanumerics separated by single dashes.
pub fn export_filename(id: DbId, topic: &str) -> String {
    let mut slug = String::new();
    for ch in topic.chars() {
        if ch.is_ascii_alphanumeric() {
            if slug.len() >= MAX_SLUG_LENGTH {
                break;
            }
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');

    if slug.is_empty() {
        format!("note-{id}.md")
    } else {
        format!("{slug}.md")
    }
}
