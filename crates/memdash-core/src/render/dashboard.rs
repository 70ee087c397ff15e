//! Stateless document-to-rows rendering
//!
//! Rows are plain text; the CLI console decides how to color them at print
//! time. Keeping color out of this module keeps the rows assertable.

use crate::memory::{MemoryDocument, Note};
use serde_json::Value;
use std::collections::BTreeMap;

/// Placeholder row for an empty profile or preferences section.
pub const EMPTY_SECTION_PLACEHOLDER: &str = "None";

/// Placeholder row for an empty notes section.
pub const EMPTY_NOTES_PLACEHOLDER: &str = "No notes stored.";

/// A rendered dashboard section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionView {
    /// Section title as printed
    pub title: String,
    /// Printable rows, one per line
    pub rows: Vec<String>,
}

impl SectionView {
    fn new(title: impl Into<String>, rows: Vec<String>) -> Self {
        Self {
            title: title.into(),
            rows,
        }
    }

    /// True when the section holds only its empty-state placeholder.
    pub fn is_placeholder(&self) -> bool {
        matches!(
            self.rows.as_slice(),
            [row] if row == EMPTY_SECTION_PLACEHOLDER || row == EMPTY_NOTES_PLACEHOLDER
        )
    }
}

/// Render the full document as the three dashboard sections.
pub fn render_document(document: &MemoryDocument) -> Vec<SectionView> {
    vec![
        render_map_section("Profile", &document.profile),
        render_map_section("Preferences", &document.preferences),
        render_notes_section(&document.notes),
    ]
}

/// Display form of a scalar value: strings bare, everything else in its
/// JSON syntax.
pub fn scalar_display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn render_map_section(title: &str, entries: &BTreeMap<String, Value>) -> SectionView {
    if entries.is_empty() {
        return SectionView::new(title, vec![EMPTY_SECTION_PLACEHOLDER.to_string()]);
    }

    let rows = entries
        .iter()
        .map(|(key, value)| format!("{key}: {}", scalar_display(value)))
        .collect();
    SectionView::new(title, rows)
}

fn render_notes_section(notes: &[Note]) -> SectionView {
    if notes.is_empty() {
        return SectionView::new("Notes", vec![EMPTY_NOTES_PLACEHOLDER.to_string()]);
    }

    let mut rows = Vec::with_capacity(notes.len() * 2);
    for (index, note) in notes.iter().enumerate() {
        rows.push(format!(
            "[{index}] score {} | {}",
            format_score(note.score),
            note.content
        ));
        if let Some(timestamp) = note.display_timestamp() {
            rows.push(format!("    saved {timestamp}"));
        }
    }
    SectionView::new("Notes", rows)
}

fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{}", score as i64)
    } else {
        format!("{score:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document_from(payload: serde_json::Value) -> MemoryDocument {
        serde_json::from_value(payload).unwrap()
    }

    #[test]
    fn test_empty_document_placeholders() {
        let sections = render_document(&MemoryDocument::default());

        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].title, "Profile");
        assert_eq!(sections[0].rows, vec!["None"]);
        assert_eq!(sections[1].title, "Preferences");
        assert_eq!(sections[1].rows, vec!["None"]);
        assert_eq!(sections[2].title, "Notes");
        assert_eq!(sections[2].rows, vec!["No notes stored."]);
        assert!(sections.iter().all(SectionView::is_placeholder));
    }

    #[test]
    fn test_one_row_per_map_entry() {
        let document = document_from(json!({
            "profile": { "name": "Ada", "location": "London" }
        }));

        let sections = render_document(&document);
        assert_eq!(sections[0].rows.len(), 2);
        // BTreeMap order: location before name
        assert_eq!(sections[0].rows[0], "location: London");
        assert_eq!(sections[0].rows[1], "name: Ada");
        assert!(!sections[0].is_placeholder());
    }

    #[test]
    fn test_non_string_scalars_render_as_json() {
        let document = document_from(json!({
            "preferences": { "notifications": false, "max_items": 25 }
        }));

        let sections = render_document(&document);
        assert_eq!(sections[1].rows[0], "max_items: 25");
        assert_eq!(sections[1].rows[1], "notifications: false");
    }

    #[test]
    fn test_note_rows_carry_index_and_score() {
        let document = document_from(json!({
            "notes": [
                { "content": "Likes Rust", "score": 0.87 },
                { "content": "Allergic to cats" }
            ]
        }));

        let rows = &render_document(&document)[2].rows;
        assert_eq!(rows[0], "[0] score 0.87 | Likes Rust");
        // Missing score renders as 0
        assert_eq!(rows[1], "[1] score 0 | Allergic to cats");
    }

    #[test]
    fn test_note_timestamp_detail_row() {
        let document = document_from(json!({
            "notes": [
                { "content": "with time", "saved_at": "just now" },
                { "content": "without time" }
            ]
        }));

        let rows = &render_document(&document)[2].rows;
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], "    saved just now");
        assert!(rows[2].starts_with("[1]"));
    }

    #[test]
    fn test_scalar_display() {
        assert_eq!(scalar_display(&json!("dark")), "dark");
        assert_eq!(scalar_display(&json!(42)), "42");
        assert_eq!(scalar_display(&json!(true)), "true");
        assert_eq!(scalar_display(&json!(null)), "null");
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(0.0), "0");
        assert_eq!(format_score(3.0), "3");
        assert_eq!(format_score(0.875), "0.88");
    }
}
