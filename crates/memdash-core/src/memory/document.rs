//! The backend memory document

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Snapshot of the backend memory document.
///
/// Every section defaults to empty: the backend owns the schema, and the
/// dashboard must keep rendering when a section is missing from the payload.
/// Maps are `BTreeMap` so the render order is stable across fetches.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryDocument {
    /// Profile fields (string keys to scalar values)
    #[serde(default)]
    pub profile: BTreeMap<String, Value>,

    /// Preference fields (string keys to scalar values)
    #[serde(default)]
    pub preferences: BTreeMap<String, Value>,

    /// Free-text notes, in backend order
    #[serde(default)]
    pub notes: Vec<Note>,
}

impl MemoryDocument {
    /// True when no section has any content.
    pub fn is_empty(&self) -> bool {
        self.profile.is_empty() && self.preferences.is_empty() && self.notes.is_empty()
    }

    /// Total number of displayed items across all sections.
    pub fn item_count(&self) -> usize {
        self.profile.len() + self.preferences.len() + self.notes.len()
    }
}

/// A single free-text note.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Note {
    /// Note content
    #[serde(default)]
    pub content: String,

    /// Save timestamp as reported by the backend
    #[serde(default)]
    pub saved_at: Option<String>,

    /// Relevance score; backends that do not score notes omit it
    #[serde(default)]
    pub score: f64,
}

impl Note {
    /// Create a note with content only (used in tests and defaults).
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            saved_at: None,
            score: 0.0,
        }
    }

    /// Timestamp for display.
    ///
    /// RFC 3339 values are converted to local `YYYY-MM-DD HH:MM`; anything
    /// else the backend sent is shown verbatim.
    pub fn display_timestamp(&self) -> Option<String> {
        let raw = self.saved_at.as_deref()?;
        match DateTime::parse_from_rfc3339(raw) {
            Ok(ts) => Some(
                ts.with_timezone(&Local)
                    .format("%Y-%m-%d %H:%M")
                    .to_string(),
            ),
            Err(_) => Some(raw.to_string()),
        }
    }
}
