//! Forget request wire types

use serde::{Deserialize, Serialize};

/// Memory category a forget request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForgetCategory {
    /// Profile map, addressed by key
    Profile,
    /// Preferences map, addressed by key
    Preferences,
    /// Notes list, addressed by index
    Notes,
}

impl ForgetCategory {
    /// Get display name
    pub fn name(&self) -> &str {
        match self {
            Self::Profile => "Profile",
            Self::Preferences => "Preferences",
            Self::Notes => "Notes",
        }
    }

    /// True for the map-shaped categories that address items by key.
    pub fn is_keyed(&self) -> bool {
        matches!(self, Self::Profile | Self::Preferences)
    }
}

impl std::fmt::Display for ForgetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Body of `POST /forget`.
///
/// Map categories identify the item by key, the notes list by index; the
/// unused selector is omitted from the serialized body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForgetRequest {
    /// Category holding the item
    pub category: ForgetCategory,

    /// Key of a profile/preferences entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Zero-based index into the notes list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

impl ForgetRequest {
    /// Forget a keyed entry in the profile or preferences map.
    pub fn key(category: ForgetCategory, key: impl Into<String>) -> Self {
        Self {
            category,
            key: Some(key.into()),
            index: None,
        }
    }

    /// Forget the note at `index`.
    pub fn note_index(index: usize) -> Self {
        Self {
            category: ForgetCategory::Notes,
            key: None,
            index: Some(index),
        }
    }

    /// Human-readable description of the targeted item, for confirmation
    /// prompts and success messages.
    pub fn describe(&self) -> String {
        match (&self.key, self.index) {
            (Some(key), _) => {
                format!("{} entry '{}'", self.category.name().to_lowercase(), key)
            }
            (None, Some(index)) => format!("note #{index}"),
            (None, None) => self.category.name().to_lowercase(),
        }
    }
}

/// Acknowledgement returned by `POST /forget`.
///
/// Only an optional status string is read; everything else in the body is
/// ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForgetAck {
    /// Optional status string, e.g. `"ok"`
    #[serde(default)]
    pub status: Option<String>,
}
