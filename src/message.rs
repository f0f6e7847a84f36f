/*!
 * Parsed translation messages.
 *
 * A message is produced upstream by the extraction step and is read-only here.
 * Its literal text is split into `message_parts`, with one placeholder name
 * sitting between each pair of consecutive parts.
 */

use serde::{Deserialize, Serialize};

use crate::errors::MessageError;

/// Prefix of a placeholder that opens a paired inline span
pub const START_PREFIX: &str = "START_";

/// Prefix of a placeholder that closes the innermost paired inline span
pub const CLOSE_PREFIX: &str = "CLOSE_";

/// A single extracted message ready for serialization
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Current message id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Legacy message id, used when `id` is absent
    #[serde(default, alias = "messageId", skip_serializing_if = "Option::is_none")]
    pub legacy_id: Option<String>,

    /// Literal text fragments
    pub message_parts: Vec<String>,

    /// Placeholder names between consecutive parts
    #[serde(default)]
    pub placeholder_names: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Message {
    /// Create a message from its parts and placeholder names
    pub fn new<S: Into<String>>(id: S, message_parts: Vec<String>, placeholder_names: Vec<String>) -> Self {
        Self {
            id: Some(id.into()),
            legacy_id: None,
            message_parts,
            placeholder_names,
            meaning: None,
            description: None,
        }
    }

    /// Create a message that only carries a legacy id
    pub fn with_legacy_id<S: Into<String>>(legacy_id: S, message_parts: Vec<String>, placeholder_names: Vec<String>) -> Self {
        Self {
            id: None,
            legacy_id: Some(legacy_id.into()),
            message_parts,
            placeholder_names,
            meaning: None,
            description: None,
        }
    }

    /// Create a message with a single text part and no placeholders
    pub fn from_text<S: Into<String>, T: Into<String>>(id: S, text: T) -> Self {
        Self::new(id, vec![text.into()], Vec::new())
    }

    /// Set the meaning
    pub fn meaning<S: Into<String>>(mut self, meaning: S) -> Self {
        self.meaning = Some(meaning.into());
        self
    }

    /// Set the description
    pub fn description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Unit id: the primary id if present, otherwise the legacy id
    ///
    /// Empty strings count as absent.
    pub fn effective_id(&self) -> Option<&str> {
        non_empty(&self.id).or_else(|| non_empty(&self.legacy_id))
    }

    /// Description, unless missing or empty
    pub fn description_text(&self) -> Option<&str> {
        non_empty(&self.description)
    }

    /// Meaning, unless missing or empty
    pub fn meaning_text(&self) -> Option<&str> {
        non_empty(&self.meaning)
    }

    /// Whether the message carries a non-empty description or meaning
    pub fn has_notes(&self) -> bool {
        self.description_text().is_some() || self.meaning_text().is_some()
    }

    /// Check that there is exactly one placeholder between each pair of parts
    pub fn validate(&self) -> Result<(), MessageError> {
        let id = self.effective_id().ok_or(MessageError::MissingId)?;

        if self.message_parts.len() != self.placeholder_names.len() + 1 {
            return Err(MessageError::PartsMismatch {
                id: id.to_string(),
                parts: self.message_parts.len(),
                placeholders: self.placeholder_names.len(),
            });
        }

        Ok(())
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// How a placeholder is rendered, derived from its name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderKind {
    /// Opens a paired span (`START_*`)
    Start,
    /// Closes the innermost paired span (`CLOSE_*`)
    Close,
    /// Self-contained marker
    Standalone,
}

impl PlaceholderKind {
    pub fn classify(name: &str) -> Self {
        if name.starts_with(START_PREFIX) {
            Self::Start
        } else if name.starts_with(CLOSE_PREFIX) {
            Self::Close
        } else {
            Self::Standalone
        }
    }
}

/// Name of the placeholder that closes the span opened by `start_name`
///
/// Only a leading `START` is rewritten, so `START_LINK` becomes `CLOSE_LINK`
/// while any later occurrence of `START` is kept as is.
pub fn closing_name(start_name: &str) -> String {
    match start_name.strip_prefix("START") {
        Some(rest) => format!("CLOSE{}", rest),
        None => start_name.to_string(),
    }
}
