/*!
 * Error types for the xliffgen application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors raised by the XML tag writer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum XmlError {
    /// A closing tag did not match the innermost open element
    #[error("Unexpected closing tag: \"{found}\", expected: \"{}\"", .expected.as_deref().unwrap_or("<none>"))]
    UnexpectedClosingTag {
        /// Name passed to the closing call
        found: String,
        /// Innermost open element, if any
        expected: Option<String>,
    },

    /// The document was serialized while elements were still open
    #[error("Unclosed elements at end of document: {}", .0.join(", "))]
    UnclosedTags(Vec<String>),
}

/// Errors that can occur while rendering a translation file
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SerializeError {
    /// Neither the primary nor the legacy id is set
    #[error("Message at index {index} has no id or legacy id")]
    MissingId {
        /// Position of the message in the input
        index: usize,
    },

    /// A message has fewer placeholder names than its parts require
    #[error("Message \"{id}\" has no placeholder name at position {position}")]
    MissingPlaceholder {
        /// Unit id of the message
        id: String,
        /// 1-based placeholder position
        position: usize,
    },

    /// Malformed tag structure reported by the writer
    #[error("XML error: {0}")]
    Xml(#[from] XmlError),
}

/// Errors found when checking a message loaded from input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MessageError {
    /// Part and placeholder counts disagree
    #[error("Message \"{id}\" has {parts} parts but {placeholders} placeholders (expected {})", .parts.saturating_sub(1))]
    PartsMismatch {
        id: String,
        parts: usize,
        placeholders: usize,
    },

    /// Neither the primary nor the legacy id is set
    #[error("Message has no id or legacy id")]
    MissingId,
}
