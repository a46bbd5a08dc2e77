//! XML payloads sent to the services layer.
//!
//! Payloads are assembled element by element through [`XmlWriter`], which
//! escapes all text and attribute content, so caller-supplied values can
//! never change the document structure.

pub mod relation;
pub mod writer;

pub use relation::{relations_payload, RelationPayload};
pub use writer::{escape_xml, XmlWriter};

use std::fmt;

/// Errors that can occur while building a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    /// A required input field was not supplied.
    MissingField(String),
}

impl fmt::Display for PayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadError::MissingField(field) => write!(f, "Missing payload field: {}", field),
        }
    }
}

impl std::error::Error for PayloadError {}
