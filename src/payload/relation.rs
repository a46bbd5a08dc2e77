//! Relation payloads: "subject affects object".

use super::writer::XmlWriter;
use super::PayloadError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Namespace of the `relations_common` schema.
pub const RELATION_NAMESPACE: &str = "http://collectionspace.org/services/relation";

const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Relationship type written into every relation payload.
pub const AFFECTS: &str = "affects";

/// The two records a relation connects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationPayload {
    pub object_csid: String,
    pub object_document_type: String,
    pub subject_csid: String,
    pub subject_document_type: String,
}

impl RelationPayload {
    /// Creates a payload stating that the subject affects the object.
    ///
    /// # Arguments
    ///
    /// * `object_csid` - CSID of the affected record
    /// * `object_document_type` - Document type of the affected record
    /// * `subject_csid` - CSID of the record doing the affecting
    /// * `subject_document_type` - Document type of that record
    pub fn new(
        object_csid: impl Into<String>,
        object_document_type: impl Into<String>,
        subject_csid: impl Into<String>,
        subject_document_type: impl Into<String>,
    ) -> Self {
        Self {
            object_csid: object_csid.into(),
            object_document_type: object_document_type.into(),
            subject_csid: subject_csid.into(),
            subject_document_type: subject_document_type.into(),
        }
    }

    /// Reads the four fields from a form-style map keyed by
    /// `objectCsid`, `objectDocumentType`, `subjectCsid` and
    /// `subjectDocumentType`.
    pub fn from_fields(fields: &HashMap<String, String>) -> Result<Self, PayloadError> {
        let field = |name: &str| {
            fields
                .get(name)
                .cloned()
                .ok_or_else(|| PayloadError::MissingField(name.to_string()))
        };

        Ok(Self {
            object_csid: field("objectCsid")?,
            object_document_type: field("objectDocumentType")?,
            subject_csid: field("subjectCsid")?,
            subject_document_type: field("subjectDocumentType")?,
        })
    }

    /// Renders the relation document.
    ///
    /// # Examples
    ///
    /// ```
    /// use cspace_client::payload::RelationPayload;
    ///
    /// let xml = RelationPayload::new("A", "obj", "B", "subj").to_xml();
    /// assert!(xml.contains("<relationshipType>affects</relationshipType>"));
    /// assert!(xml.contains("<objectCsid>A</objectCsid>"));
    /// assert!(xml.contains("<subjectDocumentType>subj</subjectDocumentType>"));
    /// ```
    pub fn to_xml(&self) -> String {
        let mut writer = XmlWriter::new();
        writer
            .start("document", &[("name", "relations")])
            .start(
                "ns2:relations_common",
                &[("xmlns:ns2", RELATION_NAMESPACE), ("xmlns:xsi", XSI_NAMESPACE)],
            )
            .text_element("relationshipType", AFFECTS)
            .text_element("objectCsid", &self.object_csid)
            .text_element("objectDocumentType", &self.object_document_type)
            .text_element("subjectCsid", &self.subject_csid)
            .text_element("subjectDocumentType", &self.subject_document_type);
        writer.finish()
    }
}

/// Builds the relation document straight from a form-style map.
pub fn relations_payload(fields: &HashMap<String, String>) -> Result<String, PayloadError> {
    RelationPayload::from_fields(fields).map(|payload| payload.to_xml())
}
