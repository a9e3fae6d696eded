//! Public types for the events API
use serde::Deserialize;

/// A comment document created in the data store, forwarded by the
/// trigger infrastructure. `documentId` is the generated identifier
/// of the created document and doubles as the dedup key.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentCreatedEvent {
    pub document_id: String,
    pub post_id: String,
    pub author_id: String,
    pub body: String,
}
