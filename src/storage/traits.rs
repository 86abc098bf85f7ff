use chrono::{DateTime, Utc};
use std::fmt;

use crate::types::{RecordId, ValidationError};

/// A row kept by a [`CollectionStore`](super::CollectionStore).
pub trait Record: Clone + fmt::Debug {
    type Status: Copy + Eq + fmt::Debug + fmt::Display;
    /// Form input for a new record, before it has an id or a status.
    type Draft;

    /// Noun used in toasts ("Request deleted", "Document status updated to ...").
    const SUBJECT: &'static str;
    const ADDED: &'static str;

    /// Validates the draft and builds the record with its initial status.
    fn from_draft(
        id: RecordId,
        draft: Self::Draft,
        now: DateTime<Utc>,
    ) -> Result<Self, ValidationError>;

    fn id(&self) -> RecordId;
    fn set_id(&mut self, id: RecordId);
    fn status(&self) -> Self::Status;
    fn set_status(&mut self, status: Self::Status);

    /// Text fields matched by free-text search.
    fn search_fields(&self) -> Vec<&str>;
}

/// Records that can be replaced wholesale after creation.
pub trait Editable: Record {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Case-insensitive substring match over [`Record::search_fields`].
/// An empty term matches everything.
pub fn matches_search<T: Record>(record: &T, term: &str) -> bool {
    let needle = term.to_lowercase();
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}
