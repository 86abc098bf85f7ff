use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{require_min_len, FileSize, RecordId, ValidationError};
use crate::storage::Record;

labelled_enum! {
    pub enum DocumentCategory ("document category") {
        Contracts => "Contracts",
        Insurance => "Insurance",
        Medical => "Medical",
        Financial => "Financial",
        Other => "Other",
    }
}

impl Default for DocumentCategory {
    fn default() -> Self {
        DocumentCategory::Contracts
    }
}

labelled_enum! {
    pub enum DocumentStatus ("document status") {
        Pending => "pending",
        Approved => "approved",
        Rejected => "rejected",
    }
}

/// Metadata of the file picked for upload. The content itself is never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileUpload {
    pub name: String,
    pub size: FileSize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Document {
    pub id: RecordId,
    pub title: String,
    pub category: DocumentCategory,
    pub description: Option<String>,
    pub file_name: String,
    pub file_size: FileSize,
    pub uploaded_at: DateTime<Utc>,
    pub status: DocumentStatus,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentDraft {
    pub title: String,
    pub category: DocumentCategory,
    pub description: Option<String>,
    pub file: Option<FileUpload>,
}

impl Record for Document {
    type Status = DocumentStatus;
    type Draft = DocumentDraft;

    const SUBJECT: &'static str = "Document";
    const ADDED: &'static str = "Document uploaded successfully";

    fn from_draft(
        id: RecordId,
        draft: DocumentDraft,
        now: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        require_min_len(&draft.title, "Title", 2)?;
        let file = draft.file.ok_or(ValidationError::MissingFile)?;
        Ok(Document {
            id,
            title: draft.title,
            category: draft.category,
            description: draft.description.filter(|d| !d.trim().is_empty()),
            file_name: file.name,
            file_size: file.size,
            uploaded_at: now,
            status: DocumentStatus::Pending,
        })
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn status(&self) -> DocumentStatus {
        self.status
    }

    fn set_status(&mut self, status: DocumentStatus) {
        self.status = status;
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.title.as_str(),
            self.category.as_str(),
            self.file_name.as_str(),
        ];
        if let Some(description) = &self.description {
            fields.push(description);
        }
        fields
    }
}
