#[macro_use]
mod labelled;

mod document;
mod feedback;
mod file_size;
mod maintenance;
mod rating;
mod record_id;
mod student;
mod validation_error;

pub use document::{Document, DocumentCategory, DocumentDraft, DocumentStatus, FileUpload};
pub use feedback::{FeedbackCategory, FeedbackDraft, FeedbackItem, FeedbackStatus};
pub use file_size::FileSize;
pub use labelled::ParseLabelError;
pub use maintenance::{MaintenanceDraft, MaintenanceRequest, MaintenanceStatus, Priority};
pub use rating::{Rating, RatingError};
pub use record_id::{RecordId, RecordIdParseError};
pub use student::{Student, StudentDraft, StudentStatus, StudyYear};
pub use validation_error::ValidationError;

pub(crate) use validation_error::{is_blank, require_min_len};
