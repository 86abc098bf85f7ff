use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use super::{require_min_len, RecordId, ValidationError};
use crate::storage::Record;

labelled_enum! {
    pub enum Priority ("priority") {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

labelled_enum! {
    pub enum MaintenanceStatus ("maintenance status") {
        Pending => "pending",
        InProgress => "in-progress",
        Completed => "completed",
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MaintenanceRequest {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub location: String,
    pub priority: Priority,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub status: MaintenanceStatus,
}

impl MaintenanceRequest {
    pub fn is_open(&self) -> bool {
        self.status != MaintenanceStatus::Completed
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MaintenanceDraft {
    pub title: String,
    pub description: String,
    pub location: String,
    pub priority: Priority,
    /// Scheduled date; today when not given.
    pub date: Option<NaiveDate>,
}

impl Record for MaintenanceRequest {
    type Status = MaintenanceStatus;
    type Draft = MaintenanceDraft;

    const SUBJECT: &'static str = "Request";
    const ADDED: &'static str = "Maintenance request submitted successfully";

    fn from_draft(
        id: RecordId,
        draft: MaintenanceDraft,
        now: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        require_min_len(&draft.title, "Title", 2)?;
        require_min_len(&draft.description, "Description", 10)?;
        require_min_len(&draft.location, "Location", 2)?;
        Ok(MaintenanceRequest {
            id,
            title: draft.title,
            description: draft.description,
            location: draft.location,
            priority: draft.priority,
            date: draft.date.unwrap_or_else(|| now.date_naive()),
            created_at: now,
            status: MaintenanceStatus::Pending,
        })
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn status(&self) -> MaintenanceStatus {
        self.status
    }

    fn set_status(&mut self, status: MaintenanceStatus) {
        self.status = status;
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.description.as_str(),
            self.location.as_str(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 9, 2, 14, 30, 0).unwrap()
    }

    fn draft() -> MaintenanceDraft {
        MaintenanceDraft {
            title: "Window latch".into(),
            description: "The window latch in D-404 is broken.".into(),
            location: "Building D, Room 404".into(),
            ..Default::default()
        }
    }

    #[test]
    fn new_request_is_pending_medium_and_dated_today() {
        let req = MaintenanceRequest::from_draft(RecordId::new(4), draft(), now()).unwrap();
        assert_eq!(req.status, MaintenanceStatus::Pending);
        assert_eq!(req.priority, Priority::Medium);
        assert_eq!(req.date, NaiveDate::from_ymd_opt(2024, 9, 2).unwrap());
        assert_eq!(req.created_at, now());
        assert!(req.is_open());
    }

    #[test]
    fn explicit_date_is_kept() {
        let mut d = draft();
        d.date = NaiveDate::from_ymd_opt(2024, 10, 1);
        let req = MaintenanceRequest::from_draft(RecordId::FIRST, d, now()).unwrap();
        assert_eq!(req.date, NaiveDate::from_ymd_opt(2024, 10, 1).unwrap());
    }

    #[test]
    fn fields_are_checked_in_form_order() {
        let err =
            MaintenanceRequest::from_draft(RecordId::FIRST, MaintenanceDraft::default(), now())
                .unwrap_err();
        assert_eq!(err.to_string(), "Title must be at least 2 characters.");

        let mut d = draft();
        d.description = "leaky".into();
        d.location = "".into();
        let err = MaintenanceRequest::from_draft(RecordId::FIRST, d, now()).unwrap_err();
        assert_eq!(err.to_string(), "Description must be at least 10 characters.");

        let mut d = draft();
        d.location = "A".into();
        let err = MaintenanceRequest::from_draft(RecordId::FIRST, d, now()).unwrap_err();
        assert_eq!(err.to_string(), "Location must be at least 2 characters.");
    }

    #[test]
    fn status_labels_use_kebab_case() {
        assert_eq!(MaintenanceStatus::InProgress.to_string(), "in-progress");
        assert_eq!(
            "In-Progress".parse::<MaintenanceStatus>().unwrap(),
            MaintenanceStatus::InProgress
        );
    }
}
