use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{require_min_len, Rating, RecordId, ValidationError};
use crate::storage::Record;

labelled_enum! {
    pub enum FeedbackCategory ("feedback category") {
        Facilities => "Facilities",
        Services => "Services",
        Environment => "Environment",
        Suggestions => "Suggestions",
    }
}

impl Default for FeedbackCategory {
    fn default() -> Self {
        FeedbackCategory::Facilities
    }
}

labelled_enum! {
    pub enum FeedbackStatus ("feedback status") {
        Pending => "pending",
        InProgress => "in-progress",
        Reviewed => "reviewed",
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FeedbackItem {
    pub id: RecordId,
    pub title: String,
    pub category: FeedbackCategory,
    pub rating: Rating,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub status: FeedbackStatus,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeedbackDraft {
    pub title: String,
    pub category: FeedbackCategory,
    pub rating: Rating,
    pub comment: String,
}

impl Record for FeedbackItem {
    type Status = FeedbackStatus;
    type Draft = FeedbackDraft;

    const SUBJECT: &'static str = "Feedback";
    const ADDED: &'static str = "Feedback submitted successfully";

    fn from_draft(
        id: RecordId,
        draft: FeedbackDraft,
        now: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        require_min_len(&draft.title, "Title", 2)?;
        require_min_len(&draft.comment, "Comment", 10)?;
        Ok(FeedbackItem {
            id,
            title: draft.title,
            category: draft.category,
            rating: draft.rating,
            comment: draft.comment,
            created_at: now,
            status: FeedbackStatus::Pending,
        })
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn status(&self) -> FeedbackStatus {
        self.status
    }

    fn set_status(&mut self, status: FeedbackStatus) {
        self.status = status;
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.category.as_str(),
            self.comment.as_str(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_feedback_form() {
        let draft = FeedbackDraft {
            title: "Laundry".into(),
            comment: "Two of the dryers are out of order.".into(),
            ..Default::default()
        };
        let item = FeedbackItem::from_draft(RecordId::new(4), draft, Utc::now()).unwrap();
        assert_eq!(item.category, FeedbackCategory::Facilities);
        assert_eq!(item.rating.get(), 3);
        assert_eq!(item.status, FeedbackStatus::Pending);
    }

    #[test]
    fn short_comment_is_rejected() {
        let draft = FeedbackDraft {
            title: "Laundry".into(),
            comment: "broken".into(),
            ..Default::default()
        };
        let err = FeedbackItem::from_draft(RecordId::FIRST, draft, Utc::now()).unwrap_err();
        assert_eq!(err.to_string(), "Comment must be at least 10 characters.");
    }

    #[test]
    fn short_title_wins_over_short_comment() {
        let err = FeedbackItem::from_draft(RecordId::FIRST, FeedbackDraft::default(), Utc::now())
            .unwrap_err();
        assert_eq!(err.to_string(), "Title must be at least 2 characters.");
    }
}
