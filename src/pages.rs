use chrono::Utc;
use std::sync::Arc;

use crate::configuration::Configuration;
use crate::dashboard::ActivityFeed;
use crate::notify::{Broadcast, SharedNotifier};
use crate::storage::{fixtures, CollectionStore};
use crate::types::{Document, FeedbackItem, MaintenanceRequest, Student};

/// One isolated store per page, plus the dashboard's activity feed.
pub struct Pages {
    pub students: CollectionStore<Student>,
    pub maintenance: CollectionStore<MaintenanceRequest>,
    pub documents: CollectionStore<Document>,
    pub feedback: CollectionStore<FeedbackItem>,
    pub activity: Arc<ActivityFeed>,
    pub room_capacity: u32,
}

impl Pages {
    /// Every store reports to `notifier` and to the activity feed.
    pub fn new(config: &Configuration, notifier: SharedNotifier) -> Self {
        let activity = Arc::new(ActivityFeed::new(config.activity_limit));
        let fanout: SharedNotifier = Arc::new(
            Broadcast::new()
                .with(notifier)
                .with(activity.clone()),
        );

        let mut pages = Self {
            students: CollectionStore::new(fanout.clone()),
            maintenance: CollectionStore::new(fanout.clone()),
            documents: CollectionStore::new(fanout.clone()),
            feedback: CollectionStore::new(fanout),
            activity,
            room_capacity: config.room_capacity,
        };

        if config.seed {
            pages = pages.seeded();
        }
        pages
    }

    fn seeded(self) -> Self {
        let today = Utc::now().date_naive();
        let pages = Self {
            students: self.students.with_records(fixtures::students()),
            maintenance: self
                .maintenance
                .with_records(fixtures::maintenance_requests(today)),
            documents: self.documents.with_records(fixtures::documents()),
            feedback: self.feedback.with_records(fixtures::feedback()),
            ..self
        };
        log::debug!(
            "seeded students={} maintenance={} documents={} feedback={}",
            pages.students.len(),
            pages.maintenance.len(),
            pages.documents.len(),
            pages.feedback.len()
        );
        pages
    }
}
