use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeSet, VecDeque};
use std::sync::Mutex;

use crate::notify::{Notification, Notifier, Severity};
use crate::pages::Pages;
use crate::types::{DocumentStatus, Priority, StudentStatus};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub title: String,
    pub at: DateTime<Utc>,
}

/// Keeps the most recent successful or informational notifications.
pub struct ActivityFeed {
    entries: Mutex<VecDeque<Activity>>,
    capacity: usize,
    clock: fn() -> DateTime<Utc>,
}

impl ActivityFeed {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
            clock: Utc::now,
        }
    }

    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    /// Newest first.
    pub fn recent(&self) -> Vec<Activity> {
        self.entries
            .lock()
            .map(|entries| entries.iter().rev().cloned().collect())
            .unwrap_or_default()
    }
}

impl Notifier for ActivityFeed {
    fn notify(&self, notification: &Notification) {
        if notification.severity == Severity::Error || self.capacity == 0 {
            return;
        }
        let Ok(mut entries) = self.entries.lock() else {
            return;
        };
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(Activity {
            title: notification.message.clone(),
            at: (self.clock)(),
        });
    }
}

/// "just now", "5 minutes ago", "1 hour ago", "3 days ago".
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    let (amount, unit) = if elapsed.num_days() > 0 {
        (elapsed.num_days(), "day")
    } else if elapsed.num_hours() > 0 {
        (elapsed.num_hours(), "hour")
    } else if elapsed.num_minutes() > 0 {
        (elapsed.num_minutes(), "minute")
    } else {
        return "just now".to_string();
    };
    let plural = if amount == 1 { "" } else { "s" };
    format!("{amount} {unit}{plural} ago")
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total_students: usize,
    pub active_students: usize,
    pub occupancy_rate: u8,
    pub rooms_available: u8,
    pub open_maintenance_requests: usize,
    /// Open requests with high priority.
    pub high_priority_requests: usize,
    pub pending_documents: usize,
    pub feedback_responses: usize,
    pub average_rating: Option<f64>,
    pub recent_activity: Vec<Activity>,
}

impl DashboardSummary {
    pub fn collect(pages: &Pages) -> Self {
        let students = pages.students.list();
        let active = students
            .iter()
            .filter(|s| s.status == StudentStatus::Active);
        let occupied_rooms: BTreeSet<&str> =
            active.clone().map(|s| s.room_number.as_str()).collect();
        let occupancy = occupancy_rate(occupied_rooms.len(), pages.room_capacity);

        let feedback = pages.feedback.list();
        let average_rating = if feedback.is_empty() {
            None
        } else {
            let total: u32 = feedback.iter().map(|f| u32::from(f.rating.get())).sum();
            let mean = f64::from(total) / feedback.len() as f64;
            Some((mean * 10.0).round() / 10.0)
        };

        Self {
            total_students: students.len(),
            active_students: active.count(),
            occupancy_rate: occupancy,
            rooms_available: 100 - occupancy,
            open_maintenance_requests: pages
                .maintenance
                .filter(|r| r.is_open())
                .count(),
            high_priority_requests: pages
                .maintenance
                .filter(|r| r.is_open() && r.priority == Priority::High)
                .count(),
            pending_documents: pages
                .documents
                .filter(|d| d.status == DocumentStatus::Pending)
                .count(),
            feedback_responses: feedback.len(),
            average_rating,
            recent_activity: pages.activity.recent(),
        }
    }
}

/// Whole percentage of rooms in use, clamped to 100.
pub fn occupancy_rate(occupied: usize, capacity: u32) -> u8 {
    if capacity == 0 {
        return 0;
    }
    let percent = (occupied as f64 / f64::from(capacity) * 100.0).round();
    percent.min(100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn feed_keeps_newest_entries_first() {
        let feed = ActivityFeed::new(2).with_clock(noon);
        feed.notify(&Notification::success("one"));
        feed.notify(&Notification::info("two"));
        feed.notify(&Notification::success("three"));

        let titles: Vec<String> = feed.recent().into_iter().map(|a| a.title).collect();
        assert_eq!(titles, vec!["three".to_string(), "two".to_string()]);
        assert!(feed.recent().iter().all(|a| a.at == noon()));
    }

    #[test]
    fn feed_ignores_errors() {
        let feed = ActivityFeed::new(4);
        feed.notify(&Notification::error("Please fill in all required fields"));
        assert!(feed.recent().is_empty());
    }

    #[test]
    fn zero_capacity_feed_stays_empty() {
        let feed = ActivityFeed::new(0);
        feed.notify(&Notification::success("one"));
        assert!(feed.recent().is_empty());
    }

    #[test]
    fn relative_time_picks_largest_unit() {
        let now = noon();
        assert_eq!(relative_time(now, now), "just now");
        assert_eq!(relative_time(now - chrono::Duration::seconds(59), now), "just now");
        assert_eq!(relative_time(now - chrono::Duration::minutes(1), now), "1 minute ago");
        assert_eq!(relative_time(now - chrono::Duration::minutes(10), now), "10 minutes ago");
        assert_eq!(relative_time(now - chrono::Duration::hours(3), now), "3 hours ago");
        assert_eq!(relative_time(now - chrono::Duration::days(2), now), "2 days ago");
    }

    #[test]
    fn occupancy_is_rounded_and_clamped() {
        assert_eq!(occupancy_rate(0, 0), 0);
        assert_eq!(occupancy_rate(1, 3), 33);
        assert_eq!(occupancy_rate(2, 3), 67);
        assert_eq!(occupancy_rate(10, 4), 100);
    }
}
