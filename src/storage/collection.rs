use chrono::{DateTime, Utc};

use super::error::StoreError;
use super::traits::{matches_search, Editable, Record};
use crate::notify::{Action, Notification, SharedNotifier};
use crate::types::{RecordId, ValidationError};

/// Ordered, in-memory list of records with a one-slot undo buffer for the
/// most recent removal.
pub struct CollectionStore<T: Record> {
    records: Vec<T>,
    undo: Option<T>,
    notifier: SharedNotifier,
    clock: fn() -> DateTime<Utc>,
}

impl<T: Record> CollectionStore<T> {
    pub fn new(notifier: SharedNotifier) -> Self {
        Self {
            records: Vec::new(),
            undo: None,
            notifier,
            clock: Utc::now,
        }
    }

    /// Seeds the store. Records whose id is already present are skipped.
    pub fn with_records(mut self, records: impl IntoIterator<Item = T>) -> Self {
        for record in records {
            if self.position(record.id()).is_some() {
                log::warn!(
                    "skipping seeded {} with duplicate id {}",
                    T::SUBJECT,
                    record.id()
                );
                continue;
            }
            self.records.push(record);
        }
        self
    }

    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[T] {
        &self.records
    }

    pub fn filter<'a, P>(&'a self, predicate: P) -> impl Iterator<Item = &'a T> + 'a
    where
        P: Fn(&T) -> bool + 'a,
        T: 'a,
    {
        self.records.iter().filter(move |r| predicate(r))
    }

    pub fn search(&self, term: &str) -> Vec<&T> {
        self.records
            .iter()
            .filter(|r| matches_search(*r, term))
            .collect()
    }

    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Record waiting in the undo buffer, if any.
    pub fn pending_undo(&self) -> Option<&T> {
        self.undo.as_ref()
    }

    /// `max(existing ids) + 1`, or 1 for an empty store. `None` when the
    /// highest id is already `u64::MAX`.
    pub fn next_id(&self) -> Option<RecordId> {
        match self.records.iter().map(|r| r.id()).max() {
            Some(max) => max.next(),
            None => Some(RecordId::FIRST),
        }
    }

    pub fn add(&mut self, draft: T::Draft) -> Result<T, StoreError> {
        let result = self
            .next_id()
            .ok_or(StoreError::IdsExhausted(T::SUBJECT))
            .and_then(|id| T::from_draft(id, draft, (self.clock)()).map_err(StoreError::from));
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                log::debug!("rejected new {}: {:?}", T::SUBJECT, err);
                self.notifier.notify(&Notification::error(err.to_string()));
                return Err(err);
            }
        };
        let id = record.id();
        self.records.push(record.clone());
        log::info!("added {} id={}", T::SUBJECT, id);
        self.notifier.notify(&Notification::success(T::ADDED));
        Ok(record)
    }

    /// Sets the status of one record. Unknown ids are ignored.
    pub fn update_status(&mut self, id: RecordId, status: T::Status) -> bool {
        let Some(record) = self.records.iter_mut().find(|r| r.id() == id) else {
            log::debug!("status change for unknown {} id={}", T::SUBJECT, id);
            return false;
        };
        let previous = record.status();
        record.set_status(status);
        log::info!("{} id={} status {} -> {}", T::SUBJECT, id, previous, status);
        self.notifier.notify(&Notification::success(format!(
            "{} status updated to {}",
            T::SUBJECT,
            status
        )));
        true
    }

    /// Removes a record and parks it in the undo buffer, replacing whatever
    /// was there. Unknown ids leave both the list and the buffer untouched.
    pub fn remove(&mut self, id: RecordId) -> bool {
        let Some(index) = self.position(id) else {
            log::debug!("remove for unknown {} id={}", T::SUBJECT, id);
            return false;
        };
        let removed = self.records.remove(index);
        if let Some(dropped) = self.undo.replace(removed) {
            log::debug!("undo buffer dropped {} id={}", T::SUBJECT, dropped.id());
        }
        log::info!("removed {} id={}", T::SUBJECT, id);
        self.notifier.notify(
            &Notification::info(format!("{} deleted", T::SUBJECT)).with_action(Action::Undo),
        );
        true
    }

    /// Re-appends the last removed record at the end of the list.
    ///
    /// If a record added since the removal has taken the same id, the restored
    /// record is given the next free id so ids stay unique.
    pub fn undo_last_removal(&mut self) -> bool {
        let Some(mut record) = self.undo.take() else {
            log::debug!("nothing to undo for {}", T::SUBJECT);
            return false;
        };
        if self.position(record.id()).is_some() {
            let Some(fresh) = self.next_id() else {
                log::warn!("no free id to restore {} id={}", T::SUBJECT, record.id());
                self.undo = Some(record);
                self.notifier.notify(&Notification::error(
                    StoreError::IdsExhausted(T::SUBJECT).to_string(),
                ));
                return false;
            };
            log::warn!(
                "{} id={} was reused while deleted, restoring as id={}",
                T::SUBJECT,
                record.id(),
                fresh
            );
            record.set_id(fresh);
        }
        log::info!("restored {} id={}", T::SUBJECT, record.id());
        self.records.push(record);
        self.notifier
            .notify(&Notification::success("Deletion undone"));
        true
    }

    fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }
}

impl<T: Editable> CollectionStore<T> {
    /// Replaces the record with the same id. Validation runs first, so an
    /// invalid record is rejected even when its id is unknown.
    pub fn update(&mut self, record: T) -> Result<bool, ValidationError> {
        if let Err(err) = record.validate() {
            self.notifier.notify(&Notification::error(err.to_string()));
            return Err(err);
        }
        let Some(index) = self.position(record.id()) else {
            log::debug!("update for unknown {} id={}", T::SUBJECT, record.id());
            return Ok(false);
        };
        log::info!("updated {} id={}", T::SUBJECT, record.id());
        self.records[index] = record;
        self.notifier.notify(&Notification::success(format!(
            "{} updated successfully",
            T::SUBJECT
        )));
        Ok(true)
    }
}
