//! Local collection caches.
//!
//! A [`CollectionCache`] mirrors the last successful list fetch of one server collection so
//! related views (detail modals, edit forms) can read records without another request. It is
//! rebuilt wholesale on every list fetch and patched point-wise after single-record operations.
//! The cached copy is advisory: after any write it is only as fresh as the last patch.
//!
//! List fetches are tagged with a [`FetchTicket`]. Only the most recently issued ticket may
//! replace the cache, so a slow response to an older fetch can never overwrite newer data.

use crate::model::{image::ImageRecord, user::UserRecord};

/// A record addressable by a stable identifier
pub trait Keyed {
    fn key(&self) -> i64;
}

impl Keyed for UserRecord {
    fn key(&self) -> i64 {
        self.id
    }
}

impl Keyed for ImageRecord {
    fn key(&self) -> i64 {
        self.id
    }
}

/// Generation number of a list fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

/// Ordered records keyed by id; at most one entry per id.
#[derive(Debug, Clone)]
pub struct CollectionCache<T> {
    records: Vec<T>,
    latest_ticket: u64,
}

impl<T> Default for CollectionCache<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            latest_ticket: 0,
        }
    }
}

impl<T: Keyed> CollectionCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard prior contents and store `records` in order.
    ///
    /// Later duplicates of an id are dropped so the one-entry-per-id invariant holds even if
    /// the server list repeats a record.
    pub fn replace_all(&mut self, records: Vec<T>) {
        let mut deduped: Vec<T> = Vec::with_capacity(records.len());
        for record in records {
            if !deduped.iter().any(|r| r.key() == record.key()) {
                deduped.push(record);
            }
        }
        self.records = deduped;
    }

    /// Replace the entry with the same id in place, or append if absent.
    pub fn upsert(&mut self, record: T) {
        match self.records.iter_mut().find(|r| r.key() == record.key()) {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }

    /// Remove the entry with the given id; no-op if absent.
    ///
    /// Returns the removed record.
    pub fn remove_by_id(&mut self, id: i64) -> Option<T> {
        let index = self.records.iter().position(|r| r.key() == id)?;
        Some(self.records.remove(index))
    }

    pub fn find_by_id(&self, id: i64) -> Option<&T> {
        self.records.iter().find(|r| r.key() == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Issue a ticket for a new list fetch, superseding every earlier ticket.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest_ticket += 1;
        FetchTicket(self.latest_ticket)
    }

    /// Returns true if `ticket` is the most recently issued one
    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.latest_ticket
    }

    /// Apply a list fetch result only if no newer fetch has been issued since.
    ///
    /// Returns whether the records were applied.
    pub fn replace_all_if_current(&mut self, ticket: FetchTicket, records: Vec<T>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }

        self.replace_all(records);
        true
    }
}

impl<'a, T> IntoIterator for &'a CollectionCache<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
