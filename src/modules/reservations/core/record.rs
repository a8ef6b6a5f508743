use crate::shared::core::primitives::{EventId, UserId};
use serde::{Deserialize, Serialize};

/// Authoritative per-event record: a fixed capacity and the roster of
/// admitted users.
///
/// Invariants: `roster.len() <= capacity` and every user appears at most once.
/// Only the event record store mutates a record, and only through
/// [`EventRecord::admit`] and [`EventRecord::release`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    pub event_id: EventId,
    pub capacity: u32,
    pub roster: Vec<UserId>,
    pub revision: i64,
    pub created_at: i64,
}

impl EventRecord {
    pub fn new(event_id: EventId, capacity: u32, created_at: i64) -> Self {
        Self {
            event_id,
            capacity,
            roster: Vec::new(),
            revision: 0,
            created_at,
        }
    }

    pub fn is_member(&self, user_id: &UserId) -> bool {
        self.roster.contains(user_id)
    }

    pub fn is_full(&self) -> bool {
        self.roster.len() >= self.capacity as usize
    }

    /// Admission predicate: the user is not on the roster and a seat is free.
    pub fn admits(&self, user_id: &UserId) -> bool {
        !self.is_member(user_id) && !self.is_full()
    }

    /// Applies the admission if the predicate holds. Returns whether the
    /// record changed. Callers must hold exclusive access for the whole call.
    pub fn admit(&mut self, user_id: &UserId) -> bool {
        if !self.admits(user_id) {
            return false;
        }
        self.roster.push(user_id.clone());
        self.revision += 1;
        true
    }

    /// Unconditional removal. Bumps the revision even when the user was absent.
    pub fn release(&mut self, user_id: &UserId) -> bool {
        let before = self.roster.len();
        self.roster.retain(|member| member != user_id);
        self.revision += 1;
        self.roster.len() != before
    }

    pub fn snapshot(&self) -> RosterSnapshot {
        RosterSnapshot::from(self)
    }
}

/// Read-only view of an event record handed back to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSnapshot {
    pub event_id: String,
    pub capacity: u32,
    pub attendees: Vec<String>,
    pub seats_taken: u32,
    pub seats_left: u32,
    pub revision: i64,
}

impl From<&EventRecord> for RosterSnapshot {
    fn from(record: &EventRecord) -> Self {
        let seats_taken = record.roster.len() as u32;
        Self {
            event_id: record.event_id.to_string(),
            capacity: record.capacity,
            attendees: record.roster.iter().map(ToString::to_string).collect(),
            seats_taken,
            seats_left: record.capacity.saturating_sub(seats_taken),
            revision: record.revision,
        }
    }
}
