use crate::modules::reservations::core::record::EventRecord;
use crate::shared::core::primitives::{EventId, UserId};

pub struct EventRecordBuilder {
    inner: EventRecord,
}

impl EventRecordBuilder {
    pub fn new() -> Self {
        Self {
            inner: EventRecord::new(EventId::from("event-fixed-0001"), 1, 1_700_000_000_000),
        }
    }

    pub fn event_id(mut self, v: impl Into<EventId>) -> Self {
        self.inner.event_id = v.into();
        self
    }

    pub fn capacity(mut self, v: u32) -> Self {
        self.inner.capacity = v;
        self
    }

    /// Seeds the roster as if each user had been admitted in order, so the
    /// revision matches the number of admissions.
    pub fn roster<'a>(mut self, users: impl IntoIterator<Item = &'a str>) -> Self {
        self.inner.roster = users.into_iter().map(UserId::from).collect();
        self.inner.revision = self.inner.roster.len() as i64;
        self
    }

    pub fn build(self) -> EventRecord {
        self.inner
    }
}
