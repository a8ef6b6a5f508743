use crate::modules::reservations::core::record::EventRecord;
use crate::shared::core::primitives::{EventId, UserId};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventRecordStoreError {
    #[error("event {0} already exists")]
    AlreadyExists(String),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Result of the store's atomic conditional update.
///
/// `NotApplied` deliberately carries no reason: the predicate failed, or the
/// event does not exist. Any classification has to come from a later read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConditionalUpdate {
    Applied(EventRecord),
    NotApplied,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRemoval {
    pub record: EventRecord,
    pub was_member: bool,
}

/// Durable storage of event capacity and roster.
///
/// Implementations must execute `admit_if_open` as one indivisible operation
/// (a single-document update with a filter, an `UPDATE ... WHERE` carrying the
/// predicate, or a transaction). Never as a read followed by a write.
#[async_trait]
pub trait EventRecordStore: Send + Sync {
    async fn insert(&self, record: EventRecord) -> Result<(), EventRecordStoreError>;

    async fn find(&self, event_id: &EventId) -> Result<Option<EventRecord>, EventRecordStoreError>;

    /// Adds `user_id` to the roster iff the user is absent and a seat is free.
    async fn admit_if_open(
        &self,
        event_id: &EventId,
        user_id: &UserId,
    ) -> Result<ConditionalUpdate, EventRecordStoreError>;

    /// Unconditionally removes `user_id`. `None` when the event does not exist.
    async fn remove_member(
        &self,
        event_id: &EventId,
        user_id: &UserId,
    ) -> Result<Option<MemberRemoval>, EventRecordStoreError>;

    /// Deletes the event together with its roster. Returns false when absent.
    async fn delete(&self, event_id: &EventId) -> Result<bool, EventRecordStoreError>;
}
