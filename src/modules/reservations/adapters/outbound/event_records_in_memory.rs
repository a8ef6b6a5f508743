use crate::modules::reservations::adapters::outbound::event_records::{
    ConditionalUpdate, EventRecordStore, EventRecordStoreError, MemberRemoval,
};
use crate::modules::reservations::core::record::EventRecord;
use crate::shared::core::primitives::{EventId, UserId};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};

// A slot is emptied when its event is deleted, so an operation that grabbed
// the slot before the delete observes the deletion instead of a detached record.
type Slot = Arc<Mutex<Option<EventRecord>>>;

/// In-memory event record store.
///
/// Each record sits behind its own mutex, which is the serialisation point for
/// the conditional update. Operations on different events never contend.
#[derive(Default)]
pub struct InMemoryEventRecordStore {
    records: RwLock<HashMap<EventId, Slot>>,
    is_offline: bool,
    delayed_responses: AtomicU32,
    response_delay_ms: AtomicU64,
    calls_before_failure: AtomicU32,
    failing_calls: AtomicU32,
}

impl InMemoryEventRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Delays the acknowledgement of the next `times` mutations by `delay_ms`.
    /// The mutation itself is applied before the delay starts.
    pub fn delay_next_responses(&self, times: u32, delay_ms: u64) {
        self.response_delay_ms.store(delay_ms, Ordering::SeqCst);
        self.delayed_responses.store(times, Ordering::SeqCst);
    }

    /// Lets `skip` calls through, then fails the following `times` calls as
    /// if the backend were unreachable.
    pub fn fail_calls_after(&self, skip: u32, times: u32) {
        self.calls_before_failure.store(skip, Ordering::SeqCst);
        self.failing_calls.store(times, Ordering::SeqCst);
    }

    fn take_injected_failure(&self) -> bool {
        if self.failing_calls.load(Ordering::SeqCst) == 0 {
            return false;
        }
        let skipped = self
            .calls_before_failure
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        !skipped
            && self
                .failing_calls
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok()
    }

    fn ensure_online(&self) -> Result<(), EventRecordStoreError> {
        if self.is_offline || self.take_injected_failure() {
            return Err(EventRecordStoreError::Backend("Event record store offline".into()));
        }
        Ok(())
    }

    async fn slot(&self, event_id: &EventId) -> Option<Slot> {
        self.records.read().await.get(event_id).cloned()
    }

    async fn acknowledge(&self) {
        let delayed = self
            .delayed_responses
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if delayed {
            let ms = self.response_delay_ms.load(Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }
}

#[async_trait::async_trait]
impl EventRecordStore for InMemoryEventRecordStore {
    async fn insert(&self, record: EventRecord) -> Result<(), EventRecordStoreError> {
        self.ensure_online()?;
        let mut guard = self.records.write().await;
        if guard.contains_key(&record.event_id) {
            return Err(EventRecordStoreError::AlreadyExists(record.event_id.to_string()));
        }
        guard.insert(record.event_id.clone(), Arc::new(Mutex::new(Some(record))));
        Ok(())
    }

    async fn find(&self, event_id: &EventId) -> Result<Option<EventRecord>, EventRecordStoreError> {
        self.ensure_online()?;
        let Some(slot) = self.slot(event_id).await else {
            return Ok(None);
        };
        let record = slot.lock().await.clone();
        Ok(record)
    }

    async fn admit_if_open(
        &self,
        event_id: &EventId,
        user_id: &UserId,
    ) -> Result<ConditionalUpdate, EventRecordStoreError> {
        self.ensure_online()?;
        let Some(slot) = self.slot(event_id).await else {
            return Ok(ConditionalUpdate::NotApplied);
        };
        let outcome = {
            let mut guard = slot.lock().await;
            match guard.as_mut() {
                Some(record) => {
                    if record.admit(user_id) {
                        ConditionalUpdate::Applied(record.clone())
                    } else {
                        ConditionalUpdate::NotApplied
                    }
                }
                None => ConditionalUpdate::NotApplied,
            }
        };
        if matches!(outcome, ConditionalUpdate::Applied(_)) {
            self.acknowledge().await;
        }
        Ok(outcome)
    }

    async fn remove_member(
        &self,
        event_id: &EventId,
        user_id: &UserId,
    ) -> Result<Option<MemberRemoval>, EventRecordStoreError> {
        self.ensure_online()?;
        let Some(slot) = self.slot(event_id).await else {
            return Ok(None);
        };
        let removal = {
            let mut guard = slot.lock().await;
            guard.as_mut().map(|record| {
                let was_member = record.release(user_id);
                MemberRemoval {
                    record: record.clone(),
                    was_member,
                }
            })
        };
        if removal.is_some() {
            self.acknowledge().await;
        }
        Ok(removal)
    }

    async fn delete(&self, event_id: &EventId) -> Result<bool, EventRecordStoreError> {
        self.ensure_online()?;
        let removed = self.records.write().await.remove(event_id);
        match removed {
            Some(slot) => {
                slot.lock().await.take();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
