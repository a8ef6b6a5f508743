use crate::modules::reservations::adapters::outbound::event_records::EventRecordStore;
use crate::modules::reservations::core::record::{EventRecord, RosterSnapshot};
use crate::modules::reservations::use_cases::errors::{ApplicationError, within_deadline};
use crate::modules::reservations::use_cases::manage_events::command::{CreateEvent, DeleteEvent};
use crate::shared::core::primitives::{EventId, now_millis};
use std::sync::Arc;
use std::time::Duration;

/// The narrow seam the event-metadata layer uses: it creates an event with a
/// capacity, reads the authoritative roster and deletes the event. It never
/// touches the roster itself.
pub struct ManageEventsHandler<TStore>
where
    TStore: EventRecordStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
    timeout: Duration,
}

impl<TStore> ManageEventsHandler<TStore>
where
    TStore: EventRecordStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>, timeout: Duration) -> Self {
        Self { store, timeout }
    }

    pub async fn create(&self, command: CreateEvent) -> Result<EventId, ApplicationError> {
        if command.capacity == 0 {
            return Err(ApplicationError::InvalidCapacity);
        }
        let event_id = EventId::generate();
        let record = EventRecord::new(event_id.clone(), command.capacity, now_millis());
        within_deadline(self.timeout, self.store.insert(record)).await?;
        tracing::info!(event_id = %event_id, capacity = command.capacity, "event created");
        Ok(event_id)
    }

    pub async fn roster(&self, event_id: &EventId) -> Result<Option<RosterSnapshot>, ApplicationError> {
        let record = within_deadline(self.timeout, self.store.find(event_id)).await?;
        Ok(record.as_ref().map(RosterSnapshot::from))
    }

    pub async fn delete(&self, command: DeleteEvent) -> Result<bool, ApplicationError> {
        let deleted = within_deadline(self.timeout, self.store.delete(&command.event_id)).await?;
        if deleted {
            tracing::info!(event_id = %command.event_id, "event deleted");
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod manage_events_handler_tests {
    use super::*;
    use crate::modules::reservations::adapters::outbound::event_records_in_memory::InMemoryEventRecordStore;
    use rstest::{fixture, rstest};

    #[fixture]
    fn handler() -> ManageEventsHandler<InMemoryEventRecordStore> {
        ManageEventsHandler::new(
            Arc::new(InMemoryEventRecordStore::new()),
            Duration::from_millis(500),
        )
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_create_an_event_with_an_empty_roster(
        handler: ManageEventsHandler<InMemoryEventRecordStore>,
    ) {
        let event_id = handler.create(CreateEvent { capacity: 4 }).await.unwrap();

        let snapshot = handler.roster(&event_id).await.unwrap().unwrap();
        assert_eq!(snapshot.capacity, 4);
        assert!(snapshot.attendees.is_empty());
        assert_eq!(snapshot.seats_left, 4);
        assert_eq!(snapshot.revision, 0);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_a_zero_capacity(handler: ManageEventsHandler<InMemoryEventRecordStore>) {
        let result = handler.create(CreateEvent { capacity: 0 }).await;
        assert!(matches!(result, Err(ApplicationError::InvalidCapacity)));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_delete_an_event_once(handler: ManageEventsHandler<InMemoryEventRecordStore>) {
        let event_id = handler.create(CreateEvent { capacity: 1 }).await.unwrap();

        assert!(handler.delete(DeleteEvent::new(event_id.clone())).await.unwrap());
        assert!(!handler.delete(DeleteEvent::new(event_id.clone())).await.unwrap());
        assert!(handler.roster(&event_id).await.unwrap().is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_none_for_an_unknown_event(
        handler: ManageEventsHandler<InMemoryEventRecordStore>,
    ) {
        let roster = handler.roster(&EventId::from("missing")).await.unwrap();
        assert!(roster.is_none());
    }
}
