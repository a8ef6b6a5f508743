use crate::modules::reservations::adapters::outbound::event_records::EventRecordStore;
use crate::modules::reservations::adapters::outbound::intent_outbox::dispatch_intents;
use crate::modules::reservations::use_cases::errors::{ApplicationError, within_deadline};
use crate::modules::reservations::use_cases::release_seat::command::ReleaseSeat;
use crate::modules::reservations::use_cases::release_seat::decide::decide_released;
use crate::modules::reservations::use_cases::release_seat::decision::ReleaseOutcome;
use crate::shared::core::primitives::now_millis;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;
use std::time::Duration;

pub struct ReleaseSeatHandler<TStore, TOutbox>
where
    TStore: EventRecordStore + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    topic: String,
    store: Arc<TStore>,
    outbox: Arc<TOutbox>,
    timeout: Duration,
}

impl<TStore, TOutbox> ReleaseSeatHandler<TStore, TOutbox>
where
    TStore: EventRecordStore + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub fn new(
        topic: impl Into<String>,
        store: Arc<TStore>,
        outbox: Arc<TOutbox>,
        timeout: Duration,
    ) -> Self {
        Self {
            topic: topic.into(),
            store,
            outbox,
            timeout,
        }
    }

    pub async fn handle(&self, command: ReleaseSeat) -> Result<ReleaseOutcome, ApplicationError> {
        let removal = within_deadline(
            self.timeout,
            self.store.remove_member(&command.event_id, &command.user_id),
        )
        .await?;

        let Some(removal) = removal else {
            tracing::debug!(event_id = %command.event_id, "release for unknown event");
            return Ok(ReleaseOutcome::EventNotFound);
        };

        tracing::info!(
            event_id = %command.event_id,
            user_id = %command.user_id,
            revision = removal.record.revision,
            was_member = removal.was_member,
            "reservation released"
        );
        let intents = decide_released(&removal, &command.user_id, now_millis());
        if let Err(error) = dispatch_intents(&*self.outbox, &self.topic, intents).await {
            tracing::warn!(
                event_id = %command.event_id,
                user_id = %command.user_id,
                %error,
                "membership index sync failed"
            );
        }
        Ok(ReleaseOutcome::Released(removal.record.snapshot()))
    }
}

#[cfg(test)]
mod release_seat_handler_tests {
    use super::*;
    use crate::modules::reservations::adapters::outbound::event_records_in_memory::InMemoryEventRecordStore;
    use crate::modules::reservations::use_cases::reserve_seat::command::ReserveSeat;
    use crate::modules::reservations::use_cases::reserve_seat::handler::ReserveSeatHandler;
    use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
    use crate::tests::fixtures::records::event_record::EventRecordBuilder;
    use rstest::{fixture, rstest};

    const TOPIC: &str = "event-rosters";
    const EVENT: &str = "event-fixed-0001";
    const TIMEOUT: Duration = Duration::from_millis(500);

    type BeforeEachReturn = (Arc<InMemoryEventRecordStore>, Arc<InMemoryDomainOutbox>);

    #[fixture]
    async fn before_each() -> BeforeEachReturn {
        let store = InMemoryEventRecordStore::new();
        store
            .insert(EventRecordBuilder::new().capacity(3).roster(["a", "b"]).build())
            .await
            .expect("seed failed");
        (Arc::new(store), Arc::new(InMemoryDomainOutbox::new()))
    }

    fn attendees(outcome: &ReleaseOutcome) -> Vec<String> {
        match outcome {
            ReleaseOutcome::Released(snapshot) => snapshot.attendees.clone(),
            ReleaseOutcome::EventNotFound => panic!("expected Released"),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_remove_exactly_that_member(#[future] before_each: BeforeEachReturn) {
        let (store, outbox) = before_each.await;
        let handler = ReleaseSeatHandler::new(TOPIC, store, outbox.clone(), TIMEOUT);

        let outcome = handler.handle(ReleaseSeat::new(EVENT, "a")).await.unwrap();

        assert_eq!(attendees(&outcome), vec!["b"]);
        let rows = outbox.drain(10).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].event_type, "AttendeeReleased");
        assert_eq!(rows[0].payload["was_member"], true);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_succeed_for_a_non_member_and_leave_the_roster_unchanged(
        #[future] before_each: BeforeEachReturn,
    ) {
        let (store, outbox) = before_each.await;
        let handler = ReleaseSeatHandler::new(TOPIC, store, outbox, TIMEOUT);

        let outcome = handler.handle(ReleaseSeat::new(EVENT, "z")).await.unwrap();

        assert_eq!(attendees(&outcome), vec!["a", "b"]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_an_unknown_event(#[future] before_each: BeforeEachReturn) {
        let (store, outbox) = before_each.await;
        let handler = ReleaseSeatHandler::new(TOPIC, store, outbox, TIMEOUT);

        let outcome = handler.handle(ReleaseSeat::new("missing", "a")).await.unwrap();
        assert_eq!(outcome, ReleaseOutcome::EventNotFound);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_round_trip_reserve_release_reserve(#[future] before_each: BeforeEachReturn) {
        let (store, outbox) = before_each.await;
        let reserve = ReserveSeatHandler::new(TOPIC, store.clone(), outbox.clone(), TIMEOUT, 0);
        let release = ReleaseSeatHandler::new(TOPIC, store.clone(), outbox, TIMEOUT);
        let before = store.find(&EVENT.into()).await.unwrap().unwrap().roster.len();

        assert!(reserve.handle(ReserveSeat::new(EVENT, "c")).await.unwrap().is_admitted());
        release.handle(ReleaseSeat::new(EVENT, "c")).await.unwrap();
        assert!(reserve.handle(ReserveSeat::new(EVENT, "c")).await.unwrap().is_admitted());
        release.handle(ReleaseSeat::new(EVENT, "c")).await.unwrap();

        let after = store.find(&EVENT.into()).await.unwrap().unwrap().roster.len();
        assert_eq!(before, after);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_with_store_unavailable_when_the_store_is_offline() {
        let mut store = InMemoryEventRecordStore::new();
        store.toggle_offline();
        let handler = ReleaseSeatHandler::new(
            TOPIC,
            Arc::new(store),
            Arc::new(InMemoryDomainOutbox::new()),
            TIMEOUT,
        );

        let result = handler.handle(ReleaseSeat::new(EVENT, "a")).await;
        assert!(matches!(result, Err(ApplicationError::StoreUnavailable(_))));
    }
}
