use crate::modules::reservations::core::events::RosterEvent;
use crate::modules::reservations::core::intents::RosterIntent;
use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError, OutboxRow};

/// Stream key of an event record, shared by outbox rows and watermarks.
pub fn stream_id_for(event_id: &str) -> String {
    format!("Event-{event_id}")
}

/// Translate roster intents into outbox rows and enqueue them.
/// Each row is keyed by the record revision the mutation produced.
pub async fn dispatch_intents(
    outbox: &impl DomainOutbox,
    topic: &str,
    intents: Vec<RosterIntent>,
) -> Result<(), OutboxError> {
    for intent in intents {
        let event = match intent {
            RosterIntent::SyncMembershipAdded { payload } => RosterEvent::AttendeeAdmittedV1(payload),
            RosterIntent::SyncMembershipRemoved { payload } => {
                RosterEvent::AttendeeReleasedV1(payload)
            }
        };
        let (event_id, revision) = match &event {
            RosterEvent::AttendeeAdmittedV1(e) => (e.event_id.as_str(), e.revision),
            RosterEvent::AttendeeReleasedV1(e) => (e.event_id.as_str(), e.revision),
        };
        let row = OutboxRow {
            topic: topic.to_string(),
            event_type: event.event_type().to_string(),
            event_version: 1,
            stream_id: stream_id_for(event_id),
            stream_version: revision,
            occurred_at: event.occurred_at(),
            payload: serde_json::to_value(&event)
                .map_err(|e| OutboxError::Validation(e.to_string()))?,
        };
        outbox.enqueue(row).await?;
    }
    Ok(())
}

#[cfg(test)]
mod dispatch_intents_tests {
    use super::*;
    use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
    use crate::tests::fixtures::events::attendee_admitted_v1::make_attendee_admitted_v1_event;
    use crate::tests::fixtures::events::attendee_released_v1::make_attendee_released_v1_event;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_enqueue_one_row_per_intent_keyed_by_revision() {
        let outbox = InMemoryDomainOutbox::new();
        let intents = vec![
            RosterIntent::SyncMembershipAdded {
                payload: make_attendee_admitted_v1_event(),
            },
            RosterIntent::SyncMembershipRemoved {
                payload: make_attendee_released_v1_event(),
            },
        ];

        dispatch_intents(&outbox, "event-rosters", intents)
            .await
            .expect("dispatch failed");

        let rows = outbox.drain(10).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].event_type, "AttendeeAdmitted");
        assert_eq!(rows[0].stream_id, "Event-event-fixed-0001");
        assert_eq!(rows[0].stream_version, 1);
        assert_eq!(rows[1].event_type, "AttendeeReleased");
        assert_eq!(rows[1].stream_version, 2);
        assert_eq!(rows[1].payload["type"], "AttendeeReleasedV1");
    }
}
