use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::reservations::core::record::RosterSnapshot;
use crate::modules::reservations::use_cases::manage_events::command::CreateEvent;
use crate::shared::core::primitives::EventId;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlRosterSnapshot {
    pub event_id: ID,
    pub capacity: u32,
    pub attendees: Vec<String>,
    pub seats_taken: u32,
    pub seats_left: u32,
    pub revision: i64,
}

impl From<RosterSnapshot> for GqlRosterSnapshot {
    fn from(v: RosterSnapshot) -> Self {
        Self {
            event_id: ID(v.event_id),
            capacity: v.capacity,
            attendees: v.attendees,
            seats_taken: v.seats_taken,
            seats_left: v.seats_left,
            revision: v.revision,
        }
    }
}

#[derive(Default)]
pub struct EventsQuery;

#[Object]
impl EventsQuery {
    /// Authoritative roster of one event.
    async fn event(&self, context: &Context<'_>, event_id: ID) -> GqlResult<Option<GqlRosterSnapshot>> {
        let state = context.data_unchecked::<AppState>();
        let snapshot = state
            .events_handler
            .roster(&EventId::new(event_id.0))
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(snapshot.map(Into::into))
    }
}

#[derive(Default)]
pub struct EventsMutation;

#[Object]
impl EventsMutation {
    async fn create_event(&self, context: &Context<'_>, capacity: u32) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();
        let event_id = state
            .events_handler
            .create(CreateEvent { capacity })
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(ID(event_id.to_string()))
    }
}
