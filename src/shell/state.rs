use crate::modules::reservations::adapters::outbound::event_records_in_memory::InMemoryEventRecordStore;
use crate::modules::reservations::adapters::outbound::projections_in_memory::InMemoryProjections;
use crate::modules::reservations::use_cases::list_reservations_by_user::queries_port::MembershipQueries;
use crate::modules::reservations::use_cases::manage_events::handler::ManageEventsHandler;
use crate::modules::reservations::use_cases::release_seat::handler::ReleaseSeatHandler;
use crate::modules::reservations::use_cases::reserve_seat::handler::ReserveSeatHandler;
use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
use std::sync::Arc;
use std::time::Duration;

pub const ROSTER_TOPIC: &str = "event-rosters.v1";

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn MembershipQueries + Send + Sync>,
    pub reserve_handler: Arc<ReserveSeatHandler<InMemoryEventRecordStore, InMemoryDomainOutbox>>,
    pub release_handler: Arc<ReleaseSeatHandler<InMemoryEventRecordStore, InMemoryDomainOutbox>>,
    pub events_handler: Arc<ManageEventsHandler<InMemoryEventRecordStore>>,
}

impl AppState {
    pub fn new(
        store: Arc<InMemoryEventRecordStore>,
        outbox: Arc<InMemoryDomainOutbox>,
        projections: Arc<InMemoryProjections>,
        store_timeout: Duration,
        reserve_retry_attempts: u32,
    ) -> Self {
        Self {
            queries: projections,
            reserve_handler: Arc::new(ReserveSeatHandler::new(
                ROSTER_TOPIC,
                store.clone(),
                outbox.clone(),
                store_timeout,
                reserve_retry_attempts,
            )),
            release_handler: Arc::new(ReleaseSeatHandler::new(
                ROSTER_TOPIC,
                store.clone(),
                outbox,
                store_timeout,
            )),
            events_handler: Arc::new(ManageEventsHandler::new(store, store_timeout)),
        }
    }
}
