use crate::modules::reservations::adapters::outbound::event_records_in_memory::InMemoryEventRecordStore;
use crate::modules::reservations::adapters::outbound::projections_in_memory::InMemoryProjections;
use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
use crate::shell::state::AppState;
use std::sync::Arc;
use std::time::Duration;

pub struct TestApp {
    pub state: AppState,
    pub store: Arc<InMemoryEventRecordStore>,
    pub outbox: Arc<InMemoryDomainOutbox>,
    pub projections: Arc<InMemoryProjections>,
}

pub fn make_test_app() -> TestApp {
    make_test_app_with(InMemoryEventRecordStore::new())
}

/// Wires the application around a pre-configured store, e.g. one toggled offline.
pub fn make_test_app_with(store: InMemoryEventRecordStore) -> TestApp {
    let store = Arc::new(store);
    let outbox = Arc::new(InMemoryDomainOutbox::new());
    let projections = Arc::new(InMemoryProjections::new());
    let state = AppState::new(
        store.clone(),
        outbox.clone(),
        projections.clone(),
        Duration::from_millis(500),
        2,
    );
    TestApp {
        state,
        store,
        outbox,
        projections,
    }
}
