use crate::shared::core::primitives::EventId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEvent {
    pub capacity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteEvent {
    pub event_id: EventId,
}

impl DeleteEvent {
    pub fn new(event_id: impl Into<EventId>) -> Self {
        Self {
            event_id: event_id.into(),
        }
    }
}
