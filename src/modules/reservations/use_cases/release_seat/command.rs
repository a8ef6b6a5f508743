use crate::shared::core::primitives::{EventId, UserId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseSeat {
    pub event_id: EventId,
    pub user_id: UserId,
}

impl ReleaseSeat {
    pub fn new(event_id: impl Into<EventId>, user_id: impl Into<UserId>) -> Self {
        Self {
            event_id: event_id.into(),
            user_id: user_id.into(),
        }
    }
}
