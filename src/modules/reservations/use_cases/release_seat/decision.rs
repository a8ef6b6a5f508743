use crate::modules::reservations::core::record::RosterSnapshot;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// The user is not on the roster any more. Also returned when they never were.
    Released(RosterSnapshot),
    EventNotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReleaseStatus {
    Released,
    EventNotFound,
}

impl ReleaseOutcome {
    pub fn status(&self) -> ReleaseStatus {
        match self {
            ReleaseOutcome::Released(_) => ReleaseStatus::Released,
            ReleaseOutcome::EventNotFound => ReleaseStatus::EventNotFound,
        }
    }
}
