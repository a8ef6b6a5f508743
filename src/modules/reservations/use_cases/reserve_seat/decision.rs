use crate::modules::reservations::core::record::RosterSnapshot;
use serde::{Deserialize, Serialize};

/// Advisory reason for a reservation that was not admitted.
///
/// Produced by a read taken after the conditional update failed, so it
/// reflects the roster at that later instant. The only authoritative fact is
/// that the user was not admitted by this call.
#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
pub enum RejectionReason {
    #[error("already reserved")]
    AlreadyReserved,

    #[error("event is full")]
    Full,

    #[error("event not found")]
    EventNotFound,

    #[error("could not reserve, the roster changed concurrently")]
    Contended,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReserveOutcome {
    Admitted(RosterSnapshot),
    Rejected(RejectionReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReserveStatus {
    Admitted,
    AlreadyReserved,
    Full,
    EventNotFound,
    Contended,
}

impl ReserveOutcome {
    pub fn status(&self) -> ReserveStatus {
        match self {
            ReserveOutcome::Admitted(_) => ReserveStatus::Admitted,
            ReserveOutcome::Rejected(RejectionReason::AlreadyReserved) => {
                ReserveStatus::AlreadyReserved
            }
            ReserveOutcome::Rejected(RejectionReason::Full) => ReserveStatus::Full,
            ReserveOutcome::Rejected(RejectionReason::EventNotFound) => ReserveStatus::EventNotFound,
            ReserveOutcome::Rejected(RejectionReason::Contended) => ReserveStatus::Contended,
        }
    }

    pub fn is_admitted(&self) -> bool {
        matches!(self, ReserveOutcome::Admitted(_))
    }
}
